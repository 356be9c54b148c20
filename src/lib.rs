//! rmchars: Recursively remove invalid characters from path names
//!
//! Walks a directory tree bottom-up and renames every file or directory whose
//! name holds characters that common filesystems reject, or characters from
//! the Other_Letter, Other_Symbol and Control Unicode categories.

pub mod action;
pub mod cli;
pub mod config;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod report;
pub mod sanitize;
pub mod tree;
