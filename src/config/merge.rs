//! Merge ordering for layered configuration.

pub mod merge_policy;
