//! Name sanitization
//!
//! Decides whether a file or directory basename contains characters that are
//! invalid on common filesystems, and computes the cleaned replacement name.
//! Everything here is pure: no filesystem access beyond path joining.

pub mod charset;
pub mod classifier;
pub mod path;

pub use charset::{CharSet, Platform};
pub use classifier::Classifier;
pub use path::{resolve_paths, PathPair};
