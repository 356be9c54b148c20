//! Bottom-up tree rewrite
//!
//! Walks a directory tree in post-order (every directory after its contents)
//! and dispatches a rename for each node whose name is invalid. Renaming
//! children while their ancestors still carry their original names keeps every
//! path discovered by the walk valid for the whole pass.

pub mod rewrite;
pub mod walker;

pub use rewrite::{CollisionPolicy, Rewriter};
pub use walker::{Entry, Walker, WalkerConfig};
