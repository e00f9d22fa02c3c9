//! POSIX path decomposition and recomposition.
//!
//! [`posix`] holds the pure string functions; [`PathInspector`] exposes them
//! together with a working directory for `resolve` and `relative`.

mod entry;
mod inspector;
pub mod posix;

pub use entry::PathEntry;
pub use inspector::{Cwd, PathInspector};
