//! # pathcast
//!
//! A synchronous named-event notifier and pure POSIX path inspection.
//!
//! ## Overview
//!
//! `pathcast` provides two independent components:
//! - [`Notifier`](notify::Notifier): a publish/subscribe registry keyed by
//!   event name, delivering positional `serde_json::Value` arguments to
//!   listeners in registration order
//! - [`PathInspector`](path::PathInspector): decomposition (`basename`,
//!   `extname`, `parse`) and recomposition (`format`, `join`, `resolve`) of
//!   POSIX path strings without touching the filesystem
//!
//! ## Quick Start
//!
//! ```rust
//! use pathcast::prelude::*;
//! use serde_json::json;
//!
//! # fn main() -> pathcast::error::Result<()> {
//! let notifier = Notifier::new();
//! notifier.subscribe("order-soap", |args| {
//!     println!("ordered {} of total: {}", args[0], args[1]);
//! });
//! notifier.publish("order-soap", &[json!("mysoorsandle"), json!(10)]);
//!
//! let paths = PathInspector::with_cwd("/home/me");
//! let entry = paths.parse("/srv/app/index.js");
//! assert_eq!(entry.ext, ".js");
//! assert_eq!(paths.format(&entry), "/srv/app/index.js");
//! assert_eq!(paths.resolve(["data.json"])?, "/home/me/data.json");
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! Settings file formats are selected with the `yaml`, `toml` and `json`
//! features, all enabled by default.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod error;
pub mod logging;
pub mod notify;
pub mod path;
pub mod settings;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::error::{Error, Result, ValidationError};
    pub use crate::notify::{ListenerId, Notifier};
    pub use crate::path::{Cwd, PathEntry, PathInspector};
    pub use crate::settings::{Settings, SettingsLoader, Validate};
}
