//! Named-event notification.
//!
//! Provides a synchronous publish/subscribe registry keyed by event name.

pub mod notifier;

pub use notifier::{DEFAULT_MAX_LISTENERS, Listener, ListenerId, Notifier};
