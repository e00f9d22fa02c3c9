//! Settings for the demonstrations and for building configured components.
//!
//! Values are layered with the `config` crate: built-in defaults, then
//! optional YAML/TOML/JSON files, then `PATHCAST_*` environment variables.

mod loader;
mod validation;

pub use loader::{ENV_PREFIX, ENV_SEPARATOR, SettingsLoader};
pub use validation::Validate;

use crate::error::ValidationError;
use crate::notify::Notifier;
use crate::path::{PathInspector, posix};
use serde::{Deserialize, Serialize};

pub use crate::notify::DEFAULT_MAX_LISTENERS;

/// Log filter used when neither settings nor `RUST_LOG` provide one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Path of the "current script" that the path demonstration inspects.
    pub script_path: String,
    /// Working directory override for path resolution.
    #[serde(default)]
    pub cwd: Option<String>,
    /// Listener count per event above which the notifier logs a warning.
    #[serde(default = "default_max_listeners")]
    pub max_listeners: usize,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_max_listeners() -> usize {
    DEFAULT_MAX_LISTENERS
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Settings {
    /// Start building settings.
    pub fn loader() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Path inspector resolving against the `cwd` override, or the process
    /// working directory when none is set.
    pub fn inspector(&self) -> PathInspector {
        match &self.cwd {
            Some(cwd) => PathInspector::with_cwd(cwd.clone()),
            None => PathInspector::new(),
        }
    }

    /// Notifier configured with `max_listeners`.
    pub fn notifier(&self) -> Notifier {
        Notifier::new().with_max_listeners(self.max_listeners)
    }

    /// Directory containing `script_path`.
    pub fn script_dir(&self) -> &str {
        posix::dirname(&self.script_path)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if self.script_path.trim().is_empty() {
            errors.push(ValidationError::field("script_path", "must not be empty"));
        }
        if let Some(cwd) = &self.cwd {
            if !posix::is_absolute(cwd) {
                errors.push(ValidationError::field(
                    "cwd",
                    format!("must be an absolute path, got '{}'", cwd),
                ));
            }
        }

        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(ValidationError::Several(errors)),
        }
    }
}
