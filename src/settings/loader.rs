//! Layered settings loading.

use super::{Settings, Validate};
use crate::error::{Error, Result, ValidationError};
use config::{Config, Environment, File};
use std::path::PathBuf;
use std::sync::Arc;

/// Default environment variable prefix.
pub const ENV_PREFIX: &str = "PATHCAST";

/// Default separator for nested keys in environment variables.
pub const ENV_SEPARATOR: &str = "__";

/// Type alias for extra validator functions.
type Validator = Arc<dyn Fn(&Settings) -> std::result::Result<(), ValidationError> + Send + Sync>;

/// Builder that loads [`Settings`] from defaults, files and the environment.
///
/// Precedence, lowest first:
/// 1. built-in defaults (and [`with_script_path`](Self::with_script_path)),
/// 2. files, in the order they were added,
/// 3. environment variables (`PATHCAST_MAX_LISTENERS=20`, by default).
///
/// # Examples
///
/// ```rust,no_run
/// use pathcast::settings::SettingsLoader;
///
/// # fn example() -> pathcast::error::Result<()> {
/// let settings = SettingsLoader::new()
///     .with_script_path("/srv/app/demo.rs")
///     .with_file("pathcast.yaml")
///     .load()?;
/// println!("max listeners: {}", settings.max_listeners);
/// # Ok(())
/// # }
/// ```
pub struct SettingsLoader {
    script_path: Option<String>,
    files: Vec<PathBuf>,
    env: Option<(String, String)>,
    validators: Vec<Validator>,
}

impl SettingsLoader {
    /// Create a loader reading `PATHCAST_*` environment variables.
    pub fn new() -> Self {
        Self {
            script_path: None,
            files: Vec::new(),
            env: Some((ENV_PREFIX.to_string(), ENV_SEPARATOR.to_string())),
            validators: Vec::new(),
        }
    }

    /// Default `script_path`, used unless a file or the environment sets one.
    pub fn with_script_path(mut self, path: impl Into<String>) -> Self {
        self.script_path = Some(path.into());
        self
    }

    /// Add a settings file. Format is detected from the extension
    /// (`.yaml`/`.yml`, `.toml`, `.json`).
    ///
    /// Later files override earlier ones.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Read environment overrides with a custom prefix and separator.
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.env = Some((prefix.to_string(), separator.to_string()));
        self
    }

    /// Ignore the environment entirely.
    pub fn without_env(mut self) -> Self {
        self.env = None;
        self
    }

    /// Add a validation function that runs after [`Settings::validate`].
    pub fn with_validation<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Settings) -> std::result::Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Load, deserialize and validate the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A settings file is missing, has an unsupported extension, or is malformed
    /// - The merged values do not deserialize into [`Settings`]
    /// - Validation fails
    pub fn load(self) -> Result<Settings> {
        let mut builder = Config::builder()
            .set_default("max_listeners", super::DEFAULT_MAX_LISTENERS as i64)
            .and_then(|b| b.set_default("log_filter", super::DEFAULT_LOG_FILTER))
            .map_err(|e| Error::Load(format!("Failed to set defaults: {}", e)))?;

        if let Some(script_path) = &self.script_path {
            builder = builder
                .set_default("script_path", script_path.as_str())
                .map_err(|e| Error::Load(format!("Failed to set defaults: {}", e)))?;
        }

        for path in &self.files {
            validate_extension(path)?;
            if !path.exists() {
                return Err(Error::Load(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            tracing::debug!(file = %path.display(), "adding settings file");
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        if let Some((prefix, separator)) = &self.env {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator(separator)
                    .try_parsing(true),
            );
        }

        let config = builder
            .build()
            .map_err(|e| Error::Load(format!("Failed to build settings: {}", e)))?;

        let settings: Settings = config.try_deserialize().map_err(|e| {
            Error::Deserialization(format!("Failed to deserialize settings: {}", e))
        })?;

        settings.validate()?;
        for validator in &self.validators {
            validator(&settings)?;
        }

        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings file extensions this build can parse, per enabled format feature.
const FORMATS: [(&str, bool); 4] = [
    ("yaml", cfg!(feature = "yaml")),
    ("yml", cfg!(feature = "yaml")),
    ("toml", cfg!(feature = "toml")),
    ("json", cfg!(feature = "json")),
];

/// Reject settings files whose format is not compiled in.
fn validate_extension(path: &std::path::Path) -> Result<()> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
    if FORMATS.iter().any(|&(ext, enabled)| enabled && ext == extension) {
        return Ok(());
    }

    let enabled: Vec<_> =
        FORMATS.iter().filter(|&&(_, on)| on).map(|&(ext, _)| format!(".{ext}")).collect();
    Err(Error::Load(format!(
        "{} has no readable settings format (this build reads: {})",
        path.display(),
        if enabled.is_empty() { "nothing".to_string() } else { enabled.join(" ") }
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_extension() {
        let accepts = |name: &str| validate_extension(std::path::Path::new(name)).is_ok();

        assert_eq!(accepts("settings.yaml"), cfg!(feature = "yaml"));
        assert_eq!(accepts("settings.yml"), cfg!(feature = "yaml"));
        assert_eq!(accepts("settings.toml"), cfg!(feature = "toml"));
        assert_eq!(accepts("settings.json"), cfg!(feature = "json"));
        assert!(!accepts("settings.txt"));
        assert!(!accepts("settings"));
    }

    #[test]
    fn test_rejected_extension_names_enabled_formats() {
        let err = validate_extension(std::path::Path::new("/etc/app.ini")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/etc/app.ini"));
        assert_eq!(msg.contains(".toml"), cfg!(feature = "toml"));
        assert_eq!(msg.contains(".json"), cfg!(feature = "json"));
    }

    #[test]
    fn test_defaults_only() {
        let settings = SettingsLoader::new()
            .without_env()
            .with_script_path("/srv/demo.rs")
            .load()
            .unwrap();

        assert_eq!(settings.script_path, "/srv/demo.rs");
        assert_eq!(settings.cwd, None);
        assert_eq!(settings.max_listeners, super::super::DEFAULT_MAX_LISTENERS);
        assert_eq!(settings.log_filter, super::super::DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_missing_script_path_fails_deserialization() {
        let result = SettingsLoader::new().without_env().load();
        assert!(matches!(result, Err(Error::Deserialization(_))));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "max_listeners = 3\ncwd = \"/work\"\n").unwrap();

        let settings = SettingsLoader::new()
            .without_env()
            .with_script_path("/srv/demo.rs")
            .with_file(&path)
            .load()
            .unwrap();

        assert_eq!(settings.max_listeners, 3);
        assert_eq!(settings.cwd.as_deref(), Some("/work"));
        assert_eq!(settings.script_path, "/srv/demo.rs");
    }

    #[test]
    fn test_missing_file() {
        let result = SettingsLoader::new()
            .without_env()
            .with_script_path("/srv/demo.rs")
            .with_file("/nonexistent/settings.yaml")
            .load();
        assert!(matches!(result, Err(Error::Load(_))));
    }

    #[test]
    fn test_extra_validator_rejects() {
        let result = SettingsLoader::new()
            .without_env()
            .with_script_path("/srv/demo.rs")
            .with_validation(|settings| {
                if settings.max_listeners > 5 {
                    return Err(ValidationError::field("max_listeners", "must be <= 5"));
                }
                Ok(())
            })
            .load();
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}
