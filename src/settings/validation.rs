//! Settings validation support.

use crate::error::ValidationError;

/// Checks that run on settings after they deserialize.
///
/// [`SettingsLoader::load`](super::SettingsLoader::load) calls this on the
/// merged [`Settings`](super::Settings) and turns a failure into
/// [`Error::Validation`](crate::error::Error::Validation).
///
/// # Examples
///
/// ```rust
/// use pathcast::settings::Validate;
/// use pathcast::error::ValidationError;
///
/// struct Limits {
///     max_listeners: usize,
/// }
///
/// impl Validate for Limits {
///     fn validate(&self) -> Result<(), ValidationError> {
///         if self.max_listeners > 1_000 {
///             return Err(ValidationError::field("max_listeners", "must be at most 1000"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validate {
    /// # Errors
    ///
    /// Returns the problem found, or [`ValidationError::Several`] when more
    /// than one setting is wrong.
    fn validate(&self) -> Result<(), ValidationError>;
}
