//! Path operations bound to a working directory.

use super::{PathEntry, posix};
use crate::error::{Error, Result};

/// Base directory that relative paths are resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cwd {
    /// Read the process working directory each time it is needed.
    #[default]
    Process,
    /// Use a fixed directory.
    Fixed(String),
}

impl Cwd {
    /// Current value of this working directory.
    ///
    /// # Errors
    ///
    /// For [`Cwd::Process`], returns an error if the working directory cannot
    /// be read or is not valid UTF-8.
    pub fn current(&self) -> Result<String> {
        match self {
            Self::Fixed(dir) => Ok(dir.clone()),
            Self::Process => {
                let dir = std::env::current_dir()?;
                let dir = dir
                    .into_os_string()
                    .into_string()
                    .map_err(|raw| Error::NonUtf8Path(raw.into()))?;
                tracing::trace!(cwd = %dir, "read process working directory");
                Ok(dir)
            }
        }
    }
}

/// Decomposes and recomposes POSIX path strings.
///
/// Every method except [`resolve`](Self::resolve) and
/// [`relative`](Self::relative) is a pure string operation. Those two anchor
/// relative input at the inspector's [`Cwd`], which can be fixed for
/// deterministic results.
///
/// # Examples
///
/// ```rust
/// use pathcast::path::PathInspector;
///
/// # fn main() -> pathcast::error::Result<()> {
/// let inspector = PathInspector::with_cwd("/home/me/project");
///
/// assert_eq!(inspector.basename("/srv/app/index.js"), "index.js");
/// assert_eq!(inspector.extname("index.js"), ".js");
/// assert_eq!(
///     inspector.join(["/folder1", "folder2", "index.html"]),
///     "/folder1/folder2/index.html"
/// );
/// assert_eq!(inspector.resolve(["data.json"])?, "/home/me/project/data.json");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathInspector {
    cwd: Cwd,
}

impl PathInspector {
    /// Create an inspector that resolves against the process working directory.
    pub fn new() -> Self {
        Self { cwd: Cwd::Process }
    }

    /// Create an inspector that resolves against `cwd`.
    pub fn with_cwd(cwd: impl Into<String>) -> Self {
        Self {
            cwd: Cwd::Fixed(cwd.into()),
        }
    }

    /// The working directory this inspector resolves against.
    pub fn cwd(&self) -> &Cwd {
        &self.cwd
    }

    /// See [`posix::basename`].
    pub fn basename<'a>(&self, path: &'a str) -> &'a str {
        posix::basename(path)
    }

    /// See [`posix::basename_without`].
    pub fn basename_without<'a>(&self, path: &'a str, suffix: &str) -> &'a str {
        posix::basename_without(path, suffix)
    }

    /// See [`posix::dirname`].
    pub fn dirname<'a>(&self, path: &'a str) -> &'a str {
        posix::dirname(path)
    }

    /// See [`posix::extname`].
    pub fn extname<'a>(&self, path: &'a str) -> &'a str {
        posix::extname(path)
    }

    /// See [`posix::parse`].
    pub fn parse(&self, path: &str) -> PathEntry {
        posix::parse(path)
    }

    /// See [`posix::format`].
    pub fn format(&self, entry: &PathEntry) -> String {
        posix::format(entry)
    }

    /// See [`posix::is_absolute`].
    pub fn is_absolute(&self, path: &str) -> bool {
        posix::is_absolute(path)
    }

    /// See [`posix::normalize`].
    pub fn normalize(&self, path: &str) -> String {
        posix::normalize(path)
    }

    /// See [`posix::join`].
    pub fn join<I>(&self, segments: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        posix::join(segments)
    }

    /// Resolve `segments` into an absolute, normalized path.
    ///
    /// Relative input is anchored at this inspector's [`Cwd`].
    ///
    /// # Errors
    ///
    /// Returns an error only when the process working directory has to be
    /// read and cannot be.
    pub fn resolve<I>(&self, segments: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let segments: Vec<I::Item> = segments.into_iter().collect();
        if segments.iter().any(|s| posix::is_absolute(s.as_ref())) {
            // An absolute segment makes the working directory irrelevant.
            return Ok(posix::resolve_from("/", segments));
        }
        let cwd = self.cwd.current()?;
        Ok(posix::resolve_from(&cwd, segments))
    }

    /// Relative path from `from` to `to` after resolving both.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    pub fn relative(&self, from: &str, to: &str) -> Result<String> {
        if posix::is_absolute(from) && posix::is_absolute(to) {
            return Ok(posix::relative_from("/", from, to));
        }
        let cwd = self.cwd.current()?;
        Ok(posix::relative_from(&cwd, from, to))
    }
}
