//! Decomposed path representation.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A path split into its parts.
///
/// For `/home/user/notes.txt`:
///
/// | field  | value          |
/// |--------|----------------|
/// | `root` | `/`            |
/// | `dir`  | `/home/user`   |
/// | `base` | `notes.txt`    |
/// | `ext`  | `.txt`         |
/// | `name` | `notes`        |
///
/// `Display` recomposes the path with [`format`](super::posix::format).
///
/// # Examples
///
/// ```rust
/// use pathcast::path::PathEntry;
///
/// let entry = PathEntry::parse("/home/user/notes.txt");
/// assert_eq!(entry.name, "notes");
/// assert_eq!(entry.to_string(), "/home/user/notes.txt");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PathEntry {
    /// `/` for absolute paths, empty otherwise.
    pub root: String,
    /// Everything before the final separator.
    pub dir: String,
    /// Final segment, extension included.
    pub base: String,
    /// Extension of `base`, leading dot included.
    pub ext: String,
    /// `base` without `ext`.
    pub name: String,
}

impl PathEntry {
    /// Decompose `path`.
    pub fn parse(path: &str) -> Self {
        super::posix::parse(path)
    }

    /// Recompose the path this entry describes.
    pub fn format(&self) -> String {
        super::posix::format(self)
    }

    /// Returns `true` if the entry has a root.
    pub fn is_absolute(&self) -> bool {
        !self.root.is_empty()
    }
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for PathEntry {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for PathEntry {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}
