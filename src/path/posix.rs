//! Pure POSIX path string operations.
//!
//! Nothing here touches the filesystem or process state. Every function is
//! total over `&str` input: the empty string yields `"."`, `""` or an empty
//! [`PathEntry`] rather than an error.
//!
//! Conventions:
//! - `/` is the only separator; runs of separators count as one.
//! - Trailing separators are ignored when picking the final segment, so
//!   `basename("a/b/")` is `"b"`.
//! - Only the last `.` of the final segment starts the extension, and a
//!   leading `.` (dotfiles) or the segment `..` has none.

use super::PathEntry;

/// Path segment separator.
pub const SEP: char = '/';

/// Separator between entries of a `PATH`-style list.
pub const DELIMITER: char = ':';

/// Returns `true` if `path` starts at the root.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEP)
}

/// Final segment of `path`, ignoring trailing separators.
///
/// ```rust
/// use pathcast::path::posix::basename;
///
/// assert_eq!(basename("/srv/app/index.js"), "index.js");
/// assert_eq!(basename("/srv/app/"), "app");
/// assert_eq!(basename("index.js"), "index.js");
/// assert_eq!(basename("/"), "");
/// ```
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEP);
    match trimmed.rfind(SEP) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Like [`basename`], with `suffix` removed when the segment ends with it.
///
/// A segment equal to `suffix` is returned unchanged.
pub fn basename_without<'a>(path: &'a str, suffix: &str) -> &'a str {
    let base = basename(path);
    if !suffix.is_empty() && base != suffix && base.ends_with(suffix) {
        &base[..base.len() - suffix.len()]
    } else {
        base
    }
}

/// Everything before the final segment of `path`.
///
/// Returns `"."` for a relative path with a single segment and `"/"` for an
/// entry directly under the root.
pub fn dirname(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }

    let bytes = path.as_bytes();
    let has_root = bytes[0] == b'/';
    let mut end = None;
    let mut matched_slash = true;
    for i in (1..bytes.len()).rev() {
        if bytes[i] == b'/' {
            if !matched_slash {
                end = Some(i);
                break;
            }
        } else {
            matched_slash = false;
        }
    }

    match end {
        None if has_root => "/",
        None => ".",
        Some(1) if has_root => "//",
        Some(idx) => &path[..idx],
    }
}

/// Extension of the final segment, including the leading `.`.
///
/// ```rust
/// use pathcast::path::posix::extname;
///
/// assert_eq!(extname("index.js"), ".js");
/// assert_eq!(extname("archive.tar.gz"), ".gz");
/// assert_eq!(extname("folder"), "");
/// assert_eq!(extname(".bashrc"), "");
/// assert_eq!(extname("index."), ".");
/// ```
pub fn extname(path: &str) -> &str {
    ext_of_segment(basename(path))
}

fn ext_of_segment(segment: &str) -> &str {
    if segment == ".." {
        return "";
    }
    match segment.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &segment[idx..],
    }
}

/// Decompose `path` into its [`PathEntry`] parts.
pub fn parse(path: &str) -> PathEntry {
    if path.is_empty() {
        return PathEntry::default();
    }

    let root = if is_absolute(path) { "/" } else { "" };
    let trimmed = path.trim_end_matches(SEP);
    if trimmed.is_empty() {
        return PathEntry {
            root: root.to_string(),
            dir: root.to_string(),
            ..PathEntry::default()
        };
    }

    let (dir, base) = match trimmed.rfind(SEP) {
        Some(0) => ("/", &trimmed[1..]),
        Some(idx) => (&trimmed[..idx], &trimmed[idx + 1..]),
        None => ("", trimmed),
    };
    let ext = ext_of_segment(base);
    let name = &base[..base.len() - ext.len()];

    PathEntry {
        root: root.to_string(),
        dir: dir.to_string(),
        base: base.to_string(),
        ext: ext.to_string(),
        name: name.to_string(),
    }
}

/// Recompose a path from a [`PathEntry`].
///
/// `dir` falls back to `root` and `base` falls back to `name` + `ext`, so
/// `dir`/`base` win when both forms are filled in. An `ext` without a
/// leading dot gets one.
pub fn format(entry: &PathEntry) -> String {
    let dir = if entry.dir.is_empty() {
        entry.root.as_str()
    } else {
        entry.dir.as_str()
    };

    let base = if entry.base.is_empty() {
        let dot = if entry.ext.is_empty() || entry.ext.starts_with('.') {
            ""
        } else {
            "."
        };
        format!("{}{}{}", entry.name, dot, entry.ext)
    } else {
        entry.base.clone()
    };

    if dir.is_empty() {
        base
    } else if dir == entry.root {
        format!("{dir}{base}")
    } else {
        format!("{dir}{SEP}{base}")
    }
}

/// Resolve `.` and `..` segments and collapse repeated separators.
///
/// A trailing separator is kept. `..` above the root of an absolute path is
/// dropped; in a relative path it is preserved.
///
/// ```rust
/// use pathcast::path::posix::normalize;
///
/// assert_eq!(normalize("/foo/bar//baz/asdf/quux/.."), "/foo/bar/baz/asdf");
/// assert_eq!(normalize("../a/./b/"), "../a/b/");
/// assert_eq!(normalize(""), ".");
/// ```
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = is_absolute(path);
    let trailing = path.ends_with(SEP);
    let mut normalized = normalize_segments(path, !absolute);

    if normalized.is_empty() {
        if absolute {
            return "/".to_string();
        }
        return if trailing { "./" } else { "." }.to_string();
    }
    if trailing {
        normalized.push(SEP);
    }
    if absolute {
        normalized.insert(0, SEP);
    }
    normalized
}

/// Join `segments` with `/` and normalize the result.
///
/// Empty segments are skipped; joining nothing yields `"."`.
///
/// ```rust
/// use pathcast::path::posix::join;
///
/// assert_eq!(join(["folder1", "folder2", "index.html"]), "folder1/folder2/index.html");
/// assert_eq!(join(["/folder1", "folder2", "index.html"]), "/folder1/folder2/index.html");
/// assert_eq!(join(["a", "./b", "../c"]), "a/c");
/// ```
pub fn join<I>(segments: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(SEP);
        }
        joined.push_str(segment);
    }

    if joined.is_empty() {
        return ".".to_string();
    }
    normalize(&joined)
}

/// Resolve `segments` into an absolute path, anchoring relative input at `cwd`.
///
/// Segments are taken right to left until one is absolute. If none is, `cwd`
/// is prepended, and a relative `cwd` is itself anchored at `/`. The result
/// is normalized and has no trailing separator.
///
/// ```rust
/// use pathcast::path::posix::resolve_from;
///
/// assert_eq!(resolve_from("/home/me", ["folder1", "index.html"]), "/home/me/folder1/index.html");
/// assert_eq!(resolve_from("/home/me", ["/folder1", "folder2"]), "/folder1/folder2");
/// assert_eq!(resolve_from("/home/me", ["/a", "/b", "c"]), "/b/c");
/// ```
pub fn resolve_from<I>(cwd: &str, segments: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let segments: Vec<I::Item> = segments.into_iter().collect();

    let mut parts: Vec<&str> = Vec::new();
    for segment in segments
        .iter()
        .rev()
        .map(|segment| segment.as_ref())
        .chain(std::iter::once(cwd))
    {
        if segment.is_empty() {
            continue;
        }
        parts.push(segment);
        if is_absolute(segment) {
            break;
        }
    }
    parts.reverse();

    let mut resolved = String::from("/");
    resolved.push_str(&normalize_segments(&parts.join("/"), false));
    resolved
}

/// Relative path that leads from `from` to `to`, both resolved against `cwd`.
///
/// Returns `""` when both resolve to the same location.
///
/// ```rust
/// use pathcast::path::posix::relative_from;
///
/// assert_eq!(relative_from("/", "/data/a/b", "/data/c"), "../../c");
/// assert_eq!(relative_from("/srv", "app", "app/static"), "static");
/// assert_eq!(relative_from("/srv", "a", "/srv/a"), "");
/// ```
pub fn relative_from(cwd: &str, from: &str, to: &str) -> String {
    let from = resolve_from(cwd, [from]);
    let to = resolve_from(cwd, [to]);
    if from == to {
        return String::new();
    }

    let from_parts: Vec<&str> = from.split(SEP).filter(|s| !s.is_empty()).collect();
    let to_parts: Vec<&str> = to.split(SEP).filter(|s| !s.is_empty()).collect();
    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out: Vec<&str> = vec![".."; from_parts.len() - common];
    out.extend_from_slice(&to_parts[common..]);
    out.join("/")
}

/// Resolve `.`/`..` and drop empty segments, without a leading separator.
fn normalize_segments(path: &str, allow_above_root: bool) -> String {
    let mut stack: Vec<&str> = Vec::new();
    for segment in path.split(SEP) {
        match segment {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&last) if last != ".." => {
                    stack.pop();
                }
                _ if allow_above_root => stack.push(".."),
                _ => {}
            },
            other => stack.push(other),
        }
    }
    stack.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename() {
        assert_eq!(basename("/home/user/file.txt"), "file.txt");
        assert_eq!(basename("/home/user/dir/"), "dir");
        assert_eq!(basename("/home/user/dir///"), "dir");
        assert_eq!(basename("file"), "file");
        assert_eq!(basename(""), "");
        assert_eq!(basename("///"), "");
    }

    #[test]
    fn test_basename_without() {
        assert_eq!(basename_without("/a/index.html", ".html"), "index");
        assert_eq!(basename_without("/a/index.html", ".js"), "index.html");
        assert_eq!(basename_without("aaa/bbb", "bbb"), "bbb");
        assert_eq!(basename_without("aaa/bbb", ""), "bbb");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("/a/b/c"), "/a/b");
        assert_eq!(dirname("/a/b/c/"), "/a/b");
        assert_eq!(dirname("/a"), "/");
        assert_eq!(dirname("a"), ".");
        assert_eq!(dirname(""), ".");
        assert_eq!(dirname("/"), "/");
        assert_eq!(dirname("a/b"), "a");
    }

    #[test]
    fn test_extname() {
        assert_eq!(extname("index.js"), ".js");
        assert_eq!(extname("folder"), "");
        assert_eq!(extname("/a.b/c"), "");
        assert_eq!(extname("a.tar.gz"), ".gz");
        assert_eq!(extname(".profile"), "");
        assert_eq!(extname(".profile.sh"), ".sh");
        assert_eq!(extname(".."), "");
        assert_eq!(extname("..."), ".");
        assert_eq!(extname("index.js/"), ".js");
        assert_eq!(extname(""), "");
    }

    #[test]
    fn test_parse_absolute_file() {
        let entry = parse("/home/user/dir/file.txt");
        assert_eq!(entry.root, "/");
        assert_eq!(entry.dir, "/home/user/dir");
        assert_eq!(entry.base, "file.txt");
        assert_eq!(entry.ext, ".txt");
        assert_eq!(entry.name, "file");
    }

    #[test]
    fn test_parse_relative_and_edges() {
        let entry = parse("file");
        assert_eq!(entry.root, "");
        assert_eq!(entry.dir, "");
        assert_eq!(entry.name, "file");

        let entry = parse("/file.txt");
        assert_eq!(entry.dir, "/");

        let entry = parse("/");
        assert_eq!(entry.root, "/");
        assert_eq!(entry.dir, "/");
        assert_eq!(entry.base, "");

        assert_eq!(parse(""), PathEntry::default());

        let entry = parse("./.env");
        assert_eq!(entry.dir, ".");
        assert_eq!(entry.ext, "");
        assert_eq!(entry.name, ".env");
    }

    #[test]
    fn test_format_precedence() {
        let entry = PathEntry {
            root: "/ignored".to_string(),
            dir: "/home/user".to_string(),
            base: "file.txt".to_string(),
            ext: ".md".to_string(),
            name: "other".to_string(),
        };
        assert_eq!(format(&entry), "/home/user/file.txt");

        let entry = PathEntry {
            root: "/".to_string(),
            name: "file".to_string(),
            ext: "txt".to_string(),
            ..PathEntry::default()
        };
        assert_eq!(format(&entry), "/file.txt");

        assert_eq!(format(&PathEntry::default()), "");
    }

    #[test]
    fn test_format_parse_roundtrip_examples() {
        for path in ["/home/user/file.txt", "file.txt", "/a", "a/b/c", "/", ".", "a//b"] {
            assert_eq!(format(&parse(path)), path, "roundtrip of {path:?}");
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/foo/bar//baz/asdf/quux/.."), "/foo/bar/baz/asdf");
        assert_eq!(normalize("a/../.."), "..");
        assert_eq!(normalize("/../a"), "/a");
        assert_eq!(normalize("./"), "./");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("a/./b/"), "a/b/");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(["/folder1", "folder2", "index.html"]), "/folder1/folder2/index.html");
        assert_eq!(join(["a", "b", "c.txt"]), "a/b/c.txt");
        assert_eq!(join(["a/", "/b"]), "a/b");
        assert_eq!(join(["", ""]), ".");
        assert_eq!(join(Vec::<String>::new()), ".");
    }

    #[test]
    fn test_resolve_from() {
        assert_eq!(resolve_from("/cwd", ["a", "b"]), "/cwd/a/b");
        assert_eq!(
            resolve_from("/cwd", ["/folder1", "folder2", "index.html"]),
            "/folder1/folder2/index.html"
        );
        assert_eq!(resolve_from("/cwd", ["a/", "../b/"]), "/cwd/b");
        assert_eq!(resolve_from("/cwd", Vec::<&str>::new()), "/cwd");
        assert_eq!(resolve_from("relative", ["x"]), "/relative/x");
        assert_eq!(resolve_from("", ["x"]), "/x");
        assert_eq!(resolve_from("/", [".."]), "/");
    }

    #[test]
    fn test_relative_from() {
        assert_eq!(relative_from("/", "/a/b", "/a/b/c/d"), "c/d");
        assert_eq!(relative_from("/", "/a/b/c", "/a"), "../..");
        assert_eq!(relative_from("/", "/", "/a"), "a");
        assert_eq!(relative_from("/", "/a", "/a"), "");
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/index.js"));
        assert!(!is_absolute("../index.js"));
        assert!(!is_absolute(""));
    }
}
