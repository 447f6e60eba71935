//! Defines the [`SitePath`] type, the identity of a source document within the
//! site, and the slash arithmetic on top of it.

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// The path of a source file relative to the site root. A [`SitePath`] always
/// starts with a `/` and uses `/` as its separator regardless of platform,
/// e.g., `/blog/post_one.md`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SitePath(String);

impl SitePath {
    /// Builds a [`SitePath`] from a slash-separated string. Empty and `.`
    /// segments are dropped and a leading `/` is added if it's missing, so
    /// `blog//./post.md` and `/blog/post.md` are the same path.
    pub fn new(path: &str) -> SitePath {
        let mut normalized = String::with_capacity(path.len() + 1);
        for segment in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
            normalized.push('/');
            normalized.push_str(segment);
        }
        if normalized.is_empty() {
            normalized.push('/');
        }
        SitePath(normalized)
    }

    /// Builds a [`SitePath`] from a platform path relative to the site root
    /// (e.g., the result of stripping the source directory from a walked
    /// entry). Fails if the path escapes the root, is absolute, or isn't valid
    /// UTF-8.
    pub fn from_relative(relative: &Path) -> Result<SitePath, InvalidPathError> {
        let mut normalized = String::new();
        for component in relative.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(segment) => {
                    let segment = segment
                        .to_str()
                        .ok_or_else(|| InvalidPathError(relative.to_owned()))?;
                    normalized.push('/');
                    normalized.push_str(segment);
                }
                _ => return Err(InvalidPathError(relative.to_owned())),
            }
        }
        if normalized.is_empty() {
            normalized.push('/');
        }
        Ok(SitePath(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last segment of the path, e.g. `post_one.md` for
    /// `/blog/post_one.md`.
    pub fn file_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(i) => &self.0[i + 1..],
            None => &self.0,
        }
    }

    /// The directory portion of the path, e.g. `/blog` for
    /// `/blog/post_one.md` and `/` for `/index.md`.
    pub fn dir(&self) -> &str {
        match self.0.rfind('/') {
            Some(0) | None => "/",
            Some(i) => &self.0[..i],
        }
    }

    /// Returns `true` if the document lives directly in the site root.
    pub fn is_root_level(&self) -> bool {
        self.dir() == "/"
    }

    /// The number of directory levels between the site root and the
    /// document's directory: 0 for `/index.md`, 1 for `/blog/post.md`.
    pub fn depth(&self) -> usize {
        match self.is_root_level() {
            true => 0,
            false => self.dir().matches('/').count(),
        }
    }
}

impl fmt::Display for SitePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Drops the last trailing dot-extension from a file name: `post.md` becomes
/// `post` and `archive.tar.gz` becomes `archive.tar`. A leading dot doesn't
/// start an extension, so `.hidden` is returned unchanged while
/// `.hidden.md` becomes `.hidden`.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(i) if i > 0 => &file_name[..i],
        _ => file_name,
    }
}

/// Returned when a platform path can't be expressed as a [`SitePath`].
#[derive(Debug)]
pub struct InvalidPathError(PathBuf);

impl fmt::Display for InvalidPathError {
    /// Displays an [`InvalidPathError`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid site path: {:?}", &self.0)
    }
}

impl std::error::Error for InvalidPathError {
    /// Implements the [`std::error::Error`] trait for [`InvalidPathError`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}
