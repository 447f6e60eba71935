//! Builds the navigation list shown on every page: links to the directory's
//! index, to the parent directory's index, and to each sibling document or
//! subdirectory.

use crate::config::SiteConfig;
use crate::listing::Lister;
use crate::path::{strip_extension, SitePath};
use std::fmt;
use std::io;

/// The file name of a directory's landing page.
pub const INDEX_DOCUMENT: &str = "index.md";

/// Siblings whose name (less extension) is `index` never get an entry; the
/// `.` entry already points at them.
const INDEX_NAME: &str = "index";

/// One link in a page's navigation list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    /// The link text: the sibling's name with underscores replaced by spaces.
    pub name: String,

    /// The link target, relative to the page's directory.
    pub link: String,

    /// Whether the entry points at the page being rendered.
    pub current: bool,
}

impl NavEntry {
    fn synthetic(name: &str, link: &str) -> NavEntry {
        NavEntry {
            name: name.to_owned(),
            link: link.to_owned(),
            current: false,
        }
    }
}

/// Builds the navigation list for the document at `path`. The list is:
///
/// 1. `.` (the directory's `index.html`) unless the document is itself
///    `index.md`;
/// 2. `..` (the parent's `index.html`) unless the document is in the site
///    root;
/// 3. one entry per sibling in the order `lister` returns them, skipping
///    `index` and any blacklisted names.
pub fn build_nav<L: Lister + ?Sized>(
    config: &SiteConfig,
    path: &SitePath,
    lister: &L,
) -> Result<Vec<NavEntry>> {
    let mut nav = Vec::new();

    if path.file_name() != INDEX_DOCUMENT {
        nav.push(NavEntry::synthetic(".", "index.html"));
    }
    if !path.is_root_level() {
        nav.push(NavEntry::synthetic("..", "../index.html"));
    }

    let dir = path.dir();
    let siblings = lister
        .list_directory(dir)
        .map_err(|err| Error::ListDirectory {
            dir: dir.to_owned(),
            err,
        })?;

    for sibling in siblings {
        let name = match sibling.is_dir {
            true => sibling.name.as_str(),
            false => strip_extension(&sibling.name),
        };

        if is_blacklisted(name, config) {
            continue;
        }

        nav.push(NavEntry {
            name: name.replace('_', " "),
            link: match sibling.is_dir {
                true => format!("{}/index.html", name),
                false => format!("{}.html", name),
            },
            current: sibling.name == path.file_name(),
        });
    }

    Ok(nav)
}

fn is_blacklisted(name: &str, config: &SiteConfig) -> bool {
    name == INDEX_NAME || config.blacklist.contains(name)
}

/// The result of a fallible navigation operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error building a navigation list.
#[derive(Debug)]
pub enum Error {
    /// Returned when the document's directory can't be listed.
    ListDirectory { dir: String, err: io::Error },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ListDirectory { dir, err } => {
                write!(f, "Listing directory `{}`: {}", dir, err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ListDirectory { err, .. } => Some(err),
        }
    }
}
