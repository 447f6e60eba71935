//! Directory listings. Navigation only needs the names of a page's siblings
//! and whether each one is a directory, so that's all the [`Lister`] trait
//! exposes. [`FsLister`] reads real directories; [`MemoryLister`] serves
//! canned listings.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// One entry of a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    /// The raw file name, extension included.
    pub name: String,

    /// Whether the entry is a subdirectory.
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: &str) -> DirEntry {
        DirEntry {
            name: name.to_owned(),
            is_dir: false,
        }
    }

    pub fn dir(name: &str) -> DirEntry {
        DirEntry {
            name: name.to_owned(),
            is_dir: true,
        }
    }
}

/// Lists the entries of a site directory. `dir` is a directory in
/// [`crate::path::SitePath`] form, e.g. `/` or `/blog`. The order of the
/// returned entries is the order in which they appear in navigation.
pub trait Lister {
    fn list_directory(&self, dir: &str) -> io::Result<Vec<DirEntry>>;
}

/// Lists directories beneath a site root on disk. Entries are sorted by file
/// name so builds are reproducible across file systems.
pub struct FsLister {
    root: PathBuf,
}

impl FsLister {
    pub fn new(root: &Path) -> FsLister {
        FsLister {
            root: root.to_owned(),
        }
    }
}

impl Lister for FsLister {
    fn list_directory(&self, dir: &str) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for result in std::fs::read_dir(self.root.join(dir.trim_start_matches('/')))? {
            let entry = result?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: entry.file_type()?.is_dir(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// Serves listings from memory in insertion order. Listing a directory that
/// was never added fails with [`io::ErrorKind::NotFound`].
#[derive(Default)]
pub struct MemoryLister {
    dirs: HashMap<String, Vec<DirEntry>>,
}

impl MemoryLister {
    pub fn new() -> MemoryLister {
        MemoryLister::default()
    }

    pub fn with_directory<I>(mut self, dir: &str, entries: I) -> MemoryLister
    where
        I: IntoIterator<Item = DirEntry>,
    {
        self.dirs
            .insert(dir.to_owned(), entries.into_iter().collect());
        self
    }
}

impl Lister for MemoryLister {
    fn list_directory(&self, dir: &str) -> io::Result<Vec<DirEntry>> {
        match self.dirs.get(dir) {
            Some(entries) => Ok(entries.clone()),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", dir),
            )),
        }
    }
}
