//! Exports the [`build_site`] function which mirrors a source directory into an
//! output directory: directories are created, Markdown documents are rendered
//! into HTML pages ([`crate::page`], [`crate::template`]) and every other file
//! is copied as-is.

use crate::config::Site;
use crate::listing::FsLister;
use crate::nav::Error as NavError;
use crate::page::render_page;
use crate::path::{InvalidPathError, SitePath};
use crate::template::{Error as TemplateError, PageTemplate};
use log::{debug, info};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// The extension of source documents which are rendered into pages.
pub const MARKDOWN_EXTENSION: &str = "md";

/// The extension given to rendered pages.
pub const HTML_EXTENSION: &str = "html";

/// Counts of what a build produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub directories: usize,
    pub pages: usize,
    pub copied: usize,
}

/// Walks the source tree and writes the output tree.
pub struct Builder<'a> {
    /// The config and style sheet shared by all pages.
    pub site: &'a Site,

    /// The template every page is rendered into.
    pub template: &'a PageTemplate,

    /// The root of the source tree.
    pub source_directory: &'a Path,

    /// The root of the output tree. Existing files are overwritten; nothing
    /// is deleted.
    pub output_directory: &'a Path,
}

impl Builder<'_> {
    /// Mirrors the source tree into the output tree. Entries are visited in
    /// file-name order, and a directory is always created before anything
    /// beneath it is written. The first failure aborts the build.
    pub fn build(&self) -> Result<Summary> {
        let lister = FsLister::new(self.source_directory);
        let mut summary = Summary::default();

        for result in WalkDir::new(self.source_directory)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()))
        {
            let entry = result?;
            let relative = entry
                .path()
                .strip_prefix(self.source_directory)
                .map_err(|_| Error::OutsideSource(entry.path().to_owned()))?;
            let dst = self.output_directory.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dst).map_err(|err| Error::CreateDirectory {
                    path: dst.clone(),
                    err,
                })?;
                summary.directories += 1;
            } else if is_markdown(&entry) {
                self.build_page(&lister, &entry, relative, &dst)?;
                summary.pages += 1;
            } else {
                debug!("copying {}", relative.display());
                std::fs::copy(entry.path(), &dst).map_err(|err| Error::Copy {
                    src: entry.path().to_owned(),
                    dst: dst.clone(),
                    err,
                })?;
                summary.copied += 1;
            }
        }

        Ok(summary)
    }

    fn build_page(
        &self,
        lister: &FsLister,
        entry: &DirEntry,
        relative: &Path,
        dst: &Path,
    ) -> Result<()> {
        match self._build_page(lister, entry, relative, dst) {
            Ok(()) => Ok(()),
            Err(e) => Err(Error::Annotated(
                format!("rendering `{}`", entry.path().display()),
                Box::new(e),
            )),
        }
    }

    fn _build_page(
        &self,
        lister: &FsLister,
        entry: &DirEntry,
        relative: &Path,
        dst: &Path,
    ) -> Result<()> {
        let site_path = SitePath::from_relative(relative)?;
        let markdown = std::fs::read(entry.path()).map_err(|err| Error::Read {
            path: entry.path().to_owned(),
            err,
        })?;
        let page = render_page(self.site, &site_path, &markdown, lister)?;

        let dst = dst.with_extension(HTML_EXTENSION);
        debug!("rendering {} to {}", site_path, dst.display());
        let write_err = |err| Error::Write {
            path: dst.clone(),
            err,
        };
        let mut w = BufWriter::new(File::create(&dst).map_err(write_err)?);
        self.template.render(&mut w, &page)?;
        w.flush().map_err(write_err)?;
        Ok(())
    }
}

fn is_markdown(entry: &DirEntry) -> bool {
    entry.path().extension().and_then(|ext| ext.to_str()) == Some(MARKDOWN_EXTENSION)
}

/// Builds the site from `source_directory` into `output_directory`. See
/// [`Builder::build`].
pub fn build_site(
    site: &Site,
    template: &PageTemplate,
    source_directory: &Path,
    output_directory: &Path,
) -> Result<Summary> {
    let summary = Builder {
        site,
        template,
        source_directory,
        output_directory,
    }
    .build()?;
    info!(
        "built {} pages, copied {} files into {} directories",
        summary.pages, summary.copied, summary.directories
    );
    Ok(summary)
}

/// The result of a fallible build operation.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Any error aborts the build; output
/// written before the failure is left in place.
#[derive(Debug)]
pub enum Error {
    /// Returned when the source tree can't be walked.
    Walk(walkdir::Error),

    /// Returned when a walked entry isn't beneath the source directory.
    OutsideSource(PathBuf),

    /// Returned when an output directory can't be created.
    CreateDirectory { path: PathBuf, err: std::io::Error },

    /// Returned when a source document can't be read.
    Read { path: PathBuf, err: std::io::Error },

    /// Returned when a plain file can't be copied.
    Copy {
        src: PathBuf,
        dst: PathBuf,
        err: std::io::Error,
    },

    /// Returned when a rendered page can't be written.
    Write { path: PathBuf, err: std::io::Error },

    /// Returned when a source path can't be expressed as a site path.
    InvalidPath(InvalidPathError),

    /// Returned when a page's navigation can't be built.
    Nav(NavError),

    /// Returned when a page can't be templated.
    Template(TemplateError),

    /// An error with an annotation.
    Annotated(String, Box<Error>),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Walk(err) => write!(f, "{}", err),
            Error::OutsideSource(path) => {
                write!(f, "'{}' is outside the source directory", path.display())
            }
            Error::CreateDirectory { path, err } => {
                write!(f, "Creating directory '{}': {}", path.display(), err)
            }
            Error::Read { path, err } => {
                write!(f, "Reading source file '{}': {}", path.display(), err)
            }
            Error::Copy { src, dst, err } => write!(
                f,
                "Copying '{}' to '{}': {}",
                src.display(),
                dst.display(),
                err
            ),
            Error::Write { path, err } => {
                write!(f, "Writing page '{}': {}", path.display(), err)
            }
            Error::InvalidPath(err) => write!(f, "{}", err),
            Error::Nav(err) => write!(f, "{}", err),
            Error::Template(err) => write!(f, "{}", err),
            Error::Annotated(annotation, err) => {
                write!(f, "{}: {}", &annotation, err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Walk(err) => Some(err),
            Error::OutsideSource(_) => None,
            Error::CreateDirectory { err, .. } => Some(err),
            Error::Read { err, .. } => Some(err),
            Error::Copy { err, .. } => Some(err),
            Error::Write { err, .. } => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::Nav(err) => Some(err),
            Error::Template(err) => Some(err),
            Error::Annotated(_, err) => Some(err),
        }
    }
}

impl From<walkdir::Error> for Error {
    /// Converts a [`walkdir::Error`] into an [`Error`]. This allows us to use
    /// the `?` operator while walking the source tree.
    fn from(err: walkdir::Error) -> Error {
        Error::Walk(err)
    }
}

impl From<InvalidPathError> for Error {
    /// Converts an [`InvalidPathError`] into an [`Error`].
    fn from(err: InvalidPathError) -> Error {
        Error::InvalidPath(err)
    }
}

impl From<NavError> for Error {
    /// Converts a [`NavError`] into an [`Error`]. This allows us to use the
    /// `?` operator when rendering pages.
    fn from(err: NavError) -> Error {
        Error::Nav(err)
    }
}

impl From<TemplateError> for Error {
    /// Converts a [`TemplateError`] into an [`Error`]. This allows us to use
    /// the `?` operator when templating pages.
    fn from(err: TemplateError) -> Error {
        Error::Template(err)
    }
}
