//! Defines the [`SiteConfig`] and [`Site`] types and the logic for loading
//! them from a config file and a style sheet.

use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// The site-wide settings shared by every page. On disk this is a JSON or YAML
/// document. Every field is optional and the keys may also be spelled in
/// lowercase, e.g.:
///
/// ```json
/// {
///     "Title": "My site",
///     "Subtitle": "notes and such",
///     "Blacklist": ["drafts", "README"]
/// }
/// ```
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteConfig {
    /// The site title, rendered in the page header and the `<title>` tag.
    #[serde(default, rename = "Title", alias = "title")]
    pub title: String,

    /// Rendered next to the title in the page header.
    #[serde(default, rename = "Subtitle", alias = "subtitle")]
    pub subtitle: String,

    /// Names (file names less their extension) which never show up in
    /// navigation. Matching is exact and case-sensitive. `null` is treated
    /// as an empty list.
    #[serde(
        default,
        rename = "Blacklist",
        alias = "blacklist",
        deserialize_with = "deserialize_blacklist"
    )]
    pub blacklist: HashSet<String>,
}

fn deserialize_blacklist<'de, D>(deserializer: D) -> std::result::Result<HashSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<HashSet<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl SiteConfig {
    /// Parses a [`SiteConfig`] from JSON.
    pub fn from_json(input: &str) -> Result<SiteConfig> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parses a [`SiteConfig`] from YAML.
    pub fn from_yaml(input: &str) -> Result<SiteConfig> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Parses a [`SiteConfig`] choosing the format from the extension of
    /// `path`: `.json` files are parsed as JSON and anything else as YAML.
    pub fn from_file(path: &Path) -> Result<SiteConfig> {
        let contents = std::fs::read_to_string(path).map_err(|err| Error::Read {
            kind: "config",
            path: path.to_owned(),
            err,
        })?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => SiteConfig::from_json(&contents),
            _ => SiteConfig::from_yaml(&contents),
        };
        config.map_err(|e| {
            Error::Annotated(
                format!("parsing config file `{}`", path.display()),
                Box::new(e),
            )
        })
    }
}

/// The read-only state shared by every page render: the config and the raw
/// CSS style sheet which is embedded into each page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Site {
    pub config: SiteConfig,
    pub style: String,
}

impl Site {
    /// Loads the config file and the style sheet. The style sheet is read
    /// verbatim.
    pub fn load(config_path: &Path, style_path: &Path) -> Result<Site> {
        let style = std::fs::read_to_string(style_path).map_err(|err| Error::Read {
            kind: "style",
            path: style_path.to_owned(),
            err,
        })?;
        Ok(Site {
            config: SiteConfig::from_file(config_path)?,
            style,
        })
    }
}

/// The result of a fallible configuration operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error loading the configuration.
#[derive(Debug)]
pub enum Error {
    /// Returned when the config file or style sheet can't be read.
    Read {
        kind: &'static str,
        path: PathBuf,
        err: std::io::Error,
    },

    /// Returned when the config file isn't valid JSON.
    DeserializeJson(serde_json::Error),

    /// Returned when the config file isn't valid YAML.
    DeserializeYaml(serde_yaml::Error),

    /// An error with an annotation.
    Annotated(String, Box<Error>),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Read { kind, path, err } => {
                write!(f, "Reading {} file `{}`: {}", kind, path.display(), err)
            }
            Error::DeserializeJson(err) => write!(f, "{}", err),
            Error::DeserializeYaml(err) => write!(f, "{}", err),
            Error::Annotated(annotation, err) => {
                write!(f, "{}: {}", &annotation, err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { err, .. } => Some(err),
            Error::DeserializeJson(err) => Some(err),
            Error::DeserializeYaml(err) => Some(err),
            Error::Annotated(_, err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    /// Converts a [`serde_json::Error`] into an [`Error`]. It allows us to use
    /// the `?` operator for [`serde_json`] deserialization functions.
    fn from(err: serde_json::Error) -> Error {
        Error::DeserializeJson(err)
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts a [`serde_yaml::Error`] into an [`Error`]. It allows us to use
    /// the `?` operator for [`serde_yaml`] deserialization functions.
    fn from(err: serde_yaml::Error) -> Error {
        Error::DeserializeYaml(err)
    }
}
