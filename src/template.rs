//! The HTML document every page is rendered into. The template is parsed once
//! by [`PageTemplate::new`] and the resulting value is shared, read-only, by
//! all page renders.

use crate::page::PageContext;
use gtmpl::{Context, Template, Value};
use std::fmt;
use std::io::{self, Write};

/// The page skeleton. The style sheet and the body are inserted verbatim, and
/// the nav entries are rendered in the order they were built.
pub const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html>
	<head>
		<meta charset="utf-8">
		<title>{{.Config.Title}}</title>
		<style type="text/css">
			{{.Style}}
		</style>
	</head>
	<body>
		<div id="header">
			<a id="headerLink" href="{{.IndexPath}}">{{.Config.Title}}</a>
			<span id="headerSubtitle">{{.Config.Subtitle}}</span>
		</div>
		<div id="content">
			<div id="nav">
				<ul>{{range .Nav}}{{if .Current}}
					<li><a class="thisPage" href="{{.Link}}">{{.Name}}</a></li>{{else}}
					<li><a href="{{.Link}}">{{.Name}}</a></li>{{end}}{{end}}
				</ul>
			</div>
			<div id="main">
				{{.Body}}
			</div>
		</div>
		<div id="footer">
			<span class="right">Generated by treesite</span>
		</div>
	</body>
</html>
"#;

/// A parsed page template.
pub struct PageTemplate {
    template: Template,
}

impl PageTemplate {
    /// Parses the built-in [`PAGE_TEMPLATE`].
    pub fn new() -> Result<PageTemplate> {
        PageTemplate::parse(PAGE_TEMPLATE)
    }

    /// Parses a template from `text`. Templates see a [`PageContext`] with
    /// the fields described in [`crate::value`].
    pub fn parse(text: &str) -> Result<PageTemplate> {
        let mut template = Template::default();
        template.parse(text).map_err(Error::Parse)?;
        Ok(PageTemplate { template })
    }

    /// Applies the template to `page`, writing the result into `w`.
    pub fn render<W: Write>(&self, w: &mut W, page: &PageContext) -> Result<()> {
        let context = Context::from(Value::from(page)).map_err(Error::Execute)?;
        self.template.execute(w, &context).map_err(Error::Execute)?;
        Ok(())
    }

    /// Applies the template to `page` and returns the resulting document.
    pub fn render_to_string(&self, page: &PageContext) -> Result<String> {
        let mut out = Vec::new();
        self.render(&mut out, page)?;
        String::from_utf8(out)
            .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// The result of a fallible template operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error parsing or applying a template.
#[derive(Debug)]
pub enum Error {
    /// Returned when the template text can't be parsed.
    Parse(String),

    /// Returned when the template can't be applied to a page.
    Execute(String),

    /// Returned for other I/O errors.
    Io(io::Error),
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "Parsing template: {}", err),
            Error::Execute(err) => write!(f, "Executing template: {}", err),
            Error::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(_) => None,
            Error::Execute(_) => None,
            Error::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. This allows us to use the
    /// `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{Site, SiteConfig};
    use crate::nav::NavEntry;

    fn nav_entry(name: &str, link: &str, current: bool) -> NavEntry {
        NavEntry {
            name: name.to_owned(),
            link: link.to_owned(),
            current,
        }
    }

    fn site() -> Site {
        Site {
            config: SiteConfig {
                title: String::from("My Site"),
                subtitle: String::from("a subtitle"),
                ..SiteConfig::default()
            },
            style: String::from("a > b { color: \"red\"; }"),
        }
    }

    #[test]
    fn test_render() -> Result<()> {
        let site = site();
        let page = PageContext {
            site: &site,
            index_path: String::from("../index.html"),
            nav: vec![
                nav_entry(".", "index.html", false),
                nav_entry("..", "../index.html", false),
                nav_entry("post one", "post_one.html", true),
                nav_entry("post two", "post_two.html", false),
            ],
            body: String::from("<h1>Post & one</h1>\n"),
        };

        let html = PageTemplate::new()?.render_to_string(&page)?;

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>My Site</title>"));
        assert!(html.contains(r#"<a id="headerLink" href="../index.html">My Site</a>"#));
        assert!(html.contains(r#"<span id="headerSubtitle">a subtitle</span>"#));
        assert!(html.contains("a > b { color: \"red\"; }"));
        assert!(html.contains("<h1>Post & one</h1>"));

        let links = [
            r#"<li><a href="index.html">.</a></li>"#,
            r#"<li><a href="../index.html">..</a></li>"#,
            r#"<li><a class="thisPage" href="post_one.html">post one</a></li>"#,
            r#"<li><a href="post_two.html">post two</a></li>"#,
        ];
        let mut last = 0;
        for link in links.iter() {
            let position = match html.find(link) {
                Some(position) => position,
                None => panic!("missing {} in:\n{}", link, html),
            };
            assert!(position >= last, "{} is out of order", link);
            last = position;
        }
        assert_eq!(1, html.matches("thisPage").count());
        Ok(())
    }

    #[test]
    fn test_render_is_deterministic() -> Result<()> {
        let site = site();
        let page = PageContext {
            site: &site,
            index_path: String::from("index.html"),
            nav: vec![nav_entry("about", "about.html", false)],
            body: String::from("<p>hi</p>\n"),
        };
        let template = PageTemplate::new()?;
        assert_eq!(
            template.render_to_string(&page)?,
            template.render_to_string(&page)?
        );
        Ok(())
    }

    #[test]
    fn test_parse_error() {
        assert!(PageTemplate::parse("{{if .Nav}}").is_err());
    }
}
