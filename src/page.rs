//! Defines the [`PageContext`] type and [`render_page`], which turns one
//! Markdown document into everything the site template needs to produce its
//! HTML page.

use crate::config::Site;
use crate::listing::Lister;
use crate::markdown;
use crate::nav::{build_nav, NavEntry, Result};
use crate::path::SitePath;

const INDEX_HTML: &str = "index.html";

/// Everything the template needs to render a single page. Built fresh for
/// every document and never modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PageContext<'a> {
    /// The site config and style sheet, shared by all pages.
    pub site: &'a Site,

    /// The relative link from the page back to the site root's `index.html`.
    pub index_path: String,

    /// The navigation list, in rendering order.
    pub nav: Vec<NavEntry>,

    /// The converted Markdown body.
    pub body: String,
}

/// Renders the document at `path` whose contents are `markdown`. `lister`
/// provides the listing of the document's directory for the navigation list.
/// Fails only if that listing fails.
pub fn render_page<'a, L: Lister + ?Sized>(
    site: &'a Site,
    path: &SitePath,
    markdown: &[u8],
    lister: &L,
) -> Result<PageContext<'a>> {
    let body = markdown::to_html(markdown);
    let nav = build_nav(&site.config, path, lister)?;
    Ok(PageContext {
        site,
        index_path: index_path(path),
        nav,
        body,
    })
}

/// The relative link from the output page of `path` back to the site root's
/// `index.html`: one `../` per directory level.
pub fn index_path(path: &SitePath) -> String {
    let depth = path.depth();
    let mut index_path = String::with_capacity(depth * 3 + INDEX_HTML.len());
    for _ in 0..depth {
        index_path.push_str("../");
    }
    index_path.push_str(INDEX_HTML);
    index_path
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::SiteConfig;
    use crate::listing::{DirEntry, MemoryLister};
    use pretty_assertions::assert_eq;

    fn site() -> Site {
        Site {
            config: SiteConfig {
                title: String::from("Site"),
                subtitle: String::from("Sub"),
                blacklist: vec![String::from("drafts")].into_iter().collect(),
            },
            style: String::from("body { margin: 0; }"),
        }
    }

    #[test]
    fn test_index_path() {
        assert_eq!("index.html", index_path(&SitePath::new("/index.md")));
        assert_eq!("../index.html", index_path(&SitePath::new("/blog/post.md")));
        assert_eq!(
            "../../../index.html",
            index_path(&SitePath::new("/a/b/c/post.md"))
        );
    }

    #[test]
    fn test_render_nested_page() -> Result<()> {
        let site = site();
        let lister = MemoryLister::new().with_directory(
            "/blog",
            vec![DirEntry::file("post_one.md"), DirEntry::file("post_two.md")],
        );
        let page = render_page(
            &site,
            &SitePath::new("/blog/post_one.md"),
            b"# Post one\n",
            &lister,
        )?;

        assert_eq!("../index.html", page.index_path);
        assert_eq!("<h1>Post one</h1>\n", page.body);
        assert_eq!(4, page.nav.len());
        assert_eq!("post one", page.nav[2].name);
        assert!(page.nav[2].current);
        assert_eq!(&site, page.site);
        Ok(())
    }

    #[test]
    fn test_render_is_idempotent() -> Result<()> {
        let site = site();
        let lister = MemoryLister::new().with_directory(
            "/",
            vec![
                DirEntry::file("about.md"),
                DirEntry::dir("drafts"),
                DirEntry::file("index.md"),
            ],
        );
        let path = SitePath::new("/index.md");
        let first = render_page(&site, &path, b"hello *world*", &lister)?;
        let second = render_page(&site, &path, b"hello *world*", &lister)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_render_propagates_listing_failure() {
        let site = site();
        assert!(render_page(
            &site,
            &SitePath::new("/blog/post.md"),
            b"",
            &MemoryLister::new()
        )
        .is_err());
    }
}
