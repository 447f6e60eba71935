//! The library code for the `treesite` static site generator. A build mirrors
//! a source directory into an output directory: Markdown documents become HTML
//! pages and every other file is copied as-is. The architecture breaks down
//! into two steps:
//!
//! 1. Walking the source tree ([`crate::build`]), which creates output
//!    directories, copies plain files and hands each Markdown document to the
//!    page renderer.
//! 2. Rendering a single page ([`crate::page`]), which converts the Markdown
//!    body ([`crate::markdown`]), computes the link back to the site's home
//!    page and builds the page's navigation list ([`crate::nav`]). The
//!    resulting [`crate::page::PageContext`] is then applied to the site
//!    template ([`crate::template`]).
//!
//! The second step is a pure function of its inputs. The only thing it needs
//! from the file system is the listing of the page's directory, which is
//! provided through the [`crate::listing::Lister`] trait so the navigation
//! logic can be exercised against in-memory listings.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod listing;
pub mod markdown;
pub mod nav;
pub mod page;
pub mod path;
pub mod template;
pub mod value;
