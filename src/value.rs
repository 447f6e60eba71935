//! Conversions from the page model into template [`Value`]s. Field names are
//! capitalized the way templates refer to them, e.g. `{{.Config.Title}}`.

use crate::config::SiteConfig;
use crate::nav::NavEntry;
use crate::page::PageContext;
use gtmpl::Value;
use std::collections::HashMap;

impl From<&SiteConfig> for Value {
    fn from(config: &SiteConfig) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("Title".to_owned(), Value::String(config.title.clone()));
        m.insert("Subtitle".to_owned(), Value::String(config.subtitle.clone()));
        Value::Object(m)
    }
}

impl From<&NavEntry> for Value {
    fn from(entry: &NavEntry) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("Name".to_owned(), Value::String(entry.name.clone()));
        m.insert("Link".to_owned(), Value::String(entry.link.clone()));
        m.insert("Current".to_owned(), Value::Bool(entry.current));
        Value::Object(m)
    }
}

impl From<&PageContext<'_>> for Value {
    /// Converts a [`PageContext`] into a [`Value::Object`] with fields
    /// `Config`, `Style`, `IndexPath`, `Nav` and `Body`.
    fn from(page: &PageContext) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("Config".to_owned(), (&page.site.config).into());
        m.insert("Style".to_owned(), Value::String(page.site.style.clone()));
        m.insert("IndexPath".to_owned(), Value::String(page.index_path.clone()));
        m.insert(
            "Nav".to_owned(),
            Value::Array(page.nav.iter().map(Value::from).collect()),
        );
        m.insert("Body".to_owned(), Value::String(page.body.clone()));
        Value::Object(m)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Site;

    #[test]
    fn test_page_to_value() {
        let site = Site {
            config: SiteConfig {
                title: String::from("Site"),
                ..SiteConfig::default()
            },
            style: String::from("p {}"),
        };
        let page = PageContext {
            site: &site,
            index_path: String::from("index.html"),
            nav: vec![NavEntry {
                name: String::from("about"),
                link: String::from("about.html"),
                current: true,
            }],
            body: String::from("<p>hi</p>"),
        };

        let m = match Value::from(&page) {
            Value::Object(m) => m,
            _ => panic!("wanted an object"),
        };
        match m.get("Style") {
            Some(Value::String(style)) => assert_eq!("p {}", style.as_str()),
            _ => panic!("wanted a style string"),
        }
        match m.get("Nav") {
            Some(Value::Array(nav)) => assert_eq!(1, nav.len()),
            _ => panic!("wanted a nav array"),
        }
    }
}
