use pulldown_cmark::{html, Options, Parser};

/// Converts markdown to an HTML fragment. Conversion never fails: input which
/// isn't valid UTF-8 is decoded lossily and anything the parser doesn't
/// recognize passes through as text.
pub fn to_html(markdown: &[u8]) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let markdown = String::from_utf8_lossy(markdown);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(&markdown, options));
    out
}
