//! Inline markdown for question texts.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Escape text for use as HTML element content
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    html::push_html(&mut out, std::iter::once(Event::Text(CowStr::Borrowed(text))));
    out
}

/// Render a short markdown fragment to HTML without paragraph wrapping
///
/// Raw HTML in the source is escaped rather than passed through, and soft
/// line breaks become `<br />`.
pub fn inline_markdown(text: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH;
    let events = Parser::new_ext(text, options).filter_map(|event| match event {
        Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph) => None,
        Event::Html(raw) | Event::InlineHtml(raw) => Some(Event::Text(raw)),
        Event::SoftBreak => Some(Event::HardBreak),
        other => Some(other),
    });

    let mut out = String::with_capacity(text.len() + text.len() / 2);
    html::push_html(&mut out, events);
    out.trim_end().to_string()
}
