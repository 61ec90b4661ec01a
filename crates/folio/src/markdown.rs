// SPDX-License-Identifier: Apache-2.0

//! Markdown rendering for site pages.
//!
//! Uses pulldown-cmark directly for markdown → HTML conversion with GFM
//! extensions (tables, strikethrough, task lists), and injects slugified
//! `id` anchors on headings so sections are linkable.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html::push_html};

/// Render markdown to HTML.
pub fn render_markdown(content: &str) -> String {
    let options =
        Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS | Options::ENABLE_TABLES;

    let parser = Parser::new_ext(content, options);
    let events = inject_heading_anchors(parser);

    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events.into_iter());
    html
}

/// Slugify text for use as an HTML id attribute.
///
/// Lowercases, replaces non-alphanumeric runs with hyphens, strips
/// leading/trailing hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut prev_hyphen = true; // suppress leading hyphen
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Walk the pulldown-cmark event stream and inject `id` attributes on headings.
///
/// For each heading, we:
/// 1. Collect all text inside the heading to build a slug
/// 2. Replace `Start(Heading { .. })` with an `Html` event containing
///    `<hN id="slug">` so the heading gets an anchor
/// 3. Append a clickable `#` link after the heading text (h2+ only —
///    h1 is the page title)
fn inject_heading_anchors<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events: Vec<Event<'a>> = Vec::new();
    let mut in_heading: Option<pulldown_cmark::HeadingLevel> = None;
    let mut heading_text = String::new();
    let mut heading_events: Vec<Event<'a>> = Vec::new();

    for event in parser {
        match &event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = Some(*level);
                heading_text.clear();
                heading_events.clear();
                heading_events.push(event);
            }
            Event::End(TagEnd::Heading(level)) if in_heading == Some(*level) => {
                let slug = slugify(&heading_text);
                let level_num = match level {
                    pulldown_cmark::HeadingLevel::H1 => 1,
                    pulldown_cmark::HeadingLevel::H2 => 2,
                    pulldown_cmark::HeadingLevel::H3 => 3,
                    pulldown_cmark::HeadingLevel::H4 => 4,
                    pulldown_cmark::HeadingLevel::H5 => 5,
                    pulldown_cmark::HeadingLevel::H6 => 6,
                };

                if !slug.is_empty() {
                    events.push(Event::Html(
                        format!("<h{} id=\"{}\">", level_num, slug).into(),
                    ));
                    // Inner events (text, inline code, etc.), skipping the
                    // buffered Start(Heading)
                    for e in heading_events.drain(..).skip(1) {
                        events.push(e);
                    }
                    if level_num >= 2 {
                        events.push(Event::Html(
                            format!(
                                " <a class=\"anchor\" href=\"#{}\" aria-hidden=\"true\">#</a>",
                                slug
                            )
                            .into(),
                        ));
                    }
                    events.push(Event::Html(format!("</h{}>", level_num).into()));
                } else {
                    // No slug — pass through unchanged
                    events.extend(heading_events.drain(..));
                    events.push(event);
                }
                in_heading = None;
            }
            Event::Text(text) if in_heading.is_some() => {
                heading_text.push_str(text);
                heading_events.push(event);
            }
            Event::Code(code) if in_heading.is_some() => {
                heading_text.push_str(code);
                heading_events.push(event);
            }
            _ if in_heading.is_some() => {
                heading_events.push(event);
            }
            _ => {
                events.push(event);
            }
        }
    }

    events
}
