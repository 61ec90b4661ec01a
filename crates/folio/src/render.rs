// SPDX-License-Identifier: Apache-2.0

//! Document body rendering — turns a `ContentDocument`'s sections into the
//! HTML fragment that the layout shell wraps.

use crate::config::SiteConfig;
use crate::contact;
use crate::layouts::prefix_base;
use crate::markdown::render_markdown;
use crate::registry::{ContentDocument, Section};
use maud::html;

/// Render a document body: an `<h1>` from the title, then each section in
/// declaration order.
pub fn render_document(doc: &ContentDocument, config: &SiteConfig) -> String {
    let mut body = html! { h1 { (doc.title) } }.into_string();
    for section in &doc.sections {
        body.push_str(&render_section(section, config));
    }
    body
}

fn render_section(section: &Section, config: &SiteConfig) -> String {
    match section {
        Section::Prose(md) => render_markdown(md),
        Section::Image { src, alt } => html! {
            figure class="section-image" {
                img src=(src) alt=(alt);
            }
        }
        .into_string(),
        Section::LabeledList { items } => html! {
            dl class="labeled-list" {
                @for (label, value) in items {
                    dt { (label) }
                    dd { (value) }
                }
            }
        }
        .into_string(),
        Section::ContactForm => {
            let redirect =
                prefix_base(&config.site.base_url, &config.contact.thanks_path);
            contact::render_contact_form(&config.contact, &redirect)
        }
    }
}

/// Body for the generic not-found document. Unknown paths are otherwise
/// the hosting platform's business; this just gives hosts that serve a
/// `404.html` something with the site chrome on it.
pub fn render_not_found() -> String {
    html! {
        h1 { "Page not found" }
        p { "Nothing lives at this address. Try the navigation above." }
    }
    .into_string()
}
