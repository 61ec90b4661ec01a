// SPDX-License-Identifier: Apache-2.0

//! Page registry — the enumerable mapping from URL path to content document.
//!
//! All documents are assembled once per build: prose pages come from
//! markdown files declared in `site.yaml`, and the project listing/detail,
//! contact, and thanks documents are derived from the catalog and contact
//! config. After construction the registry is immutable and `resolve` is a
//! pure lookup.

use crate::catalog::ProjectCatalog;
use crate::config::{DocumentLink, SiteConfig};
use crate::error::{Error, Result};
use crate::layouts::prefix_base;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One content block inside a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// Markdown prose, rendered through the markdown pipeline.
    Prose(String),
    /// A static image reference.
    Image { src: String, alt: String },
    /// Label/value pairs (e.g. a project's role line).
    LabeledList { items: Vec<(String, String)> },
    /// The contact form — the one document whose body is a form rather
    /// than prose. Submission is handed off to the external endpoint.
    ContactForm,
}

/// An immutable, build-time-defined page.
#[derive(Debug, Clone)]
pub struct ContentDocument {
    /// Unique URL route for this document.
    pub path: String,
    pub title: String,
    pub sections: Vec<Section>,
}

/// The full path → document mapping for the site.
#[derive(Debug)]
pub struct PageRegistry {
    documents: BTreeMap<String, ContentDocument>,
}

/// Frontmatter parsed from the top of each markdown page.
#[derive(Debug, Deserialize)]
struct Frontmatter {
    title: String,
    #[serde(default)]
    image: Option<ImageRef>,
}

#[derive(Debug, Deserialize)]
struct ImageRef {
    src: String,
    #[serde(default)]
    alt: String,
}

impl PageRegistry {
    /// Assemble every document for the site.
    ///
    /// Reads the markdown pages named by the config, then derives the
    /// project listing, one detail page per catalog record, and the
    /// contact/thanks pair.
    pub fn build(
        config: &SiteConfig,
        catalog: &ProjectCatalog,
        site_dir: &Path,
    ) -> Result<PageRegistry> {
        let mut documents = BTreeMap::new();
        let base = &config.site.base_url;

        for page in &config.pages {
            let source = site_dir.join(&page.source);
            let raw = std::fs::read_to_string(&source).map_err(|e| {
                Error::config(format!("cannot read page '{}': {}", page.source, e))
            })?;
            let (fm_yaml, body) = split_frontmatter(&raw);
            if fm_yaml.is_empty() {
                return Err(Error::Frontmatter {
                    path: page.source.clone(),
                    message: "missing frontmatter (expected at least a title)".to_string(),
                });
            }
            let fm: Frontmatter =
                serde_yaml_ng::from_str(&fm_yaml).map_err(|e| Error::Frontmatter {
                    path: page.source.clone(),
                    message: e.to_string(),
                })?;

            let mut sections = Vec::new();
            if let Some(image) = fm.image {
                sections.push(Section::Image {
                    src: prefix_base(base, &image.src),
                    alt: image.alt,
                });
            }
            sections.push(Section::Prose(body));
            if page.downloads && !config.documents.is_empty() {
                sections.push(Section::Prose(downloads_markdown(base, &config.documents)));
            }

            insert_document(
                &mut documents,
                ContentDocument {
                    path: page.path.clone(),
                    title: fm.title,
                    sections,
                },
            )?;
        }

        insert_document(&mut documents, listing_document(catalog, base))?;
        for record in catalog.list_all() {
            insert_document(
                &mut documents,
                ContentDocument {
                    path: format!("/projects/{}", record.slug),
                    title: record.title.clone(),
                    sections: vec![
                        Section::Image {
                            src: prefix_base(base, &record.image),
                            alt: record.title.clone(),
                        },
                        Section::LabeledList {
                            items: vec![("Role".to_string(), record.role.clone())],
                        },
                        Section::Prose(record.long_description.clone()),
                    ],
                },
            )?;
        }

        insert_document(
            &mut documents,
            ContentDocument {
                path: "/contact".to_string(),
                title: "Contact".to_string(),
                sections: vec![Section::ContactForm],
            },
        )?;
        insert_document(
            &mut documents,
            ContentDocument {
                path: config.contact.thanks_path.clone(),
                title: "Thanks".to_string(),
                sections: vec![Section::Prose(
                    "Your message is on its way. I will get back to you as soon as I can."
                        .to_string(),
                )],
            },
        )?;

        Ok(PageRegistry { documents })
    }

    /// Look up the document for a request path.
    pub fn resolve(&self, path: &str) -> Result<&ContentDocument> {
        let key = normalize_path(path);
        self.documents
            .get(key.as_str())
            .ok_or_else(|| Error::not_found(key))
    }

    /// All registered paths, in stable (sorted) order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// All documents, in path order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentDocument> {
        self.documents.values()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// The `/projects` listing: one image + linked short description per
/// record, in catalog declaration order.
fn listing_document(catalog: &ProjectCatalog, base: &str) -> ContentDocument {
    let mut sections = Vec::new();
    for record in catalog.list_all() {
        sections.push(Section::Image {
            src: prefix_base(base, &record.image),
            alt: record.title.clone(),
        });
        sections.push(Section::Prose(format!(
            "### [{}]({})\n\n{}\n",
            record.title,
            prefix_base(base, &format!("/projects/{}", record.slug)),
            record.short_description
        )));
    }
    ContentDocument {
        path: "/projects".to_string(),
        title: "Projects".to_string(),
        sections,
    }
}

/// Downloads list appended to pages with `downloads: true` (the about page).
fn downloads_markdown(base: &str, documents: &[DocumentLink]) -> String {
    let mut md = String::from("## Downloads\n\n");
    for doc in documents {
        md.push_str(&format!("- [{}]({})\n", doc.label, prefix_base(base, &doc.file)));
    }
    md
}

fn insert_document(
    documents: &mut BTreeMap<String, ContentDocument>,
    document: ContentDocument,
) -> Result<()> {
    let path = normalize_path(&document.path);
    let mut document = document;
    document.path = path.clone();
    if documents.insert(path.clone(), document).is_some() {
        return Err(Error::config(format!("duplicate page path: {}", path)));
    }
    Ok(())
}

/// Strip a trailing slash (except on the root path) so `/about/` and
/// `/about` resolve to the same document.
fn normalize_path(path: &str) -> String {
    if path.len() > 1 {
        path.trim_end_matches('/').to_string()
    } else {
        path.to_string()
    }
}

/// Split `--- yaml ---` frontmatter from the markdown body.
fn split_frontmatter(content: &str) -> (String, String) {
    let trimmed = content.trim_start();
    if !trimmed.starts_with("---") {
        return (String::new(), content.to_string());
    }
    let after = &trimmed[3..];
    if let Some(end) = after.find("\n---") {
        (after[..end].trim().to_string(), after[end + 4..].to_string())
    } else {
        (String::new(), content.to_string())
    }
}
