// SPDX-License-Identifier: Apache-2.0

//! Site generation — renders every registered document into an output
//! directory and copies static assets verbatim.
//!
//! The pipeline is a synchronous one-shot: expand documents, render each
//! (markdown → HTML → layout shell), write files, copy assets. Nothing is
//! shared or retried; a build either completes or fails with the first
//! error.

use crate::catalog::ProjectCatalog;
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::layouts::LayoutContext;
use crate::registry::PageRegistry;
use crate::{layouts, render};
use log::{debug, info, warn};
use std::path::Path;

/// What a completed build produced.
#[derive(Debug)]
pub struct BuildSummary {
    pub pages_written: usize,
    pub assets_copied: usize,
}

/// What `check` validated.
#[derive(Debug)]
pub struct CheckReport {
    pub pages: usize,
    pub projects: usize,
}

/// Map a URL route to its output file under `dist/`.
///
/// `/` → `index.html`, `/about` → `about/index.html`, and so on — every
/// route becomes a directory index so the static host serves extensionless
/// URLs.
pub fn output_path(route: &str) -> String {
    let trimmed = route.trim_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{}/index.html", trimmed)
    }
}

/// Generate the complete static site.
pub fn build_site(
    config: &SiteConfig,
    catalog: &ProjectCatalog,
    registry: &PageRegistry,
    site_dir: &Path,
    output_dir: &Path,
    year: i32,
) -> Result<BuildSummary> {
    check_site(config, catalog, registry)?;

    let mut pages_written = 0;
    for doc in registry.iter() {
        let body = render::render_document(doc, config);
        let html = shell(config, &doc.title, &doc.path, &body, year);
        write_page(output_dir, &output_path(&doc.path), &html)?;
        debug!("wrote {}", output_path(&doc.path));
        pages_written += 1;
    }

    // Generic not-found document for hosts that serve a 404.html.
    let body = render::render_not_found();
    let html = shell(config, "Not Found", "/404", &body, year);
    write_page(output_dir, "404.html", &html)?;
    pages_written += 1;

    let assets_copied = copy_static(&site_dir.join("static"), output_dir)?;

    info!(
        "site build complete: {} pages, {} assets to {:?}",
        pages_written, assets_copied, output_dir
    );
    Ok(BuildSummary {
        pages_written,
        assets_copied,
    })
}

/// Validate the site without writing output.
///
/// The registry's construction already guarantees readable pages and
/// unique paths; this pass asserts the cross-component invariants: every
/// project the listing links to resolves through both the catalog and the
/// registry (no dangling links), and the contact pair is present.
pub fn check_site(
    config: &SiteConfig,
    catalog: &ProjectCatalog,
    registry: &PageRegistry,
) -> Result<CheckReport> {
    for record in catalog.list_all() {
        let slug = &record.slug;
        catalog.get_by_slug(slug)?;
        let route = format!("/projects/{}", slug);
        registry.resolve(&route).map_err(|_| {
            Error::config(format!("listing links to {} but no page is registered", route))
        })?;
    }

    registry.resolve("/projects")?;
    registry.resolve("/contact")?;
    registry.resolve(&config.contact.thanks_path)?;

    Ok(CheckReport {
        pages: registry.len(),
        projects: catalog.list_all().len(),
    })
}

fn shell(config: &SiteConfig, title: &str, path: &str, body: &str, year: i32) -> String {
    layouts::page_shell(&LayoutContext {
        title,
        site_title: &config.site.title,
        base_url: &config.site.base_url,
        current_path: path,
        content: body,
        copyright_owner: config.site.copyright_owner(),
        year,
    })
}

fn write_page(output_dir: &Path, relative: &str, html: &str) -> Result<()> {
    let out_path = output_dir.join(relative);
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&out_path, html.as_bytes())?;
    Ok(())
}

/// Copy the site's static tree (stylesheet, images, résumé/CV documents)
/// into the output directory as opaque blobs. A missing static directory
/// is a warning, not an error — a text-only site is legal.
fn copy_static(static_dir: &Path, output_dir: &Path) -> Result<usize> {
    if !static_dir.is_dir() {
        warn!("no static directory at {:?}; skipping asset copy", static_dir);
        return Ok(0);
    }
    copy_tree(static_dir, output_dir)
}

fn copy_tree(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;
    std::fs::create_dir_all(to)?;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let source = entry.path();
        let dest = to.join(entry.file_name());
        if source.is_dir() {
            copied += copy_tree(&source, &dest)?;
        } else {
            std::fs::copy(&source, &dest)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(output_path("/"), "index.html");
        assert_eq!(output_path("/about"), "about/index.html");
        assert_eq!(output_path("/projects/project-1"), "projects/project-1/index.html");
        assert_eq!(output_path("/contact/thanks"), "contact/thanks/index.html");
    }

    #[test]
    fn test_copy_static_missing_dir_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let copied = copy_static(&tmp.path().join("nope"), &tmp.path().join("out")).unwrap();
        assert_eq!(copied, 0);
    }

    #[test]
    fn test_copy_static_recurses() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("static");
        std::fs::create_dir_all(src.join("images")).unwrap();
        std::fs::write(src.join("style.css"), "body{}").unwrap();
        std::fs::write(src.join("images/p.jpg"), [0xffu8, 0xd8]).unwrap();

        let out = tmp.path().join("dist");
        let copied = copy_static(&src, &out).unwrap();
        assert_eq!(copied, 2);
        assert!(out.join("style.css").exists());
        assert!(out.join("images/p.jpg").exists());
    }
}
