// SPDX-License-Identifier: Apache-2.0

//! Site configuration — parsed from `site.yaml` in the site directory.

use crate::catalog::ProjectRecord;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level site configuration.
///
/// ```yaml
/// site:
///   title: "Jane Example"
///   base_url: "/"
///   copyright: "Jane Example"
///
/// contact:
///   endpoint: "https://formsubmit.example.com/f/abc123"
///
/// pages:
///   - path: "/"
///     source: "pages/index.md"
///
/// documents:
///   - label: "Résumé"
///     file: "static/documents/resume.pdf"
///
/// projects:
///   - slug: "project-1"
///     title: "..."
///     role: "..."
///     short_description: "..."
///     long_description: "..."
///     image: "/images/project-1.jpg"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub contact: ContactConfig,
    #[serde(default)]
    pub pages: Vec<PageConfig>,
    #[serde(default)]
    pub documents: Vec<DocumentLink>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Name on the footer copyright line. Defaults to the site title.
    #[serde(default)]
    pub copyright: Option<String>,
}

fn default_base_url() -> String {
    "/".to_string()
}

impl SiteMeta {
    pub fn copyright_owner(&self) -> &str {
        self.copyright.as_deref().unwrap_or(&self.title)
    }
}

/// Contact hand-off configuration.
///
/// The `endpoint` is an external form-processing service; this system only
/// renders the form and never touches the submission itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub endpoint: String,
    /// Where the external service redirects after a successful submission.
    #[serde(default = "default_thanks_path")]
    pub thanks_path: String,
}

fn default_thanks_path() -> String {
    "/contact/thanks".to_string()
}

/// A prose page: URL path plus the markdown source, relative to the site dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub path: String,
    pub source: String,
    /// Append the downloadable-documents list (résumé, CV) to this page.
    #[serde(default)]
    pub downloads: bool,
}

/// A downloadable document (résumé, CV) linked from the about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentLink {
    pub label: String,
    pub file: String,
}

impl SiteConfig {
    /// Load and parse `site.yaml` from the given site directory.
    pub fn load(site_dir: &Path) -> Result<SiteConfig> {
        let raw = std::fs::read_to_string(site_dir.join("site.yaml"))?;
        let config: SiteConfig = serde_yaml_ng::from_str(&raw)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let yaml = r#"
site:
  title: "Test Portfolio"

contact:
  endpoint: "https://formsubmit.example.com/f/test"

pages:
  - path: "/"
    source: "pages/index.md"
  - path: "/about"
    source: "pages/about.md"

projects:
  - slug: "project-1"
    title: "First Project"
    role: "Lead"
    short_description: "Short."
    long_description: "Long."
    image: "/images/p1.jpg"
"#;
        let config: SiteConfig = serde_yaml_ng::from_str(yaml).expect("parse config");
        assert_eq!(config.site.title, "Test Portfolio");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.site.copyright_owner(), "Test Portfolio");
        assert_eq!(config.contact.thanks_path, "/contact/thanks");
        assert_eq!(config.pages.len(), 2);
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].slug, "project-1");
    }

    #[test]
    fn copyright_defaults_to_title() {
        let yaml = r#"
site:
  title: "Someone"
  copyright: "Someone Else"
contact:
  endpoint: "https://x.example/f"
"#;
        let config: SiteConfig = serde_yaml_ng::from_str(yaml).expect("parse config");
        assert_eq!(config.site.copyright_owner(), "Someone Else");
    }
}
