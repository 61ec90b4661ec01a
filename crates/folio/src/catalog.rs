// SPDX-License-Identifier: Apache-2.0

//! Project catalog — the fixed, ordered list of portfolio projects.
//!
//! Records are declared in `site.yaml` at build time and never change
//! afterwards. Declaration order is meaningful: it is the display order
//! on the listing page.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One project write-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique key; becomes the `/projects/{slug}` URL segment.
    pub slug: String,
    pub title: String,
    pub role: String,
    pub short_description: String,
    pub long_description: String,
    /// Static asset path for the project image.
    pub image: String,
}

/// The catalog of all projects, in declaration order.
///
/// Slug uniqueness is checked once at construction; after that every
/// lookup is a pure read.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    records: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    /// Build a catalog, rejecting duplicate slugs.
    pub fn new(records: Vec<ProjectRecord>) -> Result<ProjectCatalog> {
        let mut seen = BTreeSet::new();
        for record in &records {
            if !seen.insert(record.slug.as_str()) {
                return Err(Error::DuplicateSlug(record.slug.clone()));
            }
        }
        Ok(ProjectCatalog { records })
    }

    /// All records, in declaration order. Repeated calls return the same
    /// sequence.
    pub fn list_all(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Look up a record by slug.
    pub fn get_by_slug(&self, slug: &str) -> Result<&ProjectRecord> {
        self.records
            .iter()
            .find(|r| r.slug == slug)
            .ok_or_else(|| Error::not_found(format!("/projects/{}", slug)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str, title: &str) -> ProjectRecord {
        ProjectRecord {
            slug: slug.to_string(),
            title: title.to_string(),
            role: "Engineer".to_string(),
            short_description: "Short.".to_string(),
            long_description: "Long.".to_string(),
            image: format!("/images/{}.jpg", slug),
        }
    }

    #[test]
    fn test_list_all_preserves_declaration_order() {
        let catalog = ProjectCatalog::new(vec![
            record("b-project", "B"),
            record("a-project", "A"),
            record("c-project", "C"),
        ])
        .unwrap();

        let slugs: Vec<_> = catalog.list_all().iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b-project", "a-project", "c-project"]);

        // Idempotent: a second call yields the identical sequence.
        let again: Vec<_> = catalog.list_all().iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, again);
    }

    #[test]
    fn test_get_by_slug() {
        let catalog =
            ProjectCatalog::new(vec![record("project-1", "One"), record("project-2", "Two")])
                .unwrap();
        assert_eq!(catalog.get_by_slug("project-2").unwrap().title, "Two");
    }

    #[test]
    fn test_get_by_slug_missing_is_not_found() {
        let catalog = ProjectCatalog::new(vec![record("project-1", "One")]).unwrap();
        match catalog.get_by_slug("does-not-exist") {
            Err(Error::NotFound(path)) => assert_eq!(path, "/projects/does-not-exist"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let result = ProjectCatalog::new(vec![record("dup", "One"), record("dup", "Two")]);
        assert!(matches!(result, Err(Error::DuplicateSlug(s)) if s == "dup"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ProjectCatalog::new(vec![]).unwrap();
        assert!(catalog.list_all().is_empty());
        assert!(catalog.get_by_slug("anything").is_err());
    }
}
