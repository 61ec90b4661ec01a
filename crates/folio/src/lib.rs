// SPDX-License-Identifier: Apache-2.0

//! # Folio — portfolio site generator
//!
//! Builds a personal portfolio site (biography, project write-ups, résumé
//! downloads, contact form) from declarative content: a `site.yaml` config
//! plus Markdown pages. Uses pulldown-cmark for markdown rendering and Maud
//! for HTML layouts.
//!
//! ## Usage
//!
//! ```bash
//! folio build ./dist --site ./site
//! ```

pub mod catalog;
pub mod config;
mod contact;
pub mod error;
pub mod generate;
mod layouts;
pub mod markdown;
pub mod registry;
mod render;

pub use catalog::{ProjectCatalog, ProjectRecord};
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use generate::{BuildSummary, CheckReport, build_site, check_site};
pub use registry::{ContentDocument, PageRegistry, Section};
