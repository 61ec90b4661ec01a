// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for site generation.
//!
//! `NotFound` is the only error a well-formed site produces at lookup time;
//! everything else is a build-input problem (bad config, unreadable page,
//! duplicate slug) surfaced before any output is written.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// No document or record matches the requested path/slug.
    #[error("not found: {0}")]
    NotFound(String),

    /// Two catalog entries declare the same slug.
    #[error("duplicate project slug: {0}")]
    DuplicateSlug(String),

    /// Site configuration is structurally invalid.
    #[error("config error: {0}")]
    Config(String),

    /// A markdown page's YAML frontmatter failed to parse.
    #[error("bad frontmatter in '{path}': {message}")]
    Frontmatter { path: String, message: String },

    #[error("yaml error")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("io error")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn not_found(what: impl Into<String>) -> Self {
        Error::NotFound(what.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}
