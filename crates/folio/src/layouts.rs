// SPDX-License-Identifier: Apache-2.0

//! Maud HTML layout shell.
//!
//! Every page body is wrapped in the same document chrome: a header with
//! the site name and navigation links, and a footer with the copyright
//! line. Navigation state is recomputed per page from the current path.

use maud::{DOCTYPE, PreEscaped, html};

/// Folio version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A persistent navigation link in the header.
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    /// Exact-match links are active only on their own path; the rest use
    /// a prefix match so `/projects/project-1` still highlights Projects.
    pub exact: bool,
}

/// The header navigation, in display order. Home is exact so it is not
/// marked active on every page of the site.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", path: "/", exact: true },
    NavLink { label: "About", path: "/about", exact: false },
    NavLink { label: "Projects", path: "/projects", exact: false },
    NavLink { label: "Contact", path: "/contact", exact: false },
];

impl NavLink {
    /// Whether this link should be marked active for the given path.
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.exact {
            current_path == self.path
        } else {
            current_path.starts_with(self.path)
        }
    }
}

/// Context passed to the layout shell.
pub struct LayoutContext<'a> {
    /// Page title (frontmatter or generated)
    pub title: &'a str,
    /// Site title (from site.yaml)
    pub site_title: &'a str,
    /// Base URL prefix for generated links
    pub base_url: &'a str,
    /// Path of the document being rendered; drives the active nav link
    pub current_path: &'a str,
    /// Rendered HTML body
    pub content: &'a str,
    /// Name on the footer copyright line
    pub copyright_owner: &'a str,
    /// Footer copyright year
    pub year: i32,
}

/// Wrap rendered content in the full HTML document.
pub fn page_shell(ctx: &LayoutContext) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("Folio v{}", VERSION));
                title { (ctx.title) " — " (ctx.site_title) }
                link rel="stylesheet" href=(prefix_base(ctx.base_url, "/style.css"));
            }
            body {
                header class="site-header" {
                    a class="site-name" href=(prefix_base(ctx.base_url, "/")) { (ctx.site_title) }
                    nav class="site-nav" {
                        ul {
                            @for link in &NAV_LINKS {
                                @let active = link.is_active(ctx.current_path);
                                @if active {
                                    li class="active" {
                                        a href=(prefix_base(ctx.base_url, link.path)) aria-current="page" { (link.label) }
                                    }
                                } @else {
                                    li {
                                        a href=(prefix_base(ctx.base_url, link.path)) { (link.label) }
                                    }
                                }
                            }
                        }
                    }
                }
                main {
                    (PreEscaped(ctx.content))
                }
                footer class="site-footer" {
                    p { "© " (ctx.year) " " (ctx.copyright_owner) }
                }
            }
        }
    };
    markup.into_string()
}

/// Prepend the base URL prefix to an absolute path.
///
/// If `base_url` is `/` (default), returns `path` unchanged.
pub fn prefix_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() {
        return path.to_string();
    }
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(current_path: &'a str, content: &'a str) -> LayoutContext<'a> {
        LayoutContext {
            title: "Page",
            site_title: "Test Site",
            base_url: "/",
            current_path,
            content,
            copyright_owner: "Test Owner",
            year: 2026,
        }
    }

    fn active_labels(current_path: &str) -> Vec<&'static str> {
        NAV_LINKS
            .iter()
            .filter(|l| l.is_active(current_path))
            .map(|l| l.label)
            .collect()
    }

    #[test]
    fn test_exactly_one_active_link_per_top_level_route() {
        for (path, expected) in [
            ("/", "Home"),
            ("/about", "About"),
            ("/projects", "Projects"),
            ("/contact", "Contact"),
        ] {
            let active = active_labels(path);
            assert_eq!(active, vec![expected], "route {}", path);
        }
    }

    #[test]
    fn test_active_link_path_is_prefix_of_current() {
        for path in ["/", "/about", "/projects", "/contact", "/projects/x"] {
            for link in NAV_LINKS.iter().filter(|l| l.is_active(path)) {
                assert!(path.starts_with(link.path), "{} vs {}", path, link.path);
            }
        }
    }

    #[test]
    fn test_project_detail_highlights_projects() {
        assert_eq!(active_labels("/projects/project-1"), vec!["Projects"]);
    }

    #[test]
    fn test_thanks_page_highlights_contact() {
        assert_eq!(active_labels("/contact/thanks"), vec!["Contact"]);
    }

    #[test]
    fn test_home_not_active_elsewhere() {
        assert!(!NAV_LINKS[0].is_active("/about"));
        assert!(NAV_LINKS[0].is_active("/"));
    }

    #[test]
    fn test_page_shell_basics() {
        let html = page_shell(&ctx("/", "<h1>Hello</h1>"));
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Page — Test Site"));
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("© 2026 Test Owner"));
    }

    #[test]
    fn test_page_shell_marks_active_nav() {
        let html = page_shell(&ctx("/projects", "<p>x</p>"));
        assert!(
            html.contains(r#"<li class="active"><a href="/projects" aria-current="page">Projects</a></li>"#),
            "Expected active Projects link, got: {}",
            html
        );
        // Only one li carries the active class
        assert_eq!(html.matches("aria-current").count(), 1);
    }

    #[test]
    fn test_prefix_base() {
        assert_eq!(prefix_base("/", "/projects"), "/projects");
        assert_eq!(prefix_base("/site/", "/projects"), "/site/projects");
        assert_eq!(prefix_base("", "/projects"), "/projects");
    }
}
