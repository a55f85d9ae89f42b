//! Page assembly and page builds.
//!
//! Each page is one standalone HTML document:
//!
//! ```text
//! <head>      shared: charset, meta description + author, title, fonts,
//!             stylesheets under styles/, deferred scripts under scripts/
//! <nav>       shared: logo, About / Papers / Projects / CV, theme toggle,
//!             mobile drawer
//! <main>      per page: heading, subtitle, list of cards (or a placeholder)
//! <footer>    shared: copyright and profile links from the site identity
//! ```
//!
//! [`render_page`] takes the per-page values as an explicit [`PageParams`];
//! the identity shown in the shell comes from [`SiteConfig`].
//!
//! ## Output Structure
//!
//! ```text
//! <output>/
//! ├── papers.html      # from <source>/papers/*.md
//! └── projects.html    # from <source>/projects/*.md
//! ```
//!
//! Outputs are overwritten on every build. The asset paths referenced by the
//! shell (`styles/`, `scripts/`, `assets/`) are relative and are not copied.

use crate::cards::{esc, render_paper_card, render_project_card};
use crate::config::{Identity, SiteConfig};
use crate::scan::{self, SkippedFile};
use crate::sort::{sort_papers, sort_projects};
use crate::types::Entry;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The two pages this generator knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Papers,
    Projects,
}

impl PageKind {
    pub const ALL: [PageKind; 2] = [PageKind::Papers, PageKind::Projects];

    /// Pages selected by the `--papers` / `--projects` flags.
    ///
    /// `--papers` wins over `--projects`; neither flag selects every page.
    pub fn selected(papers: bool, projects: bool) -> Vec<PageKind> {
        match (papers, projects) {
            (true, _) => vec![PageKind::Papers],
            (false, true) => vec![PageKind::Projects],
            (false, false) => Self::ALL.to_vec(),
        }
    }

    /// Directory under the content root holding this page's files.
    pub fn content_dir(self) -> &'static str {
        match self {
            PageKind::Papers => "papers",
            PageKind::Projects => "projects",
        }
    }

    pub fn output_file(self) -> &'static str {
        match self {
            PageKind::Papers => "papers.html",
            PageKind::Projects => "projects.html",
        }
    }

    /// Singular noun used in progress messages.
    pub fn noun(self) -> &'static str {
        match self {
            PageKind::Papers => "paper",
            PageKind::Projects => "project",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            PageKind::Papers => "Publications",
            PageKind::Projects => "Projects",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            PageKind::Papers => "Research papers and preprints",
            PageKind::Projects => "Open source tools, research implementations, and side projects",
        }
    }

    pub fn description(self, author: &str) -> String {
        match self {
            PageKind::Papers => format!(
                "Publications by {author} - Research papers in machine learning, reinforcement learning, and robotics."
            ),
            PageKind::Projects => format!(
                "Projects by {author} - Open source tools, research implementations, and side projects."
            ),
        }
    }

    fn list_class(self) -> &'static str {
        match self {
            PageKind::Papers => "papers-list",
            PageKind::Projects => "projects-grid",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            PageKind::Papers => "No publications yet. Check back soon!",
            PageKind::Projects => "No projects yet. Check back soon!",
        }
    }

    fn sort(self, entries: &mut [Entry]) {
        match self {
            PageKind::Papers => sort_papers(entries),
            PageKind::Projects => sort_projects(entries),
        }
    }

    fn render_card(self, entry: &Entry) -> Markup {
        match self {
            PageKind::Papers => render_paper_card(entry),
            PageKind::Projects => render_project_card(entry),
        }
    }
}

/// Per-page values injected into the shared shell.
#[derive(Debug, Clone)]
pub struct PageParams<'a> {
    /// Document `<title>`.
    pub title: String,
    /// `<meta name="description">` content.
    pub description: String,
    pub heading: &'a str,
    pub subtitle: &'a str,
    /// Class of the container wrapping `body`.
    pub list_class: &'a str,
    /// Card list, or the placeholder message.
    pub body: Markup,
}

/// What a single page build did, for progress output.
#[derive(Debug)]
pub struct PageReport {
    pub kind: PageKind,
    pub source_dir: PathBuf,
    pub output_path: PathBuf,
    pub entry_count: usize,
    pub missing_dir: bool,
    pub skipped: Vec<SkippedFile>,
}

/// Load, sort, render and write one page.
pub fn build_page(
    kind: PageKind,
    config: &SiteConfig,
    content_root: &Path,
    output_dir: &Path,
) -> Result<PageReport, GenerateError> {
    let source_dir = content_root.join(kind.content_dir());
    let mut scanned = scan::load_entries(&source_dir);
    kind.sort(&mut scanned.entries);

    let page = render_kind_page(kind, &scanned.entries, config);

    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(kind.output_file());
    fs::write(&output_path, page.into_string())?;

    Ok(PageReport {
        kind,
        source_dir,
        output_path,
        entry_count: scanned.entries.len(),
        missing_dir: scanned.missing,
        skipped: scanned.skipped,
    })
}

/// Render a full page for already-sorted entries.
pub fn render_kind_page(kind: PageKind, entries: &[Entry], config: &SiteConfig) -> Markup {
    let identity = &config.identity;
    let params = PageParams {
        title: format!("{} - {}", kind.heading(), identity.name),
        description: kind.description(&identity.name),
        heading: kind.heading(),
        subtitle: kind.subtitle(),
        list_class: kind.list_class(),
        body: render_cards(kind, entries),
    };
    render_page(identity, &params)
}

/// Cards for every entry, or the placeholder paragraph when there are none.
pub fn render_cards(kind: PageKind, entries: &[Entry]) -> Markup {
    html! {
        @if entries.is_empty() {
            p class="text-secondary" { (kind.placeholder()) }
        } @else {
            @for entry in entries {
                (kind.render_card(entry))
            }
        }
    }
}

// ============================================================================
// Shell
// ============================================================================

const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&family=JetBrains+Mono:wght@400;500;600&display=swap";

const STYLESHEETS: &[&str] = &[
    "styles/variables.css",
    "styles/reset.css",
    "styles/base.css",
    "styles/layout.css",
    "styles/components.css",
    "styles/utilities.css",
    "styles/animations.css",
];

const SCRIPTS: &[&str] = &["scripts/main.js", "scripts/scroll-reveal.js"];

/// (href, label) for the top navigation.
const NAV_LINKS: &[(&str, &str)] = &[
    ("about.html", "About"),
    ("papers.html", "Papers"),
    ("projects.html", "Projects"),
    ("cv.html", "CV"),
];

/// Assemble a complete document around `params.body`.
pub fn render_page(identity: &Identity, params: &PageParams) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" data-theme="dark" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(esc(&params.description));
                meta name="author" content=(esc(&identity.name));
                title { (esc(&params.title)) }

                link rel="icon" href="assets/images/favicon.png" type="image/png";
                link rel="preconnect" href="https://fonts.googleapis.com";
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link href=(FONTS_URL) rel="stylesheet";

                @for sheet in STYLESHEETS {
                    link rel="stylesheet" href=(sheet);
                }
                @for src in SCRIPTS {
                    script src=(src) defer {}
                }
            }
            body {
                div class="site-wrapper" {
                    (site_nav(identity))
                    main {
                        section class="page-header" {
                            div class="container" {
                                h1 class="page-title reveal" { (params.heading) }
                                p class="text-secondary reveal" { (params.subtitle) }
                            }
                        }
                        section class="section" {
                            div class="container" {
                                div class=(params.list_class) {
                                    (params.body)
                                }
                            }
                        }
                    }
                    (site_footer(identity))
                }
            }
        }
    }
}

fn site_nav(identity: &Identity) -> Markup {
    html! {
        nav class="nav" {
            div class="nav__container" {
                a href="index.html" class="nav__logo" {
                    span class="nav__logo-icon" { (esc(&identity.initial())) }
                    (esc(&identity.name))
                }
                div class="nav__links" {
                    @for (href, label) in NAV_LINKS {
                        a href=(href) class="nav__link" { (label) }
                    }
                }
                div class="nav__actions" {
                    button class="theme-toggle" aria-label="Toggle theme" {
                        (PreEscaped(ICON_SUN))
                        (PreEscaped(ICON_MOON))
                    }
                    button class="nav__menu-btn" aria-label="Open menu" aria-expanded="false" {
                        (PreEscaped(ICON_MENU))
                    }
                }
            }
        }
        div class="nav__mobile" {
            div class="nav__mobile-content" {
                div class="nav__mobile-header" {
                    button class="nav__mobile-close" aria-label="Close menu" {
                        (PreEscaped(ICON_CLOSE))
                    }
                }
                div class="nav__mobile-links" {
                    a href="index.html" class="nav__mobile-link" { "Home" }
                    @for (href, label) in NAV_LINKS {
                        a href=(href) class="nav__mobile-link" { (label) }
                    }
                }
            }
        }
        div class="nav__mobile-backdrop" {}
    }
}

fn site_footer(identity: &Identity) -> Markup {
    let profiles = [
        (identity.github.as_str(), "GitHub", ICON_GITHUB),
        (identity.scholar.as_str(), "Google Scholar", ICON_SCHOLAR),
        (identity.linkedin.as_str(), "LinkedIn", ICON_LINKEDIN),
    ];

    html! {
        footer class="footer" {
            div class="container" {
                div class="footer__content" {
                    p class="footer__copyright" { "© " (identity.copyright_year) " " (esc(&identity.name)) }
                    div class="footer__links" {
                        @for (href, label, icon) in profiles {
                            @if !href.is_empty() {
                                a href=(esc(href)) target="_blank" rel="noopener noreferrer" aria-label=(label) {
                                    (PreEscaped(icon))
                                }
                            }
                        }
                        a href=(esc(&identity.mailto())) aria-label="Email" {
                            (PreEscaped(ICON_EMAIL))
                        }
                    }
                }
            }
        }
    }
}

const ICON_SUN: &str = r#"<svg class="icon-sun" xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="5"></circle><line x1="12" y1="1" x2="12" y2="3"></line><line x1="12" y1="21" x2="12" y2="23"></line><line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line><line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line><line x1="1" y1="12" x2="3" y2="12"></line><line x1="21" y1="12" x2="23" y2="12"></line><line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line><line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line></svg>"#;

const ICON_MOON: &str = r#"<svg class="icon-moon" xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path></svg>"#;

const ICON_MENU: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="3" y1="12" x2="21" y2="12"></line><line x1="3" y1="6" x2="21" y2="6"></line><line x1="3" y1="18" x2="21" y2="18"></line></svg>"#;

const ICON_CLOSE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="18" y1="6" x2="6" y2="18"></line><line x1="6" y1="6" x2="18" y2="18"></line></svg>"#;

const ICON_GITHUB: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z"/></svg>"#;

const ICON_SCHOLAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M5.242 13.769L0 9.5 12 0l12 9.5-5.242 4.269C17.548 11.249 14.978 9.5 12 9.5c-2.977 0-5.548 1.748-6.758 4.269zM12 10a7 7 0 1 0 0 14 7 7 0 0 0 0-14z"/></svg>"#;

const ICON_LINKEDIN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="currentColor"><path d="M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z"/></svg>"#;

const ICON_EMAIL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path><polyline points="22,6 12,13 2,6"></polyline></svg>"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn selection_defaults_to_both_pages() {
        assert_eq!(PageKind::selected(false, false), PageKind::ALL.to_vec());
        assert_eq!(PageKind::selected(true, true), vec![PageKind::Papers]);
        assert_eq!(PageKind::selected(true, false), vec![PageKind::Papers]);
        assert_eq!(PageKind::selected(false, true), vec![PageKind::Projects]);
    }

    #[test]
    fn page_has_doctype_title_and_description() {
        let config = SiteConfig::default();
        let html = render_kind_page(PageKind::Papers, &[], &config).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Publications - Achraf Hsain</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="Publications by Achraf Hsain - Research papers"#
        ));
        assert!(html.contains(r#"<meta name="author" content="Achraf Hsain">"#));
        assert!(html.contains(r#"<h1 class="page-title reveal">Publications</h1>"#));
        assert!(html.contains(r#"<div class="papers-list">"#));
    }

    #[test]
    fn shell_references_shared_assets() {
        let html = render_kind_page(PageKind::Projects, &[], &SiteConfig::default()).into_string();

        for sheet in STYLESHEETS {
            assert!(html.contains(&format!(r#"href="{sheet}""#)), "missing {sheet}");
        }
        assert!(html.contains(r#"<script src="scripts/main.js" defer></script>"#));
        assert!(html.contains(r#"href="cv.html""#));
        assert!(html.contains(r#"<div class="projects-grid">"#));
    }

    #[test]
    fn empty_pages_show_placeholder_and_no_cards() {
        let config = SiteConfig::default();

        let papers = render_kind_page(PageKind::Papers, &[], &config).into_string();
        assert!(papers.contains("No publications yet. Check back soon!"));
        assert!(!papers.contains("<article"));

        let projects = render_kind_page(PageKind::Projects, &[], &config).into_string();
        assert!(projects.contains("No projects yet. Check back soon!"));
        assert!(!projects.contains("<article"));
    }

    #[test]
    fn footer_uses_configured_identity() {
        let mut config = SiteConfig::default();
        config.identity.name = "Grace Hopper".to_string();
        config.identity.github = "https://github.com/grace".to_string();
        config.identity.email = "grace@example.org".to_string();
        config.identity.copyright_year = 1952;
        let html = render_kind_page(PageKind::Papers, &[], &config).into_string();

        assert!(html.contains("© 1952 Grace Hopper"));
        assert!(html.contains(r#"href="https://github.com/grace""#));
        assert!(html.contains(r#"href="mailto:grace@example.org""#));
        assert!(html.contains(r#"<span class="nav__logo-icon">G</span>"#));
        assert!(html.contains("<title>Publications - Grace Hopper</title>"));
    }

    #[test]
    fn identity_values_are_fully_escaped() {
        let mut config = SiteConfig::default();
        config.identity.name = "O'Brien <x>".to_string();
        config.identity.github = "https://github.com/o'brien".to_string();
        let html = render_kind_page(PageKind::Papers, &[], &config).into_string();

        assert!(html.contains("<title>Publications - O&#39;Brien &lt;x&gt;</title>"));
        assert!(html.contains(r#"<meta name="author" content="O&#39;Brien &lt;x&gt;">"#));
        assert!(html.contains("© 2025 O&#39;Brien &lt;x&gt;"));
        assert!(html.contains(r#"href="https://github.com/o&#39;brien""#));
        assert!(!html.contains("O'Brien"));
        assert!(!html.contains("<x>"));
    }

    #[test]
    fn empty_profile_links_are_omitted() {
        let mut config = SiteConfig::default();
        config.identity.linkedin = String::new();
        let html = render_kind_page(PageKind::Papers, &[], &config).into_string();
        assert!(!html.contains(r#"aria-label="LinkedIn""#));
        assert!(html.contains(r#"aria-label="GitHub""#));
    }

    #[test]
    fn render_page_takes_explicit_params() {
        let params = PageParams {
            title: "Custom".to_string(),
            description: "About things".to_string(),
            heading: "Things",
            subtitle: "All of them",
            list_class: "things",
            body: html! { p { "inner" } },
        };
        let html = render_page(&SiteConfig::default().identity, &params).into_string();

        assert!(html.contains("<title>Custom</title>"));
        assert!(html.contains(r#"content="About things""#));
        assert!(html.contains(r#"<div class="things"><p>inner</p></div>"#));
    }

    #[test]
    fn build_page_writes_sorted_papers() {
        let tmp = setup_fixtures();
        let out = TempDir::new().unwrap();
        let report = build_page(
            PageKind::Papers,
            &SiteConfig::default(),
            tmp.path(),
            out.path(),
        )
        .unwrap();

        assert_eq!(report.entry_count, 3);
        assert!(!report.missing_dir);

        let html = std::fs::read_to_string(out.path().join("papers.html")).unwrap();
        let newest = html.find("Scaling Laws Revisited").unwrap();
        let middle = html.find("Attention Mechanisms").unwrap();
        let oldest = html.find("Early Work").unwrap();
        assert!(newest < middle && middle < oldest);
    }

    #[test]
    fn build_page_with_missing_directory_writes_placeholder() {
        let content = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let report = build_page(
            PageKind::Projects,
            &SiteConfig::default(),
            content.path(),
            out.path(),
        )
        .unwrap();

        assert!(report.missing_dir);
        assert_eq!(report.entry_count, 0);
        let html = std::fs::read_to_string(&report.output_path).unwrap();
        assert!(html.contains("No projects yet"));
    }

    #[test]
    fn rebuilding_is_byte_identical() {
        let tmp = setup_fixtures();
        let out = TempDir::new().unwrap();
        let config = SiteConfig::default();

        let mut runs = Vec::new();
        for _ in 0..2 {
            for kind in PageKind::ALL {
                build_page(kind, &config, tmp.path(), out.path()).unwrap();
            }
            runs.push((
                std::fs::read(out.path().join("papers.html")).unwrap(),
                std::fs::read(out.path().join("projects.html")).unwrap(),
            ));
        }
        assert_eq!(runs[0], runs[1]);
    }
}
