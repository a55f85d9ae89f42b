//! Card renderers for papers and projects.
//!
//! Each card is a Maud fragment built from one [`Entry`]. Every value that
//! comes from a content file goes through [`escape_html`] before it reaches
//! the markup, numbers and booleans included (they are stringified first).
//! Maud's own escaping leaves `'` alone, so content values are escaped here
//! and interpolated as [`PreEscaped`].
//!
//! Optional blocks are omitted entirely when their fields are absent or
//! empty: no featured badge, no tags container, no actions row.
//!
//! ## Abstract truncation
//!
//! Paper abstracts are the body escaped first and then cut to
//! [`ABSTRACT_LIMIT`] characters, with `...` appended when the raw body is
//! longer than the limit. Cutting after escaping can split an entity such as
//! `&amp;` at the boundary; the published pages rely on this exact output, so
//! it is kept.

use crate::types::Entry;
use maud::{Markup, PreEscaped, html};

/// Abstract length, in characters of escaped text.
pub const ABSTRACT_LIMIT: usize = 300;

pub const PAPER_PLACEHOLDER_IMAGE: &str = "assets/images/papers/paper-placeholder.png";
pub const PROJECT_PLACEHOLDER_IMAGE: &str = "assets/images/projects/project-placeholder.png";

const BUTTON_CLASS: &str = "btn btn--ghost btn--sm";

/// Escape `&`, `<`, `>`, `"` and `'` as HTML entities.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn esc(text: &str) -> PreEscaped<String> {
    PreEscaped(escape_html(text))
}

/// Escaped abstract text, cut to [`ABSTRACT_LIMIT`] characters.
pub fn truncate_abstract(body: &str) -> String {
    let mut text: String = escape_html(body).chars().take(ABSTRACT_LIMIT).collect();
    if body.chars().count() > ABSTRACT_LIMIT {
        text.push_str("...");
    }
    text
}

pub fn render_paper_card(paper: &Entry) -> Markup {
    let title = paper.text_or("title", "Untitled");
    let authors = paper.text_or("authors", "");
    let venue = paper.text_or("venue", "");
    let year = paper.text_or("year", "");
    let image = paper.text_or("image", PAPER_PLACEHOLDER_IMAGE);
    let tags = paper.list("tags");

    let links: Vec<(String, &str)> = [("arxiv", "Link"), ("pdf", "PDF"), ("code", "Code")]
        .into_iter()
        .filter_map(|(key, label)| paper.text(key).map(|href| (href, label)))
        .collect();
    // Newlines survive inside the attribute as character references
    let bibtex = paper
        .text("bibtex")
        .map(|b| PreEscaped(escape_html(&b).replace('\n', "&#10;")));

    html! {
        article class="card paper-card reveal" id=(esc(&paper.identifier())) {
            @if paper.flag("featured") {
                div class="paper-card__badge" { "Featured" }
            }
            img src=(esc(&image)) alt={ (esc(&title)) " figure" } class="paper-card__image" loading="lazy";
            div class="paper-card__content" {
                h3 class="paper-card__title" { (esc(&title)) }
                p class="paper-card__authors" { (esc(&authors)) }
                p class="paper-card__venue" { (esc(&venue)) " " (esc(&year)) }
                p class="paper-card__abstract" { (PreEscaped(truncate_abstract(&paper.body))) }
                (tags_block("paper-card__tags", &tags))
                @if !links.is_empty() || bibtex.is_some() {
                    div class="paper-card__actions" {
                        @for (href, label) in &links {
                            (link_button(href, label))
                        }
                        @if let Some(bibtex) = bibtex {
                            button class={ (BUTTON_CLASS) " bibtex-btn" } data-bibtex=(bibtex) { "BibTeX" }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_project_card(project: &Entry) -> Markup {
    let title = project.text_or("title", "Untitled");
    let description = if project.body.is_empty() {
        project.text_or("description", "")
    } else {
        project.body.clone()
    };
    let image = project.text_or("image", PROJECT_PLACEHOLDER_IMAGE);
    let tags = project.list("tags");

    let links: Vec<(String, &str)> = [("demo", "Demo"), ("github", "GitHub")]
        .into_iter()
        .filter_map(|(key, label)| project.text(key).map(|href| (href, label)))
        .collect();

    html! {
        article class="card project-card reveal" id=(esc(&project.identifier())) {
            @if project.flag("featured") {
                div class="project-card__badge" { "Featured" }
            }
            img src=(esc(&image)) alt={ (esc(&title)) " screenshot" } class="project-card__image" loading="lazy";
            h3 class="project-card__title" { (esc(&title)) }
            p class="project-card__description" { (esc(&description)) }
            (tags_block("project-card__tags", &tags))
            @if !links.is_empty() {
                div class="project-card__actions" {
                    @for (href, label) in &links {
                        (link_button(href, label))
                    }
                }
            }
        }
    }
}

fn tags_block(class: &str, tags: &[String]) -> Markup {
    html! {
        @if !tags.is_empty() {
            div class={ (class) " tags" } {
                @for tag in tags {
                    span class="tag" { (esc(tag)) }
                }
            }
        }
    }
}

fn link_button(href: &str, label: &str) -> Markup {
    html! {
        a href=(esc(href)) class=(BUTTON_CLASS) target="_blank" rel="noopener noreferrer" { (label) }
    }
}
