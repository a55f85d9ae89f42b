//! # Portfolio Gen
//!
//! A minimal static site generator for an academic portfolio. Markdown files
//! with a small frontmatter header become cards on two pages: a publications
//! list and a projects grid.
//!
//! # Architecture: One Linear Pass
//!
//! Every build is a single, synchronous pass per page:
//!
//! ```text
//! content/papers/*.md  →  scan  →  sort  →  cards  →  page shell  →  papers.html
//! content/projects/*.md → scan  →  sort  →  cards  →  page shell  →  projects.html
//! ```
//!
//! Nothing is cached and nothing persists between runs. Output files are
//! rewritten from scratch each time, and the same content always produces
//! byte-identical pages.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | Line-oriented parser for the `---` header: scalars, lists, `|` blocks |
//! | [`types`] | `FieldValue` union and `Entry` with default-taking accessors |
//! | [`scan`] | Loads every `*.md` file in a content directory |
//! | [`sort`] | Newest-first papers, order-then-title projects |
//! | [`cards`] | Per-entry HTML cards, escaping, abstract truncation |
//! | [`generate`] | Page shell, per-page parameters, writing the output files |
//! | [`config`] | Site identity from `config.toml` |
//! | [`sample`] | Sample content for `--init` |
//! | [`output`] | CLI progress lines |
//!
//! # Design Decisions
//!
//! ## Degrade, Don't Fail
//!
//! Content problems never stop a build. A missing content directory gives a
//! page with a placeholder message, a file without frontmatter is all body,
//! an unparseable date falls back to the year, and a file that cannot be read
//! is skipped with a warning. Only failing to write an output page, or an
//! invalid `config.toml`, is an error.
//!
//! ## A Parser, Not a YAML Library
//!
//! The frontmatter format is a deliberately small subset: flat keys, flat
//! lists of strings, and one kind of multiline block. The [`frontmatter`]
//! scanner handles exactly that, including its quirks (numeric coercion of
//! quoted values, verbatim multiline capture), so existing content renders
//! the same way it always has.
//!
//! ## Maud for the Shell
//!
//! The page shell and cards are [Maud](https://maud.lambda.xyz/) templates.
//! Content values are escaped with [`cards::escape_html`], which also
//! encodes `'`, and interpolated as pre-escaped markup.

pub mod cards;
pub mod config;
pub mod frontmatter;
pub mod generate;
pub mod output;
pub mod sample;
pub mod scan;
pub mod sort;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
