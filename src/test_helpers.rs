//! Shared test utilities for the portfolio-gen test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let papers = load_entries(&tmp.path().join("papers")).entries;
//! assert_eq!(entry_titles(&papers), vec!["Scaling Laws Revisited", ...]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::frontmatter;
use crate::types::{Entry, FieldValue, Fields};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `content` to `dir/name`, creating `dir` if needed.
pub fn write_content(dir: &Path, name: &str, content: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(name), content).unwrap();
}

// =========================================================================
// Entry builders
// =========================================================================

/// Parse a content file body into an entry with stem `test-entry`.
pub fn entry_from(content: &str) -> Entry {
    let (fields, body) = frontmatter::parse(content);
    Entry::new(fields, body, "test-entry")
}

/// An entry where every recognized field (and the body) is `value`.
///
/// Built directly rather than parsed, so quotes and colons survive intact.
pub fn entry_with_all_fields(value: &str) -> Entry {
    let text = || FieldValue::Text(value.to_string());
    let list = || FieldValue::List(vec![value.to_string()]);

    let mut fields = Fields::new();
    for key in [
        "title",
        "venue",
        "year",
        "date",
        "image",
        "arxiv",
        "pdf",
        "code",
        "description",
        "demo",
        "github",
        "slug",
    ] {
        fields.insert(key.to_string(), text());
    }
    fields.insert("authors".to_string(), list());
    fields.insert("tags".to_string(), list());
    fields.insert("bibtex".to_string(), FieldValue::Multiline(value.to_string()));
    fields.insert("featured".to_string(), FieldValue::Boolean(true));

    Entry::new(fields, value, "test-entry")
}

// =========================================================================
// Extractors
// =========================================================================

/// Titles in slice order, `Untitled` for entries without one.
pub fn entry_titles(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.text_or("title", "Untitled"))
        .collect()
}
