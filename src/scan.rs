//! Content loading.
//!
//! Each page reads one directory under the content root:
//!
//! ```text
//! content/
//! ├── config.toml                 # Site identity (optional)
//! ├── papers/
//! │   ├── attention-rl-2024.md    # One publication per file
//! │   └── notes.txt               # Ignored: not markdown
//! └── projects/
//!     ├── rl-gym-toolkit.md
//!     └── drafts/                 # Ignored: subdirectories are not walked
//! ```
//!
//! Only `*.md` files directly inside the directory are loaded. Files are read
//! in file-name order so repeated builds see entries in the same order before
//! sorting.
//!
//! Nothing here is fatal. A missing directory yields an empty result flagged
//! as `missing`, and a file that cannot be read is recorded in `skipped` while
//! the remaining files still load.

use crate::frontmatter;
use crate::types::Entry;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of loading one content directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Parsed entries in file-name order.
    pub entries: Vec<Entry>,
    /// True when the directory does not exist.
    pub missing: bool,
    /// Markdown files that could not be read, with the reason.
    pub skipped: Vec<SkippedFile>,
}

#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

pub fn load_entries(dir: &Path) -> ScanResult {
    if !dir.is_dir() {
        return ScanResult {
            missing: true,
            ..ScanResult::default()
        };
    }

    let mut result = ScanResult::default();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for item in walker {
        let dir_entry = match item {
            Ok(e) => e,
            Err(err) => {
                result.skipped.push(SkippedFile {
                    path: err.path().map(Path::to_path_buf).unwrap_or_default(),
                    reason: err.to_string(),
                });
                continue;
            }
        };
        let path = dir_entry.path();
        if !dir_entry.file_type().is_file() || !is_markdown(path) {
            continue;
        }

        match load_entry(path) {
            Ok(entry) => result.entries.push(entry),
            Err(err) => result.skipped.push(SkippedFile {
                path: path.to_path_buf(),
                reason: err.to_string(),
            }),
        }
    }

    result
}

/// Read and parse a single content file.
pub fn load_entry(path: &Path) -> std::io::Result<Entry> {
    let content = fs::read_to_string(path)?.replace("\r\n", "\n");
    let (fields, body) = frontmatter::parse(&content);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    Ok(Entry::new(fields, body, stem))
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "md")
}
