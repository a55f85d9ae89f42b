//! CLI output formatting.
//!
//! Progress is plain lines on stdout, bracketed by a banner:
//!
//! ```text
//! ============================================================
//! Academic Portfolio Static Site Generator
//! ============================================================
//! Building papers.html...
//!   Found 3 papers
//!   Written to ./papers.html
//! Building projects.html...
//! Warning: content/projects does not exist
//!   No project content files found in content/projects/
//!   Using placeholder message.
//!   Written to ./projects.html
//! ============================================================
//! Build complete!
//! ============================================================
//! ```
//!
//! Each step has a `format_*` function (returns `Vec<String>`) for testability;
//! [`print_lines`] writes them to stdout.

use crate::generate::{PageKind, PageReport};
use crate::sample::InitReport;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn format_banner() -> Vec<String> {
    vec![
        rule(),
        "Academic Portfolio Static Site Generator".to_string(),
        rule(),
    ]
}

pub fn format_build_start(kind: PageKind) -> Vec<String> {
    vec![format!("Building {}...", kind.output_file())]
}

/// Warnings, entry count (or placeholder notice) and output path for one page.
pub fn format_page_report(report: &PageReport) -> Vec<String> {
    let mut lines = Vec::new();

    if report.missing_dir {
        lines.push(format!(
            "Warning: {} does not exist",
            report.source_dir.display()
        ));
    }
    for skipped in &report.skipped {
        lines.push(format!(
            "Warning: skipping {}: {}",
            skipped.path.display(),
            skipped.reason
        ));
    }

    let noun = report.kind.noun();
    if report.entry_count == 0 {
        lines.push(format!(
            "  No {} content files found in {}/",
            noun,
            report.source_dir.display()
        ));
        lines.push("  Using placeholder message.".to_string());
    } else {
        lines.push(format!("  Found {} {}s", report.entry_count, noun));
    }

    lines.push(format!("  Written to {}", report.output_path.display()));
    lines
}

pub fn format_build_complete() -> Vec<String> {
    vec![rule(), "Build complete!".to_string(), rule()]
}

pub fn format_init_report(report: &InitReport) -> Vec<String> {
    let mut lines = vec!["Creating sample content files...".to_string()];
    for path in report.written.iter().chain(&report.config_written) {
        lines.push(format!("  Created {}", path.display()));
    }
    lines
}
