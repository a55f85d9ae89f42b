//! Page-specific entry ordering.
//!
//! - Papers: newest first, by `date` (`YYYY-MM-DD`), else January 1 of `year`,
//!   else 1900-01-01.
//! - Projects: ascending `order` (absent → 999), then ascending `title`.
//!
//! Both sorts are stable, so entries with equal keys keep their load order.

use crate::types::Entry;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// `order` assumed for projects that do not set one.
pub const DEFAULT_ORDER: f64 = 999.0;

fn epoch_sentinel() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Date a paper is ordered by. Unparseable values fall through silently.
pub fn paper_date(entry: &Entry) -> NaiveDate {
    let from_date = entry
        .get("date")
        .and_then(|v| v.as_str())
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());

    let from_year = || {
        entry
            .integer("year")
            .and_then(|y| i32::try_from(y).ok())
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
    };

    from_date.or_else(from_year).unwrap_or_else(epoch_sentinel)
}

pub fn sort_papers(papers: &mut [Entry]) {
    papers.sort_by_key(|p| std::cmp::Reverse(paper_date(p)));
}

pub fn sort_projects(projects: &mut [Entry]) {
    projects.sort_by(|a, b| {
        let order_a = a.number("order").unwrap_or(DEFAULT_ORDER);
        let order_b = b.number("order").unwrap_or(DEFAULT_ORDER);
        match order_a.total_cmp(&order_b) {
            Ordering::Equal => a.text_or("title", "").cmp(&b.text_or("title", "")),
            other => other,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn papers_newest_first_with_bare_year() {
        let mut papers = vec![
            entry_from("---\ntitle: Mid\ndate: \"2024-01-01\"\n---\n"),
            entry_from("---\ntitle: Old\ndate: 2023-06-15\n---\n"),
            entry_from("---\ntitle: YearOnly\nyear: 2025\n---\n"),
        ];
        sort_papers(&mut papers);
        assert_eq!(entry_titles(&papers), vec!["YearOnly", "Mid", "Old"]);
    }

    #[test]
    fn bad_date_falls_back_to_year_then_sentinel() {
        let bad_date = entry_from("---\ndate: someday\nyear: 2019\n---\n");
        assert_eq!(paper_date(&bad_date), NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());

        let nothing = entry_from("---\ntitle: X\n---\n");
        assert_eq!(paper_date(&nothing), NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());

        let bad_year = entry_from("---\nyear: soon\n---\n");
        assert_eq!(paper_date(&bad_year), NaiveDate::from_ymd_opt(1900, 1, 1).unwrap());
    }

    #[test]
    fn date_wins_over_year() {
        let e = entry_from("---\ndate: 2020-05-04\nyear: 2030\n---\n");
        assert_eq!(paper_date(&e), NaiveDate::from_ymd_opt(2020, 5, 4).unwrap());
    }

    #[test]
    fn undated_papers_keep_load_order() {
        let mut papers = vec![
            entry_from("---\ntitle: First\n---\n"),
            entry_from("---\ntitle: Dated\nyear: 2001\n---\n"),
            entry_from("---\ntitle: Second\n---\n"),
        ];
        sort_papers(&mut papers);
        assert_eq!(entry_titles(&papers), vec!["Dated", "First", "Second"]);
    }

    #[test]
    fn projects_by_order_then_title() {
        let mut projects = vec![
            entry_from("---\norder: 2\ntitle: \"B\"\n---\n"),
            entry_from("---\norder: 1\ntitle: \"A\"\n---\n"),
            entry_from("---\ntitle: \"C\"\n---\n"),
        ];
        sort_projects(&mut projects);
        assert_eq!(entry_titles(&projects), vec!["A", "B", "C"]);
    }

    #[test]
    fn unordered_projects_sort_alphabetically_last() {
        let mut projects = vec![
            entry_from("---\ntitle: Zeta\n---\n"),
            entry_from("---\ntitle: Alpha\n---\n"),
            entry_from("---\ntitle: Pinned\norder: 1000.5\n---\n"),
            entry_from("---\ntitle: Mid\norder: 3\n---\n"),
        ];
        sort_projects(&mut projects);
        assert_eq!(entry_titles(&projects), vec!["Mid", "Alpha", "Zeta", "Pinned"]);
    }
}
