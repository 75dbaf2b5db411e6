//! Listing engine shared by every collection
//!
//! [`run`] filters a read-only snapshot, sorts the matches and cuts one page
//! out of them. It never errors and never mutates its input; malformed query
//! values were already normalised into a [`ListingQuery`].

use crate::core::entity::Record;
use crate::core::query::{ListingQuery, Page, PaginationMeta, SortKey};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Run a listing query over `records` as of `today`
pub fn run<T: Record>(records: &[T], query: &ListingQuery, today: NaiveDate) -> Page<T> {
    let mut matches: Vec<&T> = records
        .iter()
        .filter(|record| matches(*record, query, today))
        .collect();

    // `sort_by` is stable: equal keys keep snapshot order
    matches.sort_by(|a, b| compare(*a, *b, query.sort));

    let total = matches.len();
    let page = query.effective_page(total);
    let items = matches
        .into_iter()
        .skip(query.offset(total))
        .take(query.page_size)
        .cloned()
        .collect();

    Page {
        items,
        pagination: PaginationMeta::new(page, query.page_size, total),
    }
}

/// Whether one record passes the search, category and date filters
pub fn matches<T: Record>(record: &T, query: &ListingQuery, today: NaiveDate) -> bool {
    matches_search(record, &query.search)
        && query
            .category
            .as_deref()
            .is_none_or(|category| record.in_category(category))
        && query.date_range.contains(today, record.date())
}

fn matches_search<T: Record>(record: &T, needle: &str) -> bool {
    needle.is_empty()
        || record.title().to_lowercase().contains(needle)
        || record.description().to_lowercase().contains(needle)
}

/// Ordering of two records under `sort`
pub fn compare<T: Record>(a: &T, b: &T, sort: SortKey) -> Ordering {
    match sort {
        SortKey::DateAsc => a.date().cmp(&b.date()),
        SortKey::DateDesc => b.date().cmp(&a.date()),
        SortKey::TitleAsc => title_key(a).cmp(&title_key(b)),
        SortKey::TitleDesc => title_key(b).cmp(&title_key(a)),
    }
}

fn title_key<T: Record>(record: &T) -> String {
    record.title().to_lowercase()
}
