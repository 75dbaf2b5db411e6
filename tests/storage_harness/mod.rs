//! Shared test harness for storage backend testing
//!
//! Provides record builders over the stock configuration, a fixed reference
//! date for listing tests, and the macro-generated contract suites every
//! backend runs.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! record_store_tests!(InMemoryStore::<NewsItem>::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod record_store_tests;
#[macro_use]
pub mod registration_store_tests;

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use campus::config::{CampusConfig, CollectionSettings};
use campus::core::entity::Record;
use campus::core::service::RecordStore;
use campus::entities::{Activity, ActivityDraft, NewsDraft, NewsItem};

// ---------------------------------------------------------------------------
// Reference date
// ---------------------------------------------------------------------------

/// "Today" for every listing test
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
}

/// `today() - n` days, formatted the way payloads carry dates
pub fn days_ago(n: u64) -> String {
    (today() - Days::new(n)).format("%Y-%m-%d").to_string()
}

pub fn settings<T: Record>() -> CollectionSettings {
    CampusConfig::default_config().settings_for::<T>().unwrap()
}

// ---------------------------------------------------------------------------
// News items
// ---------------------------------------------------------------------------

pub fn news_draft(title: &str, description: &str, category: &str, date: &str) -> NewsDraft {
    NewsDraft {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        category: Some(category.to_string()),
        date: Some(date.to_string()),
        author: Some("Campus Desk".to_string()),
        image_url: None,
    }
}

pub fn news_item(title: &str, category: &str, date: &str) -> NewsItem {
    let draft = news_draft(title, &format!("Details about {}", title), category, date);
    NewsItem::from_draft(draft, &settings::<NewsItem>()).unwrap()
}

/// Five items spread over the last 40 days
///
/// | title | category | age (days) |
/// |---|---|---|
/// | Exam timetable published | Academic | 1 |
/// | basketball finals tonight | Sports | 3 |
/// | Library hours extended | Campus Life | 6 |
/// | Research grant awarded | Research | 15 |
/// | Orientation week recap | Events | 40 |
pub fn sample_news() -> Vec<NewsItem> {
    vec![
        news_item("Exam timetable published", "Academic", &days_ago(1)),
        news_item("basketball finals tonight", "Sports", &days_ago(3)),
        news_item("Library hours extended", "Campus Life", &days_ago(6)),
        news_item("Research grant awarded", "Research", &days_ago(15)),
        news_item("Orientation week recap", "Events", &days_ago(40)),
    ]
}

/// Insert [`sample_news`] and return the stored records in insertion order
pub async fn fill_news<S: RecordStore<NewsItem>>(store: &S) -> Vec<NewsItem> {
    let mut stored = Vec::new();
    for item in sample_news() {
        stored.push(store.create(item).await.unwrap());
    }
    stored
}

// ---------------------------------------------------------------------------
// Activities
// ---------------------------------------------------------------------------

pub fn activity_draft(title: &str, capacity: i64) -> ActivityDraft {
    ActivityDraft {
        title: Some(title.to_string()),
        description: Some("Weekly club meetup".to_string()),
        categories: vec!["Academic".to_string(), "Technology".to_string()],
        date: Some(days_ago(0)),
        time: Some("18:00".to_string()),
        location: Some("Student Union, Room 302".to_string()),
        club: Some("Coding Club".to_string()),
        capacity: Some(capacity),
        contact: Some("coding@campus.edu".to_string()),
    }
}

pub fn activity(title: &str, capacity: i64) -> Activity {
    Activity::from_draft(activity_draft(title, capacity), &settings::<Activity>()).unwrap()
}

// ---------------------------------------------------------------------------
// Assertions
// ---------------------------------------------------------------------------

pub fn ids<T: Record>(records: &[T]) -> Vec<Uuid> {
    records.iter().map(|r| r.id()).collect()
}

pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}
