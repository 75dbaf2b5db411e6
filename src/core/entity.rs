//! Record traits defining the core abstraction for all listed data types

use crate::config::CollectionSettings;
use crate::core::error::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Base trait for every record a collection holds.
///
/// A record exposes the fields the listing engine reads:
/// - id: Unique identifier within the collection
/// - title / description: searched case-insensitively
/// - categories: one entry for single-category records, several for activities
/// - date: the calendar date used by date-range filters and date sorting
///
/// Records are serialized whole into the store, so they must be serde types.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Payload accepted on create and full update
    type Draft: DeserializeOwned + Send + 'static;

    /// The plural resource name used in URLs (e.g., "news", "activities")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "news_item", "activity")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    fn title(&self) -> &str;

    fn description(&self) -> &str;

    /// Categories the record belongs to, in canonical spelling
    fn categories(&self) -> &[String];

    /// Calendar date used for date filters and date sorting
    fn date(&self) -> NaiveDate;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;

    /// Validate a draft and build a brand-new record from it
    fn from_draft(draft: Self::Draft, settings: &CollectionSettings) -> Result<Self, ValidationError>;

    /// Keep identity and server-owned fields of `previous` on a fresh record
    ///
    /// Used by full-record updates: the draft is validated into a new record,
    /// which then inherits id, creation time and counters from the stored one.
    fn carry_over(&mut self, previous: &Self);

    /// Case-insensitive membership test against [`Record::categories`]
    fn in_category(&self, category: &str) -> bool {
        let wanted = category.to_lowercase();
        self.categories()
            .iter()
            .any(|c| c.to_lowercase() == wanted)
    }
}

/// Records with a registration ceiling
pub trait Capacity: Record {
    /// Maximum registrations; 0 means unlimited
    fn capacity(&self) -> u32;

    fn registrations(&self) -> u32;

    fn set_registrations(&mut self, registrations: u32);

    /// Whether one more registration would exceed the ceiling
    fn is_full(&self) -> bool {
        let capacity = self.capacity();
        capacity > 0 && self.registrations() >= capacity
    }
}
