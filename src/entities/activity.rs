//! Club activities with a registration ceiling

use crate::config::CollectionSettings;
use crate::core::entity::Capacity;
use crate::core::error::ValidationError;
use crate::core::validation::FieldChecks;
use crate::impl_record;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    pub club: String,
    /// 0 means unlimited
    pub capacity: u32,
    pub registrations: u32,
    pub contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for [`Activity`]
///
/// `registrations` is server-owned and not accepted here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub categories: Vec<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub club: Option<String>,
    pub capacity: Option<i64>,
    pub contact: Option<String>,
}

impl Activity {
    fn validate_draft(
        draft: ActivityDraft,
        settings: &CollectionSettings,
    ) -> Result<Self, ValidationError> {
        let mut checks = FieldChecks::new();
        let title = checks.required_text("title", draft.title.as_deref(), 1, 255);
        let description =
            checks.required_text("description", draft.description.as_deref(), 1, 20_000);
        let categories = checks.many_of("categories", &draft.categories, &settings.categories);
        let date = checks.date("date", draft.date.as_deref());
        let time = checks.time("time", draft.time.as_deref());
        let location = checks.required_text("location", draft.location.as_deref(), 1, 255);
        let club = if settings.clubs.is_empty() {
            checks.required_text("club", draft.club.as_deref(), 1, 100)
        } else {
            checks.one_of("club", draft.club.as_deref(), &settings.club_names())
        };
        let capacity = match draft.capacity {
            None => 0,
            Some(n) => u32::try_from(n).unwrap_or_else(|_| {
                checks.fail("capacity", "'capacity' must be a non-negative number");
                0
            }),
        };
        let contact = checks.required_email("contact", draft.contact.as_deref());
        checks.finish()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            categories,
            date: date.unwrap_or_default(),
            time: time.unwrap_or_default(),
            location,
            club,
            capacity,
            registrations: 0,
            contact,
            created_at: now,
            updated_at: now,
        })
    }

    /// Places left; `None` when unlimited
    pub fn places_left(&self) -> Option<u32> {
        (self.capacity > 0).then(|| self.capacity.saturating_sub(self.registrations))
    }
}

impl_record!(Activity, ActivityDraft, "activity", "activities", {
    description: description,
    categories: many(categories),
    date: date,
    keep: [registrations],
});

impl Capacity for Activity {
    fn capacity(&self) -> u32 {
        self.capacity
    }

    fn registrations(&self) -> u32 {
        self.registrations
    }

    fn set_registrations(&mut self, registrations: u32) {
        self.registrations = registrations;
    }
}
