//! Events calendar entries

use crate::config::CollectionSettings;
use crate::core::error::ValidationError;
use crate::core::validation::FieldChecks;
use crate::impl_record;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    /// Who may attend
    pub invited: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expectations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for [`Event`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    #[serde(alias = "startTime")]
    pub start_time: Option<String>,
    #[serde(alias = "endTime")]
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub invited: Option<String>,
    pub expectations: Option<String>,
    #[serde(alias = "contactEmail")]
    pub contact_email: Option<String>,
    #[serde(alias = "registrationLink")]
    pub registration_link: Option<String>,
}

impl Event {
    fn validate_draft(
        draft: EventDraft,
        settings: &CollectionSettings,
    ) -> Result<Self, ValidationError> {
        let mut checks = FieldChecks::new();
        let title = checks.required_text("title", draft.title.as_deref(), 1, 255);
        let description =
            checks.required_text("description", draft.description.as_deref(), 1, 20_000);
        let category = checks.one_of("category", draft.category.as_deref(), &settings.categories);
        let date = checks.date("date", draft.date.as_deref());
        let start_time = checks.time("start_time", draft.start_time.as_deref());
        let end_time = checks.time("end_time", draft.end_time.as_deref());
        if let (Some(start), Some(end)) = (start_time, end_time) {
            if start >= end {
                checks.fail("end_time", "'end_time' must be after 'start_time'");
            }
        }
        let location = checks.required_text("location", draft.location.as_deref(), 1, 255);
        let invited = checks.required_text("invited", draft.invited.as_deref(), 1, 255);
        let expectations = checks.optional_text("expectations", draft.expectations.as_deref(), 20_000);
        let contact_email = checks.optional_email("contact_email", draft.contact_email.as_deref());
        let registration_link =
            checks.optional_url("registration_link", draft.registration_link.as_deref());
        checks.finish()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            category,
            date: date.unwrap_or_default(),
            start_time: start_time.unwrap_or_default(),
            end_time: end_time.unwrap_or_default(),
            location,
            invited,
            expectations,
            contact_email,
            registration_link,
            created_at: now,
            updated_at: now,
        })
    }
}

impl_record!(Event, EventDraft, "event", "events", {
    description: description,
    categories: one(category),
    date: date,
});
