//! Course notes
//!
//! Notes have no event date of their own; the listing date is the day the
//! note was last written.

use crate::config::CollectionSettings;
use crate::core::error::ValidationError;
use crate::core::validation::FieldChecks;
use crate::impl_record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Course code (e.g. "CS", "MATHS")
    pub category: String,
    /// Day of the last write
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for [`Note`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteDraft {
    pub title: Option<String>,
    #[serde(alias = "description")]
    pub content: Option<String>,
    #[serde(alias = "course")]
    pub category: Option<String>,
}

impl Note {
    fn validate_draft(
        draft: NoteDraft,
        settings: &CollectionSettings,
    ) -> Result<Self, ValidationError> {
        let mut checks = FieldChecks::new();
        let title = checks.required_text("title", draft.title.as_deref(), 3, 255);
        let content = checks.required_text("content", draft.content.as_deref(), 10, 65_535);
        let category = checks.one_of("category", draft.category.as_deref(), &settings.categories);
        checks.finish()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            content,
            category,
            date: now.date_naive(),
            created_at: now,
            updated_at: now,
        })
    }
}

impl_record!(Note, NoteDraft, "note", "notes", {
    description: content,
    categories: one(category),
    date: date,
});
