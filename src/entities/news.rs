//! Campus news items

use crate::config::CollectionSettings;
use crate::core::error::ValidationError;
use crate::core::validation::FieldChecks;
use crate::impl_record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Publication date
    pub date: NaiveDate,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for [`NewsItem`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsDraft {
    pub title: Option<String>,
    #[serde(alias = "content")]
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    #[serde(alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl NewsItem {
    fn validate_draft(
        draft: NewsDraft,
        settings: &CollectionSettings,
    ) -> Result<Self, ValidationError> {
        let mut checks = FieldChecks::new();
        let title = checks.required_text("title", draft.title.as_deref(), 1, 255);
        let description =
            checks.required_text("description", draft.description.as_deref(), 1, 20_000);
        let category = checks.one_of("category", draft.category.as_deref(), &settings.categories);
        let date = checks.date("date", draft.date.as_deref());
        let author = checks.required_text("author", draft.author.as_deref(), 1, 100);
        let image_url = checks.optional_url("image_url", draft.image_url.as_deref());
        checks.finish()?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description,
            category,
            date: date.unwrap_or_default(),
            author,
            image_url,
            created_at: now,
            updated_at: now,
        })
    }
}

impl_record!(NewsItem, NewsDraft, "news_item", "news", {
    description: description,
    categories: one(category),
    date: date,
});
