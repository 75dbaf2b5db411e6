//! Comments attached to records

use crate::core::error::ValidationError;
use crate::core::validation::FieldChecks;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment owned by one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn new(parent_id: Uuid, author: String, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            parent_id,
            author,
            text,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Length limits for comment fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentLimits {
    #[serde(default = "default_author_max")]
    pub author_max: usize,

    #[serde(default = "default_text_max")]
    pub text_max: usize,
}

fn default_author_max() -> usize {
    100
}

fn default_text_max() -> usize {
    2000
}

impl Default for CommentLimits {
    fn default() -> Self {
        Self {
            author_max: default_author_max(),
            text_max: default_text_max(),
        }
    }
}

/// Payload for a new comment
///
/// `content` and `comment` are accepted as spellings of `text`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentDraft {
    #[serde(default)]
    pub author: Option<String>,

    #[serde(default, alias = "content", alias = "comment")]
    pub text: Option<String>,
}

impl CommentDraft {
    pub fn new(author: &str, text: &str) -> Self {
        Self {
            author: Some(author.to_string()),
            text: Some(text.to_string()),
        }
    }

    /// Validate and return trimmed `(author, text)`
    pub fn validate(&self, limits: &CommentLimits) -> Result<(String, String), ValidationError> {
        let mut checks = FieldChecks::new();
        let author = checks.required_text("author", self.author.as_deref(), 1, limits.author_max);
        let text = checks.required_text("text", self.text.as_deref(), 1, limits.text_max);
        checks.finish()?;
        Ok((author, text))
    }
}

/// Payload for editing a comment; only the text changes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentEdit {
    #[serde(default, alias = "content", alias = "comment")]
    pub text: Option<String>,
}

impl CommentEdit {
    pub fn validate(&self, limits: &CommentLimits) -> Result<String, ValidationError> {
        let mut checks = FieldChecks::new();
        let text = checks.required_text("text", self.text.as_deref(), 1, limits.text_max);
        checks.finish()?;
        Ok(text)
    }
}
