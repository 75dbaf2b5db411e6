//! Collection services: validation and logging in front of a store

use crate::config::CollectionSettings;
use crate::core::comment::{Comment, CommentDraft, CommentEdit};
use crate::core::entity::Record;
use crate::core::error::{CampusResult, RecordError};
use crate::core::query::{ListingQuery, Page, QueryParams};
use crate::core::registration::{Registration, RegistrationDraft};
use crate::core::service::{CampusStore, RegistrationStore};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// One collection of records with its settings
///
/// Every mutation validates its payload before the store is touched.
pub struct Collection<T: Record> {
    store: Arc<dyn CampusStore<T>>,
    settings: CollectionSettings,
}

impl<T: Record> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            settings: self.settings.clone(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(store: Arc<dyn CampusStore<T>>, settings: CollectionSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &CollectionSettings {
        &self.settings
    }

    pub fn categories(&self) -> &[String] {
        &self.settings.categories
    }

    /// Listing with the query string of a request, as of today (UTC)
    pub async fn list(&self, params: &QueryParams) -> CampusResult<Page<T>> {
        let query = ListingQuery::from_params(params, &self.settings.listing);
        self.list_at(&query, Utc::now().date_naive()).await
    }

    /// Listing with an explicit query and reference date
    pub async fn list_at(&self, query: &ListingQuery, today: NaiveDate) -> CampusResult<Page<T>> {
        let page = self.store.query(query, today).await?;
        tracing::debug!(
            collection = T::resource_name(),
            search = %query.search,
            category = ?query.category,
            date_range = ?query.date_range,
            sort = ?query.sort,
            total = page.total(),
            page = page.pagination.page,
            "listing"
        );
        Ok(page)
    }

    pub async fn get(&self, id: &Uuid) -> CampusResult<T> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| RecordError::not_found(T::resource_name(), *id).into())
    }

    pub async fn create(&self, draft: T::Draft) -> CampusResult<T> {
        let record = T::from_draft(draft, &self.settings)?;
        let created = self.store.create(record).await?;
        tracing::info!(
            collection = T::resource_name(),
            id = %created.id(),
            "record created"
        );
        Ok(created)
    }

    /// Store a record built outside the draft path (seeding, migration)
    ///
    /// Server-owned fields such as counters are taken as given.
    pub async fn import(&self, record: T) -> CampusResult<T> {
        self.store.create(record).await
    }

    /// Full-record replacement
    pub async fn update(&self, id: &Uuid, draft: T::Draft) -> CampusResult<T> {
        let previous = self.get(id).await?;
        let mut record = T::from_draft(draft, &self.settings)?;
        record.carry_over(&previous);
        let updated = self.store.update(id, record).await?;
        tracing::info!(collection = T::resource_name(), id = %id, "record updated");
        Ok(updated)
    }

    /// Delete a record with everything it owns
    pub async fn delete(&self, id: &Uuid) -> CampusResult<()> {
        self.store.delete(id).await?;
        tracing::info!(collection = T::resource_name(), id = %id, "record deleted");
        Ok(())
    }

    pub async fn add_comment(&self, parent_id: &Uuid, draft: CommentDraft) -> CampusResult<Comment> {
        let (author, text) = draft.validate(&self.settings.comments)?;
        let comment = self.store.add_comment(parent_id, author, text).await?;
        tracing::debug!(
            collection = T::resource_name(),
            parent_id = %parent_id,
            comment_id = %comment.id,
            "comment added"
        );
        Ok(comment)
    }

    pub async fn comments(&self, parent_id: &Uuid) -> CampusResult<Vec<Comment>> {
        self.store.comments(parent_id).await
    }

    pub async fn update_comment(
        &self,
        parent_id: &Uuid,
        comment_id: &Uuid,
        edit: CommentEdit,
    ) -> CampusResult<Comment> {
        let text = edit.validate(&self.settings.comments)?;
        self.store.update_comment(parent_id, comment_id, text).await
    }

    pub async fn delete_comment(&self, parent_id: &Uuid, comment_id: &Uuid) -> CampusResult<()> {
        self.store.delete_comment(parent_id, comment_id).await
    }
}

/// Registration front for a capacity-limited collection
#[derive(Clone)]
pub struct RegistrationDesk {
    store: Arc<dyn RegistrationStore>,
}

impl RegistrationDesk {
    pub fn new(store: Arc<dyn RegistrationStore>) -> Self {
        Self { store }
    }

    pub async fn register(
        &self,
        activity_id: &Uuid,
        draft: RegistrationDraft,
    ) -> CampusResult<Registration> {
        let user_name = draft.validate()?;
        match self.store.register(activity_id, user_name).await {
            Ok(registration) => {
                tracing::info!(
                    activity_id = %activity_id,
                    seat = registration.seat,
                    "registration accepted"
                );
                Ok(registration)
            }
            Err(err) => {
                tracing::warn!(activity_id = %activity_id, error = %err, "registration rejected");
                Err(err)
            }
        }
    }

    pub async fn registrations(&self, activity_id: &Uuid) -> CampusResult<Vec<Registration>> {
        self.store.registrations(activity_id).await
    }
}
