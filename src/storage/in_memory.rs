//! In-memory stores for development, tests and the demo server

use crate::core::comment::Comment;
use crate::core::entity::{Capacity, Record};
use crate::core::error::{CampusResult, RecordError, RegistrationError, StorageError};
use crate::core::listing;
use crate::core::query::{ListingQuery, Page};
use crate::core::registration::Registration;
use crate::core::service::{CommentStore, RecordStore, RegistrationStore};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

struct Inner<T> {
    /// Records in insertion order
    records: IndexMap<Uuid, T>,
    comments: HashMap<Uuid, Vec<Comment>>,
    registrations: HashMap<Uuid, Vec<Registration>>,
}

/// In-memory store for one collection
///
/// Records, comments and registrations share one `RwLock`, so a delete and
/// its cascade are a single critical section, and so is a registration. No
/// lock is held across an `.await`.
pub struct InMemoryStore<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Record> InMemoryStore<T> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                records: IndexMap::new(),
                comments: HashMap::new(),
                registrations: HashMap::new(),
            })),
        }
    }

    fn read(&self) -> CampusResult<RwLockReadGuard<'_, Inner<T>>> {
        self.inner.read().map_err(|e| {
            StorageError::LockPoisoned {
                message: format!("Failed to acquire read lock: {}", e),
            }
            .into()
        })
    }

    fn write(&self) -> CampusResult<RwLockWriteGuard<'_, Inner<T>>> {
        self.inner.write().map_err(|e| {
            StorageError::LockPoisoned {
                message: format!("Failed to acquire write lock: {}", e),
            }
            .into()
        })
    }

    fn not_found(id: &Uuid) -> RecordError {
        RecordError::not_found(T::resource_name(), *id)
    }

    fn comment_not_found(parent_id: &Uuid, comment_id: &Uuid) -> RecordError {
        RecordError::CommentNotFound {
            collection: T::resource_name().to_string(),
            parent_id: *parent_id,
            comment_id: *comment_id,
        }
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    async fn create(&self, record: T) -> CampusResult<T> {
        let mut inner = self.write()?;
        if inner.records.contains_key(&record.id()) {
            return Err(StorageError::IntegrityError {
                message: format!("duplicate id '{}' in {}", record.id(), T::resource_name()),
            }
            .into());
        }
        inner.records.insert(record.id(), record.clone());
        Ok(record)
    }

    async fn get(&self, id: &Uuid) -> CampusResult<Option<T>> {
        Ok(self.read()?.records.get(id).cloned())
    }

    async fn list(&self) -> CampusResult<Vec<T>> {
        Ok(self.read()?.records.values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, mut record: T) -> CampusResult<T> {
        let mut inner = self.write()?;
        let slot = inner.records.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        // Counters come from the live slot, never from the caller's earlier read
        record.carry_over(slot);
        *slot = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: &Uuid) -> CampusResult<()> {
        let mut inner = self.write()?;
        // shift_remove keeps the remaining records in insertion order
        inner
            .records
            .shift_remove(id)
            .ok_or_else(|| Self::not_found(id))?;
        inner.comments.remove(id);
        inner.registrations.remove(id);
        Ok(())
    }

    async fn query(&self, query: &ListingQuery, today: NaiveDate) -> CampusResult<Page<T>> {
        let inner = self.read()?;
        let snapshot: Vec<T> = inner.records.values().cloned().collect();
        drop(inner);
        Ok(listing::run(&snapshot, query, today))
    }
}

#[async_trait]
impl<T: Record> CommentStore for InMemoryStore<T> {
    async fn add_comment(
        &self,
        parent_id: &Uuid,
        author: String,
        text: String,
    ) -> CampusResult<Comment> {
        let mut inner = self.write()?;
        if !inner.records.contains_key(parent_id) {
            return Err(Self::not_found(parent_id).into());
        }
        let comment = Comment::new(*parent_id, author, text);
        inner
            .comments
            .entry(*parent_id)
            .or_default()
            .push(comment.clone());
        Ok(comment)
    }

    async fn comments(&self, parent_id: &Uuid) -> CampusResult<Vec<Comment>> {
        let inner = self.read()?;
        if !inner.records.contains_key(parent_id) {
            return Err(Self::not_found(parent_id).into());
        }
        // Appended in order, timestamps never go backwards
        Ok(inner.comments.get(parent_id).cloned().unwrap_or_default())
    }

    async fn update_comment(
        &self,
        parent_id: &Uuid,
        comment_id: &Uuid,
        text: String,
    ) -> CampusResult<Comment> {
        let mut inner = self.write()?;
        if !inner.records.contains_key(parent_id) {
            return Err(Self::not_found(parent_id).into());
        }
        let comment = inner
            .comments
            .get_mut(parent_id)
            .and_then(|comments| comments.iter_mut().find(|c| c.id == *comment_id))
            .ok_or_else(|| Self::comment_not_found(parent_id, comment_id))?;
        comment.text = text;
        comment.updated_at = Some(Utc::now());
        Ok(comment.clone())
    }

    async fn delete_comment(&self, parent_id: &Uuid, comment_id: &Uuid) -> CampusResult<()> {
        let mut inner = self.write()?;
        if !inner.records.contains_key(parent_id) {
            return Err(Self::not_found(parent_id).into());
        }
        let comments = inner
            .comments
            .get_mut(parent_id)
            .ok_or_else(|| Self::comment_not_found(parent_id, comment_id))?;
        let position = comments
            .iter()
            .position(|c| c.id == *comment_id)
            .ok_or_else(|| Self::comment_not_found(parent_id, comment_id))?;
        comments.remove(position);
        Ok(())
    }
}

#[async_trait]
impl<T: Capacity> RegistrationStore for InMemoryStore<T> {
    async fn register(&self, activity_id: &Uuid, user_name: String) -> CampusResult<Registration> {
        let mut inner = self.write()?;
        let record = inner
            .records
            .get_mut(activity_id)
            .ok_or_else(|| Self::not_found(activity_id))?;
        if record.is_full() {
            return Err(RegistrationError::CapacityExceeded {
                activity_id: *activity_id,
                capacity: record.capacity(),
            }
            .into());
        }
        let seat = record.registrations() + 1;
        record.set_registrations(seat);

        let registration = Registration::new(*activity_id, user_name, seat);
        inner
            .registrations
            .entry(*activity_id)
            .or_default()
            .push(registration.clone());
        Ok(registration)
    }

    async fn registrations(&self, activity_id: &Uuid) -> CampusResult<Vec<Registration>> {
        let inner = self.read()?;
        if !inner.records.contains_key(activity_id) {
            return Err(Self::not_found(activity_id).into());
        }
        Ok(inner
            .registrations
            .get(activity_id)
            .cloned()
            .unwrap_or_default())
    }
}
