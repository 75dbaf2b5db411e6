//! Store traits for records, comments and registrations
//!
//! Stores receive values that were already validated by
//! [`Collection`](crate::core::collection::Collection); they only check what
//! needs the stored state (existence, capacity).

use crate::core::comment::Comment;
use crate::core::entity::Record;
use crate::core::error::CampusResult;
use crate::core::query::{ListingQuery, Page};
use crate::core::registration::Registration;
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// CRUD and listing over one collection
///
/// Implementations must keep insertion order for [`RecordStore::list`] so that
/// listings with equal sort keys come out in a stable order.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Insert a new record
    async fn create(&self, record: T) -> CampusResult<T>;

    /// Get a record by ID
    async fn get(&self, id: &Uuid) -> CampusResult<Option<T>>;

    /// Snapshot of the whole collection in insertion order
    async fn list(&self) -> CampusResult<Vec<T>>;

    /// Replace a record; `RecordError::NotFound` if the id is unknown
    async fn update(&self, id: &Uuid, record: T) -> CampusResult<T>;

    /// Delete a record with its comments and registrations
    async fn delete(&self, id: &Uuid) -> CampusResult<()>;

    /// One page of a listing, with the same result as
    /// [`listing::run`](crate::core::listing::run) over [`RecordStore::list`]
    async fn query(&self, query: &ListingQuery, today: NaiveDate) -> CampusResult<Page<T>>;
}

/// Comments owned by the records of one collection
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Append a comment; `RecordError::NotFound` if the parent is unknown
    async fn add_comment(
        &self,
        parent_id: &Uuid,
        author: String,
        text: String,
    ) -> CampusResult<Comment>;

    /// Comments of one record, oldest first
    async fn comments(&self, parent_id: &Uuid) -> CampusResult<Vec<Comment>>;

    async fn update_comment(
        &self,
        parent_id: &Uuid,
        comment_id: &Uuid,
        text: String,
    ) -> CampusResult<Comment>;

    async fn delete_comment(&self, parent_id: &Uuid, comment_id: &Uuid) -> CampusResult<()>;
}

/// Registration counter of a capacity-limited collection
///
/// The capacity check and the increment are one atomic unit.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    /// Take one place; `RegistrationError::CapacityExceeded` when full
    async fn register(&self, activity_id: &Uuid, user_name: String) -> CampusResult<Registration>;

    /// Registrations of one record, in the order they were accepted
    async fn registrations(&self, activity_id: &Uuid) -> CampusResult<Vec<Registration>>;
}

/// Everything a collection needs from its backend
pub trait CampusStore<T: Record>: RecordStore<T> + CommentStore {}

impl<T: Record, S: RecordStore<T> + CommentStore> CampusStore<T> for S {}
