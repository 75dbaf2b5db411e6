//! Core module: record traits, the listing engine and the services around it

pub mod collection;
pub mod comment;
pub mod entity;
pub mod error;
pub mod listing;
pub mod query;
pub mod registration;
pub mod service;
pub mod validation;

pub use collection::{Collection, RegistrationDesk};
pub use comment::{Comment, CommentDraft, CommentEdit, CommentLimits};
pub use entity::{Capacity, Record};
pub use error::{CampusError, CampusResult};
pub use query::{DateRange, ListingDefaults, ListingQuery, Page, PaginationMeta, QueryParams, SortKey};
pub use registration::{Registration, RegistrationDraft};
pub use service::{CampusStore, CommentStore, RecordStore, RegistrationStore};
