//! # Campus Hub
//!
//! Backend for the campus apps: news, club activities, course notes and
//! campus events, served as one REST API.
//!
//! ## Features
//!
//! - **Listing Query Engine**: search, category and date-range filters, sorting
//!   and clamped pagination, identical on every collection and backend
//! - **Comments**: a comment thread under every record
//! - **Registration Counter**: capacity-checked activity sign-ups that never
//!   overbook under concurrent requests
//! - **Configuration-Based**: categories, page sizes and clubs come from YAML
//! - **Pluggable Storage**: in-memory by default, MySQL behind the `mysql` feature
//! - **Two Surfaces**: resource routes and a single `/api?action=` endpoint
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use campus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = CampusConfig::default_config().with_env_overrides();
//!     campus::init_tracing(&config.server.log_level);
//!
//!     let bind = config.server.bind.clone();
//!     let host = CampusHost::connect(config).await?;
//!     ServerBuilder::new().with_host(host).serve(&bind).await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod seed;
pub mod server;
pub mod storage;

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` wins when set; otherwise `default_level` applies (a level such
/// as `info` or a full filter directive). Calling it twice is harmless.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        collection::{Collection, RegistrationDesk},
        comment::{Comment, CommentDraft, CommentEdit},
        entity::{Capacity, Record},
        error::{CampusError, CampusResult},
        query::{DateRange, ListingQuery, Page, PaginationMeta, QueryParams, SortKey},
        registration::{Registration, RegistrationDraft},
        service::{CampusStore, CommentStore, RecordStore, RegistrationStore},
    };

    // === Records ===
    pub use crate::entities::{
        Activity, ActivityDraft, Event, EventDraft, NewsDraft, NewsItem, Note, NoteDraft,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "mysql")]
    pub use crate::storage::MysqlStore;

    // === Config ===
    pub use crate::config::{CampusConfig, Club, CollectionSettings, StorageBackend};

    // === Server ===
    pub use crate::server::{CampusHost, ServerBuilder, Stores};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
