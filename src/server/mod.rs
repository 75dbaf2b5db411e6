//! HTTP server: host state, REST routes and the `/api` dispatcher
//!
//! Every collection gets the same generated routes:
//! - listing, create, get, update and delete
//! - comment sub-resource routes
//! - its category list
//!
//! Activities additionally expose registration routes.

pub mod builder;
pub mod dispatch;
pub mod handlers;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use host::{CampusHost, HostsCollection, Stores};
pub use router::{api_routes, collection_routes};
