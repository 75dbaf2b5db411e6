//! Route table of the REST API

use super::dispatch::dispatch;
use super::handlers::{self, AppState};
use super::host::{CampusHost, HostsCollection};
use crate::core::entity::Record;
use crate::entities::{Activity, Event, NewsItem, Note};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};

/// Routes of one collection
///
/// - GET/POST `/{plural}`
/// - GET `/{plural}/categories`
/// - GET/PUT/DELETE `/{plural}/{id}`
/// - GET/POST `/{plural}/{id}/comments`
/// - PUT/DELETE `/{plural}/{id}/comments/{comment_id}`
pub fn collection_routes<T>() -> Router<AppState>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let plural = T::resource_name();
    Router::new()
        .route(
            &format!("/{plural}"),
            get(handlers::list_records::<T>).post(handlers::create_record::<T>),
        )
        .route(
            &format!("/{plural}/categories"),
            get(handlers::list_categories::<T>),
        )
        .route(
            &format!("/{plural}/{{id}}"),
            get(handlers::get_record::<T>)
                .put(handlers::update_record::<T>)
                .delete(handlers::delete_record::<T>),
        )
        .route(
            &format!("/{plural}/{{id}}/comments"),
            get(handlers::list_comments::<T>).post(handlers::add_comment::<T>),
        )
        .route(
            &format!("/{plural}/{{id}}/comments/{{comment_id}}"),
            put(handlers::update_comment::<T>).delete(handlers::delete_comment::<T>),
        )
}

/// Registration and reference-data routes
fn registration_routes() -> Router<AppState> {
    let plural = Activity::resource_name();
    Router::new()
        .route(
            &format!("/{plural}/{{id}}/register"),
            post(handlers::register),
        )
        .route(
            &format!("/{plural}/{{id}}/registrations"),
            get(handlers::list_registrations),
        )
        .route("/clubs", get(handlers::list_clubs))
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "campus-hub"
    }))
}

/// Every route of the API, before state is attached
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(collection_routes::<NewsItem>())
        .merge(collection_routes::<Activity>())
        .merge(collection_routes::<Note>())
        .merge(collection_routes::<Event>())
        .merge(registration_routes())
        .route("/api", get(dispatch).post(dispatch).put(dispatch).delete(dispatch))
}
