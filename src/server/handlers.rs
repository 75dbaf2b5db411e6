//! Generic REST handlers shared by every collection
//!
//! Each handler is generic over the record type and picks its collection from
//! the host through [`HostsCollection`].

use super::host::{CampusHost, HostsCollection};
use crate::config::Club;
use crate::core::comment::{Comment, CommentDraft, CommentEdit};
use crate::core::entity::Record;
use crate::core::error::{CampusResult, RequestError};
use crate::core::query::{Page, PaginationMeta, QueryParams};
use crate::core::registration::{Registration, RegistrationDraft};
use crate::core::validation::JsonBody;
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Shared state of every route
pub type AppState = Arc<CampusHost>;

/// Success envelope around a single value
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub status: &'static str,
    pub data: T,
}

/// Success envelope around one page of a listing
#[derive(Debug, Serialize)]
pub struct ListEnvelope<T> {
    pub status: &'static str,
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Body of a successful delete
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: Uuid,
    pub deleted: bool,
}

pub fn success<T: Serialize>(data: T) -> Json<DataEnvelope<T>> {
    Json(DataEnvelope {
        status: "success",
        data,
    })
}

pub fn page<T: Serialize>(page: Page<T>) -> Json<ListEnvelope<T>> {
    Json(ListEnvelope {
        status: "success",
        items: page.items,
        pagination: page.pagination,
    })
}

/// Parse a path or query id
pub fn parse_id(raw: &str) -> CampusResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        RequestError::InvalidId {
            id: raw.to_string(),
        }
        .into()
    })
}

/// Query strings that do not even deserialize list with defaults
fn params_or_default(params: Result<Query<QueryParams>, QueryRejection>) -> QueryParams {
    match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable listing query, using defaults");
            QueryParams::default()
        }
    }
}

// =============================================================================
// Records
// =============================================================================

pub async fn list_records<T>(
    State(host): State<AppState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> CampusResult<Json<ListEnvelope<T>>>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let params = params_or_default(params);
    Ok(page(host.collection::<T>().list(&params).await?))
}

pub async fn create_record<T>(
    State(host): State<AppState>,
    JsonBody(draft): JsonBody<T::Draft>,
) -> CampusResult<(StatusCode, Json<DataEnvelope<T>>)>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let record = host.collection::<T>().create(draft).await?;
    Ok((StatusCode::CREATED, success(record)))
}

pub async fn get_record<T>(
    State(host): State<AppState>,
    Path(id): Path<String>,
) -> CampusResult<Json<DataEnvelope<T>>>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let id = parse_id(&id)?;
    Ok(success(host.collection::<T>().get(&id).await?))
}

pub async fn update_record<T>(
    State(host): State<AppState>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<T::Draft>,
) -> CampusResult<Json<DataEnvelope<T>>>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let id = parse_id(&id)?;
    Ok(success(host.collection::<T>().update(&id, draft).await?))
}

pub async fn delete_record<T>(
    State(host): State<AppState>,
    Path(id): Path<String>,
) -> CampusResult<Json<DataEnvelope<Deleted>>>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let id = parse_id(&id)?;
    host.collection::<T>().delete(&id).await?;
    Ok(success(Deleted { id, deleted: true }))
}

pub async fn list_categories<T>(State(host): State<AppState>) -> Json<DataEnvelope<Vec<String>>>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    success(host.collection::<T>().categories().to_vec())
}

// =============================================================================
// Comments
// =============================================================================

pub async fn list_comments<T>(
    State(host): State<AppState>,
    Path(id): Path<String>,
) -> CampusResult<Json<DataEnvelope<Vec<Comment>>>>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let id = parse_id(&id)?;
    Ok(success(host.collection::<T>().comments(&id).await?))
}

pub async fn add_comment<T>(
    State(host): State<AppState>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<CommentDraft>,
) -> CampusResult<(StatusCode, Json<DataEnvelope<Comment>>)>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let id = parse_id(&id)?;
    let comment = host.collection::<T>().add_comment(&id, draft).await?;
    Ok((StatusCode::CREATED, success(comment)))
}

pub async fn update_comment<T>(
    State(host): State<AppState>,
    Path((id, comment_id)): Path<(String, String)>,
    JsonBody(edit): JsonBody<CommentEdit>,
) -> CampusResult<Json<DataEnvelope<Comment>>>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let id = parse_id(&id)?;
    let comment_id = parse_id(&comment_id)?;
    let comment = host
        .collection::<T>()
        .update_comment(&id, &comment_id, edit)
        .await?;
    Ok(success(comment))
}

pub async fn delete_comment<T>(
    State(host): State<AppState>,
    Path((id, comment_id)): Path<(String, String)>,
) -> CampusResult<Json<DataEnvelope<Deleted>>>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let id = parse_id(&id)?;
    let comment_id = parse_id(&comment_id)?;
    host.collection::<T>()
        .delete_comment(&id, &comment_id)
        .await?;
    Ok(success(Deleted {
        id: comment_id,
        deleted: true,
    }))
}

// =============================================================================
// Registrations and reference data
// =============================================================================

pub async fn register(
    State(host): State<AppState>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<RegistrationDraft>,
) -> CampusResult<(StatusCode, Json<DataEnvelope<Registration>>)> {
    let id = parse_id(&id)?;
    let registration = host.registrations.register(&id, draft).await?;
    Ok((StatusCode::CREATED, success(registration)))
}

pub async fn list_registrations(
    State(host): State<AppState>,
    Path(id): Path<String>,
) -> CampusResult<Json<DataEnvelope<Vec<Registration>>>> {
    let id = parse_id(&id)?;
    Ok(success(host.registrations.registrations(&id).await?))
}

pub async fn list_clubs(State(host): State<AppState>) -> Json<DataEnvelope<Vec<Club>>> {
    success(host.config.clubs().to_vec())
}
