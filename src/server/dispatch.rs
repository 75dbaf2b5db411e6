//! `/api?action=` endpoint
//!
//! A single route that selects the operation from the `action` query
//! parameter and the HTTP method, then runs the same handler the REST route
//! for that operation runs.
//!
//! | action | GET | POST | PUT | DELETE |
//! |---|---|---|---|---|
//! | `news`, `activities`, `notes`, `events` | list, or get with `id` | create | update `id` | delete `id` |
//! | `comments` | list for `id` | add to `id` | edit `comment_id` | delete `comment_id` |
//! | `register` | registrations of `id` | register for `id` | | |
//! | `categories` | categories of `collection` | | | |
//! | `clubs` | club list | | | |
//!
//! `comments` and `categories` take the collection in `collection`; the parent
//! record id of `comments` may also be given as `parent_id`.

use super::handlers::{self, AppState};
use super::host::{CampusHost, HostsCollection};
use crate::core::entity::Record;
use crate::core::error::{CampusResult, RequestError};
use crate::core::query::QueryParams;
use crate::core::validation::JsonBody;
use crate::entities::{Activity, Event, NewsItem, Note};
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::Method;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

/// Run `$body` with `T` bound to the record type of a collection name
macro_rules! by_collection {
    ($name:expr, |$t:ident| $body:expr) => {{
        let name: String = $name;
        match name.as_str() {
            "news" => {
                type $t = NewsItem;
                $body
            }
            "activities" => {
                type $t = Activity;
                $body
            }
            "notes" => {
                type $t = Note;
                $body
            }
            "events" => {
                type $t = Event;
                $body
            }
            _ => Err(RequestError::UnknownAction {
                action: name.clone(),
            }
            .into()),
        }
    }};
}

/// Parsed `/api` request
struct ApiCall {
    action: String,
    method: Method,
    /// Query string pairs in request order
    params: Vec<(String, String)>,
    body: Bytes,
}

impl ApiCall {
    fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())
    }

    fn require(&self, name: &str) -> CampusResult<String> {
        self.param(name).map(str::to_string).ok_or_else(|| {
            RequestError::MissingParameter {
                parameter: name.to_string(),
            }
            .into()
        })
    }

    /// Parent record id of a comment call
    fn parent_id(&self) -> CampusResult<String> {
        match self.param("parent_id") {
            Some(parent) => Ok(parent.to_string()),
            None => self.require("id"),
        }
    }

    fn json<T: DeserializeOwned>(&self) -> CampusResult<JsonBody<T>> {
        serde_json::from_slice(&self.body)
            .map(JsonBody)
            .map_err(|err| {
                RequestError::InvalidBody {
                    message: err.to_string(),
                }
                .into()
            })
    }

    /// Listing parameters carried on the same query string
    fn listing(&self) -> QueryParams {
        QueryParams::from_pairs(self.params.iter().map(|(key, value)| (key, value.clone())))
    }

    fn method_not_allowed(&self) -> RequestError {
        RequestError::MethodNotAllowed {
            method: self.method.to_string(),
            action: self.action.clone(),
        }
    }
}

pub async fn dispatch(
    State(host): State<AppState>,
    method: Method,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: Bytes,
) -> CampusResult<Response> {
    let params = params.map(|Query(params)| params).unwrap_or_default();
    let action = params
        .iter()
        .find(|(key, _)| key == "action")
        .map(|(_, action)| action.trim().to_lowercase())
        .filter(|action| !action.is_empty())
        .ok_or_else(|| RequestError::MissingParameter {
            parameter: "action".to_string(),
        })?;

    let call = ApiCall {
        action,
        method,
        params,
        body,
    };
    tracing::debug!(action = %call.action, method = %call.method, "api dispatch");

    match call.action.as_str() {
        "comments" => {
            let collection = call.require("collection")?;
            by_collection!(collection, |T| comment_action::<T>(host, &call).await)
        }
        "categories" => {
            if call.method != Method::GET {
                return Err(call.method_not_allowed().into());
            }
            let collection = call.require("collection")?;
            by_collection!(collection, |T| Ok(handlers::list_categories::<T>(State(host))
                .await
                .into_response()))
        }
        "register" => register_action(host, &call).await,
        "clubs" => {
            if call.method != Method::GET {
                return Err(call.method_not_allowed().into());
            }
            Ok(handlers::list_clubs(State(host)).await.into_response())
        }
        action => {
            let action = action.to_string();
            by_collection!(action, |T| record_action::<T>(host, &call).await)
        }
    }
}

async fn record_action<T>(host: AppState, call: &ApiCall) -> CampusResult<Response>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let response = match call.method {
        Method::GET => match call.param("id") {
            Some(id) => handlers::get_record::<T>(State(host), Path(id.to_string()))
                .await?
                .into_response(),
            None => handlers::list_records::<T>(State(host), Ok(Query(call.listing())))
                .await?
                .into_response(),
        },
        Method::POST => handlers::create_record::<T>(State(host), call.json()?)
            .await?
            .into_response(),
        Method::PUT => {
            handlers::update_record::<T>(State(host), Path(call.require("id")?), call.json()?)
                .await?
                .into_response()
        }
        Method::DELETE => handlers::delete_record::<T>(State(host), Path(call.require("id")?))
            .await?
            .into_response(),
        _ => return Err(call.method_not_allowed().into()),
    };
    Ok(response)
}

async fn comment_action<T>(host: AppState, call: &ApiCall) -> CampusResult<Response>
where
    T: Record,
    CampusHost: HostsCollection<T>,
{
    let parent = call.parent_id()?;
    let response = match call.method {
        Method::GET => handlers::list_comments::<T>(State(host), Path(parent))
            .await?
            .into_response(),
        Method::POST => handlers::add_comment::<T>(State(host), Path(parent), call.json()?)
            .await?
            .into_response(),
        Method::PUT => {
            let comment_id = call.require("comment_id")?;
            handlers::update_comment::<T>(State(host), Path((parent, comment_id)), call.json()?)
                .await?
                .into_response()
        }
        Method::DELETE => {
            let comment_id = call.require("comment_id")?;
            handlers::delete_comment::<T>(State(host), Path((parent, comment_id)))
                .await?
                .into_response()
        }
        _ => return Err(call.method_not_allowed().into()),
    };
    Ok(response)
}

async fn register_action(host: AppState, call: &ApiCall) -> CampusResult<Response> {
    let id = call.require("id")?;
    let response = match call.method {
        Method::GET => handlers::list_registrations(State(host), Path(id))
            .await?
            .into_response(),
        Method::POST => handlers::register(State(host), Path(id), call.json()?)
            .await?
            .into_response(),
        _ => return Err(call.method_not_allowed().into()),
    };
    Ok(response)
}
