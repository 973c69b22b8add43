//! Stored record and request payload for the todo service.
//!
//! # Design
//! `Todo` is what the collection holds and what every response body carries.
//! `title` and `description` are optional because the service stores whatever
//! the caller sent, including nothing; absent fields are left out of the JSON
//! object rather than written as `null`.
//!
//! `TodoInput` is decoded leniently from raw body bytes instead of through a
//! typed `Json` extractor: a body that is empty, malformed, shaped wrong, or
//! not declared as `application/json` never rejects the request, it just
//! yields absent fields.

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fields a caller may send on create or update.
///
/// `completed` is decoded so it can be logged, but the store never copies it
/// into a `Todo`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TodoInput {
    /// Decode a request body, but only when the request declares a JSON
    /// content type. Any other body reads as `{}`.
    pub fn from_request(headers: &HeaderMap, body: &[u8]) -> Self {
        if is_json(headers) {
            Self::from_body(body)
        } else {
            Self::default()
        }
    }

    /// Decode a request body. Anything that is not a JSON object counts as `{}`,
    /// and fields of the wrong JSON type count as absent.
    pub fn from_body(body: &[u8]) -> Self {
        let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
            return Self::default();
        };
        Self {
            title: take_string(&mut fields, "title"),
            description: take_string(&mut fields, "description"),
            completed: fields.get("completed").and_then(Value::as_bool),
        }
    }
}

/// `application/json`, with or without parameters such as `charset`.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
