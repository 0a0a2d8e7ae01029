//! Domain payload shapes and response coercion
//!
//! The API responds with `{ data: <list|object>, meta: <object|null> }`.
//! Transforms here normalize that into the two payload shapes the site
//! consumes. Coercion is defensive, never failing: a `data` field that is
//! not a list becomes an empty list, an absent or null `meta` becomes
//! `None`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// List-shaped content (prices, equipment, teachers, rules).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPayload {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub meta: Option<Value>,
}

/// Object-shaped content (studio info).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectPayload {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub meta: Option<Value>,
}

fn take_field(raw: &mut Value, key: &str) -> Option<Value> {
    raw.get_mut(key)
        .map(Value::take)
        .filter(|value| !value.is_null())
}

/// Normalize a raw response into a list payload.
pub fn list_from_response(mut raw: Value) -> ListPayload {
    let meta = take_field(&mut raw, "meta");
    let items = match take_field(&mut raw, "data") {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    };

    ListPayload { items, meta }
}

/// Normalize a raw response into an object payload.
pub fn object_from_response(mut raw: Value) -> ObjectPayload {
    ObjectPayload {
        meta: take_field(&mut raw, "meta"),
        data: take_field(&mut raw, "data"),
    }
}
