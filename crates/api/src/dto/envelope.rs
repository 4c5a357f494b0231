use axum::Json;
use serde::{Deserialize, Serialize};

/// Standard success body: `{ "data": ... }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Wraps a handler result in the standard envelope.
pub fn envelope<T: Serialize>(data: T) -> Json<DataEnvelope<T>> {
    Json(DataEnvelope { data })
}
