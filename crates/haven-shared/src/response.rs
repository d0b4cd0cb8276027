//! Response envelopes.
//!
//! Successful responses nest their data under a resource key alongside a
//! human-readable message: `{"article": {..., "message": "..."}}`.
//! Errors map field names to lists of messages: `{"errors": {"rating": [...]}}`.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Standard successful API response wrapper.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub resource: &'static str,
    pub data: T,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(resource: &'static str, data: T) -> Self {
        Self {
            resource,
            data,
            message: None,
        }
    }

    pub fn ok_with_message(resource: &'static str, data: T, message: impl Into<String>) -> Self {
        Self {
            resource,
            data,
            message: Some(message.into()),
        }
    }
}

#[derive(Serialize)]
struct Payload<'a, T> {
    #[serde(flatten)]
    data: &'a T,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            self.resource,
            &Payload {
                data: &self.data,
                message: self.message.as_deref(),
            },
        )?;
        map.end()
    }
}

/// Error body: field name to messages. Non-field errors use the `error` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorResponse {
    pub const GENERAL: &'static str = "error";

    pub fn new(errors: BTreeMap<String, Vec<String>>) -> Self {
        Self { errors }
    }

    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), vec![message.into()]);
        Self { errors }
    }

    /// A single message that is not tied to a field.
    pub fn general(message: impl Into<String>) -> Self {
        Self::field(Self::GENERAL, message)
    }

    pub fn internal_error() -> Self {
        Self::general("Internal server error")
    }
}
