//! The uniform response envelope written for every request.

use serde::{Deserialize, Serialize};

/// Response body shape shared by success and failure outcomes.
///
/// A success carries only `data`; a failure carries `code`/`info` and, when
/// the debug posture allows, `desc`. Absent fields are omitted from the
/// wire entirely, so the envelope stays minimal in both directions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the operation was successful
    pub succeeded: bool,

    /// Returned data (present on success)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Business status code (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,

    /// Business hint for the client (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,

    /// Developer-facing description, only exposed in debug postures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl<T> Envelope<T> {
    /// Creates a success envelope wrapping `data`.
    pub fn success(data: T) -> Self {
        Self {
            succeeded: true,
            data: Some(data),
            code: None,
            info: None,
            desc: None,
        }
    }

    /// Creates a failure envelope carrying a business code and hint.
    pub fn failure(code: i32, info: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            data: None,
            code: Some(code),
            info: Some(info.into()),
            desc: None,
        }
    }

    /// Attaches a developer-facing description. An empty description is
    /// dropped so it never serializes as an empty string.
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        let desc = desc.into();
        if !desc.is_empty() {
            self.desc = Some(desc);
        }
        self
    }
}

/// Paginated payload record, used as envelope `data` for listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Offset into the result set
    pub offset: i64,
    /// Limit on the number of items
    pub limit: i64,
    /// Total number of items
    pub total: i64,
    /// Data list
    pub list: Vec<T>,
}

/// Payload record for mutations that report how many rows were touched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RowsAffected {
    /// Number of affected rows
    pub rows: i64,
}
