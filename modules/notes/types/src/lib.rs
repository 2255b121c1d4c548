//! Shared types for the notes service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A stored note. The id is assigned by the server on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub name: String,
    pub text: String,
}

// =====================================================
// Request Types
// =====================================================

/// Body of a create, update or echo request.
///
/// Missing fields decode as empty strings. On update an empty field
/// means "leave unchanged"; an `id` sent by the client is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
}

impl NoteFields {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Name of the first required field that is empty, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.name.is_empty() {
            Some("name")
        } else if self.text.is_empty() {
            Some("text")
        } else {
            None
        }
    }
}

// =====================================================
// Response Types
// =====================================================

/// Error body: `{"detail": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub detail: String,
}

impl Detail {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { detail: msg.into() }
    }
}

/// Acknowledgement body: `{"status": "ok"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
