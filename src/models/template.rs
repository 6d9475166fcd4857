//! Domain model for message templates.
//!
//! The server returns template records with a handful of known fields plus
//! whatever else the template editor attaches; unknown fields are kept as an
//! opaque map rather than forced into a schema.

use serde::{Deserialize, Serialize};

/// A server-defined message layout, referenced by id when sending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub template_id: String,
    pub name: String,
    /// Additional server-provided fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
