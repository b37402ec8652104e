//! Member record exchanged with the `member` table.

use serde::{Deserialize, Serialize};

/// A member row as inserted and selected by the member mapper
///
/// No field-level validation is applied; the record carries whatever the
/// caller supplies, empty strings included. Ownership is transient: callers
/// build a record per statement call and pass it by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Display name
    pub name: String,

    /// Login id (primary key in the member table)
    pub id: String,

    /// Contact phone number
    pub phone: String,
}

impl Member {
    /// Creates a new member record
    pub fn new(name: impl Into<String>, id: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            phone: phone.into(),
        }
    }
}
