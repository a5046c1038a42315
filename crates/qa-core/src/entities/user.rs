use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A forum member. Names are not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: Option<i64>,
    pub fname: String,
    pub lname: String,
}

impl User {
    /// Build an unsaved user.
    #[must_use]
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            id: None,
            fname: fname.into(),
            lname: lname.into(),
        }
    }
}
