use serde::{Deserialize, Serialize};

/// Wrapper for Sanity query API responses.
///
/// The query endpoint returns `{"result": <value>, "ms": <n>}`. A query
/// matching nothing yields `"result": null`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse<T> {
    pub result: Option<T>,
    pub ms: Option<u64>,
}

/// A Sanity `slug` field (`{"current": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }
}

/// A reference to another document (`{"_ref": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub id: String,
}
