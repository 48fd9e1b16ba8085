use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default page size when the client omits `limit`.
pub const DEFAULT_LIMIT: usize = 10;
/// Smallest accepted page size.
pub const MIN_LIMIT: usize = 1;
/// Largest accepted page size; caps how much a single request can pull.
pub const MAX_LIMIT: usize = 50;

/// A corpus document. `id` and `message` are required; any other fields are
/// carried through untouched and returned with search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            extra: Map::new(),
        }
    }
}

/// Search request, taken from the query string.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Page position metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Navigation links. `prev` and `next` are null at the ends of the result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: String,
    pub first: String,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: String,
}

/// One page of ranked results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<Document>,
    pub pagination: Pagination,
    pub links: Links,
}
