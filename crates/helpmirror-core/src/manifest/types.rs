//! Manifest data model: `{"data": [ ...items... ]}` with all unknown fields kept.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The JSON manifest: an ordered sequence of items under the fixed `data` key.
/// Top-level fields other than `data` survive a load/write round trip untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub data: Vec<Item>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One manifest record. The four identity fields feed filename derivation and
/// may be strings or numbers in the wild, so they stay as raw JSON values.
/// Fields this tool does not interpret are preserved via the flattened map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "helpCategoryId", skip_serializing_if = "Option::is_none")]
    pub help_category_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(rename = "detailUrl", skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// The item's document location, if it is a non-empty string.
    /// Anything else (absent, null, empty, non-string) counts as missing.
    pub fn url(&self) -> Option<&str> {
        match &self.detail_url {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    pub fn set_url(&mut self, url: String) {
        self.detail_url = Some(Value::String(url));
    }
}
