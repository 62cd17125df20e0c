use serde::{Deserialize, Serialize};
use simd_json::OwnedValue;

/// `OrderedCollection` reduced to what the client navigates by
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub total_items: Option<u64>,
    pub first: String,
    #[serde(default)]
    pub last: Option<String>,
}

/// `OrderedCollectionPage` whose items are kept as opaque JSON
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub part_of: Option<String>,
    pub ordered_items: Vec<OwnedValue>,
}
