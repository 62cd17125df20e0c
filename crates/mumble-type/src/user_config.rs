use serde::{Deserialize, Serialize};

/// Per-user configuration served by the backend
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Name of the bucket uploaded media objects are stored in
    pub objects_bucket_name: String,
}
