use serde::{Deserialize, Serialize};

/// One entry of a photo album. Read-only; rendered directly by the vault
/// page with no relationships to other records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: i64,
    pub id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}
