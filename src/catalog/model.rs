use serde::{Deserialize, Serialize};

/// A single playable audio item as served by the catalog.
///
/// Field names follow the server's camelCase JSON. `favorite` is the
/// client-side flag kept in sync by the favorite toggle; the server omits
/// it from plain track listings, hence the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: u64,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    /// Streaming URL for the audio file.
    pub url: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub lrc_url: Option<String>,
    /// Track length in seconds, when the server knows it.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub play_count: u64,
    #[serde(default)]
    pub favorite: bool,
}

/// Confirmed result of a favorite toggle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteToggle {
    pub is_favorited: bool,
    pub message: String,
}
