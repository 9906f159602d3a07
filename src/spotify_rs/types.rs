use serde::{Deserialize, Deserializer};

/// Spotify client-credentials token response
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Response of `GET /playlists/{id}?fields=tracks(total)`
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackCount {
    pub tracks: PlaylistTrackTotal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackTotal {
    pub total: u32,
}

/// One page of `GET /playlists/{id}/tracks`.
///
/// Items are kept as raw JSON here; turning them into tracks is the
/// normalizer's job.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<serde_json::Value>,
}

/// A playlist item as requested through the `fields` filter
#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyPlaylistItem {
    pub track: SpotifyTrack,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyTrack {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "string_or_none")]
    pub preview_url: Option<String>,
    pub artists: Vec<SpotifyArtist>,
    pub album: SpotifyAlbum,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotifyAlbum {
    pub id: String,
    pub name: String,
    /// `YYYY`, `YYYY-MM` or `YYYY-MM-DD` depending on `release_date_precision`
    pub release_date: String,
}

/// Spotify sends `null` for tracks without a preview; anything that isn't a
/// string is treated the same way.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(url) => Some(url),
        _ => None,
    })
}
