use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Result, SyncError};
use crate::ports::catalog::CatalogClient;
use crate::spotify_rs::types::{PlaylistTrackCount, PlaylistTracksPage};

pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Only the fields the cache stores are requested
const TRACK_FIELDS: &str =
    "items(track(id,name,preview_url,artists(id,name),album(id,name,release_date)))";

/// Spotify Web API client
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    base_url: String,
    client: reqwest::Client,
}

impl SpotifyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Issue one authenticated GET and decode the body as `T`
    async fn get<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?query, "Requesting catalog");

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(SyncError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Api {
                url,
                status,
                body: response
                    .text()
                    .await
                    .unwrap_or("Failed to get error text".to_string()),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl CatalogClient for SpotifyClient {
    async fn track_count(&self, token: &str, playlist_id: &str) -> Result<u32> {
        let count: PlaylistTrackCount = self
            .get(
                token,
                &format!("/playlists/{}", urlencoding::encode(playlist_id)),
                &[("fields", "tracks(total)".to_string())],
            )
            .await?;

        Ok(count.tracks.total)
    }

    async fn track_page(
        &self,
        token: &str,
        playlist_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<serde_json::Value>> {
        let page: PlaylistTracksPage = self
            .get(
                token,
                &format!("/playlists/{}/tracks", urlencoding::encode(playlist_id)),
                &[
                    ("limit", limit.to_string()),
                    ("offset", offset.to_string()),
                    ("fields", TRACK_FIELDS.to_string()),
                ],
            )
            .await?;

        Ok(page.items)
    }
}
