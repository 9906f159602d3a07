use crate::error::Result;

/// Port trait wrapping the catalog API calls the sync pipeline needs.
///
/// Implemented by `spotify_rs::client::SpotifyClient` in production and by
/// mocks in tests. Both calls issue exactly one request; paging through a
/// playlist is up to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Total number of tracks in the playlist.
    async fn track_count(&self, token: &str, playlist_id: &str) -> Result<u32>;

    /// Raw playlist items starting at `offset`, at most `limit` of them.
    async fn track_page(
        &self,
        token: &str,
        playlist_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<serde_json::Value>>;
}
