use std::sync::Arc;

use crate::database::{Database, TableCounts};
use crate::error::Result;
use crate::handoff::{HandoffSender, handoff};
use crate::models::{Playlist, Track};
use crate::normalize::normalize_item;
use crate::ports::catalog::CatalogClient;
use crate::services::cache_writer::CacheWriter;

/// Tracks requested per page
pub const PAGE_SIZE: u32 = 50;

/// Offsets of every page needed to cover `total` items
pub fn page_offsets(total: u32, page_size: u32) -> impl Iterator<Item = u32> {
    (0..total.div_ceil(page_size)).map(move |page| page * page_size)
}

/// Outcome of a sync pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub playlists: usize,
    /// Tracks received from the catalog, cached before or not
    pub tracks: u64,
    /// Rows that did not exist in the cache yet
    pub inserted: TableCounts,
}

/// Refreshes the cache from the catalog, one playlist and one page at a time.
pub struct PlaylistSyncService<C: CatalogClient + 'static> {
    db: Arc<Database>,
    client: Arc<C>,
    token: String,
    playlists: Vec<Playlist>,
}

impl<C: CatalogClient + 'static> PlaylistSyncService<C> {
    pub fn new(db: Arc<Database>, client: C, token: String, playlists: Vec<Playlist>) -> Self {
        Self {
            db,
            client: Arc::new(client),
            token,
            playlists,
        }
    }

    /// Sync every configured playlist in order. The first error aborts the pass;
    /// rows written before it stay cached.
    pub async fn run(&self) -> Result<SyncReport> {
        let writer = CacheWriter::new(&self.db.conn);
        let mut report = SyncReport::default();

        for (index, playlist) in self.playlists.iter().enumerate() {
            tracing::info!(
                "[{:3}/{:3}] updating playlist: {}",
                index + 1,
                self.playlists.len(),
                playlist.name
            );
            self.sync_playlist(&writer, playlist, &mut report).await?;
            report.playlists += 1;
        }

        tracing::info!(
            playlists = report.playlists,
            tracks = report.tracks,
            inserted_rows = report.inserted.total(),
            "Sync finished"
        );
        Ok(report)
    }

    async fn sync_playlist(
        &self,
        writer: &CacheWriter<'_, sea_orm::DatabaseConnection>,
        playlist: &Playlist,
        report: &mut SyncReport,
    ) -> Result<()> {
        report.inserted.playlists += writer.insert_playlist(playlist).await? as u64;

        let total = self.client.track_count(&self.token, &playlist.id).await?;

        for offset in page_offsets(total, PAGE_SIZE) {
            tracing::info!("[{:3}/{:3}] updating tracks", offset, total);

            let (sender, mut receiver) = handoff();
            let producer = tokio::spawn(produce_page(
                self.client.clone(),
                self.token.clone(),
                playlist.id.clone(),
                offset,
                sender,
            ));

            while let Some(track) = receiver.recv().await {
                report.inserted += writer.write_track(&playlist.id, &track).await?;
                report.tracks += 1;
            }

            // The channel closes both on success and on failure; the producer's result tells which
            producer.await??;
        }

        Ok(())
    }
}

/// Fetch one page and hand its tracks over one at a time.
async fn produce_page<C: CatalogClient>(
    client: Arc<C>,
    token: String,
    playlist_id: String,
    offset: u32,
    sender: HandoffSender<Track>,
) -> Result<()> {
    let items = client
        .track_page(&token, &playlist_id, offset, PAGE_SIZE)
        .await?;
    tracing::debug!(%playlist_id, offset, items = items.len(), "Fetched page");

    for raw in items {
        let track = normalize_item(raw)?;
        if sender.send(track).await.is_err() {
            // Consumer gave up; its error is the one reported
            break;
        }
    }

    Ok(())
}
