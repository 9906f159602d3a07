use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, EntityTrait, Set};

use crate::database::TableCounts;
use crate::entities;
use crate::error::Result;
use crate::models::{Album, Artist, Playlist, Track};

/// Insert-if-absent writes into the cache tables.
///
/// Every write is `INSERT ... ON CONFLICT DO NOTHING` on the row's natural
/// key: a row that is already cached is never touched, even when the catalog
/// now reports different attributes for it. Each method returns whether a
/// row was actually inserted.
pub struct CacheWriter<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CacheWriter<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert_playlist(&self, playlist: &Playlist) -> Result<bool> {
        let model = entities::playlist::ActiveModel {
            id: Set(playlist.id.clone()),
            name: Set(playlist.name.clone()),
        };

        let rows = entities::playlist::Entity::insert(model)
            .on_conflict(
                OnConflict::column(entities::playlist::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.conn)
            .await?;

        Ok(rows > 0)
    }

    pub async fn insert_artist(&self, artist: &Artist) -> Result<bool> {
        let model = entities::artist::ActiveModel {
            id: Set(artist.id.clone()),
            name: Set(artist.name.clone()),
        };

        let rows = entities::artist::Entity::insert(model)
            .on_conflict(
                OnConflict::column(entities::artist::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.conn)
            .await?;

        Ok(rows > 0)
    }

    pub async fn insert_album(&self, album: &Album) -> Result<bool> {
        let model = entities::album::ActiveModel {
            id: Set(album.id.clone()),
            name: Set(album.name.clone()),
            release_date: Set(album.release_date),
        };

        let rows = entities::album::Entity::insert(model)
            .on_conflict(
                OnConflict::column(entities::album::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.conn)
            .await?;

        Ok(rows > 0)
    }

    /// Insert the track row only; relationships are written separately
    pub async fn insert_track(&self, track: &Track) -> Result<bool> {
        let model = entities::track::ActiveModel {
            id: Set(track.id.clone()),
            name: Set(track.name.clone()),
            preview_url: Set(track.preview_url.clone()),
        };

        let rows = entities::track::Entity::insert(model)
            .on_conflict(
                OnConflict::column(entities::track::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.conn)
            .await?;

        Ok(rows > 0)
    }

    pub async fn link_playlist_track(&self, playlist_id: &str, track_id: &str) -> Result<bool> {
        let model = entities::playlist_track::ActiveModel {
            playlist_id: Set(playlist_id.to_string()),
            track_id: Set(track_id.to_string()),
        };

        let rows = entities::playlist_track::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    entities::playlist_track::Column::PlaylistId,
                    entities::playlist_track::Column::TrackId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.conn)
            .await?;

        Ok(rows > 0)
    }

    pub async fn link_track_artist(&self, track_id: &str, artist_id: &str) -> Result<bool> {
        let model = entities::track_artist::ActiveModel {
            track_id: Set(track_id.to_string()),
            artist_id: Set(artist_id.to_string()),
        };

        let rows = entities::track_artist::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    entities::track_artist::Column::TrackId,
                    entities::track_artist::Column::ArtistId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.conn)
            .await?;

        Ok(rows > 0)
    }

    pub async fn link_album_track(&self, album_id: &str, track_id: &str) -> Result<bool> {
        let model = entities::album_track::ActiveModel {
            album_id: Set(album_id.to_string()),
            track_id: Set(track_id.to_string()),
        };

        let rows = entities::album_track::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    entities::album_track::Column::AlbumId,
                    entities::album_track::Column::TrackId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.conn)
            .await?;

        Ok(rows > 0)
    }

    /// Write a track with its album, artists and all three relationships.
    ///
    /// Rows are written so that every foreign key already exists when it is
    /// referenced. The playlist itself must have been inserted beforehand.
    pub async fn write_track(&self, playlist_id: &str, track: &Track) -> Result<TableCounts> {
        let mut inserted = TableCounts::default();

        inserted.albums += self.insert_album(&track.album).await? as u64;
        inserted.tracks += self.insert_track(track).await? as u64;
        inserted.album_tracks += self.link_album_track(&track.album.id, &track.id).await? as u64;
        inserted.playlist_tracks += self.link_playlist_track(playlist_id, &track.id).await? as u64;

        for artist in &track.artists {
            inserted.artists += self.insert_artist(artist).await? as u64;
            inserted.track_artists += self.link_track_artist(&track.id, &artist.id).await? as u64;
        }

        tracing::trace!(track_id = %track.id, ?inserted, "Cached track");
        Ok(inserted)
    }
}
