use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Playlists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Playlists::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Playlists::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Artists::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Artists::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Artists::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Albums::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Albums::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Albums::Name).string().not_null())
                    .col(ColumnDef::new(Albums::ReleaseDate).date().not_null())
                    .to_owned(),
            )
            .await?;

        // preview_url is nullable; plenty of tracks have no preview
        manager
            .create_table(
                Table::create()
                    .table(Tracks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tracks::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Tracks::Name).string().not_null())
                    .col(ColumnDef::new(Tracks::PreviewUrl).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlaylistTracks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlaylistTracks::PlaylistId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PlaylistTracks::TrackId).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(PlaylistTracks::PlaylistId)
                            .col(PlaylistTracks::TrackId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_tracks_playlist_id")
                            .from(PlaylistTracks::Table, PlaylistTracks::PlaylistId)
                            .to(Playlists::Table, Playlists::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playlist_tracks_track_id")
                            .from(PlaylistTracks::Table, PlaylistTracks::TrackId)
                            .to(Tracks::Table, Tracks::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrackArtists::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TrackArtists::TrackId).string().not_null())
                    .col(ColumnDef::new(TrackArtists::ArtistId).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(TrackArtists::TrackId)
                            .col(TrackArtists::ArtistId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_artists_track_id")
                            .from(TrackArtists::Table, TrackArtists::TrackId)
                            .to(Tracks::Table, Tracks::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_artists_artist_id")
                            .from(TrackArtists::Table, TrackArtists::ArtistId)
                            .to(Artists::Table, Artists::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AlbumTracks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AlbumTracks::AlbumId).string().not_null())
                    .col(ColumnDef::new(AlbumTracks::TrackId).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(AlbumTracks::AlbumId)
                            .col(AlbumTracks::TrackId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_album_tracks_album_id")
                            .from(AlbumTracks::Table, AlbumTracks::AlbumId)
                            .to(Albums::Table, Albums::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_album_tracks_track_id")
                            .from(AlbumTracks::Table, AlbumTracks::TrackId)
                            .to(Tracks::Table, Tracks::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Join tables first, they reference everything else
        manager
            .drop_table(Table::drop().table(AlbumTracks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TrackArtists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PlaylistTracks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tracks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Albums::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Playlists::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Playlists {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Artists {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Albums {
    Table,
    Id,
    Name,
    ReleaseDate,
}

#[derive(DeriveIden)]
enum Tracks {
    Table,
    Id,
    Name,
    PreviewUrl,
}

#[derive(DeriveIden)]
enum PlaylistTracks {
    Table,
    PlaylistId,
    TrackId,
}

#[derive(DeriveIden)]
enum TrackArtists {
    Table,
    TrackId,
    ArtistId,
}

#[derive(DeriveIden)]
enum AlbumTracks {
    Table,
    AlbumId,
    TrackId,
}
