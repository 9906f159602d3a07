pub mod album;
pub mod album_track;
pub mod artist;
pub mod playlist;
pub mod playlist_track;
pub mod track;
pub mod track_artist;
