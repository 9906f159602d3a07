use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A playlist to keep cached. Comes from configuration, not from the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub release_date: NaiveDate,
}

/// A normalized catalog track together with the entities it references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub preview_url: Option<String>,
    /// Credited artists in the order the catalog lists them
    pub artists: Vec<Artist>,
    pub album: Album,
}
