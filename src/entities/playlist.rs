use sea_orm::entity::prelude::*;

/// A playlist as configured for syncing. Never produced by the catalog API.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "playlists")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        super::playlist_track::Relation::Track.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::playlist_track::Relation::Playlist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
