use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "albums")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    /// First day of the period the catalog knows the release by
    pub release_date: chrono::NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::track::Entity> for Entity {
    fn to() -> RelationDef {
        super::album_track::Relation::Track.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::album_track::Relation::Album.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
