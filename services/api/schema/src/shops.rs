use sea_orm::entity::prelude::*;

/// A boba-tea shop. Rows are immutable after creation in normal flow.
///
/// `place_id` is the external place identifier carried over from bulk
/// imports; unique when present.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "shops")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    #[sea_orm(unique)]
    pub place_id: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::drinks::Entity")]
    Drinks,
}

impl Related<super::drinks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drinks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
