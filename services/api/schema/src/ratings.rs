use sea_orm::entity::prelude::*;

/// A user's opinion of a drink: numeric score plus optional review text.
///
/// The migration adds a unique index on `(user_id, drink_id)` — at most one
/// rating per pair. Writes go through `ON CONFLICT DO UPDATE` keyed on it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ratings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub drink_id: Uuid,
    pub value: f64,
    pub review: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::drinks::Entity",
        from = "Column::DrinkId",
        to = "super::drinks::Column::Id"
    )]
    Drink,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::drinks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Drink.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
