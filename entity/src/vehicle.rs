use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub passengers: i32,
    pub crew: i32,
    pub cargo_capacity: i32,
    pub consumables: i32,
    pub cost_in_credits: i64,
    pub length: i32,
    pub max_atmosphering_speed: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
