use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "queues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_queues::Entity")]
    UserQueues,
}

impl Related<super::user_queues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserQueues.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_queues::Relation::Users.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::user_queues::Relation::Queues.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
