use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub profile: String,
    #[sea_orm(column_name = "super")]
    pub is_super: bool,
    pub company_id: i32,
    pub whatsapp_id: Option<i32>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::companies::Entity",
        from = "Column::CompanyId",
        to = "super::companies::Column::Id"
    )]
    Companies,
    #[sea_orm(has_many = "super::user_queues::Entity")]
    UserQueues,
}

impl Related<super::companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl Related<super::user_queues::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserQueues.def()
    }
}

impl Related<super::queues::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_queues::Relation::Queues.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::user_queues::Relation::Users.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
