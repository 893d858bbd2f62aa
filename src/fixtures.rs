use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DbBackend, DbConn, EntityTrait, Schema, Set};

use crate::entities::{companies, prelude::*, queues, user_queues, users};

pub const COMPANY_1_ID: i32 = 1;
pub const COMPANY_2_ID: i32 = 2;

pub const QUEUE_SALES_ID: i32 = 10;
pub const QUEUE_SUPPORT_ID: i32 = 11;
pub const QUEUE_BILLING_ID: i32 = 12;

/// Super admin of company 1
pub const ROOT_USER_ID: i32 = 1;
/// Super admin of company 2
pub const SECOND_ROOT_USER_ID: i32 = 2;
/// Plain agent of company 1, member of Sales and Support
pub const AGENT_USER_ID: i32 = 5;
/// Non-super admin of company 1
pub const ADMIN_USER_ID: i32 = 6;
/// Plain agent of company 2
pub const OTHER_TENANT_USER_ID: i32 = 7;

pub const AGENT_WHATSAPP_ID: i32 = 3;

lazy_static! {
    // 2024-11-10 12:03:34
    pub static ref TEST_CREATED_DT: DateTime<Utc> = DateTime::<Utc>::from_timestamp_millis(1731240214000).unwrap();
    // 2024-11-12 08:30:00
    pub static ref TEST_UPDATED_DT: DateTime<Utc> = DateTime::<Utc>::from_timestamp_millis(1731400200000).unwrap();
}

pub async fn create_test_db() -> anyhow::Result<DbConn> {
    // In-memory Sqlite connection
    let db = Database::connect("sqlite::memory:").await?;

    // Schema and Tables SeaOrm statements, parents first
    let schema = Schema::new(DbBackend::Sqlite);
    let company_stmt: TableCreateStatement = schema.create_table_from_entity(Companies);
    let user_stmt: TableCreateStatement = schema.create_table_from_entity(Users);
    let queue_stmt: TableCreateStatement = schema.create_table_from_entity(Queues);
    let user_queue_stmt: TableCreateStatement = schema.create_table_from_entity(UserQueues);

    db.execute(db.get_database_backend().build(&company_stmt)).await?;
    db.execute(db.get_database_backend().build(&user_stmt)).await?;
    db.execute(db.get_database_backend().build(&queue_stmt)).await?;
    db.execute(db.get_database_backend().build(&user_queue_stmt)).await?;

    Companies::insert_many(vec![
        companies::ActiveModel {
            id: Set(COMPANY_1_ID),
            name: Set(String::from("Acme Support")),
            email: Set(Some(String::from("contact@acme.com"))),
            phone: Set(None),
        },
        companies::ActiveModel {
            id: Set(COMPANY_2_ID),
            name: Set(String::from("Globex")),
            email: Set(None),
            phone: Set(Some(String::from("+55 11 5555-0100"))),
        },
    ]).exec(&db).await?;

    Queues::insert_many(vec![
        queue(QUEUE_SALES_ID, "Sales", "#2563eb"),
        queue(QUEUE_SUPPORT_ID, "Support", "#16a34a"),
        queue(QUEUE_BILLING_ID, "Billing", "#dc2626"),
    ]).exec(&db).await?;

    Users::insert_many(vec![
        user(ROOT_USER_ID, "Root Admin", "root@acme.com", "admin", true, COMPANY_1_ID, None),
        user(SECOND_ROOT_USER_ID, "Second Root", "root@globex.com", "admin", true, COMPANY_2_ID, None),
        user(AGENT_USER_ID, "Bob Agent", "bob@acme.com", "user", false, COMPANY_1_ID, Some(AGENT_WHATSAPP_ID)),
        user(ADMIN_USER_ID, "Carol Admin", "carol@acme.com", "admin", false, COMPANY_1_ID, None),
        user(OTHER_TENANT_USER_ID, "Dave Agent", "dave@globex.com", "user", false, COMPANY_2_ID, None),
    ]).exec(&db).await?;

    UserQueues::insert_many(vec![
        user_queues::ActiveModel { user_id: Set(AGENT_USER_ID), queue_id: Set(QUEUE_SALES_ID) },
        user_queues::ActiveModel { user_id: Set(AGENT_USER_ID), queue_id: Set(QUEUE_SUPPORT_ID) },
    ]).exec_without_returning(&db).await?;

    Ok(db)
}

fn queue(id: i32, name: &str, color: &str) -> queues::ActiveModel {
    queues::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        color: Set(color.to_string()),
    }
}

fn user(
    id: i32,
    name: &str,
    email: &str,
    profile: &str,
    is_super: bool,
    company_id: i32,
    whatsapp_id: Option<i32>,
) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password: Set(String::from("password")),
        profile: Set(profile.to_string()),
        is_super: Set(is_super),
        company_id: Set(company_id),
        whatsapp_id: Set(whatsapp_id),
        created_at: Set(*TEST_CREATED_DT),
        updated_at: Set(*TEST_CREATED_DT),
    }
}
