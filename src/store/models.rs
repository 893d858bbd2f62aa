use serde::Serialize;

use crate::entities::{companies, queues, users};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueRef {
    pub id: i32,
    pub name: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

///
/// A user row together with its current queue memberships,
/// ordered by queue id.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub profile: String,
    pub is_super: bool,
    pub company_id: i32,
    pub whatsapp_id: Option<i32>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub queues: Vec<QueueRef>,
}

///
/// Three-way update for a nullable column: leave it alone,
/// clear it to NULL, or overwrite it.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    Unchanged,
    Clear,
    Set(T),
}

///
/// Field overwrites applied by `RecordStore::update_user`.
/// `None` leaves the stored value untouched.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub profile: Option<String>,
    pub whatsapp_id: FieldUpdate<i32>,
}

impl From<queues::Model> for QueueRef {
    fn from(queue: queues::Model) -> Self {
        Self { id: queue.id, name: queue.name, color: queue.color }
    }
}

impl From<companies::Model> for CompanyRecord {
    fn from(company: companies::Model) -> Self {
        Self {
            id: company.id,
            name: company.name,
            email: company.email,
            phone: company.phone,
        }
    }
}

impl UserRecord {
    pub(super) fn from_model(user: users::Model, queues: Vec<queues::Model>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            password: user.password,
            profile: user.profile,
            is_super: user.is_super,
            company_id: user.company_id,
            whatsapp_id: user.whatsapp_id,
            updated_at: user.updated_at,
            queues: queues.into_iter().map(QueueRef::from).collect(),
        }
    }
}
