use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::store::models::{CompanyRecord, QueueRef, UserRecord};

///
/// Partial field set of an update. Absent fields are left as stored,
/// except `whatsapp_id`, which is cleared unless a non-zero id is given.
///
#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[validate(email(message = "email must be a valid email"))]
    pub email: Option<String>,
    pub password: Option<String>,
    /// At least two UTF-16 code units, checked in `validation::validate_fields`
    pub name: Option<String>,
    pub profile: Option<String>,
    pub company_id: Option<i32>,
    pub queue_ids: Option<Vec<i32>>,
    pub whatsapp_id: Option<i32>,
}

#[derive(Clone, Debug)]
pub struct UpdateUserRequest {
    pub user_data: UserData,
    /// Target user
    pub user_id: i32,
    /// Tenant of the caller
    pub company_id: i32,
    /// Acting identity
    pub request_user_id: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseModel {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub profile: String,
    pub company_id: i32,
    pub company: Option<CompanyRecord>,
    pub queues: Vec<QueueRef>,
}

impl UserResponseModel {
    pub fn project(user: UserRecord, company: Option<CompanyRecord>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            profile: user.profile,
            company_id: user.company_id,
            company,
            queues: user.queues,
        }
    }
}
