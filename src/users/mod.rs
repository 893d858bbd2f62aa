pub mod error;
pub mod guard;
pub mod models;
pub mod routes;
pub mod validation;


use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::store::{models::{FieldUpdate, UserPatch, UserRecord}, DynRecordStore};

use {error::*, guard::ActingActor, models::*};

pub type DynUserService = Arc<dyn UserService + Send + Sync>;

#[async_trait]
pub trait UserService {
    async fn get_user(&self, user_id: i32) -> Result<UserResponseModel>;
    ///
    /// Loads the target, authorizes the actor, validates the fields,
    /// then writes the fields and replaces the queue memberships.
    /// Guard and validation failures happen before any write.
    ///
    async fn update_user(&self, req: UpdateUserRequest) -> Result<UserResponseModel>;
}

pub struct StoreUserService {
    store: DynRecordStore,
}

#[async_trait]
impl UserService for StoreUserService {
    async fn get_user(&self, user_id: i32) -> Result<UserResponseModel> {
        let user = self.load_user(user_id).await?;
        self.serialize(user).await
    }

    async fn update_user(&self, req: UpdateUserRequest) -> Result<UserResponseModel> {
        let UpdateUserRequest { user_data, user_id, company_id, request_user_id } = req;
        debug!("User {} updating user {} in company {}", request_user_id, user_id, company_id);

        let target = self.load_user(user_id).await?;
        guard::check_demotion(&target, &user_data, request_user_id)?;

        let actor = ActingActor::resolve(&self.store, request_user_id).await?;
        guard::authorize(&target, &user_data, &actor, company_id)?;
        validation::validate_fields(&user_data)?;

        let user = self.apply_update(target.id, user_data).await?;
        info!("User {} updated by user {}", user.id, request_user_id);

        self.serialize(user).await
    }
}

impl StoreUserService {
    pub fn new_dyn(store: DynRecordStore) -> DynUserService {
        Arc::new(Self { store })
    }

    async fn load_user(&self, user_id: i32) -> Result<UserRecord> {
        self.store.find_user(user_id).await?
            .ok_or(Error::UserNotFound(user_id))
    }

    async fn apply_update(&self, user_id: i32, user_data: UserData) -> Result<UserRecord> {
        let UserData { email, password, name, profile, queue_ids, whatsapp_id, .. } = user_data;

        let patch = UserPatch {
            email,
            password,
            name,
            profile,
            whatsapp_id: match whatsapp_id {
                Some(id) if id != 0 => FieldUpdate::Set(id),
                _ => FieldUpdate::Clear,
            },
        };

        self.store.update_user(user_id, patch).await?;
        self.store.set_user_queues(user_id, queue_ids.unwrap_or_default()).await?;

        // Reload so the response reflects the replaced memberships
        self.load_user(user_id).await
    }

    async fn serialize(&self, user: UserRecord) -> Result<UserResponseModel> {
        let company = self.store.find_company(user.company_id).await?;
        Ok(UserResponseModel::project(user, company))
    }
}
