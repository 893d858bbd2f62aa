pub mod error;
pub mod models;


use std::{collections::BTreeSet, sync::Arc};

use async_trait::async_trait;
use log::debug;
#[cfg(test)]
use mockall::automock;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DbConn, EntityTrait, IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, Set, TransactionTrait};

use crate::{entities::{prelude::*, queues, user_queues, users}, time::DynDateTimeProvider};

use {error::*, models::*};

pub type DynRecordStore = Arc<dyn RecordStore + Send + Sync>;

///
/// Fetch and persist operations over users, companies and
/// queue memberships.
///
/// No method takes a lock on the user row: two concurrent updates
/// to the same user may interleave between `update_user` and
/// `set_user_queues`.
///
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecordStore {
    async fn find_user(&self, user_id: i32) -> Result<Option<UserRecord>>;
    async fn find_company(&self, company_id: i32) -> Result<Option<CompanyRecord>>;
    ///
    /// Overwrites the fields present in `patch` and returns the
    /// persisted row. `updated_at` is always stamped.
    ///
    async fn update_user(&self, user_id: i32, patch: UserPatch) -> Result<UserRecord>;
    ///
    /// Sets the user's queue memberships to exactly `queue_ids`.
    /// Duplicate ids collapse.
    ///
    async fn set_user_queues(&self, user_id: i32, queue_ids: Vec<i32>) -> Result<()>;
}

pub struct DbConnRecordStore {
    db: DbConn,
    dt_provider: DynDateTimeProvider,
}

#[async_trait]
impl RecordStore for DbConnRecordStore {
    async fn find_user(&self, user_id: i32) -> Result<Option<UserRecord>> {
        let user = Users::find_by_id(user_id).one(&self.db).await?;
        return match user {
            Some(user) => Ok(Some(load_with_queues(&self.db, user).await?)),
            None => Ok(None),
        };
    }

    async fn find_company(&self, company_id: i32) -> Result<Option<CompanyRecord>> {
        let company = Companies::find_by_id(company_id).one(&self.db).await?;
        Ok(company.map(CompanyRecord::from))
    }

    async fn update_user(&self, user_id: i32, patch: UserPatch) -> Result<UserRecord> {
        let tx = self.db.begin().await?;
        let user = Users::find_by_id(user_id).one(&tx).await?;

        let Some(user) = user else {
            return Err(Error::UserNotFound(user_id));
        };

        let mut user = user.into_active_model();
        user.email = if let Some(email) = patch.email { Set(email) } else { NotSet };
        user.password = if let Some(pwd) = patch.password { Set(pwd) } else { NotSet };
        user.name = if let Some(name) = patch.name { Set(name) } else { NotSet };
        user.profile = if let Some(profile) = patch.profile { Set(profile) } else { NotSet };
        user.whatsapp_id = match patch.whatsapp_id {
            FieldUpdate::Unchanged => NotSet,
            FieldUpdate::Clear => Set(None),
            FieldUpdate::Set(whatsapp_id) => Set(Some(whatsapp_id)),
        };
        user.updated_at = Set(self.dt_provider.utc_now());

        let user = Users::update(user).exec(&tx).await?;
        let user = load_with_queues(&tx, user).await?;
        tx.commit().await?;

        Ok(user)
    }

    async fn set_user_queues(&self, user_id: i32, queue_ids: Vec<i32>) -> Result<()> {
        let queue_ids: BTreeSet<i32> = queue_ids.into_iter().collect();

        let tx = self.db.begin().await?;
        if Users::find_by_id(user_id).one(&tx).await?.is_none() {
            return Err(Error::UserNotFound(user_id));
        }

        let removed = UserQueues::delete_many()
            .filter(user_queues::Column::UserId.eq(user_id))
            .exec(&tx).await?
            .rows_affected;

        // insert_many rejects an empty batch
        if !queue_ids.is_empty() {
            UserQueues::insert_many(
                queue_ids.iter().map(|queue_id| user_queues::ActiveModel {
                    user_id: Set(user_id),
                    queue_id: Set(*queue_id),
                })
            )
                .exec_without_returning(&tx).await?;
        }
        tx.commit().await?;

        debug!("Replaced {} queue memberships of user {} with {:?}", removed, user_id, queue_ids);
        Ok(())
    }
}

impl DbConnRecordStore {
    pub fn new_dyn(db: DbConn, dt_provider: DynDateTimeProvider) -> DynRecordStore {
        Arc::new(Self { db, dt_provider })
    }
}

async fn load_with_queues(conn: &impl ConnectionTrait, user: users::Model) -> Result<UserRecord> {
    let queues = user.find_related(Queues)
        .order_by_asc(queues::Column::Id)
        .all(conn).await?;
    Ok(UserRecord::from_model(user, queues))
}
