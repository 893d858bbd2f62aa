use crate::store::{models::UserRecord, DynRecordStore};

use super::{error::*, models::UserData};

/// Least-privileged profile. Demoting a super user to it is guarded.
pub const BASE_PROFILE: &str = "user";

///
/// The acting identity, read once per request so every check
/// sees the same state.
///
#[derive(Clone, Debug)]
pub struct ActingActor {
    pub id: i32,
    pub user: Option<UserRecord>,
}

impl ActingActor {
    pub async fn resolve(store: &DynRecordStore, id: i32) -> Result<Self> {
        let user = store.find_user(id).await?;
        Ok(Self { id, user })
    }
}

///
/// Checks 1 and 2, which need no acting user:
///
/// 1. a super user demoting themselves to the base profile
/// 2. anyone else demoting a super user to the base profile
///
pub fn check_demotion(target: &UserRecord, user_data: &UserData, actor_id: i32) -> Result<()> {
    let demotes_to_base = user_data.profile.as_deref() == Some(BASE_PROFILE);

    if target.is_super && demotes_to_base {
        return Err(if target.id == actor_id {
            Error::CannotChangeSuperAdminProfileToUser
        } else {
            Error::CannotEditSuperUserProfile
        });
    }

    Ok(())
}

///
/// Checks 3 and 4, run once `check_demotion` has passed:
///
/// 3. editing a different super user while being super, or unresolved
/// 4. a non-super actor targeting a company other than `company_id`
///
pub fn authorize(
    target: &UserRecord,
    user_data: &UserData,
    actor: &ActingActor,
    company_id: i32,
) -> Result<()> {
    let is_self = target.id == actor.id;

    // A super actor is rejected here as well, not only a missing one
    if target.is_super && !is_self {
        match &actor.user {
            None => return Err(Error::CannotEditSuperUser),
            Some(actor_user) if actor_user.is_super => return Err(Error::CannotEditSuperUser),
            Some(_) => {},
        }
    }

    let Some(actor_user) = &actor.user else {
        return Err(Error::ActorNotFound(actor.id));
    };

    // An omitted company id asks for no tenant change
    let crosses_tenant = user_data.company_id
        .is_some_and(|requested| requested != company_id);
    if !actor_user.is_super && crosses_tenant {
        return Err(Error::TenantMismatch);
    }

    Ok(())
}
