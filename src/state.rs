use axum_macros::FromRef;

use crate::users::DynUserService;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub user_svc: DynUserService,
}
