use axum::{extract::{Path, State}, routing::get, Json, Router};

use crate::{auth::middleware::AuthUser, state::AppState};

use super::{error::Result, models::{UpdateUserRequest, UserData, UserResponseModel}, DynUserService};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/{user_id}", get(get_user).put(update_user))
        .with_state(state)
}

async fn get_user(
    _user: AuthUser,
    State(user_svc): State<DynUserService>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserResponseModel>> {
    Ok(Json(user_svc.get_user(user_id).await?))
}

async fn update_user(
    user: AuthUser,
    State(user_svc): State<DynUserService>,
    Path(user_id): Path<i32>,
    Json(body): Json<UserData>,
) -> Result<Json<UserResponseModel>> {
    let req = UpdateUserRequest {
        user_data: body,
        user_id,
        company_id: user.company_id,
        request_user_id: user.id,
    };
    Ok(Json(user_svc.update_user(req).await?))
}
