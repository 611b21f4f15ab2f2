use axum::{
    extract::{Path, State},
    Json,
};
use service::users::User;
use tracing::{info, warn};

use crate::{errors::ApiError, state::AppState};

/// Any id in the payload is ignored; the store assigns a fresh one.
#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::UserDoc,
    responses((status = 200, description = "Registered"), (status = 500, description = "Store Failure"))
)]
pub async fn register(State(state): State<AppState>, Json(input): Json<User>) -> Result<Json<User>, ApiError> {
    let saved = state.users.save_user(input.into_new()).await?;
    info!(user_id = ?saved.id, email = %saved.email, "user_registered");
    Ok(Json(saved))
}

#[utoipa::path(get, path = "/userst", tag = "users", responses((status = 200, description = "All users")))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.get_all_users().await?;
    info!(count = users.len(), "list users");
    Ok(Json(users))
}

#[utoipa::path(
    get, path = "/user/login/{email}/{password}", tag = "users",
    params(
        ("email" = String, Path, description = "Account email"),
        ("password" = String, Path, description = "Account password")
    ),
    responses((status = 200, description = "Credentials match"), (status = 401, description = "Unauthorized"))
)]
pub async fn login(
    State(state): State<AppState>,
    Path((email, password)): Path<(String, String)>,
) -> Result<Json<User>, ApiError> {
    match state.users.find_user(&email, &password).await? {
        Some(user) => {
            info!(user_id = ?user.id, %email, "login_ok");
            Ok(Json(user))
        }
        None => {
            warn!(%email, "login_rejected");
            Err(ApiError::Unauthorized)
        }
    }
}

#[utoipa::path(
    get, path = "/user/{email}", tag = "users",
    params(("email" = String, Path, description = "Account email")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found"))
)]
pub async fn get_by_email(State(state): State<AppState>, Path(email): Path<String>) -> Result<Json<User>, ApiError> {
    state.users.find_user_by_email(&email).await?.map(Json).ok_or(ApiError::NotFound)
}

/// Locates the record by the path email, then takes name, email and password
/// from the payload. A different payload email moves the record.
#[utoipa::path(
    put, path = "/user/{email}", tag = "users",
    params(("email" = String, Path, description = "Current account email")),
    request_body = crate::openapi::UserDoc,
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"))
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(update): Json<User>,
) -> Result<Json<User>, ApiError> {
    let current = state.users.find_user_by_email(&email).await?.ok_or(ApiError::NotFound)?;
    let updated = state.users.save_user(current.with_profile(&update)).await?;
    info!(user_id = ?updated.id, from = %email, to = %updated.email, "user_profile_updated");
    Ok(Json(updated))
}

#[utoipa::path(
    put, path = "/user/image/{email}", tag = "users",
    params(("email" = String, Path, description = "Account email")),
    request_body = crate::openapi::UserDoc,
    responses((status = 200, description = "Updated"), (status = 404, description = "Not Found"))
)]
pub async fn update_image(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(update): Json<User>,
) -> Result<Json<User>, ApiError> {
    let current = state.users.find_user_by_email(&email).await?.ok_or(ApiError::NotFound)?;
    let updated = state.users.save_user(current.with_image_url(update.image_url)).await?;
    info!(user_id = ?updated.id, %email, "user_image_updated");
    Ok(Json(updated))
}
