use axum::{extract::State, Json};
use service::rentals::RentalDetail;
use tracing::info;

use crate::{errors::ApiError, state::AppState};

#[utoipa::path(
    post, path = "/api/rentals/save", tag = "rentals",
    request_body = crate::openapi::RentalDetailDoc,
    responses((status = 200, description = "Saved"), (status = 500, description = "Store Failure"))
)]
pub async fn save(State(state): State<AppState>, Json(input): Json<RentalDetail>) -> Result<Json<RentalDetail>, ApiError> {
    let saved = state.rentals.save_rental(input.into_new()).await?;
    info!(rental_id = ?saved.id, "rental_confirmed");
    Ok(Json(saved))
}

#[utoipa::path(get, path = "/api/rentals", tag = "rentals", responses((status = 200, description = "All rentals")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RentalDetail>>, ApiError> {
    Ok(Json(state.rentals.get_all_rentals().await?))
}
