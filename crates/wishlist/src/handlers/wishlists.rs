use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use wishlist_core::wishlist::{
    validate_wishlist_name, CreateWishlistRequest, UpdateWishlistRequest, Wishlist,
};

use crate::{auth::CurrentOwner, handlers::ApiError, state::AppState};

/// List the caller's wishlists (GET /wishlists).
pub async fn list_wishlists(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
) -> Result<Json<Vec<Wishlist>>, ApiError> {
    let wishlists = state.store.list_lists(&owner).await?;
    Ok(Json(wishlists))
}

/// Create a wishlist (POST /wishlists).
pub async fn create_wishlist(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    payload: Result<Json<CreateWishlistRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    validate_wishlist_name(&payload.name)?;

    let wishlist = state.store.create_list(&owner, &payload.name).await?;

    Ok((StatusCode::CREATED, Json(wishlist)))
}

/// Get a wishlist by ID (GET /wishlists/{id}).
///
/// Anyone holding the id may read the list. An unknown id yields `null`.
pub async fn get_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Wishlist>>, ApiError> {
    let wishlist = state.store.get_list(&id).await?;
    Ok(Json(wishlist))
}

/// Rename a wishlist (PUT /wishlists/{id}).
pub async fn update_wishlist(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(id): Path<String>,
    payload: Result<Json<UpdateWishlistRequest>, JsonRejection>,
) -> Result<Json<Wishlist>, ApiError> {
    let Json(payload) = payload?;
    validate_wishlist_name(&payload.name)?;

    let wishlist = state.store.update_list(&id, &payload.name, &owner).await?;

    Ok(Json(wishlist))
}

/// Delete a wishlist and all of its items (DELETE /wishlists/{id}).
pub async fn delete_wishlist(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_list(&id, &owner).await?;
    Ok(StatusCode::NO_CONTENT)
}
