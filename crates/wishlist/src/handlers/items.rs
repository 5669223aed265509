use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use wishlist_core::wishlist::{validate_item_request, Item, ItemRequest};

use crate::{auth::CurrentOwner, handlers::ApiError, state::AppState};

/// List the items of a wishlist (GET /wishlists/{id}/items).
pub async fn list_items(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.store.list_items(&list_id).await?;
    Ok(Json(items))
}

/// Add an item to a wishlist (POST /wishlists/{id}/items).
pub async fn create_item(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path(list_id): Path<String>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    let fields = validate_item_request(payload)?;

    let item = state.store.create_item(&list_id, &owner, fields).await?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Replace an item (PUT /wishlists/{id}/items/{item_id}).
pub async fn update_item(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path((list_id, item_id)): Path<(String, String)>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(payload) = payload?;
    let fields = validate_item_request(payload)?;

    let item = state
        .store
        .update_item(&list_id, &item_id, &owner, fields)
        .await?;

    Ok(Json(item))
}

/// Delete an item (DELETE /wishlists/{id}/items/{item_id}).
pub async fn delete_item(
    State(state): State<AppState>,
    CurrentOwner(owner): CurrentOwner,
    Path((list_id, item_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .delete_item(&list_id, &item_id, &owner)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
