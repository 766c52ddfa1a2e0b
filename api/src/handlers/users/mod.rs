use admin_common::{
    params::UserParams,
    views::{ApiErrorResponse, User},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{context::ApiContext, error::ApiError};


#[utoipa::path(
    post,
    path = "/users",
    tags = ["users"],
    request_body = UserParams,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing required field", body = ApiErrorResponse),
    )
)]
pub async fn create_user(
    State(ctx): State<ApiContext>,
    Json(req): Json<UserParams>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let created = ctx.users.create(req).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tags = ["users"],
    params(("id" = i32, Path, description = "User id")),
    request_body = UserParams,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Missing required field", body = ApiErrorResponse),
        (status = 404, description = "No user with this id", body = ApiErrorResponse),
    )
)]
pub async fn update_user(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
    Json(req): Json<UserParams>,
) -> Result<Json<User>, ApiError> {
    let updated = ctx.users.update(id, req).await?;

    Ok(Json(updated.into()))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tags = ["users"],
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Resolved user", body = User),
        (status = 404, description = "No user with this id", body = ApiErrorResponse),
    )
)]
pub async fn get_user(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    // The service reports absence as a plain None; turning that into a 404
    // is this adapter's call.
    let user = ctx.users.find(id).await?.ok_or(ApiError::NotFound)?;

    Ok(Json(user.into()))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tags = ["users"],
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Deletion confirmation", body = bool),
        (status = 404, description = "No user with this id", body = ApiErrorResponse),
    )
)]
pub async fn delete_user(
    State(ctx): State<ApiContext>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, ApiError> {
    let deleted = ctx.users.delete(id).await?;

    Ok(Json(deleted))
}

#[utoipa::path(
    get,
    path = "/users",
    tags = ["users"],
    responses((status = 200, description = "All users", body = [User]))
)]
pub async fn list_users(State(ctx): State<ApiContext>) -> Result<Json<Vec<User>>, ApiError> {
    let users = ctx.users.list().await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
