use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use http_problem::{Problem, ProblemResponse, RequestIdHeader};
use tracing::info;

use crate::api::rest::dto::{CreateUserReq, ListUsersQuery, UpdateUserReq, UserDto, UserListDto};
use crate::api::rest::error::map_domain_error;
use crate::contract::model::UserId;
use crate::domain::service::Service;

/// List users matching the optional filter
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    operation_id = "users_registry.list_users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Matching users ordered by id", body = UserListDto),
        (status = 400, description = "Invalid filter", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ListUsersQuery>,
    uri: Uri,
    request_id: RequestIdHeader,
) -> Result<Json<UserListDto>, ProblemResponse> {
    info!("Listing users with query: {:?}", query);

    match svc.list_users(query.into()).await {
        Ok(users) => {
            let users: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();
            Ok(Json(UserListDto {
                total: users.len(),
                users,
            }))
        }
        Err(e) => Err(map_domain_error(&e, uri.path(), request_id.as_deref())),
    }
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    operation_id = "users_registry.get_user",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserDto),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<UserId>,
    uri: Uri,
    request_id: RequestIdHeader,
) -> Result<Json<UserDto>, ProblemResponse> {
    info!("Getting user with id: {}", id);

    match svc.get_user(id).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => Err(map_domain_error(&e, uri.path(), request_id.as_deref())),
    }
}

/// Create a new user, inferring age, gender and nationality from the name
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "users",
    operation_id = "users_registry.create_user",
    request_body = CreateUserReq,
    responses(
        (status = 201, description = "Created user", body = UserDto),
        (status = 400, description = "Bad Request", body = Problem, content_type = "application/problem+json"),
        (status = 502, description = "Enrichment lookup failed", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn create_user(
    uri: Uri,
    request_id: RequestIdHeader,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<CreateUserReq>,
) -> Result<(StatusCode, Json<UserDto>), ProblemResponse> {
    info!("Creating user: {:?}", req_body);

    match svc.create_user(req_body.into()).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(UserDto::from(user)))),
        Err(e) => Err(map_domain_error(&e, uri.path(), request_id.as_deref())),
    }
}

/// Patch an existing user; empty fields are left unchanged
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    tag = "users",
    operation_id = "users_registry.update_user",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserReq,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Bad Request", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn update_user(
    uri: Uri,
    request_id: RequestIdHeader,
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<UserId>,
    Json(req_body): Json<UpdateUserReq>,
) -> Result<Json<UserDto>, ProblemResponse> {
    info!("Updating user {} with: {:?}", id, req_body);

    match svc.update_user(id, req_body.into()).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => Err(map_domain_error(&e, uri.path(), request_id.as_deref())),
    }
}

/// Delete a user by ID; deleting an unknown id succeeds
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "users",
    operation_id = "users_registry.delete_user",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 500, description = "Internal Server Error", body = Problem, content_type = "application/problem+json"),
    )
)]
pub async fn delete_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<UserId>,
    uri: Uri,
    request_id: RequestIdHeader,
) -> Result<StatusCode, ProblemResponse> {
    info!("Deleting user: {}", id);

    match svc.delete_user(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(map_domain_error(&e, uri.path(), request_id.as_deref())),
    }
}
