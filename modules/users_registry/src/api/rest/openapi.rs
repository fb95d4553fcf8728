use http_problem::{Problem, ValidationError};
use utoipa::OpenApi;

use crate::api::rest::dto::{CreateUserReq, UpdateUserReq, UserDto, UserListDto};
use crate::api::rest::handlers;

/// OpenAPI document for the users endpoints; merged by the HTTP host.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_users,
        handlers::get_user,
        handlers::create_user,
        handlers::update_user,
        handlers::delete_user,
    ),
    components(schemas(
        UserDto,
        UserListDto,
        CreateUserReq,
        UpdateUserReq,
        Problem,
        ValidationError
    )),
    tags((name = "users", description = "User registry with name-based enrichment"))
)]
pub struct UsersRegistryApiDoc;
