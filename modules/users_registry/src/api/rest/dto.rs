use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::contract::model::{NewUser, User, UserFilter, UserPatch};

/// REST DTO for user representation with serde/utoipa
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub surname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
    pub age: i32,
    #[schema(example = "male")]
    pub gender: String,
    #[schema(example = "RU")]
    pub nationality: String,
}

/// REST DTO for creating a new user. Age, gender and nationality are inferred.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserReq {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub patronymic: Option<String>,
}

/// REST DTO for updating a user. Omitted, empty and zero fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct UpdateUserReq {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub patronymic: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

/// REST DTO for user list response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
    pub total: usize,
}

/// Query string of `GET /api/v1/users`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Exact name match
    pub name: Option<String>,
    /// Exact surname match
    pub surname: Option<String>,
    /// Exact patronymic match
    pub patronymic: Option<String>,
    /// Minimum age, inclusive (1..=100)
    pub age_from: Option<i32>,
    /// Maximum age, inclusive (1..=100)
    pub age_to: Option<i32>,
    /// `male` or `female`
    pub gender: Option<String>,
    /// Two-letter country code
    pub nationality: Option<String>,
    /// Maximum number of users to return (1..=50, default 10)
    pub limit: Option<i64>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
            patronymic: user.patronymic,
            age: user.age,
            gender: user.gender.to_string(),
            nationality: user.nationality,
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            patronymic: req.patronymic,
        }
    }
}

impl From<UpdateUserReq> for UserPatch {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            name: req.name,
            surname: req.surname,
            patronymic: req.patronymic,
            age: req.age,
            gender: req.gender,
            nationality: req.nationality,
        }
    }
}

impl From<ListUsersQuery> for UserFilter {
    fn from(q: ListUsersQuery) -> Self {
        Self {
            name: q.name,
            surname: q.surname,
            patronymic: q.patronymic,
            age_from: q.age_from,
            age_to: q.age_to,
            gender: q.gender,
            nationality: q.nationality,
            limit: q.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::model::Gender;

    #[test]
    fn user_dto_omits_missing_patronymic() {
        let dto = UserDto::from(User {
            id: 1,
            name: "Ivan".into(),
            surname: "Ivanov".into(),
            patronymic: None,
            age: 23,
            gender: Gender::Male,
            nationality: "RU".into(),
        });
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["gender"], "male");
        assert!(json.get("patronymic").is_none());
    }

    #[test]
    fn create_request_tolerates_missing_fields() {
        let req: CreateUserReq = serde_json::from_str(r#"{"name":"Ivan"}"#).unwrap();
        let new_user = NewUser::from(req);
        assert_eq!(new_user.surname, "");
        assert_eq!(new_user.patronymic, None);
    }
}
