use std::fmt;
use std::str::FromStr;

/// Store-assigned user identifier.
pub type UserId = i32;

/// Gender as inferred by the enrichment lookup or set explicitly by a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALLOWED: [&'static str; 2] = ["male", "female"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender '{0}'")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(UnknownGender(other.to_string())),
        }
    }
}

/// Pure user model for inter-module communication (no serde/utoipa)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub age: i32,
    pub gender: Gender,
    pub nationality: String,
}

/// Data for creating a new user, before enrichment
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewUser {
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
}

/// Sparse update. `None`, empty strings and zero age all mean "leave unchanged".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub patronymic: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
}

/// Optional constraints for listing users. Unset, empty and zero values are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFilter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub patronymic: Option<String>,
    pub age_from: Option<i32>,
    pub age_to: Option<i32>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub limit: Option<i64>,
}

/// Returns the string when it carries a value, treating `""` as unset.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Returns the number when it carries a value, treating `0` as unset.
pub(crate) fn present_num(value: Option<i32>) -> Option<i32> {
    value.filter(|n| *n != 0)
}
