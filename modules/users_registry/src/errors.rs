//! Error catalog of the users_registry module.
//!
//! Every problem the REST layer emits is one of these codes; the `type` URL and
//! title are stable and documented by the catalog rather than by each handler.

use http_problem::{ErrDef, Problem};

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    users_registry_user_not_found_v1,
    users_registry_user_validation_v1,
    users_registry_enrichment_unavailable_v1,
    users_registry_internal_database_v1,
}

impl ErrorCode {
    /// Get the error definition for this error code
    pub const fn def(&self) -> ErrDef {
        match self {
            ErrorCode::users_registry_user_not_found_v1 => ErrDef {
                status: 404,
                title: "User Not Found",
                code: "users_registry.user.not_found.v1",
                type_url: "https://errors.example.com/users_registry.user.not_found.v1",
            },
            ErrorCode::users_registry_user_validation_v1 => ErrDef {
                status: 400,
                title: "Validation Failed",
                code: "users_registry.user.validation.v1",
                type_url: "https://errors.example.com/users_registry.user.validation.v1",
            },
            ErrorCode::users_registry_enrichment_unavailable_v1 => ErrDef {
                status: 502,
                title: "Enrichment Unavailable",
                code: "users_registry.enrichment.unavailable.v1",
                type_url: "https://errors.example.com/users_registry.enrichment.unavailable.v1",
            },
            ErrorCode::users_registry_internal_database_v1 => ErrDef {
                status: 500,
                title: "Internal Database Error",
                code: "users_registry.internal.database.v1",
                type_url: "https://errors.example.com/users_registry.internal.database.v1",
            },
        }
    }

    /// Convert to Problem with detail (without instance)
    pub fn to_problem(&self, detail: impl Into<String>) -> Problem {
        self.def().to_problem(detail)
    }
}
