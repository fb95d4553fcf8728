use http_problem::{ProblemResponse, ValidationError};
use tracing::{debug, error, warn};

use crate::domain::error::DomainError;
use crate::errors::ErrorCode;

/// Map domain error to RFC9457 ProblemResponse.
///
/// Client mistakes are logged at debug, upstream failures at warn and storage
/// failures at error.
pub fn map_domain_error(
    e: &DomainError,
    instance: &str,
    request_id: Option<&str>,
) -> ProblemResponse {
    let problem = match e {
        DomainError::UserNotFound { id } => {
            debug!(error = %e, "User not found");
            ErrorCode::users_registry_user_not_found_v1
                .to_problem(format!("User with id {id} was not found"))
        }
        DomainError::Validation { violations } => {
            debug!(error = %e, "Request rejected by validation");
            let errors = violations
                .iter()
                .map(|v| ValidationError {
                    detail: v.message.clone(),
                    pointer: format!("/{}", v.field),
                })
                .collect();
            ErrorCode::users_registry_user_validation_v1
                .to_problem(e.to_string())
                .with_errors(errors)
        }
        DomainError::Enrichment { .. } => {
            warn!(error = %e, "Name enrichment failed");
            ErrorCode::users_registry_enrichment_unavailable_v1.to_problem(e.to_string())
        }
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            error!(error = %e, "Database error occurred");
            ErrorCode::users_registry_internal_database_v1
                .to_problem("An internal database error occurred")
        }
    };

    let problem = problem.with_instance(instance);
    match request_id {
        Some(id) => problem.with_request_id(id),
        None => problem,
    }
    .into()
}
