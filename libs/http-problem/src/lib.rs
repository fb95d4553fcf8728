//! RFC 9457 Problem Details shared by the HTTP host and feature modules.

mod catalog;
mod problem;
mod request_id;

pub use catalog::ErrDef;
pub use problem::{Problem, ProblemResponse, ValidationError, APPLICATION_PROBLEM_JSON};
pub use request_id::{RequestIdHeader, REQUEST_ID_HEADER};
