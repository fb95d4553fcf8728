use axum::http::StatusCode;

use crate::problem::Problem;

/// Static error definition from a module's error catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrDef {
    pub status: u16,
    pub title: &'static str,
    pub code: &'static str,
    pub type_url: &'static str,
}

impl ErrDef {
    /// Convert this error definition into a Problem with the given detail
    #[inline]
    pub fn to_problem(&self, detail: impl Into<String>) -> Problem {
        Problem::new(
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            self.title,
            detail,
        )
        .with_code(self.code)
        .with_type(self.type_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_FOUND: ErrDef = ErrDef {
        status: 404,
        title: "Not Found",
        code: "test.not_found.v1",
        type_url: "https://errors.example.com/test.not_found.v1",
    };

    #[test]
    fn err_def_to_problem_works() {
        let problem = NOT_FOUND.to_problem("Resource missing");
        assert_eq!(problem.status, 404);
        assert_eq!(problem.title, "Not Found");
        assert_eq!(problem.detail, "Resource missing");
        assert_eq!(problem.code, "test.not_found.v1");
        assert_eq!(
            problem.type_url,
            "https://errors.example.com/test.not_found.v1"
        );
    }

    #[test]
    fn bogus_status_falls_back_to_500() {
        let def = ErrDef {
            status: 42,
            ..NOT_FOUND
        };
        assert_eq!(def.to_problem("x").status, 500);
    }
}
