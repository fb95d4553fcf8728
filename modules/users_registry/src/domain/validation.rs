//! Field contracts checked before anything reaches storage or enrichment.
//!
//! Every check appends to a violation list so the caller sees all problems of
//! one input at once.

use crate::contract::model::{present, present_num, Gender, NewUser, User, UserFilter, UserPatch};
use crate::domain::error::{DomainError, FieldViolation};
use crate::domain::query::resolve_limit;

pub const MAX_TEXT_LEN: usize = 255;
pub const MIN_AGE: i32 = 1;
pub const MAX_AGE: i32 = 100;
pub const MIN_LIMIT: u64 = 1;

#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    fn alpha(&mut self, field: &str, value: &str) {
        if value.chars().count() > MAX_TEXT_LEN {
            self.push(field, format!("must be at most {MAX_TEXT_LEN} characters"));
        }
        if !value.chars().all(char::is_alphabetic) {
            self.push(field, "must contain letters only");
        }
    }

    fn required_alpha(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.push(field, "is required");
        } else {
            self.alpha(field, value);
        }
    }

    fn optional_alpha(&mut self, field: &str, value: &Option<String>) {
        if let Some(v) = present(value) {
            self.alpha(field, v);
        }
    }

    fn age(&mut self, field: &str, value: i32) {
        if !(MIN_AGE..=MAX_AGE).contains(&value) {
            self.push(field, format!("must be between {MIN_AGE} and {MAX_AGE}"));
        }
    }

    fn gender(&mut self, field: &str, value: &str) {
        if value.parse::<Gender>().is_err() {
            self.push(
                field,
                format!("must be one of: {}", Gender::ALLOWED.join(", ")),
            );
        }
    }

    fn nationality(&mut self, field: &str, value: &str) {
        if value.chars().count() != 2 || !value.chars().all(char::is_alphabetic) {
            self.push(field, "must be exactly 2 letters");
        }
    }

    fn finish(self) -> Result<(), DomainError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(DomainError::invalid(self.0))
        }
    }
}

pub fn validate_new_user(new_user: &NewUser) -> Result<(), DomainError> {
    let mut v = Violations::default();
    v.required_alpha("name", &new_user.name);
    v.required_alpha("surname", &new_user.surname);
    v.optional_alpha("patronymic", &new_user.patronymic);
    v.finish()
}

pub fn validate_patch(patch: &UserPatch) -> Result<(), DomainError> {
    let mut v = Violations::default();
    v.optional_alpha("name", &patch.name);
    v.optional_alpha("surname", &patch.surname);
    v.optional_alpha("patronymic", &patch.patronymic);
    if let Some(age) = present_num(patch.age) {
        v.age("age", age);
    }
    if let Some(gender) = present(&patch.gender) {
        v.gender("gender", gender);
    }
    if let Some(nationality) = present(&patch.nationality) {
        v.nationality("nationality", nationality);
    }
    v.finish()
}

/// Full-record check, applied to the merge result before it is persisted.
pub fn validate_user(user: &User) -> Result<(), DomainError> {
    let mut v = Violations::default();
    v.required_alpha("name", &user.name);
    v.required_alpha("surname", &user.surname);
    v.optional_alpha("patronymic", &user.patronymic);
    v.age("age", user.age);
    v.nationality("nationality", &user.nationality);
    v.finish()
}

pub fn validate_filter(
    filter: &UserFilter,
    default_limit: u64,
    max_limit: u64,
) -> Result<(), DomainError> {
    let mut v = Violations::default();
    v.optional_alpha("name", &filter.name);
    v.optional_alpha("surname", &filter.surname);
    v.optional_alpha("patronymic", &filter.patronymic);
    if let Some(from) = present_num(filter.age_from) {
        v.age("age_from", from);
    }
    if let Some(to) = present_num(filter.age_to) {
        v.age("age_to", to);
    }
    if let Some(gender) = present(&filter.gender) {
        v.gender("gender", gender);
    }
    if let Some(nationality) = present(&filter.nationality) {
        v.nationality("nationality", nationality);
    }
    let limit = resolve_limit(filter.limit, default_limit);
    if !(MIN_LIMIT..=max_limit).contains(&limit) {
        v.push(
            "limit",
            format!("must be between {MIN_LIMIT} and {max_limit}"),
        );
    }
    v.finish()
}
