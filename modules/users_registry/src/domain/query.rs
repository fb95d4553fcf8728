//! Filter → predicate builder.
//!
//! A `UserFilter` is turned into a conjunction of field comparisons plus a
//! resolved row limit. The predicate is storage-neutral: values stay typed and
//! are bound as parameters by the storage adapter, never spliced into SQL text.

use crate::contract::model::{present, present_num, UserFilter};

/// Limit used when the caller leaves it unset or non-positive.
pub const DEFAULT_LIMIT: u64 = 10;

/// Filterable columns of a user record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserField {
    Name,
    Surname,
    Patronymic,
    Age,
    Gender,
    Nationality,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ge,
    Le,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(i32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub field: UserField,
    pub op: CompareOp,
    pub value: Value,
}

/// AND-combined comparisons. An empty predicate matches every row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Predicate {
    comparisons: Vec<Comparison>,
}

impl Predicate {
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn and(mut self, field: UserField, op: CompareOp, value: Value) -> Self {
        self.comparisons.push(Comparison { field, op, value });
        self
    }

    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    pub fn matches_all(&self) -> bool {
        self.comparisons.is_empty()
    }
}

/// Predicate plus row bound, ready for the storage port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserQuery {
    pub predicate: Predicate,
    pub limit: u64,
}

/// Resolve the requested limit: unset or non-positive falls back to `default`.
pub fn resolve_limit(requested: Option<i64>, default: u64) -> u64 {
    match requested {
        Some(l) if l > 0 => l.unsigned_abs(),
        _ => default,
    }
}

/// Build the storage query for a filter. Never fails; range checks belong to validation.
pub fn build_query(filter: &UserFilter, default_limit: u64) -> UserQuery {
    let text = |v: &str| Value::Text(v.to_string());
    let mut predicate = Predicate::all();

    if let Some(name) = present(&filter.name) {
        predicate = predicate.and(UserField::Name, CompareOp::Eq, text(name));
    }
    if let Some(surname) = present(&filter.surname) {
        predicate = predicate.and(UserField::Surname, CompareOp::Eq, text(surname));
    }
    if let Some(patronymic) = present(&filter.patronymic) {
        predicate = predicate.and(UserField::Patronymic, CompareOp::Eq, text(patronymic));
    }
    if let Some(from) = present_num(filter.age_from) {
        predicate = predicate.and(UserField::Age, CompareOp::Ge, Value::Int(from));
    }
    if let Some(to) = present_num(filter.age_to) {
        predicate = predicate.and(UserField::Age, CompareOp::Le, Value::Int(to));
    }
    if let Some(gender) = present(&filter.gender) {
        predicate = predicate.and(UserField::Gender, CompareOp::Eq, text(gender));
    }
    if let Some(nationality) = present(&filter.nationality) {
        predicate = predicate.and(UserField::Nationality, CompareOp::Eq, text(nationality));
    }

    UserQuery {
        predicate,
        limit: resolve_limit(filter.limit, default_limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::model::{Gender, User};

    /// In-memory evaluation of a predicate, mirroring the SQL the adapter emits.
    fn holds(predicate: &Predicate, user: &User) -> bool {
        predicate.comparisons().iter().all(|c| match (&c.value, c.field) {
            (Value::Int(v), UserField::Age) => match c.op {
                CompareOp::Eq => user.age == *v,
                CompareOp::Ge => user.age >= *v,
                CompareOp::Le => user.age <= *v,
            },
            (Value::Text(v), field) => {
                let actual = match field {
                    UserField::Name => Some(user.name.as_str()),
                    UserField::Surname => Some(user.surname.as_str()),
                    UserField::Patronymic => user.patronymic.as_deref(),
                    UserField::Gender => Some(user.gender.as_str()),
                    UserField::Nationality => Some(user.nationality.as_str()),
                    UserField::Age => None,
                };
                c.op == CompareOp::Eq && actual == Some(v.as_str())
            }
            (Value::Int(_), _) => false,
        })
    }

    fn ivan() -> User {
        User {
            id: 1,
            name: "Ivan".into(),
            surname: "Ivanov".into(),
            patronymic: None,
            age: 23,
            gender: Gender::Male,
            nationality: "RU".into(),
        }
    }

    #[test]
    fn empty_filter_matches_everything_with_default_limit() {
        let q = build_query(&UserFilter::default(), DEFAULT_LIMIT);
        assert!(q.predicate.matches_all());
        assert!(holds(&q.predicate, &ivan()));
        assert_eq!(q.limit, 10);
    }

    #[test]
    fn empty_strings_and_zero_bounds_are_ignored() {
        let filter = UserFilter {
            name: Some(String::new()),
            age_from: Some(0),
            age_to: Some(0),
            gender: Some(String::new()),
            ..Default::default()
        };
        assert!(build_query(&filter, DEFAULT_LIMIT).predicate.matches_all());
    }

    #[test]
    fn non_positive_limits_fall_back_to_default() {
        assert_eq!(resolve_limit(Some(-5), DEFAULT_LIMIT), 10);
        assert_eq!(resolve_limit(Some(0), DEFAULT_LIMIT), 10);
        assert_eq!(resolve_limit(None, DEFAULT_LIMIT), 10);
        assert_eq!(resolve_limit(Some(1), DEFAULT_LIMIT), 1);
        // Range enforcement is validation's job, the builder passes it through.
        assert_eq!(resolve_limit(Some(51), DEFAULT_LIMIT), 51);
    }

    #[test]
    fn age_bounds_form_an_inclusive_range() {
        let filter = UserFilter {
            age_from: Some(20),
            age_to: Some(30),
            ..Default::default()
        };
        let q = build_query(&filter, DEFAULT_LIMIT);
        assert_eq!(
            q.predicate.comparisons(),
            &[
                Comparison {
                    field: UserField::Age,
                    op: CompareOp::Ge,
                    value: Value::Int(20)
                },
                Comparison {
                    field: UserField::Age,
                    op: CompareOp::Le,
                    value: Value::Int(30)
                },
            ]
        );
        assert!(holds(&q.predicate, &ivan()));

        let mut old = ivan();
        old.age = 31;
        assert!(!holds(&q.predicate, &old));
    }

    #[test]
    fn inverted_age_range_matches_nothing() {
        let filter = UserFilter {
            age_from: Some(40),
            age_to: Some(20),
            ..Default::default()
        };
        let q = build_query(&filter, DEFAULT_LIMIT);
        assert!(!holds(&q.predicate, &ivan()));
    }

    #[test]
    fn every_set_field_emits_one_comparison() {
        let filter = UserFilter {
            name: Some("Ivan".into()),
            surname: Some("Ivanov".into()),
            patronymic: Some("Petrovich".into()),
            age_from: Some(1),
            age_to: Some(100),
            gender: Some("male".into()),
            nationality: Some("RU".into()),
            limit: Some(5),
        };
        let q = build_query(&filter, DEFAULT_LIMIT);
        assert_eq!(q.predicate.comparisons().len(), 7);
        assert_eq!(q.limit, 5);

        // patronymic is absent on the record, so equality cannot hold
        assert!(!holds(&q.predicate, &ivan()));
        let mut with_patronymic = ivan();
        with_patronymic.patronymic = Some("Petrovich".into());
        assert!(holds(&q.predicate, &with_patronymic));
    }
}
