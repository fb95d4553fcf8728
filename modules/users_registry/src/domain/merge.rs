use crate::contract::model::{present, present_num, User, UserPatch};

/// Apply a sparse patch onto an existing user.
///
/// Only non-empty strings and non-zero numbers overwrite; everything else keeps
/// the current value. A gender token that does not parse is left for validation
/// to reject and does not change the record here.
pub fn merge(mut current: User, patch: &UserPatch) -> User {
    if let Some(name) = present(&patch.name) {
        current.name = name.to_string();
    }
    if let Some(surname) = present(&patch.surname) {
        current.surname = surname.to_string();
    }
    if let Some(patronymic) = present(&patch.patronymic) {
        current.patronymic = Some(patronymic.to_string());
    }
    if let Some(age) = present_num(patch.age) {
        current.age = age;
    }
    if let Some(gender) = present(&patch.gender).and_then(|g| g.parse().ok()) {
        current.gender = gender;
    }
    if let Some(nationality) = present(&patch.nationality) {
        current.nationality = nationality.to_string();
    }
    current
}
