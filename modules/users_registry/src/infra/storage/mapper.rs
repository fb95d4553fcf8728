use sea_orm::{ActiveValue::NotSet, Set};

use crate::contract::model::{UnknownGender, User};
use crate::domain::repo::UserRecord;
use crate::infra::storage::entity::{ActiveModel, Model};

/// Convert a database row to a contract model. Fails only on a gender value
/// that was written outside this service.
impl TryFrom<Model> for User {
    type Error = UnknownGender;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            gender: m.gender.parse()?,
            name: m.name,
            surname: m.surname,
            patronymic: m.patronymic,
            age: m.age,
            nationality: m.nationality,
        })
    }
}

/// Insert model; the id is left to the database.
impl From<UserRecord> for ActiveModel {
    fn from(r: UserRecord) -> Self {
        Self {
            id: NotSet,
            name: Set(r.name),
            surname: Set(r.surname),
            patronymic: Set(r.patronymic),
            age: Set(r.age),
            gender: Set(r.gender.as_str().to_owned()),
            nationality: Set(r.nationality),
        }
    }
}

/// Every mutable column set, primary key untouched. Used for full-row replacement.
pub fn replacement(u: &User) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(u.name.clone()),
        surname: Set(u.surname.clone()),
        patronymic: Set(u.patronymic.clone()),
        age: Set(u.age),
        gender: Set(u.gender.as_str().to_owned()),
        nationality: Set(u.nationality.clone()),
    }
}
