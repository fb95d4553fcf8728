//! Domain predicate -> SeaORM `Condition`.
//!
//! Values are passed to SeaORM as typed expressions, so they are always sent as
//! bound parameters.

use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::Condition;

use crate::domain::query::{CompareOp, Comparison, Predicate, UserField, Value};
use crate::infra::storage::entity::Column;

fn column(field: UserField) -> Column {
    match field {
        UserField::Name => Column::Name,
        UserField::Surname => Column::Surname,
        UserField::Patronymic => Column::Patronymic,
        UserField::Age => Column::Age,
        UserField::Gender => Column::Gender,
        UserField::Nationality => Column::Nationality,
    }
}

fn value(v: &Value) -> sea_orm::Value {
    match v {
        Value::Text(s) => s.clone().into(),
        Value::Int(i) => (*i).into(),
    }
}

fn comparison(c: &Comparison) -> SimpleExpr {
    let col = Expr::col(column(c.field));
    let v = value(&c.value);
    match c.op {
        CompareOp::Eq => col.eq(v),
        CompareOp::Ge => col.gte(v),
        CompareOp::Le => col.lte(v),
    }
}

/// AND of all comparisons. Callers skip the filter entirely when the predicate
/// has no comparisons.
pub fn predicate_to_condition(predicate: &Predicate) -> Condition {
    predicate
        .comparisons()
        .iter()
        .fold(Condition::all(), |cond, c| cond.add(comparison(c)))
}
