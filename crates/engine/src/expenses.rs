//! Expense entries: money going out. Their dates drive the logging streak.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};

/// A logged expense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseEntry {
    pub id: i64,
    pub description: String,
    /// Minor units, never negative.
    pub amount: i64,
    pub date: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub description: String,
    pub amount: i64,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ExpenseEntry {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            description: value.description,
            amount: value.amount,
            date: value.date,
        }
    }
}

pub(crate) fn new_row(description: String, amount: i64, date: DateTime<Utc>) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        description: ActiveValue::Set(description),
        amount: ActiveValue::Set(amount),
        date: ActiveValue::Set(date),
    }
}
