//! Income entries: money coming in.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};

/// A logged income.
///
/// Entries are insert-only: a mistake is corrected by logging a new entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomeEntry {
    pub id: i64,
    pub source: String,
    /// Minor units, never negative.
    pub amount: i64,
    pub date: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "income")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub source: String,
    pub amount: i64,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for IncomeEntry {
    fn from(value: Model) -> Self {
        Self {
            id: value.id,
            source: value.source,
            amount: value.amount,
            date: value.date,
        }
    }
}

/// Builds the row to insert; `id` is left to the store.
pub(crate) fn new_row(source: String, amount: i64, date: DateTime<Utc>) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        source: ActiveValue::Set(source),
        amount: ActiveValue::Set(amount),
        date: ActiveValue::Set(date),
    }
}
