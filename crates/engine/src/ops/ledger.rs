use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, prelude::*};

use crate::{ExpenseEntry, IncomeEntry, ResultEngine, expenses, income};

use super::{Engine, normalize_required_text, require_non_negative};

impl Engine {
    /// Logs an income and returns its generated id.
    pub async fn create_income(
        &self,
        source: &str,
        amount: i64,
        date: DateTime<Utc>,
    ) -> ResultEngine<i64> {
        let source = normalize_required_text(source, "income source")?;
        let amount = require_non_negative(amount, "income amount")?;

        let res = income::Entity::insert(income::new_row(source, amount, date))
            .exec(&self.database)
            .await?;
        Ok(res.last_insert_id)
    }

    /// Logs an expense and returns its generated id.
    pub async fn create_expense(
        &self,
        description: &str,
        amount: i64,
        date: DateTime<Utc>,
    ) -> ResultEngine<i64> {
        let description = normalize_required_text(description, "expense description")?;
        let amount = require_non_negative(amount, "expense amount")?;

        let res = expenses::Entity::insert(expenses::new_row(description, amount, date))
            .exec(&self.database)
            .await?;
        Ok(res.last_insert_id)
    }

    /// All income, newest first.
    pub async fn list_income(&self) -> ResultEngine<Vec<IncomeEntry>> {
        let models = income::Entity::find()
            .order_by_desc(income::Column::Date)
            .order_by_desc(income::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(IncomeEntry::from).collect())
    }

    /// All expenses, newest first.
    pub async fn list_expenses(&self) -> ResultEngine<Vec<ExpenseEntry>> {
        let models = expenses::Entity::find()
            .order_by_desc(expenses::Column::Date)
            .order_by_desc(expenses::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(ExpenseEntry::from).collect())
    }
}
