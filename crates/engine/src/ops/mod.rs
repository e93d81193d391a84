use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine};

mod ledger;
mod projects;
mod snapshot;
mod tasks;

/// Handle on the record store.
///
/// Constructed explicitly and shared with the API layer; every operation is
/// a single statement (or an independent read) against `database`.
#[derive(Debug, Clone)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

fn normalize_required_text(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(format!("{label} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn require_non_negative(amount: i64, label: &str) -> ResultEngine<i64> {
    if amount < 0 {
        return Err(EngineError::InvalidAmount(format!("{label} must be >= 0")));
    }
    Ok(amount)
}

fn require_positive(amount: i64, label: &str) -> ResultEngine<i64> {
    if amount <= 0 {
        return Err(EngineError::InvalidAmount(format!("{label} must be > 0")));
    }
    Ok(amount)
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed() {
        assert_eq!(normalize_required_text("  Laptop ", "name").unwrap(), "Laptop");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(
            normalize_required_text("   ", "name"),
            Err(EngineError::InvalidName("name must not be empty".to_string()))
        );
    }

    #[test]
    fn amount_rules() {
        assert!(require_non_negative(0, "amount").is_ok());
        assert!(require_non_negative(-1, "amount").is_err());
        assert!(require_positive(0, "goal").is_err());
        assert_eq!(require_positive(5, "goal").unwrap(), 5);
    }
}
