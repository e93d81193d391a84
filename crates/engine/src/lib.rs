//! Record store and domain logic of Fin-Quest.
//!
//! [`Engine`] owns the database handle and exposes the mutation operations
//! and the snapshot read. [`metrics`] holds the pure derived computations
//! (totals, mission progress, logging streak) that clients run over a
//! snapshot.

pub use error::EngineError;
pub use expenses::ExpenseEntry;
pub use income::IncomeEntry;
pub use money::Money;
pub use ops::{Engine, EngineBuilder};
pub use project_tasks::{ProjectTask, TaskStatus};
pub use projects::Project;

mod error;
mod expenses;
mod income;
pub mod metrics;
mod money;
mod ops;
mod project_tasks;
mod projects;

type ResultEngine<T> = Result<T, EngineError>;

/// Result of the combined read: everything a client needs in one round trip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    /// Newest first.
    pub income: Vec<IncomeEntry>,
    /// Newest first.
    pub expenses: Vec<ExpenseEntry>,
    /// Most recently created first.
    pub projects: Vec<Project>,
}
