use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Response body of every insert: the generated row id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub id: i64,
}

/// Response body of every update/delete.
///
/// `changes` is the number of affected rows: `0` means the target id did not
/// exist, which is not reported as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changes {
    pub changes: u64,
}

pub mod income {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeNew {
        pub source: String,
        /// Minor units (kobo). Must be >= 0.
        pub amount: i64,
        /// RFC3339 timestamp. If absent, server uses now().
        #[serde(default)]
        pub date: Option<DateTime<FixedOffset>>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct IncomeView {
        pub id: i64,
        pub source: String,
        pub amount: i64,
        pub date: DateTime<Utc>,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub description: String,
        /// Minor units (kobo). Must be >= 0.
        pub amount: i64,
        /// RFC3339 timestamp. If absent, server uses now().
        #[serde(default)]
        pub date: Option<DateTime<FixedOffset>>,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: i64,
        pub description: String,
        pub amount: i64,
        pub date: DateTime<Utc>,
    }
}

pub mod project {
    use super::*;
    use crate::task::TaskView;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ProjectNew {
        pub name: String,
        /// Target in minor units. Must be > 0.
        pub goal: i64,
    }

    /// Adds `amount` to the project's saved counter.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SaveContribution {
        pub project_id: i64,
        /// Minor units. Must be > 0.
        pub amount: i64,
    }

    /// A project together with its checklist.
    ///
    /// `tasks` is always present, empty when the project has no tasks.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ProjectView {
        pub id: i64,
        pub name: String,
        pub goal: i64,
        pub saved: i64,
        pub tasks: Vec<TaskView>,
    }
}

pub mod task {
    use super::*;

    /// Checklist state of a task.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TaskStatus {
        #[default]
        Todo,
        Done,
    }

    impl TaskStatus {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Todo => "todo",
                Self::Done => "done",
            }
        }

        /// The other state; used by clients to flip a checkbox.
        #[must_use]
        pub fn toggled(self) -> Self {
            match self {
                Self::Todo => Self::Done,
                Self::Done => Self::Todo,
            }
        }
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TaskNew {
        pub project_id: i64,
        pub description: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TaskStatusUpdate {
        pub status: TaskStatus,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TaskView {
        pub id: i64,
        pub description: String,
        pub status: TaskStatus,
    }
}

pub mod snapshot {
    use super::*;
    use crate::{expense::ExpenseView, income::IncomeView, project::ProjectView};

    /// The single combined read returned by `GET /data`.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    pub struct Snapshot {
        /// Newest first.
        pub income: Vec<IncomeView>,
        /// Newest first.
        pub expenses: Vec<ExpenseView>,
        /// Most recently created first, tasks in creation order.
        pub projects: Vec<ProjectView>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_contribution_uses_camel_case_project_id() {
        let body: project::SaveContribution =
            serde_json::from_str(r#"{"projectId":1,"amount":200000}"#).unwrap();
        assert_eq!(body.project_id, 1);
        assert_eq!(body.amount, 200_000);
    }

    #[test]
    fn task_status_rejects_unknown_values() {
        let ok: task::TaskStatusUpdate = serde_json::from_str(r#"{"status":"done"}"#).unwrap();
        assert_eq!(ok.status, task::TaskStatus::Done);
        assert!(serde_json::from_str::<task::TaskStatusUpdate>(r#"{"status":"later"}"#).is_err());
    }

    #[test]
    fn income_date_is_optional() {
        let body: income::IncomeNew =
            serde_json::from_str(r#"{"source":"Salary","amount":1000}"#).unwrap();
        assert!(body.date.is_none());
    }

    #[test]
    fn project_without_tasks_serializes_empty_array() {
        let view = project::ProjectView {
            id: 1,
            name: "Laptop".to_string(),
            goal: 500_000,
            saved: 0,
            tasks: Vec::new(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["tasks"], serde_json::json!([]));
    }
}
