//! Checklist items ("action plan") of a project.

use sea_orm::entity::{ActiveValue, prelude::*};

use crate::{EngineError, ResultEngine};

/// Two-state checklist status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    #[default]
    Todo,
    Done,
}

impl TaskStatus {
    /// Canonical value stored in `project_tasks.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "todo" => Ok(Self::Todo),
            "done" => Ok(Self::Done),
            other => Err(EngineError::InvalidStatus(other.to_string())),
        }
    }
}

/// A task as nested under its project: `{id, description, status}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectTask {
    pub id: i64,
    pub description: String,
    pub status: TaskStatus,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "project_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub project_id: i64,
    pub description: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Projects,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ProjectTask {
    type Error = EngineError;

    fn try_from(value: Model) -> ResultEngine<Self> {
        Ok(Self {
            id: value.id,
            description: value.description,
            status: TaskStatus::try_from(value.status.as_str())?,
        })
    }
}

/// New tasks always start as `todo`.
pub(crate) fn new_row(project_id: i64, description: String) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        project_id: ActiveValue::Set(project_id),
        description: ActiveValue::Set(description),
        status: ActiveValue::Set(TaskStatus::Todo.as_str().to_string()),
    }
}
