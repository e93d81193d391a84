//! Projects ("missions"): savings goals with an accumulated `saved` amount
//! and a checklist of tasks.

use sea_orm::entity::{ActiveValue, prelude::*};

use crate::{metrics, project_tasks::ProjectTask};

/// A savings mission.
///
/// `saved` only ever grows through contributions and may exceed `goal`.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// Target in minor units.
    pub goal: i64,
    /// Accumulated contributions in minor units.
    pub saved: i64,
    /// Checklist in creation order. Empty when the project has no tasks.
    pub tasks: Vec<ProjectTask>,
}

impl Project {
    /// Progress clamped to `0..=100` for display.
    pub fn completion_percentage(&self) -> u8 {
        metrics::completion_percentage(self.saved, self.goal)
    }

    /// Unclamped `saved / goal`.
    pub fn completion_ratio(&self) -> f64 {
        metrics::completion_ratio(self.saved, self.goal)
    }

    pub fn is_completed(&self) -> bool {
        self.completion_percentage() >= 100
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub goal: i64,
    pub saved: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_tasks::Entity")]
    ProjectTasks,
}

impl Related<super::project_tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Project {
    pub(crate) fn from_model(model: Model, tasks: Vec<ProjectTask>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            goal: model.goal,
            saved: model.saved,
            tasks,
        }
    }
}

/// A new project always starts with nothing saved.
pub(crate) fn new_row(name: String, goal: i64) -> ActiveModel {
    ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name),
        goal: ActiveValue::Set(goal),
        saved: ActiveValue::Set(0),
    }
}
