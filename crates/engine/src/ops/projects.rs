use sea_orm::{QueryFilter, QueryOrder, prelude::*, sea_query::Expr};

use crate::{EngineError, Project, ProjectTask, ResultEngine, project_tasks, projects};

use super::{Engine, normalize_required_text, require_positive};

impl Engine {
    /// Creates a mission with nothing saved yet.
    ///
    /// `goal` must be > 0, so progress is always well defined.
    pub async fn create_project(&self, name: &str, goal: i64) -> ResultEngine<i64> {
        let name = normalize_required_text(name, "project name")?;
        let goal = require_positive(goal, "project goal")?;

        let res = projects::Entity::insert(projects::new_row(name, goal))
            .exec(&self.database)
            .await?;
        Ok(res.last_insert_id)
    }

    /// Adds `amount` to the project's `saved` counter in one statement:
    /// `UPDATE projects SET saved = saved + ? WHERE id = ? AND saved <= ?`.
    ///
    /// There is no upper clamp at `goal`. Returns the number of affected
    /// rows; `0` means the project does not exist. A contribution that would
    /// push `saved` past `i64::MAX` is rejected and leaves the row untouched.
    pub async fn save_contribution(&self, project_id: i64, amount: i64) -> ResultEngine<u64> {
        let amount = require_positive(amount, "contribution amount")?;

        let res = projects::Entity::update_many()
            .col_expr(
                projects::Column::Saved,
                Expr::col(projects::Column::Saved).add(amount),
            )
            .filter(projects::Column::Id.eq(project_id))
            .filter(projects::Column::Saved.lte(i64::MAX - amount))
            .exec(&self.database)
            .await?;

        if res.rows_affected == 0
            && projects::Entity::find_by_id(project_id)
                .one(&self.database)
                .await?
                .is_some()
        {
            return Err(EngineError::InvalidAmount(format!(
                "contribution of {amount} would overflow project {project_id}"
            )));
        }
        Ok(res.rows_affected)
    }

    /// Deletes a project. Its tasks are removed by the `ON DELETE CASCADE`
    /// foreign key, not here.
    pub async fn delete_project(&self, project_id: i64) -> ResultEngine<u64> {
        let res = projects::Entity::delete_by_id(project_id)
            .exec(&self.database)
            .await?;
        Ok(res.rows_affected)
    }

    /// A single project with its tasks in creation order.
    pub async fn project(&self, project_id: i64) -> ResultEngine<Project> {
        let model = projects::Entity::find_by_id(project_id)
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("project {project_id}")))?;

        let tasks = model
            .find_related(project_tasks::Entity)
            .order_by_asc(project_tasks::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(ProjectTask::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;

        Ok(Project::from_model(model, tasks))
    }
}
