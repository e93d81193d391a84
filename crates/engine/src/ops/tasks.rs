use sea_orm::{QueryFilter, prelude::*, sea_query::Expr};

use crate::{ResultEngine, TaskStatus, project_tasks};

use super::{Engine, normalize_required_text};

impl Engine {
    /// Adds a `todo` task to a project.
    ///
    /// A missing project surfaces as the store's foreign key violation.
    pub async fn create_task(&self, project_id: i64, description: &str) -> ResultEngine<i64> {
        let description = normalize_required_text(description, "task description")?;

        let res = project_tasks::Entity::insert(project_tasks::new_row(project_id, description))
            .exec(&self.database)
            .await?;
        Ok(res.last_insert_id)
    }

    /// Overwrites a task's status. Returns the number of affected rows.
    pub async fn set_task_status(&self, task_id: i64, status: TaskStatus) -> ResultEngine<u64> {
        let res = project_tasks::Entity::update_many()
            .col_expr(project_tasks::Column::Status, Expr::value(status.as_str()))
            .filter(project_tasks::Column::Id.eq(task_id))
            .exec(&self.database)
            .await?;
        Ok(res.rows_affected)
    }
}
