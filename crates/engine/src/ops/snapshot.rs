use sea_orm::{QueryOrder, prelude::*};

use crate::{Project, ProjectTask, ResultEngine, Snapshot, project_tasks, projects};

use super::Engine;

impl Engine {
    /// Every project, most recently created first, each with its tasks in
    /// creation order.
    ///
    /// Runs as one `LEFT JOIN` read so the cost does not grow with one query
    /// per project. Projects without tasks get an empty `tasks`.
    ///
    /// Grouping the joined rows needs them sorted by project id ascending;
    /// the newest-first order is applied afterwards.
    pub async fn projects_with_tasks(&self) -> ResultEngine<Vec<Project>> {
        let rows: Vec<(projects::Model, Vec<project_tasks::Model>)> = projects::Entity::find()
            .find_with_related(project_tasks::Entity)
            .order_by_asc(projects::Column::Id)
            .order_by_asc(project_tasks::Column::Id)
            .all(&self.database)
            .await?;

        rows.into_iter()
            .rev()
            .map(|(model, tasks)| {
                let tasks = tasks
                    .into_iter()
                    .map(ProjectTask::try_from)
                    .collect::<ResultEngine<Vec<_>>>()?;
                Ok(Project::from_model(model, tasks))
            })
            .collect()
    }

    /// The full read-only snapshot: income, expenses and projects with tasks.
    ///
    /// The three reads are independent and run concurrently. If any of them
    /// fails the whole snapshot fails; no partial document is returned.
    pub async fn snapshot(&self) -> ResultEngine<Snapshot> {
        let (income, expenses, projects) = tokio::try_join!(
            self.list_income(),
            self.list_expenses(),
            self.projects_with_tasks(),
        )?;

        Ok(Snapshot {
            income,
            expenses,
            projects,
        })
    }
}
