//! Engine types to wire views.

use api_types::{
    expense::ExpenseView, income::IncomeView, project::ProjectView, snapshot::Snapshot,
    task::{TaskStatus, TaskView},
};

pub(crate) fn status_to_engine(status: TaskStatus) -> engine::TaskStatus {
    match status {
        TaskStatus::Todo => engine::TaskStatus::Todo,
        TaskStatus::Done => engine::TaskStatus::Done,
    }
}

fn status_from_engine(status: engine::TaskStatus) -> TaskStatus {
    match status {
        engine::TaskStatus::Todo => TaskStatus::Todo,
        engine::TaskStatus::Done => TaskStatus::Done,
    }
}

fn map_task(task: engine::ProjectTask) -> TaskView {
    TaskView {
        id: task.id,
        description: task.description,
        status: status_from_engine(task.status),
    }
}

fn map_project(project: engine::Project) -> ProjectView {
    ProjectView {
        id: project.id,
        name: project.name,
        goal: project.goal,
        saved: project.saved,
        tasks: project.tasks.into_iter().map(map_task).collect(),
    }
}

fn map_income(entry: engine::IncomeEntry) -> IncomeView {
    IncomeView {
        id: entry.id,
        source: entry.source,
        amount: entry.amount,
        date: entry.date,
    }
}

fn map_expense(entry: engine::ExpenseEntry) -> ExpenseView {
    ExpenseView {
        id: entry.id,
        description: entry.description,
        amount: entry.amount,
        date: entry.date,
    }
}

pub(crate) fn map_snapshot(snapshot: engine::Snapshot) -> Snapshot {
    Snapshot {
        income: snapshot.income.into_iter().map(map_income).collect(),
        expenses: snapshot.expenses.into_iter().map(map_expense).collect(),
        projects: snapshot.projects.into_iter().map(map_project).collect(),
    }
}
