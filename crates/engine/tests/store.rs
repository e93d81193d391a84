use chrono::{TimeZone, Utc};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{Engine, EngineError, TaskStatus};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

async fn count_tasks_of(db: &DatabaseConnection, project_id: i64) -> i64 {
    let backend = db.get_database_backend();
    let row = db
        .query_one(Statement::from_sql_and_values(
            backend,
            "SELECT COUNT(*) AS n FROM project_tasks WHERE project_id = ?",
            vec![project_id.into()],
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get("", "n").unwrap()
}

#[tokio::test]
async fn laptop_mission_accumulates_contributions() {
    let (engine, _db) = engine_with_db().await;

    let id = engine.create_project("Laptop", 500_000).await.unwrap();
    assert_eq!(id, 1);

    assert_eq!(engine.save_contribution(id, 200_000).await.unwrap(), 1);
    let project = engine.project(id).await.unwrap();
    assert_eq!(project.saved, 200_000);
    assert_eq!(project.completion_percentage(), 40);

    assert_eq!(engine.save_contribution(id, 300_000).await.unwrap(), 1);
    let project = engine.project(id).await.unwrap();
    assert_eq!(project.saved, 500_000);
    assert_eq!(project.completion_percentage(), 100);
    assert!(project.is_completed());
}

#[tokio::test]
async fn saved_is_the_sum_of_contributions_and_may_exceed_goal() {
    let (engine, _db) = engine_with_db().await;
    let id = engine.create_project("Bike", 100).await.unwrap();

    for amount in [30, 5, 70, 45] {
        engine.save_contribution(id, amount).await.unwrap();
    }

    let project = engine.project(id).await.unwrap();
    assert_eq!(project.saved, 150);
    assert_eq!(project.completion_percentage(), 100);
    assert!((project.completion_ratio() - 1.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn contribution_to_missing_project_changes_nothing() {
    let (engine, _db) = engine_with_db().await;
    assert_eq!(engine.save_contribution(42, 100).await.unwrap(), 0);
}

#[tokio::test]
async fn non_positive_contribution_is_rejected() {
    let (engine, _db) = engine_with_db().await;
    let id = engine.create_project("Laptop", 500_000).await.unwrap();

    assert_eq!(
        engine.save_contribution(id, -10).await,
        Err(EngineError::InvalidAmount(
            "contribution amount must be > 0".to_string()
        ))
    );
    assert!(engine.save_contribution(id, 0).await.is_err());
    assert_eq!(engine.project(id).await.unwrap().saved, 0);
}

#[tokio::test]
async fn contribution_past_i64_range_is_rejected_and_snapshot_survives() {
    let (engine, _db) = engine_with_db().await;
    let id = engine.create_project("Big", 1).await.unwrap();

    assert_eq!(engine.save_contribution(id, i64::MAX).await.unwrap(), 1);
    assert!(matches!(
        engine.save_contribution(id, i64::MAX).await,
        Err(EngineError::InvalidAmount(_))
    ));
    assert!(matches!(
        engine.save_contribution(id, 1).await,
        Err(EngineError::InvalidAmount(_))
    ));

    let snapshot = engine.snapshot().await.unwrap();
    assert_eq!(snapshot.projects[0].saved, i64::MAX);
    assert_eq!(snapshot.projects[0].completion_percentage(), 100);
}

#[tokio::test]
async fn store_rejects_unknown_task_status() {
    let (engine, db) = engine_with_db().await;
    let id = engine.create_project("Laptop", 500_000).await.unwrap();

    let res = db
        .execute(Statement::from_sql_and_values(
            db.get_database_backend(),
            "INSERT INTO project_tasks (project_id, description, status) VALUES (?, ?, ?)",
            vec![id.into(), "Save weekly".into(), "Done".into()],
        ))
        .await;
    assert!(res.is_err());

    let snapshot = engine.snapshot().await.unwrap();
    assert!(snapshot.projects[0].tasks.is_empty());
}

#[tokio::test]
async fn zero_goal_is_rejected_at_creation() {
    let (engine, _db) = engine_with_db().await;
    assert_eq!(
        engine.create_project("Nothing", 0).await,
        Err(EngineError::InvalidAmount("project goal must be > 0".to_string()))
    );
}

#[tokio::test]
async fn task_status_update_shows_in_snapshot() {
    let (engine, _db) = engine_with_db().await;
    let project_id = engine.create_project("Laptop", 500_000).await.unwrap();

    let task_id = engine.create_task(project_id, "Save weekly").await.unwrap();
    assert_eq!(task_id, 1);
    assert_eq!(
        engine
            .set_task_status(task_id, TaskStatus::Done)
            .await
            .unwrap(),
        1
    );

    let snapshot = engine.snapshot().await.unwrap();
    let project = &snapshot.projects[0];
    assert_eq!(project.id, project_id);
    assert_eq!(project.tasks.len(), 1);
    assert_eq!(project.tasks[0].description, "Save weekly");
    assert_eq!(project.tasks[0].status, TaskStatus::Done);
}

#[tokio::test]
async fn status_update_on_missing_task_changes_nothing() {
    let (engine, _db) = engine_with_db().await;
    assert_eq!(
        engine.set_task_status(9, TaskStatus::Done).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn task_for_missing_project_violates_foreign_key() {
    let (engine, _db) = engine_with_db().await;
    let err = engine.create_task(99, "Orphan").await.unwrap_err();
    assert!(matches!(err, EngineError::Database(_)));
}

#[tokio::test]
async fn snapshot_nests_tasks_and_orders_projects_newest_first() {
    let (engine, _db) = engine_with_db().await;
    let laptop = engine.create_project("Laptop", 500_000).await.unwrap();
    let trip = engine.create_project("Trip", 200_000).await.unwrap();
    let empty = engine.create_project("Rainy day", 100_000).await.unwrap();

    let first = engine.create_task(laptop, "Compare models").await.unwrap();
    engine.create_task(trip, "Book flights").await.unwrap();
    let second = engine.create_task(laptop, "Sell old one").await.unwrap();

    let snapshot = engine.snapshot().await.unwrap();
    let ids: Vec<i64> = snapshot.projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![empty, trip, laptop]);

    assert!(snapshot.projects[0].tasks.is_empty());
    assert_eq!(snapshot.projects[1].tasks.len(), 1);

    let laptop_tasks: Vec<i64> = snapshot.projects[2].tasks.iter().map(|t| t.id).collect();
    assert_eq!(laptop_tasks, vec![first, second]);
    assert!(
        snapshot.projects[2]
            .tasks
            .iter()
            .all(|t| t.status == TaskStatus::Todo)
    );
}

#[tokio::test]
async fn deleting_a_project_cascades_to_its_tasks_only() {
    let (engine, db) = engine_with_db().await;
    let laptop = engine.create_project("Laptop", 500_000).await.unwrap();
    let trip = engine.create_project("Trip", 200_000).await.unwrap();
    engine.create_task(laptop, "Compare models").await.unwrap();
    engine.create_task(laptop, "Sell old one").await.unwrap();
    engine.create_task(trip, "Book flights").await.unwrap();

    assert_eq!(engine.delete_project(laptop).await.unwrap(), 1);

    assert_eq!(count_tasks_of(&db, laptop).await, 0);
    assert_eq!(count_tasks_of(&db, trip).await, 1);

    let snapshot = engine.snapshot().await.unwrap();
    assert_eq!(snapshot.projects.len(), 1);
    assert_eq!(snapshot.projects[0].tasks.len(), 1);

    assert_eq!(engine.delete_project(laptop).await.unwrap(), 0);
}

#[tokio::test]
async fn ledger_is_listed_newest_first() {
    let (engine, _db) = engine_with_db().await;
    let jan = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let feb = Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap();
    let mar = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    engine.create_income("Salary", 300_000, feb).await.unwrap();
    engine.create_income("Gift", 10_000, mar).await.unwrap();
    engine.create_income("Refund", 2_500, jan).await.unwrap();

    engine.create_expense("Rent", 120_000, jan).await.unwrap();
    engine.create_expense("Food", 15_000, mar).await.unwrap();

    let snapshot = engine.snapshot().await.unwrap();
    let sources: Vec<&str> = snapshot.income.iter().map(|i| i.source.as_str()).collect();
    assert_eq!(sources, vec!["Gift", "Salary", "Refund"]);

    let descriptions: Vec<&str> = snapshot
        .expenses
        .iter()
        .map(|e| e.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["Food", "Rent"]);
    assert_eq!(snapshot.expenses[0].date, mar);
}

#[tokio::test]
async fn ledger_input_is_validated() {
    let (engine, _db) = engine_with_db().await;

    assert_eq!(
        engine.create_income("  ", 100, Utc::now()).await,
        Err(EngineError::InvalidName(
            "income source must not be empty".to_string()
        ))
    );
    assert_eq!(
        engine.create_expense("Food", -1, Utc::now()).await,
        Err(EngineError::InvalidAmount(
            "expense amount must be >= 0".to_string()
        ))
    );

    let id = engine.create_expense(" Food ", 0, Utc::now()).await.unwrap();
    let snapshot = engine.snapshot().await.unwrap();
    assert_eq!(snapshot.expenses[0].id, id);
    assert_eq!(snapshot.expenses[0].description, "Food");
}

#[tokio::test]
async fn empty_store_yields_empty_snapshot() {
    let (engine, _db) = engine_with_db().await;
    let snapshot = engine.snapshot().await.unwrap();
    assert_eq!(snapshot, engine::Snapshot::default());
}

#[tokio::test]
async fn missing_project_lookup_is_not_found() {
    let (engine, _db) = engine_with_db().await;
    assert_eq!(
        engine.project(3).await,
        Err(EngineError::KeyNotFound("project 3".to_string()))
    );
}
