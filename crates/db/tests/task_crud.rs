//! Integration tests for task CRUD scoped to projects.

use sqlx::PgPool;
use taskboard_db::models::project::{CreateProject, Project};
use taskboard_db::models::status::TaskStatus;
use taskboard_db::models::task::{CreateTask, UpdateTask};
use taskboard_db::models::user::CreateUser;
use taskboard_db::repositories::{ProjectRepo, TaskRepo, TaskStatusRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_project(pool: &PgPool, name: &str) -> Project {
    let owner = UserRepo::create(
        pool,
        &CreateUser {
            username: format!("owner-of-{name}"),
            email: None,
            password_hash: "hash".to_string(),
            token: format!("token-{name}"),
        },
    )
    .await
    .unwrap();
    let (project, _) = ProjectRepo::create_with_owner(
        pool,
        &CreateProject {
            name: name.to_string(),
        },
        owner.id,
    )
    .await
    .unwrap();
    project
}

fn new_task(project_id: i64, name: &str) -> CreateTask {
    CreateTask {
        project_id,
        name: name.to_string(),
        description: format!("{name} description"),
        status_id: None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_new_task_defaults_to_status_one(pool: PgPool) {
    let project = new_project(&pool, "Apollo").await;

    let task = TaskRepo::create(&pool, &new_task(project.id, "Design")).await.unwrap();

    assert_eq!(task.status_id, TaskStatus::Todo.id());
    assert_eq!(task.status_id, 1);
    assert_eq!(task.project_id, project.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_partial_update_keeps_omitted_fields(pool: PgPool) {
    let project = new_project(&pool, "Apollo").await;
    let task = TaskRepo::create(&pool, &new_task(project.id, "Design")).await.unwrap();

    let updated = TaskRepo::update(
        &pool,
        project.id,
        task.id,
        &UpdateTask {
            status_id: Some(TaskStatus::Done.id()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.status_id, 3);
    assert_eq!(updated.name, "Design");
    assert_eq!(updated.description, "Design description");
    assert_eq!(updated.creation_date, task.creation_date);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_task_not_reachable_through_other_project(pool: PgPool) {
    let apollo = new_project(&pool, "Apollo").await;
    let gemini = new_project(&pool, "Gemini").await;
    let task = TaskRepo::create(&pool, &new_task(apollo.id, "Design")).await.unwrap();

    assert!(TaskRepo::find_by_id(&pool, gemini.id, task.id).await.unwrap().is_none());
    assert!(TaskRepo::update(&pool, gemini.id, task.id, &UpdateTask::default())
        .await
        .unwrap()
        .is_none());
    assert!(!TaskRepo::delete(&pool, gemini.id, task.id).await.unwrap());
    assert!(TaskRepo::find_by_id(&pool, apollo.id, task.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_removes_exactly_one_row(pool: PgPool) {
    let project = new_project(&pool, "Apollo").await;
    let first = TaskRepo::create(&pool, &new_task(project.id, "One")).await.unwrap();
    TaskRepo::create(&pool, &new_task(project.id, "Two")).await.unwrap();

    assert!(TaskRepo::delete(&pool, project.id, first.id).await.unwrap());
    assert!(!TaskRepo::delete(&pool, project.id, first.id).await.unwrap());

    let remaining = TaskRepo::list_by_project(&pool, project.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Two");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_status_rejected_by_foreign_key(pool: PgPool) {
    let project = new_project(&pool, "Apollo").await;
    let task = TaskRepo::create(&pool, &new_task(project.id, "Design")).await.unwrap();

    assert!(!TaskStatusRepo::exists(&pool, 42).await.unwrap());
    assert!(TaskStatusRepo::exists(&pool, 2).await.unwrap());

    let result = TaskRepo::update(
        &pool,
        project.id,
        task.id,
        &UpdateTask {
            status_id: Some(42),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(sqlx::Error::Database(_))));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_project_removes_tasks(pool: PgPool) {
    let project = new_project(&pool, "Apollo").await;
    TaskRepo::create(&pool, &new_task(project.id, "Design")).await.unwrap();

    ProjectRepo::delete(&pool, project.id).await.unwrap();

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
