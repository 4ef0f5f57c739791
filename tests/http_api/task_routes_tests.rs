//! CRUD route tests over an in-process router.

use super::helpers::{app, create_task, send, task_id};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test]
async fn list_starts_empty(app: Router) -> eyre::Result<()> {
    let response = send(&app, Method::GET, "/api/tasks", None).await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"success": true, "data": [], "count": 0}));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn create_returns_created_envelope(app: Router) -> eyre::Result<()> {
    let response = send(
        &app,
        Method::POST,
        "/api/tasks",
        Some(json!({"title": "  Buy milk "})),
    )
    .await?;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.success(), Some(true));
    assert_eq!(response.message(), Some("Task created successfully"));
    let data = response.data();
    assert_eq!(data.get("id"), Some(&json!(1)));
    assert_eq!(data.get("title"), Some(&json!("Buy milk")));
    assert_eq!(data.get("completed"), Some(&json!(false)));
    assert!(data.get("createdAt").and_then(|v| v.as_str()).is_some());
    Ok(())
}

#[rstest]
#[tokio::test]
async fn created_ids_strictly_increase(app: Router) -> eyre::Result<()> {
    let mut previous = 0;
    for title in ["one", "two", "three"] {
        let id = task_id(&create_task(&app, title).await?)?;
        assert!(id > previous);
        previous = id;
    }
    Ok(())
}

#[rstest]
#[tokio::test]
async fn get_returns_the_posted_record(app: Router) -> eyre::Result<()> {
    let created = create_task(&app, "Write report").await?;
    let id = task_id(&created)?;

    let response = send(&app, Method::GET, &format!("/api/tasks/{id}"), None).await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"success": true, "data": created}));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn list_reports_count_after_creates_and_deletes(app: Router) -> eyre::Result<()> {
    let mut ids = Vec::new();
    for title in ["a", "b", "c", "d"] {
        ids.push(task_id(&create_task(&app, title).await?)?);
    }
    for id in ids.iter().take(2) {
        let response = send(&app, Method::DELETE, &format!("/api/tasks/{id}"), None).await?;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = send(&app, Method::GET, "/api/tasks", None).await?;
    let titles: Vec<_> = response
        .data()
        .as_array()
        .map(|tasks| tasks.iter().filter_map(|t| t.get("title")).cloned().collect())
        .unwrap_or_default();

    assert_eq!(response.body.get("count"), Some(&json!(2)));
    assert_eq!(titles, vec![json!("c"), json!("d")]);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn buy_milk_walkthrough(app: Router) -> eyre::Result<()> {
    let created = create_task(&app, "Buy milk").await?;
    let id = task_id(&created)?;
    let uri = format!("/api/tasks/{id}");
    assert_eq!(created.get("completed"), Some(&json!(false)));

    let updated = send(&app, Method::PUT, &uri, Some(json!({"completed": true}))).await?;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.message(), Some("Task updated successfully"));
    assert_eq!(updated.data().get("completed"), Some(&json!(true)));
    assert_eq!(updated.data().get("title"), Some(&json!("Buy milk")));
    assert_eq!(updated.data().get("createdAt"), created.get("createdAt"));

    let deleted = send(&app, Method::DELETE, &uri, None).await?;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.message(), Some("Task deleted successfully"));
    assert_eq!(deleted.data(), updated.data());

    let missing = send(&app, Method::GET, &uri, None).await?;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(
        missing.body,
        json!({"success": false, "message": "Task not found"})
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn update_title_keeps_completion(app: Router) -> eyre::Result<()> {
    let id = task_id(&create_task(&app, "Draft").await?)?;
    let uri = format!("/api/tasks/{id}");
    send(&app, Method::PUT, &uri, Some(json!({"completed": true}))).await?;

    let response = send(&app, Method::PUT, &uri, Some(json!({"title": " Final "}))).await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data().get("title"), Some(&json!("Final")));
    assert_eq!(response.data().get("completed"), Some(&json!(true)));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn update_missing_task_is_not_found_and_store_unchanged(app: Router) -> eyre::Result<()> {
    create_task(&app, "Keep me").await?;
    let before = send(&app, Method::GET, "/api/tasks", None).await?;

    let response = send(
        &app,
        Method::PUT,
        "/api/tasks/99",
        Some(json!({"completed": true})),
    )
    .await?;
    let after = send(&app, Method::GET, "/api/tasks", None).await?;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), Some("Task not found"));
    assert_eq!(after.body, before.body);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn delete_missing_task_is_not_found(app: Router) -> eyre::Result<()> {
    let response = send(&app, Method::DELETE, "/api/tasks/5", None).await?;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.success(), Some(false));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn deleted_ids_are_not_reused(app: Router) -> eyre::Result<()> {
    let first = task_id(&create_task(&app, "first").await?)?;
    send(&app, Method::DELETE, &format!("/api/tasks/{first}"), None).await?;

    let second = task_id(&create_task(&app, "second").await?)?;
    assert!(second > first);
    Ok(())
}
