//! Rejection tests for bad bodies and identifiers.

use super::helpers::{app, create_task, send, send_raw, task_id};
use axum::{
    Router,
    http::{Method, StatusCode},
};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case(json!({"title": ""}))]
#[case(json!({"title": "   "}))]
#[case(json!({}))]
#[case(json!({"title": null}))]
#[tokio::test]
async fn create_without_title_is_rejected(app: Router, #[case] body: Value) -> eyre::Result<()> {
    let response = send(&app, Method::POST, "/api/tasks", Some(body)).await?;
    let list = send(&app, Method::GET, "/api/tasks", None).await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({"success": false, "message": "Task title is required"})
    );
    assert_eq!(list.body.get("count"), Some(&json!(0)));
    Ok(())
}

#[rstest]
#[tokio::test]
async fn rejected_create_does_not_consume_an_id(app: Router) -> eyre::Result<()> {
    send(&app, Method::POST, "/api/tasks", Some(json!({"title": " "}))).await?;
    let created = create_task(&app, "real").await?;

    assert_eq!(task_id(&created)?, 1);
    Ok(())
}

#[rstest]
#[case("{\"title\": ")]
#[case("not json")]
#[case("{\"title\": 42}")]
#[tokio::test]
async fn malformed_create_body_is_bad_request(app: Router, #[case] raw: &str) -> eyre::Result<()> {
    let response = send_raw(&app, Method::POST, "/api/tasks", Some(raw)).await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.success(), Some(false));
    assert!(
        response
            .message()
            .is_some_and(|message| message.starts_with("Invalid request body"))
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn create_without_json_content_type_is_bad_request(app: Router) -> eyre::Result<()> {
    let response = send_raw(&app, Method::POST, "/api/tasks", None).await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.success(), Some(false));
    Ok(())
}

#[rstest]
#[case(json!({"completed": "yes"}))]
#[case(json!({"completed": 1}))]
#[case(json!({"title": 7}))]
#[tokio::test]
async fn update_with_wrongly_typed_fields_is_bad_request(
    app: Router,
    #[case] body: Value,
) -> eyre::Result<()> {
    let created = create_task(&app, "Buy milk").await?;
    let uri = format!("/api/tasks/{}", task_id(&created)?);

    let response = send(&app, Method::PUT, &uri, Some(body)).await?;
    let stored = send(&app, Method::GET, &uri, None).await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(stored.data(), &created);
    Ok(())
}

#[rstest]
#[tokio::test]
async fn update_with_blank_title_is_bad_request(app: Router) -> eyre::Result<()> {
    let created = create_task(&app, "Buy milk").await?;
    let uri = format!("/api/tasks/{}", task_id(&created)?);

    let response = send(&app, Method::PUT, &uri, Some(json!({"title": "  "}))).await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), Some("Task title is required"));
    Ok(())
}

#[rstest]
#[case(Method::GET)]
#[case(Method::PUT)]
#[case(Method::DELETE)]
#[tokio::test]
async fn non_numeric_id_is_not_found(app: Router, #[case] method: Method) -> eyre::Result<()> {
    create_task(&app, "Buy milk").await?;

    for uri in ["/api/tasks/abc", "/api/tasks/0", "/api/tasks/-1", "/api/tasks/1.5"] {
        let response = send(&app, method.clone(), uri, Some(json!({"completed": true}))).await?;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(response.message(), Some("Task not found"));
    }
    Ok(())
}

#[rstest]
#[case(json!({"title": "  "}))]
#[case(json!({"completed": "yes"}))]
#[case(json!({"completed": true}))]
#[tokio::test]
async fn update_unknown_id_is_not_found_whatever_the_body(
    app: Router,
    #[case] body: Value,
) -> eyre::Result<()> {
    create_task(&app, "Buy milk").await?;

    let response = send(&app, Method::PUT, "/api/tasks/99", Some(body)).await?;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({"success": false, "message": "Task not found"})
    );
    Ok(())
}

#[rstest]
#[tokio::test]
async fn update_unknown_id_with_malformed_body_is_not_found(app: Router) -> eyre::Result<()> {
    let response = send_raw(&app, Method::PUT, "/api/tasks/99", Some("{\"title\": ")).await?;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), Some("Task not found"));
    Ok(())
}

#[rstest]
#[case(Method::GET)]
#[case(Method::PUT)]
#[case(Method::DELETE)]
#[tokio::test]
async fn undecodable_id_is_not_found_envelope(
    app: Router,
    #[case] method: Method,
) -> eyre::Result<()> {
    let response = send(&app, method, "/api/tasks/%FF", Some(json!({"completed": true}))).await?;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({"success": false, "message": "Task not found"})
    );
    Ok(())
}
