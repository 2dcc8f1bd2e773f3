//! Store client tests against a local mock server.

use std::time::Duration;

use chrono::NaiveDate;
use mockito::Matcher;
use serde_json::json;

use crate::error::StoreError;
use crate::habit::HabitDraft;
use crate::session::UserProfile;
use crate::store::HabitStore;

fn store(server: &mockito::Server) -> HabitStore {
    HabitStore::new(&server.url(), Duration::from_secs(5)).unwrap()
}

fn owner() -> UserProfile {
    UserProfile {
        email: "runner@example.com".to_string(),
        display_name: "Runner".to_string(),
    }
}

fn habit_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": "Morning run",
        "category": "Fitness",
        "description": "5km loop",
        "userEmail": "runner@example.com",
        "userName": "Runner",
        "createdAt": "2025-06-01T07:00:00.000Z",
        "completionHistory": ["2025-06-14", "2025-06-15", "2025-06-15T09:00:00Z"],
        "isPublic": false
    })
}

#[tokio::test]
async fn lists_owner_habits_and_normalizes_history() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/my-habits/runner@example.com")
        .with_status(200)
        .with_body(json!({"success": true, "result": [habit_json("h1")]}).to_string())
        .create_async()
        .await;

    let habits = store(&server)
        .list_habits_by_owner("runner@example.com")
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].id, "h1");
    assert_eq!(habits[0].owner_name, "Runner");
    // The duplicated 2025-06-15 entries collapse into one calendar date.
    assert_eq!(habits[0].completion_history.len(), 2);
}

#[tokio::test]
async fn get_habit_maps_not_found_to_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/habit/missing")
        .with_status(404)
        .with_body("no such habit")
        .create_async()
        .await;

    let err = store(&server).get_habit("missing").await.unwrap_err();
    match err {
        StoreError::Api { status, .. } => assert_eq!(status, 404),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_requires_a_token() {
    let server = mockito::Server::new_async().await;
    let err = store(&server)
        .create_habit(&HabitDraft::default(), &owner())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Unauthorized));
}

#[tokio::test]
async fn create_sends_bearer_token_and_owner_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/habit")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::PartialJson(json!({
            "title": "Morning run",
            "userEmail": "runner@example.com",
            "userName": "Runner",
            "completionHistory": [],
            "isPublic": false
        })))
        .with_status(200)
        .with_body(json!({"success": true, "result": habit_json("created")}).to_string())
        .create_async()
        .await;

    let draft = HabitDraft {
        title: "Morning run".to_string(),
        category: "Fitness".to_string(),
        description: Some("5km loop".to_string()),
        ..HabitDraft::default()
    };
    let habit = store(&server)
        .with_token("test-token")
        .create_habit(&draft, &owner())
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(habit.id, "created");
}

#[tokio::test]
async fn record_completion_is_idempotent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/habit/h1/complete")
        .match_body(Matcher::Json(json!({"date": "2025-06-15"})))
        .with_status(200)
        .with_body(json!({"success": true, "result": habit_json("h1")}).to_string())
        .expect(2)
        .create_async()
        .await;

    let client = store(&server).with_token("test-token");
    let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    // Recording the same date twice succeeds both times; the history does
    // not grow.
    let first = client.record_completion("h1", date).await.unwrap();
    let second = client.record_completion("h1", date).await.unwrap();
    mock.assert_async().await;
    assert_eq!(
        first.completion_history.len(),
        second.completion_history.len()
    );
}

#[tokio::test]
async fn non_success_envelope_becomes_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PUT", "/habit/h1/complete")
        .with_status(200)
        .with_body(json!({"success": false, "message": "not the owner"}).to_string())
        .create_async()
        .await;

    let err = store(&server)
        .with_token("test-token")
        .record_completion("h1", NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
        .await
        .unwrap_err();
    match err {
        StoreError::Api { message, .. } => assert_eq!(message, "not the owner"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn delete_accepts_ack_without_result() {
    let mut server = mockito::Server::new_async().await;
    let id = uuid::Uuid::new_v4().to_string();
    let mock = server
        .mock("DELETE", format!("/habit/{id}").as_str())
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .create_async()
        .await;

    store(&server)
        .with_token("test-token")
        .delete_habit(&id)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn expired_token_maps_to_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/habit")
        .with_status(401)
        .with_body("token expired")
        .create_async()
        .await;

    let err = store(&server)
        .with_token("stale")
        .create_habit(&HabitDraft::default(), &owner())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Unauthorized));
}

#[tokio::test]
async fn update_replaces_record() {
    let mut server = mockito::Server::new_async().await;
    let mut habit: crate::habit::Habit = serde_json::from_value(habit_json("h1")).unwrap();
    habit.title = "Evening run".to_string();

    let mock = server
        .mock("PUT", "/habit/h1")
        .match_body(Matcher::PartialJson(json!({"title": "Evening run"})))
        .with_status(200)
        .with_body(
            json!({"success": true, "result": {
                "_id": "h1",
                "title": "Evening run",
                "category": "Fitness",
                "userEmail": "runner@example.com",
                "userName": "Runner",
                "createdAt": "2025-06-01T07:00:00.000Z",
                "completionHistory": [],
                "isPublic": false
            }})
            .to_string(),
        )
        .create_async()
        .await;

    let updated = store(&server)
        .with_token("test-token")
        .update_habit(&habit)
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(updated.title, "Evening run");
}

#[test]
fn rejects_invalid_base_url() {
    let err = HabitStore::new("not a url", Duration::from_secs(5)).unwrap_err();
    assert!(matches!(err, StoreError::InvalidBaseUrl { .. }));
}
