#![cfg(not(coverage))]

use super::test_support::mock::*;
use super::*;
use serde_json::json;

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

fn disaster_json(id: i64, status: &str, severity: &str) -> serde_json::Value {
    json!({
        "disaster_id": id,
        "name": format!("Disaster {}", id),
        "description": "River overflow",
        "location": "Aluva",
        "disaster_type": "FLOOD",
        "severity": severity,
        "status": status,
        "reported_at": "2025-08-01T10:00:00Z"
    })
}

fn task_detail_json(id: i64, status: &str, volunteer_id: Option<i64>) -> serde_json::Value {
    json!({
        "task_id": id,
        "request_id": id + 100,
        "volunteer_id": volunteer_id,
        "volunteer_name": volunteer_id.map(|_| "Ravi"),
        "photo": "default_path.jpg",
        "status": status,
        "volunteer_remarks": null,
        "admin_remarks": null,
        "created_at": "2025-08-01T10:00:00Z",
        "deadline": "2025-08-08T10:00:00Z",
        "request_title": "Food packets",
        "request_description": "Need food for 20 people",
        "location": "Kochi",
        "requester_name": "Asha"
    })
}

#[tokio::test]
async fn login_and_public_disaster_endpoints_decode() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/login");
        then.status(200).json_body(json!({
            "success": true,
            "message": "Login successful",
            "user_id": 7,
            "role": "Volunteer",
            "name": "Ravi",
            "email": "ravi@example.com",
            "user_status": "active",
            "access_token": "jwt"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/disasters");
        then.status(200).json_body(json!([
            disaster_json(2, "ACTIVE", "HIGH"),
            disaster_json(1, "RESOLVED", "LOW")
        ]));
    });

    let client = api_client(&server);
    let login = client
        .login(&LoginRequest {
            email: "ravi@example.com".into(),
            password: "secret123".into(),
        })
        .await
        .unwrap();
    assert_eq!(login.user_id, 7);
    assert_eq!(login.role, "Volunteer");

    let disasters = client.list_disasters(Some("ACTIVE")).await.unwrap();
    assert_eq!(disasters.len(), 2);
    assert!(disasters[0].is_active() && disasters[0].is_high_severity());
}

#[tokio::test]
async fn error_bodies_are_propagated() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/tasks/5/accept");
        then.status(409).json_body(json!({
            "error": "Task is already assigned to a volunteer",
            "code": "CONFLICT"
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(401).json_body(json!({
            "error": "Unauthorized",
            "code": "UNAUTHORIZED"
        }));
    });

    let client = api_client(&server);
    let err = client.accept_task(5, 7).await.unwrap_err();
    assert_eq!(err.code, "CONFLICT");
    assert_eq!(err.error, "Task is already assigned to a volunteer");

    let err = client.get_users().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn non_json_error_falls_back_to_status_text() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/api/disasters/9");
        then.status(502).json_body(json!("bad gateway"));
    });

    let err = api_client(&server).delete_disaster(9).await.unwrap_err();
    assert_eq!(err.code, "UNKNOWN");
    assert!(err.error.contains("502"));
}

#[tokio::test]
async fn deletes_accept_no_content() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/api/notifications/3");
        then.status(204);
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/resource-requests/resources/4");
        then.status(204);
    });

    let client = api_client(&server);
    client.delete_notification(3).await.unwrap();
    client.delete_resource(4).await.unwrap();
}

#[tokio::test]
async fn volunteer_task_endpoints_decode_details() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/tasks/available");
        then.status(200)
            .json_body(json!([task_detail_json(1, "PENDING", None)]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/tasks/volunteer/7");
        then.status(200)
            .json_body(json!([task_detail_json(2, "IN_PROGRESS", Some(7))]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/tasks/2/remarks");
        then.status(200).json_body(json!({
            "volunteer_remarks": "2025-08-02 09:15: Reached site",
            "admin_remarks": null
        }));
    });

    let client = api_client(&server);
    let available = client.get_available_tasks().await.unwrap();
    assert!(available[0].volunteer_id.is_none());
    let mine = client.get_volunteer_tasks(7).await.unwrap();
    assert_eq!(mine[0].volunteer_name.as_deref(), Some("Ravi"));
    let remarks = client.get_task_remarks(2).await.unwrap();
    assert!(remarks.admin_remarks.is_none());
}

#[tokio::test]
async fn unmatched_route_reports_missing_mock() {
    let server = MockServer::start_async().await;
    let err = api_client(&server).get_feedback().await.unwrap_err();
    assert!(err.error.contains("No mock for GET /api/feedback"));
}
