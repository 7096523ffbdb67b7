use serde_json::json;

use crate::support::start_server;

#[tokio::test]
async fn unknown_route_returns_404() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/nonexistent")).await.unwrap();
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Route not found" }));
}

#[tokio::test]
async fn unsupported_method_returns_route_not_found() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .delete(format!("{base}/users"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Route not found" }));
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let requests = [
        client.post(format!("{base}/users")),
        client.post(format!("{base}/user")),
        client.put(format!("{base}/users/1")),
    ];
    for request in requests {
        let resp = request
            .header("content-type", "application/json")
            .body("{\"name\": \"Carol\",")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Invalid JSON body" }));
    }
}

#[tokio::test]
async fn malformed_json_on_missing_user_is_still_400() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/users/99"))
        .header("content-type", "application/json")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn non_json_content_type_reads_as_empty_body() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/users"))
        .header("content-type", "text/plain")
        .body("{\"name\": \"Carol\", \"email\": \"carol@x.com\"}")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "name and email are required" }));
}

#[tokio::test]
async fn missing_body_is_a_validation_error() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.post(format!("{base}/users")).send().await.unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "name and email are required" }));
}

#[tokio::test]
async fn undecodable_id_segment_returns_generic_500() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let requests = [
        client.get(format!("{base}/users/%FF")),
        client.put(format!("{base}/users/%FF")).json(&json!({ "name": "X" })),
        client.delete(format!("{base}/users/%FF")),
    ];
    for request in requests {
        let resp = request.send().await.unwrap();
        assert_eq!(resp.status(), 500);

        let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("application/json"));

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}

#[tokio::test]
async fn whitespace_only_json_body_returns_400() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/users"))
        .header("content-type", "application/json")
        .body("   \n")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Invalid JSON body" }));
}

#[tokio::test]
async fn json_suffix_content_type_is_not_parsed() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/users"))
        .header("content-type", "application/merge-patch+json")
        .body("{\"name\": \"Carol\", \"email\": \"carol@x.com\"}")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "name and email are required" }));
}

#[tokio::test]
async fn paths_match_exactly() {
    let base = start_server().await;

    for path in ["users/", "USERS", "Health"] {
        let resp = reqwest::get(format!("{base}/{path}")).await.unwrap();
        assert_eq!(resp.status(), 404, "GET /{path}");

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Route not found" }));
    }
}
