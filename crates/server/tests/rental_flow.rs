mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{memory_app, send};

#[tokio::test]
async fn booking_form_payload_is_saved() -> anyhow::Result<()> {
    let app = memory_app();
    let form = json!({
        "name": "Ana",
        "phoneNumber": "555-0100",
        "address": "1 Main St",
        "veaddress": "Depot 4",
        "file": "licence.pdf"
    });

    let (status, body) = send(&app, "POST", "/api/rentals/save", Some(form)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        Some(json!({
            "id": 1,
            "name": "Ana",
            "phoneNumber": "555-0100",
            "address": "1 Main St",
            "vehicleAddress": "Depot 4",
            "fileName": "licence.pdf"
        }))
    );

    let (status, body) = send(&app, "POST", "/api/rentals/save", Some(json!({"name": "Ben", "file": null}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("rental body")["id"], 2);

    let (status, body) = send(&app, "GET", "/api/rentals", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("list body").as_array().map(Vec::len), Some(2));
    Ok(())
}

#[tokio::test]
async fn health_and_openapi_are_served() -> anyhow::Result<()> {
    let app = memory_app();

    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({"status": "ok"})));

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    let doc = body.expect("openapi body");
    assert!(doc["paths"].get("/user/login/{email}/{password}").is_some());
    Ok(())
}

#[tokio::test]
async fn cors_preflight_is_allowed() -> anyhow::Result<()> {
    let app = memory_app();
    let req = axum::http::Request::builder()
        .method("OPTIONS")
        .uri("/users")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .body(axum::body::Body::empty())?;
    let resp = tower::ServiceExt::oneshot(app, req).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("access-control-allow-origin"));
    Ok(())
}
