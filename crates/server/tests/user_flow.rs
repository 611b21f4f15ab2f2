mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{memory_app, send};

#[tokio::test]
async fn register_login_update_scenario() -> anyhow::Result<()> {
    let app = memory_app();

    let (status, body) = send(&app, "POST", "/users", Some(json!({"name": "A", "email": "a@x.com", "password": "p1"}))).await?;
    assert_eq!(status, StatusCode::OK);
    let created = body.expect("user body");
    assert_eq!(created["id"], 1);
    assert_eq!(created["imageUrl"], serde_json::Value::Null);

    let (status, body) = send(&app, "GET", "/user/login/a@x.com/p1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("user body")["id"], 1);

    let (status, body) = send(&app, "GET", "/user/login/a@x.com/wrong", None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body.is_none());

    let (status, body) = send(&app, "PUT", "/user/a@x.com", Some(json!({"name": "A2", "email": "a2@x.com", "password": "p2"}))).await?;
    assert_eq!(status, StatusCode::OK);
    let updated = body.expect("user body");
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["email"], "a2@x.com");

    let (status, body) = send(&app, "GET", "/user/a@x.com", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_none());

    let (status, body) = send(&app, "GET", "/user/a2@x.com", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("user body")["name"], "A2");

    let (status, _) = send(&app, "GET", "/user/login/a2@x.com/p2", None).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn moved_record_wins_email_lookup() -> anyhow::Result<()> {
    let app = memory_app();
    send(&app, "POST", "/users", Some(json!({"name": "C", "email": "c@x.com", "password": "pc"}))).await?;
    send(&app, "POST", "/users", Some(json!({"name": "A", "email": "a@x.com", "password": "pa"}))).await?;

    let (status, body) =
        send(&app, "PUT", "/user/c@x.com", Some(json!({"name": "MOVED", "email": "a@x.com", "password": "pm"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("user body")["id"], 1);

    let (status, body) = send(&app, "GET", "/user/a@x.com", None).await?;
    assert_eq!(status, StatusCode::OK);
    let found = body.expect("user body");
    assert_eq!(found["name"], "MOVED");
    assert_eq!(found["id"], 1);

    let (status, _) = send(&app, "GET", "/user/login/a@x.com/pm", None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", "/user/c@x.com", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn register_ignores_client_id_and_assigns_fresh_ones() -> anyhow::Result<()> {
    let app = memory_app();
    let mut seen = std::collections::HashSet::new();
    for i in 0..3 {
        let (status, body) = send(
            &app,
            "POST",
            "/users",
            Some(json!({"id": 1, "name": format!("U{i}"), "email": format!("u{i}@x.com"), "password": "p"})),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        let id = body.expect("user body")["id"].as_i64().expect("numeric id");
        assert!(seen.insert(id), "id {id} reused");
    }

    let (status, body) = send(&app, "GET", "/userst", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.expect("list body").as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn login_mismatch_on_either_field_is_unauthorized() -> anyhow::Result<()> {
    let app = memory_app();
    send(&app, "POST", "/users", Some(json!({"name": "A", "email": "a@x.com", "password": "p1"}))).await?;
    send(&app, "POST", "/users", Some(json!({"name": "B", "email": "b@x.com", "password": "p2"}))).await?;

    for uri in ["/user/login/a@x.com/p2", "/user/login/b@x.com/p1", "/user/login/c@x.com/p1"] {
        let (status, _) = send(&app, "GET", uri, None).await?;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
    Ok(())
}

#[tokio::test]
async fn updates_of_unknown_email_are_not_found() -> anyhow::Result<()> {
    let app = memory_app();
    let payload = json!({"name": "X", "email": "x@x.com", "password": "p", "imageUrl": "https://img/x.png"});

    let (status, body) = send(&app, "PUT", "/user/ghost@x.com", Some(payload.clone())).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_none());

    let (status, _) = send(&app, "PUT", "/user/image/ghost@x.com", Some(payload)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/userst", None).await?;
    assert_eq!(body, Some(json!([])));
    Ok(())
}

#[tokio::test]
async fn image_update_leaves_other_fields_alone() -> anyhow::Result<()> {
    let app = memory_app();
    send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "A", "email": "a@x.com", "password": "p1", "phone": "555-0100"})),
    )
    .await?;

    let (status, body) = send(
        &app,
        "PUT",
        "/user/image/a@x.com",
        Some(json!({"name": "Other", "email": "other@x.com", "password": "zzz", "phone": "000", "imageUrl": "https://img/a.png"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        Some(json!({
            "id": 1,
            "name": "A",
            "email": "a@x.com",
            "password": "p1",
            "imageUrl": "https://img/a.png",
            "phone": "555-0100"
        }))
    );
    Ok(())
}

#[tokio::test]
async fn profile_update_keeps_phone_and_image() -> anyhow::Result<()> {
    let app = memory_app();
    send(
        &app,
        "POST",
        "/users",
        Some(json!({"name": "A", "email": "a@x.com", "password": "p1", "phone": "555-0100", "imageUrl": "https://img/a.png"})),
    )
    .await?;

    let (status, body) = send(
        &app,
        "PUT",
        "/user/a@x.com",
        Some(json!({"name": "A", "email": "a@x.com", "password": "p9", "phone": "000"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    let user = body.expect("user body");
    assert_eq!(user["password"], "p9");
    assert_eq!(user["phone"], "555-0100");
    assert_eq!(user["imageUrl"], "https://img/a.png");
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_rejected_by_extractor() -> anyhow::Result<()> {
    let app = memory_app();
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))?;
    let resp = tower::ServiceExt::oneshot(app, req).await?;
    assert!(resp.status().is_client_error());
    Ok(())
}
