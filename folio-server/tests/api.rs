mod common;

use common::{ADMIN_EMAIL, ADMIN_PASSWORD, TestApp, menu_sequence, seed_item, send};
use folio_server::menu::section_sync::MENU_SYNC_FAILED;
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_save_success_end_to_end() {
    let t = TestApp::new().await;
    for (i, label) in ["One", "Two", "Three"].iter().enumerate() {
        seed_item(&t.pool, label, i as i32, true).await;
    }

    let (status, body) = t.admin(Method::GET, "/api/navigation/menu/all", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let (status, body) = t
        .admin(
            Method::PATCH,
            "/api/navigation/menu/reorder",
            Some(json!({ "items": [
                { "id": 3, "order": 0 },
                { "id": 1, "order": 1 },
                { "id": 2, "order": 2 }
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "data": { "updated": 3 } }));

    let (_, body) = t.admin(Method::GET, "/api/navigation/menu/all", None).await;
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[tokio::test]
async fn test_concurrent_saves_last_write_wins() {
    let t = TestApp::new().await;
    for (i, label) in ["One", "Two", "Three"].iter().enumerate() {
        seed_item(&t.pool, label, i as i32, true).await;
    }

    // Admin B saves first
    let (status, _) = t
        .admin(
            Method::PATCH,
            "/api/navigation/menu/reorder",
            Some(json!({ "items": [
                { "id": 3, "order": 0 }, { "id": 2, "order": 1 }, { "id": 1, "order": 2 }
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    // Admin A, still holding [1,2,3], saves [2,1,3] without any conflict signal
    let (status, _) = t
        .admin(
            Method::PATCH,
            "/api/navigation/menu/reorder",
            Some(json!({ "items": [
                { "id": 2, "order": 0 }, { "id": 1, "order": 1 }, { "id": 3, "order": 2 }
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(menu_sequence(&t.pool).await, vec![2, 1, 3]);
}

#[tokio::test]
async fn test_reorder_rejects_malformed_bodies() {
    let t = TestApp::new().await;
    seed_item(&t.pool, "One", 0, true).await;

    let bodies = [
        json!({ "items": [] }),
        json!({ "items": "nope" }),
        json!({}),
        json!({ "items": [{ "id": "1", "order": 0 }] }),
    ];
    for body in bodies {
        let (status, response) = t
            .admin(Method::PATCH, "/api/navigation/menu/reorder", Some(body))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["success"], json!(false));
        assert_eq!(response["error"], json!("INVALID_INPUT"));
        assert!(response["message"].as_str().unwrap().contains("{id, order}"));
    }

    // Not JSON at all
    let (status, response) = send(
        &t.app,
        Method::PATCH,
        "/api/navigation/menu/reorder",
        Some(&t.token),
        Some("not json".to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], json!("INVALID_INPUT"));
}

#[tokio::test]
async fn test_reorder_unknown_id_is_storage_error() {
    let t = TestApp::new().await;
    let a = seed_item(&t.pool, "A", 0, true).await;
    let b = seed_item(&t.pool, "B", 1, true).await;

    let (status, body) = t
        .admin(
            Method::PATCH,
            "/api/navigation/menu/reorder",
            Some(json!({ "items": [
                { "id": b, "order": 0 }, { "id": a, "order": 1 }, { "id": 404, "order": 2 }
            ]})),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("STORAGE_ERROR"));
    assert_eq!(menu_sequence(&t.pool).await, vec![a, b]);
}

#[tokio::test]
async fn test_admin_menu_requires_session() {
    let t = TestApp::new().await;

    let (status, body) = t.public(Method::GET, "/api/navigation/menu/all").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("NOT_AUTHENTICATED"));

    let (status, body) = send(
        &t.app,
        Method::PATCH,
        "/api/navigation/menu/reorder",
        Some("garbage"),
        Some(json!({ "items": [{ "id": 1, "order": 0 }] }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("TOKEN_INVALID"));
}

#[tokio::test]
async fn test_public_menu_hides_inactive() {
    let t = TestApp::new().await;
    seed_item(&t.pool, "Draft", 0, false).await;
    let live = seed_item(&t.pool, "Live", 1, true).await;

    let (status, body) = t.public(Method::GET, "/api/navigation/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([{ "id": live, "label": "Live", "url": "/live", "image_url": null, "order": 1 }])
    );
}

#[tokio::test]
async fn test_footer_grouped_by_group() {
    let t = TestApp::new().await;
    for (group, label, order) in [("social", "GitHub", 1), ("social", "Mastodon", 0), ("legal", "Privacy", 0)] {
        let (status, _) = t
            .admin(
                Method::POST,
                "/api/admin/footer-blocks",
                Some(json!({ "group": group, "label": label, "order": order })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = t.public(Method::GET, "/api/navigation/footer").await;
    let social: Vec<&str> = body["data"]["social"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["label"].as_str().unwrap())
        .collect();
    assert_eq!(social, vec!["Mastodon", "GitHub"]);
    assert_eq!(body["data"]["legal"][0]["label"], json!("Privacy"));
}

#[tokio::test]
async fn test_section_lifecycle_drives_menu() {
    let t = TestApp::new().await;
    seed_item(&t.pool, "Home", 0, true).await;

    let (status, body) = t
        .admin(
            Method::POST,
            "/api/admin/sections",
            Some(json!({ "slug": "about", "title": "About" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["menu_sync_error"], json!(null));
    let section_id = body["data"]["section"]["id"].as_i64().unwrap();

    let (_, body) = t.public(Method::GET, "/api/navigation/menu").await;
    assert_eq!(body["data"][1]["url"], json!("/about"));
    assert_eq!(body["data"][1]["order"], json!(1));

    let (status, _) = t
        .admin(
            Method::PUT,
            &format!("/api/admin/sections/{section_id}"),
            Some(json!({ "slug": "about-me", "title": "About me" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = t.public(Method::GET, "/api/navigation/menu").await;
    assert_eq!(body["data"][1]["label"], json!("About me"));
    assert_eq!(body["data"][1]["url"], json!("/about-me"));

    let (status, body) = t
        .admin(Method::DELETE, &format!("/api/admin/sections/{section_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["menu_items_removed"], json!(1));

    let (_, body) = t.public(Method::GET, "/api/navigation/menu").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = t.public(Method::GET, "/api/content/about-me").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("SECTION_NOT_FOUND"));
}

#[tokio::test]
async fn test_section_slug_conflict() {
    let t = TestApp::new().await;
    let payload = json!({ "slug": "about", "title": "About" });
    t.admin(Method::POST, "/api/admin/sections", Some(payload.clone())).await;

    let (status, body) = t.admin(Method::POST, "/api/admin/sections", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], json!("SLUG_TAKEN"));
}

#[tokio::test]
async fn test_failed_mirror_keeps_section_change() {
    let t = TestApp::new().await;
    let (_, body) = t
        .admin(
            Method::POST,
            "/api/admin/sections",
            Some(json!({ "slug": "a", "title": "A" })),
        )
        .await;
    let section_id = body["data"]["section"]["id"].as_i64().unwrap();

    // Stray mirror already holding the target slug
    sqlx::query(
        "INSERT INTO menu_items (label, url, sort_order, is_active, source_slug, updated_at) \
         VALUES ('x', '/b', 1, 1, 'b', 0)",
    )
    .execute(&t.pool)
    .await
    .unwrap();

    let (status, body) = t
        .admin(
            Method::PUT,
            &format!("/api/admin/sections/{section_id}"),
            Some(json!({ "slug": "b" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["section"]["slug"], json!("b"));
    assert_eq!(body["data"]["menu_sync_error"], json!(MENU_SYNC_FAILED));

    let (status, _) = t.public(Method::GET, "/api/content/b").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = t.admin(Method::GET, "/api/navigation/menu/all", None).await;
    let mirrors: Vec<(String, String)> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| {
            (
                item["label"].as_str().unwrap().to_string(),
                item["source_slug"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        mirrors,
        vec![
            ("A".to_string(), "a".to_string()),
            ("x".to_string(), "b".to_string())
        ]
    );
}

#[tokio::test]
async fn test_section_delete_stops_when_menu_cleanup_fails() {
    let t = TestApp::new().await;
    let (_, body) = t
        .admin(
            Method::POST,
            "/api/admin/sections",
            Some(json!({ "slug": "about", "title": "About" })),
        )
        .await;
    let section_id = body["data"]["section"]["id"].as_i64().unwrap();

    sqlx::query("DROP TABLE menu_items")
        .execute(&t.pool)
        .await
        .unwrap();

    let (status, body) = t
        .admin(Method::DELETE, &format!("/api/admin/sections/{section_id}"), None)
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("STORAGE_ERROR"));
    assert_eq!(body["message"], json!(MENU_SYNC_FAILED));

    let (status, _) = t.public(Method::GET, "/api/content/about").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_slug_with_leading_slash_keeps_url() {
    let t = TestApp::new().await;
    let (status, body) = t
        .admin(
            Method::POST,
            "/api/admin/sections",
            Some(json!({ "slug": "/Work", "title": "Work" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["menu_sync_error"], json!(null));

    let (_, body) = t.public(Method::GET, "/api/navigation/menu").await;
    assert_eq!(body["data"][0]["url"], json!("/Work"));

    let (status, body) = t
        .admin(
            Method::POST,
            "/api/admin/sections",
            Some(json!({ "slug": "my work", "title": "Work" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("VALIDATION_FAILED"));
}

#[tokio::test]
async fn test_manual_item_appends_and_menu_sync_endpoint() {
    let t = TestApp::new().await;
    seed_item(&t.pool, "Home", 4, true).await;

    let (status, body) = t
        .admin(
            Method::POST,
            "/api/admin/menu-items",
            Some(json!({ "label": "Blog", "url": "/blog" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["order"], json!(5));
    assert_eq!(body["data"]["source_slug"], json!(null));

    sqlx::query("INSERT INTO sections (slug, title, body, updated_at) VALUES ('work', 'Work', '', 0)")
        .execute(&t.pool)
        .await
        .unwrap();

    let (status, body) = t.admin(Method::POST, "/api/admin/menu/sync", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "created": 1, "updated": 0 }));
}

#[tokio::test]
async fn test_login() {
    let t = TestApp::new().await;

    let (status, body) = send(
        &t.app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["admin"]["email"], json!(ADMIN_EMAIL));
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let (status, body) = send(&t.app, Method::GET, "/api/admin/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], json!(ADMIN_EMAIL));

    let (status, body) = send(
        &t.app,
        Method::POST,
        "/api/admin/login",
        None,
        Some(json!({ "email": ADMIN_EMAIL, "password": "wrong-password" }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("INVALID_CREDENTIALS"));
}

#[tokio::test]
async fn test_public_projects_use_absolute_image_urls() {
    let t = TestApp::new().await;
    let (status, _) = t
        .admin(
            Method::POST,
            "/api/admin/projects",
            Some(json!({
                "title": "Folio",
                "slug": "folio",
                "project_type": "design",
                "images": ["upload/projects/a.png"],
                "technologies": ["rust"]
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = t.public(Method::GET, "/api/projects/folio").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["project_type"], json!("design"));
    assert_eq!(
        body["data"]["images"],
        json!(["http://localhost:5001/upload/projects/a.png"])
    );

    let (status, body) = t.public(Method::GET, "/api/projects/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("PROJECT_NOT_FOUND"));
}

#[tokio::test]
async fn test_upload_stores_file() {
    let t = TestApp::new().await;
    let boundary = "folio-boundary";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"shot.png\"\r\n\
         Content-Type: image/png\r\n\r\nPNGDATA\r\n--{boundary}--\r\n"
    );
    let request = http::Request::builder()
        .method(Method::POST)
        .uri("/api/admin/upload/projects")
        .header(http::header::AUTHORIZATION, format!("Bearer {}", t.token))
        .header(
            http::header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(axum::body::Body::from(body))
        .unwrap();

    use http_body_util::BodyExt;
    use tower::ServiceExt;
    let response = t.app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    let path = json["data"]["path"].as_str().unwrap();
    assert!(path.starts_with("upload/projects/"));
    let file_name = path.rsplit('/').next().unwrap();
    let stored = std::fs::read(t.upload_dir.path().join("projects").join(file_name)).unwrap();
    assert_eq!(stored, b"PNGDATA");
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let t = TestApp::new().await;
    let (status, body) = t.public(Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));

    let (status, body) = t.public(Method::GET, "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
}
