//! End-to-end HTTP tests over `/posts`, repeated for each storage backend.

use actix_web::{http::StatusCode, test, web, App};
use integration_tests::empty_backends;
use pb_api::{configure_routes, AppState};
use pb_core::PostService;
use serde_json::{json, Value};

macro_rules! app_for {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState {
                    posts: PostService::new($repo),
                }))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn create_delete_list_scenario() {
    for (name, repo) in empty_backends().await {
        let app = app_for!(repo);

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "author": "a", "title": "t", "content": "c" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED, "{name}");
        let first: Value = test::read_body_json(resp).await;
        assert_eq!(
            first,
            json!({
                "id": 1, "author": "a", "title": "t", "content": "c",
                "likeCount": 0, "commentCount": 0
            }),
            "{name}"
        );

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "author": "a2", "title": "t2", "content": "c2" }))
            .to_request();
        let second: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(second["id"], 2, "{name}");

        let req = test::TestRequest::delete().uri("/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{name}");
        let deleted: Value = test::read_body_json(resp).await;
        assert_eq!(deleted, first, "{name}");

        let req = test::TestRequest::get().uri("/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{name}");

        let req = test::TestRequest::get().uri("/posts").to_request();
        let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all, vec![second], "{name}");
    }
}

#[actix_web::test]
async fn patch_applies_non_empty_fields() {
    for (name, repo) in empty_backends().await {
        let app = app_for!(repo);

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "author": "a", "title": "t", "content": "c" }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::patch()
            .uri("/posts/1")
            .set_json(json!({ "title": "new title", "author": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{name}");
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["title"], "new title", "{name}");
        assert_eq!(updated["author"], created["author"], "{name}");
        assert_eq!(updated["content"], created["content"], "{name}");

        let req = test::TestRequest::patch()
            .uri("/posts/1")
            .set_json(json!({}))
            .to_request();
        let unchanged: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(unchanged, updated, "{name}");

        let req = test::TestRequest::get().uri("/posts/1").to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, updated, "{name}");
    }
}

#[actix_web::test]
async fn unknown_ids_are_not_found() {
    for (name, repo) in empty_backends().await {
        let app = app_for!(repo);

        for req in [
            test::TestRequest::get().uri("/posts/999999"),
            test::TestRequest::delete().uri("/posts/999999"),
            test::TestRequest::patch()
                .uri("/posts/999999")
                .set_json(json!({ "title": "t" })),
        ] {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{name}");
        }
    }
}

#[actix_web::test]
async fn list_on_empty_store_is_empty_array() {
    for (name, repo) in empty_backends().await {
        let app = app_for!(repo);

        let req = test::TestRequest::get().uri("/posts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{name}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]), "{name}");
    }
}

#[actix_web::test]
async fn patch_without_body_leaves_post_unchanged() {
    for (name, repo) in empty_backends().await {
        let app = app_for!(repo);

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "author": "a", "title": "t", "content": "c" }))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::patch().uri("/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{name}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, created, "{name}");

        let req = test::TestRequest::patch().uri("/posts/999999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{name}");
    }
}
