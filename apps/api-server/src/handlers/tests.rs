use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};
use uuid::Uuid;

use haven_core::ports::TokenService;
use haven_infra::{JwtConfig, JwtTokenService};

use super::configure_routes;
use crate::state::AppState;

fn token_service() -> Arc<dyn TokenService> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret: "handler-test-secret".to_string(),
        expiration_hours: 1,
        issuer: "haven-test".to_string(),
    }))
}

macro_rules! app {
    ($tokens:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::in_memory()))
                .app_data(web::Data::new($tokens))
                .configure(configure_routes),
        )
        .await
    };
}

fn bearer(tokens: &Arc<dyn TokenService>, user_id: Uuid) -> (&'static str, String) {
    let token = tokens.generate_token(user_id).unwrap();
    ("Authorization", format!("Bearer {}", token))
}

fn article_payload(title: &str) -> Value {
    json!({
        "article": {
            "title": title,
            "body": "<p>Some body</p>",
            "description": "A short description"
        }
    })
}

/// Create an article as `$author` and return the `article` object.
macro_rules! create_article {
    ($app:expr, $tokens:expr, $author:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/articles/")
            .insert_header(bearer(&$tokens, $author))
            .set_json(article_payload("Rust in Production"))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        body["article"].clone()
    }};
}

#[actix_web::test]
async fn test_health_check() {
    let tokens = token_service();
    let app = app!(tokens);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[actix_web::test]
async fn test_create_article() {
    let tokens = token_service();
    let app = app!(tokens.clone());
    let author = Uuid::new_v4();

    let article = create_article!(app, tokens, author);

    assert_eq!(article["message"], "Article created successfully.");
    assert_eq!(article["author_id"], author.to_string());
    assert!(
        article["slug"]
            .as_str()
            .unwrap()
            .starts_with("rust-in-production-")
    );
}

#[actix_web::test]
async fn test_create_article_reports_missing_fields() {
    let tokens = token_service();
    let app = app!(tokens.clone());

    let req = test::TestRequest::post()
        .uri("/api/articles")
        .insert_header(bearer(&tokens, Uuid::new_v4()))
        .set_json(json!({"article": {"title": "   "}}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["title"][0], "This field may not be blank.");
    assert_eq!(body["errors"]["body"][0], "This field is required.");
    assert_eq!(body["errors"]["description"][0], "This field is required.");
}

#[actix_web::test]
async fn test_missing_token_is_unauthorized() {
    let tokens = token_service();
    let app = app!(tokens);

    let req = test::TestRequest::post()
        .uri("/api/articles/")
        .set_json(article_payload("Anonymous"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["errors"]["error"][0].is_string());
}

#[actix_web::test]
async fn test_token_scheme_is_accepted() {
    let tokens = token_service();
    let app = app!(tokens.clone());
    let token = tokens.generate_token(Uuid::new_v4()).unwrap();

    let req = test::TestRequest::post()
        .uri("/api/articles/")
        .insert_header(("Authorization", format!("Token {}", token)))
        .set_json(article_payload("Old clients"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let tokens = token_service();
    let app = app!(tokens.clone());

    let req = test::TestRequest::post()
        .uri("/api/articles/")
        .insert_header(bearer(&tokens, Uuid::new_v4()))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"article\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["errors"]["error"][0].is_string());
}

#[actix_web::test]
async fn test_rating_scenario() {
    let tokens = token_service();
    let app = app!(tokens.clone());
    let (author, reader) = (Uuid::new_v4(), Uuid::new_v4());

    let article = create_article!(app, tokens, author);
    let uri = format!("/api/articles/rate/{}", article["id"].as_str().unwrap());

    let rate = |user: Uuid, payload: Value| {
        test::TestRequest::post()
            .uri(&uri)
            .insert_header(bearer(&tokens, user))
            .set_json(payload)
            .to_request()
    };

    let resp = test::call_service(
        &app,
        rate(reader, json!({"article": {"rating": 1, "review": "Needs work"}})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["article"]["message"], "Article rated successfully.");
    assert_eq!(body["article"]["average_rating"], 1.0);
    assert_eq!(body["article"]["review"], "Needs work");

    let resp = test::call_service(&app, rate(reader, json!({"article": {"rating": 4}}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["errors"]["error"],
        json!(["You cannot rate an article twice."])
    );

    let resp = test::call_service(&app, rate(author, json!({"article": {"rating": 5}}))).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["errors"]["error"],
        json!(["You cannot rate your own article"])
    );

    let fresh = create_article!(app, tokens, author);
    let req = test::TestRequest::post()
        .uri(&format!(
            "/api/articles/rate/{}",
            fresh["id"].as_str().unwrap()
        ))
        .insert_header(bearer(&tokens, reader))
        .set_json(json!({"article": {"rating": 0}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["errors"]["rating"],
        json!(["Rating should be in range of 1 to 5."])
    );
}

#[actix_web::test]
async fn test_get_article_includes_average() {
    let tokens = token_service();
    let app = app!(tokens.clone());
    let article = create_article!(app, tokens, Uuid::new_v4());
    let id = article["id"].as_str().unwrap();

    for score in [1, 5] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/articles/rate/{}", id))
            .insert_header(bearer(&tokens, Uuid::new_v4()))
            .set_json(json!({"article": {"rating": score}}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let slug = article["slug"].as_str().unwrap();
    let req = test::TestRequest::get()
        .uri(&format!("/api/articles/{}", slug))
        .insert_header(bearer(&tokens, Uuid::new_v4()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["article"]["id"], id);
    assert_eq!(body["article"]["average_rating"], 3.0);
}

#[actix_web::test]
async fn test_unknown_article_is_not_found() {
    let tokens = token_service();
    let app = app!(tokens.clone());

    let req = test::TestRequest::post()
        .uri(&format!("/api/articles/rate/{}", Uuid::new_v4()))
        .insert_header(bearer(&tokens, Uuid::new_v4()))
        .set_json(json!({"article": {"rating": 3}}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );

    let req = test::TestRequest::post()
        .uri("/api/articles/rate/not-a-uuid")
        .insert_header(bearer(&tokens, Uuid::new_v4()))
        .set_json(json!({"article": {"rating": 3}}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_comment_and_reply() {
    let tokens = token_service();
    let app = app!(tokens.clone());
    let article = create_article!(app, tokens, Uuid::new_v4());
    let uri = format!("/api/articles/{}/comments", article["id"].as_str().unwrap());
    let commenter = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&tokens, commenter))
        .set_json(json!({"comment": {"body": "First!"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["comment"]["message"], "Comment created successfully.");
    assert!(body["comment"]["parent_id"].is_null());
    let parent_id = body["comment"]["id"].clone();

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&tokens, Uuid::new_v4()))
        .set_json(json!({"comment": {"body": "Agreed", "parent_id": parent_id}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["comment"]["parent_id"], parent_id);

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&tokens, commenter))
        .set_json(json!({"comment": {"body": "Lost", "parent_id": Uuid::new_v4()}}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_comment_on_missing_article() {
    let tokens = token_service();
    let app = app!(tokens.clone());

    let req = test::TestRequest::post()
        .uri(&format!("/api/articles/{}/comments", Uuid::new_v4()))
        .insert_header(bearer(&tokens, Uuid::new_v4()))
        .set_json(json!({"comment": {"body": ""}}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["body"], json!(["This field may not be blank."]));
    assert_eq!(body["errors"]["article"], json!(["Article does not exist."]));
}

#[actix_web::test]
async fn test_like_lifecycle() {
    let tokens = token_service();
    let app = app!(tokens.clone());
    let article = create_article!(app, tokens, Uuid::new_v4());
    let uri = format!("/api/articles/{}/like", article["id"].as_str().unwrap());
    let user = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&tokens, user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["article"]["message"], "Article liked successfully.");
    assert_eq!(body["article"]["value"], true);

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&tokens, user))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["errors"]["error"],
        json!(["You have already liked this article."])
    );

    let req = test::TestRequest::put()
        .uri(&uri)
        .insert_header(bearer(&tokens, user))
        .set_json(json!({"article": {"like": false}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["article"]["message"], "Like updated successfully.");
    assert_eq!(body["article"]["value"], false);

    let delete = || {
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header(bearer(&tokens, user))
            .to_request()
    };
    let resp = test::call_service(&app, delete()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["article"]["message"], "Like removed successfully.");

    assert_eq!(
        test::call_service(&app, delete()).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_favourite_is_independent_of_like() {
    let tokens = token_service();
    let app = app!(tokens.clone());
    let article = create_article!(app, tokens, Uuid::new_v4());
    let id = article["id"].as_str().unwrap();
    let user = Uuid::new_v4();

    for kind in ["like", "favourite"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/articles/{}/{}", id, kind))
            .insert_header(bearer(&tokens, user))
            .set_json(json!({"article": {}}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::put()
        .uri(&format!("/api/articles/{}/favourite", id))
        .insert_header(bearer(&tokens, user))
        .set_json(json!({"article": {}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["favourite"], json!(["This field is required."]));
}

#[actix_web::test]
async fn test_update_missing_reaction_is_not_found() {
    let tokens = token_service();
    let app = app!(tokens.clone());
    let article = create_article!(app, tokens, Uuid::new_v4());

    let req = test::TestRequest::put()
        .uri(&format!(
            "/api/articles/{}/favourite",
            article["id"].as_str().unwrap()
        ))
        .insert_header(bearer(&tokens, Uuid::new_v4()))
        .set_json(json!({"article": {"favourite": true}}))
        .to_request();

    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn test_get_reaction_is_method_not_allowed() {
    let tokens = token_service();
    let app = app!(tokens.clone());
    let uri = format!("/api/articles/{}/like", Uuid::new_v4());

    let req = test::TestRequest::get()
        .uri(&uri)
        .insert_header(bearer(&tokens, Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["error"], json!(["method GET not allowed"]));

    let req = test::TestRequest::get().uri(&uri).to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );
}

#[actix_web::test]
async fn test_malformed_reaction_body_is_rejected() {
    let tokens = token_service();
    let app = app!(tokens.clone());
    let article = create_article!(app, tokens, Uuid::new_v4());
    let uri = format!("/api/articles/{}/like", article["id"].as_str().unwrap());
    let user = Uuid::new_v4();

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&tokens, user))
        .set_json(json!({"article": {"like": "definitely-not-a-bool"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["errors"]["error"][0].is_string());

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&tokens, user))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"article\": ")
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    // Nothing was stored by the rejected requests.
    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&tokens, user))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CREATED
    );
}

#[actix_web::test]
async fn test_reply_to_non_uuid_parent_is_not_found() {
    let tokens = token_service();
    let app = app!(tokens.clone());
    let article = create_article!(app, tokens, Uuid::new_v4());
    let uri = format!("/api/articles/{}/comments", article["id"].as_str().unwrap());

    for parent_id in [json!(9999), json!("not-a-comment")] {
        let req = test::TestRequest::post()
            .uri(&uri)
            .insert_header(bearer(&tokens, Uuid::new_v4()))
            .set_json(json!({"comment": {"body": "hi", "parent_id": parent_id}}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert!(
            body["errors"]["error"][0]
                .as_str()
                .unwrap()
                .starts_with("comment with id ")
        );
    }

    let req = test::TestRequest::post()
        .uri(&uri)
        .insert_header(bearer(&tokens, Uuid::new_v4()))
        .set_json(json!({"comment": {"body": "top level", "parent_id": null}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["comment"]["parent_id"].is_null());
}
