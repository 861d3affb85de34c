use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use tower::ServiceExt;

async fn get(uri: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(uri).body(String::new()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn people_route_serves_the_canonical_dataset() {
    let resp = get("/people.json").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body = body_string(resp).await;
    let people: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(people.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn empty_route_serves_an_empty_body() {
    let resp = get("/empty.json").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.is_empty());
}

#[tokio::test]
async fn malformed_route_serves_unparseable_json() {
    let resp = get("/malformed.json").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(serde_json::from_str::<serde_json::Value>(&body).is_err());
}

#[tokio::test]
async fn bad_gender_route_serves_a_lowercase_token() {
    let resp = get("/bad-gender.json").await;
    let body = body_string(resp).await;
    assert!(body.contains("\"male\""));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let resp = get("/missing.json").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
