//! Fixture server standing in for the remote people-data endpoint.
//!
//! # Design
//! The production pipeline fetches a JSON array of pet owners from a remote
//! HTTP address. This crate serves canned equivalents of that document so
//! integration tests run hermetically: one canonical dataset plus one
//! fixture per failure mode the pipeline must survive (empty body,
//! truncated JSON, a non-canonical enum token). Routes are stateless, so
//! there is no shared store behind the router.

use axum::{http::header, response::IntoResponse, routing::get, Router};
use tokio::net::TcpListener;

/// The canonical six-person dataset the tests query against.
pub const PEOPLE: &str = include_str!("../fixtures/people.json");

/// A document whose `gender` token is lowercase and must be rejected.
pub const BAD_GENDER: &str = include_str!("../fixtures/bad-gender.json");

/// A structurally invalid document (unterminated array).
pub const MALFORMED: &str = r#"[{"name": "Bob", "gender": "Male""#;

pub fn app() -> Router {
    Router::new()
        .route("/people.json", get(|| async { json_body(PEOPLE) }))
        .route("/empty.json", get(|| async { json_body("") }))
        .route("/malformed.json", get(|| async { json_body(MALFORMED) }))
        .route("/bad-gender.json", get(|| async { json_body(BAD_GENDER) }))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn json_body(body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}
