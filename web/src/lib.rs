//! Thin web boundary over the pet-names pipeline.
//!
//! # Design
//! Two routes: `GET /` renders the landing page, `GET /api/results` returns
//! the pipeline's tagged outcome as JSON. The handler never surfaces a
//! pipeline failure as an HTTP error — the outcome's `hasError` flag is the
//! client-facing signal, and diagnostic detail stays on the server log. The
//! only request the handler itself rejects is a `gender` query token that
//! the codec does not recognize.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;

use pets_core::{EnumCodec, Outcome, OwnerGender, Pipeline};

const INDEX_PAGE: &str = include_str!("../assets/index.html");

pub fn app(pipeline: Pipeline) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/results", get(generate_results))
        .with_state(Arc::new(pipeline))
}

pub async fn run(listener: TcpListener, pipeline: Pipeline) -> Result<(), std::io::Error> {
    axum::serve(listener, app(pipeline)).await
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

#[derive(Debug, Deserialize)]
struct ResultsQuery {
    address: Option<String>,
    gender: Option<String>,
}

async fn generate_results(
    State(pipeline): State<Arc<Pipeline>>,
    Query(query): Query<ResultsQuery>,
) -> Result<Json<Outcome>, StatusCode> {
    let gender = match query.gender.as_deref() {
        None => OwnerGender::Female,
        Some(token) => {
            OwnerGender::decode(Some(token)).map_err(|_| StatusCode::BAD_REQUEST)?
        }
    };

    let outcome = pipeline
        .generate_results_for(query.address.as_deref(), gender)
        .await;
    Ok(Json(outcome))
}
