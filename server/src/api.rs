//! The JSON API, read straight from the content store.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Json;

use app::context::Context;
use app::store::{Badge, BlogPost, Certificate, Cv, Error, Profile};

pub const URL_PATH: &str = "/api";

const CV_FILE_NAME: &str = "cv.pdf";

pub fn router() -> axum::Router<Context> {
    axum::Router::new()
        .route("/health", get(health))
        .route("/profile", get(profile))
        .route("/blog", get(posts))
        .route("/blog/{id}", get(post))
        .route("/cv", get(cv))
        .route("/cv/download", get(cv_download))
        .route("/certificates", get(certificates))
        .route("/badges", get(badges))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn profile(State(ctx): State<Context>) -> Result<Json<Profile>, Error> {
    ctx.store.profile().map(Json)
}

async fn posts(State(ctx): State<Context>) -> Result<Json<Vec<BlogPost>>, Error> {
    ctx.store.posts().map(Json)
}

async fn post(
    State(ctx): State<Context>,
    Path(id): Path<String>,
) -> Result<Json<BlogPost>, Error> {
    ctx.store.post(&id).map(Json)
}

async fn cv(State(ctx): State<Context>) -> Result<Json<Cv>, Error> {
    ctx.store.cv().map(Json)
}

async fn cv_download(State(ctx): State<Context>) -> Result<impl IntoResponse, Error> {
    let pdf = ctx.store.cv_pdf()?;
    log::info!("serving {} ({} bytes)", CV_FILE_NAME, pdf.len());
    let headers = [
        (header::CONTENT_TYPE, String::from("application/pdf")),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", CV_FILE_NAME),
        ),
    ];
    Ok((headers, pdf))
}

async fn certificates(State(ctx): State<Context>) -> Result<Json<Vec<Certificate>>, Error> {
    ctx.store.certificates().map(Json)
}

async fn badges(State(ctx): State<Context>) -> Result<Json<Vec<Badge>>, Error> {
    ctx.store.badges().map(Json)
}
