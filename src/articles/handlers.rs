use anyhow::Context;
use axum::{extract::State, routing::get, Extension, Json, Router};
use tracing::{debug, info, instrument};

use super::{
    dto::{CreatedResponse, SuccessResponse},
    repo_types::{Article, ArticleInput},
};
use crate::{
    auth::claims::Claims,
    error::ApiError,
    extract::{ApiJson, ApiPath},
    state::AppState,
};

pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/api/articles", get(list_articles).post(create_article))
        .route(
            "/api/articles/:id",
            get(get_article).put(update_article).delete(delete_article),
        )
}

#[instrument(skip(state))]
pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, ApiError> {
    let rows = state.articles.list().await.context("list articles")?;
    Ok(Json(rows))
}

#[instrument(skip(state))]
pub async fn get_article(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Article>, ApiError> {
    state
        .articles
        .get(id)
        .await
        .context("get article")?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[instrument(skip(state, claims, input), fields(user_id = claims.id))]
pub async fn create_article(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiJson(input): ApiJson<ArticleInput>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state.articles.create(&input).await.context("create article")?;
    info!(article_id = id, "article created");
    Ok(Json(CreatedResponse { id }))
}

#[instrument(skip(state, claims, input), fields(user_id = claims.id))]
pub async fn update_article(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<ArticleInput>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let touched = state
        .articles
        .update(id, &input)
        .await
        .context("update article")?;
    if touched == 0 {
        debug!("update matched no article");
    }
    Ok(Json(SuccessResponse::ok()))
}

#[instrument(skip(state, claims), fields(user_id = claims.id))]
pub async fn delete_article(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let removed = state.articles.delete(id).await.context("delete article")?;
    info!(removed, "article delete");
    Ok(Json(SuccessResponse::ok()))
}
