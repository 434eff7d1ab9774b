use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Article row as stored and as returned to clients.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime, // set by the store on insert
}

/// Client-writable fields, used for both create and full-replace update.
/// A field left out of the body is written as NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInput {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
}
