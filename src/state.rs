use std::sync::Arc;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    articles::repo::{ArticleStore, PgArticleStore},
    auth::{
        jwt::JwtKeys,
        repo::{PgUserStore, UserStore},
    },
    config::AppConfig,
};

/// Process-wide handles, built once at startup and shared read-only by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub keys: JwtKeys,
    pub articles: Arc<dyn ArticleStore>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    /// Connects to Postgres and wires the stores. Returns the pool too so
    /// startup can run migrations on it.
    pub async fn init(config: AppConfig) -> anyhow::Result<(Self, PgPool)> {
        let db = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        let articles = Arc::new(PgArticleStore::new(db.clone())) as Arc<dyn ArticleStore>;
        let users = Arc::new(PgUserStore::new(db.clone())) as Arc<dyn UserStore>;

        Ok((Self::from_parts(Arc::new(config), articles, users), db))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        articles: Arc<dyn ArticleStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        let keys = JwtKeys::new(&config.jwt);
        Self {
            config,
            keys,
            articles,
            users,
        }
    }
}
