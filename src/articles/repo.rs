use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{Article, ArticleInput};

#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// All articles, newest first.
    async fn list(&self) -> anyhow::Result<Vec<Article>>;
    async fn get(&self, id: i64) -> anyhow::Result<Option<Article>>;
    /// Inserts and returns the assigned id.
    async fn create(&self, input: &ArticleInput) -> anyhow::Result<i64>;
    /// Overwrites every writable column. Returns the number of rows touched.
    async fn update(&self, id: i64, input: &ArticleInput) -> anyhow::Result<u64>;
    /// Returns the number of rows removed.
    async fn delete(&self, id: i64) -> anyhow::Result<u64>;
}

#[derive(Clone)]
pub struct PgArticleStore {
    db: PgPool,
}

impl PgArticleStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn list(&self) -> anyhow::Result<Vec<Article>> {
        let rows = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, slug, category, summary, content, "imageUrl", "imageAlt", date
            FROM articles
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> anyhow::Result<Option<Article>> {
        let row = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, slug, category, summary, content, "imageUrl", "imageAlt", date
            FROM articles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn create(&self, input: &ArticleInput) -> anyhow::Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO articles (title, slug, category, summary, content, "imageUrl", "imageAlt", date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, now())
            RETURNING id
            "#,
        )
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.category)
        .bind(&input.summary)
        .bind(&input.content)
        .bind(&input.image_url)
        .bind(&input.image_alt)
        .fetch_one(&self.db)
        .await?;
        Ok(id)
    }

    async fn update(&self, id: i64, input: &ArticleInput) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            UPDATE articles
               SET title = $1, slug = $2, category = $3, summary = $4, content = $5,
                   "imageUrl" = $6, "imageAlt" = $7
             WHERE id = $8
            "#,
        )
        .bind(&input.title)
        .bind(&input.slug)
        .bind(&input.category)
        .bind(&input.summary)
        .bind(&input.content)
        .bind(&input.image_url)
        .bind(&input.image_alt)
        .bind(id)
        .execute(&self.db)
        .await?;
        Ok(res.rows_affected())
    }

    async fn delete(&self, id: i64) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(res.rows_affected())
    }
}
