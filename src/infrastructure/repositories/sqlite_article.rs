use super::error::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: row.title,
            body: row.body,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let NewArticle { title, body } = article;

        let result = sqlx::query("INSERT INTO articles (title, body) VALUES (?, ?)")
            .bind(title)
            .bind(body)
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        ArticleId::new(result.last_insert_rowid()).map_err(|_| {
            DomainError::Persistence("insert did not assign an article id".into())
        })
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64> {
        let ArticleUpdate { id, title, body } = update;

        // SQLite counts matched rows, so identical values are filtered out here
        // to report only rows that actually changed.
        let result = sqlx::query(
            "UPDATE articles SET title = ?1, body = ?2 WHERE id = ?3 AND (title <> ?1 OR body <> ?2)",
        )
        .bind(title)
        .bind(body)
        .bind(i64::from(id))
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, body FROM articles WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>("SELECT id, title, body FROM articles ORDER BY id")
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
