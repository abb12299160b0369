use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persist a new row and return the id storage assigned to it.
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId>;
    /// Returns the number of rows whose content actually changed.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64>;
    /// Returns the number of rows removed; `0` means the row was already gone.
    async fn delete(&self, id: ArticleId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// All articles in insertion order.
    async fn list(&self) -> DomainResult<Vec<Article>>;
}
