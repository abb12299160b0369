// tests/support/mocks.rs
use async_trait::async_trait;
use goblog::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use goblog::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeMap;
use std::sync::Mutex;

/* -------------------------------- InMemoryArticleRepository -------------------------------- */

/// In-memory article store with MySQL-like "changed rows" semantics for updates.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    rows: BTreeMap<i64, (String, String)>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, title: &str, body: &str) -> i64 {
        let mut store = self.inner.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        store.rows.insert(id, (title.to_string(), body.to_string()));
        id
    }

    pub fn snapshot(&self, id: i64) -> Option<(String, String)> {
        self.inner.lock().unwrap().rows.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<ArticleId> {
        let id = self.seed(&article.title, &article.body);
        ArticleId::new(id)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64> {
        let mut store = self.inner.lock().unwrap();
        match store.rows.get_mut(&i64::from(update.id)) {
            Some(row) if row.0 == update.title && row.1 == update.body => Ok(0),
            Some(row) => {
                *row = (update.title, update.body);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        let mut store = self.inner.lock().unwrap();
        Ok(store.rows.remove(&i64::from(id)).map_or(0, |_| 1))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.get(&i64::from(id)).map(|(title, body)| Article {
            id,
            title: title.clone(),
            body: body.clone(),
        }))
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let store = self.inner.lock().unwrap();
        store
            .rows
            .iter()
            .map(|(id, (title, body))| {
                Ok(Article {
                    id: ArticleId::new(*id)?,
                    title: title.clone(),
                    body: body.clone(),
                })
            })
            .collect()
    }
}

/* -------------------------------- FailingArticleRepository -------------------------------- */

/// Every call fails as if the database connection were lost.
pub struct FailingArticleRepository;

fn connection_lost() -> DomainError {
    DomainError::Persistence("connection refused".into())
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepository {
    async fn insert(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        Err(connection_lost())
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<u64> {
        Err(connection_lost())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<u64> {
        Err(connection_lost())
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepository {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(connection_lost())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Err(connection_lost())
    }
}

/* -------------------------------- ReadOnlyArticleRepository -------------------------------- */

/// Reads come from an in-memory store; every write fails as if the database
/// had gone read-only after the article was fetched.
#[derive(Default)]
pub struct ReadOnlyArticleRepository {
    pub store: InMemoryArticleRepository,
}

#[async_trait]
impl ArticleWriteRepository for ReadOnlyArticleRepository {
    async fn insert(&self, _article: NewArticle) -> DomainResult<ArticleId> {
        Err(connection_lost())
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<u64> {
        Err(connection_lost())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<u64> {
        Err(connection_lost())
    }
}

#[async_trait]
impl ArticleReadRepository for ReadOnlyArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.store.find_by_id(id).await
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        self.store.list().await
    }
}
