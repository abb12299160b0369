use crate::domain::article::Article;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            body: article.body,
        }
    }
}
