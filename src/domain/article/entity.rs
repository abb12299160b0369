use crate::domain::article::value_objects::ArticleId;

/// A stored article. Length rules on `title` and `body` are checked by
/// [`validate_article_form`](super::validate_article_form) before writes, not
/// here: rows read back from storage are taken as they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}
