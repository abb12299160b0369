pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use validation::{FieldErrors, validate_article_form};
pub use value_objects::ArticleId;
