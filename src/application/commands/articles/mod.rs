// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleOutcome};
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::{UpdateArticleCommand, UpdateArticleOutcome};
