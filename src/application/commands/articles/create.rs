use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{ArticleId, FieldErrors, NewArticle, validate_article_form},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
}

#[derive(Debug)]
pub enum CreateArticleOutcome {
    Created(ArticleId),
    Invalid(FieldErrors),
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<CreateArticleOutcome> {
        let errors = validate_article_form(&command.title, &command.body);
        if !errors.is_empty() {
            return Ok(CreateArticleOutcome::Invalid(errors));
        }

        let id = self
            .write_repo
            .insert(NewArticle {
                title: command.title,
                body: command.body,
            })
            .await?;

        tracing::info!(article_id = %id, "article created");
        Ok(CreateArticleOutcome::Created(id))
    }
}
