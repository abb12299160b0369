use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{ArticleId, ArticleUpdate, FieldErrors, validate_article_form},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Debug)]
pub enum UpdateArticleOutcome {
    Updated(ArticleId),
    /// Storage reported zero changed rows, e.g. the submitted values were identical.
    Unchanged(ArticleId),
    Invalid(FieldErrors),
}

impl ArticleCommandService {
    /// Fails with not-found before validating, so a missing article never
    /// shows a form.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<UpdateArticleOutcome> {
        let article = self.load_existing(command.id).await?;

        let errors = validate_article_form(&command.title, &command.body);
        if !errors.is_empty() {
            return Ok(UpdateArticleOutcome::Invalid(errors));
        }

        let update = ArticleUpdate::new(article.id, command.title, command.body);
        let rows = self.write_repo.update(update).await?;

        if rows > 0 {
            tracing::info!(article_id = %article.id, "article updated");
            Ok(UpdateArticleOutcome::Updated(article.id))
        } else {
            Ok(UpdateArticleOutcome::Unchanged(article.id))
        }
    }
}
