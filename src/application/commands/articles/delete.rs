// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let article = self.load_existing(command.id).await?;

        let removed = self.write_repo.delete(article.id).await?;
        if removed == 0 {
            // Raced with another delete between the lookup and the write.
            return Err(ApplicationError::not_found("article not found"));
        }

        tracing::info!(article_id = %article.id, "article deleted");
        Ok(())
    }
}
