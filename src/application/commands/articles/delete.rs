// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Returns the article as it was just before removal.
    pub fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let removed = self.write_repo.remove(&id)?;
        tracing::info!(%id, "article removed");
        Ok(ArticleDto::from_article(removed, self.clock.current_year()))
    }
}
