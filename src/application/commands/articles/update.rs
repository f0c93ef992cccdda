use super::{ArticleCommandService, metadata};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleTitle, ArticleUpdate, BasePrice, Publisher, ReleaseYear},
};

/// Fields left as `None` or empty are not touched.
#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub release_year: Option<i32>,
    pub base_price: Option<String>,
    pub set_metadata: Vec<(String, String)>,
    pub unset_metadata: Vec<String>,
}

impl ArticleCommandService {
    pub fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            publisher,
            release_year,
            base_price,
            set_metadata,
            unset_metadata,
        } = command;
        let current_year = self.clock.current_year();

        let id = ArticleId::new(id)?;
        let title = title.map(ArticleTitle::new).transpose()?;
        let publisher = publisher.map(Publisher::new).transpose()?;
        let release_year = release_year
            .map(|year| ReleaseYear::new(year, current_year))
            .transpose()?;
        let base_price = base_price.as_deref().map(BasePrice::parse).transpose()?;
        let set_metadata = metadata::parse_entries(set_metadata)?;
        let unset_metadata = metadata::parse_keys(unset_metadata)?;

        let mut update = ArticleUpdate::new(self.clock.now());
        if let Some(publisher) = publisher {
            update = update.with_publisher(publisher);
        }
        if let Some(release_year) = release_year {
            update = update.with_release_year(release_year);
        }
        if let Some(base_price) = base_price {
            update = update.with_base_price(base_price);
        }
        for (key, value) in set_metadata {
            update = update.with_metadata(key, value);
        }
        for key in unset_metadata {
            update = update.without_metadata(key);
        }

        if title.is_none() && update.is_empty() {
            return Err(ApplicationError::invalid_argument(
                "update requires at least one change",
            ));
        }

        let article = self.read_repo.get(&id)?;

        if let Some(title) = title {
            let slug = self.slug_service.generate_unique_slug(&title, &article.id)?;
            update = update.with_title(title, slug);
        }

        let updated = self.write_repo.update(&id, update)?;
        tracing::info!(id = %updated.id, "article updated");
        Ok(ArticleDto::from_article(updated, current_year))
    }
}
