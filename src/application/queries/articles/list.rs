use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ArticleListing},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::Article,
};

pub struct ListArticlesQuery {
    /// Case-insensitive needle matched against id, title, publisher and metadata values.
    pub search: Option<String>,
    pub limit: Option<usize>,
}

fn matches_needle(article: &Article, needle: &str) -> bool {
    article.id.as_str().to_lowercase().contains(needle)
        || article.title.as_str().to_lowercase().contains(needle)
        || article.publisher.as_str().to_lowercase().contains(needle)
        || article
            .metadata
            .iter()
            .any(|(_, value)| value.to_lowercase().contains(needle))
}

impl ArticleQueryService {
    pub fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticleListing> {
        if query.limit == Some(0) {
            return Err(ApplicationError::invalid_argument(
                "limit must be greater than zero",
            ));
        }

        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let matching: Vec<Article> = self
            .read_repo
            .list()?
            .into_iter()
            .filter(|article| needle.as_deref().is_none_or(|n| matches_needle(article, n)))
            .collect();

        let total = matching.len();
        let current_year = self.clock.current_year();
        let items: Vec<ArticleDto> = matching
            .into_iter()
            .take(query.limit.unwrap_or(usize::MAX))
            .map(|article| ArticleDto::from_article(article, current_year))
            .collect();

        Ok(ArticleListing::new(items, total))
    }
}
