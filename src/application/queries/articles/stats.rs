use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleCount, MeanPrice, OldestArticles},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleType, value_objects::round_price},
};
use rust_decimal::Decimal;

const NO_ARTICLES: &str = "no articles found";

#[derive(Debug, Default)]
pub struct CountArticlesQuery {
    /// Count only this type; `None` counts everything.
    pub article_type: Option<ArticleType>,
}

impl ArticleQueryService {
    /// An empty store counts as zero.
    pub fn count_articles(&self, query: CountArticlesQuery) -> ApplicationResult<ArticleCount> {
        let count = self
            .read_repo
            .list()?
            .iter()
            .filter(|article| {
                query
                    .article_type
                    .is_none_or(|wanted| article.kind.article_type() == wanted)
            })
            .count();

        Ok(ArticleCount {
            article_type: query.article_type.map(|t| t.as_str().to_string()),
            count,
        })
    }

    /// Mean of the discounted prices, rounded half up to cents.
    pub fn mean_price(&self) -> ApplicationResult<MeanPrice> {
        let articles = self.non_empty_list()?;
        let current_year = self.clock.current_year();

        let sum: Decimal = articles
            .iter()
            .map(|article| article.price(current_year))
            .sum();
        let mean = sum
            .checked_div(Decimal::from(articles.len()))
            .ok_or_else(|| ApplicationError::infrastructure("mean price overflowed"))?;

        Ok(MeanPrice {
            articles: articles.len(),
            mean_price: round_price(mean),
        })
    }

    /// All articles sharing the earliest release year; ties keep store order.
    pub fn oldest_articles(&self) -> ApplicationResult<OldestArticles> {
        let articles = self.non_empty_list()?;
        let oldest = articles
            .iter()
            .map(|article| article.release_year)
            .min()
            .ok_or_else(|| ApplicationError::not_found(NO_ARTICLES))?;

        let ids = articles
            .into_iter()
            .filter(|article| article.release_year == oldest)
            .map(|article| article.id.into())
            .collect();

        Ok(OldestArticles {
            release_year: oldest.value(),
            ids,
        })
    }

    fn non_empty_list(&self) -> ApplicationResult<Vec<Article>> {
        let articles = self.read_repo.list()?;
        if articles.is_empty() {
            return Err(ApplicationError::not_found(NO_ARTICLES));
        }
        Ok(articles)
    }
}
