use crate::domain::article::{Article, ArticleKind, ArticleType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ArticleKindDto {
    Book { pages: u32 },
    Dvd { length: u32, age_rating: u32 },
}

impl ArticleKindDto {
    pub const fn article_type(&self) -> ArticleType {
        match self {
            Self::Book { .. } => ArticleType::Book,
            Self::Dvd { .. } => ArticleType::Dvd,
        }
    }
}

impl From<ArticleKind> for ArticleKindDto {
    fn from(kind: ArticleKind) -> Self {
        match kind {
            ArticleKind::Book { pages } => Self::Book {
                pages: pages.value(),
            },
            ArticleKind::Dvd { length, age_rating } => Self::Dvd {
                length: length.minutes(),
                age_rating: age_rating.min_age(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub publisher: String,
    pub release_year: i32,
    pub base_price: Decimal,
    /// Base price after the discount that applies in the year the DTO was built.
    pub price: Decimal,
    #[serde(flatten)]
    pub kind: ArticleKindDto,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn from_article(article: Article, current_year: i32) -> Self {
        Self {
            price: article.price(current_year),
            base_price: article.base_price.amount(),
            release_year: article.release_year.value(),
            kind: article.kind.into(),
            metadata: article
                .metadata
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            id: article.id.into(),
            title: article.title.into(),
            slug: article.slug.into(),
            publisher: article.publisher.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
