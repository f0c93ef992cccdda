// src/domain/article/entity.rs
use crate::domain::article::kind::{ArticleKind, discounted_price};
use crate::domain::article::value_objects::{
    ArticleId, ArticleMetadata, ArticleSlug, ArticleTitle, BasePrice, MetadataKey, Publisher,
    ReleaseYear,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub publisher: Publisher,
    pub release_year: ReleaseYear,
    pub base_price: BasePrice,
    pub kind: ArticleKind,
    pub metadata: ArticleMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn age(&self, current_year: i32) -> u32 {
        self.release_year.age(current_year)
    }

    pub fn discount_percent(&self, current_year: i32) -> u32 {
        self.kind.discount_percent(self.age(current_year))
    }

    /// Sale price in `current_year`, after the kind's discount.
    pub fn price(&self, current_year: i32) -> Decimal {
        discounted_price(self.base_price, self.discount_percent(current_year))
    }

    pub fn set_title(&mut self, title: ArticleTitle, slug: ArticleSlug, now: DateTime<Utc>) {
        self.title = title;
        self.slug = slug;
        self.updated_at = now;
    }

    pub fn set_publisher(&mut self, publisher: Publisher, now: DateTime<Utc>) {
        self.publisher = publisher;
        self.updated_at = now;
    }

    pub fn set_release_year(&mut self, release_year: ReleaseYear, now: DateTime<Utc>) {
        self.release_year = release_year;
        self.updated_at = now;
    }

    pub fn set_base_price(&mut self, base_price: BasePrice, now: DateTime<Utc>) {
        self.base_price = base_price;
        self.updated_at = now;
    }

    pub fn set_metadata(&mut self, key: MetadataKey, value: String, now: DateTime<Utc>) {
        self.metadata.set(key, value);
        self.updated_at = now;
    }

    pub fn unset_metadata(&mut self, key: &MetadataKey, now: DateTime<Utc>) -> bool {
        let removed = self.metadata.remove(key).is_some();
        if removed {
            self.updated_at = now;
        }
        removed
    }

    /// Applies `changes` in order: catalog fields, then metadata writes, then removals.
    pub fn apply(&mut self, changes: ArticleUpdate) {
        let ArticleUpdate {
            title,
            publisher,
            release_year,
            base_price,
            set_metadata,
            unset_metadata,
            updated_at,
        } = changes;

        if let Some((title, slug)) = title {
            self.set_title(title, slug, updated_at);
        }
        if let Some(publisher) = publisher {
            self.set_publisher(publisher, updated_at);
        }
        if let Some(release_year) = release_year {
            self.set_release_year(release_year, updated_at);
        }
        if let Some(base_price) = base_price {
            self.set_base_price(base_price, updated_at);
        }
        for (key, value) in set_metadata {
            self.set_metadata(key, value, updated_at);
        }
        for key in &unset_metadata {
            self.unset_metadata(key, updated_at);
        }
        self.updated_at = updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub publisher: Publisher,
    pub release_year: ReleaseYear,
    pub base_price: BasePrice,
    pub kind: ArticleKind,
    pub metadata: ArticleMetadata,
    pub created_at: DateTime<Utc>,
}

impl From<NewArticle> for Article {
    fn from(value: NewArticle) -> Self {
        Self {
            id: value.id,
            title: value.title,
            slug: value.slug,
            publisher: value.publisher,
            release_year: value.release_year,
            base_price: value.base_price,
            kind: value.kind,
            metadata: value.metadata,
            created_at: value.created_at,
            updated_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub title: Option<(ArticleTitle, ArticleSlug)>,
    pub publisher: Option<Publisher>,
    pub release_year: Option<ReleaseYear>,
    pub base_price: Option<BasePrice>,
    pub set_metadata: Vec<(MetadataKey, String)>,
    pub unset_metadata: Vec<MetadataKey>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub const fn new(updated_at: DateTime<Utc>) -> Self {
        Self {
            title: None,
            publisher: None,
            release_year: None,
            base_price: None,
            set_metadata: Vec::new(),
            unset_metadata: Vec::new(),
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle, slug: ArticleSlug) -> Self {
        self.title = Some((title, slug));
        self
    }

    pub fn with_publisher(mut self, publisher: Publisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn with_release_year(mut self, release_year: ReleaseYear) -> Self {
        self.release_year = Some(release_year);
        self
    }

    pub fn with_base_price(mut self, base_price: BasePrice) -> Self {
        self.base_price = Some(base_price);
        self
    }

    pub fn with_metadata(mut self, key: MetadataKey, value: impl Into<String>) -> Self {
        self.set_metadata.push((key, value.into()));
        self
    }

    pub fn without_metadata(mut self, key: MetadataKey) -> Self {
        self.unset_metadata.push(key);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.publisher.is_none()
            && self.release_year.is_none()
            && self.base_price.is_none()
            && self.set_metadata.is_empty()
            && self.unset_metadata.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{AgeRating, PageCount, PlayingTime};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn sample_article() -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::new("A-1").unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            publisher: Publisher::new("Penguin").unwrap(),
            release_year: ReleaseYear::new(2020, 2024).unwrap(),
            base_price: BasePrice::parse("10.00").unwrap(),
            kind: ArticleKind::Book {
                pages: PageCount::new(1200).unwrap(),
            },
            metadata: ArticleMetadata::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn price_depends_on_the_current_year() {
        let article = sample_article();
        assert_eq!(article.age(2024), 4);
        // 4 years * 5% + 3% for more than 1000 pages
        assert_eq!(article.discount_percent(2024), 23);
        assert_eq!(article.price(2024), dec!(7.70));
        assert_eq!(article.price(2020), dec!(9.70));
        assert_eq!(article.price(2040), dec!(6.70));
    }

    #[test]
    fn dvd_price_ignores_age() {
        let mut article = sample_article();
        article.kind = ArticleKind::Dvd {
            length: PlayingTime::new(120).unwrap(),
            age_rating: AgeRating::from_min_age(12).unwrap(),
        };
        assert_eq!(article.price(2020), dec!(9.00));
        assert_eq!(article.price(2040), dec!(9.00));
    }

    #[test]
    fn set_title_updates_slug_and_timestamp() {
        let mut article = sample_article();
        let later = article.created_at + chrono::Duration::seconds(10);
        article.set_title(
            ArticleTitle::new("new title").unwrap(),
            ArticleSlug::new("new-title").unwrap(),
            later,
        );
        assert_eq!(article.title.as_str(), "new title");
        assert_eq!(article.slug.as_str(), "new-title");
        assert_eq!(article.updated_at, later);
    }

    #[test]
    fn unset_missing_metadata_keeps_timestamp() {
        let mut article = sample_article();
        let original = article.updated_at;
        let later = original + chrono::Duration::seconds(5);
        assert!(!article.unset_metadata(&MetadataKey::new("absent").unwrap(), later));
        assert_eq!(article.updated_at, original);
    }

    #[test]
    fn apply_writes_before_removals() {
        let mut article = sample_article();
        let key = MetadataKey::new("color").unwrap();
        let later = article.created_at + chrono::Duration::seconds(1);
        let changes = ArticleUpdate::new(later)
            .with_metadata(key.clone(), "red")
            .without_metadata(key.clone());
        article.apply(changes);
        assert!(article.metadata.get(&key).is_none());
        assert_eq!(article.updated_at, later);
    }

    #[test]
    fn apply_changes_catalog_fields() {
        let mut article = sample_article();
        let later = article.created_at + chrono::Duration::seconds(1);
        article.apply(
            ArticleUpdate::new(later)
                .with_publisher(Publisher::new("Folio").unwrap())
                .with_release_year(ReleaseYear::new(2024, 2024).unwrap())
                .with_base_price(BasePrice::parse("20").unwrap()),
        );
        assert_eq!(article.publisher.as_str(), "Folio");
        assert_eq!(article.release_year.value(), 2024);
        assert_eq!(article.price(2024), dec!(19.40));
    }

    #[test]
    fn empty_update_is_detected() {
        assert!(ArticleUpdate::new(Utc::now()).is_empty());
        assert!(
            !ArticleUpdate::new(Utc::now())
                .without_metadata(MetadataKey::new("k").unwrap())
                .is_empty()
        );
        assert!(
            !ArticleUpdate::new(Utc::now())
                .with_base_price(BasePrice::parse("1").unwrap())
                .is_empty()
        );
    }
}
