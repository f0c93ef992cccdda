// src/application/commands/articles/create.rs
use super::{ArticleCommandService, metadata};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{
            AgeRating, Article, ArticleId, ArticleKind, ArticleTitle, BasePrice, NewArticle,
            PageCount, PlayingTime, Publisher, ReleaseYear,
        },
        errors::DomainResult,
    },
};

/// Raw type-specific fields as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateArticleKind {
    Book { pages: u32 },
    Dvd { length: u32, min_age: u32 },
}

impl CreateArticleKind {
    fn validate(self) -> DomainResult<ArticleKind> {
        Ok(match self {
            Self::Book { pages } => ArticleKind::Book {
                pages: PageCount::new(pages)?,
            },
            Self::Dvd { length, min_age } => ArticleKind::Dvd {
                length: PlayingTime::new(length)?,
                age_rating: AgeRating::from_min_age(min_age)?,
            },
        })
    }
}

pub struct CreateArticleCommand {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub release_year: i32,
    pub base_price: String,
    pub kind: CreateArticleKind,
    pub metadata: Vec<(String, String)>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    id: Option<String>,
    title: Option<String>,
    publisher: Option<String>,
    release_year: Option<i32>,
    base_price: Option<String>,
    kind: Option<CreateArticleKind>,
    metadata: Vec<(String, String)>,
}

impl CreateArticleCommandBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub const fn release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }

    pub fn base_price(mut self, price: impl Into<String>) -> Self {
        self.base_price = Some(price.into());
        self
    }

    pub const fn book(mut self, pages: u32) -> Self {
        self.kind = Some(CreateArticleKind::Book { pages });
        self
    }

    pub const fn dvd(mut self, length: u32, min_age: u32) -> Self {
        self.kind = Some(CreateArticleKind::Dvd { length, min_age });
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            id: self.id.ok_or("id is required")?,
            title: self.title.ok_or("title is required")?,
            publisher: self.publisher.ok_or("publisher is required")?,
            release_year: self.release_year.ok_or("release year is required")?,
            base_price: self.base_price.ok_or("base price is required")?,
            kind: self.kind.ok_or("article type is required")?,
            metadata: self.metadata,
        })
    }
}

impl ArticleCommandService {
    pub fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let now = self.clock.now();
        let current_year = self.clock.current_year();

        let id = ArticleId::new(command.id)?;
        let title = ArticleTitle::new(command.title)?;
        let publisher = Publisher::new(command.publisher)?;
        let release_year = ReleaseYear::new(command.release_year, current_year)?;
        let base_price = BasePrice::parse(&command.base_price)?;
        let kind = command.kind.validate()?;
        let metadata = metadata::into_metadata(metadata::parse_entries(command.metadata)?);

        let slug = self.slug_service.generate_unique_slug(&title, &id)?;

        let new_article = NewArticle {
            id,
            title,
            slug,
            publisher,
            release_year,
            base_price,
            kind,
            metadata,
            created_at: now,
        };

        let created = self.write_repo.insert(Article::from(new_article))?;
        tracing::info!(
            id = %created.id,
            slug = %created.slug,
            kind = %created.kind.article_type(),
            "article created"
        );
        Ok(ArticleDto::from_article(created, current_year))
    }
}
