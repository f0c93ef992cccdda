// tests/support/builders.rs
use std::path::Path;
use std::sync::Arc;

use articlecli::application::services::ApplicationServices;
use articlecli::config::OutputFormat;
use articlecli::domain::article::*;
use articlecli::infrastructure::repositories::{InMemoryArticleStore, JsonSnapshotFile};
use articlecli::infrastructure::util::DefaultSlugGenerator;
use articlecli::presentation::cli::{CliResult, CommandOutput, Dispatcher};

use chrono::Datelike;

use super::time::{fixed_clock, fixed_now};

pub struct ArticleBuilder {
    id: String,
    title: String,
    slug: Option<String>,
    publisher: String,
    release_year: i32,
    base_price: String,
    kind: ArticleKind,
    metadata: Vec<(String, String)>,
}

impl ArticleBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: "Test Article".into(),
            slug: None,
            publisher: "Test Press".into(),
            release_year: 2020,
            base_price: "10.00".into(),
            kind: ArticleKind::Book {
                pages: PageCount::new(240).unwrap(),
            },
            metadata: Vec::new(),
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.release_year = year;
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.base_price = price.into();
        self
    }

    pub fn dvd(mut self, length: u32, min_age: u32) -> Self {
        self.kind = ArticleKind::Dvd {
            length: PlayingTime::new(length).unwrap(),
            age_rating: AgeRating::from_min_age(min_age).unwrap(),
        };
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> Article {
        let slug = self
            .slug
            .unwrap_or_else(|| format!("slug-{}", self.id.to_lowercase()));
        let metadata = self
            .metadata
            .into_iter()
            .map(|(k, v)| (MetadataKey::new(k).unwrap(), v))
            .collect();
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(slug).unwrap(),
            publisher: Publisher::new(self.publisher).unwrap(),
            release_year: ReleaseYear::new(self.release_year, fixed_now().year()).unwrap(),
            base_price: BasePrice::parse(&self.base_price).unwrap(),
            kind: self.kind,
            metadata,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

pub fn services_for(store: &Arc<InMemoryArticleStore>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        store.clone(),
        store.clone(),
        Arc::new(fixed_clock()),
        Arc::new(DefaultSlugGenerator),
    ))
}

/// One process run: load the snapshot, dispatch, save when the store changed.
pub fn invoke(snapshot: &Path, args: &[&str]) -> CliResult<CommandOutput> {
    let file = JsonSnapshotFile::new(snapshot);
    let store = Arc::new(InMemoryArticleStore::with_articles(file.load().unwrap()).unwrap());
    let dispatcher = Dispatcher::new(services_for(&store), OutputFormat::Text);

    let output = dispatcher.dispatch(std::iter::once("articlecli").chain(args.iter().copied()))?;
    if output.mutated {
        file.save(&store.list().unwrap()).unwrap();
    }
    Ok(output)
}
