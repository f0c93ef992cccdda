use crate::domain::article::{
    AgeRating, Article, ArticleId, ArticleKind, ArticleMetadata, ArticleSlug, ArticleTitle,
    BasePrice, MetadataKey, PageCount, PlayingTime, Publisher, ReleaseYear,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const SNAPSHOT_VERSION: u32 = 2;

fn map_io(path: &Path, err: std::io::Error) -> DomainError {
    DomainError::Persistence(format!("{}: {err}", path.display()))
}

fn map_json(path: &Path, err: serde_json::Error) -> DomainError {
    DomainError::Persistence(format!("{}: malformed snapshot: {err}", path.display()))
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotDocument {
    version: u32,
    articles: Vec<ArticleRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum KindRecord {
    Book { pages: u32 },
    Dvd { length: u32, age_rating: u32 },
}

impl From<ArticleKind> for KindRecord {
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

impl TryFrom<KindRecord> for ArticleKind {
    type Error = DomainError;

    fn try_from(record: KindRecord) -> Result<Self, Self::Error> {
        Ok(match record {
            KindRecord::Book { pages } => Self::Book {
                pages: PageCount::new(pages)?,
            },
            KindRecord::Dvd { length, age_rating } => Self::Dvd {
                length: PlayingTime::new(length)?,
                age_rating: AgeRating::from_min_age(age_rating)?,
            },
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ArticleRecord {
    id: String,
    title: String,
    slug: String,
    publisher: String,
    release_year: i32,
    base_price: Decimal,
    #[serde(flatten)]
    kind: KindRecord,
    #[serde(default)]
    metadata: BTreeMap<String, String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleRecord {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.title.to_string(),
            slug: article.slug.to_string(),
            publisher: article.publisher.to_string(),
            release_year: article.release_year.value(),
            base_price: article.base_price.amount(),
            kind: article.kind.into(),
            metadata: article
                .metadata
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl TryFrom<ArticleRecord> for Article {
    type Error = DomainError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        let metadata = record
            .metadata
            .into_iter()
            .map(|(k, v)| MetadataKey::new(k).map(|key| (key, v)))
            .collect::<DomainResult<ArticleMetadata>>()?;

        Ok(Article {
            id: ArticleId::new(record.id)?,
            title: ArticleTitle::new(record.title)?,
            slug: ArticleSlug::new(record.slug)?,
            publisher: Publisher::new(record.publisher)?,
            release_year: ReleaseYear::stored(record.release_year)?,
            base_price: BasePrice::new(record.base_price)?,
            kind: record.kind.try_into()?,
            metadata,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

/// JSON file holding the store contents between invocations.
#[derive(Debug, Clone)]
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file loads as an empty store.
    pub fn load(&self) -> DomainResult<Vec<Article>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot yet, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(map_io(&self.path, err)),
        };

        let document: SnapshotDocument =
            serde_json::from_str(&raw).map_err(|err| map_json(&self.path, err))?;
        if document.version != SNAPSHOT_VERSION {
            return Err(DomainError::Persistence(format!(
                "{}: unsupported snapshot version {}",
                self.path.display(),
                document.version
            )));
        }

        let articles = document
            .articles
            .into_iter()
            .map(Article::try_from)
            .collect::<DomainResult<Vec<_>>>()
            .map_err(|err| {
                DomainError::Persistence(format!("{}: invalid record: {err}", self.path.display()))
            })?;
        tracing::debug!(path = %self.path.display(), count = articles.len(), "loaded snapshot");
        Ok(articles)
    }

    /// Writes to a sibling temporary file and renames it over the target.
    pub fn save(&self, articles: &[Article]) -> DomainResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| map_io(parent, err))?;
        }

        let document = SnapshotDocument {
            version: SNAPSHOT_VERSION,
            articles: articles.iter().map(ArticleRecord::from).collect(),
        };
        let payload =
            serde_json::to_string_pretty(&document).map_err(|err| map_json(&self.path, err))?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        fs::write(&tmp_path, payload).map_err(|err| map_io(&tmp_path, err))?;
        fs::rename(&tmp_path, &self.path).map_err(|err| map_io(&self.path, err))?;

        tracing::debug!(path = %self.path.display(), count = articles.len(), "saved snapshot");
        Ok(())
    }
}
