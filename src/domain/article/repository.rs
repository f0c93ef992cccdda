use crate::domain::article::entity::{Article, ArticleUpdate};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;

pub trait ArticleWriteRepository: Send + Sync {
    /// Fails with `DuplicateId` when an article with the same id is stored.
    fn insert(&self, article: Article) -> DomainResult<Article>;
    /// Fails with `NotFound` and leaves the store untouched when `id` is absent.
    fn update(&self, id: &ArticleId, changes: ArticleUpdate) -> DomainResult<Article>;
    fn remove(&self, id: &ArticleId) -> DomainResult<Article>;
}

pub trait ArticleReadRepository: Send + Sync {
    fn get(&self, id: &ArticleId) -> DomainResult<Article>;
    fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Every stored article in insertion order.
    fn list(&self) -> DomainResult<Vec<Article>>;
}
