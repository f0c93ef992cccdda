use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate, ArticleWriteRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use indexmap::IndexMap;
use parking_lot::RwLock;

fn not_found(id: &ArticleId) -> DomainError {
    DomainError::NotFound(format!("article {id} not found"))
}

/// Insertion-ordered article store backing both repository traits.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: RwLock<IndexMap<ArticleId, Article>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from previously listed articles, keeping their order.
    ///
    /// Ids and slugs must both be unique across `articles`.
    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> DomainResult<Self> {
        let store = Self::new();
        for article in articles {
            if let Some(holder) = store
                .find_by_slug(&article.slug)?
                .filter(|holder| holder.id != article.id)
            {
                return Err(DomainError::Validation(format!(
                    "slug {} is held by both {} and {}",
                    article.slug, holder.id, article.id
                )));
            }
            store.insert(article)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.articles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.read().is_empty()
    }
}

impl ArticleWriteRepository for InMemoryArticleStore {
    fn insert(&self, article: Article) -> DomainResult<Article> {
        let mut articles = self.articles.write();
        if articles.contains_key(&article.id) {
            return Err(DomainError::DuplicateId(format!(
                "article {} already exists",
                article.id
            )));
        }
        tracing::debug!(id = %article.id, "inserting article");
        articles.insert(article.id.clone(), article.clone());
        Ok(article)
    }

    fn update(&self, id: &ArticleId, changes: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.write();
        let article = articles.get_mut(id).ok_or_else(|| not_found(id))?;
        article.apply(changes);
        tracing::debug!(%id, "updated article");
        Ok(article.clone())
    }

    fn remove(&self, id: &ArticleId) -> DomainResult<Article> {
        let removed = self
            .articles
            .write()
            .shift_remove(id)
            .ok_or_else(|| not_found(id))?;
        tracing::debug!(%id, "removed article");
        Ok(removed)
    }
}

impl ArticleReadRepository for InMemoryArticleStore {
    fn get(&self, id: &ArticleId) -> DomainResult<Article> {
        self.articles
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .read()
            .values()
            .find(|article| &article.slug == slug)
            .cloned())
    }

    fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.articles.read().values().cloned().collect())
    }
}
