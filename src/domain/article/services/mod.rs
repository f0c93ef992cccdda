// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing unique slugs for articles.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// A slug already held by `owner` is handed back unchanged.
    pub fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        owner: &ArticleId,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            match self.generator.slugify(owner.as_str()) {
                id if id.is_empty() => "article".to_string(),
                id => format!("article-{id}"),
            }
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug)? {
                Some(existing) if &existing.id == owner => return Ok(slug),
                Some(_) => {
                    candidate = format!("{base_slug}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{
        Article, ArticleKind, ArticleMetadata, ArticleWriteRepository, BasePrice, PageCount,
        Publisher, ReleaseYear,
    };
    use crate::infrastructure::{repositories::InMemoryArticleStore, util::DefaultSlugGenerator};
    use chrono::Utc;

    fn stored(store: &InMemoryArticleStore, id: &str, slug: &str) {
        let now = Utc::now();
        store
            .insert(Article {
                id: ArticleId::new(id).unwrap(),
                title: ArticleTitle::new("Motor Controller").unwrap(),
                slug: ArticleSlug::new(slug).unwrap(),
                publisher: Publisher::new("Acme Press").unwrap(),
                release_year: ReleaseYear::stored(2020).unwrap(),
                base_price: BasePrice::parse("19.90").unwrap(),
                kind: ArticleKind::Book {
                    pages: PageCount::new(240).unwrap(),
                },
                metadata: ArticleMetadata::new(),
                created_at: now,
                updated_at: now,
            })
            .unwrap();
    }

    fn service(store: &Arc<InMemoryArticleStore>) -> ArticleSlugService {
        ArticleSlugService::new(store.clone(), Arc::new(DefaultSlugGenerator))
    }

    #[test]
    fn appends_counter_on_collision() {
        let store = Arc::new(InMemoryArticleStore::new());
        stored(&store, "A-1", "motor-controller");
        stored(&store, "A-2", "motor-controller-1");

        let slug = service(&store)
            .generate_unique_slug(
                &ArticleTitle::new("Motor Controller").unwrap(),
                &ArticleId::new("A-3").unwrap(),
            )
            .unwrap();
        assert_eq!(slug.as_str(), "motor-controller-2");
    }

    #[test]
    fn owner_keeps_its_slug() {
        let store = Arc::new(InMemoryArticleStore::new());
        stored(&store, "A-1", "motor-controller");

        let slug = service(&store)
            .generate_unique_slug(
                &ArticleTitle::new("Motor controller").unwrap(),
                &ArticleId::new("A-1").unwrap(),
            )
            .unwrap();
        assert_eq!(slug.as_str(), "motor-controller");
    }

    #[test]
    fn falls_back_to_id_when_title_has_no_slug_characters() {
        let store = Arc::new(InMemoryArticleStore::new());
        let slug = service(&store)
            .generate_unique_slug(
                &ArticleTitle::new("???").unwrap(),
                &ArticleId::new("PLC-7").unwrap(),
            )
            .unwrap();
        assert_eq!(slug.as_str(), "article-plc-7");
    }
}
