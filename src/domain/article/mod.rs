pub mod entity;
pub mod kind;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle};
pub use kind::{ArticleKind, ArticleType};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    AgeRating, ArticleId, ArticleMetadata, ArticleSlug, ArticleTitle, BasePrice, MetadataKey,
    PageCount, PlayingTime, Publisher, ReleaseYear,
};
