pub mod articles;
pub mod listing;
pub mod stats;

pub use articles::{ArticleDto, ArticleKindDto};
pub use listing::ArticleListing;
pub use stats::{ArticleCount, MeanPrice, OldestArticles};
