// src/infrastructure/repositories/mod.rs
mod in_memory_article;
mod snapshot;

pub use in_memory_article::InMemoryArticleStore;
pub use snapshot::JsonSnapshotFile;
