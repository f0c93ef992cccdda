// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod metadata;
mod service;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder, CreateArticleKind};
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
