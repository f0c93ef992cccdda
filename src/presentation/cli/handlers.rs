use super::render;
use crate::{
    application::{
        commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
        error::{ApplicationError, ApplicationResult},
        queries::articles::{
            CountArticlesQuery, GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery,
        },
        services::ApplicationServices,
    },
    config::OutputFormat,
};

/// Rendered handler result. `mutated` tells the caller the store must be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub mutated: bool,
}

impl CommandOutput {
    pub fn read(text: String) -> Self {
        Self {
            text,
            mutated: false,
        }
    }

    pub fn write(text: String) -> Self {
        Self {
            text,
            mutated: true,
        }
    }
}

pub fn add(
    services: &ApplicationServices,
    command: CreateArticleCommand,
    format: OutputFormat,
) -> ApplicationResult<CommandOutput> {
    let created = services.article_commands.create_article(command)?;
    let headline = format!("Added article {}.", created.id);
    render::article(Some(headline.as_str()), &created, format).map(CommandOutput::write)
}

pub fn show(
    services: &ApplicationServices,
    id: Option<String>,
    slug: Option<String>,
    format: OutputFormat,
) -> ApplicationResult<CommandOutput> {
    let article = match (id, slug) {
        (_, Some(slug)) => services
            .article_queries
            .get_article_by_slug(GetArticleBySlugQuery { slug })?,
        (Some(id), None) => services
            .article_queries
            .get_article_by_id(GetArticleByIdQuery { id })?,
        (None, None) => {
            return Err(ApplicationError::invalid_argument(
                "show requires an id or --slug",
            ));
        }
    };
    render::article(None, &article, format).map(CommandOutput::read)
}

pub fn list(
    services: &ApplicationServices,
    query: ListArticlesQuery,
    format: OutputFormat,
) -> ApplicationResult<CommandOutput> {
    let listing = services.article_queries.list_articles(query)?;
    render::listing(&listing, format).map(CommandOutput::read)
}

pub fn update(
    services: &ApplicationServices,
    command: UpdateArticleCommand,
    format: OutputFormat,
) -> ApplicationResult<CommandOutput> {
    let updated = services.article_commands.update_article(command)?;
    let headline = format!("Updated article {}.", updated.id);
    render::article(Some(headline.as_str()), &updated, format).map(CommandOutput::write)
}

pub fn remove(
    services: &ApplicationServices,
    command: DeleteArticleCommand,
    format: OutputFormat,
) -> ApplicationResult<CommandOutput> {
    let removed = services.article_commands.delete_article(command)?;
    render::removed(&removed, format).map(CommandOutput::write)
}

pub fn count(
    services: &ApplicationServices,
    query: CountArticlesQuery,
    format: OutputFormat,
) -> ApplicationResult<CommandOutput> {
    let counted = services.article_queries.count_articles(query)?;
    render::count(&counted, format).map(CommandOutput::read)
}

pub fn mean_price(
    services: &ApplicationServices,
    format: OutputFormat,
) -> ApplicationResult<CommandOutput> {
    let mean = services.article_queries.mean_price()?;
    render::mean_price(&mean, format).map(CommandOutput::read)
}

pub fn oldest(
    services: &ApplicationServices,
    format: OutputFormat,
) -> ApplicationResult<CommandOutput> {
    let oldest = services.article_queries.oldest_articles()?;
    render::oldest(&oldest, format).map(CommandOutput::read)
}
