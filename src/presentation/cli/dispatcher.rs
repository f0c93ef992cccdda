use super::{
    args::{AddArticle, CatalogFields, Cli, Command},
    error::{CliError, CliResult, IntoCliResult},
    handlers::{self, CommandOutput},
};
use crate::{
    application::{
        commands::articles::{
            CreateArticleCommand, CreateArticleKind, DeleteArticleCommand, UpdateArticleCommand,
        },
        queries::articles::{CountArticlesQuery, ListArticlesQuery},
        services::ApplicationServices,
    },
    config::OutputFormat,
};
use clap::{Parser, error::ErrorKind as ClapErrorKind};
use std::{ffi::OsString, sync::Arc};

/// Outcome of argument parsing.
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// `--help` / `--version` text; printing it is a successful run.
    Print(String),
}

pub struct Dispatcher {
    services: Arc<ApplicationServices>,
    format: OutputFormat,
}

impl Dispatcher {
    pub fn new(services: Arc<ApplicationServices>, format: OutputFormat) -> Self {
        Self { services, format }
    }

    /// The first item is the program name, as with `std::env::args_os`.
    pub fn parse<I, T>(args: I) -> CliResult<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(Invocation::Run(cli)),
            Err(err) if matches!(err.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
                Ok(Invocation::Print(err.render().to_string()))
            }
            Err(err) => {
                tracing::debug!(kind = ?err.kind(), "argument parsing failed");
                Err(CliError::from_clap(err))
            }
        }
    }

    /// Parses `args` and runs the selected handler.
    pub fn dispatch<I, T>(&self, args: I) -> CliResult<CommandOutput>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::parse(args)? {
            Invocation::Run(cli) => self.execute(cli),
            Invocation::Print(text) => Ok(CommandOutput::read(text)),
        }
    }

    fn create_command(article: AddArticle) -> CreateArticleCommand {
        let (fields, kind) = match article {
            AddArticle::Book { fields, pages } => (fields, CreateArticleKind::Book { pages }),
            AddArticle::Dvd {
                fields,
                length,
                age_rating,
            } => (
                fields,
                CreateArticleKind::Dvd {
                    length,
                    min_age: age_rating,
                },
            ),
        };
        let CatalogFields {
            id,
            title,
            publisher,
            year,
            price,
            meta,
        } = fields;

        CreateArticleCommand {
            id,
            title,
            publisher,
            release_year: year,
            base_price: price,
            kind,
            metadata: meta,
        }
    }

    pub fn execute(&self, cli: Cli) -> CliResult<CommandOutput> {
        let format = cli.format.unwrap_or(self.format);
        let services = self.services.as_ref();
        let verb = cli.command.name();
        tracing::debug!(command = verb, ?format, "dispatching");

        let result = match cli.command {
            Command::Add { article } => {
                handlers::add(services, Self::create_command(article), format)
            }
            Command::Show { id, slug } => handlers::show(services, id, slug, format),
            Command::List { search, limit } => {
                handlers::list(services, ListArticlesQuery { search, limit }, format)
            }
            Command::Update {
                id,
                title,
                publisher,
                year,
                price,
                meta,
                unset,
            } => handlers::update(
                services,
                UpdateArticleCommand {
                    id,
                    title,
                    publisher,
                    release_year: year,
                    base_price: price,
                    set_metadata: meta,
                    unset_metadata: unset,
                },
                format,
            ),
            Command::Remove { id } => {
                handlers::remove(services, DeleteArticleCommand { id }, format)
            }
            Command::Count { article_type } => handlers::count(
                services,
                CountArticlesQuery {
                    article_type: article_type.map(Into::into),
                },
                format,
            ),
            Command::MeanPrice => handlers::mean_price(services, format),
            Command::Oldest => handlers::oldest(services, format),
        };

        if let Err(err) = &result {
            tracing::info!(command = verb, kind = ?err.kind(), error = %err, "command failed");
        }
        result.into_cli()
    }
}
