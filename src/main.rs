use anyhow::Result;
use articlecli::{
    application::services::ApplicationServices,
    config::{AppConfig, Overrides},
    domain::article::ArticleReadRepository,
    infrastructure::{
        repositories::{InMemoryArticleStore, JsonSnapshotFile},
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
    presentation::cli::{Dispatcher, Invocation},
};
use std::{process::ExitCode, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "fatal error");
            eprintln!("fatal error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn bootstrap() -> Result<ExitCode> {
    // Help, version and usage errors need no configuration.
    let cli = match Dispatcher::parse(std::env::args_os()) {
        Ok(Invocation::Run(cli)) => cli,
        Ok(Invocation::Print(text)) => {
            print!("{text}");
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => {
            eprintln!("{err}");
            return Ok(err.exit_code());
        }
    };

    let config = AppConfig::from_env(Overrides {
        store_path: cli.store.clone(),
        output_format: cli.format,
    })?;
    init_tracing(config.log_filter());

    let snapshot = config.store_path().map(JsonSnapshotFile::new);

    let store = match &snapshot {
        Some(file) => InMemoryArticleStore::with_articles(file.load()?)?,
        None => InMemoryArticleStore::new(),
    };
    let store = Arc::new(store);

    let services = Arc::new(ApplicationServices::new(
        store.clone(),
        store.clone(),
        Arc::new(SystemClock),
        Arc::new(DefaultSlugGenerator),
    ));
    let dispatcher = Dispatcher::new(services, config.output_format());

    match dispatcher.execute(cli) {
        Ok(output) => {
            if output.mutated {
                if let Some(file) = &snapshot {
                    file.save(&store.list()?)?;
                }
            }
            print!("{}", output.text);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(err.exit_code())
        }
    }
}

fn init_tracing(default_filter: &str) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| default_filter.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
