use crate::application::{ErrorKind, error::ApplicationError};
use std::fmt;
use std::process::ExitCode;

/// A failure ready to be written to stderr, together with its exit status.
#[derive(Debug)]
pub struct CliError {
    kind: ErrorKind,
    message: String,
}

impl CliError {
    pub fn from_error(err: ApplicationError) -> Self {
        Self::new(err.kind(), format!("error: {err}"))
    }

    /// clap renders its own `error:` prefix and usage hint.
    pub fn from_clap(err: clap::Error) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            err.render().to_string().trim_end().to_string(),
        )
    }

    fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_status(&self) -> u8 {
        match self.kind {
            ErrorKind::InvalidArgument => 2,
            ErrorKind::NotFound => 3,
            ErrorKind::DuplicateId => 4,
            ErrorKind::Infrastructure => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ApplicationError> for CliError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

pub type CliResult<T> = Result<T, CliError>;

pub trait IntoCliResult<T> {
    fn into_cli(self) -> CliResult<T>;
}

impl<T> IntoCliResult<T> for crate::application::ApplicationResult<T> {
    fn into_cli(self) -> CliResult<T> {
        self.map_err(CliError::from_error)
    }
}
