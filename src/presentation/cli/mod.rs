pub mod args;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod render;

pub use args::{Cli, Command};
pub use dispatcher::{Dispatcher, Invocation};
pub use error::{CliError, CliResult};
pub use handlers::CommandOutput;
