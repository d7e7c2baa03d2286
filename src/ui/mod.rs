//! Presenter boundary: rendering and input capture

pub mod cli;
pub mod commands;
pub mod presenter;

pub use cli::{Cli, OutputFormat};
pub use commands::{Command, CommandError, USAGE};
pub use presenter::{JsonPresenter, Presenter, TablePresenter, error};
