mod cli_controller;

pub use cli_controller::{CliController, CliError};
