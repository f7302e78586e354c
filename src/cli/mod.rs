pub mod commands;
pub mod parser;

use parser::CliParser;
use crate::storages::StoreFactory;
use std::fmt;
use std::process;

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            CliError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CliError::CommandError(msg) => write!(f, "Command error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::LinkSmartError> for CliError {
    fn from(err: crate::errors::LinkSmartError) -> Self {
        CliError::StorageError(err.to_string())
    }
}

pub fn run_cli() {
    if let Err(e) = run_cli_inner() {
        crate::print_error!("{}", e);
        process::exit(1);
    }
}

fn run_cli_inner() -> Result<(), CliError> {
    let store = StoreFactory::create().map_err(|e| CliError::StorageError(e.to_string()))?;
    let parser = CliParser::new();
    let command = parser.parse()?;
    command.execute(store)
}
