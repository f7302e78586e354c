mod help;
mod link_management;
mod resolve;

pub use help::*;
pub use link_management::*;
pub use resolve::*;

use super::CliError;
use crate::storages::LinkStore;
use std::sync::Arc;

#[derive(Debug)]
pub enum Command {
    Help,
    List,
    Add {
        target_url: String,
        alias: Option<String>,
        tags: Vec<String>,
    },
    Rename {
        alias: String,
        new_alias: String,
    },
    Remove {
        alias: String,
    },
    Clear,
    Resolve {
        address: String,
    },
    Stats {
        alias: Option<String>,
    },
}

impl Command {
    pub fn execute(self, store: Arc<dyn LinkStore>) -> Result<(), CliError> {
        match self {
            Command::Help => {
                show_help();
                Ok(())
            }
            Command::List => list_links(store),
            Command::Add {
                target_url,
                alias,
                tags,
            } => add_link(store, target_url, alias, tags),
            Command::Rename { alias, new_alias } => rename_link(store, alias, new_alias),
            Command::Remove { alias } => remove_link(store, alias),
            Command::Clear => clear_links(store),
            Command::Resolve { address } => resolve_link(store, address),
            Command::Stats { alias } => show_stats(store, alias),
        }
    }
}
