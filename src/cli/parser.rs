use super::{commands::Command, CliError};
use std::env;

pub struct CliParser;

impl Default for CliParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CliParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self) -> Result<Command, CliError> {
        let args: Vec<String> = env::args().collect();

        if args.len() < 2 {
            return Err(CliError::ParseError("No command provided".to_string()));
        }

        match args[1].as_str() {
            "help" | "--help" | "-h" => Ok(Command::Help),
            "list" => Ok(Command::List),
            "add" => self.parse_add_command(&args[2..]),
            "rename" => self.parse_rename_command(&args[2..]),
            "remove" => self.parse_remove_command(&args[2..]),
            "clear" => Ok(Command::Clear),
            "resolve" => self.parse_resolve_command(&args[2..]),
            "stats" => self.parse_stats_command(&args[2..]),
            _ => Err(CliError::ParseError(format!(
                "Unknown command: {}",
                args[1]
            ))),
        }
    }

    pub fn parse_add_command(&self, args: &[String]) -> Result<Command, CliError> {
        if args.is_empty() {
            return Err(CliError::ParseError(
                "Add command requires arguments".to_string(),
            ));
        }

        let mut alias: Option<String> = None;
        let mut tags = Vec::new();
        let mut positional_args = Vec::new();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--alias" => {
                    if i + 1 < args.len() {
                        alias = Some(args[i + 1].clone());
                        i += 2;
                    } else {
                        return Err(CliError::ParseError(
                            "--alias requires an argument".to_string(),
                        ));
                    }
                }
                "--tag" => {
                    if i + 1 < args.len() {
                        tags.push(args[i + 1].clone());
                        i += 2;
                    } else {
                        return Err(CliError::ParseError(
                            "--tag requires an argument".to_string(),
                        ));
                    }
                }
                _ => {
                    positional_args.push(args[i].clone());
                    i += 1;
                }
            }
        }

        let target_url = match positional_args.len() {
            1 => positional_args[0].clone(),
            _ => {
                return Err(CliError::ParseError(
                    "Add command requires exactly one target URL".to_string(),
                ))
            }
        };

        Ok(Command::Add {
            target_url,
            alias,
            tags,
        })
    }

    pub fn parse_rename_command(&self, args: &[String]) -> Result<Command, CliError> {
        if args.len() != 2 {
            return Err(CliError::ParseError(
                "Rename command requires exactly two arguments".to_string(),
            ));
        }

        Ok(Command::Rename {
            alias: args[0].clone(),
            new_alias: args[1].clone(),
        })
    }

    pub fn parse_remove_command(&self, args: &[String]) -> Result<Command, CliError> {
        if args.len() != 1 {
            return Err(CliError::ParseError(
                "Remove command requires exactly one argument".to_string(),
            ));
        }

        Ok(Command::Remove {
            alias: args[0].clone(),
        })
    }

    pub fn parse_resolve_command(&self, args: &[String]) -> Result<Command, CliError> {
        if args.len() != 1 {
            return Err(CliError::ParseError(
                "Resolve command requires exactly one argument".to_string(),
            ));
        }

        Ok(Command::Resolve {
            address: args[0].clone(),
        })
    }

    pub fn parse_stats_command(&self, args: &[String]) -> Result<Command, CliError> {
        match args.len() {
            0 => Ok(Command::Stats { alias: None }),
            1 => Ok(Command::Stats {
                alias: Some(args[0].clone()),
            }),
            _ => Err(CliError::ParseError(
                "Stats command takes at most one argument".to_string(),
            )),
        }
    }
}
