//! Command-line front end: argument parsing and dispatch.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use cashflow_config::Config;

use crate::errors::CashflowError;

/// Parsed `cashflow_cli` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Forecast { path: PathBuf, json: bool },
    Template { months: Option<usize> },
    ConfigShow,
    ConfigSet { key: String, value: String },
    Version,
    Help,
}

impl Command {
    pub fn parse<I>(args: I) -> Result<Self, CashflowError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(command) = args.next() else {
            return Ok(Command::Help);
        };
        let rest: Vec<String> = args.collect();

        match command.as_str() {
            "forecast" => {
                let json = rest.iter().any(|arg| arg == "--json");
                let mut positional = rest.iter().filter(|arg| !arg.starts_with("--"));
                let path = positional
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| usage("forecast requires a scenario file"))?;
                if let Some(extra) = positional.next() {
                    return Err(usage(format!("unexpected argument `{extra}`")));
                }
                if let Some(flag) = rest
                    .iter()
                    .find(|arg| arg.starts_with("--") && arg.as_str() != "--json")
                {
                    return Err(usage(format!("unknown flag `{flag}`")));
                }
                Ok(Command::Forecast { path, json })
            }
            "template" => {
                let months = match rest.as_slice() {
                    [] => None,
                    [raw] => Some(
                        raw.parse::<usize>()
                            .map_err(|_| usage(format!("`{raw}` is not a month count")))?,
                    ),
                    [_, extra, ..] => {
                        return Err(usage(format!("unexpected argument `{extra}`")));
                    }
                };
                Ok(Command::Template { months })
            }
            "config" => match rest.as_slice() {
                [] => Ok(Command::ConfigShow),
                [action] if action == "show" => Ok(Command::ConfigShow),
                [action, key, value] if action == "set" => Ok(Command::ConfigSet {
                    key: key.clone(),
                    value: value.clone(),
                }),
                _ => Err(usage("expected `config show` or `config set <key> <value>`")),
            },
            "version" | "--version" | "-V" => Ok(Command::Version),
            "help" | "--help" | "-h" => Ok(Command::Help),
            other => Err(usage(format!("unknown command `{other}`"))),
        }
    }
}

fn usage(message: impl Into<String>) -> CashflowError {
    CashflowError::Usage(format!("{}\n\n{}", message.into(), usage_text()))
}

pub fn usage_text() -> String {
    format!(
        "Usage: cashflow_cli <command>\n\
         Commands:\n  \
         forecast <scenario.json> [--json]\n  \
         template [months]\n  \
         config show\n  \
         config set <key> <value>   (keys: {})\n  \
         version",
        Config::KEYS.join(", ")
    )
}

/// Entry point used by the binary: parses `args` (without the program name) and runs it.
pub fn run_cli<I>(args: I) -> Result<(), CashflowError>
where
    I: IntoIterator<Item = String>,
{
    let command = Command::parse(args)?;
    tracing::debug!(?command, "running command");
    commands::execute(command)
}
