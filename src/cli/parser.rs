#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::action::CliAction;
use super::args::{ensure_no_unknown_flags, POOL_FLAGS};
use super::commands::{CliCommand, OutputFormat};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CliError {
    #[error("Missing required argument: {}", arg)]
    MissingRequiredArg { arg: String },
    #[error("Unknown command: {}", cmd)]
    UnknownCommand { cmd: String },
    #[error("Unknown flag: {}", flag)]
    UnknownFlag { flag: String },
    #[error("Invalid argument value for {}: {}", arg, error)]
    InvalidArgValue { arg: String, error: String },
}

impl CliError {
    /// Every parser failure is invalid CLI usage.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        2
    }
}

/// Peel the global `--json` marker off the front of the argument list.
#[must_use]
pub fn split_format(args: &[String]) -> (OutputFormat, &[String]) {
    match args.first().map(String::as_str) {
        Some("--json") => (OutputFormat::Json, &args[1..]),
        _ => (OutputFormat::Text, args),
    }
}

/// # Errors
/// Returns a `CliError` when the command is unknown, a required argument is
/// missing, or a flag value does not parse.
pub fn parse_cli_args(args: &[String]) -> Result<CliAction, CliError> {
    if args
        .get(1)
        .is_some_and(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        return Ok(CliAction::ShowHelp);
    }

    match args.first().map(String::as_str) {
        None | Some("-h" | "--help") => Ok(CliAction::ShowHelp),
        Some("-v" | "--version") => Ok(CliAction::ShowVersion),
        Some("score") => Ok(CliAction::Command(CliCommand::Score {
            a: positional(args, 1, "a")?.to_string(),
            b: positional(args, 2, "b")?.to_string(),
        })),
        Some("classify") => {
            let token = positional(args, 1, "token")?.to_string();
            let tail = &args[2..];
            ensure_no_unknown_flags(tail, POOL_FLAGS)?;
            Ok(CliAction::Command(CliCommand::Classify {
                token,
                options: parse_list_arg(tail, "options")?,
                subcommands: parse_list_arg(tail, "subcommands")?,
            }))
        }
        Some("rank") => {
            let token = positional(args, 1, "token")?.to_string();
            let tail = &args[2..];
            ensure_no_unknown_flags(tail, POOL_FLAGS)?;
            Ok(CliAction::Command(CliCommand::Rank {
                token,
                options: parse_list_arg(tail, "options")?,
                subcommands: parse_list_arg(tail, "subcommands")?,
                threshold: parse_optional_arg(tail, "threshold")?,
            }))
        }
        Some("?" | "help") => Ok(CliAction::Command(CliCommand::Help)),
        Some(cmd) => Err(CliError::UnknownCommand {
            cmd: cmd.to_string(),
        }),
    }
}

/// The positional at `index`, taken verbatim: unmatched tokens routinely
/// begin with dashes, so no flag-shape check applies here.
fn positional<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str, CliError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingRequiredArg {
            arg: name.to_string(),
        })
}

/// A comma-separated name list. The value is taken verbatim, because
/// candidate names themselves usually begin with `--`. A missing flag means
/// an empty pool.
fn parse_list_arg(args: &[String], name: &str) -> Result<Vec<String>, CliError> {
    let flag = format!("--{name}");
    let Some(position) = args.iter().position(|a| a.as_str() == flag) else {
        return Ok(Vec::new());
    };
    let Some(raw_value) = args.get(position + 1) else {
        return Err(CliError::MissingRequiredArg {
            arg: name.to_string(),
        });
    };
    Ok(raw_value
        .split(',')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect())
}

fn parse_optional_arg<T>(args: &[String], name: &str) -> Result<Option<T>, CliError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let flag = format!("--{name}");
    match args.iter().position(|a| a.as_str() == flag) {
        None => Ok(None),
        Some(position) => {
            let Some(raw_value) = args.get(position + 1) else {
                return Err(CliError::MissingRequiredArg {
                    arg: name.to_string(),
                });
            };
            raw_value
                .parse::<T>()
                .map(Some)
                .map_err(|e| CliError::InvalidArgValue {
                    arg: name.to_string(),
                    error: format!("{e}"),
                })
        }
    }
}
