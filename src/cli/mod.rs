#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod action;
mod args;
mod commands;
mod parser;

pub use action::CliAction;
pub use args::{ensure_no_unknown_flags, COMMANDS, POOL_FLAGS, USAGE};
pub use commands::{CliCommand, OutputFormat};
pub use parser::{parse_cli_args, split_format, CliError};
