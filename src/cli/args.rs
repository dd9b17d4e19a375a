#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::parser::CliError;

pub const COMMANDS: &[&str] = &["score", "classify", "rank", "help"];

/// Flags accepted by the `classify` and `rank` commands.
pub const POOL_FLAGS: &[&str] = &["--options", "--subcommands", "--threshold"];

pub const USAGE: &str = "\
didyoumean - bigram-cosine suggestions for unmatched CLI tokens

Usage:
  didyoumean [--json] <command> [args]

Commands:
  score <a> <b>          Print the similarity of two strings
  classify <token>       Classify an unmatched token as option/subcommand/none
  rank <token>           Rank candidates and print the suggestion line
  help                   Show this help

Flags for classify and rank:
  --options a,b          Comma-separated visible option names
  --subcommands x,y      Comma-separated visible subcommand names
  --threshold n          Minimum similarity a candidate must exceed (rank only)

Global flags:
  --json                 Emit a JSON envelope instead of text
  -h, --help             Show this help
  -v, --version          Show version";

/// # Errors
/// Returns `CliError::UnknownFlag` if a flag outside `allowed_flags` is
/// found. The value following a recognized flag is skipped, since pool
/// values are themselves dash-prefixed names.
pub fn ensure_no_unknown_flags(args: &[String], allowed_flags: &[&str]) -> Result<(), CliError> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if allowed_flags.contains(&arg.as_str()) {
            iter.next();
        } else if arg.starts_with("--") && !matches!(arg.as_str(), "--help" | "-h") {
            return Err(CliError::UnknownFlag { flag: arg.clone() });
        }
    }
    Ok(())
}
