use tracing::debug;

use didyoumean::{classify, similarity, suggestions, suggestions_with_threshold, CommandModel};
use serde_json::json;

mod cli;
mod output;

use cli::{parse_cli_args, split_format, CliAction, CliCommand, CliError, OutputFormat, USAGE};
use output::{emit_output, render_suggestion};

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(run(&args));
}

fn run(args: &[String]) -> i32 {
    let (format, rest) = split_format(args);
    match parse_cli_args(rest) {
        Ok(action) => execute(action, format),
        Err(error) => report_parse_failure(&error),
    }
}

fn execute(action: CliAction, format: OutputFormat) -> i32 {
    match action {
        CliAction::ShowHelp => {
            println!("{USAGE}");
            0
        }
        CliAction::ShowVersion => {
            emit_output(
                &format,
                "version",
                json!({
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                    "message": format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
                }),
            );
            0
        }
        CliAction::Command(command) => run_command(command, format),
    }
}

fn run_command(command: CliCommand, format: OutputFormat) -> i32 {
    match command {
        CliCommand::Score { a, b } => {
            let score = similarity(&a, &b);
            emit_output(
                &format,
                "score",
                json!({
                    "a": a,
                    "b": b,
                    "score": score,
                    "message": format!("{score:.4}"),
                }),
            );
            0
        }
        CliCommand::Classify {
            token,
            options,
            subcommands,
        } => {
            let option_names: Vec<&str> = options.iter().map(String::as_str).collect();
            let subcommand_names: Vec<&str> = subcommands.iter().map(String::as_str).collect();
            let class = classify(&token, &option_names, &subcommand_names);
            debug!(token = %token, class = %class, "classified token");
            emit_output(
                &format,
                "classify",
                json!({
                    "token": token,
                    "classification": class,
                    "message": class.to_string(),
                }),
            );
            0
        }
        CliCommand::Rank {
            token,
            options,
            subcommands,
            threshold,
        } => {
            let option_names: Vec<&str> = options.iter().map(String::as_str).collect();
            let subcommand_names: Vec<&str> = subcommands.iter().map(String::as_str).collect();
            let model = CommandModel::from_names(&option_names, &subcommand_names);
            let suggestion = match threshold {
                Some(value) => suggestions_with_threshold(&token, &model, value),
                None => suggestions(&token, &model),
            };
            let message = render_suggestion(&suggestion)
                .unwrap_or_else(|| format!("No suggestions for '{token}'"));
            emit_output(
                &format,
                "rank",
                json!({
                    "token": token,
                    "suggestion": suggestion,
                    "message": message,
                }),
            );
            0
        }
        CliCommand::Help => {
            println!("{USAGE}");
            0
        }
    }
}

/// Parse failures report the error and, where the engine finds a close
/// name, a did-you-mean line; otherwise full usage is shown instead.
fn report_parse_failure(error: &CliError) -> i32 {
    eprintln!("{error}");
    let hint = match error {
        CliError::UnknownCommand { cmd } => {
            let model = CommandModel::from_names(&[], cli::COMMANDS);
            render_suggestion(&suggestions(cmd, &model))
        }
        CliError::UnknownFlag { flag } => {
            let mut pool = cli::POOL_FLAGS.to_vec();
            pool.extend(["--json", "--help", "--version"]);
            let model = CommandModel::from_names(&pool, &[]);
            render_suggestion(&suggestions(flag, &model))
        }
        CliError::MissingRequiredArg { .. } | CliError::InvalidArgValue { .. } => None,
    };
    match hint {
        Some(line) => eprintln!("{line}"),
        None => eprintln!("{USAGE}"),
    }
    error.exit_code()
}
