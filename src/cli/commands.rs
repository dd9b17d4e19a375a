#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

#[derive(Debug, Clone)]
pub enum CliCommand {
    Score {
        a: String,
        b: String,
    },
    Classify {
        token: String,
        options: Vec<String>,
        subcommands: Vec<String>,
    },
    Rank {
        token: String,
        options: Vec<String>,
        subcommands: Vec<String>,
        threshold: Option<f64>,
    },
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
