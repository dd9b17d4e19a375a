use crate::cli::OutputFormat;
use didyoumean::Suggestion;
use serde_json::json;

/// Render the display-contract line for a non-empty suggestion. Option
/// suggestions and subcommand suggestions use different templates; `None`
/// means the caller should fall back to usage help.
#[must_use]
pub fn render_suggestion(suggestion: &Suggestion) -> Option<String> {
    match suggestion {
        Suggestion::Options(names) if !names.is_empty() => {
            Some(format!("Possible solutions: {}", names.join(", ")))
        }
        Suggestion::Subcommands(names) if !names.is_empty() => {
            Some(format!("Did you mean: {}?", names.join(" or ")))
        }
        _ => None,
    }
}

pub fn emit_output(output: &OutputFormat, command: &str, payload: serde_json::Value) {
    match output {
        OutputFormat::Text => payload
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| println!("{payload}"), |msg| println!("{msg}")),
        OutputFormat::Json => println!(
            "{}",
            json!({
                "command": command,
                "status": "ok",
                "payload": payload,
            })
        ),
    }
}
