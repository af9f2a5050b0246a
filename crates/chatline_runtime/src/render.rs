//! Report rendering.
//!
//! The pretty layout indents four spaces per level and leaves mention and
//! emoticon payloads unquoted. The JSON layout goes through `serde_json`.

use std::fmt::Write as _;

use chatline_foundation::{Error, ErrorKind, Result};
use chatline_parser::{Token, TokenReport};

use crate::config::OutputFormat;

const INDENT: &str = "    ";

/// Renders `report` in the given format.
///
/// Returns an empty string for an empty report.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(report: &TokenReport, format: OutputFormat) -> Result<String> {
    if report.is_empty() {
        return Ok(String::new());
    }

    match format {
        OutputFormat::Pretty => Ok(render_pretty(report)),
        OutputFormat::Json => render_json(report),
    }
}

/// Renders the indented report layout, ending with a newline.
#[must_use]
pub fn render_pretty(report: &TokenReport) -> String {
    let mut out = String::from("{\n");

    for (i, (kind, tokens)) in report.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        let _ = writeln!(out, "{INDENT}\"{}\": [", kind.tag());

        for (j, token) in tokens.iter().enumerate() {
            if j > 0 {
                out.push_str(",\n");
            }
            out.push_str(INDENT);
            out.push_str(INDENT);
            out.push_str(&render_token(token));
        }

        let _ = write!(out, "\n{INDENT}]");
    }

    out.push_str("\n}\n");
    out
}

fn render_token(token: &Token) -> String {
    match token {
        Token::Link { url, title } => {
            let inner = INDENT.repeat(3);
            let outer = INDENT.repeat(2);
            format!(
                "{{\n{inner}\"url\": \"{url}\",\n{inner}\"title\": \"{title}\"\n{outer}}}"
            )
        }
        other => other.to_string(),
    }
}

/// Renders the report as pretty-printed JSON, ending with a newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &TokenReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)
        .map_err(|e| Error::new(ErrorKind::Internal(format!("failed to serialize report: {e}"))))?;
    json.push('\n');
    Ok(json)
}
