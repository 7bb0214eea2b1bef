use serde::Serialize;

use crate::diagnostics::{ClassifiedMessages, DiagnosticMessage, MessageCategory};
use crate::outcome::{OutcomeKind, UnexplainedFailureError};
use crate::ui_style::{header, Colors, Symbols};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    outcome: OutcomeKind,
    informational: &'a [DiagnosticMessage],
    errors: &'a [DiagnosticMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
}

/// One error as `[Error] <source>:<line>:<col> - <text>`.
pub fn format_error(message: &DiagnosticMessage, source: Option<&str>) -> String {
    let severity = Colors::error(Colors::emphasis(MessageCategory::Error));
    match message.location(source) {
        Some(location) => format!("  [{}] {} - {}", severity, Colors::code(location), message.text),
        None => format!("  [{}] {}", severity, message.text),
    }
}

/// Human-readable report: tool chatter first, then the errors under a header.
/// `failure` names the command and exit code of an unexplained failure.
pub fn render_text(
    kind: OutcomeKind,
    messages: &ClassifiedMessages,
    source: Option<&str>,
    failure: Option<&UnexplainedFailureError>,
) -> String {
    let mut out = String::new();

    for info in &messages.informational {
        out.push_str(&info.text);
        out.push('\n');
    }

    if messages.has_errors() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&header(&format!("JFlex reported {} error(s)", messages.errors.len())));
        out.push('\n');
        for error in &messages.errors {
            out.push_str(&format_error(error, source));
            out.push('\n');
        }
    }

    match kind {
        OutcomeKind::Success if !messages.has_errors() => {
            out.push_str(&format!("{} JFlex finished successfully\n", Colors::success(Symbols::success())));
        }
        OutcomeKind::UnexplainedFailure => {
            out.push_str(&format!(
                "{} JFlex failed without reporting an error\n",
                Colors::error(Symbols::error())
            ));
            if let Some(failure) = failure {
                out.push_str(&format!(
                    "   command: {}\n   exit code: {}\n",
                    Colors::code(&failure.command),
                    failure.exit_code
                ));
            }
        }
        _ => {}
    }

    out
}

/// Machine-readable report. `failure` is set only for an unexplained failure.
pub fn render_json(
    kind: OutcomeKind,
    messages: &ClassifiedMessages,
    failure: Option<&UnexplainedFailureError>,
) -> serde_json::Result<String> {
    let report = JsonReport {
        outcome: kind,
        informational: &messages.informational,
        errors: &messages.errors,
        command: failure.map(|f| f.command.as_str()),
        exit_code: failure.map(|f| f.exit_code),
    };
    serde_json::to_string_pretty(&report)
}
