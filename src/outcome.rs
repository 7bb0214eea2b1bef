use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::diagnostics::{ClassifiedMessages, DiagnosticMessage};
use crate::parser::parse_outputs;

/// JFlex exited non-zero and printed nothing that parses as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Command '{command}' execution failed with exit code {exit_code}")]
pub struct UnexplainedFailureError {
    pub command: String,
    pub exit_code: i32,
}

/// Verdict over an exit code and the errors parsed from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Exit code 0.
    Success,
    /// Non-zero exit code, but the tool explained itself.
    SuccessWithErrors,
    /// Non-zero exit code and no errors to show for it.
    UnexplainedFailure,
}

/// A finished run whose messages are ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    Success(ClassifiedMessages),
    SuccessWithErrors(ClassifiedMessages),
}

impl InvocationOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            InvocationOutcome::Success(_) => OutcomeKind::Success,
            InvocationOutcome::SuccessWithErrors(_) => OutcomeKind::SuccessWithErrors,
        }
    }

    pub fn messages(&self) -> &ClassifiedMessages {
        match self {
            InvocationOutcome::Success(m) | InvocationOutcome::SuccessWithErrors(m) => m,
        }
    }

    pub fn into_messages(self) -> ClassifiedMessages {
        match self {
            InvocationOutcome::Success(m) | InvocationOutcome::SuccessWithErrors(m) => m,
        }
    }
}

pub fn classify_exit(exit_code: i32, errors: &[DiagnosticMessage]) -> OutcomeKind {
    if exit_code == 0 {
        OutcomeKind::Success
    } else if !errors.is_empty() {
        OutcomeKind::SuccessWithErrors
    } else {
        OutcomeKind::UnexplainedFailure
    }
}

/// Decides how a JFlex run ended.
///
/// Fails only when the exit code is non-zero and no error was parsed, since
/// then the command and its exit code are the only diagnosis available.
pub fn evaluate(
    exit_code: i32,
    messages: ClassifiedMessages,
    command: &str,
) -> Result<InvocationOutcome, UnexplainedFailureError> {
    match classify_exit(exit_code, &messages.errors) {
        OutcomeKind::Success => {
            debug!("JFlex finished cleanly ({} informational lines)", messages.informational.len());
            Ok(InvocationOutcome::Success(messages))
        }
        OutcomeKind::SuccessWithErrors => {
            debug!(
                "JFlex exited with code {} and reported {} error(s)",
                exit_code,
                messages.errors.len()
            );
            Ok(InvocationOutcome::SuccessWithErrors(messages))
        }
        OutcomeKind::UnexplainedFailure => {
            warn!("Command failed: {} - Exit Code: {}", command, exit_code);
            Err(UnexplainedFailureError {
                command: command.to_string(),
                exit_code,
            })
        }
    }
}

/// Parses both captured streams and evaluates the run in one step.
pub fn classify_invocation(
    stdout: &str,
    stderr: &str,
    exit_code: i32,
    command: &str,
) -> Result<InvocationOutcome, UnexplainedFailureError> {
    evaluate(exit_code, parse_outputs(stdout, stderr), command)
}
