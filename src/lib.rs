// Output classification
pub mod cursor;
pub mod diagnostics;
pub mod outcome;
pub mod parser;

// Configuration and presentation
pub mod config;
pub mod logging;
pub mod report;
pub mod ui_style;

#[cfg(test)]
mod outcome_test;

pub use diagnostics::{ClassifiedMessages, DiagnosticMessage, MessageCategory};
pub use outcome::{classify_invocation, evaluate, InvocationOutcome, OutcomeKind, UnexplainedFailureError};
pub use parser::{parse, parse_outputs};

pub const JFX_VERSION: &str = env!("CARGO_PKG_VERSION");
