use serde::Serialize;
use std::fmt;

/// Which of the two output sequences a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    /// Tool chatter that is shown but carries no position.
    Information,
    /// A diagnostic the tool reported against the lexer specification.
    Error,
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageCategory::Information => write!(f, "Information"),
            MessageCategory::Error => write!(f, "Error"),
        }
    }
}

/// A single item reported by JFlex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticMessage {
    pub text: String,
    pub line: Option<u32>,   // 1-based
    pub column: Option<u32>, // 1-based, only set together with `line`
}

impl DiagnosticMessage {
    /// A message with no source position.
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            line: None,
            column: None,
        }
    }

    /// A message with whatever position could be recovered.
    ///
    /// A column without a line is dropped, since it cannot be navigated to.
    pub fn positioned<S: Into<String>>(text: S, line: Option<u32>, column: Option<u32>) -> Self {
        Self {
            text: text.into(),
            line,
            column: line.and(column),
        }
    }

    /// Renders `source:line:column`, leaving out whichever parts are unknown.
    pub fn location(&self, source: Option<&str>) -> Option<String> {
        let position = match (self.line, self.column) {
            (Some(line), Some(col)) => Some(format!("{}:{}", line, col)),
            (Some(line), None) => Some(line.to_string()),
            (None, _) => None,
        };
        match (source, position) {
            (Some(src), Some(pos)) => Some(format!("{}:{}", src, pos)),
            (Some(src), None) => Some(src.to_string()),
            (None, pos) => pos,
        }
    }
}

/// The parse result: informational chatter and errors, each in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedMessages {
    pub informational: Vec<DiagnosticMessage>,
    pub errors: Vec<DiagnosticMessage>,
}

impl ClassifiedMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: MessageCategory) -> &[DiagnosticMessage] {
        match category {
            MessageCategory::Information => &self.informational,
            MessageCategory::Error => &self.errors,
        }
    }

    pub fn push(&mut self, category: MessageCategory, message: DiagnosticMessage) {
        match category {
            MessageCategory::Information => self.informational.push(message),
            MessageCategory::Error => self.errors.push(message),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.informational.len() + self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.informational.is_empty() && self.errors.is_empty()
    }

    /// Appends `other` after the messages already held, keeping both orders.
    pub fn merge(&mut self, other: ClassifiedMessages) {
        self.informational.extend(other.informational);
        self.errors.extend(other.errors);
    }
}
