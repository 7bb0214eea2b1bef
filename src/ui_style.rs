//! Terminal styling shared by the report renderers.
//!
//! Semantic colours and symbols live here so the rest of the crate never
//! names a raw colour. Colour is only emitted when stdout supports it, so
//! piped or redirected reports stay plain text.

use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Semantic color palette
pub struct Colors;

impl Colors {
    /// Clean run (green)
    pub fn success<D: Display>(text: D) -> String {
        format!("{}", text.if_supports_color(Stream::Stdout, |t| t.green()))
    }

    /// Reported errors (red)
    pub fn error<D: Display>(text: D) -> String {
        format!("{}", text.if_supports_color(Stream::Stdout, |t| t.red()))
    }

    /// Configuration problems (yellow)
    pub fn warning<D: Display>(text: D) -> String {
        format!("{}", text.if_supports_color(Stream::Stdout, |t| t.yellow()))
    }

    /// Tool chatter and separators (cyan)
    pub fn info<D: Display>(text: D) -> String {
        format!("{}", text.if_supports_color(Stream::Stdout, |t| t.cyan()))
    }

    /// Source locations and commands (bright black)
    pub fn code<D: Display>(text: D) -> String {
        format!("{}", text.if_supports_color(Stream::Stdout, |t| t.bright_black()))
    }

    pub fn emphasis<D: Display>(text: D) -> String {
        format!("{}", text.if_supports_color(Stream::Stdout, |t| t.bold()))
    }
}

/// Standardized output prefixes
pub struct Symbols;

impl Symbols {
    pub fn success() -> &'static str {
        "✓"
    }

    pub fn error() -> &'static str {
        "❌"
    }

    pub fn warning() -> &'static str {
        "⚠️"
    }
}

pub fn separator() -> String {
    Colors::info("─".repeat(80))
}

pub fn header(title: &str) -> String {
    format!(
        "{}\n{}\n{}",
        separator(),
        Colors::emphasis(format!(" {} ", title)),
        separator()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_keep_text() {
        assert!(Colors::success("Success").contains("Success"));
        assert!(Colors::error("Error").contains("Error"));
        assert!(Colors::warning("Warning").contains("Warning"));
        assert!(Colors::info("Info").contains("Info"));
        assert!(Colors::code("Code").contains("Code"));
        assert!(Colors::emphasis("Emphasis").contains("Emphasis"));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Symbols::success(), "✓");
        assert_eq!(Symbols::error(), "❌");
        assert!(!Symbols::warning().is_empty());
    }

    #[test]
    fn test_header_contains_title() {
        let h = header("JFlex reported 2 error(s)");
        assert!(h.contains("JFlex reported 2 error(s)"));
        assert!(h.contains(&"─".repeat(80)));
        assert_eq!(h.lines().count(), 3);
    }
}
