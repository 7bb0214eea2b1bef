//! Classification of JFlex console output.
//!
//! JFlex prints plain progress chatter interleaved with error blocks of the
//! form:
//!
//! ```text
//! Error in file "JFlex.flex" (line 72):
//! Syntax error.
//! <LEXICAL_RULES> {
//!       ^
//! ```
//!
//! Each block becomes one positioned error. Everything else is kept as
//! informational text, except the "Reading skeleton file" notice, which is
//! dropped. Malformed blocks never fail the parse; their lines fall back to
//! informational output.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::cursor::LineCursor;
use crate::diagnostics::{ClassifiedMessages, DiagnosticMessage};

pub const ERROR_MARKER: &str = "Error in file";
pub const SKELETON_NOTICE: &str = "Reading skeleton file";

/// Lines after the marker that make up a complete block: message, context, caret.
const BLOCK_TAIL: usize = 3;

lazy_static! {
    // Error in file "<name>" (line <n>):
    // ASCII-only classes: Unicode spaces and digits are not part of the suffix.
    static ref RE_LINE_NUMBER: Regex =
        Regex::new(r"^.*?\(line(?-u:\s)((?-u:\d)+)\):(?-u:\s)*$").unwrap();

    static ref RE_LINE_BREAKS: Regex = Regex::new(r"[\r\n]+").unwrap();
}

/// What the caret-pointer line of an error block turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CaretLine {
    /// `^` found at this 1-based column.
    Column(u32),
    /// Only spaces (or nothing): no column, but the block stands.
    Blank,
    /// Something other than a caret came first: not a caret line at all.
    Foreign,
}

/// Parses one output blob into a fresh result.
pub fn parse(raw: &str) -> ClassifiedMessages {
    let mut messages = ClassifiedMessages::new();
    parse_into(raw, &mut messages);
    messages
}

/// Parses stdout and then stderr into one combined result.
pub fn parse_outputs(stdout: &str, stderr: &str) -> ClassifiedMessages {
    let mut messages = ClassifiedMessages::new();
    parse_into(stdout, &mut messages);
    parse_into(stderr, &mut messages);
    messages
}

/// Parses `raw` and appends what it finds to `messages`.
pub fn parse_into(raw: &str, messages: &mut ClassifiedMessages) {
    if raw.trim().is_empty() {
        return;
    }

    let mut cursor = LineCursor::new(RE_LINE_BREAKS.split(raw).collect());

    while let Some(line) = cursor.current() {
        if line.starts_with(ERROR_MARKER) && cursor.remaining() >= BLOCK_TAIL {
            scan_error_block(&mut cursor, messages);
        } else {
            if !line.starts_with(SKELETON_NOTICE) && !line.is_empty() {
                messages.informational.push(DiagnosticMessage::text(line));
            }
            cursor.advance(1);
        }
    }
}

/// Consumes the block starting at the marker under the cursor.
///
/// The cursor ends up after the caret line, or only after the message line
/// when the caret line is foreign, so the context and caret lines are
/// re-read as ordinary output.
fn scan_error_block(cursor: &mut LineCursor<'_>, messages: &mut ClassifiedMessages) {
    let (Some(marker), Some(text), Some(pointer)) =
        (cursor.current(), cursor.peek(1), cursor.peek(BLOCK_TAIL))
    else {
        cursor.advance(1);
        return;
    };

    let line = line_number(marker);
    let (column, foreign_pointer) = match scan_caret(pointer) {
        CaretLine::Column(col) => (Some(col), false),
        CaretLine::Blank => (None, false),
        CaretLine::Foreign => (None, true),
    };

    messages.errors.push(DiagnosticMessage::positioned(text, line, column));
    cursor.advance(BLOCK_TAIL + 1);

    if foreign_pointer {
        debug!(
            "Line {} is not a caret pointer, re-reading the block context as output",
            cursor.position()
        );
        cursor.retreat(2);
    }
}

/// Extracts the 1-based line number from a marker line.
fn line_number(marker: &str) -> Option<u32> {
    let caps = RE_LINE_NUMBER.captures(marker)?;
    match caps[1].parse() {
        Ok(n) => Some(n),
        Err(e) => {
            debug!("Ignoring unusable line number in {:?}: {}", marker, e);
            None
        }
    }
}

fn scan_caret(pointer: &str) -> CaretLine {
    for (idx, c) in pointer.chars().enumerate() {
        match c {
            ' ' => continue,
            '^' => {
                return u32::try_from(idx + 1).map_or(CaretLine::Blank, CaretLine::Column);
            }
            _ => return CaretLine::Foreign,
        }
    }
    CaretLine::Blank
}
