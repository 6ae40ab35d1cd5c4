//! Parse errors.

use thiserror::Error;

use crate::events::EventKind;
use crate::grammar::Context;

/// A feed that does not fit the grammar.
///
/// `index` is the position of the first offending event. Every prefix
/// shorter than `index + 1` parses.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("event {index}: {kind}")]
pub struct ParseError {
    pub index: usize,
    pub kind: ParseErrorKind,
}

/// Why an event was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The event's `type` code is not in the vocabulary.
    #[error("unknown event type {code}")]
    UnknownEventType { code: i64 },

    /// The event's role has no place in the current context.
    #[error("{kind} in {context}: {reason}")]
    OutOfContext {
        kind: EventKind,
        context: Context,
        reason: &'static str,
    },

    /// The event is tagged with another game.
    #[error("event belongs to game {found}, expected {expected}")]
    ForeignGame { expected: String, found: String },
}

impl ParseError {
    pub(crate) fn new(index: usize, kind: ParseErrorKind) -> Self {
        Self { index, kind }
    }

    /// The rejection reason for out-of-context events.
    #[must_use]
    pub fn reason(&self) -> Option<&'static str> {
        match &self.kind {
            ParseErrorKind::OutOfContext { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
