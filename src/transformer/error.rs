//! Transform errors.

use thiserror::Error;

use crate::ast::NodePath;
use crate::grammar::Role;

/// A tree the transformer cannot turn back into a feed.
///
/// Trees built by the parser never produce this; it is reachable only for
/// trees built or edited by hand.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{path}: {kind}")]
pub struct TransformError {
    pub path: NodePath,
    pub kind: TransformErrorKind,
}

/// Why a node was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransformErrorKind {
    /// A slot holds an event whose kind plays a different role.
    #[error("expected {expected} event, found type {code}")]
    WrongRole { expected: Role, code: i64 },

    /// A node the grammar requires here is absent.
    #[error("missing {child}")]
    MissingChild { child: &'static str },

    /// A node is present where the grammar does not allow it.
    #[error("{reason}")]
    Misplaced { reason: &'static str },
}

impl TransformError {
    pub(crate) fn new(path: NodePath, kind: TransformErrorKind) -> Self {
        Self { path, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PathSegment;

    #[test]
    fn test_display() {
        let error = TransformError::new(
            NodePath::root().child(PathSegment::Inning(0)).child(PathSegment::Outing),
            TransformErrorKind::WrongRole {
                expected: Role::InningEnd,
                code: 14,
            },
        );
        assert_eq!(
            error.to_string(),
            "game/inning[0]/outing: expected inning end event, found type 14"
        );
    }

    #[test]
    fn test_display_missing() {
        let error = TransformError::new(
            NodePath::root().child(PathSegment::Pregame),
            TransformErrorKind::MissingChild { child: "play ball" },
        );
        assert_eq!(error.to_string(), "game/pregame: missing play ball");
    }
}
