//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Options controlling what the parser accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Allow a feed to begin at a half-inning start instead of "Let's Go!".
    /// Such feeds parse to a game without a pregame node.
    pub midgame_entry: bool,

    /// Reject events tagged with a different game than the first tagged event.
    pub single_game: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            midgame_entry: false,
            single_game: true,
        }
    }
}

impl ParserConfig {
    /// Allow feeds captured after the game began.
    #[must_use]
    pub fn with_midgame_entry(mut self, allow: bool) -> Self {
        self.midgame_entry = allow;
        self
    }

    /// Toggle the single-game check.
    #[must_use]
    pub fn with_single_game(mut self, enforce: bool) -> Self {
        self.single_game = enforce;
        self
    }
}
