//! The feed event record.
//!
//! A [`GameEvent`] mirrors one entry of the Blaseball event feed. Its payload
//! is opaque to the grammar: only `type` (the kind discriminant) and
//! `gameTags` are ever inspected. Fields the record does not name are kept
//! in [`GameEvent::extra`], so decoding the encoded form gives back an equal
//! `GameEvent`. The JSON text itself is not preserved: absent fields are
//! written back with their defaults and a `null` metadata is omitted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::kind::EventKind;

/// An ordered list of feed events: a whole game or a prefix of one.
pub type EventSequence = Vec<GameEvent>;

/// A single feed event.
///
/// Equality is field-for-field, which is what the round-trip law compares.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    /// Feed event id.
    #[serde(default)]
    pub id: String,

    /// Raw feed `type` code. See [`EventKind`] for the known values.
    #[serde(rename = "type")]
    pub event_type: i64,

    /// Human-readable description shown in the feed.
    #[serde(default)]
    pub description: String,

    /// Timestamp string, kept exactly as published.
    #[serde(default)]
    pub created: String,

    #[serde(default)]
    pub player_tags: Vec<String>,

    #[serde(default)]
    pub team_tags: Vec<String>,

    #[serde(default)]
    pub game_tags: Vec<String>,

    #[serde(default)]
    pub season: i64,

    #[serde(default)]
    pub tournament: i64,

    #[serde(default)]
    pub day: i64,

    #[serde(default)]
    pub phase: i64,

    #[serde(default)]
    pub category: i64,

    #[serde(default)]
    pub nuts: i64,

    /// Free-form metadata object.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub metadata: Value,

    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GameEvent {
    /// Create an event of a known kind with a description.
    pub fn new(kind: EventKind, description: impl Into<String>) -> Self {
        Self::with_code(kind.code(), description)
    }

    /// Create an event from a raw `type` code, known or not.
    pub fn with_code(event_type: i64, description: impl Into<String>) -> Self {
        Self {
            event_type,
            description: description.into(),
            ..Self::default()
        }
    }

    /// Set the feed id (builder pattern).
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the creation timestamp (builder pattern).
    #[must_use]
    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = created.into();
        self
    }

    /// Tag the event with a game id (builder pattern).
    #[must_use]
    pub fn with_game(mut self, game_id: impl Into<String>) -> Self {
        self.game_tags.push(game_id.into());
        self
    }

    /// Tag the event with a player id (builder pattern).
    #[must_use]
    pub fn with_player(mut self, player_id: impl Into<String>) -> Self {
        self.player_tags.push(player_id.into());
        self
    }

    /// Tag the event with a team id (builder pattern).
    #[must_use]
    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_tags.push(team_id.into());
        self
    }

    /// Set season and day (builder pattern).
    #[must_use]
    pub fn with_schedule(mut self, season: i64, day: i64) -> Self {
        self.season = season;
        self.day = day;
        self
    }

    /// Set the metadata object (builder pattern).
    #[must_use]
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = metadata;
        self
    }

    /// The known kind of this event, if its code is recognised.
    #[must_use]
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_code(self.event_type)
    }

    /// The game this event belongs to, if tagged.
    #[must_use]
    pub fn game_id(&self) -> Option<&str> {
        self.game_tags.first().map(String::as_str)
    }
}
