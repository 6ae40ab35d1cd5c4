//! # blaseball-feed
//!
//! Lossless conversion between a Blaseball game feed and a game tree.
//!
//! ## Design Principles
//!
//! 1. **Round Trip**: `transform(parse(feed)) == feed` for every feed the
//!    parser accepts. Same events, same order, same payload.
//!
//! 2. **One Grammar**: Which event may follow which lives in one table
//!    (`grammar`). The parser follows it forward; the transformer walks the
//!    tree it builds and checks each event against the same roles.
//!
//! 3. **Structure Only**: Nothing here checks the rules of the game. Counts,
//!    scores and player names are payload; only the shape of the feed is
//!    validated.
//!
//! ## Architecture
//!
//! - **All or Nothing**: A parse either returns a whole tree or the index
//!   of the first event that has no place. Every shorter prefix parses, so
//!   callers narrow down faults by re-parsing prefixes.
//!
//! - **Pure Functions**: Parser and transformer hold configuration only and
//!   can be shared across threads.
//!
//! ## Modules
//!
//! - `events`: Event kinds and the feed event record
//! - `grammar`: Roles, parser contexts and the transition table
//! - `ast`: The game tree and node paths
//! - `parser`: Feed to tree
//! - `transformer`: Tree to feed
//! - `config`: Parser options
//! - `feed`: JSON input and output
//! - `synth`: Seeded synthetic games
//! - `verify`: Round-trip checking and fault localization

pub mod ast;
pub mod config;
pub mod events;
pub mod feed;
pub mod grammar;
pub mod parser;
pub mod synth;
pub mod transformer;
pub mod verify;

// Re-export commonly used types
pub use crate::ast::{AtBat, Game, HalfInning, HalfInningEntry, Inning, NodePath, PathSegment, Pregame};

pub use crate::config::ParserConfig;

pub use crate::events::{EventKind, EventSequence, GameEvent};

pub use crate::feed::FeedError;

pub use crate::grammar::{Context, Half, Role};

pub use crate::parser::{GameParser, ParseError, ParseErrorKind};

pub use crate::transformer::{GameTransformer, TransformError, TransformErrorKind};

pub use crate::verify::{RoundTripReport, Verifier};

pub use crate::synth::GameSynthesizer;
