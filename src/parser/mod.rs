//! Feed events to game tree.
//!
//! [`GameParser`] makes a single left-to-right pass over a feed. For each
//! event it looks up the event's [`Role`](crate::grammar::Role), asks the
//! grammar's transition table where that role may go from the current
//! context, and places the event in the tree. The first event that has no
//! place aborts the parse; no partial tree is returned.
//!
//! ## Example Usage
//!
//! ```
//! use blaseball_feed::events::{EventKind, GameEvent};
//! use blaseball_feed::parser::GameParser;
//!
//! let feed = vec![
//!     GameEvent::new(EventKind::LetsGo, "Let's Go!"),
//!     GameEvent::new(EventKind::PlayBall, "Play ball!"),
//!     GameEvent::new(EventKind::HalfInning, "Top of 1, Crabs batting."),
//!     GameEvent::new(EventKind::BatterUp, "Jessica Telephone batting for the Crabs."),
//!     GameEvent::new(EventKind::Ball, "Ball. 1-0"),
//! ];
//!
//! let game = GameParser::default().parse(&feed).unwrap();
//! assert_eq!(game.innings.len(), 1);
//! assert_eq!(game.at_bat_count(), 1);
//!
//! // A pitch with nobody at the plate has nowhere to go.
//! let bad = vec![feed[0].clone(), feed[1].clone(), feed[2].clone(), feed[4].clone()];
//! let error = GameParser::default().parse(&bad).unwrap_err();
//! assert_eq!(error.index, 3);
//! ```

mod error;

pub use error::{ParseError, ParseErrorKind};

use tracing::{debug, trace};

use crate::ast::{AtBat, Game, HalfInning, HalfInningEntry, Inning, Pregame};
use crate::config::ParserConfig;
use crate::events::GameEvent;
use crate::grammar::{self, Context, Step};

/// Parses feeds into [`Game`] trees.
///
/// Holds only configuration; every call to [`parse`](Self::parse) starts
/// from scratch.
#[derive(Clone, Debug, Default)]
pub struct GameParser {
    config: ParserConfig,
}

impl GameParser {
    /// Create a parser with the given configuration.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a whole feed or any prefix of one.
    pub fn parse(&self, events: &[GameEvent]) -> Result<Game, ParseError> {
        let mut builder = Builder::new(&self.config);

        for (index, event) in events.iter().enumerate() {
            builder
                .push(event)
                .map_err(|kind| ParseError::new(index, kind))?;
        }

        let game = builder.game;
        debug!(
            events = events.len(),
            innings = game.innings.len(),
            complete = game.is_complete(),
            "parsed game"
        );
        Ok(game)
    }
}

/// Tree under construction plus the grammar context it is in.
struct Builder<'a> {
    config: &'a ParserConfig,
    game: Game,
    context: Context,
    game_id: Option<String>,
}

impl<'a> Builder<'a> {
    fn new(config: &'a ParserConfig) -> Self {
        Self {
            config,
            game: Game::new(),
            context: Context::Start,
            game_id: None,
        }
    }

    fn push(&mut self, event: &GameEvent) -> Result<(), ParseErrorKind> {
        let kind = event.kind().ok_or(ParseErrorKind::UnknownEventType {
            code: event.event_type,
        })?;

        if self.config.single_game {
            self.check_game(event)?;
        }

        let context = self.context;
        let out_of_context = |reason: &'static str| ParseErrorKind::OutOfContext {
            kind,
            context,
            reason,
        };

        let (step, next) = grammar::step(context, grammar::role_of(kind), self.config.midgame_entry)
            .map_err(out_of_context)?;
        trace!(%kind, from = %context, to = %next, ?step, "placed event");

        self.apply(step, event.clone()).map_err(out_of_context)?;
        self.context = next;
        Ok(())
    }

    fn check_game(&mut self, event: &GameEvent) -> Result<(), ParseErrorKind> {
        let Some(found) = event.game_id() else {
            return Ok(());
        };
        let expected = self.game_id.get_or_insert_with(|| found.to_string());
        if expected.as_str() != found {
            return Err(ParseErrorKind::ForeignGame {
                expected: expected.clone(),
                found: found.to_string(),
            });
        }
        Ok(())
    }

    /// Place an event. The grammar has already accepted the step, so the
    /// nodes it needs exist; the errors here only guard that agreement.
    fn apply(&mut self, step: Step, event: GameEvent) -> Result<(), &'static str> {
        match step {
            Step::OpenPregame => {
                self.game.pregame = Some(Pregame::new(event));
            }
            Step::PlayBall => {
                let pregame = self.game.pregame.as_mut().ok_or("play ball before lets go")?;
                pregame.play_ball = Some(event);
            }
            Step::OpenInning => {
                self.game.innings.push(Inning::new(HalfInning::new(event)));
            }
            Step::OpenBottomHalf => {
                let inning = self.inning()?;
                inning.bottom = Some(HalfInning::new(event));
            }
            Step::OpenAtBat => {
                let half = self.inning()?.current_half_mut();
                half.entries.push(HalfInningEntry::AtBat(AtBat::new(event)));
            }
            Step::Pitch => {
                let at_bat = self.at_bat()?;
                at_bat.pitches.push(event);
            }
            Step::Outcome => {
                let at_bat = self.at_bat()?;
                at_bat.outcome = Some(event);
            }
            Step::Interlude => {
                let half = self.inning()?.current_half_mut();
                half.entries.push(HalfInningEntry::Interlude(event));
            }
            Step::CloseInning => {
                let inning = self.inning()?;
                inning.outing = Some(event);
            }
            Step::Finish => {
                self.game.final_event = Some(event);
            }
        }
        Ok(())
    }

    fn inning(&mut self) -> Result<&mut Inning, &'static str> {
        self.game.innings.last_mut().ok_or("no half-inning in progress")
    }

    fn at_bat(&mut self) -> Result<&mut AtBat, &'static str> {
        self.inning()?
            .current_half_mut()
            .last_at_bat_mut()
            .ok_or("no batter up")
    }
}

#[cfg(test)]
mod tests {
    use super::{GameParser, ParseErrorKind};
    use crate::config::ParserConfig;
    use crate::events::{EventKind, GameEvent};
    use crate::grammar::{Context, Half};
    use EventKind::*;

    fn ev(kind: EventKind) -> GameEvent {
        GameEvent::new(kind, kind.name())
    }

    fn feed(kinds: &[EventKind]) -> Vec<GameEvent> {
        kinds.iter().copied().map(ev).collect()
    }

    #[test]
    fn test_empty_feed() {
        let game = GameParser::default().parse(&[]).unwrap();
        assert!(game.is_empty());
    }

    #[test]
    fn test_lets_go_alone() {
        let game = GameParser::default().parse(&feed(&[LetsGo])).unwrap();
        let pregame = game.pregame.unwrap();
        assert_eq!(pregame.lets_go.kind(), Some(LetsGo));
        assert!(pregame.play_ball.is_none());
    }

    #[test]
    fn test_groups_pitches_under_at_bat() {
        let events = feed(&[LetsGo, PlayBall, HalfInning, BatterUp, Ball, Strike, FoulBall, Hit, BatterUp, Ball]);
        let game = GameParser::default().parse(&events).unwrap();

        let top = &game.innings[0].top;
        let at_bats: Vec<_> = top.at_bats().collect();
        assert_eq!(at_bats.len(), 2);
        assert_eq!(at_bats[0].pitches.len(), 3);
        assert_eq!(at_bats[0].outcome.as_ref().and_then(GameEvent::kind), Some(Hit));
        assert_eq!(at_bats[1].pitches.len(), 1);
        assert!(!at_bats[1].is_closed());
    }

    #[test]
    fn test_bottom_half_and_outing() {
        let events = feed(&[
            LetsGo, PlayBall,
            HalfInning, BatterUp, Strikeout,
            HalfInning, BatterUp, FlyOut,
            InningEnd,
            HalfInning,
        ]);
        let game = GameParser::default().parse(&events).unwrap();

        assert_eq!(game.innings.len(), 2);
        assert!(game.innings[0].bottom.is_some());
        assert!(game.innings[0].outing.is_some());
        assert!(game.innings[1].bottom.is_none());
    }

    #[test]
    fn test_interlude_closes_at_bat() {
        let events = feed(&[LetsGo, PlayBall, HalfInning, BatterUp, MildPitch, SuperyummyText, Ball]);
        let error = GameParser::default().parse(&events).unwrap_err();

        assert_eq!(error.index, 6);
        assert_eq!(error.reason(), Some("no batter up"));
    }

    #[test]
    fn test_pitch_after_outcome_rejected() {
        let events = feed(&[LetsGo, PlayBall, HalfInning, BatterUp, Walk, Ball]);
        let error = GameParser::default().parse(&events).unwrap_err();

        assert_eq!(error.index, 5);
        assert_eq!(
            error.kind,
            ParseErrorKind::OutOfContext {
                kind: Ball,
                context: Context::Half { half: Half::Top, at_bat: false },
                reason: "no batter up",
            }
        );
    }

    #[test]
    fn test_unknown_type() {
        let mut events = feed(&[LetsGo, PlayBall]);
        events.push(GameEvent::with_code(3, "???"));
        let error = GameParser::default().parse(&events).unwrap_err();

        assert_eq!(error.index, 2);
        assert_eq!(error.kind, ParseErrorKind::UnknownEventType { code: 3 });
    }

    #[test]
    fn test_event_after_final() {
        let events = feed(&[LetsGo, PlayBall, HalfInning, BatterUp, HomeRun, GameEnd, Ball]);
        let error = GameParser::default().parse(&events).unwrap_err();

        assert_eq!(error.index, 6);
        assert_eq!(error.reason(), Some("event after the game ended"));
    }

    #[test]
    fn test_foreign_game() {
        let events = vec![
            ev(LetsGo).with_game("g1"),
            ev(PlayBall),
            ev(HalfInning).with_game("g1"),
            ev(BatterUp).with_game("g2"),
        ];
        let error = GameParser::default().parse(&events).unwrap_err();

        assert_eq!(error.index, 3);
        assert_eq!(
            error.kind,
            ParseErrorKind::ForeignGame {
                expected: "g1".into(),
                found: "g2".into(),
            }
        );

        let relaxed = GameParser::new(ParserConfig::default().with_single_game(false));
        assert!(relaxed.parse(&events).is_ok());
    }

    #[test]
    fn test_midgame_entry() {
        let events = feed(&[HalfInning, BatterUp, Ball]);
        assert!(GameParser::default().parse(&events).is_err());

        let parser = GameParser::new(ParserConfig::default().with_midgame_entry(true));
        let game = parser.parse(&events).unwrap();
        assert!(game.pregame.is_none());
        assert_eq!(game.innings.len(), 1);
    }

    #[test]
    fn test_payload_is_kept() {
        let events = vec![
            ev(LetsGo).with_id("a").with_game("g").with_created("2021-03-01T16:00:00Z"),
        ];
        let game = GameParser::default().parse(&events).unwrap();
        assert_eq!(game.pregame.unwrap().lets_go, events[0]);
    }
}
