//! Game tree back to feed events.
//!
//! [`GameTransformer`] walks a [`Game`] depth-first and emits every event in
//! slot order, which is the order the parser filled the slots in. Each
//! event is checked against the [`Role`] of the slot it sits in, and each
//! node against the structural rules the parser enforces, so a tree that
//! transforms successfully has a shape the parser could have built. Game
//! tags are payload and are not checked here.
//!
//! ## Example Usage
//!
//! ```
//! use blaseball_feed::events::{EventKind, GameEvent};
//! use blaseball_feed::parser::GameParser;
//! use blaseball_feed::transformer::GameTransformer;
//!
//! let feed = vec![
//!     GameEvent::new(EventKind::LetsGo, "Let's Go!"),
//!     GameEvent::new(EventKind::PlayBall, "Play ball!"),
//! ];
//!
//! let game = GameParser::default().parse(&feed).unwrap();
//! let events = GameTransformer::new().transform(&game).unwrap();
//! assert_eq!(events, feed);
//! ```

mod error;

pub use error::{TransformError, TransformErrorKind};

use tracing::debug;

use crate::ast::{AtBat, Game, HalfInning, HalfInningEntry, Inning, NodePath, PathSegment, Pregame};
use crate::events::{EventSequence, GameEvent};
use crate::grammar::{role_of, Role};

/// Turns [`Game`] trees back into feeds. Stateless.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameTransformer;

impl GameTransformer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Emit the feed a tree represents.
    pub fn transform(&self, game: &Game) -> Result<EventSequence, TransformError> {
        let mut emitter = Emitter {
            out: Vec::with_capacity(game.event_count()),
        };
        emitter.game(game)?;

        debug!(events = emitter.out.len(), innings = game.innings.len(), "transformed game");
        Ok(emitter.out)
    }
}

struct Emitter {
    out: EventSequence,
}

impl Emitter {
    fn emit(
        &mut self,
        event: &GameEvent,
        expected: Role,
        parent: &NodePath,
        segment: PathSegment,
    ) -> Result<(), TransformError> {
        match event.kind() {
            Some(kind) if role_of(kind) == expected => {
                self.out.push(event.clone());
                Ok(())
            }
            _ => Err(TransformError::new(
                parent.child(segment),
                TransformErrorKind::WrongRole {
                    expected,
                    code: event.event_type,
                },
            )),
        }
    }

    fn game(&mut self, game: &Game) -> Result<(), TransformError> {
        let root = NodePath::root();

        if let Some(pregame) = &game.pregame {
            let path = root.child(PathSegment::Pregame);
            let followed = !game.innings.is_empty() || game.final_event.is_some();
            if followed && pregame.play_ball.is_none() {
                return Err(TransformError::new(
                    path,
                    TransformErrorKind::MissingChild { child: "play ball" },
                ));
            }
            self.pregame(pregame, &path)?;
        }

        let last = game.innings.len().saturating_sub(1);
        for (i, inning) in game.innings.iter().enumerate() {
            let path = root.child(PathSegment::Inning(i));
            if i < last {
                if inning.bottom.is_none() {
                    return Err(TransformError::new(
                        path,
                        TransformErrorKind::MissingChild { child: "bottom half" },
                    ));
                }
                if inning.outing.is_none() {
                    return Err(TransformError::new(
                        path,
                        TransformErrorKind::MissingChild { child: "outing" },
                    ));
                }
            }
            self.inning(inning, &path)?;
        }

        if let Some(final_event) = &game.final_event {
            let path = root.child(PathSegment::Final);
            match game.innings.last() {
                None => {
                    return Err(TransformError::new(
                        path,
                        TransformErrorKind::MissingChild { child: "inning" },
                    ));
                }
                Some(inning) if inning.outing.is_some() => {
                    return Err(TransformError::new(
                        path,
                        TransformErrorKind::Misplaced {
                            reason: "game end after the inning ended",
                        },
                    ));
                }
                Some(_) => {}
            }
            self.emit(final_event, Role::GameOver, &root, PathSegment::Final)?;
        }

        Ok(())
    }

    fn pregame(&mut self, pregame: &Pregame, path: &NodePath) -> Result<(), TransformError> {
        self.emit(&pregame.lets_go, Role::Opening, path, PathSegment::LetsGo)?;
        if let Some(play_ball) = &pregame.play_ball {
            self.emit(play_ball, Role::PlayBall, path, PathSegment::PlayBall)?;
        }
        Ok(())
    }

    fn inning(&mut self, inning: &Inning, path: &NodePath) -> Result<(), TransformError> {
        if inning.outing.is_some() && inning.bottom.is_none() {
            return Err(TransformError::new(
                path.clone(),
                TransformErrorKind::MissingChild { child: "bottom half" },
            ));
        }

        self.half(&inning.top, &path.child(PathSegment::Top))?;
        if let Some(bottom) = &inning.bottom {
            self.half(bottom, &path.child(PathSegment::Bottom))?;
        }
        if let Some(outing) = &inning.outing {
            self.emit(outing, Role::InningEnd, path, PathSegment::Outing)?;
        }
        Ok(())
    }

    fn half(&mut self, half: &HalfInning, path: &NodePath) -> Result<(), TransformError> {
        self.emit(&half.start, Role::HalfInningStart, path, PathSegment::Start)?;
        for (j, entry) in half.entries.iter().enumerate() {
            match entry {
                HalfInningEntry::AtBat(at_bat) => {
                    self.at_bat(at_bat, &path.child(PathSegment::Entry(j)))?;
                }
                HalfInningEntry::Interlude(event) => {
                    self.emit(event, Role::Interlude, path, PathSegment::Entry(j))?;
                }
            }
        }
        Ok(())
    }

    fn at_bat(&mut self, at_bat: &AtBat, path: &NodePath) -> Result<(), TransformError> {
        self.emit(&at_bat.batter_up, Role::BatterUp, path, PathSegment::BatterUp)?;
        for (k, pitch) in at_bat.pitches.iter().enumerate() {
            self.emit(pitch, Role::Pitch, path, PathSegment::Pitch(k))?;
        }
        if let Some(outcome) = &at_bat.outcome {
            self.emit(outcome, Role::Outcome, path, PathSegment::Outcome)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{GameTransformer, TransformErrorKind};
    use crate::ast::{AtBat, Game, HalfInning, HalfInningEntry, Inning, NodePath, PathSegment, Pregame};
    use crate::events::{EventKind, GameEvent};
    use crate::grammar::Role;

    fn ev(kind: EventKind) -> GameEvent {
        GameEvent::new(kind, kind.name())
    }

    fn pregame() -> Pregame {
        let mut pregame = Pregame::new(ev(EventKind::LetsGo));
        pregame.play_ball = Some(ev(EventKind::PlayBall));
        pregame
    }

    fn half_with_at_bat(outcome: EventKind) -> HalfInning {
        let mut at_bat = AtBat::new(ev(EventKind::BatterUp));
        at_bat.pitches.push(ev(EventKind::Strike));
        at_bat.outcome = Some(ev(outcome));

        let mut half = HalfInning::new(ev(EventKind::HalfInning));
        half.entries.push(HalfInningEntry::AtBat(at_bat));
        half
    }

    fn full_inning() -> Inning {
        let mut inning = Inning::new(half_with_at_bat(EventKind::GroundOut));
        inning.bottom = Some(half_with_at_bat(EventKind::FlyOut));
        inning.outing = Some(ev(EventKind::InningEnd));
        inning
    }

    fn kinds(events: &[GameEvent]) -> Vec<EventKind> {
        events.iter().filter_map(GameEvent::kind).collect()
    }

    #[test]
    fn test_empty_game() {
        let events = GameTransformer::new().transform(&Game::new()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_emission_order() {
        let mut last = Inning::new(half_with_at_bat(EventKind::HomeRun));
        last.top.entries.push(HalfInningEntry::Interlude(ev(EventKind::SuperyummyText)));

        let game = Game {
            pregame: Some(pregame()),
            innings: vec![full_inning(), last],
            final_event: Some(ev(EventKind::GameEnd)),
        };

        let events = GameTransformer::new().transform(&game).unwrap();
        use EventKind as K;
        assert_eq!(
            kinds(&events),
            vec![
                K::LetsGo, K::PlayBall,
                K::HalfInning, K::BatterUp, K::Strike, K::GroundOut,
                K::HalfInning, K::BatterUp, K::Strike, K::FlyOut,
                K::InningEnd,
                K::HalfInning, K::BatterUp, K::Strike, K::HomeRun, K::SuperyummyText,
                K::GameEnd,
            ]
        );
        assert_eq!(events.len(), game.event_count());
    }

    #[test]
    fn test_wrong_role_in_pitch_slot() {
        let mut top = half_with_at_bat(EventKind::Hit);
        if let HalfInningEntry::AtBat(at_bat) = &mut top.entries[0] {
            at_bat.pitches.push(ev(EventKind::Walk));
        }
        let game = Game {
            pregame: Some(pregame()),
            innings: vec![Inning::new(top)],
            final_event: None,
        };

        let error = GameTransformer::new().transform(&game).unwrap_err();
        assert_eq!(error.to_string(), "game/inning[0]/top/entry[0]/pitch[1]: expected pitch event, found type 5");
        assert_eq!(
            error.kind,
            TransformErrorKind::WrongRole {
                expected: Role::Pitch,
                code: 5,
            }
        );
    }

    #[test]
    fn test_unknown_code_is_wrong_role() {
        let mut pregame = pregame();
        pregame.play_ball = Some(GameEvent::with_code(3, "???"));
        let game = Game {
            pregame: Some(pregame),
            ..Game::default()
        };

        let error = GameTransformer::new().transform(&game).unwrap_err();
        assert_eq!(
            error.path,
            NodePath::root().child(PathSegment::Pregame).child(PathSegment::PlayBall)
        );
    }

    #[test]
    fn test_outing_requires_bottom() {
        let mut inning = Inning::new(half_with_at_bat(EventKind::Hit));
        inning.outing = Some(ev(EventKind::InningEnd));
        let game = Game {
            pregame: Some(pregame()),
            innings: vec![inning],
            final_event: None,
        };

        let error = GameTransformer::new().transform(&game).unwrap_err();
        assert_eq!(error.kind, TransformErrorKind::MissingChild { child: "bottom half" });
    }

    #[test]
    fn test_unfinished_inning_before_another() {
        let game = Game {
            pregame: Some(pregame()),
            innings: vec![Inning::new(half_with_at_bat(EventKind::Hit)), full_inning()],
            final_event: None,
        };

        let error = GameTransformer::new().transform(&game).unwrap_err();
        assert_eq!(error.path, NodePath::root().child(PathSegment::Inning(0)));
    }

    #[test]
    fn test_pregame_without_play_ball() {
        let game = Game {
            pregame: Some(Pregame::new(ev(EventKind::LetsGo))),
            innings: vec![full_inning()],
            final_event: None,
        };

        let error = GameTransformer::new().transform(&game).unwrap_err();
        assert_eq!(error.kind, TransformErrorKind::MissingChild { child: "play ball" });
    }

    #[test]
    fn test_final_placement() {
        let no_innings = Game {
            pregame: Some(pregame()),
            innings: Vec::new(),
            final_event: Some(ev(EventKind::GameEnd)),
        };
        let error = GameTransformer::new().transform(&no_innings).unwrap_err();
        assert_eq!(error.kind, TransformErrorKind::MissingChild { child: "inning" });

        let after_outing = Game {
            pregame: Some(pregame()),
            innings: vec![full_inning()],
            final_event: Some(ev(EventKind::GameEnd)),
        };
        let error = GameTransformer::new().transform(&after_outing).unwrap_err();
        assert_eq!(error.path, NodePath::root().child(PathSegment::Final));
        assert_eq!(
            error.kind,
            TransformErrorKind::Misplaced {
                reason: "game end after the inning ended",
            }
        );
        assert_eq!(error.to_string(), "game/final: game end after the inning ended");
    }

    #[test]
    fn test_midgame_tree_is_accepted() {
        let game = Game {
            pregame: None,
            innings: vec![Inning::new(half_with_at_bat(EventKind::Walk))],
            final_event: None,
        };
        let events = GameTransformer::new().transform(&game).unwrap();
        assert_eq!(events.len(), 4);
    }
}
