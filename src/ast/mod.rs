//! The game tree.
//!
//! A parsed feed is a [`Game`]: an optional pregame, a list of innings, and
//! an optional final event. Every node owns its children outright; there are
//! no back references, so a tree can be cloned, compared and serialized
//! like any other value.
//!
//! Every feed event ends up in exactly one slot of the tree, and the order
//! of slots in a depth-first walk is the order of the feed. That is the
//! property the transformer relies on to emit the original feed.

mod path;

pub use path::{NodePath, PathSegment};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::events::{EventKind, GameEvent};

/// Root of a parsed game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// "Let's Go!" and "Play ball!". Absent for feeds captured mid-game.
    pub pregame: Option<Pregame>,

    /// Innings in play order.
    pub innings: Vec<Inning>,

    /// The final score event.
    pub final_event: Option<GameEvent>,
}

/// The events before the first pitch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pregame {
    pub lets_go: GameEvent,
    pub play_ball: Option<GameEvent>,
}

/// One inning: a top half, possibly a bottom half, possibly an outing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inning {
    pub top: HalfInning,
    pub bottom: Option<HalfInning>,

    /// "Inning N is now an Outing." Only present after a bottom half.
    pub outing: Option<GameEvent>,
}

/// One half-inning and what happened during it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HalfInning {
    pub start: GameEvent,
    pub entries: Vec<HalfInningEntry>,
}

/// An item inside a half-inning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HalfInningEntry {
    /// A plate appearance.
    AtBat(AtBat),
    /// Flavor text between plate appearances.
    Interlude(GameEvent),
}

/// A plate appearance, from "batter up" to its outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AtBat {
    pub batter_up: GameEvent,

    /// Events during the at-bat: pitches, steals, flavor text.
    pub pitches: Vec<GameEvent>,

    /// The event that ended the at-bat, if the feed records one.
    /// Caught stealing or a mild-pitch walk can end an at-bat without it.
    pub outcome: Option<GameEvent>,
}

impl Game {
    /// An empty game (the parse of an empty feed).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the game has reached its final event.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.final_event.is_some()
    }

    /// Whether the tree holds no events at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pregame.is_none() && self.innings.is_empty() && self.final_event.is_none()
    }

    /// Number of events the tree holds.
    #[must_use]
    pub fn event_count(&self) -> usize {
        let pregame = self.pregame.as_ref().map_or(0, Pregame::event_count);
        let innings: usize = self.innings.iter().map(Inning::event_count).sum();
        pregame + innings + usize::from(self.final_event.is_some())
    }

    /// Number of events of each known kind. Unknown codes are not counted.
    #[must_use]
    pub fn event_counts(&self) -> FxHashMap<EventKind, usize> {
        let mut counts = FxHashMap::default();
        self.for_each_event(|event| {
            if let Some(kind) = event.kind() {
                *counts.entry(kind).or_insert(0) += 1;
            }
        });
        counts
    }

    /// Visit every event in feed order.
    pub fn for_each_event(&self, mut f: impl FnMut(&GameEvent)) {
        if let Some(pregame) = &self.pregame {
            f(&pregame.lets_go);
            if let Some(play_ball) = &pregame.play_ball {
                f(play_ball);
            }
        }
        for inning in &self.innings {
            for half in inning.halves() {
                f(&half.start);
                for entry in &half.entries {
                    match entry {
                        HalfInningEntry::AtBat(at_bat) => {
                            f(&at_bat.batter_up);
                            at_bat.pitches.iter().for_each(&mut f);
                            if let Some(outcome) = &at_bat.outcome {
                                f(outcome);
                            }
                        }
                        HalfInningEntry::Interlude(event) => f(event),
                    }
                }
            }
            if let Some(outing) = &inning.outing {
                f(outing);
            }
        }
        if let Some(final_event) = &self.final_event {
            f(final_event);
        }
    }

    /// Total number of at-bats in the game.
    #[must_use]
    pub fn at_bat_count(&self) -> usize {
        self.innings
            .iter()
            .flat_map(Inning::halves)
            .map(|half| half.at_bats().count())
            .sum()
    }
}

impl Pregame {
    #[must_use]
    pub fn new(lets_go: GameEvent) -> Self {
        Self {
            lets_go,
            play_ball: None,
        }
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        1 + usize::from(self.play_ball.is_some())
    }
}

impl Inning {
    /// Start an inning with its top half.
    #[must_use]
    pub fn new(top: HalfInning) -> Self {
        Self {
            top,
            bottom: None,
            outing: None,
        }
    }

    /// The halves played so far, top first.
    pub fn halves(&self) -> impl Iterator<Item = &HalfInning> {
        std::iter::once(&self.top).chain(self.bottom.as_ref())
    }

    /// The half currently being played.
    pub fn current_half_mut(&mut self) -> &mut HalfInning {
        match &mut self.bottom {
            Some(bottom) => bottom,
            None => &mut self.top,
        }
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        let halves: usize = self.halves().map(HalfInning::event_count).sum();
        halves + usize::from(self.outing.is_some())
    }
}

impl HalfInning {
    #[must_use]
    pub fn new(start: GameEvent) -> Self {
        Self {
            start,
            entries: Vec::new(),
        }
    }

    /// The at-bats of this half, skipping interludes.
    pub fn at_bats(&self) -> impl Iterator<Item = &AtBat> {
        self.entries.iter().filter_map(|entry| match entry {
            HalfInningEntry::AtBat(at_bat) => Some(at_bat),
            HalfInningEntry::Interlude(_) => None,
        })
    }

    /// The last at-bat, if it is the last entry.
    pub fn last_at_bat_mut(&mut self) -> Option<&mut AtBat> {
        match self.entries.last_mut() {
            Some(HalfInningEntry::AtBat(at_bat)) => Some(at_bat),
            _ => None,
        }
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        1 + self
            .entries
            .iter()
            .map(HalfInningEntry::event_count)
            .sum::<usize>()
    }
}

impl HalfInningEntry {
    #[must_use]
    pub fn event_count(&self) -> usize {
        match self {
            HalfInningEntry::AtBat(at_bat) => at_bat.event_count(),
            HalfInningEntry::Interlude(_) => 1,
        }
    }
}

impl AtBat {
    #[must_use]
    pub fn new(batter_up: GameEvent) -> Self {
        Self {
            batter_up,
            pitches: Vec::new(),
            outcome: None,
        }
    }

    /// Whether the at-bat recorded an outcome.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        1 + self.pitches.len() + usize::from(self.outcome.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(kind: EventKind) -> GameEvent {
        GameEvent::new(kind, kind.name())
    }

    fn sample() -> Game {
        let mut at_bat = AtBat::new(ev(EventKind::BatterUp));
        at_bat.pitches.push(ev(EventKind::Ball));
        at_bat.pitches.push(ev(EventKind::Strike));
        at_bat.outcome = Some(ev(EventKind::Hit));

        let mut top = HalfInning::new(ev(EventKind::HalfInning));
        top.entries.push(HalfInningEntry::AtBat(at_bat));
        top.entries.push(HalfInningEntry::Interlude(ev(EventKind::SuperyummyText)));

        let mut pregame = Pregame::new(ev(EventKind::LetsGo));
        pregame.play_ball = Some(ev(EventKind::PlayBall));

        Game {
            pregame: Some(pregame),
            innings: vec![Inning::new(top)],
            final_event: Some(ev(EventKind::GameEnd)),
        }
    }

    #[test]
    fn test_empty_game() {
        let game = Game::new();
        assert!(game.is_empty());
        assert!(!game.is_complete());
        assert_eq!(game.event_count(), 0);
        assert!(game.event_counts().is_empty());
    }

    #[test]
    fn test_event_count() {
        let game = sample();
        // lets go, play ball, half, batter up, ball, strike, hit, yummy, end
        assert_eq!(game.event_count(), 9);
        assert_eq!(game.at_bat_count(), 1);
        assert!(game.is_complete());
    }

    #[test]
    fn test_event_counts_by_kind() {
        let counts = sample().event_counts();
        assert_eq!(counts.get(&EventKind::Ball), Some(&1));
        assert_eq!(counts.get(&EventKind::Hit), Some(&1));
        assert_eq!(counts.get(&EventKind::Walk), None);
        assert_eq!(counts.values().sum::<usize>(), 9);
    }

    #[test]
    fn test_for_each_event_order() {
        let mut kinds = Vec::new();
        sample().for_each_event(|event| kinds.push(event.kind().unwrap()));
        assert_eq!(
            kinds,
            vec![
                EventKind::LetsGo,
                EventKind::PlayBall,
                EventKind::HalfInning,
                EventKind::BatterUp,
                EventKind::Ball,
                EventKind::Strike,
                EventKind::Hit,
                EventKind::SuperyummyText,
                EventKind::GameEnd,
            ]
        );
    }

    #[test]
    fn test_current_half() {
        let mut inning = Inning::new(HalfInning::new(ev(EventKind::HalfInning)));
        inning.current_half_mut().entries.push(HalfInningEntry::Interlude(ev(EventKind::SuperyummyText)));
        assert_eq!(inning.top.entries.len(), 1);

        inning.bottom = Some(HalfInning::new(ev(EventKind::HalfInning)));
        inning.current_half_mut().entries.push(HalfInningEntry::Interlude(ev(EventKind::SuperyummyText)));
        assert_eq!(inning.top.entries.len(), 1);
        assert_eq!(inning.bottom.as_ref().unwrap().entries.len(), 1);
        assert_eq!(inning.halves().count(), 2);
    }

    #[test]
    fn test_last_at_bat_mut_skips_interludes() {
        let mut half = HalfInning::new(ev(EventKind::HalfInning));
        assert!(half.last_at_bat_mut().is_none());

        half.entries.push(HalfInningEntry::AtBat(AtBat::new(ev(EventKind::BatterUp))));
        assert!(half.last_at_bat_mut().is_some());

        half.entries.push(HalfInningEntry::Interlude(ev(EventKind::SuperyummyText)));
        assert!(half.last_at_bat_mut().is_none());
    }

    #[test]
    fn test_serialization() {
        let game = sample();
        let json = serde_json::to_string(&game).unwrap();
        let deserialized: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game, deserialized);
    }
}
