//! Feed event kinds.
//!
//! The feed tags every event with an integer `type`. Only the codes listed
//! here are understood by the grammar; anything else is carried through
//! [`GameEvent`](super::GameEvent) untouched and rejected at parse time.

use serde::{Deserialize, Serialize};

/// A known feed event type.
///
/// The discriminant values are the feed's own `type` codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum EventKind {
    /// "Let's Go!"
    LetsGo = 0,
    /// "Play ball!"
    PlayBall = 1,
    /// "Top of 1, Team batting."
    HalfInning = 2,
    /// Stolen base or caught stealing.
    StolenBase = 4,
    Walk = 5,
    Strikeout = 6,
    FlyOut = 7,
    GroundOut = 8,
    HomeRun = 9,
    /// Single, double, triple or quadruple.
    Hit = 10,
    /// Final score line.
    GameEnd = 11,
    BatterUp = 12,
    Strike = 13,
    Ball = 14,
    FoulBall = 15,
    /// "The Electricity zaps a strike away!"
    StrikeZapped = 25,
    MildPitch = 27,
    /// "Inning N is now an Outing."
    InningEnd = 28,
    CoffeeBean = 39,
    BloodDrain = 52,
    /// Peanut flavor text during an at-bat.
    PeanutFlavorText = 73,
    /// Superyummy flavor text between at-bats.
    SuperyummyText = 92,
}

impl EventKind {
    /// Every known kind, in code order.
    pub const ALL: [EventKind; 22] = [
        EventKind::LetsGo,
        EventKind::PlayBall,
        EventKind::HalfInning,
        EventKind::StolenBase,
        EventKind::Walk,
        EventKind::Strikeout,
        EventKind::FlyOut,
        EventKind::GroundOut,
        EventKind::HomeRun,
        EventKind::Hit,
        EventKind::GameEnd,
        EventKind::BatterUp,
        EventKind::Strike,
        EventKind::Ball,
        EventKind::FoulBall,
        EventKind::StrikeZapped,
        EventKind::MildPitch,
        EventKind::InningEnd,
        EventKind::CoffeeBean,
        EventKind::BloodDrain,
        EventKind::PeanutFlavorText,
        EventKind::SuperyummyText,
    ];

    /// Look up a kind by its feed `type` code.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    /// The feed `type` code.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::LetsGo => "lets go",
            EventKind::PlayBall => "play ball",
            EventKind::HalfInning => "half-inning",
            EventKind::StolenBase => "stolen base",
            EventKind::Walk => "walk",
            EventKind::Strikeout => "strikeout",
            EventKind::FlyOut => "flyout",
            EventKind::GroundOut => "ground out",
            EventKind::HomeRun => "home run",
            EventKind::Hit => "hit",
            EventKind::GameEnd => "game end",
            EventKind::BatterUp => "batter up",
            EventKind::Strike => "strike",
            EventKind::Ball => "ball",
            EventKind::FoulBall => "foul ball",
            EventKind::StrikeZapped => "strike zapped",
            EventKind::MildPitch => "mild pitch",
            EventKind::InningEnd => "inning end",
            EventKind::CoffeeBean => "coffee bean",
            EventKind::BloodDrain => "blooddrain",
            EventKind::PeanutFlavorText => "peanut flavor text",
            EventKind::SuperyummyText => "superyummy text",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
