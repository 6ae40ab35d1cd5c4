//! The structural grammar of a game feed.
//!
//! Both directions of the round trip are defined here:
//!
//! - [`role_of`] assigns every [`EventKind`] the structural [`Role`] it plays.
//! - [`step`] is the transition table the parser follows: given the current
//!   [`Context`] and the role of the next event, it yields the [`Step`] that
//!   places the event in the tree and the context that follows.
//! - The transformer checks every event it emits against the role of the
//!   slot it came from, and walks the tree in the same order the table
//!   builds it.
//!
//! ## Shape of a game
//!
//! ```text
//! Game      := Pregame? Inning* GameEnd?
//! Pregame   := LetsGo PlayBall?
//! Inning    := HalfInning HalfInning? InningEnd?
//! HalfInning:= HalfInningStart (AtBat | Interlude)*
//! AtBat     := BatterUp Pitch* Outcome?
//! ```
//!
//! An at-bat stays open until an outcome, the next batter, an interlude or
//! the end of the half-inning. Nothing in the grammar counts outs or
//! strikes; it only checks that every event has a place to go.

use serde::{Deserialize, Serialize};

use crate::events::EventKind;

/// The structural role of an event kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Opens the game ("Let's Go!").
    Opening,
    /// Completes the pregame ("Play ball!").
    PlayBall,
    /// Opens a half-inning.
    HalfInningStart,
    /// Opens an at-bat.
    BatterUp,
    /// Happens during an at-bat without ending it.
    Pitch,
    /// Ends an at-bat.
    Outcome,
    /// Happens between at-bats.
    Interlude,
    /// Closes an inning after its bottom half.
    InningEnd,
    /// Closes the game.
    GameOver,
}

impl Role {
    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Role::Opening => "opening",
            Role::PlayBall => "play ball",
            Role::HalfInningStart => "half-inning start",
            Role::BatterUp => "batter up",
            Role::Pitch => "pitch",
            Role::Outcome => "at-bat outcome",
            Role::Interlude => "interlude",
            Role::InningEnd => "inning end",
            Role::GameOver => "game over",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The role every known event kind plays.
#[must_use]
pub const fn role_of(kind: EventKind) -> Role {
    match kind {
        EventKind::LetsGo => Role::Opening,
        EventKind::PlayBall => Role::PlayBall,
        EventKind::HalfInning => Role::HalfInningStart,
        EventKind::BatterUp => Role::BatterUp,
        EventKind::Strike
        | EventKind::Ball
        | EventKind::FoulBall
        | EventKind::StrikeZapped
        | EventKind::MildPitch
        | EventKind::StolenBase
        | EventKind::CoffeeBean
        | EventKind::BloodDrain
        | EventKind::PeanutFlavorText => Role::Pitch,
        EventKind::Walk
        | EventKind::Strikeout
        | EventKind::FlyOut
        | EventKind::GroundOut
        | EventKind::HomeRun
        | EventKind::Hit => Role::Outcome,
        EventKind::SuperyummyText => Role::Interlude,
        EventKind::InningEnd => Role::InningEnd,
        EventKind::GameEnd => Role::GameOver,
    }
}

/// Which half of an inning is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Half {
    Top,
    Bottom,
}

impl std::fmt::Display for Half {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Half::Top => f.write_str("top"),
            Half::Bottom => f.write_str("bottom"),
        }
    }
}

/// Where the parser is in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Context {
    /// Nothing seen yet.
    Start,
    /// "Let's Go!" seen, waiting for "Play ball!".
    Pregame,
    /// "Play ball!" seen, waiting for the first half-inning.
    Ready,
    /// Inside a half-inning. `at_bat` is true while an at-bat is open.
    Half { half: Half, at_bat: bool },
    /// An inning just ended, waiting for the next one.
    Outing,
    /// The game is over.
    Final,
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Context::Start => f.write_str("start of feed"),
            Context::Pregame => f.write_str("pregame"),
            Context::Ready => f.write_str("before the first inning"),
            Context::Half { half, at_bat: true } => write!(f, "{} half, during an at-bat", half),
            Context::Half { half, at_bat: false } => write!(f, "{} half, between at-bats", half),
            Context::Outing => f.write_str("between innings"),
            Context::Final => f.write_str("after the game ended"),
        }
    }
}

/// What the parser does with an accepted event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// Start the pregame node.
    OpenPregame,
    /// Fill the pregame's play-ball slot.
    PlayBall,
    /// Start a new inning with its top half.
    OpenInning,
    /// Start the bottom half of the current inning.
    OpenBottomHalf,
    /// Start a new at-bat in the current half.
    OpenAtBat,
    /// Append to the open at-bat's pitches.
    Pitch,
    /// Fill the open at-bat's outcome slot.
    Outcome,
    /// Append an interlude entry to the current half.
    Interlude,
    /// Fill the current inning's outing slot.
    CloseInning,
    /// Fill the game's final slot.
    Finish,
}

/// The transition table.
///
/// Returns the step to apply and the next context, or the reason the role
/// has no place in `context`. `midgame_entry` allows a feed to begin at a
/// half-inning start.
pub fn step(context: Context, role: Role, midgame_entry: bool) -> Result<(Step, Context), &'static str> {
    use Context as C;
    use Role as R;

    let top = |at_bat| C::Half { half: Half::Top, at_bat };

    match (context, role) {
        (C::Final, _) => Err("event after the game ended"),

        (C::Start, R::Opening) => Ok((Step::OpenPregame, C::Pregame)),
        (_, R::Opening) => Err("game already started"),

        (C::Pregame, R::PlayBall) => Ok((Step::PlayBall, C::Ready)),
        (C::Start, R::PlayBall) => Err("play ball before lets go"),
        (_, R::PlayBall) => Err("play ball after the game started"),

        (C::Start, R::HalfInningStart) if midgame_entry => Ok((Step::OpenInning, top(false))),
        (C::Ready | C::Outing, R::HalfInningStart) => Ok((Step::OpenInning, top(false))),
        (C::Half { half: Half::Top, .. }, R::HalfInningStart) => Ok((
            Step::OpenBottomHalf,
            C::Half { half: Half::Bottom, at_bat: false },
        )),
        (C::Half { half: Half::Bottom, .. }, R::HalfInningStart) => {
            Err("half-inning before the inning ended")
        }
        (_, R::HalfInningStart) => Err("half-inning before play ball"),

        (C::Half { half, .. }, R::BatterUp) => Ok((Step::OpenAtBat, C::Half { half, at_bat: true })),
        (C::Half { at_bat: true, .. }, R::Pitch) => Ok((Step::Pitch, context)),
        (C::Half { half, at_bat: true }, R::Outcome) => Ok((Step::Outcome, C::Half { half, at_bat: false })),
        (C::Half { at_bat: false, .. }, R::Pitch | R::Outcome) => Err("no batter up"),
        (C::Half { half, .. }, R::Interlude) => Ok((Step::Interlude, C::Half { half, at_bat: false })),

        (C::Half { half: Half::Bottom, .. }, R::InningEnd) => Ok((Step::CloseInning, C::Outing)),
        (C::Half { half: Half::Top, .. }, R::InningEnd) => Err("inning end before the bottom half"),
        (C::Outing, R::InningEnd) => Err("inning already ended"),

        (C::Half { .. }, R::GameOver) => Ok((Step::Finish, C::Final)),
        (C::Outing, R::GameOver) => Err("game end after the inning ended"),

        (
            C::Start | C::Pregame | C::Ready | C::Outing,
            R::BatterUp | R::Pitch | R::Outcome | R::Interlude | R::InningEnd | R::GameOver,
        ) => Err("no half-inning in progress"),
    }
}
