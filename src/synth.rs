//! Deterministic synthetic games.
//!
//! [`GameSynthesizer`] plays a crude simulation of a game and records it as
//! a feed, so tests and benchmarks have whole-game corpora without network
//! access. The simulation only has to be plausible enough to produce every
//! structural shape the grammar allows:
//!
//! - at-bats ending in each outcome kind
//! - at-bats left open by a caught stealing that ends the half-inning
//! - mild pitches, steals and flavor text during at-bats
//! - interludes between at-bats
//! - games ending after a top half and after a bottom half
//!
//! Same seed, same feed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use crate::events::{EventKind, EventSequence, GameEvent};

const AWAY_PLAYERS: [&str; 5] = [
    "Jessica Telephone",
    "Nagomi Mcdaniel",
    "Alyssa Harrell",
    "Thomas Dracaena",
    "Valentine Games",
];

const HOME_PLAYERS: [&str; 5] = [
    "York Silk",
    "Aldon Cashmoney",
    "Paula Turnip",
    "Richmond Harrison",
    "Comfort Septemberish",
];

const OUTS_PER_HALF: u32 = 3;
const REGULATION_INNINGS: u32 = 9;

/// Builds synthetic game feeds from a seed.
#[derive(Clone, Debug)]
pub struct GameSynthesizer {
    rng: ChaCha8Rng,
    game_id: String,
    max_innings: u32,
    interlude_rate: f64,
}

impl GameSynthesizer {
    /// Create a synthesizer with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            game_id: format!("synthetic-{:016x}", seed),
            max_innings: 12,
            interlude_rate: 0.05,
        }
    }

    /// Innings after which the game ends even if tied (builder pattern).
    /// Clamped to at least one.
    #[must_use]
    pub fn with_max_innings(mut self, innings: u32) -> Self {
        self.max_innings = innings.max(1);
        self
    }

    /// Chance of flavor text between at-bats (builder pattern).
    /// Clamped to `0.0..=1.0`; NaN means never.
    #[must_use]
    pub fn with_interlude_rate(mut self, rate: f64) -> Self {
        self.interlude_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    /// The game id every generated event is tagged with.
    #[must_use]
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    /// Generate one complete game.
    pub fn generate(&mut self) -> EventSequence {
        let mut game = Recorder::new(&self.game_id);
        let mut score = [0u32; 2];
        let mut lineup = [0usize; 2];

        game.record(EventKind::LetsGo, "Let's Go!".to_string(), None);
        game.record(EventKind::PlayBall, "Play ball!".to_string(), None);

        let mut inning = 1;
        loop {
            for (side, team) in [(0, "Crabs"), (1, "Tigers")] {
                let top_or_bottom = if side == 0 { "Top" } else { "Bottom" };
                game.record(
                    EventKind::HalfInning,
                    format!("{} of {}, {} batting.", top_or_bottom, inning, team),
                    None,
                );
                score[side] += self.half_inning(&mut game, team, side, &mut lineup[side]);

                let away_losing = side == 0 && score[1] > score[0];
                if inning >= REGULATION_INNINGS && away_losing {
                    return Self::finish(game, score);
                }
            }

            let decided = score[0] != score[1];
            if inning >= self.max_innings || (inning >= REGULATION_INNINGS && decided) {
                return Self::finish(game, score);
            }
            game.record(
                EventKind::InningEnd,
                format!("Inning {} is now an Outing.", inning),
                None,
            );
            inning += 1;
        }
    }

    fn finish(mut game: Recorder, score: [u32; 2]) -> EventSequence {
        let away = format!("Crabs {}", score[0]);
        let home = format!("Tigers {}", score[1]);
        let description = if score[1] > score[0] {
            format!("{}, {}", home, away)
        } else {
            format!("{}, {}", away, home)
        };
        game.record(EventKind::GameEnd, description, None);
        game.events
    }

    /// Play one half-inning; returns runs scored.
    fn half_inning(&mut self, game: &mut Recorder, team: &str, side: usize, next_batter: &mut usize) -> u32 {
        let players = if side == 0 { &AWAY_PLAYERS } else { &HOME_PLAYERS };
        let mut outs = 0;
        let mut runs = 0;
        let mut runners = 0u32;

        while outs < OUTS_PER_HALF {
            if self.rng.gen_bool(self.interlude_rate) {
                game.record(
                    EventKind::SuperyummyText,
                    "They love Superyummy.".to_string(),
                    None,
                );
            }

            let batter = players[*next_batter % players.len()];
            *next_batter += 1;
            game.record(
                EventKind::BatterUp,
                format!("{} batting for the {}.", batter, team),
                Some(batter),
            );

            let (mut balls, mut strikes) = (0, 0);
            loop {
                if runners > 0 && self.rng.gen_bool(0.04) {
                    if self.rng.gen_bool(0.5) {
                        game.record(
                            EventKind::StolenBase,
                            "A runner steals second base!".to_string(),
                            None,
                        );
                        continue;
                    }
                    game.record(
                        EventKind::StolenBase,
                        "A runner gets caught stealing second base.".to_string(),
                        None,
                    );
                    runners -= 1;
                    outs += 1;
                    if outs >= OUTS_PER_HALF {
                        // The at-bat stays open; the half ends under it.
                        break;
                    }
                    continue;
                }

                let roll = self.rng.gen_range(0..100);
                if roll < 30 {
                    balls += 1;
                    if balls == 4 {
                        game.record(EventKind::Walk, format!("{} draws a walk.", batter), Some(batter));
                        runners += 1;
                        break;
                    }
                    game.record(EventKind::Ball, format!("Ball. {}-{}", balls, strikes), None);
                } else if roll < 55 {
                    strikes += 1;
                    if strikes == 3 {
                        game.record(
                            EventKind::Strikeout,
                            format!("{} strikes out swinging.", batter),
                            Some(batter),
                        );
                        outs += 1;
                        break;
                    }
                    game.record(EventKind::Strike, format!("Strike, swinging. {}-{}", balls, strikes), None);
                } else if roll < 70 {
                    if strikes < 2 {
                        strikes += 1;
                    }
                    game.record(EventKind::FoulBall, format!("Foul Ball. {}-{}", balls, strikes), None);
                } else if roll < 72 {
                    game.record(
                        EventKind::PeanutFlavorText,
                        "The crowd is eating peanuts.".to_string(),
                        None,
                    );
                } else if roll < 74 {
                    balls += 1;
                    if balls == 4 {
                        // A mild-pitch walk ends the at-bat without an outcome event.
                        game.record(
                            EventKind::MildPitch,
                            format!("Mild pitch! {} draws a walk.", batter),
                            None,
                        );
                        runners += 1;
                        break;
                    }
                    game.record(
                        EventKind::MildPitch,
                        format!("Mild pitch! Ball, {}-{}.", balls, strikes),
                        None,
                    );
                } else if roll < 86 {
                    let kind = if self.rng.gen_bool(0.5) { EventKind::FlyOut } else { EventKind::GroundOut };
                    let verb = if kind == EventKind::FlyOut { "hit a flyout to" } else { "hit a ground out to" };
                    let fielder = if side == 0 { HOME_PLAYERS[0] } else { AWAY_PLAYERS[0] };
                    game.record(kind, format!("{} {} {}.", batter, verb, fielder), Some(batter));
                    outs += 1;
                    break;
                } else if roll < 97 {
                    let hit = ["Single", "Double", "Triple"][self.rng.gen_range(0..3)];
                    game.record(EventKind::Hit, format!("{} hits a {}!", batter, hit), Some(batter));
                    if runners > 0 && self.rng.gen_bool(0.4) {
                        runs += 1;
                        runners -= 1;
                    }
                    runners = (runners + 1).min(3);
                    break;
                } else {
                    let scored = runners + 1;
                    let description = if scored == 1 {
                        format!("{} hits a solo home run!", batter)
                    } else {
                        format!("{} hits a {}-run home run!", batter, scored)
                    };
                    game.record(EventKind::HomeRun, description, Some(batter));
                    runs += scored;
                    runners = 0;
                    break;
                }
            }
        }

        runs
    }
}

/// Accumulates events with ids, timestamps and tags.
struct Recorder {
    game_id: String,
    events: EventSequence,
}

impl Recorder {
    fn new(game_id: &str) -> Self {
        Self {
            game_id: game_id.to_string(),
            events: Vec::new(),
        }
    }

    fn record(&mut self, kind: EventKind, description: String, player: Option<&str>) {
        let play = self.events.len();
        let seconds = play * 5;
        let created = format!(
            "2021-03-01T{:02}:{:02}:{:02}.000Z",
            16 + seconds / 3600,
            (seconds / 60) % 60,
            seconds % 60
        );

        let mut event = GameEvent::new(kind, description)
            .with_id(format!("{}-{:04}", self.game_id, play))
            .with_created(created)
            .with_game(self.game_id.clone())
            .with_schedule(11, 0)
            .with_metadata(json!({ "play": play, "subPlay": -1 }));
        if let Some(player) = player {
            event = event.with_player(player.to_lowercase().replace(' ', "-"));
        }
        self.events.push(event);
    }
}
