//! Round-trip verification.
//!
//! [`Verifier`] checks that `transform(parse(feed)) == feed` and, when it
//! does not hold, says where. It is the harness used against whole-game
//! corpora: verify single events first, then growing prefixes, then the
//! whole feed, so a faulty event is found as early as possible.
//!
//! ## Example Usage
//!
//! ```
//! use blaseball_feed::synth::GameSynthesizer;
//! use blaseball_feed::verify::Verifier;
//!
//! let feed = GameSynthesizer::new(42).generate();
//! let report = Verifier::default().verify(&feed);
//! assert!(report.is_passed());
//! ```

use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::events::GameEvent;
use crate::parser::{GameParser, ParseError};
use crate::transformer::{GameTransformer, TransformError};

/// Outcome of one round trip.
#[derive(Clone, Debug, PartialEq)]
pub enum RoundTripReport {
    /// The feed came back unchanged.
    Passed { events: usize, innings: usize },

    /// The feed did not parse. `prefix_parses` records whether the feed
    /// cut just before the offending event parses, as it always should.
    ParseFailed { error: ParseError, prefix_parses: bool },

    /// The parsed tree could not be transformed.
    TransformFailed(TransformError),

    /// The feed came back different. `index` is the first differing
    /// position; `None` on either side means that side ended there.
    Mismatch {
        index: usize,
        expected: Option<GameEvent>,
        actual: Option<GameEvent>,
    },
}

impl RoundTripReport {
    #[must_use]
    pub fn is_passed(&self) -> bool {
        matches!(self, RoundTripReport::Passed { .. })
    }
}

/// Runs round trips with a fixed parser configuration.
#[derive(Clone, Debug, Default)]
pub struct Verifier {
    parser: GameParser,
    transformer: GameTransformer,
}

impl Verifier {
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self {
            parser: GameParser::new(config),
            transformer: GameTransformer::new(),
        }
    }

    /// Parse, transform and compare one feed.
    pub fn verify(&self, events: &[GameEvent]) -> RoundTripReport {
        let game = match self.parser.parse(events) {
            Ok(game) => game,
            Err(error) => {
                let prefix_parses = self.parser.parse(&events[..error.index]).is_ok();
                warn!(%error, prefix_parses, "feed did not parse");
                return RoundTripReport::ParseFailed { error, prefix_parses };
            }
        };

        let output = match self.transformer.transform(&game) {
            Ok(output) => output,
            Err(error) => {
                warn!(%error, "parsed game did not transform");
                return RoundTripReport::TransformFailed(error);
            }
        };

        if let Some(index) = first_difference(events, &output) {
            warn!(index, expected = events.len(), actual = output.len(), "round trip changed the feed");
            return RoundTripReport::Mismatch {
                index,
                expected: events.get(index).cloned(),
                actual: output.get(index).cloned(),
            };
        }

        debug!(events = events.len(), innings = game.innings.len(), "round trip passed");
        RoundTripReport::Passed {
            events: events.len(),
            innings: game.innings.len(),
        }
    }

    /// Verify every prefix of the feed, shortest first, and return the
    /// first report that did not pass; or the full feed's report.
    pub fn verify_prefixes(&self, events: &[GameEvent]) -> RoundTripReport {
        for len in 1..events.len() {
            let report = self.verify(&events[..len]);
            if !report.is_passed() {
                return report;
            }
        }
        self.verify(events)
    }

    /// Find the first event that makes the feed unparseable by re-parsing
    /// growing prefixes from scratch. `None` if the whole feed parses.
    pub fn localize(&self, events: &[GameEvent]) -> Option<usize> {
        (1..=events.len()).find(|&len| self.parser.parse(&events[..len]).is_err()).map(|len| len - 1)
    }

    /// Whether `parse(transform(parse(feed))) == parse(feed)`.
    ///
    /// False when any step fails.
    pub fn is_idempotent(&self, events: &[GameEvent]) -> bool {
        let Ok(game) = self.parser.parse(events) else {
            return false;
        };
        let Ok(output) = self.transformer.transform(&game) else {
            return false;
        };
        self.parser.parse(&output).is_ok_and(|reparsed| reparsed == game)
    }
}

fn first_difference(expected: &[GameEvent], actual: &[GameEvent]) -> Option<usize> {
    let shared = expected.len().min(actual.len());
    (0..shared)
        .find(|&i| expected[i] != actual[i])
        .or_else(|| (expected.len() != actual.len()).then_some(shared))
}
