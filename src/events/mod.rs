//! Feed events: the input of the parser and the output of the transformer.
//!
//! ## Key Components
//!
//! - [`EventKind`]: The known feed `type` codes
//! - [`GameEvent`]: One feed entry with its full payload
//! - [`EventSequence`]: An ordered run of events for one game
//!
//! ## Example Usage
//!
//! ```
//! use blaseball_feed::events::{EventKind, GameEvent};
//!
//! let event = GameEvent::new(EventKind::LetsGo, "Let's Go!").with_game("g1");
//! assert_eq!(event.kind(), Some(EventKind::LetsGo));
//! assert_eq!(event.event_type, 0);
//! ```

mod event;
mod kind;

pub use event::{EventSequence, GameEvent};
pub use kind::EventKind;
