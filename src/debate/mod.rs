//! The debate core: reply contract, speaker state, and the strict
//! turn-alternation driver.
//!
//! - [`Reply`] / [`TurnOutcome`]: the structured contract every model
//!   invocation must satisfy
//! - [`Speaker`]: one participant's private conversation history
//! - [`Debate`]: the state machine that alternates turns until a forfeit

mod driver;
/// The structured-reply wire contract and its validated form.
pub mod reply;
/// Speaker identity, sides, and per-speaker conversation state.
pub mod speaker;

pub use driver::{Debate, DebateOutcome, DebateState};
pub use reply::{Reply, TurnOutcome, MAX_FIELD_CHARS};
pub use speaker::{Side, Speaker, SpeakerId};
