//! Protocol types and the game session.

mod events;
mod session;
mod types;

pub use events::{
    Choice, ChoiceCollector, ChoiceOption, ChoiceRequest, DrawPurpose, EventSink, GameEvent,
    PromptKind,
};
pub use session::{GameSession, SessionEnd, SessionError, MIN_DICE};
pub use types::{Outcome, Phase, Player};
