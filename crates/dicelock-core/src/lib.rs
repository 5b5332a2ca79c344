//! Dicelock Core Library
//!
//! This crate provides the fair-random commitment primitive, dice
//! validation, and the session state machine for the dicelock console game.

pub mod crypto;
pub mod games;
pub mod protocol;

pub use crypto::{sample_uniform, Commitment, CryptoError, Digest, MacKey};
pub use games::{judge, parse_dice, DiceError, Die};
pub use protocol::{
    Choice, ChoiceCollector, ChoiceOption, ChoiceRequest, DrawPurpose, EventSink, GameEvent,
    GameSession, Outcome, Phase, Player, PromptKind, SessionEnd, SessionError, MIN_DICE,
};
