//! The injected I/O boundary between the session and the human.
//!
//! The session never touches a console. It publishes [`GameEvent`]s to an
//! [`EventSink`] and asks a [`ChoiceCollector`] for bounded choices, so
//! tests substitute scripted doubles for both.

use crate::crypto::{Digest, MacKey};
use crate::games::Die;
use crate::protocol::types::{Outcome, Player};

/// Which of the three protocol runs a commitment belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawPurpose {
    FirstMove,
    OpponentThrow,
    HumanThrow,
}

/// Everything the session ever tells the human, as data
#[derive(Clone, Debug)]
pub enum GameEvent {
    /// A digest, published before the human's contribution is collected
    CommitmentPublished {
        purpose: DrawPurpose,
        min: i32,
        max: i32,
        digest: Digest,
    },
    /// The key and value, disclosed only after the contribution is locked in
    CommitmentRevealed {
        purpose: DrawPurpose,
        value: i32,
        key: MacKey,
    },
    FirstMoveDecided {
        guess: i32,
        value: i32,
        human_first: bool,
    },
    DiceAssigned {
        player: Player,
        index: usize,
        die: Die,
    },
    /// Display-only fairness sum; the throw itself uses the committed index
    ModuloExchanged {
        player: Player,
        machine_share: i32,
        human_share: i32,
        combined: i32,
    },
    ThrowResolved {
        player: Player,
        face_index: usize,
        face: i32,
    },
    GameResolved {
        human_face: i32,
        opponent_face: i32,
        outcome: Outcome,
    },
}

/// What a prompt is asking for, so a presenter can phrase it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    FirstMoveGuess,
    DiceSelection,
    ModuloContribution,
}

/// One selectable item of a prompt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: i32,
    pub label: String,
}

/// A bounded choice offered to the human. Only currently available items
/// appear in `options`; already-taken dice are never offered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceRequest {
    pub prompt: PromptKind,
    pub options: Vec<ChoiceOption>,
}

impl ChoiceRequest {
    /// Whether `value` is one of the offered options
    pub fn offers(&self, value: i32) -> bool {
        self.options.iter().any(|option| option.value == value)
    }

    /// Smallest and largest offered values, for prompt wording
    pub fn bounds(&self) -> (i32, i32) {
        let min = self.options.iter().map(|o| o.value).min().unwrap_or(0);
        let max = self.options.iter().map(|o| o.value).max().unwrap_or(0);
        (min, max)
    }
}

/// The human's answer to a [`ChoiceRequest`]. Help requests and malformed
/// input are resolved inside the collector by re-prompting; they never
/// reach the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Selected(i32),
    Exit,
}

/// Sink for everything the session tells the human
pub trait EventSink {
    fn publish(&mut self, event: &GameEvent);
}

/// Source of the human's bounded choices
pub trait ChoiceCollector {
    fn collect(&mut self, request: &ChoiceRequest) -> Choice;
}
