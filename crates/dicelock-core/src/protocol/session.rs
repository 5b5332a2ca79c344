//! The game session state machine.
//!
//! One session plays one complete duel: a committed coin toss for the
//! first move, dice selection, one committed throw per party, and outcome
//! resolution. Every commitment follows the same sequence: publish the
//! digest, collect the human's contribution, only then reveal the key.

use thiserror::Error;
use tracing::{debug, info};

use crate::crypto::{Commitment, CryptoError};
use crate::games::{judge, Die};
use crate::protocol::events::{
    Choice, ChoiceCollector, ChoiceOption, ChoiceRequest, DrawPurpose, EventSink, GameEvent,
    PromptKind,
};
use crate::protocol::types::{Outcome, Phase, Player};

/// Fewest dice that leave the human a real selection in both branches
pub const MIN_DICE: usize = 3;

/// Errors that abort a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("at least 3 dice are required, got {count}")]
    TooFewDice { count: usize },

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

/// How a session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Completed(Outcome),
    /// The human asked to leave; no winner is declared
    Aborted,
}

enum Step {
    Next(Phase),
    Abort,
    Finished(Outcome),
}

/// One duel in progress. Owns the dice for its lifetime; all interaction
/// goes through the injected collector and sink.
pub struct GameSession<'a, C: ChoiceCollector, S: EventSink> {
    dice: Vec<Die>,
    collector: &'a mut C,
    sink: &'a mut S,
    human_first: bool,
    human_die: Option<usize>,
    opponent_die: Option<usize>,
    human_face: Option<i32>,
    opponent_face: Option<i32>,
}

impl<'a, C: ChoiceCollector, S: EventSink> GameSession<'a, C, S> {
    pub fn new(dice: Vec<Die>, collector: &'a mut C, sink: &'a mut S) -> Result<Self, SessionError> {
        if dice.len() < MIN_DICE {
            return Err(SessionError::TooFewDice { count: dice.len() });
        }
        Ok(Self {
            dice,
            collector,
            sink,
            human_first: false,
            human_die: None,
            opponent_die: None,
            human_face: None,
            opponent_face: None,
        })
    }

    /// Play the duel to its end
    pub fn run(mut self) -> Result<SessionEnd, SessionError> {
        let mut phase = Phase::DetermineFirstMove;
        loop {
            info!(?phase, "entering phase");
            let step = match phase {
                Phase::DetermineFirstMove => self.determine_first_move()?,
                Phase::SelectDice => self.select_dice()?,
                Phase::OpponentThrow => self.throw(Player::Opponent)?,
                Phase::HumanThrow => self.throw(Player::Human)?,
                Phase::Resolve => self.resolve(),
            };
            match step {
                Step::Next(next) => phase = next,
                Step::Abort => {
                    info!("session aborted by the human");
                    return Ok(SessionEnd::Aborted);
                }
                Step::Finished(outcome) => return Ok(SessionEnd::Completed(outcome)),
            }
        }
    }

    fn determine_first_move(&mut self) -> Result<Step, SessionError> {
        let commitment = Commitment::generate(0, 1)?;
        self.sink.publish(&GameEvent::CommitmentPublished {
            purpose: DrawPurpose::FirstMove,
            min: 0,
            max: 1,
            digest: *commitment.digest(),
        });

        let request = ChoiceRequest {
            prompt: PromptKind::FirstMoveGuess,
            options: numeric_options(0, 1),
        };
        let guess = match self.collector.collect(&request) {
            Choice::Selected(guess) => guess,
            Choice::Exit => return Ok(Step::Abort),
        };

        self.sink.publish(&GameEvent::CommitmentRevealed {
            purpose: DrawPurpose::FirstMove,
            value: commitment.value(),
            key: commitment.reveal().clone(),
        });

        self.human_first = guess == commitment.value();
        info!(
            guess,
            value = commitment.value(),
            human_first = self.human_first,
            "first move decided"
        );
        self.sink.publish(&GameEvent::FirstMoveDecided {
            guess,
            value: commitment.value(),
            human_first: self.human_first,
        });

        Ok(Step::Next(Phase::SelectDice))
    }

    fn select_dice(&mut self) -> Result<Step, SessionError> {
        if self.human_first {
            let human = match self.collect_die_choice(None) {
                Some(index) => index,
                None => return Ok(Step::Abort),
            };
            self.assign(Player::Human, human);

            // Lowest index still free; the human's die is never handed out
            // twice.
            let opponent = (0..self.dice.len())
                .find(|&index| index != human)
                .expect("more than one die");
            self.assign(Player::Opponent, opponent);
        } else {
            self.assign(Player::Opponent, 0);
            let human = match self.collect_die_choice(Some(0)) {
                Some(index) => index,
                None => return Ok(Step::Abort),
            };
            self.assign(Player::Human, human);
        }

        Ok(Step::Next(Phase::OpponentThrow))
    }

    fn collect_die_choice(&mut self, exclude: Option<usize>) -> Option<usize> {
        let options = self
            .dice
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != exclude)
            .map(|(index, die)| ChoiceOption {
                value: index as i32,
                label: die.to_string(),
            })
            .collect();
        let request = ChoiceRequest {
            prompt: PromptKind::DiceSelection,
            options,
        };
        match self.collector.collect(&request) {
            Choice::Selected(index) => Some(index as usize),
            Choice::Exit => None,
        }
    }

    fn assign(&mut self, player: Player, index: usize) {
        debug!(%player, index, "die assigned");
        match player {
            Player::Human => self.human_die = Some(index),
            Player::Opponent => self.opponent_die = Some(index),
        }
        self.sink.publish(&GameEvent::DiceAssigned {
            player,
            index,
            die: self.dice[index].clone(),
        });
    }

    fn throw(&mut self, player: Player) -> Result<Step, SessionError> {
        let die_index = match player {
            Player::Human => self.human_die,
            Player::Opponent => self.opponent_die,
        }
        .expect("dice are assigned before any throw");
        let die = self.dice[die_index].clone();

        let purpose = match player {
            Player::Human => DrawPurpose::HumanThrow,
            Player::Opponent => DrawPurpose::OpponentThrow,
        };
        let max = die.len() as i32 - 1;
        let commitment = Commitment::generate(0, max)?;
        self.sink.publish(&GameEvent::CommitmentPublished {
            purpose,
            min: 0,
            max,
            digest: *commitment.digest(),
        });

        let request = ChoiceRequest {
            prompt: PromptKind::ModuloContribution,
            options: numeric_options(0, 5),
        };
        let human_share = match self.collector.collect(&request) {
            Choice::Selected(share) => share,
            Choice::Exit => return Ok(Step::Abort),
        };

        let value = commitment.value();
        self.sink.publish(&GameEvent::CommitmentRevealed {
            purpose,
            value,
            key: commitment.reveal().clone(),
        });

        // The sum is part of the fairness dialogue only; the face is still
        // indexed by the committed value.
        let machine_share = value % 6;
        let combined = (machine_share + human_share) % 6;
        self.sink.publish(&GameEvent::ModuloExchanged {
            player,
            machine_share,
            human_share,
            combined,
        });

        let face_index = value as usize;
        let face = die.face(face_index);
        match player {
            Player::Human => self.human_face = Some(face),
            Player::Opponent => self.opponent_face = Some(face),
        }
        info!(%player, face_index, face, "throw resolved");
        self.sink.publish(&GameEvent::ThrowResolved {
            player,
            face_index,
            face,
        });

        Ok(Step::Next(match player {
            Player::Opponent => Phase::HumanThrow,
            Player::Human => Phase::Resolve,
        }))
    }

    fn resolve(&mut self) -> Step {
        let human_face = self.human_face.expect("both throws precede resolution");
        let opponent_face = self.opponent_face.expect("both throws precede resolution");

        let outcome = judge(human_face, opponent_face);
        info!(human_face, opponent_face, %outcome, "game resolved");
        self.sink.publish(&GameEvent::GameResolved {
            human_face,
            opponent_face,
            outcome,
        });

        Step::Finished(outcome)
    }
}

fn numeric_options(min: i32, max: i32) -> Vec<ChoiceOption> {
    (min..=max)
        .map(|value| ChoiceOption {
            value,
            label: value.to_string(),
        })
        .collect()
}
