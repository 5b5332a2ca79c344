//! Protocol types.

use std::fmt;

/// The two parties of a duel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Human,
    Opponent,
}

impl Player {
    /// Get the other party
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "human"),
            Player::Opponent => write!(f, "opponent"),
        }
    }
}

/// Final result of a duel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    HumanWins,
    OpponentWins,
    Tie,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::HumanWins => "human wins",
            Outcome::OpponentWins => "opponent wins",
            Outcome::Tie => "tie",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Session phases, advanced strictly left to right. Terminal states are
/// the run loop's return values, not phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    DetermineFirstMove,
    SelectDice,
    OpponentThrow,
    HumanThrow,
    Resolve,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Human.opponent(), Player::Opponent);
        assert_eq!(Player::Opponent.opponent(), Player::Human);
    }

    #[test]
    fn test_outcome_str() {
        assert_eq!(Outcome::HumanWins.as_str(), "human wins");
        assert_eq!(Outcome::OpponentWins.as_str(), "opponent wins");
        assert_eq!(Outcome::Tie.as_str(), "tie");
    }
}
