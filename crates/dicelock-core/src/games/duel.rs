//! Outcome resolution for a pair of thrown faces.

use crate::protocol::Outcome;

/// Compare the thrown faces; the strictly greater face wins.
pub fn judge(human_face: i32, opponent_face: i32) -> Outcome {
    if human_face > opponent_face {
        Outcome::HumanWins
    } else if opponent_face > human_face {
        Outcome::OpponentWins
    } else {
        Outcome::Tie
    }
}
