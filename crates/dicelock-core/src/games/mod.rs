//! Dice definitions and outcome resolution.

mod dice;
mod duel;

pub use dice::{parse_dice, DiceError, Die};
pub use duel::judge;
