//! Dice parsing and validation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing dice specifications
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DiceError {
    #[error("invalid dice configuration {spec:?}: use a comma-separated list of integers")]
    MalformedSpec { spec: String },

    #[error("dice {spec:?} has {count} face(s), at least two are required")]
    TooFewFaces { spec: String, count: usize },
}

/// An ordered, immutable list of face values, length >= 2.
///
/// Faces may repeat and need not be sequential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Die(Vec<i32>);

impl Die {
    /// All face values in definition order
    pub fn faces(&self) -> &[i32] {
        &self.0
    }

    /// Face value at `index`; panics if out of range. Callers index with a
    /// value sampled over `0..len()`.
    pub fn face(&self, index: usize) -> i32 {
        self.0[index]
    }

    /// Number of faces
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromStr for Die {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let faces = s
            .split(',')
            .map(|token| token.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| DiceError::MalformedSpec {
                spec: s.to_string(),
            })?;

        if faces.len() < 2 {
            return Err(DiceError::TooFewFaces {
                spec: s.to_string(),
                count: faces.len(),
            });
        }

        Ok(Self(faces))
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{face}")?;
        }
        Ok(())
    }
}

/// Parse every dice specification or fail on the first bad one
pub fn parse_dice<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Die>, DiceError> {
    specs.iter().map(|spec| spec.as_ref().parse()).collect()
}
