//! Kerning pairs

use crate::foundation::math::FixedVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Offset applied between a glyph and the character that follows it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kerning {
    /// Character this adjustment applies before
    pub next_character: char,
    /// Adjustment in 26.6 units
    pub amount: FixedVec2,
}

impl Kerning {
    /// Create a new kerning pair
    pub fn new(next_character: char, amount: FixedVec2) -> Self {
        Self {
            next_character,
            amount,
        }
    }
}

impl fmt::Display for Kerning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Character: {}, Amount: <{}, {}>",
            self.next_character, self.amount.x, self.amount.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kerning_display() {
        let kerning = Kerning::new('V', FixedVec2::new(-64, 0));
        assert_eq!(kerning.to_string(), "Character: V, Amount: <-64, 0>");
    }
}
