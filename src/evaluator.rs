//! Card point values.

use crate::card::{Card, Rank};

/// The hand value that wins outright; anything above it is a bust.
pub const BLACKJACK_VALUE: u32 = 21;

/// The fixed value an ace is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceValue {
    /// Ace counts as 1.
    One,
    /// Ace counts as 11.
    #[default]
    Eleven,
}

impl AceValue {
    /// Returns the point value of an ace under this rule.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Eleven => 11,
        }
    }
}

/// Maps cards to blackjack points.
///
/// Numeric cards are worth their face value, jacks, queens and kings are
/// worth 10, and an ace is worth the configured [`AceValue`]. Unlike casino
/// rules the ace does not switch value mid-hand.
///
/// ```
/// use bjtable::{AceValue, Card, CardEvaluator, Rank, Suit};
///
/// let evaluator = CardEvaluator::new(AceValue::One);
/// assert_eq!(evaluator.evaluate(Card::new(Rank::Ace, Suit::Spades)), 1);
/// assert_eq!(evaluator.evaluate(Card::new(Rank::Queen, Suit::Hearts)), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardEvaluator {
    ace: AceValue,
}

impl CardEvaluator {
    /// Creates an evaluator with the given ace rule.
    #[must_use]
    pub const fn new(ace: AceValue) -> Self {
        Self { ace }
    }

    /// Returns the point value of a card.
    #[must_use]
    pub const fn evaluate(self, card: Card) -> u8 {
        match card.rank {
            Rank::Ace => self.ace.value(),
            Rank::Jack | Rank::Queen | Rank::King => 10,
            rank => rank.number(),
        }
    }
}
