//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

/// Result of a player's hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses (player busts or dealer has the higher value).
    Lose,
    /// Push (tie).
    Push,
    /// Player had 21 on the initial deal and was paid before play.
    Blackjack,
}

/// Result for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatResult {
    /// The player ID.
    pub player_id: u8,
    /// The outcome of the hand.
    pub outcome: Outcome,
    /// The stake that was settled.
    pub bet: usize,
    /// Amount credited to the player (stake included).
    pub payout: usize,
    /// The player's hand value.
    pub player_value: u32,
    /// The dealer's hand value when the player was settled.
    pub dealer_value: u32,
}

impl SeatResult {
    /// Returns the profit (positive) or loss (negative) of the hand.
    #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
    #[must_use]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

/// Result of a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The round number, starting at 1.
    pub round: u32,
    /// Results for each player, in seating order.
    pub seats: Vec<SeatResult>,
    /// The dealer's final hand value.
    pub dealer_value: u32,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns the result of the specified player.
    #[must_use]
    pub fn seat(&self, player_id: u8) -> Option<&SeatResult> {
        self.seats.iter().find(|seat| seat.player_id == player_id)
    }
}
