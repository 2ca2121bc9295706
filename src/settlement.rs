//! Outcome and payout rules.

use crate::evaluator::BLACKJACK_VALUE;
use crate::options::{RoundingMode, TableOptions};
use crate::result::Outcome;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Compares a player's hand value with the dealer's.
///
/// A busted player loses even if the dealer busts too.
///
/// ```
/// use bjtable::{Outcome, settlement};
///
/// assert_eq!(settlement::outcome(22, 25), Outcome::Lose);
/// assert_eq!(settlement::outcome(15, 24), Outcome::Win);
/// assert_eq!(settlement::outcome(18, 18), Outcome::Push);
/// ```
#[must_use]
pub const fn outcome(player_value: u32, dealer_value: u32) -> Outcome {
    if player_value > BLACKJACK_VALUE {
        Outcome::Lose
    } else if dealer_value > BLACKJACK_VALUE || player_value > dealer_value {
        Outcome::Win
    } else if player_value == dealer_value {
        Outcome::Push
    } else {
        Outcome::Lose
    }
}

/// Returns the amount credited for `outcome` on a stake of `bet`.
///
/// Wins pay the stake plus `win_ratio` times the stake, blackjacks the stake
/// plus `blackjack_ratio` times the stake, pushes return the stake and
/// losses pay nothing.
#[must_use]
pub fn payout(outcome: Outcome, bet: usize, options: &TableOptions) -> usize {
    let ratio = match outcome {
        Outcome::Win => options.win_ratio,
        Outcome::Blackjack => options.blackjack_ratio,
        Outcome::Push => return bet,
        Outcome::Lose => return 0,
    };

    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for monetary values"
    )]
    let amount = (1.0 + ratio) * bet as f64;
    round_amount(amount, options.rounding)
}
