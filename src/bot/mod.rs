//! Decision policies for automated players.
//!
//! A [`BotPolicy`] looks at a [`BotView`] and picks a [`BotAction`]; the
//! participant applies it. The table never knows which policy a bot uses.

use core::fmt;

use rand::RngCore;

mod dealer_aware;
mod threshold;
mod uniform;

pub use dealer_aware::DealerAwarePolicy;
pub use threshold::ThresholdPolicy;
pub use uniform::UniformRandomPolicy;

/// Hand value at or above which the built-in policies always stand.
pub const STAND_VALUE: u32 = 18;

/// An action a bot can take on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotAction {
    /// Draw a card.
    Hit,
    /// End the turn.
    Stand,
    /// Double the stake, draw one card and end the turn.
    Double,
}

/// What a bot knows when it decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotView {
    /// The bot's hand value.
    pub hand_value: u32,
    /// The value of the dealer's visible cards.
    pub dealer_value: u32,
    /// Money not staked.
    pub money: usize,
    /// Current stake.
    pub bet: usize,
}

impl BotView {
    /// Returns whether the bot can afford to double.
    #[must_use]
    pub const fn can_double(&self) -> bool {
        self.money >= self.bet
    }
}

/// A strategy for an automated player.
pub trait BotPolicy: fmt::Debug + Send {
    /// Picks the next action. Randomness must come from `rng` only.
    fn decide(&mut self, view: &BotView, rng: &mut dyn RngCore) -> BotAction;
}
