use rand::{Rng, RngCore};

use super::{BotAction, BotPolicy, BotView};

/// Picks hit, double or stand with equal probability.
///
/// A double it cannot afford becomes a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniformRandomPolicy;

impl UniformRandomPolicy {
    /// Creates the policy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BotPolicy for UniformRandomPolicy {
    fn decide(&mut self, view: &BotView, rng: &mut dyn RngCore) -> BotAction {
        match rng.random_range(0..3) {
            0 => BotAction::Hit,
            1 if view.can_double() => BotAction::Double,
            1 => BotAction::Hit,
            _ => BotAction::Stand,
        }
    }
}
