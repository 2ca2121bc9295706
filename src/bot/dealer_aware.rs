use rand::RngCore;

use super::{BotAction, BotPolicy, BotView, STAND_VALUE};

/// The policy doubles when the dealer shows this value or less.
const WEAK_DEALER_VALUE: u32 = 9;

/// A basic-strategy style policy that reads the dealer's visible value.
///
/// Stands on 18 or more, doubles on 10 or 11 against a dealer showing 9 or
/// less, and hits otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DealerAwarePolicy;

impl DealerAwarePolicy {
    /// Creates the policy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BotPolicy for DealerAwarePolicy {
    fn decide(&mut self, view: &BotView, _rng: &mut dyn RngCore) -> BotAction {
        match view.hand_value {
            value if value >= STAND_VALUE => BotAction::Stand,
            10 | 11 if view.dealer_value <= WEAK_DEALER_VALUE => BotAction::Double,
            _ => BotAction::Hit,
        }
    }
}
