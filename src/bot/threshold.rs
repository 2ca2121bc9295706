use rand::{Rng, RngCore};

use super::{BotAction, BotPolicy, BotView, STAND_VALUE};

/// Hand value at or below which a hit can never bust.
const SAFE_HIT_VALUE: u32 = 11;

/// Stands on 18 or more, hits on 11 or less, and in between stands with a
/// fixed probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPolicy {
    stand_probability: f64,
}

impl ThresholdPolicy {
    /// Creates the policy. The probability is clamped to `0.0..=1.0`; NaN
    /// counts as 0.
    #[must_use]
    pub const fn new(stand_probability: f64) -> Self {
        let stand_probability = if stand_probability.is_nan() {
            0.0
        } else {
            stand_probability.clamp(0.0, 1.0)
        };
        Self { stand_probability }
    }

    /// Returns the probability of standing between 12 and 17.
    #[must_use]
    pub const fn stand_probability(&self) -> f64 {
        self.stand_probability
    }
}

impl BotPolicy for ThresholdPolicy {
    fn decide(&mut self, view: &BotView, rng: &mut dyn RngCore) -> BotAction {
        match view.hand_value {
            value if value >= STAND_VALUE => BotAction::Stand,
            value if value <= SAFE_HIT_VALUE => BotAction::Hit,
            _ if rng.random_bool(self.stand_probability) => BotAction::Stand,
            _ => BotAction::Hit,
        }
    }
}
