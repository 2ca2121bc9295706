extern crate alloc;

use alloc::vec::Vec;

use rand::RngCore;

use crate::bot::{BotAction, BotView};
use crate::card::Card;
use crate::error::{ActionError, LedgerError};
use crate::shoe::Shoe;

use super::{Participant, Role};

impl Participant {
    /// Draws one card.
    ///
    /// Returns whether the participant can play again: a bust forces a
    /// stand and returns `false`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::DeckExhausted`] if the shoe is empty; nothing
    /// changes.
    pub fn hit(&mut self, shoe: &mut Shoe) -> Result<bool, ActionError> {
        self.take_card(shoe)?;

        if self.is_busted() {
            return Ok(self.stand());
        }
        Ok(true)
    }

    /// Doubles the stake, draws exactly one card and stands.
    ///
    /// Always returns `false` on success.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotAPlayer`] for the dealer,
    /// [`ActionError::InsufficientFunds`] if the money held is less than the
    /// stake, or [`ActionError::DeckExhausted`] if the shoe is empty. In
    /// every case nothing changes.
    pub fn double_hit(&mut self, shoe: &mut Shoe) -> Result<bool, ActionError> {
        let ledger = self.ledger.ok_or(ActionError::NotAPlayer)?;
        if !ledger.can_double() {
            return Err(ActionError::InsufficientFunds);
        }

        self.take_card(shoe)?;
        self.update_ledger(super::Ledger::double_bet)?;
        Ok(self.stand())
    }

    /// Ends the participant's turn for this round. Always returns `false`.
    pub fn stand(&mut self) -> bool {
        self.set_has_turn(false);
        self.set_can_act(false);
        false
    }

    /// Stakes `amount`, moving it out of the money held.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NotAPlayer`] for the dealer or
    /// [`LedgerError::BetExceedsMoney`] if `amount` is more than the money
    /// held. Neither the bet nor the money changes on error.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), LedgerError> {
        self.update_ledger(|ledger| ledger.place_bet(amount))
    }

    /// Draws until the hand is worth at least `threshold`.
    ///
    /// Every card is worth at least 1, so the loop ends after at most
    /// `threshold` draws. Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotDealer`] for anyone but the dealer and
    /// [`ActionError::DeckExhausted`] if the shoe runs out before the
    /// threshold is reached. Cards drawn before that stay in the hand.
    pub fn take_cards_until(
        &mut self,
        shoe: &mut Shoe,
        threshold: u32,
    ) -> Result<Vec<Card>, ActionError> {
        if !self.is_dealer() {
            return Err(ActionError::NotDealer);
        }

        let mut drawn = Vec::new();
        while self.hand_value() < threshold {
            drawn.push(self.take_card(shoe)?);
        }
        Ok(drawn)
    }

    /// Asks the bot policy for one decision and applies it.
    ///
    /// Returns whether the bot can play again. A double the bot cannot
    /// afford is played as a hit.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NotAutomated`] if no policy drives this
    /// participant, or [`ActionError::DeckExhausted`] if the shoe is empty.
    pub fn play_automated(
        &mut self,
        shoe: &mut Shoe,
        dealer_value: u32,
        rng: &mut dyn RngCore,
    ) -> Result<bool, ActionError> {
        let view = BotView {
            hand_value: self.hand_value(),
            dealer_value,
            money: self.money(),
            bet: self.bet(),
        };

        let Role::Automated(policy) = &mut self.role else {
            return Err(ActionError::NotAutomated);
        };
        let action = policy.decide(&view, rng);
        log::debug!("{} ({}) decides {:?}", self.name, view.hand_value, action);

        match action {
            BotAction::Hit => self.hit(shoe),
            BotAction::Stand => Ok(self.stand()),
            BotAction::Double if view.can_double() => self.double_hit(shoe),
            BotAction::Double => {
                log::warn!("{} cannot afford to double, hitting instead", self.name);
                self.hit(shoe)
            }
        }
    }
}
