use crate::error::LedgerError;

/// A player's money and current stake.
///
/// Money and bet are unsigned, so neither can go negative. Every operation
/// either applies completely or returns an error and leaves the ledger as it
/// was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ledger {
    money: usize,
    bet: usize,
}

impl Ledger {
    /// Creates a ledger holding `money` and no stake.
    #[must_use]
    pub const fn new(money: usize) -> Self {
        Self { money, bet: 0 }
    }

    /// Returns the money not currently staked.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Returns the current stake.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Replaces the money held.
    pub const fn set_money(&mut self, money: usize) {
        self.money = money;
    }

    /// Adds `amount` to the money held.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the sum does not fit.
    pub fn increase_money(&mut self, amount: usize) -> Result<(), LedgerError> {
        self.money = self
            .money
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Removes `amount` from the money held.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if less than `amount` is held.
    pub fn decrease_money(&mut self, amount: usize) -> Result<(), LedgerError> {
        self.money = self
            .money
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds)?;
        Ok(())
    }

    /// Replaces the stake without moving money.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BetExceedsMoney`] if `bet` is more than the
    /// money held.
    pub const fn set_bet(&mut self, bet: usize) -> Result<(), LedgerError> {
        if bet > self.money {
            return Err(LedgerError::BetExceedsMoney);
        }
        self.bet = bet;
        Ok(())
    }

    /// Stakes `amount`, moving it out of the money held.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::BetExceedsMoney`] if `amount` is more than the
    /// money held.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), LedgerError> {
        self.set_bet(amount)?;
        self.money -= amount;
        Ok(())
    }

    /// Returns whether the stake can be doubled.
    #[must_use]
    pub const fn can_double(&self) -> bool {
        self.money >= self.bet
    }

    /// Doubles the stake, moving the extra amount out of the money held.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientFunds`] if the money held is less
    /// than the current stake.
    pub fn double_bet(&mut self) -> Result<(), LedgerError> {
        if !self.can_double() {
            return Err(LedgerError::InsufficientFunds);
        }
        let doubled = self.bet.checked_mul(2).ok_or(LedgerError::Overflow)?;
        self.money -= self.bet;
        self.bet = doubled;
        Ok(())
    }

    /// Credits `payout` and clears the stake.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the payout does not fit.
    pub fn settle(&mut self, payout: usize) -> Result<(), LedgerError> {
        self.increase_money(payout)?;
        self.bet = 0;
        Ok(())
    }

    /// Returns the stake to the money held.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the sum does not fit.
    pub fn refund(&mut self) -> Result<(), LedgerError> {
        self.settle(self.bet)
    }
}
