//! Error types for table operations.

use thiserror::Error;

/// Errors raised by the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors raised by a bet ledger. The ledger is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The bet would exceed the money held.
    #[error("bet exceeds the money held")]
    BetExceedsMoney,
    /// Not enough money for this operation.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// The amount does not fit in the ledger.
    #[error("amount overflows the ledger")]
    Overflow,
    /// The participant has no ledger (the dealer does not bet).
    #[error("participant does not bet")]
    NotAPlayer,
}

/// Errors that can occur when joining the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Invalid game state for joining.
    #[error("invalid game state for joining")]
    InvalidState,
    /// The name is empty.
    #[error("name is empty")]
    EmptyName,
    /// The starting money is outside the allowed range.
    #[error("starting money is outside the allowed range")]
    InvalidMoney,
    /// The table is full.
    #[error("the table is full")]
    TableFull,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Player not found in the current round.
    #[error("player not found")]
    PlayerNotFound,
    /// The player already placed a bet this round.
    #[error("bet already placed")]
    AlreadyPlaced,
    /// Bet amount is outside the table limits.
    #[error("bet amount is outside the table limits")]
    OutOfRange,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Too many invalid bets; the player left the round.
    #[error("too many invalid bets, player left the round")]
    AttemptsExhausted,
    /// The ledger rejected the bet.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Some players have not placed their bet yet.
    #[error("some players have not placed their bet")]
    PendingBets,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

impl From<ShoeError> for DealError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::Empty => Self::NotEnoughCards,
        }
    }
}

/// Errors that can occur during participant actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Only players can do this.
    #[error("participant does not bet")]
    NotAPlayer,
    /// Only the dealer can do this.
    #[error("participant is not the dealer")]
    NotDealer,
    /// Only automated participants can do this.
    #[error("participant is not automated")]
    NotAutomated,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    DeckExhausted,
}

impl From<ShoeError> for ActionError {
    fn from(err: ShoeError) -> Self {
        match err {
            ShoeError::Empty => Self::DeckExhausted,
        }
    }
}

impl From<LedgerError> for ActionError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotAPlayer => Self::NotAPlayer,
            LedgerError::BetExceedsMoney
            | LedgerError::InsufficientFunds
            | LedgerError::Overflow => Self::InsufficientFunds,
        }
    }
}

/// Errors that can occur when starting or concluding a game or round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// Not enough players have joined.
    #[error("not enough players")]
    NotEnoughPlayers,
    /// Not enough cards in the shoe for another round.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors in a table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The shoe must hold at least one deck.
    #[error("the shoe needs at least one deck")]
    NoDecks,
    /// Player limits are empty, inverted, or above 255.
    #[error("invalid player limits")]
    PlayerLimits,
    /// Bet limits are empty, zero, or inverted.
    #[error("invalid bet limits")]
    BetLimits,
    /// A payout ratio is negative or not finite.
    #[error("invalid payout ratio")]
    PayoutRatio,
    /// Players must receive at least one initial card.
    #[error("players need at least one initial card")]
    InitialCards,
    /// At least one bet attempt is required.
    #[error("at least one bet attempt is required")]
    BetAttempts,
    /// The bot stand probability is outside `0.0..=1.0`.
    #[error("bot stand probability must be within 0 and 1")]
    Probability,
}
