//! Table state and notification types.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::event::Event;
use crate::result::{RoundResult, SeatResult};

/// Table phase.
///
/// Dealing and settlement happen inside [`Table::deal`](super::Table::deal)
/// and the last player action, so they never show up as phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablePhase {
    /// Players can join.
    WaitingForPlayers,
    /// Ready to start the next round.
    RoundStart,
    /// Collecting bets.
    Betting,
    /// Waiting for player actions.
    PlayerTurns,
    /// The dealer draws.
    DealerTurn,
    /// The round is settled; waiting for players to continue or leave.
    RoundOver,
    /// No further round can be played.
    GameOver,
}

/// Why a player left the round list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveReason {
    /// Too many invalid bets.
    BetAttempts,
    /// Less money than the minimum bet.
    Broke,
    /// Chose not to play another round.
    Declined,
}

/// What happens after a round is concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// Another round can be started.
    Continue,
    /// The game is over.
    Terminate,
}

/// A notification for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    /// A player joined the roster.
    PlayerJoined {
        /// The new player.
        player_id: u8,
    },
    /// The game started and the shoe was shuffled.
    GameStarted,
    /// A round started.
    RoundStarted {
        /// The round number.
        round: u32,
    },
    /// A bet was accepted.
    BetPlaced {
        /// The player.
        player_id: u8,
        /// The stake.
        amount: usize,
    },
    /// A bet was rejected.
    InvalidBet {
        /// The player.
        player_id: u8,
        /// Invalid bets left before the player leaves the round.
        attempts_left: u8,
    },
    /// A player left the round list.
    PlayerLeft {
        /// The player.
        player_id: u8,
        /// Why the player left.
        reason: LeaveReason,
    },
    /// A human player holds the turn.
    AwaitingAction {
        /// The player.
        player_id: u8,
    },
    /// A player tried to double without enough money.
    InsufficientFunds {
        /// The player.
        player_id: u8,
    },
    /// The shoe ran out of cards.
    DeckExhausted {
        /// The player drawing, or `None` for the dealer.
        player_id: Option<u8>,
    },
    /// A player had 21 on the initial deal and was paid.
    BlackjackPaid {
        /// The player.
        player_id: u8,
        /// Amount credited.
        payout: usize,
    },
    /// The dealer finished drawing.
    DealerPlayed {
        /// The dealer's final value.
        value: u32,
    },
    /// A round was settled.
    RoundEnded {
        /// The round number.
        round: u32,
    },
    /// A round was abandoned and stakes were refunded.
    RoundAborted {
        /// The round number.
        round: u32,
    },
    /// The game is over.
    GameOver,
}

/// Discriminant of [`TableEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableEventKind {
    /// See [`TableEvent::PlayerJoined`].
    PlayerJoined,
    /// See [`TableEvent::GameStarted`].
    GameStarted,
    /// See [`TableEvent::RoundStarted`].
    RoundStarted,
    /// See [`TableEvent::BetPlaced`].
    BetPlaced,
    /// See [`TableEvent::InvalidBet`].
    InvalidBet,
    /// See [`TableEvent::PlayerLeft`].
    PlayerLeft,
    /// See [`TableEvent::AwaitingAction`].
    AwaitingAction,
    /// See [`TableEvent::InsufficientFunds`].
    InsufficientFunds,
    /// See [`TableEvent::DeckExhausted`].
    DeckExhausted,
    /// See [`TableEvent::BlackjackPaid`].
    BlackjackPaid,
    /// See [`TableEvent::DealerPlayed`].
    DealerPlayed,
    /// See [`TableEvent::RoundEnded`].
    RoundEnded,
    /// See [`TableEvent::RoundAborted`].
    RoundAborted,
    /// See [`TableEvent::GameOver`].
    GameOver,
}

impl Event for TableEvent {
    type Kind = TableEventKind;

    fn kind(&self) -> TableEventKind {
        match self {
            Self::PlayerJoined { .. } => TableEventKind::PlayerJoined,
            Self::GameStarted => TableEventKind::GameStarted,
            Self::RoundStarted { .. } => TableEventKind::RoundStarted,
            Self::BetPlaced { .. } => TableEventKind::BetPlaced,
            Self::InvalidBet { .. } => TableEventKind::InvalidBet,
            Self::PlayerLeft { .. } => TableEventKind::PlayerLeft,
            Self::AwaitingAction { .. } => TableEventKind::AwaitingAction,
            Self::InsufficientFunds { .. } => TableEventKind::InsufficientFunds,
            Self::DeckExhausted { .. } => TableEventKind::DeckExhausted,
            Self::BlackjackPaid { .. } => TableEventKind::BlackjackPaid,
            Self::DealerPlayed { .. } => TableEventKind::DealerPlayed,
            Self::RoundEnded { .. } => TableEventKind::RoundEnded,
            Self::RoundAborted { .. } => TableEventKind::RoundAborted,
            Self::GameOver => TableEventKind::GameOver,
        }
    }
}

/// Round-scoped bookkeeping.
#[derive(Debug, Default)]
pub(crate) struct Round {
    /// Round number, starting at 1.
    pub(crate) number: u32,
    /// IDs still in the game, in seating order.
    pub(crate) still_playing: Vec<u8>,
    /// Index of the next entry of `still_playing` to consider.
    pub(crate) cursor: usize,
    /// The participant holding the turn.
    pub(crate) current: Option<u8>,
    /// Invalid bets per player this round.
    pub(crate) bet_attempts: HashMap<u8, u8>,
    /// Players whose bet was accepted this round.
    pub(crate) bets_placed: Vec<u8>,
    /// Results settled so far this round.
    pub(crate) seats: Vec<SeatResult>,
    /// Results of the last settled round.
    pub(crate) last_result: Option<RoundResult>,
}

impl Round {
    /// Clears per-round state and bumps the round number.
    pub(crate) fn begin(&mut self) {
        self.number += 1;
        self.cursor = 0;
        self.current = None;
        self.bet_attempts.clear();
        self.bets_placed.clear();
        self.seats.clear();
    }

    pub(crate) fn is_playing(&self, player_id: u8) -> bool {
        self.still_playing.contains(&player_id)
    }
}
