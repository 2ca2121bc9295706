//! A multi-player blackjack table with optional `no_std` support.
//!
//! The crate provides a [`Table`] that runs rounds between human players,
//! bots and a dealer: betting, the initial deal, player turns, dealer play
//! and settlement. Bots pick their moves through a [`BotPolicy`]. Observers
//! subscribe to typed events on the table, on participants and on hands.
//!
//! # Example
//!
//! ```
//! use bjtable::{Table, TableOptions, TablePhase};
//!
//! let table = Table::new(TableOptions::default(), 42).unwrap();
//! let alice = table.join_human("Alice", 500).unwrap();
//! table.join_random_bot().unwrap();
//!
//! table.start_game().unwrap();
//! table.start_round().unwrap();
//! table.place_bet(alice, 10).unwrap();
//! table.deal().unwrap();
//!
//! while table.phase() == TablePhase::PlayerTurns {
//!     let id = table.current_participant().unwrap();
//!     table.stand(id).unwrap();
//! }
//! assert_eq!(table.phase(), TablePhase::RoundOver);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bot;
pub mod card;
pub mod error;
pub mod evaluator;
pub mod event;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod settlement;
pub mod shoe;
mod sync;
pub mod table;

// Re-export main types
pub use bot::{BotAction, BotPolicy, BotView, DealerAwarePolicy, ThresholdPolicy, UniformRandomPolicy};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{
    ActionError, BetError, ConfigError, DealError, JoinError, LedgerError, RoundError, ShoeError,
};
pub use evaluator::{AceValue, BLACKJACK_VALUE, CardEvaluator};
pub use event::{Event, Listeners};
pub use hand::{Hand, HandEvent, HandEventKind};
pub use options::{RoundingMode, TableOptions};
pub use participant::{
    DEALER_ID, Ledger, Participant, ParticipantEvent, ParticipantEventKind, ParticipantView, Role,
    RoleKind,
};
pub use result::{Outcome, RoundResult, SeatResult};
pub use shoe::Shoe;
pub use table::{LeaveReason, RoundEnd, Table, TableEvent, TableEventKind, TablePhase};
