//! The table: roster, shoe, dealer and round flow.

extern crate alloc;

use core::cmp::Reverse;
use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use alloc::boxed::Box;
use alloc::format;
use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::bot::{BotPolicy, DealerAwarePolicy, ThresholdPolicy};
use crate::error::{ConfigError, JoinError};
use crate::evaluator::CardEvaluator;
use crate::event::Listeners;
use crate::options::TableOptions;
use crate::hand::{HandEvent, HandEventKind};
use crate::participant::{
    DEALER_ID, Participant, ParticipantEvent, ParticipantEventKind, ParticipantView,
};
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::sync::Mutex;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{LeaveReason, RoundEnd, TableEvent, TableEventKind, TablePhase};

use state::Round;

/// A blackjack table that runs rounds between players, bots and a dealer.
///
/// Every operation takes `&self`; state lives behind locks so a table can be
/// shared between threads. Observers registered with [`Table::subscribe`]
/// are called after the operation that produced the event has released the
/// table, so they may read the table but must not subscribe from inside a
/// callback.
pub struct Table {
    /// Cards in the shoe.
    pub shoe: Mutex<Shoe>,
    /// Table options.
    pub options: TableOptions,
    /// Current phase.
    pub state: Mutex<TablePhase>,
    /// Next player ID to assign.
    next_id: AtomicU8,
    /// Everyone who joined, in seating order.
    pub roster: Mutex<Vec<Participant>>,
    /// The dealer.
    pub dealer: Mutex<Participant>,
    /// Round bookkeeping.
    round: Mutex<Round>,
    /// Card evaluator shared by every hand at the table.
    evaluator: CardEvaluator,
    /// Table observers.
    listeners: Mutex<Listeners<TableEvent>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

/// Exclusive access to the whole table for the length of one operation.
///
/// Events are buffered and published once the locks are released.
pub(crate) struct Session<'a> {
    pub(crate) options: &'a TableOptions,
    pub(crate) phase: &'a mut TablePhase,
    pub(crate) round: &'a mut Round,
    pub(crate) roster: &'a mut Vec<Participant>,
    pub(crate) dealer: &'a mut Participant,
    pub(crate) shoe: &'a mut Shoe,
    pub(crate) rng: &'a mut ChaCha8Rng,
    pub(crate) events: Vec<TableEvent>,
}

pub(crate) fn seat(roster: &[Participant], player_id: u8) -> Option<&Participant> {
    roster.iter().find(|participant| participant.id() == player_id)
}

pub(crate) fn seat_mut(roster: &mut [Participant], player_id: u8) -> Option<&mut Participant> {
    roster
        .iter_mut()
        .find(|participant| participant.id() == player_id)
}

impl Table {
    /// Creates a table with the given seed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the options are inconsistent.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Table, TableOptions, TablePhase};
    ///
    /// let table = Table::new(TableOptions::default(), 42).unwrap();
    /// assert_eq!(table.phase(), TablePhase::WaitingForPlayers);
    /// assert_eq!(table.cards_remaining(), 6 * 52);
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::new(options.decks);
        shoe.shuffle(&mut rng);
        let evaluator = CardEvaluator::new(options.ace_value);

        Ok(Self {
            shoe: Mutex::new(shoe),
            options,
            state: Mutex::new(TablePhase::WaitingForPlayers),
            next_id: AtomicU8::new(0),
            roster: Mutex::new(Vec::new()),
            dealer: Mutex::new(Participant::dealer(evaluator)),
            round: Mutex::new(Round::default()),
            evaluator,
            listeners: Mutex::new(Listeners::new()),
            rng: Mutex::new(rng),
        })
    }

    /// Runs `operation` with every table lock held, then publishes the
    /// events it produced.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub(crate) fn session<T>(&self, operation: impl FnOnce(&mut Session<'_>) -> T) -> T {
        let mut phase = self.state.lock();
        let mut round = self.round.lock();
        let mut roster = self.roster.lock();
        let mut dealer = self.dealer.lock();
        let mut shoe = self.shoe.lock();
        let mut rng = self.rng.lock();

        let mut session = Session {
            options: &self.options,
            phase: &mut phase,
            round: &mut round,
            roster: &mut roster,
            dealer: &mut dealer,
            shoe: &mut shoe,
            rng: &mut rng,
            events: Vec::new(),
        };
        let output = operation(&mut session);
        let events = session.events;

        drop(rng);
        drop(shoe);
        drop(dealer);
        drop(roster);
        drop(round);
        drop(phase);

        self.publish(&events);
        output
    }

    fn publish(&self, events: &[TableEvent]) {
        if events.is_empty() {
            return;
        }
        let mut listeners = self.listeners.lock();
        for event in events {
            listeners.emit(event);
        }
    }

    /// Seats a human player.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if players can no longer join, the table is full,
    /// the name is blank, or `money` is outside `min_bet..=max_money`.
    pub fn join_human(&self, name: &str, money: usize) -> Result<u8, JoinError> {
        self.session(|session| {
            session.check_join(money)?;
            let participant = Participant::human(self.peek_id(), name, money, self.evaluator)?;
            Ok(session.admit(participant, &self.next_id))
        })
    }

    /// Seats a bot driven by `policy`.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Same as [`Table::join_human`].
    pub fn join_bot(
        &self,
        name: &str,
        money: usize,
        policy: Box<dyn BotPolicy>,
    ) -> Result<u8, JoinError> {
        self.session(|session| {
            session.check_join(money)?;
            let participant =
                Participant::bot(self.peek_id(), name, money, self.evaluator, policy)?;
            Ok(session.admit(participant, &self.next_id))
        })
    }

    /// Seats a bot named `Bot<n>` holding `bot_money`, with a policy picked
    /// at random between [`DealerAwarePolicy`] and [`ThresholdPolicy`].
    ///
    /// # Errors
    ///
    /// Same as [`Table::join_human`].
    pub fn join_random_bot(&self) -> Result<u8, JoinError> {
        self.session(|session| {
            let money = self.options.bot_money;
            session.check_join(money)?;

            let policy: Box<dyn BotPolicy> = if session.rng.random_bool(0.5) {
                Box::new(DealerAwarePolicy::new())
            } else {
                Box::new(ThresholdPolicy::new(self.options.bot_stand_probability))
            };
            let bots = session
                .roster
                .iter()
                .filter(|participant| participant.is_automated())
                .count();
            let name = format!("Bot{}", bots + 1);

            let participant =
                Participant::bot(self.peek_id(), &name, money, self.evaluator, policy)?;
            Ok(session.admit(participant, &self.next_id))
        })
    }

    fn peek_id(&self) -> u8 {
        self.next_id.load(Ordering::SeqCst)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> TablePhase {
        *self.state.lock()
    }

    /// Returns the round number; 0 before the first round.
    pub fn round_number(&self) -> u32 {
        self.round.lock().number
    }

    /// Returns the ID of the player holding the turn.
    pub fn current_participant(&self) -> Option<u8> {
        self.round.lock().current
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.lock().len()
    }

    /// Returns the players still in the game, in seating order.
    pub fn participants(&self) -> Vec<ParticipantView> {
        let round = self.round.lock();
        let roster = self.roster.lock();
        round
            .still_playing
            .iter()
            .filter_map(|&player_id| seat(&roster, player_id))
            .map(Participant::view)
            .collect()
    }

    /// Returns everyone who joined, including players who left the game.
    pub fn roster(&self) -> Vec<ParticipantView> {
        self.roster.lock().iter().map(Participant::view).collect()
    }

    /// Returns one participant, or `None` if the ID is unknown.
    pub fn participant(&self, player_id: u8) -> Option<ParticipantView> {
        seat(&self.roster.lock(), player_id).map(Participant::view)
    }

    /// Returns the dealer.
    pub fn dealer_view(&self) -> ParticipantView {
        self.dealer.lock().view()
    }

    /// Returns every joined player ordered by money, richest first.
    pub fn standings(&self) -> Vec<ParticipantView> {
        let mut standings = self.roster();
        standings.sort_by_key(|view| Reverse(view.money));
        standings
    }

    /// Returns the results of the last settled round.
    pub fn last_result(&self) -> Option<RoundResult> {
        self.round.lock().last_result.clone()
    }

    /// Registers an observer for one kind of table event.
    pub fn subscribe<F>(&self, kind: TableEventKind, callback: F)
    where
        F: FnMut(&TableEvent) + Send + 'static,
    {
        self.listeners.lock().subscribe(kind, callback);
    }

    /// Registers an observer for one kind of change to a player.
    ///
    /// The callback runs while the table is locked and must not call back
    /// into the table. Returns `false` if the ID is unknown.
    pub fn subscribe_participant<F>(
        &self,
        player_id: u8,
        kind: ParticipantEventKind,
        callback: F,
    ) -> bool
    where
        F: FnMut(&ParticipantEvent) + Send + 'static,
    {
        let mut roster = self.roster.lock();
        seat_mut(&mut roster, player_id).is_some_and(|participant| {
            participant.subscribe(kind, callback);
            true
        })
    }

    /// Registers an observer for one kind of change to a hand.
    ///
    /// [`DEALER_ID`] selects the dealer's hand. Like
    /// [`Table::subscribe_participant`], the callback runs while the table
    /// is locked. Returns `false` if the ID is unknown.
    pub fn subscribe_hand<F>(&self, player_id: u8, kind: HandEventKind, callback: F) -> bool
    where
        F: FnMut(&HandEvent) + Send + 'static,
    {
        if player_id == DEALER_ID {
            self.dealer.lock().subscribe_hand(kind, callback);
            return true;
        }
        let mut roster = self.roster.lock();
        seat_mut(&mut roster, player_id).is_some_and(|participant| {
            participant.subscribe_hand(kind, callback);
            true
        })
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("options", &self.options)
            .field("phase", &self.phase())
            .field("round", &self.round_number())
            .finish_non_exhaustive()
    }
}

impl Session<'_> {
    fn check_join(&self, money: usize) -> Result<(), JoinError> {
        if *self.phase != TablePhase::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }
        let seats = self.options.max_players.min(usize::from(DEALER_ID));
        if self.roster.len() >= seats {
            return Err(JoinError::TableFull);
        }
        if money < self.options.min_bet || money > self.options.max_money {
            return Err(JoinError::InvalidMoney);
        }
        Ok(())
    }

    fn admit(&mut self, participant: Participant, next_id: &AtomicU8) -> u8 {
        let player_id = next_id.fetch_add(1, Ordering::SeqCst);
        log::info!("{} joined as player {player_id}", participant.name());
        self.roster.push(participant);
        self.events.push(TableEvent::PlayerJoined { player_id });
        player_id
    }

    /// Drops a player from the round list. The player stays in the roster.
    pub(crate) fn leave_round(&mut self, player_id: u8, reason: LeaveReason) {
        self.round.still_playing.retain(|&id| id != player_id);
        log::info!("player {player_id} left the game: {reason:?}");
        self.events.push(TableEvent::PlayerLeft { player_id, reason });
    }

    pub(crate) fn end_game(&mut self) {
        *self.phase = TablePhase::GameOver;
        self.round.current = None;
        log::info!("game over after round {}", self.round.number);
        self.events.push(TableEvent::GameOver);
    }
}
