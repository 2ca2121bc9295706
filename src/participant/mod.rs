//! Participants: players, bots and the dealer.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::bot::BotPolicy;
use crate::card::Card;
use crate::error::{JoinError, LedgerError, ShoeError};
use crate::evaluator::{BLACKJACK_VALUE, CardEvaluator};
use crate::event::{Event, Listeners};
use crate::hand::{Hand, HandEvent, HandEventKind};
use crate::shoe::Shoe;

mod actions;
mod ledger;

pub use ledger::Ledger;

/// ID given to the dealer.
pub const DEALER_ID: u8 = u8::MAX;

/// Who decides a participant's actions.
#[derive(Debug)]
pub enum Role {
    /// A person; actions arrive through the table's entry points.
    Human,
    /// The house; draws to the threshold and never bets.
    Dealer,
    /// A bot driven by its policy.
    Automated(Box<dyn BotPolicy>),
}

impl Role {
    /// Returns the payload-free kind of this role.
    #[must_use]
    pub const fn kind(&self) -> RoleKind {
        match self {
            Self::Human => RoleKind::Human,
            Self::Dealer => RoleKind::Dealer,
            Self::Automated(_) => RoleKind::Automated,
        }
    }
}

/// Discriminant of [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    /// See [`Role::Human`].
    Human,
    /// See [`Role::Dealer`].
    Dealer,
    /// See [`Role::Automated`].
    Automated,
}

/// A change to a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantEvent {
    /// Whether the participant may still act changed.
    CanActChanged(bool),
    /// The participant gained or lost the turn.
    TurnChanged(bool),
    /// The hand value changed.
    HandValueChanged(u32),
    /// The money held changed.
    MoneyChanged(usize),
    /// The stake changed.
    BetChanged(usize),
}

/// Discriminant of [`ParticipantEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantEventKind {
    /// See [`ParticipantEvent::CanActChanged`].
    CanActChanged,
    /// See [`ParticipantEvent::TurnChanged`].
    TurnChanged,
    /// See [`ParticipantEvent::HandValueChanged`].
    HandValueChanged,
    /// See [`ParticipantEvent::MoneyChanged`].
    MoneyChanged,
    /// See [`ParticipantEvent::BetChanged`].
    BetChanged,
}

impl Event for ParticipantEvent {
    type Kind = ParticipantEventKind;

    fn kind(&self) -> ParticipantEventKind {
        match self {
            Self::CanActChanged(_) => ParticipantEventKind::CanActChanged,
            Self::TurnChanged(_) => ParticipantEventKind::TurnChanged,
            Self::HandValueChanged(_) => ParticipantEventKind::HandValueChanged,
            Self::MoneyChanged(_) => ParticipantEventKind::MoneyChanged,
            Self::BetChanged(_) => ParticipantEventKind::BetChanged,
        }
    }
}

/// A read-only copy of a participant's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantView {
    /// The participant ID.
    pub id: u8,
    /// The participant name.
    pub name: String,
    /// Who decides the participant's actions.
    pub role: RoleKind,
    /// Cards in hand.
    pub cards: Vec<Card>,
    /// Hand value.
    pub value: u32,
    /// Whether the participant may still act this round.
    pub can_act: bool,
    /// Whether the participant holds the turn.
    pub has_turn: bool,
    /// Money not staked (0 for the dealer).
    pub money: usize,
    /// Current stake (0 for the dealer).
    pub bet: usize,
}

/// Anyone holding a hand at the table.
///
/// The participant owns its hand and, unless it is the dealer, a [`Ledger`].
/// `can_act` drops to `false` as soon as the hand reaches 21 and can never
/// be `true` while the hand is busted.
#[derive(Debug)]
pub struct Participant {
    id: u8,
    name: String,
    hand: Hand,
    can_act: bool,
    has_turn: bool,
    ledger: Option<Ledger>,
    role: Role,
    listeners: Listeners<ParticipantEvent>,
}

impl Participant {
    fn new(
        id: u8,
        name: &str,
        evaluator: CardEvaluator,
        ledger: Option<Ledger>,
        role: Role,
    ) -> Result<Self, JoinError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(JoinError::EmptyName);
        }

        Ok(Self {
            id,
            name: String::from(name),
            hand: Hand::new(evaluator),
            can_act: true,
            has_turn: false,
            ledger,
            role,
            listeners: Listeners::new(),
        })
    }

    /// Creates a human player.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError::EmptyName`] if the name is blank.
    pub fn human(
        id: u8,
        name: &str,
        money: usize,
        evaluator: CardEvaluator,
    ) -> Result<Self, JoinError> {
        Self::new(id, name, evaluator, Some(Ledger::new(money)), Role::Human)
    }

    /// Creates a bot driven by `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError::EmptyName`] if the name is blank.
    pub fn bot(
        id: u8,
        name: &str,
        money: usize,
        evaluator: CardEvaluator,
        policy: Box<dyn BotPolicy>,
    ) -> Result<Self, JoinError> {
        Self::new(
            id,
            name,
            evaluator,
            Some(Ledger::new(money)),
            Role::Automated(policy),
        )
    }

    /// Creates the dealer, named "Dealer".
    #[must_use]
    pub fn dealer(evaluator: CardEvaluator) -> Self {
        Self {
            id: DEALER_ID,
            name: String::from("Dealer"),
            hand: Hand::new(evaluator),
            can_act: true,
            has_turn: false,
            ledger: None,
            role: Role::Dealer,
            listeners: Listeners::new(),
        }
    }

    /// Returns the participant ID.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Returns the participant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether a bot policy drives this participant.
    #[must_use]
    pub const fn is_automated(&self) -> bool {
        matches!(self.role, Role::Automated(_))
    }

    /// Returns whether this participant is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the hand value.
    #[must_use]
    pub const fn hand_value(&self) -> u32 {
        self.hand.value()
    }

    /// Returns whether the participant may still act this round.
    #[must_use]
    pub const fn can_act(&self) -> bool {
        self.can_act
    }

    /// Returns whether the participant holds the turn.
    #[must_use]
    pub const fn has_turn(&self) -> bool {
        self.has_turn
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.hand.value() > BLACKJACK_VALUE
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.hand.len() == 2 && self.hand.value() == BLACKJACK_VALUE
    }

    /// Returns the ledger, or `None` for the dealer.
    #[must_use]
    pub const fn ledger(&self) -> Option<&Ledger> {
        self.ledger.as_ref()
    }

    /// Returns the money held (0 for the dealer).
    #[must_use]
    pub fn money(&self) -> usize {
        self.ledger.map_or(0, |ledger| ledger.money())
    }

    /// Returns the current stake (0 for the dealer).
    #[must_use]
    pub fn bet(&self) -> usize {
        self.ledger.map_or(0, |ledger| ledger.bet())
    }

    /// Sets whether the participant may act.
    ///
    /// A busted participant stays unable to act.
    pub fn set_can_act(&mut self, can_act: bool) {
        self.can_act = can_act && !self.is_busted();
        self.publish(ParticipantEvent::CanActChanged(self.can_act));
    }

    /// Gives or takes away the turn.
    pub fn set_has_turn(&mut self, has_turn: bool) {
        self.has_turn = has_turn;
        self.publish(ParticipantEvent::TurnChanged(has_turn));
    }

    /// Empties the hand and makes the participant ready for a new round.
    pub fn reset(&mut self) {
        let event = self.hand.clear();
        self.observe_hand(&event);
        self.set_can_act(true);
        self.set_has_turn(false);
    }

    /// Deals one card from `shoe` into the hand.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the shoe is empty; the hand is left
    /// unchanged.
    pub fn take_card(&mut self, shoe: &mut Shoe) -> Result<Card, ShoeError> {
        let card = shoe.deal()?;
        let event = self.hand.add_card(card);
        self.observe_hand(&event);
        Ok(card)
    }

    /// Recomputes derived state after the hand changed.
    fn observe_hand(&mut self, event: &HandEvent) {
        let value = self.hand.value();
        log::trace!("{} {:?} -> {}", self.name, event, value);

        if self.can_act && value >= BLACKJACK_VALUE {
            self.set_can_act(false);
        }
        self.publish(ParticipantEvent::HandValueChanged(value));
    }

    /// Applies `change` to the ledger and publishes the new balances.
    fn update_ledger<F>(&mut self, change: F) -> Result<(), LedgerError>
    where
        F: FnOnce(&mut Ledger) -> Result<(), LedgerError>,
    {
        let ledger = self.ledger.as_mut().ok_or(LedgerError::NotAPlayer)?;
        let before = *ledger;
        change(ledger)?;
        let after = *ledger;

        if after.money() != before.money() {
            self.publish(ParticipantEvent::MoneyChanged(after.money()));
        }
        if after.bet() != before.bet() {
            self.publish(ParticipantEvent::BetChanged(after.bet()));
        }
        Ok(())
    }

    /// Replaces the money held.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NotAPlayer`] for the dealer.
    pub fn set_money(&mut self, money: usize) -> Result<(), LedgerError> {
        self.update_ledger(|ledger| {
            ledger.set_money(money);
            Ok(())
        })
    }

    /// Adds `amount` to the money held.
    ///
    /// # Errors
    ///
    /// Returns an error for the dealer or on overflow.
    pub fn increase_money(&mut self, amount: usize) -> Result<(), LedgerError> {
        self.update_ledger(|ledger| ledger.increase_money(amount))
    }

    /// Removes `amount` from the money held.
    ///
    /// # Errors
    ///
    /// Returns an error for the dealer or if less than `amount` is held.
    pub fn decrease_money(&mut self, amount: usize) -> Result<(), LedgerError> {
        self.update_ledger(|ledger| ledger.decrease_money(amount))
    }

    /// Replaces the stake without moving money.
    ///
    /// # Errors
    ///
    /// Returns an error for the dealer or if `bet` exceeds the money held.
    pub fn set_bet(&mut self, bet: usize) -> Result<(), LedgerError> {
        self.update_ledger(|ledger| ledger.set_bet(bet))
    }

    /// Credits `payout` and clears the stake.
    ///
    /// # Errors
    ///
    /// Returns an error for the dealer or on overflow.
    pub fn settle(&mut self, payout: usize) -> Result<(), LedgerError> {
        self.update_ledger(|ledger| ledger.settle(payout))
    }

    /// Returns the stake to the money held.
    ///
    /// # Errors
    ///
    /// Returns an error for the dealer or on overflow.
    pub fn refund(&mut self) -> Result<(), LedgerError> {
        self.update_ledger(Ledger::refund)
    }

    /// Registers an observer for one kind of participant change.
    pub fn subscribe<F>(&mut self, kind: ParticipantEventKind, callback: F)
    where
        F: FnMut(&ParticipantEvent) + Send + 'static,
    {
        self.listeners.subscribe(kind, callback);
    }

    /// Registers an observer for one kind of hand change.
    pub fn subscribe_hand<F>(&mut self, kind: HandEventKind, callback: F)
    where
        F: FnMut(&HandEvent) + Send + 'static,
    {
        self.hand.subscribe(kind, callback);
    }

    fn publish(&mut self, event: ParticipantEvent) {
        self.listeners.emit(&event);
    }

    /// Returns a snapshot of the participant.
    #[must_use]
    pub fn view(&self) -> ParticipantView {
        ParticipantView {
            id: self.id,
            name: self.name.clone(),
            role: self.role.kind(),
            cards: self.hand.cards().to_vec(),
            value: self.hand.value(),
            can_act: self.can_act,
            has_turn: self.has_turn,
            money: self.money(),
            bet: self.bet(),
        }
    }
}
