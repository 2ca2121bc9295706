//! Participant hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::evaluator::CardEvaluator;
use crate::event::{Event, Listeners};

/// A change to a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandEvent {
    /// A card was added.
    CardAdded(Card),
    /// A card was removed.
    CardRemoved(Card),
    /// All cards were removed.
    Cleared,
}

/// Discriminant of [`HandEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandEventKind {
    /// See [`HandEvent::CardAdded`].
    CardAdded,
    /// See [`HandEvent::CardRemoved`].
    CardRemoved,
    /// See [`HandEvent::Cleared`].
    Cleared,
}

impl Event for HandEvent {
    type Kind = HandEventKind;

    fn kind(&self) -> HandEventKind {
        match self {
            Self::CardAdded(_) => HandEventKind::CardAdded,
            Self::CardRemoved(_) => HandEventKind::CardRemoved,
            Self::Cleared => HandEventKind::Cleared,
        }
    }
}

/// An ordered set of cards with a cached total.
///
/// The total is adjusted on every add and remove and reset on clear, so
/// [`Hand::value`] never walks the cards.
#[derive(Debug)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Evaluator used for the cached total.
    evaluator: CardEvaluator,
    /// Sum of the evaluator over `cards`.
    value: u32,
    listeners: Listeners<HandEvent>,
}

impl Hand {
    /// Creates an empty hand valued with `evaluator`.
    #[must_use]
    pub fn new(evaluator: CardEvaluator) -> Self {
        Self {
            cards: Vec::new(),
            evaluator,
            value: 0,
            listeners: Listeners::new(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) -> HandEvent {
        self.cards.push(card);
        self.value += u32::from(self.evaluator.evaluate(card));
        self.publish(HandEvent::CardAdded(card))
    }

    /// Removes the first occurrence of `card`.
    ///
    /// Returns `None`, and notifies nobody, if the card is not in the hand.
    pub fn remove_card(&mut self, card: Card) -> Option<HandEvent> {
        let index = self.cards.iter().position(|c| *c == card)?;
        self.cards.remove(index);
        self.value -= u32::from(self.evaluator.evaluate(card));
        Some(self.publish(HandEvent::CardRemoved(card)))
    }

    /// Removes every card.
    pub fn clear(&mut self) -> HandEvent {
        self.cards.clear();
        self.value = 0;
        self.publish(HandEvent::Cleared)
    }

    fn publish(&mut self, event: HandEvent) -> HandEvent {
        self.listeners.emit(&event);
        event
    }

    /// Registers an observer for one kind of hand change.
    pub fn subscribe<F>(&mut self, kind: HandEventKind, callback: F)
    where
        F: FnMut(&HandEvent) + Send + 'static,
    {
        self.listeners.subscribe(kind, callback);
    }

    /// Returns the cached total.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Sums the cards under `evaluator`, ignoring the cache.
    #[must_use]
    pub fn evaluate(&self, evaluator: CardEvaluator) -> u32 {
        self.cards
            .iter()
            .map(|card| u32::from(evaluator.evaluate(*card)))
            .sum()
    }

    /// Returns the evaluator the cached total is computed with.
    #[must_use]
    pub const fn evaluator(&self) -> CardEvaluator {
        self.evaluator
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
