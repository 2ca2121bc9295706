//! The multi-deck card source.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::ShoeError;

/// An ordered stack of cards built from one or more standard decks.
///
/// Cards are dealt from the front. Every card leaves the shoe through
/// [`Shoe::deal`], so a dealt card is never handed out twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: VecDeque<Card>,
    decks: u8,
}

impl Shoe {
    /// Creates an unshuffled shoe made of `decks` standard 52-card decks.
    #[must_use]
    pub fn new(decks: u8) -> Self {
        Self {
            cards: Self::build(decks),
            decks,
        }
    }

    /// Creates a shoe that deals exactly `cards`, front first.
    ///
    /// Useful to stack the shoe in tests.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let decks = u8::try_from(cards.len().div_ceil(DECK_SIZE)).unwrap_or(u8::MAX);
        Self {
            cards: cards.into(),
            decks,
        }
    }

    fn build(decks: u8) -> VecDeque<Card> {
        let mut cards = VecDeque::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push_back(Card::new(rank, suit));
                }
            }
        }

        cards
    }

    /// Puts every deck back in the shoe, in deck order.
    pub fn restock(&mut self) {
        self.cards = Self::build(self.decks);
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Deals the front card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no cards are left.
    pub fn deal(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop_front().ok_or(ShoeError::Empty)
    }

    /// Deals `count` cards, or none at all if fewer remain.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if the shoe holds fewer than `count` cards.
    pub fn deal_many(&mut self, count: usize) -> Result<Vec<Card>, ShoeError> {
        if self.cards.len() < count {
            return Err(ShoeError::Empty);
        }
        (0..count).map(|_| self.deal()).collect()
    }

    /// Deals every remaining card.
    pub fn deal_all(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns whether `card` is still in the shoe.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterates over the remaining cards, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
