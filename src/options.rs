//! Table configuration options.

use crate::error::ConfigError;
use crate::evaluator::AceValue;
use crate::participant::DEALER_ID;

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    #[default]
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// The table reads these values and never changes them. Use the builder
/// methods to customize them:
///
/// ```
/// use bjtable::{AceValue, TableOptions};
///
/// let options = TableOptions::default()
///     .with_decks(2)
///     .with_ace_value(AceValue::One)
///     .with_bet_limits(5, 50);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Value of an ace.
    pub ace_value: AceValue,
    /// The dealer draws while below this value.
    pub dealer_threshold: u32,
    /// Minimum number of players needed to start.
    pub min_players: usize,
    /// Maximum number of players, bots included.
    pub max_players: usize,
    /// Minimum bet; players holding less leave at the end of a round.
    pub min_bet: usize,
    /// Maximum bet.
    pub max_bet: usize,
    /// Maximum starting money.
    pub max_money: usize,
    /// Cards dealt to each player at the start of a round.
    pub initial_cards_per_player: usize,
    /// Cards dealt to the dealer at the start of a round.
    pub initial_cards_for_dealer: usize,
    /// Winnings ratio of a regular win (1.0 pays 1:1).
    pub win_ratio: f64,
    /// Winnings ratio of a blackjack (1.5 pays 3:2).
    pub blackjack_ratio: f64,
    /// Rounding mode for payouts.
    pub rounding: RoundingMode,
    /// Number of invalid bets after which a player leaves the round.
    pub bet_attempts: u8,
    /// Starting money of bots added with `join_random_bot`.
    pub bot_money: usize,
    /// Stand probability used by randomly created threshold bots.
    pub bot_stand_probability: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            ace_value: AceValue::Eleven,
            dealer_threshold: 17,
            min_players: 1,
            max_players: 5,
            min_bet: 2,
            max_bet: 100,
            max_money: 10_000,
            initial_cards_per_player: 2,
            initial_cards_for_dealer: 1,
            win_ratio: 1.0,
            blackjack_ratio: 1.5,
            rounding: RoundingMode::Down,
            bet_attempts: 3,
            bot_money: 1_000,
            bot_stand_probability: 0.3,
        }
    }
}

impl TableOptions {
    /// Checks that the options describe a playable table.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if self.min_players == 0
            || self.min_players > self.max_players
            || self.max_players > usize::from(DEALER_ID)
        {
            return Err(ConfigError::PlayerLimits);
        }
        if self.min_bet == 0 || self.min_bet > self.max_bet || self.min_bet > self.max_money {
            return Err(ConfigError::BetLimits);
        }
        for ratio in [self.win_ratio, self.blackjack_ratio] {
            if !ratio.is_finite() || ratio < 0.0 {
                return Err(ConfigError::PayoutRatio);
            }
        }
        if self.initial_cards_per_player == 0 {
            return Err(ConfigError::InitialCards);
        }
        if self.bet_attempts == 0 {
            return Err(ConfigError::BetAttempts);
        }
        if !(0.0..=1.0).contains(&self.bot_stand_probability) {
            return Err(ConfigError::Probability);
        }
        Ok(())
    }

    /// Returns the number of cards a round needs for `players` players.
    #[must_use]
    pub const fn cards_per_round(&self, players: usize) -> usize {
        players * self.initial_cards_per_player + self.initial_cards_for_dealer
    }

    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the value of an ace.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{AceValue, TableOptions};
    ///
    /// let options = TableOptions::default().with_ace_value(AceValue::One);
    /// assert_eq!(options.ace_value, AceValue::One);
    /// ```
    #[must_use]
    pub const fn with_ace_value(mut self, ace_value: AceValue) -> Self {
        self.ace_value = ace_value;
        self
    }

    /// Sets the value the dealer draws to.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_threshold(16);
    /// assert_eq!(options.dealer_threshold, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_threshold(mut self, threshold: u32) -> Self {
        self.dealer_threshold = threshold;
        self
    }

    /// Sets the minimum and maximum number of players.
    ///
    /// Player IDs are a `u8` below [`DEALER_ID`], so at most 255 players fit
    /// at a table.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_player_limits(2, 7);
    /// assert_eq!((options.min_players, options.max_players), (2, 7));
    /// ```
    #[must_use]
    pub const fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Sets the minimum and maximum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_bet_limits(10, 500);
    /// assert_eq!((options.min_bet, options.max_bet), (10, 500));
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min: usize, max: usize) -> Self {
        self.min_bet = min;
        self.max_bet = max;
        self
    }

    /// Sets the maximum starting money.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_money(500);
    /// assert_eq!(options.max_money, 500);
    /// ```
    #[must_use]
    pub const fn with_max_money(mut self, max_money: usize) -> Self {
        self.max_money = max_money;
        self
    }

    /// Sets the number of initial cards for each player and for the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_initial_cards(2, 2);
    /// assert_eq!(options.initial_cards_for_dealer, 2);
    /// ```
    #[must_use]
    pub const fn with_initial_cards(mut self, per_player: usize, for_dealer: usize) -> Self {
        self.initial_cards_per_player = per_player;
        self.initial_cards_for_dealer = for_dealer;
        self
    }

    /// Sets the regular win ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_win_ratio(0.95);
    /// assert_eq!(options.win_ratio, 0.95);
    /// ```
    #[must_use]
    pub const fn with_win_ratio(mut self, ratio: f64) -> Self {
        self.win_ratio = ratio;
        self
    }

    /// Sets the blackjack ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_ratio(1.2);
    /// assert_eq!(options.blackjack_ratio, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_ratio(mut self, ratio: f64) -> Self {
        self.blackjack_ratio = ratio;
        self
    }

    /// Sets the payout rounding mode.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding(RoundingMode::Nearest);
    /// assert_eq!(options.rounding, RoundingMode::Nearest);
    /// ```
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    /// Sets the number of invalid bets tolerated before a player leaves.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_bet_attempts(5);
    /// assert_eq!(options.bet_attempts, 5);
    /// ```
    #[must_use]
    pub const fn with_bet_attempts(mut self, attempts: u8) -> Self {
        self.bet_attempts = attempts;
        self
    }

    /// Sets the money and stand probability of randomly created bots.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_bots(250, 0.5);
    /// assert_eq!(options.bot_money, 250);
    /// ```
    #[must_use]
    pub const fn with_bots(mut self, money: usize, stand_probability: f64) -> Self {
        self.bot_money = money;
        self.bot_stand_probability = stand_probability;
        self
    }
}
