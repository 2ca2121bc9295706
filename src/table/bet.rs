extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;

use crate::error::{BetError, DealError, RoundError};
use crate::evaluator::BLACKJACK_VALUE;
use crate::participant::Participant;
use crate::result::{Outcome, SeatResult};
use crate::settlement;

use super::{LeaveReason, Session, Table, TableEvent, TablePhase, seat, seat_mut};

impl Table {
    /// Starts the game with everyone who joined.
    ///
    /// The shoe is refilled and shuffled.
    ///
    /// # Errors
    ///
    /// Returns an error if the game already started or fewer than
    /// `min_players` joined.
    pub fn start_game(&self) -> Result<(), RoundError> {
        self.session(|session| session.start_game())
    }

    /// Starts a round and collects the bots' bets.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside [`TablePhase::RoundStart`]
    /// and [`RoundError::NotEnoughCards`] if the shoe cannot cover a full
    /// round; the game is then over.
    pub fn start_round(&self) -> Result<(), RoundError> {
        self.session(|session| session.start_round())
    }

    /// Places a bet for a human player.
    ///
    /// A bet outside the table limits or above the money held counts as an
    /// invalid attempt. After `bet_attempts` invalid attempts the player
    /// leaves the game.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, the player is not
    /// in the round or already bet, or the bet is invalid.
    pub fn place_bet(&self, player_id: u8, amount: usize) -> Result<(), BetError> {
        self.session(|session| session.place_bet(player_id, amount))
    }

    /// Returns the players who still owe a bet this round.
    pub fn pending_bets(&self) -> Vec<u8> {
        let round = self.round.lock();
        let roster = self.roster.lock();
        round
            .still_playing
            .iter()
            .copied()
            .filter(|player_id| !round.bets_placed.contains(player_id))
            .filter(|&player_id| seat(&roster, player_id).is_some_and(|p| !p.is_automated()))
            .collect()
    }

    /// Deals the initial cards, dealer first, and starts the player turns.
    ///
    /// Players dealt 21 are paid the blackjack payout at once. Bots play
    /// immediately; the call returns once a human holds the turn or the round
    /// is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, a player has not
    /// bet yet, or the shoe runs out.
    pub fn deal(&self) -> Result<(), DealError> {
        self.session(|session| session.deal())
    }
}

impl Session<'_> {
    fn start_game(&mut self) -> Result<(), RoundError> {
        if *self.phase != TablePhase::WaitingForPlayers {
            return Err(RoundError::InvalidState);
        }
        if self.roster.len() < self.options.min_players {
            return Err(RoundError::NotEnoughPlayers);
        }

        self.round.still_playing = self.roster.iter().map(Participant::id).collect();
        self.shoe.restock();
        self.shoe.shuffle(&mut *self.rng);
        *self.phase = TablePhase::RoundStart;

        log::info!(
            "game started with {} players, {} cards in the shoe",
            self.roster.len(),
            self.shoe.len()
        );
        self.events.push(TableEvent::GameStarted);
        Ok(())
    }

    fn start_round(&mut self) -> Result<(), RoundError> {
        if *self.phase != TablePhase::RoundStart {
            return Err(RoundError::InvalidState);
        }

        let needed = self.options.cards_per_round(self.round.still_playing.len());
        if self.shoe.len() < needed {
            log::warn!(
                "{} cards left, {needed} needed for another round",
                self.shoe.len()
            );
            self.end_game();
            return Err(RoundError::NotEnoughCards);
        }

        self.round.begin();
        for player_id in self.round.still_playing.clone() {
            if let Some(participant) = seat_mut(self.roster, player_id) {
                participant.reset();
            }
        }
        self.dealer.reset();
        *self.phase = TablePhase::Betting;

        log::debug!("round {} started", self.round.number);
        self.events.push(TableEvent::RoundStarted {
            round: self.round.number,
        });
        self.collect_bot_bets();
        Ok(())
    }

    fn collect_bot_bets(&mut self) {
        let (min_bet, max_bet) = (self.options.min_bet, self.options.max_bet);

        for player_id in self.round.still_playing.clone() {
            let Some(bot) = seat_mut(self.roster, player_id) else {
                continue;
            };
            if !bot.is_automated() {
                continue;
            }

            let amount = self.rng.random_range(min_bet..=max_bet).min(bot.money());
            match bot.place_bet(amount) {
                Ok(()) => {
                    log::debug!("{} bets {amount}", bot.name());
                    self.round.bets_placed.push(player_id);
                    self.events.push(TableEvent::BetPlaced { player_id, amount });
                }
                Err(err) => log::warn!("{} could not bet {amount}: {err}", bot.name()),
            }
        }
    }

    fn place_bet(&mut self, player_id: u8, amount: usize) -> Result<(), BetError> {
        if *self.phase != TablePhase::Betting {
            return Err(BetError::InvalidState);
        }
        if !self.round.is_playing(player_id) {
            return Err(BetError::PlayerNotFound);
        }
        if self.round.bets_placed.contains(&player_id) {
            return Err(BetError::AlreadyPlaced);
        }

        let money = seat(self.roster, player_id)
            .ok_or(BetError::PlayerNotFound)?
            .money();
        let rejection = if amount < self.options.min_bet || amount > self.options.max_bet {
            Some(BetError::OutOfRange)
        } else if amount > money {
            Some(BetError::InsufficientFunds)
        } else {
            None
        };
        if let Some(err) = rejection {
            return Err(self.reject_bet(player_id, amount, err));
        }

        seat_mut(self.roster, player_id)
            .ok_or(BetError::PlayerNotFound)?
            .place_bet(amount)?;
        self.round.bets_placed.push(player_id);

        log::debug!("player {player_id} bets {amount}");
        self.events.push(TableEvent::BetPlaced { player_id, amount });
        Ok(())
    }

    /// Counts an invalid bet, removing the player once attempts run out.
    fn reject_bet(&mut self, player_id: u8, amount: usize, err: BetError) -> BetError {
        let attempts = self.round.bet_attempts.entry(player_id).or_insert(0);
        *attempts += 1;
        let attempts = *attempts;
        log::debug!("player {player_id} bet {amount} rejected ({attempts}): {err}");

        if attempts >= self.options.bet_attempts {
            self.leave_round(player_id, LeaveReason::BetAttempts);
            return BetError::AttemptsExhausted;
        }
        self.events.push(TableEvent::InvalidBet {
            player_id,
            attempts_left: self.options.bet_attempts - attempts,
        });
        err
    }

    fn has_pending_bets(&self) -> bool {
        self.round.still_playing.iter().any(|player_id| {
            !self.round.bets_placed.contains(player_id)
                && seat(self.roster, *player_id).is_some_and(|p| !p.is_automated())
        })
    }

    fn deal(&mut self) -> Result<(), DealError> {
        if *self.phase != TablePhase::Betting {
            return Err(DealError::InvalidState);
        }
        if self.has_pending_bets() {
            return Err(DealError::PendingBets);
        }

        let players: Vec<u8> = self.round.still_playing.clone();
        let needed = self.options.cards_per_round(players.len());
        if self.shoe.len() < needed {
            log::warn!("{} cards left, {needed} needed to deal", self.shoe.len());
            self.end_game();
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..self.options.initial_cards_for_dealer {
            self.dealer.take_card(self.shoe)?;
        }
        for &player_id in &players {
            if let Some(participant) = seat_mut(self.roster, player_id) {
                for _ in 0..self.options.initial_cards_per_player {
                    participant.take_card(self.shoe)?;
                }
            }
        }

        self.screen_initial_hands(&players);
        *self.phase = TablePhase::PlayerTurns;
        log::debug!(
            "round {} dealt, dealer shows {}",
            self.round.number,
            self.dealer.hand_value()
        );

        self.advance().map_err(|_| DealError::NotEnoughCards)
    }

    /// Pays out initial 21s and closes the turn of hands that are already
    /// over.
    fn screen_initial_hands(&mut self, players: &[u8]) {
        let dealer_value = self.dealer.hand_value();

        for &player_id in players {
            let Some(participant) = seat_mut(self.roster, player_id) else {
                continue;
            };

            let player_value = participant.hand_value();
            if player_value == BLACKJACK_VALUE {
                let bet = participant.bet();
                let payout = settlement::payout(Outcome::Blackjack, bet, self.options);
                if let Err(err) = participant.settle(payout) {
                    log::warn!("{} blackjack payout failed: {err}", participant.name());
                }
                participant.stand();

                log::info!("{} has blackjack, paid {payout}", participant.name());
                self.round.seats.push(SeatResult {
                    player_id,
                    outcome: Outcome::Blackjack,
                    bet,
                    payout,
                    player_value,
                    dealer_value,
                });
                self.events
                    .push(TableEvent::BlackjackPaid { player_id, payout });
            } else if participant.is_busted() {
                participant.stand();
            }
        }
    }
}
