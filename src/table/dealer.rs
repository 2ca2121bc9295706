use core::mem;

use crate::error::{ActionError, RoundError};
use crate::evaluator::BLACKJACK_VALUE;
use crate::result::{RoundResult, SeatResult};
use crate::settlement;

use super::{LeaveReason, RoundEnd, Session, Table, TableEvent, TablePhase, seat, seat_mut};

impl Table {
    /// Closes a settled round.
    ///
    /// Players holding less than the minimum bet leave, as do the humans
    /// listed in `leaving`. The game goes on only while at least one human
    /// remains.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] unless the round is over.
    pub fn conclude_round(&self, leaving: &[u8]) -> Result<RoundEnd, RoundError> {
        self.session(|session| session.conclude_round(leaving))
    }
}

impl Session<'_> {
    /// Plays the dealer's hand and settles the round.
    pub(super) fn dealer_turn(&mut self) -> Result<(), ActionError> {
        *self.phase = TablePhase::DealerTurn;
        self.round.current = None;

        self.dealer.set_has_turn(true);
        let drawn = self
            .dealer
            .take_cards_until(self.shoe, self.options.dealer_threshold);
        self.dealer.set_has_turn(false);

        if let Err(err) = drawn {
            self.abort_round();
            return Err(err);
        }

        let value = self.dealer.hand_value();
        log::debug!("dealer stands on {value}");
        self.events.push(TableEvent::DealerPlayed { value });

        self.settle();
        *self.phase = TablePhase::RoundOver;
        self.events.push(TableEvent::RoundEnded {
            round: self.round.number,
        });
        Ok(())
    }

    /// Compares every hand not paid at the deal against the dealer.
    fn settle(&mut self) {
        let dealer_value = self.dealer.hand_value();
        let players = self.round.still_playing.clone();
        let mut seats = mem::take(&mut self.round.seats);

        for &player_id in &players {
            if seats.iter().any(|result| result.player_id == player_id) {
                continue;
            }
            let Some(participant) = seat_mut(self.roster, player_id) else {
                continue;
            };

            let bet = participant.bet();
            let player_value = participant.hand_value();
            let outcome = settlement::outcome(player_value, dealer_value);
            let payout = settlement::payout(outcome, bet, self.options);
            if let Err(err) = participant.settle(payout) {
                log::warn!("{} payout failed: {err}", participant.name());
            }

            log::debug!(
                "{} {outcome:?} with {player_value} against {dealer_value}, paid {payout}",
                participant.name()
            );
            seats.push(SeatResult {
                player_id,
                outcome,
                bet,
                payout,
                player_value,
                dealer_value,
            });
        }
        seats.sort_by_key(|result| players.iter().position(|&id| id == result.player_id));

        self.round.last_result = Some(RoundResult {
            round: self.round.number,
            seats,
            dealer_value,
            dealer_bust: dealer_value > BLACKJACK_VALUE,
        });
    }

    /// Abandons the round after the shoe ran out under the dealer. Stakes go
    /// back to their owners and the game ends.
    fn abort_round(&mut self) {
        log::warn!("round {} aborted", self.round.number);
        self.deck_exhausted(None);

        for player_id in self.round.still_playing.clone() {
            let Some(participant) = seat_mut(self.roster, player_id) else {
                continue;
            };
            if participant.bet() == 0 {
                continue;
            }
            if let Err(err) = participant.refund() {
                log::warn!("{} refund failed: {err}", participant.name());
            }
        }

        self.events.push(TableEvent::RoundAborted {
            round: self.round.number,
        });
        self.end_game();
    }

    fn conclude_round(&mut self, leaving: &[u8]) -> Result<RoundEnd, RoundError> {
        match *self.phase {
            TablePhase::RoundOver => {}
            TablePhase::GameOver => return Ok(RoundEnd::Terminate),
            _ => return Err(RoundError::InvalidState),
        }

        for player_id in self.round.still_playing.clone() {
            let Some(participant) = seat(self.roster, player_id) else {
                continue;
            };
            let reason = if participant.money() < self.options.min_bet {
                Some(LeaveReason::Broke)
            } else if !participant.is_automated() && leaving.contains(&player_id) {
                Some(LeaveReason::Declined)
            } else {
                None
            };
            if let Some(reason) = reason {
                self.leave_round(player_id, reason);
            }
        }

        let humans_left = self.round.still_playing.iter().any(|&player_id| {
            seat(self.roster, player_id).is_some_and(|p| !p.is_automated())
        });
        if humans_left {
            *self.phase = TablePhase::RoundStart;
            Ok(RoundEnd::Continue)
        } else {
            self.end_game();
            Ok(RoundEnd::Terminate)
        }
    }
}
