use crate::error::ActionError;
use crate::participant::Participant;

use super::{Session, Table, TableEvent, TablePhase, seat, seat_mut};

impl Table {
    /// Draws a card for the player holding the turn.
    ///
    /// Returns whether the player can keep playing. Reaching 21 or going over
    /// ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no player turn is in progress or it is not this
    /// player's turn. On [`ActionError::DeckExhausted`] the player stands and
    /// the turn moves on.
    pub fn hit(&self, player_id: u8) -> Result<bool, ActionError> {
        self.session(|session| session.hit(player_id))
    }

    /// Ends the turn of the player holding it.
    ///
    /// # Errors
    ///
    /// Returns an error if no player turn is in progress or it is not this
    /// player's turn.
    pub fn stand(&self, player_id: u8) -> Result<(), ActionError> {
        self.session(|session| session.stand(player_id))
    }

    /// Doubles the stake, draws one card and ends the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no player turn is in progress or it is not this
    /// player's turn. On [`ActionError::InsufficientFunds`] nothing changes
    /// and the player keeps the turn.
    pub fn double_down(&self, player_id: u8) -> Result<(), ActionError> {
        self.session(|session| session.double_down(player_id))
    }
}

impl Session<'_> {
    fn ensure_turn(&self, player_id: u8) -> Result<(), ActionError> {
        if *self.phase != TablePhase::PlayerTurns {
            return Err(ActionError::InvalidState);
        }
        if self.round.current != Some(player_id) {
            return Err(ActionError::NotYourTurn);
        }
        Ok(())
    }

    fn hit(&mut self, player_id: u8) -> Result<bool, ActionError> {
        self.ensure_turn(player_id)?;
        let player = seat_mut(self.roster, player_id).ok_or(ActionError::PlayerNotFound)?;

        match player.hit(self.shoe) {
            Ok(true) if player.can_act() => Ok(true),
            Ok(_) => {
                player.stand();
                self.advance()?;
                Ok(false)
            }
            Err(ActionError::DeckExhausted) => {
                player.stand();
                self.deck_exhausted(Some(player_id));
                self.advance()?;
                Err(ActionError::DeckExhausted)
            }
            Err(err) => Err(err),
        }
    }

    fn stand(&mut self, player_id: u8) -> Result<(), ActionError> {
        self.ensure_turn(player_id)?;
        seat_mut(self.roster, player_id)
            .ok_or(ActionError::PlayerNotFound)?
            .stand();
        self.advance()
    }

    fn double_down(&mut self, player_id: u8) -> Result<(), ActionError> {
        self.ensure_turn(player_id)?;
        let player = seat_mut(self.roster, player_id).ok_or(ActionError::PlayerNotFound)?;

        match player.double_hit(self.shoe) {
            Ok(_) => self.advance(),
            Err(ActionError::InsufficientFunds) => {
                log::debug!("{} cannot afford to double", player.name());
                self.events
                    .push(TableEvent::InsufficientFunds { player_id });
                Err(ActionError::InsufficientFunds)
            }
            Err(ActionError::DeckExhausted) => {
                player.stand();
                self.deck_exhausted(Some(player_id));
                self.advance()?;
                Err(ActionError::DeckExhausted)
            }
            Err(err) => Err(err),
        }
    }

    /// Hands the turn to the next player who can act.
    ///
    /// Bots play their whole turn here. Stops at the first human; once every
    /// player is done the dealer plays and the round is settled.
    pub(super) fn advance(&mut self) -> Result<(), ActionError> {
        while let Some(player_id) = self.next_participant() {
            let automated = seat(self.roster, player_id).is_some_and(Participant::is_automated);
            if !automated {
                log::debug!("waiting for player {player_id}");
                self.events.push(TableEvent::AwaitingAction { player_id });
                return Ok(());
            }
            self.play_bot(player_id);
        }
        self.dealer_turn()
    }

    fn next_participant(&mut self) -> Option<u8> {
        while let Some(&player_id) = self.round.still_playing.get(self.round.cursor) {
            self.round.cursor += 1;
            let Some(participant) = seat_mut(self.roster, player_id) else {
                continue;
            };
            if participant.can_act() {
                participant.set_has_turn(true);
                self.round.current = Some(player_id);
                return Some(player_id);
            }
        }
        self.round.current = None;
        None
    }

    fn play_bot(&mut self, player_id: u8) {
        let dealer_value = self.dealer.hand_value();
        let Some(bot) = seat_mut(self.roster, player_id) else {
            return;
        };

        let mut exhausted = false;
        loop {
            match bot.play_automated(self.shoe, dealer_value, &mut *self.rng) {
                Ok(true) if bot.can_act() => {}
                Ok(_) => break,
                Err(ActionError::DeckExhausted) => {
                    exhausted = true;
                    break;
                }
                Err(err) => {
                    log::warn!("{} stopped playing: {err}", bot.name());
                    break;
                }
            }
        }
        bot.stand();

        if exhausted {
            self.deck_exhausted(Some(player_id));
        }
    }

    pub(super) fn deck_exhausted(&mut self, player_id: Option<u8>) {
        log::warn!("the shoe ran out of cards");
        self.events.push(TableEvent::DeckExhausted { player_id });
    }
}
