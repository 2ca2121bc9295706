//! Table integration tests.

extern crate alloc;

use alloc::sync::Arc;
use std::sync::Mutex;

use bjtable::{
    ActionError, BetError, Card, ConfigError, DEALER_ID, DealError, HandEvent, HandEventKind,
    JoinError, LeaveReason, Outcome, Rank, RoundEnd, RoundError, Shoe, Suit, Table, TableEvent,
    TableEventKind, TableOptions, TablePhase, ThresholdPolicy,
};
use bjtable::participant::{ParticipantEvent, ParticipantEventKind, RoleKind};

const fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

/// Replaces the shoe so the next cards dealt are `ranks`, in order.
fn stack(table: &Table, ranks: &[Rank]) {
    *table.shoe.lock() = Shoe::from_cards(ranks.iter().map(|&rank| card(rank)).collect());
}

/// A started table with a single human holding `money`.
fn solo(money: usize) -> (Table, u8) {
    let table = Table::new(TableOptions::default(), 1).unwrap();
    let id = table.join_human("Alice", money).unwrap();
    table.start_game().unwrap();
    (table, id)
}

/// Plays a round up to the first player decision with a 10 stake.
fn deal_solo(table: &Table, id: u8, ranks: &[Rank]) {
    stack(table, ranks);
    table.start_round().unwrap();
    table.place_bet(id, 10).unwrap();
    table.deal().unwrap();
}

fn record(table: &Table, kinds: &[TableEventKind]) -> Arc<Mutex<Vec<TableEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    for &kind in kinds {
        let sink = Arc::clone(&events);
        table.subscribe(kind, move |event| sink.lock().unwrap().push(*event));
    }
    events
}

#[test]
fn new_rejects_invalid_options() {
    let err = Table::new(TableOptions::default().with_decks(0), 0).unwrap_err();
    assert_eq!(err, ConfigError::NoDecks);

    let err = Table::new(TableOptions::default().with_bet_limits(50, 10), 0).unwrap_err();
    assert_eq!(err, ConfigError::BetLimits);
}

#[test]
fn join_validates_players() {
    let table = Table::new(TableOptions::default().with_player_limits(1, 2), 0).unwrap();

    assert_eq!(table.join_human("  ", 100), Err(JoinError::EmptyName));
    assert_eq!(table.join_human("Alice", 1), Err(JoinError::InvalidMoney));
    assert_eq!(table.join_human("Alice", 20_000), Err(JoinError::InvalidMoney));

    assert_eq!(table.join_human("Alice", 100), Ok(0));
    assert_eq!(table.join_human("Bob", 100), Ok(1));
    assert_eq!(table.join_human("Carol", 100), Err(JoinError::TableFull));

    table.start_game().unwrap();
    assert_eq!(table.join_random_bot(), Err(JoinError::InvalidState));
}

#[test]
fn player_ids_stay_below_the_dealer_id() {
    let err = Table::new(TableOptions::default().with_player_limits(1, 256), 0).unwrap_err();
    assert_eq!(err, ConfigError::PlayerLimits);

    let mut table = Table::new(TableOptions::default().with_player_limits(1, 255), 0).unwrap();
    table.options.max_players = 300;
    for expected in 0..DEALER_ID {
        assert_eq!(table.join_human("Alice", 100), Ok(expected));
    }
    assert_eq!(table.join_human("Bob", 100), Err(JoinError::TableFull));

    let roster = table.roster();
    assert_eq!(roster.len(), usize::from(DEALER_ID));
    assert!(roster.iter().all(|view| view.id != DEALER_ID));
}

#[test]
fn start_game_needs_players() {
    let table = Table::new(TableOptions::default(), 0).unwrap();
    assert_eq!(table.start_game(), Err(RoundError::NotEnoughPlayers));

    table.join_human("Alice", 100).unwrap();
    table.start_game().unwrap();
    assert_eq!(table.phase(), TablePhase::RoundStart);
    assert_eq!(table.cards_remaining(), 6 * 52);
    assert_eq!(table.start_game(), Err(RoundError::InvalidState));
}

#[test]
fn random_bots_are_numbered_and_funded() {
    let table = Table::new(TableOptions::default().with_bots(750, 0.3), 3).unwrap();
    table.join_human("Alice", 100).unwrap();
    let first = table.join_random_bot().unwrap();
    let second = table.join_random_bot().unwrap();

    let first = table.participant(first).unwrap();
    let second = table.participant(second).unwrap();
    assert_eq!(first.name, "Bot1");
    assert_eq!(second.name, "Bot2");
    assert_eq!(first.role, RoleKind::Automated);
    assert_eq!(first.money, 750);
}

#[test]
fn stand_on_twenty_beats_nineteen() {
    let (table, alice) = solo(100);
    deal_solo(&table, alice, &[Rank::Nine, Rank::Ten, Rank::Queen, Rank::Ten]);

    assert_eq!(table.phase(), TablePhase::PlayerTurns);
    assert_eq!(table.current_participant(), Some(alice));
    let view = table.participant(alice).unwrap();
    assert_eq!(view.value, 20);
    assert_eq!(view.money, 90);
    assert_eq!(view.bet, 10);
    assert!(view.has_turn);

    table.stand(alice).unwrap();

    assert_eq!(table.phase(), TablePhase::RoundOver);
    assert_eq!(table.current_participant(), None);
    let result = table.last_result().unwrap();
    assert_eq!(result.dealer_value, 19);
    assert!(!result.dealer_bust);
    let seat = result.seat(alice).unwrap();
    assert_eq!(seat.outcome, Outcome::Win);
    assert_eq!(seat.payout, 20);
    assert_eq!(seat.net(), 10);
    assert_eq!(table.participant(alice).unwrap().money, 110);
    assert_eq!(table.participant(alice).unwrap().bet, 0);
}

#[test]
fn twenty_loses_to_dealer_twenty_one() {
    let (table, alice) = solo(100);
    deal_solo(&table, alice, &[Rank::Ace, Rank::Ten, Rank::King, Rank::Ten]);
    table.stand(alice).unwrap();

    let result = table.last_result().unwrap();
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.seat(alice).unwrap().outcome, Outcome::Lose);
    assert_eq!(table.participant(alice).unwrap().money, 90);
}

#[test]
fn equal_values_push() {
    let (table, alice) = solo(100);
    deal_solo(&table, alice, &[Rank::Eight, Rank::Ten, Rank::Eight, Rank::Jack]);
    table.stand(alice).unwrap();

    let seat = table.last_result().unwrap().seat(alice).copied().unwrap();
    assert_eq!(seat.outcome, Outcome::Push);
    assert_eq!((seat.player_value, seat.dealer_value), (18, 18));
    assert_eq!(seat.payout, 10);
    assert_eq!(table.participant(alice).unwrap().money, 100);
}

#[test]
fn busted_dealer_pays_standing_player() {
    let (table, alice) = solo(100);
    deal_solo(
        &table,
        alice,
        &[Rank::Four, Rank::Ten, Rank::Five, Rank::Ten, Rank::Ten],
    );
    table.stand(alice).unwrap();

    let result = table.last_result().unwrap();
    assert_eq!(result.dealer_value, 24);
    assert!(result.dealer_bust);
    assert_eq!(result.seat(alice).unwrap().outcome, Outcome::Win);
    assert_eq!(table.participant(alice).unwrap().money, 110);
}

#[test]
fn initial_twenty_one_is_paid_at_the_deal() {
    let (table, alice) = solo(100);
    let events = record(&table, &[TableEventKind::BlackjackPaid]);
    deal_solo(&table, alice, &[Rank::Ten, Rank::Ace, Rank::King, Rank::Seven]);

    // nobody else can act, so the dealer already played
    assert_eq!(table.phase(), TablePhase::RoundOver);
    assert_eq!(
        events.lock().unwrap().as_slice(),
        &[TableEvent::BlackjackPaid {
            player_id: alice,
            payout: 25
        }]
    );

    let result = table.last_result().unwrap();
    let seat = result.seat(alice).unwrap();
    assert_eq!(seat.outcome, Outcome::Blackjack);
    assert_eq!(seat.payout, 25);
    assert_eq!(result.dealer_value, 17);
    assert_eq!(table.participant(alice).unwrap().money, 115);
}

#[test]
fn blackjack_payout_follows_rounding() {
    let options = TableOptions::default().with_rounding(bjtable::RoundingMode::Up);
    let table = Table::new(options, 1).unwrap();
    let alice = table.join_human("Alice", 100).unwrap();
    table.start_game().unwrap();

    stack(&table, &[Rank::Ten, Rank::Ace, Rank::King, Rank::Seven]);
    table.start_round().unwrap();
    table.place_bet(alice, 5).unwrap();
    table.deal().unwrap();

    // 2.5 * 5 = 12.5
    assert_eq!(table.last_result().unwrap().seat(alice).unwrap().payout, 13);
}

#[test]
fn two_aces_bust_at_the_deal() {
    let (table, alice) = solo(100);
    let waiting = record(&table, &[TableEventKind::AwaitingAction]);
    deal_solo(
        &table,
        alice,
        &[Rank::Nine, Rank::Ace, Rank::Ace, Rank::Ten, Rank::Ten],
    );

    // 22 with both aces high: the turn is skipped
    assert_eq!(table.phase(), TablePhase::RoundOver);
    assert_eq!(table.current_participant(), None);
    assert!(waiting.lock().unwrap().is_empty());

    let result = table.last_result().unwrap();
    assert_eq!(result.dealer_value, 19);
    let seat = result.seat(alice).copied().unwrap();
    assert_eq!(seat.outcome, Outcome::Lose);
    assert_eq!((seat.player_value, seat.payout), (22, 0));
    assert_eq!(table.participant(alice).unwrap().money, 90);
}

#[test]
fn hitting_past_twenty_one_ends_the_turn() {
    let (table, alice) = solo(100);
    deal_solo(
        &table,
        alice,
        &[Rank::Ten, Rank::Ten, Rank::Six, Rank::King, Rank::Seven],
    );

    assert_eq!(table.hit(alice), Ok(false));

    let view = table.participant(alice).unwrap();
    assert_eq!(view.value, 26);
    assert!(!view.can_act);
    assert!(!view.has_turn);
    assert_eq!(table.phase(), TablePhase::RoundOver);
    assert_eq!(
        table.last_result().unwrap().seat(alice).unwrap().outcome,
        Outcome::Lose
    );
    assert_eq!(table.participant(alice).unwrap().money, 90);
}

#[test]
fn hitting_to_exactly_twenty_one_ends_the_turn() {
    let (table, alice) = solo(100);
    deal_solo(
        &table,
        alice,
        &[Rank::Ten, Rank::Ten, Rank::Two, Rank::Four, Rank::Five, Rank::Seven],
    );

    assert_eq!(table.hit(alice), Ok(true));
    assert_eq!(table.participant(alice).unwrap().value, 16);
    assert_eq!(table.hit(alice), Ok(false));

    assert_eq!(table.phase(), TablePhase::RoundOver);
    let seat = table.last_result().unwrap().seat(alice).copied().unwrap();
    assert_eq!(seat.player_value, 21);
    assert_eq!(seat.outcome, Outcome::Win);
}

#[test]
fn double_down_doubles_the_stake_and_draws_once() {
    let (table, alice) = solo(100);
    deal_solo(
        &table,
        alice,
        &[Rank::Nine, Rank::Five, Rank::Six, Rank::Ten, Rank::Eight],
    );

    table.double_down(alice).unwrap();

    assert_eq!(table.phase(), TablePhase::RoundOver);
    let seat = table.last_result().unwrap().seat(alice).copied().unwrap();
    assert_eq!(seat.player_value, 21);
    assert_eq!(seat.dealer_value, 17);
    assert_eq!(seat.bet, 20);
    assert_eq!(seat.payout, 40);
    assert_eq!(table.participant(alice).unwrap().money, 120);
    assert_eq!(table.participant(alice).unwrap().cards.len(), 3);
}

#[test]
fn double_down_without_funds_keeps_the_turn() {
    let (table, alice) = solo(15);
    let events = record(&table, &[TableEventKind::InsufficientFunds]);
    deal_solo(&table, alice, &[Rank::Nine, Rank::Five, Rank::Six, Rank::Two]);

    assert_eq!(table.double_down(alice), Err(ActionError::InsufficientFunds));

    let view = table.participant(alice).unwrap();
    assert_eq!(view.money, 5);
    assert_eq!(view.bet, 10);
    assert_eq!(view.cards.len(), 2);
    assert_eq!(table.current_participant(), Some(alice));
    assert_eq!(
        events.lock().unwrap().as_slice(),
        &[TableEvent::InsufficientFunds { player_id: alice }]
    );

    assert_eq!(table.hit(alice), Ok(true));
}

#[test]
fn actions_check_phase_and_turn() {
    let table = Table::new(TableOptions::default(), 1).unwrap();
    let alice = table.join_human("Alice", 100).unwrap();
    let bob = table.join_human("Bob", 100).unwrap();
    table.start_game().unwrap();
    assert_eq!(table.hit(alice), Err(ActionError::InvalidState));

    stack(
        &table,
        &[Rank::Nine, Rank::Ten, Rank::Two, Rank::Ten, Rank::Three, Rank::Four],
    );
    table.start_round().unwrap();
    table.place_bet(alice, 10).unwrap();
    table.place_bet(bob, 10).unwrap();
    table.deal().unwrap();

    assert_eq!(table.current_participant(), Some(alice));
    assert_eq!(table.hit(bob), Err(ActionError::NotYourTurn));
    assert_eq!(table.stand(bob), Err(ActionError::NotYourTurn));

    table.stand(alice).unwrap();
    assert_eq!(table.current_participant(), Some(bob));
    assert!(table.participant(bob).unwrap().has_turn);
    assert!(!table.participant(alice).unwrap().has_turn);
}

#[test]
fn invalid_bets_count_attempts() {
    let (table, alice) = solo(50);
    let events = record(
        &table,
        &[TableEventKind::InvalidBet, TableEventKind::PlayerLeft],
    );
    table.start_round().unwrap();

    assert_eq!(table.place_bet(alice, 1), Err(BetError::OutOfRange));
    assert_eq!(table.place_bet(alice, 101), Err(BetError::OutOfRange));
    assert_eq!(table.pending_bets(), vec![alice]);
    assert_eq!(table.place_bet(alice, 60), Err(BetError::AttemptsExhausted));

    assert_eq!(
        events.lock().unwrap().as_slice(),
        &[
            TableEvent::InvalidBet {
                player_id: alice,
                attempts_left: 2
            },
            TableEvent::InvalidBet {
                player_id: alice,
                attempts_left: 1
            },
            TableEvent::PlayerLeft {
                player_id: alice,
                reason: LeaveReason::BetAttempts
            },
        ]
    );
    assert!(table.participants().is_empty());
    assert_eq!(table.roster().len(), 1);
    assert_eq!(table.participant(alice).unwrap().money, 50);
    assert!(table.pending_bets().is_empty());
    assert_eq!(table.place_bet(alice, 10), Err(BetError::PlayerNotFound));
}

#[test]
fn bet_above_money_is_rejected_without_changes() {
    let (table, alice) = solo(50);
    table.start_round().unwrap();

    assert_eq!(table.place_bet(alice, 60), Err(BetError::InsufficientFunds));
    let view = table.participant(alice).unwrap();
    assert_eq!((view.money, view.bet), (50, 0));

    table.place_bet(alice, 50).unwrap();
    assert_eq!(table.place_bet(alice, 10), Err(BetError::AlreadyPlaced));
    let view = table.participant(alice).unwrap();
    assert_eq!((view.money, view.bet), (0, 50));
}

#[test]
fn deal_waits_for_bets() {
    let (table, alice) = solo(100);
    assert_eq!(table.deal(), Err(DealError::InvalidState));

    stack(&table, &[Rank::Nine, Rank::Ten, Rank::Queen, Rank::Ten]);
    table.start_round().unwrap();
    assert_eq!(table.deal(), Err(DealError::PendingBets));

    table.place_bet(alice, 10).unwrap();
    assert!(table.pending_bets().is_empty());
    table.deal().unwrap();
    assert_eq!(table.cards_remaining(), 1);
}

#[test]
fn short_shoe_ends_the_game_at_round_start() {
    let (table, _) = solo(100);
    stack(&table, &[Rank::Ten, Rank::Ten]);

    assert_eq!(table.start_round(), Err(RoundError::NotEnoughCards));
    assert_eq!(table.phase(), TablePhase::GameOver);
}

#[test]
fn empty_shoe_under_the_dealer_aborts_the_round() {
    let (table, alice) = solo(100);
    let events = record(
        &table,
        &[TableEventKind::RoundAborted, TableEventKind::GameOver],
    );
    deal_solo(&table, alice, &[Rank::Two, Rank::Ten, Rank::Ten]);

    assert_eq!(table.stand(alice), Err(ActionError::DeckExhausted));

    assert_eq!(table.phase(), TablePhase::GameOver);
    let view = table.participant(alice).unwrap();
    assert_eq!((view.money, view.bet), (100, 0));
    assert!(table.last_result().is_none());
    assert_eq!(
        events.lock().unwrap().as_slice(),
        &[TableEvent::RoundAborted { round: 1 }, TableEvent::GameOver]
    );
}

#[test]
fn empty_shoe_on_a_hit_forces_a_stand() {
    let (table, alice) = solo(100);
    let events = record(&table, &[TableEventKind::DeckExhausted]);
    deal_solo(&table, alice, &[Rank::Ten, Rank::Ten, Rank::Two]);

    assert_eq!(table.hit(alice), Err(ActionError::DeckExhausted));

    let view = table.participant(alice).unwrap();
    assert!(!view.can_act);
    assert_eq!(view.cards.len(), 2);
    assert_eq!(table.phase(), TablePhase::GameOver);
    assert_eq!(
        events.lock().unwrap().as_slice(),
        &[
            TableEvent::DeckExhausted {
                player_id: Some(alice)
            },
            TableEvent::DeckExhausted { player_id: None },
        ]
    );
}

#[test]
fn bots_play_their_turn_without_input() {
    let table = Table::new(TableOptions::default(), 9).unwrap();
    let alice = table.join_human("Alice", 100).unwrap();
    let bot = table
        .join_bot("Robo", 1_000, Box::new(ThresholdPolicy::new(1.0)))
        .unwrap();
    table.start_game().unwrap();

    stack(
        &table,
        &[
            Rank::Nine,
            Rank::Ten,
            Rank::Seven,
            Rank::Ten,
            Rank::Eight,
            Rank::Ten,
        ],
    );
    table.start_round().unwrap();
    assert_eq!(table.pending_bets(), vec![alice]);
    let bot_bet = table.participant(bot).unwrap().bet;
    assert!((2..=100).contains(&bot_bet));

    table.place_bet(alice, 10).unwrap();
    table.deal().unwrap();
    assert_eq!(table.current_participant(), Some(alice));

    table.stand(alice).unwrap();

    assert_eq!(table.phase(), TablePhase::RoundOver);
    let result = table.last_result().unwrap();
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.seats.len(), 2);
    assert_eq!(result.seats[0].player_id, alice);
    assert_eq!(result.seats[1].player_id, bot);
    assert_eq!(result.seat(bot).unwrap().player_value, 18);
    assert_eq!(result.seat(bot).unwrap().outcome, Outcome::Lose);
    assert_eq!(table.participant(bot).unwrap().money, 1_000 - bot_bet);
}

#[test]
fn same_seed_gives_same_bot_bets() {
    let bets: Vec<usize> = (0..2)
        .map(|_| {
            let table = Table::new(TableOptions::default(), 42).unwrap();
            table.join_human("Alice", 100).unwrap();
            let bot = table.join_random_bot().unwrap();
            table.start_game().unwrap();
            table.start_round().unwrap();
            table.participant(bot).unwrap().bet
        })
        .collect();

    assert_eq!(bets[0], bets[1]);
}

#[test]
fn conclude_round_keeps_playing_while_a_human_remains() {
    let (table, alice) = solo(100);
    assert_eq!(table.conclude_round(&[]), Err(RoundError::InvalidState));

    deal_solo(&table, alice, &[Rank::Nine, Rank::Ten, Rank::Queen, Rank::Ten]);
    table.stand(alice).unwrap();

    assert_eq!(table.conclude_round(&[]), Ok(RoundEnd::Continue));
    assert_eq!(table.phase(), TablePhase::RoundStart);

    deal_solo(&table, alice, &[Rank::Nine, Rank::Ten, Rank::Queen, Rank::Ten]);
    assert_eq!(table.round_number(), 2);
    table.stand(alice).unwrap();

    assert_eq!(table.conclude_round(&[alice]), Ok(RoundEnd::Terminate));
    assert_eq!(table.phase(), TablePhase::GameOver);
    assert!(table.participants().is_empty());
}

#[test]
fn broke_players_leave() {
    let (table, alice) = solo(10);
    let events = record(&table, &[TableEventKind::PlayerLeft]);
    deal_solo(&table, alice, &[Rank::Ace, Rank::Ten, Rank::King, Rank::Ten]);
    table.stand(alice).unwrap();
    assert_eq!(table.participant(alice).unwrap().money, 0);

    assert_eq!(table.conclude_round(&[]), Ok(RoundEnd::Terminate));
    assert_eq!(
        events.lock().unwrap().as_slice(),
        &[TableEvent::PlayerLeft {
            player_id: alice,
            reason: LeaveReason::Broke
        }]
    );
}

#[test]
fn bots_alone_do_not_continue() {
    let table = Table::new(TableOptions::default(), 5).unwrap();
    let alice = table.join_human("Alice", 100).unwrap();
    let bot = table
        .join_bot("Robo", 1_000, Box::new(ThresholdPolicy::new(1.0)))
        .unwrap();
    table.start_game().unwrap();

    stack(
        &table,
        &[
            Rank::Nine,
            Rank::Ten,
            Rank::Seven,
            Rank::Ten,
            Rank::Eight,
            Rank::Ten,
        ],
    );
    table.start_round().unwrap();
    table.place_bet(alice, 10).unwrap();
    table.deal().unwrap();
    table.stand(alice).unwrap();

    assert_eq!(table.conclude_round(&[alice, bot]), Ok(RoundEnd::Terminate));
    let left: Vec<u8> = table.participants().iter().map(|view| view.id).collect();
    assert_eq!(left, vec![bot]);
}

#[test]
fn round_events_arrive_in_order() {
    let (table, alice) = solo(100);
    let events = record(
        &table,
        &[
            TableEventKind::RoundStarted,
            TableEventKind::BetPlaced,
            TableEventKind::AwaitingAction,
            TableEventKind::DealerPlayed,
            TableEventKind::RoundEnded,
        ],
    );
    deal_solo(&table, alice, &[Rank::Nine, Rank::Ten, Rank::Queen, Rank::Ten]);
    table.stand(alice).unwrap();

    assert_eq!(
        events.lock().unwrap().as_slice(),
        &[
            TableEvent::RoundStarted { round: 1 },
            TableEvent::BetPlaced {
                player_id: alice,
                amount: 10
            },
            TableEvent::AwaitingAction { player_id: alice },
            TableEvent::DealerPlayed { value: 19 },
            TableEvent::RoundEnded { round: 1 },
        ]
    );
}

#[test]
fn participant_observers_see_money_changes() {
    let (table, alice) = solo(100);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    assert!(table.subscribe_participant(
        alice,
        ParticipantEventKind::MoneyChanged,
        move |event| sink.lock().unwrap().push(*event),
    ));
    assert!(!table.subscribe_participant(200, ParticipantEventKind::MoneyChanged, |_| {}));

    deal_solo(&table, alice, &[Rank::Nine, Rank::Ten, Rank::Queen, Rank::Ten]);
    table.stand(alice).unwrap();

    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[
            ParticipantEvent::MoneyChanged(90),
            ParticipantEvent::MoneyChanged(110),
        ]
    );
}

#[test]
fn standings_are_sorted_by_money() {
    let table = Table::new(TableOptions::default(), 0).unwrap();
    table.join_human("Alice", 100).unwrap();
    table.join_human("Bob", 300).unwrap();
    table.join_human("Carol", 200).unwrap();

    let names: Vec<String> = table.standings().into_iter().map(|view| view.name).collect();
    assert_eq!(names, ["Bob", "Carol", "Alice"]);
}

#[test]
fn dealer_view_shows_the_dealt_card() {
    let (table, alice) = solo(100);
    deal_solo(&table, alice, &[Rank::Nine, Rank::Ten, Rank::Queen, Rank::Ten]);

    let dealer = table.dealer_view();
    assert_eq!(dealer.role, RoleKind::Dealer);
    assert_eq!(dealer.name, "Dealer");
    assert_eq!(dealer.cards, vec![card(Rank::Nine)]);
    assert_eq!(dealer.value, 9);
    assert_eq!(dealer.money, 0);
}

#[test]
fn hand_observers_see_dealt_cards() {
    let (table, alice) = solo(100);
    let seen = Arc::new(Mutex::new(Vec::new()));
    for id in [alice, DEALER_ID] {
        let sink = Arc::clone(&seen);
        assert!(table.subscribe_hand(id, HandEventKind::CardAdded, move |event| {
            sink.lock().unwrap().push((id, *event));
        }));
    }
    assert!(!table.subscribe_hand(200, HandEventKind::CardAdded, |_| {}));

    deal_solo(&table, alice, &[Rank::Nine, Rank::Ten, Rank::Queen, Rank::Ten]);
    table.stand(alice).unwrap();

    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[
            (DEALER_ID, HandEvent::CardAdded(card(Rank::Nine))),
            (alice, HandEvent::CardAdded(card(Rank::Ten))),
            (alice, HandEvent::CardAdded(card(Rank::Queen))),
            (DEALER_ID, HandEvent::CardAdded(card(Rank::Ten))),
        ]
    );
}
