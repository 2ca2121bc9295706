//! Property tests for hands, the shoe, the dealer and settlement.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bjtable::{
    AceValue, BLACKJACK_VALUE, Card, CardEvaluator, DECK_SIZE, Hand, Outcome, Participant, Rank,
    Shoe, Suit, settlement,
};

fn any_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

fn any_evaluator() -> impl Strategy<Value = CardEvaluator> {
    prop_oneof![Just(AceValue::One), Just(AceValue::Eleven)].prop_map(CardEvaluator::new)
}

fn shuffled_shoe(decks: u8, seed: u64) -> Shoe {
    let mut shoe = Shoe::new(decks);
    shoe.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    shoe
}

proptest! {
    #[test]
    fn cached_value_matches_a_fresh_sum(
        evaluator in any_evaluator(),
        added in prop::collection::vec(any_card(), 0..20),
        removed in prop::collection::vec(any_card(), 0..10),
    ) {
        let mut hand = Hand::new(evaluator);
        for card in &added {
            hand.add_card(*card);
            prop_assert_eq!(hand.value(), hand.evaluate(evaluator));
        }
        for card in &removed {
            let held = hand.cards().contains(card);
            prop_assert_eq!(hand.remove_card(*card).is_some(), held);
            prop_assert_eq!(hand.value(), hand.evaluate(evaluator));
        }
        hand.clear();
        prop_assert_eq!(hand.value(), 0);
    }

    #[test]
    fn dealing_removes_exactly_the_dealt_cards(
        decks in 1u8..4,
        seed in any::<u64>(),
        count in 0usize..200,
    ) {
        let mut shoe = shuffled_shoe(decks, seed);
        let total = usize::from(decks) * DECK_SIZE;
        let count = count.min(total);

        let mut dealt = shoe.deal_many(count).unwrap();
        prop_assert_eq!(shoe.len(), total - count);

        dealt.extend(shoe.deal_all());
        dealt.sort();
        let mut full: Vec<Card> = Shoe::new(decks).deal_all();
        full.sort();
        prop_assert_eq!(dealt, full);
    }

    #[test]
    fn dealer_stops_at_the_threshold(
        seed in any::<u64>(),
        threshold in 1u32..=26,
        evaluator in any_evaluator(),
    ) {
        let mut shoe = shuffled_shoe(1, seed);
        let mut dealer = Participant::dealer(evaluator);

        let drawn = dealer.take_cards_until(&mut shoe, threshold).unwrap();
        prop_assert!(drawn.len() <= threshold as usize);
        prop_assert!(dealer.hand_value() >= threshold);
        prop_assert_eq!(drawn.len() + shoe.len(), DECK_SIZE);
        if let Some(&last) = drawn.last() {
            let before_last = dealer.hand_value() - u32::from(evaluator.evaluate(last));
            prop_assert!(before_last < threshold);
        }
    }

    #[test]
    fn busted_participants_cannot_act(
        seed in any::<u64>(),
        hits in 1usize..12,
    ) {
        let mut shoe = shuffled_shoe(1, seed);
        let mut player =
            Participant::human(0, "Alice", 100, CardEvaluator::default()).unwrap();

        for _ in 0..hits {
            let again = player.hit(&mut shoe).unwrap();
            if player.is_busted() {
                prop_assert!(!again);
            }
            prop_assert!(!(player.is_busted() && player.can_act()));
            player.set_can_act(true);
            prop_assert!(!(player.is_busted() && player.can_act()));
        }
    }

    #[test]
    fn busted_players_always_lose(
        player_value in (BLACKJACK_VALUE + 1)..40,
        dealer_value in 0u32..40,
        bet in 1usize..1_000,
    ) {
        let outcome = settlement::outcome(player_value, dealer_value);
        prop_assert_eq!(outcome, Outcome::Lose);
        prop_assert_eq!(
            settlement::payout(outcome, bet, &bjtable::TableOptions::default()),
            0
        );
    }

    #[test]
    fn standing_players_beat_a_busted_dealer(
        player_value in 2u32..=BLACKJACK_VALUE,
        dealer_value in (BLACKJACK_VALUE + 1)..40,
    ) {
        prop_assert_eq!(settlement::outcome(player_value, dealer_value), Outcome::Win);
    }
}
