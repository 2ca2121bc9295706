//! Bot policy tests.

#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bjtable::{
    BotAction, BotPolicy, BotView, Card, CardEvaluator, DealerAwarePolicy, Participant, Rank,
    Shoe, Suit, ThresholdPolicy, UniformRandomPolicy,
};

const fn view(hand_value: u32, dealer_value: u32) -> BotView {
    BotView {
        hand_value,
        dealer_value,
        money: 100,
        bet: 10,
    }
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

#[test]
fn threshold_policy_bounds() {
    let mut rng = rng();
    let mut policy = ThresholdPolicy::new(0.5);

    for value in 18..=21 {
        assert_eq!(policy.decide(&view(value, 10), &mut rng), BotAction::Stand);
    }
    for value in 2..=11 {
        assert_eq!(policy.decide(&view(value, 10), &mut rng), BotAction::Hit);
    }
}

#[test]
fn threshold_policy_probability_extremes() {
    let mut rng = rng();
    let mut never = ThresholdPolicy::new(0.0);
    let mut always = ThresholdPolicy::new(1.0);

    for value in 12..=17 {
        assert_eq!(never.decide(&view(value, 10), &mut rng), BotAction::Hit);
        assert_eq!(always.decide(&view(value, 10), &mut rng), BotAction::Stand);
    }
}

#[test]
fn threshold_policy_clamps_probability() {
    assert_eq!(ThresholdPolicy::new(2.0).stand_probability(), 1.0);
    assert_eq!(ThresholdPolicy::new(-1.0).stand_probability(), 0.0);
    assert_eq!(ThresholdPolicy::new(f64::NAN).stand_probability(), 0.0);
}

#[test]
fn threshold_policy_mixes_in_the_middle() {
    let mut rng = rng();
    let mut policy = ThresholdPolicy::new(0.5);
    let stands = (0..1_000)
        .filter(|_| policy.decide(&view(15, 10), &mut rng) == BotAction::Stand)
        .count();

    assert!((350..=650).contains(&stands), "{stands} stands");
}

#[test]
fn dealer_aware_policy_doubles_against_weak_dealers() {
    let mut rng = rng();
    let mut policy = DealerAwarePolicy::new();

    assert_eq!(policy.decide(&view(10, 6), &mut rng), BotAction::Double);
    assert_eq!(policy.decide(&view(11, 9), &mut rng), BotAction::Double);
    assert_eq!(policy.decide(&view(11, 10), &mut rng), BotAction::Hit);
    assert_eq!(policy.decide(&view(9, 5), &mut rng), BotAction::Hit);
    assert_eq!(policy.decide(&view(17, 5), &mut rng), BotAction::Hit);
    assert_eq!(policy.decide(&view(18, 5), &mut rng), BotAction::Stand);
}

#[test]
fn uniform_policy_uses_every_action() {
    let mut rng = rng();
    let mut policy = UniformRandomPolicy::new();
    let actions: Vec<BotAction> = (0..300)
        .map(|_| policy.decide(&view(12, 10), &mut rng))
        .collect();

    for action in [BotAction::Hit, BotAction::Stand, BotAction::Double] {
        assert!(actions.contains(&action), "{action:?} never chosen");
    }
}

#[test]
fn uniform_policy_never_doubles_without_funds() {
    let mut rng = rng();
    let mut policy = UniformRandomPolicy::new();
    let broke = BotView {
        money: 5,
        ..view(12, 10)
    };

    for _ in 0..300 {
        assert_ne!(policy.decide(&broke, &mut rng), BotAction::Double);
    }
}

#[test]
fn policies_are_reproducible_with_the_same_seed() {
    let decide_all = || {
        let mut rng = rng();
        let mut policy = UniformRandomPolicy::new();
        (0..50)
            .map(|_| policy.decide(&view(14, 7), &mut rng))
            .collect::<Vec<_>>()
    };

    assert_eq!(decide_all(), decide_all());
}

#[test]
fn unaffordable_double_is_played_as_a_hit() {
    let mut shoe = Shoe::from_cards(
        [Rank::Five, Rank::Five, Rank::Two]
            .into_iter()
            .map(|rank| Card::new(rank, Suit::Clubs))
            .collect(),
    );
    let mut bot = Participant::bot(
        0,
        "Robo",
        10,
        CardEvaluator::default(),
        Box::new(DealerAwarePolicy::new()),
    )
    .unwrap();
    bot.place_bet(10).unwrap();
    bot.take_card(&mut shoe).unwrap();
    bot.take_card(&mut shoe).unwrap();

    assert_eq!(bot.play_automated(&mut shoe, 6, &mut rng()), Ok(true));

    assert_eq!(bot.hand().len(), 3);
    assert_eq!(bot.hand_value(), 12);
    assert_eq!((bot.money(), bot.bet()), (0, 10));
}

#[test]
fn affordable_double_ends_the_turn() {
    let mut shoe = Shoe::from_cards(
        [Rank::Five, Rank::Six, Rank::Nine]
            .into_iter()
            .map(|rank| Card::new(rank, Suit::Clubs))
            .collect(),
    );
    let mut bot = Participant::bot(
        0,
        "Robo",
        100,
        CardEvaluator::default(),
        Box::new(DealerAwarePolicy::new()),
    )
    .unwrap();
    bot.place_bet(10).unwrap();
    bot.take_card(&mut shoe).unwrap();
    bot.take_card(&mut shoe).unwrap();

    assert_eq!(bot.play_automated(&mut shoe, 4, &mut rng()), Ok(false));

    assert_eq!(bot.hand_value(), 20);
    assert_eq!((bot.money(), bot.bet()), (80, 20));
    assert!(!bot.can_act());
}
