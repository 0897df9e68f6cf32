//! Hand evaluator tests.

use bjround::{
    Card, Hand, HandStatus, Rank, Suit, can_split, hand_value, is_blackjack, is_bust, score_label,
};
use proptest::prelude::*;

fn c(rank: u8) -> Card {
    Card::new(Rank::try_from(rank).unwrap(), Suit::Spades)
}

fn cs(rank: u8, suit: Suit) -> Card {
    Card::new(Rank::try_from(rank).unwrap(), suit)
}

fn down(rank: u8) -> Card {
    c(rank).turned_down()
}

#[test]
fn hand_value_counts_aces_flexibly() {
    assert_eq!(hand_value(&[c(7), c(8)]), 15);
    assert_eq!(hand_value(&[c(11), c(12), c(13)]), 30);
    assert_eq!(hand_value(&[c(10), c(7)]), 17);
    assert_eq!(hand_value(&[c(1), c(9)]), 20);
    assert_eq!(hand_value(&[c(1), c(9), c(5)]), 15);
    assert_eq!(hand_value(&[c(1), c(1)]), 12);
    assert_eq!(hand_value(&[c(1), c(1), c(1)]), 13);
    assert_eq!(hand_value(&[c(1), c(10)]), 21);
    assert_eq!(hand_value(&[c(1), c(13)]), 21);
    assert_eq!(hand_value(&[c(10), c(10), c(10)]), 30);
}

#[test]
fn long_hands_keep_exact_totals() {
    let aces = vec![c(1); 24];
    assert_eq!(hand_value(&aces), 24);
    assert!(is_bust(&aces));
    assert_eq!(score_label(&aces), "24");

    assert_eq!(hand_value(&vec![c(10); 30]), 300);

    let mut shoe_worth: Vec<Card> = vec![c(13); 96];
    shoe_worth.extend(vec![c(1); 24]);
    assert_eq!(hand_value(&shoe_worth), 984);
}

#[test]
fn hand_value_skips_face_down_cards() {
    assert_eq!(hand_value(&[c(10), down(10)]), 10);
    assert_eq!(hand_value(&[down(5), down(7)]), 0);
    assert_eq!(hand_value(&[]), 0);
}

#[test]
fn bust_detection() {
    assert!(is_bust(&[c(10), c(10), c(5)]));
    assert!(!is_bust(&[c(10), c(10), c(1)]));
    assert!(!is_bust(&[c(10), c(8)]));
    assert!(!is_bust(&[c(1), c(9), c(5)]));
}

#[test]
fn blackjack_needs_two_cards_totalling_21() {
    for ten in [10, 11, 12, 13] {
        assert!(is_blackjack(&[c(1), c(ten)]));
    }
    assert!(!is_blackjack(&[c(7), c(7), c(7)]));
    assert!(!is_blackjack(&[c(10), c(9)]));
    assert!(!is_blackjack(&[c(1)]));
    assert!(!is_blackjack(&[c(10), c(10)]));
}

#[test]
fn blackjack_counts_the_hole_card() {
    assert!(is_blackjack(&[c(1), down(13)]));
    assert!(is_blackjack(&[down(1), c(13)]));
}

#[test]
fn split_needs_identical_ranks() {
    assert!(can_split(&[cs(8, Suit::Spades), cs(8, Suit::Clubs)]));
    assert!(can_split(&[cs(1, Suit::Hearts), cs(1, Suit::Diamonds)]));
    assert!(!can_split(&[cs(10, Suit::Diamonds), cs(13, Suit::Hearts)]));
    assert!(!can_split(&[c(11), c(12)]));
    assert!(!can_split(&[c(8), c(8), c(8)]));
    assert!(!can_split(&[c(8)]));
}

#[test]
fn score_labels() {
    assert_eq!(score_label(&[c(10), c(7)]), "17");
    assert_eq!(score_label(&[c(1), c(6)]), "soft 17");
    assert_eq!(score_label(&[c(1), c(9), c(5)]), "15");
    assert_eq!(score_label(&[c(1), c(13)]), "21");
    assert_eq!(score_label(&[c(1), c(1)]), "12");
    assert_eq!(score_label(&[c(9), down(5)]), "9");
    assert_eq!(score_label(&[c(1), down(5)]), "soft 11");
}

#[test]
fn hand_status_follows_cards() {
    let natural = Hand::with_cards(&[c(1), c(13)], 10);
    assert_eq!(natural.status(), HandStatus::Blackjack);
    assert!(natural.is_soft());

    let mut split = Hand::from_split(c(1), 10);
    assert!(split.is_split_aces());
    split.add_card(c(13));
    assert_eq!(split.value(), 21);
    assert_eq!(split.status(), HandStatus::Active);

    let bust = Hand::with_cards(&[c(10), c(10), c(2)], 5);
    assert_eq!(bust.status(), HandStatus::Bust);
}

#[test]
fn rank_conversion_rejects_out_of_range() {
    assert_eq!(Rank::try_from(1), Ok(Rank::Ace));
    assert_eq!(Rank::try_from(13), Ok(Rank::King));
    assert_eq!(Rank::try_from(0), Err(bjround::InvalidRank(0)));
    assert_eq!(Rank::try_from(14), Err(bjround::InvalidRank(14)));
    assert_eq!(Rank::Queen.number(), 12);
}

#[test]
fn cards_render_rank_and_suit() {
    assert_eq!(cs(1, Suit::Spades).to_string(), "A♠");
    assert_eq!(cs(10, Suit::Hearts).to_string(), "10♥");
    assert_eq!(cs(12, Suit::Diamonds).to_string(), "Q♦");
    assert_eq!(down(12).to_string(), "??");
}

fn card_strategy() -> impl Strategy<Value = Card> {
    (1_u8..=13, 0_usize..4).prop_map(|(rank, suit)| cs(rank, Suit::ALL[suit]))
}

proptest! {
    #[test]
    fn hand_value_is_best_total(cards in prop::collection::vec(card_strategy(), 0..40)) {
        let aces = cards.iter().filter(|c| c.rank.is_ace()).count();
        let low: u32 = cards
            .iter()
            .map(|c| if c.rank.is_ace() { 1 } else { u32::from(c.rank.value()) })
            .sum();
        let expected = if aces > 0 && low + 10 <= 21 { low + 10 } else { low };

        prop_assert_eq!(u32::from(hand_value(&cards)), expected);
        prop_assert_eq!(is_bust(&cards), low > 21);
    }

    #[test]
    fn face_down_cards_never_add_to_the_visible_total(
        up in prop::collection::vec(card_strategy(), 0..5),
        hidden in prop::collection::vec(card_strategy(), 0..3),
    ) {
        let mut cards = up.clone();
        cards.extend(hidden.iter().map(|c| c.turned_down()));
        prop_assert_eq!(hand_value(&cards), hand_value(&up));
    }
}
