//! Serialization of options and round results.

#![cfg(feature = "serde")]

use bjround::{Card, Game, GameOptions, Phase, Rank, RoundResult, RoundingMode, Shoe, Suit};

#[test]
fn options_survive_json() {
    let options = GameOptions::default()
        .with_decks(2)
        .with_rounding_blackjack(RoundingMode::Nearest)
        .with_stand_on_soft_17(false);

    let json = serde_json::to_string(&options).unwrap();
    let back: GameOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back, options);
}

#[test]
fn round_result_serializes_outcomes() {
    let draws: Vec<Card> = [Rank::Ace, Rank::Nine, Rank::King, Rank::Seven]
        .into_iter()
        .map(|rank| Card::new(rank, Suit::Spades))
        .collect();
    let mut game = Game::new(GameOptions::default().with_reshuffle_threshold(0), 1);
    game.load_shoe(Shoe::from_draws(&draws)).unwrap();

    let mut balance: usize = 100;
    game.place_bet(10, &mut balance).unwrap();
    game.deal().unwrap();
    assert_eq!(game.phase(), Phase::Resolution);
    let result = game.showdown(&mut balance).unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["hands"][0]["outcome"], "Blackjack");
    assert_eq!(value["hands"][0]["delta"], 15);
    assert_eq!(value["dealer_value"], 16);

    let back: RoundResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, result);
}
