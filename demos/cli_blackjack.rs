//! CLI blackjack example.
//!
//! Run with `RUST_LOG=debug` to watch the engine's phase transitions.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{Card, DealerHand, Game, GameOptions, Hand, Phase, RoundResult, Suit};

fn main() {
    env_logger::init();
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);
    let mut balance: usize = 500;

    loop {
        if balance == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        if game.check_and_reshuffle() == Ok(true) {
            println!("Shoe reshuffled.");
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet, &mut balance) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            if let Err(err) = game.clear_bet(&mut balance) {
                println!("Bet error: {err}");
            }
            continue;
        }

        if game.is_insurance_offered() {
            print_table(&game);
            if let Some(up) = game.dealer_hand().up_card() {
                println!("Dealer shows {up}. Insurance costs {}.", game.insurance_cost());
            }
            let taken = match prompt_line("Take insurance? (y/n): ").as_str() {
                "y" | "yes" => game.take_insurance(&mut balance).map(Some),
                _ => game.decline_insurance().map(|()| None),
            };
            match taken {
                Ok(Some(stake)) => println!("Insurance bet placed: {stake}"),
                Ok(None) => {}
                Err(err) => {
                    println!("Insurance error: {err}");
                    if let Err(err) = game.decline_insurance() {
                        println!("Insurance error: {err}");
                    }
                }
            }
            if game.phase() == Phase::Resolution {
                println!("Dealer has blackjack.");
            }
        }

        while game.phase().is_player_turn() {
            print_table(&game);
            println!("{}", format_actions(&game, balance));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand(),
                "d" | "double" => game.double_down(&mut balance).map(|_| ()),
                "p" | "split" => game.split(&mut balance),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        if game.phase() == Phase::DealerTurn {
            match game.dealer_play() {
                Ok(drawn) if !drawn.is_empty() => {
                    println!("Dealer draws {} card(s).", drawn.len());
                }
                Ok(_) => {}
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        match game.showdown(&mut balance) {
            Ok(result) => {
                print_table(&game);
                print_result(&result);
                println!("Balance: {balance}");
            }
            Err(err) => println!("Showdown error: {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    println!("\nShoe: {} cards remaining", game.cards_remaining());

    let dealer = game.dealer_hand();
    println!(
        "\nDealer: {} ({})",
        format_dealer(dealer),
        dealer.score_label()
    );

    let active = game
        .phase()
        .is_player_turn()
        .then(|| game.active_hand_index());
    for (index, hand) in game.hands().iter().enumerate() {
        let marker = if active == Some(index) { "*" } else { " " };
        println!(
            "{} Hand {}: {} | {} | bet {} | {:?}",
            marker,
            index,
            format_hand(hand),
            hand.score_label(),
            hand.bet(),
            hand.status()
        );
    }
    println!();
}

fn print_result(result: &RoundResult) {
    for hand in &result.hands {
        println!(
            "Hand {}: {:?} ({} vs {}), net {}",
            hand.hand_index, hand.outcome, hand.player_value, hand.dealer_value, hand.delta
        );
    }
    if let Some(insurance) = result.insurance {
        println!("Insurance: net {}", insurance.delta);
    }
    println!("Round net: {}", result.net());
}

fn format_actions(game: &Game, balance: usize) -> String {
    let actions = game.available_actions(balance);
    let parts = [
        format_action("hit", "h", actions.hit),
        format_action("stand", "s", actions.stand),
        format_action("double", "d", actions.double),
        format_action("split", "p", actions.split),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }
    join_cards(dealer.cards())
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    join_cards(hand.cards())
}

fn join_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    if card.face_down {
        return card.to_string();
    }
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
