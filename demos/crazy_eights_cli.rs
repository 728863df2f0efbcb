//! CLI Crazy Eights example.
//!
//! Run with `RUST_LOG=debug` to see engine events.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use crazy8s::{
    Action, COMPUTER, Card, Deck, Effect, Game, GameOptions, GameState, HUMAN, Suit, TurnOutcome,
};

fn main() {
    env_logger::init();

    println!("Crazy Eights CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let jokers = matches!(prompt_line("Play with jokers? (y/n): ").as_str(), "y" | "yes");
    let options = GameOptions::default().with_jokers(jokers);
    let mut game = Game::new(options, seed);

    if let Err(err) = game.set_up() {
        println!("Setup error: {err}");
        return;
    }

    while !game.finished() {
        if game.current_player() == HUMAN {
            print_table(&game);
            if !human_turn(&mut game) {
                println!("Goodbye.");
                return;
            }
        } else {
            match game.computer_turn() {
                Ok(outcome) => print_outcome("Computer", &outcome),
                Err(err) => {
                    println!("Computer error: {err}");
                    return;
                }
            }
        }
    }

    match game.winner_id() {
        Some(HUMAN) => println!("You won!"),
        Some(COMPUTER) => println!("You lost!"),
        Some(id) => println!("Player {} wins!", id + 1),
        None => {}
    }
}

/// Returns `false` if the player quit.
fn human_turn(game: &mut Game) -> bool {
    loop {
        let input = prompt_line("Which card (or `pick up`): ");
        let choice = match input.as_str() {
            "q" | "quit" => return false,
            "p" | "pick up" => None,
            _ => match input.parse::<usize>() {
                Ok(index) => Some(index),
                Err(_) => {
                    println!("Enter a card number or `pick up`.");
                    continue;
                }
            },
        };

        match game.player_turn(choice) {
            Ok(outcome) => {
                print_outcome("You", &outcome);
                break;
            }
            Err(err) => println!("Invalid choice! {err}. Try again"),
        }
    }

    while game.state() == GameState::AwaitingSuit {
        let suit = match prompt_line("Which suit (hearts/diamonds/clubs/spades): ").as_str() {
            "h" | "hearts" => Suit::Hearts,
            "d" | "diamonds" => Suit::Diamonds,
            "c" | "clubs" => Suit::Clubs,
            "s" | "spades" => Suit::Spades,
            "q" | "quit" => return false,
            _ => continue,
        };

        if let Err(err) = game.choose_suit(suit) {
            println!("Suit error: {err}");
        }
    }

    true
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!("\nStock: {} cards", game.stock().len());
    println!("Computer holds {} cards", game.hands()[COMPUTER].len());
    if let Some(card) = game.active_card() {
        println!("Top of discard: {}", format_card(&card));
    }
    println!("Your hand: {}", format_hand(&game.hands()[HUMAN]));
    println!();
}

fn print_outcome(who: &str, outcome: &TurnOutcome) {
    match outcome.action {
        Action::Played(card) => println!("{who} played {}", format_card(&card)),
        Action::PickedUp(Some(_)) => println!("{who} picked up a card"),
        Action::PickedUp(None) => println!("{who} had nothing to pick up"),
    }

    match outcome.effect {
        Effect::None | Effect::AwaitingSuit => {}
        Effect::SuitChanged(suit) => println!("Suit changed to {suit}"),
        Effect::Penalty { player, cards } => println!("Player {} picks up {cards}", player + 1),
        Effect::Skipped { player } => println!("Player {} misses a go", player + 1),
    }
}

fn format_hand(hand: &Deck) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{index}:{}", format_card(card)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
        Suit::Joker => "35",
    };
    colorize(&card.short_code(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
