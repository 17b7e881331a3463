//! CLI poker hand example.
//!
//! Type a hand such as `Jd 10d Ad Qd Kd` to classify it, `d` to deal a random
//! hand, or `q` to quit. Set `RUST_LOG=trace` to see the library logs.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pokrs::{Card, Deck, Hand, HandEvaluator, Suit};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .init();

    println!("Poker hand CLI example (type 'd' to deal, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut deck = Deck::new(seed);

    loop {
        let Some(input) = prompt_line("Hand: ") else {
            break;
        };

        match input.as_str() {
            "q" | "quit" => {
                println!("Goodbye.");
                break;
            }
            "d" | "deal" => {
                if deck.cards_remaining() < pokrs::HAND_SIZE {
                    println!("Deck reshuffled.");
                    deck.reshuffle();
                }
                match deck.deal_hand() {
                    Ok(hand) => print_hand(&hand),
                    Err(err) => println!("Deal error: {err}"),
                }
            }
            "" => {}
            _ => match Hand::parse(&input) {
                Ok(hand) => print_hand(&hand),
                Err(err) => println!("{}", colorize(&err.to_string(), "31")),
            },
        }
    }
}

/// Reads a trimmed line, `None` at end of input.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn print_hand(hand: &Hand) {
    let cards = hand
        .cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    let description = HandEvaluator::new(hand).describe();
    println!("{cards} => {description}");
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
