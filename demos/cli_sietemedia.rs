//! CLI siete y media example.
//!
//! Plays the role of the presentation collaborator: prompts for input,
//! feeds commands to the engine, and renders the drained events.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use sietemedia::{Card, Outcome, RoundPhase, Seat, Suit, Table, TableEvent};

fn main() {
    println!("Siete y media CLI example (type 'q' to quit)");

    let name = prompt_line("Your name: ");
    let Some(bankroll) = prompt_i64("Starting money: ") else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let table = Table::new(&name, bankroll, seed);

    loop {
        if table.is_broke() {
            println!("You are broke. Game over.");
            break;
        }

        println!("\nYou have ${} available.", table.bankroll());
        let Some(bet) = prompt_i64(&format!("Bet amount (1-{}, 0 to quit): ", table.bankroll()))
        else {
            break;
        };
        if bet == 0 {
            println!("Goodbye, {}. You leave with ${}.", table.name(), table.bankroll());
            break;
        }

        if let Err(err) = table.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }
        println!("You bet ${bet}. Both hidden cards are face down.");

        while table.phase() == RoundPhase::PlayerTurn {
            let action = prompt_line("Action (h = hit, s = stand, q = quit): ");
            let result = match action.to_lowercase().as_str() {
                "h" | "hit" => table.hit().map(|_| ()),
                "s" | "stand" => table.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Engine error: {err}");
                break;
            }

            render_events(&table);
        }

        table.new_round();
    }
}

fn render_events(table: &Table) {
    for event in table.drain_events() {
        match event {
            TableEvent::HiddenCardRevealed { seat, card } => {
                println!("{} hidden card was {}.", seat_name(seat), format_card(card));
            }
            TableEvent::CardDrawn { seat, card, sum } => {
                println!(
                    "{} draws {} (sum {sum}).",
                    seat_name(seat),
                    format_card(card)
                );
            }
            TableEvent::RoundResolved {
                outcome,
                delta,
                balance,
            } => {
                println!("{}", outcome_message(outcome, delta));
                println!("You have ${balance} available.");
            }
            TableEvent::Broke => {
                println!("You have lost all your money!");
            }
        }
    }
}

const fn seat_name(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "Your",
        Seat::Dealer => "Dealer's",
    }
}

fn format_card(card: Card) -> String {
    let rank = match card.rank {
        10 => "sota".to_string(),
        11 => "caballo".to_string(),
        12 => "rey".to_string(),
        n => n.to_string(),
    };
    let suit = match card.suit {
        Suit::Oros => "oros",
        Suit::Copas => "copas",
        Suit::Espadas => "espadas",
        Suit::Bastos => "bastos",
    };
    format!("{rank} de {suit}")
}

fn outcome_message(outcome: Outcome, delta: i64) -> String {
    match outcome {
        Outcome::Natural => format!("Siete y media on two cards! You win ${delta}."),
        Outcome::PlayerWins => format!("You win ${delta}!"),
        Outcome::DealerBusted => format!("Dealer busted! You win ${delta}."),
        Outcome::PlayerBusted => format!("You busted. You lose ${}.", -delta),
        Outcome::DealerWins => format!("Dealer wins. You lose ${}.", -delta),
        Outcome::Tie => format!("A tie goes to the house. You lose ${}.", -delta),
    }
}

fn prompt_line(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

fn prompt_i64(message: &str) -> Option<i64> {
    loop {
        let line = prompt_line(message);
        if line == "q" || line == "quit" {
            return None;
        }
        match line.parse::<i64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Enter a number."),
        }
    }
}
