//! Interactive terminal blackjack table.
//!
//! Run with `RUST_LOG=debug` to watch the engine's round log.

use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use twentyone::{
    Card, DealerStep, Game, GameOptions, Hand, MemoryStore, RandomDeck, RoundState, SessionSink,
};

const SCORES_PATH: &str = "scores.json";

fn main() {
    env_logger::init();

    println!("TWENTYONE (type 'q' to quit)");

    let username = prompt_line("Username (blank to play unranked): ");
    let store = Arc::new(Mutex::new(load_store(SCORES_PATH)));

    let options = GameOptions::default();
    let mut game = Game::new(options, Box::new(RandomDeck::new()));
    if !username.is_empty() {
        game = game.with_sink(Box::new(SessionSink::new(Arc::clone(&store), &username)));
    }

    loop {
        game.start_round();
        print_table(&game);

        while game.state() == RoundState::Playing {
            match prompt_line("[h]it / [s]tand: ").as_str() {
                "h" | "hit" => {
                    if let Some(card) = game.hit() {
                        println!("You draw {card}.");
                    }
                    print_table(&game);
                }
                "s" | "stand" => {
                    if let Some(ticket) = game.stand() {
                        print_table(&game);
                        loop {
                            thread::sleep(game.options.dealer_delay);
                            match game.dealer_step(ticket) {
                                DealerStep::Hit(card) => {
                                    println!("Dealer draws {card}.");
                                    print_table(&game);
                                }
                                DealerStep::Finished(_) | DealerStep::Stale => break,
                            }
                        }
                    }
                }
                "q" | "quit" => {
                    save_store(&store, SCORES_PATH);
                    return;
                }
                _ => println!("Unknown action."),
            }
        }

        if let Some(summary) = game.last_summary() {
            println!(
                "\n{} (player {}, dealer {})",
                summary.message(),
                summary.player_score,
                summary.dealer_score
            );
        }

        if !username.is_empty() {
            save_store(&store, SCORES_PATH);
            print_standings(&store, &username);
        }

        if prompt_line("\nPlay again? (y/n): ") != "y" {
            return;
        }
    }
}

fn load_store(path: &str) -> MemoryStore {
    if Path::new(path).exists() {
        match MemoryStore::load(path) {
            Ok(store) => return store,
            Err(err) => println!("Could not load {path}: {err}"),
        }
    }
    MemoryStore::new()
}

fn save_store(store: &Arc<Mutex<MemoryStore>>, path: &str) {
    let store = store.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(err) = store.save(path) {
        println!("Could not save {path}: {err}");
    }
}

fn print_standings(store: &Arc<Mutex<MemoryStore>>, username: &str) {
    let store = store.lock().unwrap_or_else(PoisonError::into_inner);

    println!("\nLeaderboard:");
    for (rank, (name, score)) in store.leaderboard().iter().enumerate() {
        println!("  {}. {name} - {score}", rank + 1);
    }

    println!("Recent rounds for {username}:");
    for entry in store.history(username) {
        println!(
            "  player {} vs dealer {} - {}",
            entry.player_score, entry.dealer_score, entry.result
        );
    }
}

fn print_table(game: &Game) {
    let dealer = format_dealer(game.dealer_hand(), game.hole_hidden());
    println!("\nDealer: {dealer} (score {})", game.visible_dealer_total());
    println!(
        "Player: {} (score {})",
        format_hand(game.player_hand()),
        game.player_hand().total()
    );
}

fn format_dealer(hand: &Hand, hole_hidden: bool) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (index, card) in hand.cards().iter().enumerate() {
        if index == 1 && hole_hidden {
            parts.push("??".to_owned());
        } else {
            parts.push(format_card(card));
        }
    }
    parts.join(", ")
}

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_card(card: &Card) -> String {
    card.to_string()
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
