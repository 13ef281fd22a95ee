//! A single-hand blackjack round engine.
//!
//! The crate provides a [`Game`] type that sequences one round at a time
//! through `Idle → Playing → DealerTurn → GameOver`, with timer-paced dealer
//! auto-play and a pluggable [`ResultSink`] that receives the final scores
//! of every completed round. Cards come from a [`DeckSource`]: an infinite
//! stream drawn with replacement, random in play and scripted in tests.
//!
//! # Example
//!
//! ```
//! use twentyone::{Card, DealerStep, Game, GameOptions, RoundState, ScriptedDeck, Suit};
//!
//! let deck = ScriptedDeck::new(vec![
//!     Card::new(Suit::Hearts, 13),  // player
//!     Card::new(Suit::Spades, 9),   // player
//!     Card::new(Suit::Clubs, 10),   // dealer up card
//!     Card::new(Suit::Diamonds, 6), // dealer hole card
//!     Card::new(Suit::Hearts, 5),   // dealer draw
//! ]);
//! let mut game = Game::new(GameOptions::default(), Box::new(deck));
//!
//! game.start_round();
//! let ticket = game.stand().expect("standing is valid while playing");
//!
//! loop {
//!     match game.dealer_step(ticket) {
//!         DealerStep::Hit(_) => {}
//!         DealerStep::Finished(summary) => {
//!             assert_eq!(summary.player_score, 19);
//!             assert_eq!(summary.dealer_score, 21);
//!             break;
//!         }
//!         DealerStep::Stale => unreachable!(),
//!     }
//! }
//! assert_eq!(game.state(), RoundState::GameOver);
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod sink;
pub mod store;

// Re-export main types
pub use card::{Card, Suit};
pub use deck::{DeckSource, RandomDeck, ScriptedDeck};
pub use error::{SinkError, StoreError};
pub use game::{DEALER_STAND_MIN, DealerStep, DealerTicket, Game, RoundState, dealer_should_hit};
pub use hand::Hand;
pub use options::GameOptions;
pub use outcome::{Outcome, RoundSummary};
pub use sink::ResultSink;
pub use store::{HISTORY_LIMIT, HistoryEntry, MemoryStore, SessionSink};
