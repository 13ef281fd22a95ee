//! Deck sources: infinite streams of cards drawn with replacement.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Suit};

/// An endless source of cards.
///
/// Each draw is an independent sample; the deck never depletes. This models
/// the infinite-deck variant of blackjack rather than a counted shoe, and it
/// lets tests substitute a deterministic sequence (see [`ScriptedDeck`]).
pub trait DeckSource {
    /// Draws one card.
    fn draw(&mut self) -> Card;
}

/// A [`DeckSource`] that samples suit and rank uniformly at random.
#[derive(Debug, Clone)]
pub struct RandomDeck {
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl RandomDeck {
    /// Creates a deck seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Creates a deterministic deck from the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckSource for RandomDeck {
    fn draw(&mut self) -> Card {
        let suit = Suit::ALL[self.rng.random_range(0..Suit::ALL.len())];
        let rank = self.rng.random_range(1..=13);
        Card::new(suit, rank)
    }
}

/// A [`DeckSource`] that replays a fixed sequence of cards.
///
/// Once the script is exhausted, draws start over from the beginning, so the
/// source can never run dry.
#[derive(Debug, Clone)]
pub struct ScriptedDeck {
    /// The scripted card sequence.
    cards: Vec<Card>,
    /// Index of the next card to deal.
    next: usize,
}

impl ScriptedDeck {
    /// Creates a scripted deck from the given draw order.
    ///
    /// # Panics
    ///
    /// Panics if `cards` is empty.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        assert!(!cards.is_empty(), "scripted deck needs at least one card");
        Self { cards, next: 0 }
    }
}

impl DeckSource for ScriptedDeck {
    fn draw(&mut self) -> Card {
        let card = self.cards[self.next % self.cards.len()];
        self.next += 1;
        card
    }
}
