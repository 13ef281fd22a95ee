//! Hand representation and scoring.

use crate::card::Card;
use crate::deck::DeckSource;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total = total.saturating_add(card.blackjack_value());
    }

    // Reinterpret aces from 11 to 1 until the total is legal or no aces
    // remain at 11.
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && total <= 21;
    (total, is_soft)
}

/// An ordered, growable collection of cards.
///
/// Insertion order is draw order: the first two cards are the deal, later
/// cards are hits. For the dealer, the card at index 1 is the hole card that
/// stays hidden until reveal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Deals a fresh two-card hand from the given deck.
    #[must_use]
    pub fn deal(deck: &mut dyn DeckSource) -> Self {
        Self {
            cards: vec![deck.draw(), deck.draw()],
        }
    }

    /// Draws one card from the deck, appends it, and returns it.
    ///
    /// There is no limit on hand length and no bust handling here; the
    /// caller checks [`Hand::total`] after each hit.
    pub fn hit(&mut self, deck: &mut dyn DeckSource) -> Card {
        let card = deck.draw();
        self.cards.push(card);
        card
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the best legal total of the hand.
    ///
    /// Aces count 11 while that keeps the total at or below 21, otherwise 1.
    /// Recomputed on every call since hits append cards.
    #[must_use]
    pub fn total(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (total over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
