use crate::card::Card;
use crate::hand::Hand;

use super::{DealerTicket, Game, RoundState};

impl Game {
    /// Starts a new round.
    ///
    /// Valid from [`RoundState::Idle`] or [`RoundState::GameOver`]; a no-op
    /// otherwise. Both hands are replaced with fresh two-card deals and the
    /// dealer's second card starts face down. Any dealer continuation still
    /// pending for an earlier round is invalidated by the generation bump.
    pub fn start_round(&mut self) {
        match self.state {
            RoundState::Idle | RoundState::GameOver => {}
            RoundState::Playing | RoundState::DealerTurn => return,
        }

        self.generation = self.generation.wrapping_add(1);
        self.player_hand = Hand::deal(self.deck.as_mut());
        self.dealer_hand = Hand::deal(self.deck.as_mut());
        self.hole_hidden = true;
        self.last_summary = None;
        self.state = RoundState::Playing;

        let cards = self.player_hand.cards();
        log::info!("round started: player dealt {}, {}", cards[0], cards[1]);
        log::debug!("dealer shows {}", self.dealer_hand.cards()[0]);
    }

    /// Player action: hit (draw a card).
    ///
    /// Valid only in [`RoundState::Playing`]; a no-op returning `None`
    /// otherwise. If the draw busts the player the round ends immediately,
    /// without a dealer turn.
    pub fn hit(&mut self) -> Option<Card> {
        if self.state != RoundState::Playing {
            return None;
        }

        let card = self.player_hand.hit(self.deck.as_mut());
        let total = self.player_hand.total();
        log::debug!("player hit: {card} (total {total})");

        if self.player_hand.is_bust() {
            log::debug!("player busts with {total}");
            self.finish_round();
        }

        Some(card)
    }

    /// Player action: stand (take no further cards).
    ///
    /// Valid only in [`RoundState::Playing`]; a no-op returning `None`
    /// otherwise. Reveals the dealer's hole card, moves to
    /// [`RoundState::DealerTurn`], and returns the ticket that drives the
    /// dealer auto-play loop: schedule the first
    /// [`dealer_step`](Game::dealer_step) after
    /// [`dealer_delay`](crate::GameOptions::dealer_delay).
    pub fn stand(&mut self) -> Option<DealerTicket> {
        if self.state != RoundState::Playing {
            return None;
        }

        log::debug!("player stands with {}", self.player_hand.total());

        self.hole_hidden = false;
        if let Some(hole) = self.dealer_hand.cards().get(1) {
            log::debug!("dealer reveals {hole}");
        }
        self.state = RoundState::DealerTurn;

        Some(DealerTicket {
            generation: self.generation,
        })
    }
}
