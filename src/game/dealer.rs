use super::{DealerStep, DealerTicket, Game, RoundState};

/// Lowest total on which the dealer stands.
pub const DEALER_STAND_MIN: u8 = 17;

/// The dealer's decision rule: hit on any total below 17, soft or hard,
/// stand on 17 or more. A busted total is at least 22 and therefore stands,
/// which ends the auto-play loop.
#[must_use]
pub const fn dealer_should_hit(total: u8) -> bool {
    total < DEALER_STAND_MIN
}

impl Game {
    /// Runs one step of the dealer auto-play loop.
    ///
    /// Intended to be invoked by a timer or scheduler, once per
    /// [`dealer_delay`](crate::GameOptions::dealer_delay), starting after
    /// [`stand`](Game::stand). Each step either draws one dealer card
    /// ([`DealerStep::Hit`], re-schedule another step) or finishes the round
    /// ([`DealerStep::Finished`]).
    ///
    /// A ticket issued for a round that has since ended or been replaced
    /// yields [`DealerStep::Stale`] and mutates nothing, so a late timer
    /// continuation can never touch hands it no longer owns.
    pub fn dealer_step(&mut self, ticket: DealerTicket) -> DealerStep {
        if self.state != RoundState::DealerTurn || ticket.generation != self.generation {
            return DealerStep::Stale;
        }

        if dealer_should_hit(self.dealer_hand.total()) {
            let card = self.dealer_hand.hit(self.deck.as_mut());
            log::debug!("dealer hit: {card} (total {})", self.dealer_hand.total());
            DealerStep::Hit(card)
        } else {
            log::debug!("dealer stands with {}", self.dealer_hand.total());
            DealerStep::Finished(self.finish_round())
        }
    }
}
