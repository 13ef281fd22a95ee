//! Round state machine.

use crate::deck::DeckSource;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::outcome::{Outcome, RoundSummary};
use crate::sink::ResultSink;

mod actions;
mod dealer;
pub mod state;

pub use dealer::{DEALER_STAND_MIN, dealer_should_hit};
pub use state::{DealerStep, DealerTicket, RoundState};

/// A single-player blackjack table that sequences one round at a time.
///
/// The game owns the two hands, the round state, the deck source, and an
/// optional [`ResultSink`] that receives the final scores of every completed
/// round. All mutation flows through the action methods; invalid actions for
/// the current state are silent no-ops.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Where cards come from.
    deck: Box<dyn DeckSource>,
    /// Where finished rounds are reported. `None` skips reporting entirely.
    sink: Option<Box<dyn ResultSink>>,
    /// Current round state.
    state: RoundState,
    /// Bumped on every round start; stale dealer continuations are detected
    /// by comparing their ticket against this.
    generation: u64,
    /// The player's hand.
    player_hand: Hand,
    /// The dealer's hand.
    dealer_hand: Hand,
    /// Whether the dealer's second card is still face down. Presentation
    /// state, tracked alongside the hand rather than inside it.
    hole_hidden: bool,
    /// Summary of the most recently completed round.
    last_summary: Option<RoundSummary>,
}

impl Game {
    /// Creates a new table with no result sink.
    #[must_use]
    pub fn new(options: GameOptions, deck: Box<dyn DeckSource>) -> Self {
        Self {
            options,
            deck,
            sink: None,
            state: RoundState::Idle,
            generation: 0,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            hole_hidden: true,
            last_summary: None,
        }
    }

    /// Attaches a result sink that will receive every completed round.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn ResultSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns whether the dealer's second card is still face down.
    #[must_use]
    pub const fn hole_hidden(&self) -> bool {
        self.hole_hidden
    }

    /// Returns the dealer total as visible to the player.
    ///
    /// While the hole card is hidden only the up card counts; afterwards
    /// this is the full total.
    #[must_use]
    pub fn visible_dealer_total(&self) -> u8 {
        if self.hole_hidden {
            self.dealer_hand
                .cards()
                .first()
                .map_or(0, |card| card.blackjack_value())
        } else {
            self.dealer_hand.total()
        }
    }

    /// Returns the summary of the most recently completed round.
    #[must_use]
    pub const fn last_summary(&self) -> Option<RoundSummary> {
        self.last_summary
    }

    /// Ends the round: resolves the outcome, reports it, and moves to
    /// [`RoundState::GameOver`].
    ///
    /// A sink failure is logged and ignored; it never prevents the round
    /// from ending.
    pub(crate) fn finish_round(&mut self) -> RoundSummary {
        self.hole_hidden = false;

        let summary = RoundSummary {
            player_score: self.player_hand.total(),
            dealer_score: self.dealer_hand.total(),
            outcome: Outcome::resolve(self.player_hand.total(), self.dealer_hand.total()),
        };

        log::info!(
            "final scores - player: {}, dealer: {} ({})",
            summary.player_score,
            summary.dealer_score,
            summary.message()
        );

        if let Some(sink) = self.sink.as_mut() {
            if let Err(err) = sink.record(&summary) {
                log::warn!("failed to record round result: {err}");
            }
        }

        self.state = RoundState::GameOver;
        self.last_summary = Some(summary);
        summary
    }
}
