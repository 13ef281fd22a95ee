//! Round state types.

use crate::card::Card;
use crate::outcome::RoundSummary;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round has been played yet.
    Idle,
    /// Waiting for the player to hit or stand.
    Playing,
    /// Dealer auto-play is running.
    DealerTurn,
    /// Round has ended; a new round may be started.
    GameOver,
}

/// A handle authorizing dealer auto-play steps for one specific round.
///
/// Issued by [`Game::stand`](crate::Game::stand) and passed back on each
/// [`Game::dealer_step`](crate::Game::dealer_step). The ticket carries the
/// round generation, so a continuation scheduled for a round that has since
/// ended or been replaced is rejected as stale instead of mutating fresh
/// hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerTicket {
    /// Generation of the round the ticket was issued for.
    pub(super) generation: u64,
}

/// The effect of one dealer auto-play step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The ticket no longer matches the active round; nothing happened.
    Stale,
    /// The dealer drew a card. Schedule another step after the pacing delay.
    Hit(Card),
    /// The dealer stood or busted and the round is over.
    Finished(RoundSummary),
}
