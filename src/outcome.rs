//! Round outcome classification.

/// The result of a completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21 and loses, even if the dealer also busted.
    PlayerBust,
    /// Dealer went over 21; the player wins.
    DealerBust,
    /// Player finished with the higher total.
    PlayerWins,
    /// Dealer finished with the higher total.
    DealerWins,
    /// Tied totals, no winner.
    Push,
}

impl Outcome {
    /// Classifies the final totals of a round.
    ///
    /// A player bust is checked before a dealer bust: a double bust is a
    /// player loss, not a push. That deviates from common house rules but is
    /// the table's deliberate behavior.
    #[must_use]
    pub const fn resolve(player_total: u8, dealer_total: u8) -> Self {
        if player_total > 21 {
            Self::PlayerBust
        } else if dealer_total > 21 {
            Self::DealerBust
        } else if player_total > dealer_total {
            Self::PlayerWins
        } else if player_total < dealer_total {
            Self::DealerWins
        } else {
            Self::Push
        }
    }

    /// Returns the canonical user-facing message for the outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "BUST! You lose!",
            Self::DealerBust => "Dealer busts! You win!",
            Self::PlayerWins => "You win!",
            Self::DealerWins => "You lose!",
            Self::Push => "Push! It's a tie!",
        }
    }

    /// Returns whether the outcome is a win for the player.
    ///
    /// Callers branch on this, never on the display string.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWins)
    }
}

/// Final scores and outcome of one completed round.
///
/// Produced exactly once per round and handed to the configured
/// [`ResultSink`](crate::sink::ResultSink).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// The player's final total.
    pub player_score: u8,
    /// The dealer's final total.
    pub dealer_score: u8,
    /// The result classification.
    pub outcome: Outcome,
}

impl RoundSummary {
    /// Returns the canonical result message for the round.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.outcome.message()
    }
}
