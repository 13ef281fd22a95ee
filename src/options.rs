//! Game configuration options.

use core::time::Duration;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default().with_dealer_delay(Duration::from_millis(200));
/// assert_eq!(options.dealer_delay, Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Delay between dealer auto-play steps.
    ///
    /// Pacing for the presentation layer only; correctness never depends on
    /// it. Schedulers may ignore it (tests drive steps back to back).
    pub dealer_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_delay: Duration::from_millis(800),
        }
    }
}

impl GameOptions {
    /// Sets the delay between dealer auto-play steps.
    #[must_use]
    pub const fn with_dealer_delay(mut self, delay: Duration) -> Self {
        self.dealer_delay = delay;
        self
    }
}
