//! Table rule configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Totals on which doubling down is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down allowed on any two-card hand.
    #[default]
    Any,
    /// Double down allowed only on 9 or 10.
    NineOrTen,
    /// Double down allowed only on 9 through 11.
    NineThrough11,
    /// Double down not allowed.
    None,
}

impl DoubleOption {
    /// Returns whether a hand totalling `value` may double.
    #[must_use]
    pub fn allows(self, value: u16) -> bool {
        match self {
            Self::Any => true,
            Self::NineOrTen => value == 9 || value == 10,
            Self::NineThrough11 => (9..=11).contains(&value),
            Self::None => false,
        }
    }
}

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down (truncate).
    Down,
    /// Round to nearest.
    Nearest,
}

impl RoundingMode {
    /// Rounds a non-negative amount to whole units.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn apply(self, amount: f64) -> usize {
        match self {
            Self::Up => amount.ceil() as usize,
            Self::Down => amount.floor() as usize,
            Self::Nearest => amount.round() as usize,
        }
    }

    /// Rounds a non-negative amount to whole units.
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    #[must_use]
    pub fn apply(self, amount: f64) -> usize {
        match self {
            Self::Up => libm::ceil(amount) as usize,
            Self::Down => libm::floor(amount) as usize,
            Self::Nearest => libm::round(amount) as usize,
        }
    }
}

/// Configuration for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(8)
///     .with_blackjack_pays(1.2)
///     .with_reshuffle_threshold(52);
/// assert_eq!(options.decks, 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Natural payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for the natural premium.
    pub rounding_blackjack: RoundingMode,
    /// The dealer draws while the hand totals less than this.
    pub dealer_stands_on: u8,
    /// Whether the dealer stands on a soft total equal to `dealer_stands_on`.
    pub stand_on_soft_17: bool,
    /// Double down conditions.
    pub double: DoubleOption,
    /// Whether double down is allowed after a split.
    pub double_after_split: bool,
    /// Whether insurance is offered when the dealer shows an Ace.
    pub insurance: bool,
    /// A fresh shoe is built before a deal when fewer cards than this remain.
    pub reshuffle_threshold: usize,
    /// Smallest accepted main bet.
    pub min_bet: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            double: DoubleOption::Any,
            double_after_split: true,
            insurance: true,
            reshuffle_threshold: 15,
            min_bet: 1,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the natural payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for the natural premium.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the dealer stand threshold.
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, threshold: u8) -> Self {
        self.dealer_stands_on = threshold;
        self
    }

    /// Sets whether the dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert!(!options.stand_on_soft_17);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the double down conditions.
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }

    /// Sets whether double down is allowed after a split.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets whether insurance is offered.
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }

    /// Sets the remaining-card count below which the shoe is rebuilt.
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, cards: usize) -> Self {
        self.reshuffle_threshold = cards;
        self
    }

    /// Sets the table minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Number of cards in a freshly built shoe.
    #[must_use]
    pub const fn shoe_size(&self) -> usize {
        self.decks as usize * crate::card::DECK_SIZE
    }
}
