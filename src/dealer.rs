//! The house hand's fixed drawing rule.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::EmptyShoeError;
use crate::hand::DealerHand;
use crate::options::GameOptions;
use crate::shoe::CardSource;

/// The dealer's drawing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerPolicy {
    /// The dealer draws while the total is below this.
    pub stands_on: u8,
    /// Whether a soft total equal to `stands_on` stands.
    pub stand_on_soft: bool,
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self {
            stands_on: 17,
            stand_on_soft: true,
        }
    }
}

impl DealerPolicy {
    /// Returns the policy configured by `options`.
    #[must_use]
    pub const fn from_options(options: &GameOptions) -> Self {
        Self {
            stands_on: options.dealer_stands_on,
            stand_on_soft: options.stand_on_soft_17,
        }
    }

    /// Returns whether the dealer must draw to `hand`.
    #[must_use]
    pub fn must_draw(&self, hand: &DealerHand) -> bool {
        let value = hand.value();
        let stands_on = u16::from(self.stands_on);
        if value < stands_on {
            return true;
        }
        value == stands_on && !self.stand_on_soft && hand.is_soft()
    }
}

/// Reveals the dealer's cards and draws until the policy stands.
///
/// Returns the cards drawn. Each draw raises the total or busts the hand, so
/// the loop ends after a handful of cards.
///
/// # Errors
///
/// Returns [`EmptyShoeError`] if `source` runs out while the dealer must draw.
pub fn run_dealer<S: CardSource + ?Sized>(
    hand: &mut DealerHand,
    source: &mut S,
    policy: DealerPolicy,
) -> Result<Vec<Card>, EmptyShoeError> {
    hand.reveal();

    let mut drawn = Vec::new();
    while policy.must_draw(hand) {
        let card = source.draw()?;
        hand.add_card(card);
        drawn.push(card);
    }

    log::debug!(
        "dealer stands on {} after drawing {} card(s)",
        hand.value(),
        drawn.len()
    );
    Ok(drawn)
}
