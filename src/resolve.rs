//! Settlement of finished player hands against the dealer.

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::{self, Hand};
use crate::options::{GameOptions, RoundingMode};
use crate::result::{HandOutcome, HandResult, InsuranceResult};

/// How a player natural is paid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payout {
    /// Profit per unit bet on a natural.
    pub blackjack_pays: f64,
    /// Rounding applied to the natural profit.
    pub rounding: RoundingMode,
}

impl Default for Payout {
    fn default() -> Self {
        Self {
            blackjack_pays: 1.5,
            rounding: RoundingMode::Down,
        }
    }
}

impl Payout {
    /// Returns the payout configured by `options`.
    #[must_use]
    pub const fn from_options(options: &GameOptions) -> Self {
        Self {
            blackjack_pays: options.blackjack_pays,
            rounding: options.rounding_blackjack,
        }
    }

    /// Profit on a natural for `bet`; `floor(bet × 1.5)` by default.
    ///
    /// A 3:2 ratio is computed in integers and is exact for any bet.
    #[must_use]
    pub fn blackjack_profit(&self, bet: usize) -> usize {
        if self.blackjack_pays.to_bits() == THREE_TO_TWO.to_bits() {
            let half = match self.rounding {
                RoundingMode::Down => bet / 2,
                RoundingMode::Up | RoundingMode::Nearest => bet.div_ceil(2),
            };
            return bet.saturating_add(half);
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = bet as f64 * self.blackjack_pays;
        self.rounding.apply(winnings)
    }
}

const THREE_TO_TWO: f64 = 1.5;

fn signed(amount: usize) -> isize {
    isize::try_from(amount).unwrap_or(isize::MAX)
}

/// Settles one hand against the dealer.
///
/// `natural_eligible` is false for split hands, which never earn the
/// natural premium. Checks run in order: player bust, natural against
/// natural, player natural, dealer natural, dealer bust, then totals.
#[must_use]
pub fn settle_hand(
    dealer_cards: &[Card],
    player_cards: &[Card],
    bet: usize,
    natural_eligible: bool,
    payout: Payout,
) -> (HandOutcome, isize) {
    let dealer_blackjack = hand::is_blackjack(dealer_cards);
    let dealer_value = hand::full_value(dealer_cards);
    let player_value = hand::hand_value(player_cards);
    let player_blackjack = natural_eligible && hand::is_blackjack(player_cards);

    if player_value > 21 {
        (HandOutcome::Lose, -signed(bet))
    } else if player_blackjack && dealer_blackjack {
        (HandOutcome::Push, 0)
    } else if player_blackjack {
        (
            HandOutcome::Blackjack,
            signed(payout.blackjack_profit(bet)),
        )
    } else if dealer_blackjack {
        (HandOutcome::Lose, -signed(bet))
    } else if dealer_value > 21 || player_value > dealer_value {
        (HandOutcome::Win, signed(bet))
    } else if player_value < dealer_value {
        (HandOutcome::Lose, -signed(bet))
    } else {
        (HandOutcome::Push, 0)
    }
}

/// Settles every player hand independently against the single dealer hand.
///
/// A natural only counts when the player holds exactly one hand.
#[must_use]
pub fn resolve_hands(dealer_cards: &[Card], hands: &[Hand], payout: Payout) -> Vec<HandResult> {
    let natural_eligible = hands.len() == 1;
    let dealer_value = hand::full_value(dealer_cards);

    hands
        .iter()
        .enumerate()
        .map(|(hand_index, h)| {
            let (outcome, delta) =
                settle_hand(dealer_cards, h.cards(), h.bet(), natural_eligible, payout);
            HandResult {
                hand_index,
                outcome,
                bet: h.bet(),
                delta,
                player_value: h.value(),
                dealer_value,
            }
        })
        .collect()
}

/// Settles an insurance stake: pays 2:1 when the dealer has a natural.
#[must_use]
pub fn resolve_insurance(stake: usize, dealer_blackjack: bool) -> InsuranceResult {
    let delta = if dealer_blackjack {
        signed(stake).saturating_mul(2)
    } else {
        -signed(stake)
    };
    InsuranceResult { stake, delta }
}
