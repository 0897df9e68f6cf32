//! Settlement result types.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a single player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HandOutcome {
    /// Player wins even money.
    Win,
    /// Player loses the bet.
    Lose,
    /// Tie; the bet is returned.
    Push,
    /// Player natural beats a dealer without one.
    Blackjack,
}

/// Settlement of one player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HandResult {
    /// Index of the hand (1 for the second hand of a split).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet on this hand.
    pub bet: usize,
    /// Net profit or loss.
    pub delta: isize,
    /// Player's final total.
    pub player_value: u16,
    /// Dealer's final total.
    pub dealer_value: u16,
}

impl HandResult {
    /// Amount credited back when the bet was taken out at staking time.
    ///
    /// `bet + delta`: nothing on a loss, the bet on a push.
    #[must_use]
    pub const fn returned(&self) -> usize {
        match self.outcome {
            HandOutcome::Lose => 0,
            HandOutcome::Push => self.bet,
            HandOutcome::Win | HandOutcome::Blackjack => {
                self.bet.saturating_add(self.delta.unsigned_abs())
            }
        }
    }
}

/// Settlement of the insurance side bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InsuranceResult {
    /// The insurance stake.
    pub stake: usize,
    /// `+2 × stake` when the dealer had a natural, `-stake` otherwise.
    pub delta: isize,
}

impl InsuranceResult {
    /// Amount credited back: three stakes on a win, nothing otherwise.
    #[must_use]
    pub const fn returned(&self) -> usize {
        if self.delta < 0 {
            0
        } else {
            self.stake.saturating_add(self.delta.unsigned_abs())
        }
    }
}

/// Result of a whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundResult {
    /// Results for each player hand, in hand order.
    pub hands: Vec<HandResult>,
    /// The dealer's final total.
    pub dealer_value: u16,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had a natural.
    pub dealer_blackjack: bool,
    /// Insurance settlement, if insurance was taken.
    pub insurance: Option<InsuranceResult>,
}

impl RoundResult {
    /// Net profit or loss over every hand and the insurance bet.
    #[must_use]
    pub fn net(&self) -> isize {
        self.hands
            .iter()
            .map(|h| h.delta)
            .chain(self.insurance.map(|i| i.delta))
            .fold(0, isize::saturating_add)
    }

    /// Total amount credited back to the balance.
    #[must_use]
    pub fn total_returned(&self) -> usize {
        self.hands
            .iter()
            .map(HandResult::returned)
            .chain(self.insurance.map(|i| i.returned()))
            .fold(0, usize::saturating_add)
    }

    /// Sum of all stakes, insurance included.
    #[must_use]
    pub fn total_staked(&self) -> usize {
        self.hands
            .iter()
            .map(|h| h.bet)
            .chain(self.insurance.map(|i| i.stake))
            .fold(0, usize::saturating_add)
    }
}
