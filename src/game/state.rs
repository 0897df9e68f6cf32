//! Round phase and action availability types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Waiting for a bet; any cards shown belong to the previous round.
    #[default]
    Idle,
    /// A bet has been placed and can still be topped up or cleared.
    Betting,
    /// Opening cards are being dealt.
    Dealing,
    /// Dealer shows an Ace and the insurance decision is pending.
    Insurance,
    /// Player acts on the only hand, or the first hand before any split.
    PlayerTurn,
    /// Player acts on one of two hands after a split.
    SplitTurn,
    /// Dealer completes the house hand.
    DealerTurn,
    /// Hands are final and waiting to be settled.
    Resolution,
}

impl Phase {
    /// Returns whether the player may act on a hand.
    #[must_use]
    pub const fn is_player_turn(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::SplitTurn)
    }

    /// Returns whether a round has been dealt and not yet settled.
    #[must_use]
    pub const fn is_round_in_progress(self) -> bool {
        !matches!(self, Self::Idle | Self::Betting)
    }
}

/// Which player actions are currently legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AvailableActions {
    /// Draw one card.
    pub hit: bool,
    /// Finish the active hand.
    pub stand: bool,
    /// Double the bet and take exactly one card.
    pub double: bool,
    /// Split a pair into two hands.
    pub split: bool,
}
