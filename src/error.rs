//! Error types for shoe and round operations.

use thiserror::Error;

/// A card was requested from a shoe with no cards left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the shoe has no cards left")]
pub struct EmptyShoeError;

/// A rank number outside `1..=13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card rank {0}, expected 1..=13")]
pub struct InvalidRank(pub u8);

/// Errors that can occur while placing or clearing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet amount is below the table minimum.
    #[error("bet is below the table minimum of {minimum}")]
    BelowMinimum {
        /// The table minimum.
        minimum: usize,
    },
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// The shoe could not supply a card even after rebuilding.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The active hand can no longer act.
    #[error("hand is not active")]
    HandNotActive,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The hand has already been split this round.
    #[error("hand has already been split")]
    AlreadySplit,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The shoe could not supply a card even after rebuilding.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
}

/// Errors that can occur during insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InsuranceError {
    /// Insurance is not being offered right now.
    #[error("invalid game state for insurance")]
    InvalidState,
    /// Half the main bet rounds down to nothing.
    #[error("bet is too small to insure")]
    ZeroStake,
    /// Insufficient funds for insurance.
    #[error("insufficient funds for insurance")]
    InsufficientFunds,
}

/// Errors that can occur during dealer play and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The shoe could not supply a card even after rebuilding.
    #[error(transparent)]
    EmptyShoe(#[from] EmptyShoeError),
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// A round is in progress.
    #[error("cannot reshuffle while a round is in progress")]
    InvalidState,
}
