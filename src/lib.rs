//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate is split into pure building blocks and a state machine that
//! drives them:
//!
//! - [`shoe`] builds and shuffles a multi-deck [`Shoe`] and deals from it.
//! - [`hand`] evaluates card totals, naturals, busts and pairs.
//! - [`dealer`] completes the house hand under a fixed [`DealerPolicy`].
//! - [`resolve`] settles finished hands into [`HandResult`]s.
//! - [`Game`] owns one table and walks a round through its [`Phase`]s.
//!
//! The balance stays with the caller and is lent to the engine through the
//! [`Bankroll`] trait.
//!
//! # Example
//!
//! ```
//! use bjround::{Game, GameOptions, Phase};
//!
//! let mut balance: usize = 1_000;
//! let mut game = Game::new(GameOptions::default(), 42);
//!
//! game.place_bet(100, &mut balance).unwrap();
//! game.deal().unwrap();
//!
//! if game.is_insurance_offered() {
//!     game.decline_insurance().unwrap();
//! }
//! while game.phase().is_player_turn() {
//!     game.stand().unwrap();
//! }
//! if game.phase() == Phase::DealerTurn {
//!     game.dealer_play().unwrap();
//! }
//!
//! let result = game.showdown(&mut balance).unwrap();
//! assert_eq!(balance as isize, 1_000 + result.net());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod dealer;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod resolve;
pub mod result;
pub mod shoe;

// Re-export main types
pub use bankroll::Bankroll;
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::{DealerPolicy, run_dealer};
pub use error::{
    ActionError, BetError, DealError, EmptyShoeError, InsuranceError, InvalidRank,
    ReshuffleError, ShowdownError,
};
pub use game::{AvailableActions, Game, Phase};
pub use hand::{
    DealerHand, Hand, HandStatus, can_split, hand_value, is_blackjack, is_bust, score_label,
};
pub use options::{DoubleOption, GameOptions, RoundingMode};
pub use resolve::{Payout, resolve_hands, resolve_insurance, settle_hand};
pub use result::{HandOutcome, HandResult, InsuranceResult, RoundResult};
pub use shoe::{CardSource, Shoe, build_shoe, deal, shuffle};
