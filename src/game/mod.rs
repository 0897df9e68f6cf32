//! Round state machine.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{EmptyShoeError, ReshuffleError};
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::{CardSource, Shoe};

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use state::{AvailableActions, Phase};

/// Draws from the shoe, building a fresh one first whenever it is empty.
struct ReplenishingShoe<'a> {
    shoe: &'a mut Shoe,
    rng: &'a mut ChaCha8Rng,
    decks: u8,
}

impl CardSource for ReplenishingShoe<'_> {
    fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        if self.shoe.is_empty() {
            log::warn!("shoe exhausted mid-round, building a new one");
            *self.shoe = Shoe::build(self.decks, self.rng);
        }
        self.shoe.deal()
    }
}

/// A single-player blackjack table that runs one round at a time.
///
/// The game owns the shoe and the round in progress. The balance stays with
/// the caller and is lent to the calls that stake or settle money through
/// [`Bankroll`](crate::Bankroll).
#[derive(Debug, Clone)]
pub struct Game {
    options: GameOptions,
    shoe: Shoe,
    rng: ChaCha8Rng,
    phase: Phase,
    pending_bet: usize,
    dealer: DealerHand,
    hands: Vec<Hand>,
    active_hand: usize,
    split_aces: bool,
    insurance_stake: Option<usize>,
    last_result: Option<RoundResult>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Idle);
    /// assert_eq!(game.cards_remaining(), 312);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::build(options.decks, &mut rng);

        Self {
            options,
            shoe,
            rng,
            phase: Phase::Idle,
            pending_bet: 0,
            dealer: DealerHand::new(),
            hands: Vec::new(),
            active_hand: 0,
            split_aces: false,
            insurance_stake: None,
            last_result: None,
        }
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Replaces the shoe, e.g. with a prepared [`Shoe::from_draws`] for
    /// replays and tests.
    ///
    /// # Errors
    ///
    /// Returns an error while a round is in progress.
    pub fn load_shoe(&mut self, shoe: Shoe) -> Result<(), ReshuffleError> {
        if self.phase.is_round_in_progress() {
            return Err(ReshuffleError::InvalidState);
        }
        self.shoe = shoe;
        Ok(())
    }

    /// Builds and shuffles a fresh shoe.
    ///
    /// # Errors
    ///
    /// Returns an error while a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.phase.is_round_in_progress() {
            return Err(ReshuffleError::InvalidState);
        }
        self.rebuild_shoe();
        Ok(())
    }

    /// Returns whether fewer cards than the reshuffle threshold remain.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.shoe.len() < self.options.reshuffle_threshold
    }

    /// Reshuffles if the shoe has run below the threshold.
    ///
    /// Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error while a round is in progress.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, ReshuffleError> {
        if self.phase.is_round_in_progress() {
            return Err(ReshuffleError::InvalidState);
        }
        if self.needs_reshuffle() {
            self.rebuild_shoe();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Returns the amount staked for the next deal.
    #[must_use]
    pub const fn pending_bet(&self) -> usize {
        self.pending_bet
    }

    /// Returns the player's hands (two after a split).
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the index of the hand the player is acting on.
    #[must_use]
    pub const fn active_hand_index(&self) -> usize {
        self.active_hand
    }

    /// Returns the hand the player is acting on, if it is their turn.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        if self.phase.is_player_turn() {
            self.hands.get(self.active_hand)
        } else {
            None
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns whether the current hands came from splitting Aces.
    #[must_use]
    pub const fn is_split_aces(&self) -> bool {
        self.split_aces
    }

    /// Returns the insurance stake taken this round.
    #[must_use]
    pub const fn insurance_stake(&self) -> Option<usize> {
        self.insurance_stake
    }

    /// Returns the result of the most recently settled round.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    fn set_phase(&mut self, phase: Phase) {
        log::debug!("phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn rebuild_shoe(&mut self) {
        log::debug!("reshuffling with {} cards left", self.shoe.len());
        self.shoe = Shoe::build(self.options.decks, &mut self.rng);
    }

    fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        ReplenishingShoe {
            shoe: &mut self.shoe,
            rng: &mut self.rng,
            decks: self.options.decks,
        }
        .draw()
    }

    fn draw_pair(&mut self) -> Result<(Card, Card), EmptyShoeError> {
        Ok((self.draw()?, self.draw()?))
    }

    fn clear_table(&mut self) {
        self.dealer.clear();
        self.hands.clear();
        self.active_hand = 0;
        self.split_aces = false;
        self.insurance_stake = None;
        self.last_result = None;
    }
}
