use alloc::vec::Vec;

use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::dealer::{DealerPolicy, run_dealer};
use crate::error::ShowdownError;
use crate::resolve::{Payout, resolve_hands, resolve_insurance};
use crate::result::RoundResult;

use super::{Game, Phase, ReplenishingShoe};

impl Game {
    /// Dealer plays their hand according to the table policy.
    ///
    /// The dealer reveals the hole card and draws while below the stand
    /// threshold. Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe
    /// cannot be refilled.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.phase != Phase::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut source = ReplenishingShoe {
            shoe: &mut self.shoe,
            rng: &mut self.rng,
            decks: self.options.decks,
        };
        let drawn = run_dealer(
            &mut self.dealer,
            &mut source,
            DealerPolicy::from_options(&self.options),
        )?;

        self.set_phase(Phase::Resolution);

        Ok(drawn)
    }

    /// Settles every hand and the insurance bet, credits `bank` with the
    /// amount returned, and ends the round.
    ///
    /// The hands stay on the table until the next deal and the result stays
    /// available from [`Game::last_result`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in resolution state.
    pub fn showdown<B: Bankroll + ?Sized>(
        &mut self,
        bank: &mut B,
    ) -> Result<RoundResult, ShowdownError> {
        if self.phase != Phase::Resolution {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer.reveal();
        let dealer_cards = self.dealer.cards();
        let dealer_blackjack = self.dealer.is_blackjack();

        let result = RoundResult {
            hands: resolve_hands(
                dealer_cards,
                &self.hands,
                Payout::from_options(&self.options),
            ),
            dealer_value: self.dealer.value(),
            dealer_bust: self.dealer.is_bust(),
            dealer_blackjack,
            insurance: self
                .insurance_stake
                .map(|stake| resolve_insurance(stake, dealer_blackjack)),
        };

        bank.deposit(result.total_returned());
        log::debug!(
            "round settled: net {}, returned {}",
            result.net(),
            result.total_returned()
        );

        self.last_result = Some(result.clone());
        self.set_phase(Phase::Idle);

        Ok(result)
    }
}
