use crate::bankroll::Bankroll;
use crate::error::InsuranceError;

use super::{Game, Phase};

impl Game {
    /// Returns whether insurance is currently being offered.
    #[must_use]
    pub fn is_insurance_offered(&self) -> bool {
        self.phase == Phase::Insurance
    }

    /// Returns the stake insurance would cost: half the main bet, rounded down.
    #[must_use]
    pub fn insurance_cost(&self) -> usize {
        self.hands.first().map_or(0, |hand| hand.bet() / 2)
    }

    /// Takes insurance, withdrawing the stake from `bank`.
    ///
    /// The round then continues as [`Game::decline_insurance`] describes.
    /// Returns the stake.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not being offered, half the bet
    /// rounds down to zero, or `bank` cannot cover the stake.
    pub fn take_insurance<B: Bankroll + ?Sized>(
        &mut self,
        bank: &mut B,
    ) -> Result<usize, InsuranceError> {
        if self.phase != Phase::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        let stake = self.insurance_cost();
        if stake == 0 {
            return Err(InsuranceError::ZeroStake);
        }

        if !bank.withdraw(stake) {
            return Err(InsuranceError::InsufficientFunds);
        }

        self.insurance_stake = Some(stake);
        self.finish_insurance();

        Ok(stake)
    }

    /// Declines insurance.
    ///
    /// If the dealer holds a natural the hole card is revealed and the round
    /// goes straight to [`Phase::Resolution`]; otherwise the player acts.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not being offered.
    pub fn decline_insurance(&mut self) -> Result<(), InsuranceError> {
        if self.phase != Phase::Insurance {
            return Err(InsuranceError::InvalidState);
        }

        self.finish_insurance();

        Ok(())
    }

    fn finish_insurance(&mut self) {
        if self.dealer.is_blackjack() {
            self.dealer.reveal();
            self.set_phase(Phase::Resolution);
        } else {
            self.set_phase(Phase::PlayerTurn);
        }
    }
}
