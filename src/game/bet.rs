use crate::bankroll::Bankroll;
use crate::error::{BetError, DealError};
use crate::hand::Hand;

use super::{Game, Phase};

impl Game {
    /// Stakes `amount` on the next deal, adding to any bet already placed.
    ///
    /// The amount is withdrawn from `bank` immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the amount is zero or the
    /// resulting bet is below the table minimum, or `bank` cannot cover it.
    pub fn place_bet<B: Bankroll + ?Sized>(
        &mut self,
        amount: usize,
        bank: &mut B,
    ) -> Result<(), BetError> {
        if self.phase.is_round_in_progress() {
            return Err(BetError::InvalidState);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        let total = self.pending_bet.saturating_add(amount);
        if total < self.options.min_bet {
            return Err(BetError::BelowMinimum {
                minimum: self.options.min_bet,
            });
        }

        if !bank.withdraw(amount) {
            return Err(BetError::InsufficientFunds);
        }

        self.pending_bet = total;
        if self.phase != Phase::Betting {
            self.set_phase(Phase::Betting);
        }

        Ok(())
    }

    /// Takes back the pending bet, refunding it to `bank`.
    ///
    /// Returns the refunded amount.
    ///
    /// # Errors
    ///
    /// Returns an error unless a bet is pending.
    pub fn clear_bet<B: Bankroll + ?Sized>(&mut self, bank: &mut B) -> Result<usize, BetError> {
        if self.phase != Phase::Betting {
            return Err(BetError::InvalidState);
        }

        let refund = core::mem::take(&mut self.pending_bet);
        bank.deposit(refund);
        self.set_phase(Phase::Idle);

        Ok(refund)
    }

    /// Deals two cards each to the player and the dealer, the dealer's
    /// second card face down.
    ///
    /// A fresh shoe is built first when the reshuffle threshold has been
    /// crossed. A player natural skips straight to [`Phase::Resolution`];
    /// a dealer Ace with insurance enabled opens [`Phase::Insurance`];
    /// otherwise play continues in [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if no bet is pending, a round is already in
    /// progress, or the shoe cannot be refilled (zero decks configured).
    pub fn deal(&mut self) -> Result<(), DealError> {
        match self.phase {
            Phase::Betting if self.pending_bet > 0 => {}
            Phase::Idle | Phase::Betting => return Err(DealError::NoBet),
            _ => return Err(DealError::InvalidState),
        }

        if self.needs_reshuffle() {
            self.rebuild_shoe();
        }

        let player_first = self.draw()?;
        let dealer_up = self.draw()?;
        let player_second = self.draw()?;
        let dealer_hole = self.draw()?.turned_down();

        self.clear_table();
        self.set_phase(Phase::Dealing);

        let bet = core::mem::take(&mut self.pending_bet);
        let mut hand = Hand::new(bet);
        hand.add_card(player_first);
        hand.add_card(player_second);
        self.hands.push(hand);

        self.dealer.add_card(dealer_up);
        self.dealer.add_card(dealer_hole);

        log::debug!(
            "dealt {player_first} {player_second} against {dealer_up}, bet {bet}"
        );

        if crate::hand::is_blackjack(self.hands[0].cards()) {
            self.dealer.reveal();
            self.set_phase(Phase::Resolution);
        } else if self.options.insurance && dealer_up.rank.is_ace() {
            self.set_phase(Phase::Insurance);
        } else {
            self.set_phase(Phase::PlayerTurn);
        }

        Ok(())
    }
}
