use crate::bankroll::Bankroll;
use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;

use super::{AvailableActions, Game, Phase};

impl Game {
    fn ensure_player_turn(&self) -> Result<&Hand, ActionError> {
        if !self.phase.is_player_turn() {
            return Err(ActionError::InvalidState);
        }

        let hand = self
            .hands
            .get(self.active_hand)
            .ok_or(ActionError::InvalidState)?;

        if !hand.is_active() {
            return Err(ActionError::HandNotActive);
        }

        Ok(hand)
    }

    /// Moves past every finished hand; after the last one the dealer plays.
    fn advance_to_next_active_hand(&mut self) {
        while self
            .hands
            .get(self.active_hand)
            .is_some_and(|hand| !hand.is_active())
        {
            self.active_hand += 1;
        }

        if self.active_hand >= self.hands.len() {
            self.set_phase(Phase::DealerTurn);
        } else if self.hands.len() > 1 {
            self.set_phase(Phase::SplitTurn);
        }
    }

    fn can_double(&self, hand: &Hand) -> bool {
        hand.len() == 2
            && (!hand.is_from_split() || self.options.double_after_split)
            && self.options.double.allows(hand.value())
    }

    /// Reports which actions the player may take on the active hand given
    /// `balance` available for extra stakes.
    #[must_use]
    pub fn available_actions(&self, balance: usize) -> AvailableActions {
        let Ok(hand) = self.ensure_player_turn() else {
            return AvailableActions::default();
        };

        AvailableActions {
            hit: true,
            stand: true,
            double: self.can_double(hand) && balance >= hand.bet(),
            split: self.hands.len() == 1 && hand.can_split() && balance >= hand.bet(),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hand that busts or reaches 21 finishes and play moves on.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe cannot be
    /// refilled.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw()?;
        let index = self.active_hand;
        let hand = &mut self.hands[index];
        hand.add_card(card);

        if hand.value() >= 21 {
            hand.stand();
            self.advance_to_next_active_hand();
        }

        Ok(card)
    }

    /// Player action: Stand (keep the active hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        let index = self.active_hand;
        self.hands[index].stand();
        self.advance_to_next_active_hand();

        Ok(())
    }

    /// Player action: Double down (double the bet, take one card, stand).
    ///
    /// The extra stake is withdrawn from `bank`.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand does not
    /// hold exactly two cards or its total is not eligible, `bank` cannot
    /// cover the extra stake, or the shoe cannot be refilled.
    pub fn double_down<B: Bankroll + ?Sized>(&mut self, bank: &mut B) -> Result<Card, ActionError> {
        let hand = self.ensure_player_turn()?;

        if !self.can_double(hand) {
            return Err(ActionError::CannotDouble);
        }

        let bet = hand.bet();
        if !bank.withdraw(bet) {
            return Err(ActionError::InsufficientFunds);
        }

        let card = match self.draw() {
            Ok(card) => card,
            Err(err) => {
                bank.deposit(bet);
                return Err(err.into());
            }
        };

        let index = self.active_hand;
        let hand = &mut self.hands[index];
        hand.double_bet();
        hand.add_card(card);
        hand.stand();
        self.advance_to_next_active_hand();

        Ok(card)
    }

    /// Player action: Split a pair into two hands, each with the original bet.
    ///
    /// Each new hand receives one card. Split Aces stand after that card.
    /// Only one split per round is allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand was already
    /// split, the cards are not a same-rank pair, `bank` cannot cover the
    /// second bet, or the shoe cannot be refilled.
    pub fn split<B: Bankroll + ?Sized>(&mut self, bank: &mut B) -> Result<(), ActionError> {
        let hand = self.ensure_player_turn()?;

        if self.hands.len() > 1 {
            return Err(ActionError::AlreadySplit);
        }

        if !hand.can_split() {
            return Err(ActionError::CannotSplit);
        }

        let bet = hand.bet();
        if !bank.withdraw(bet) {
            return Err(ActionError::InsufficientFunds);
        }

        let (first_draw, second_draw) = match self.draw_pair() {
            Ok(cards) => cards,
            Err(err) => {
                bank.deposit(bet);
                return Err(err.into());
            }
        };

        let [first_card, second_card] = match self.hands[0].cards() {
            &[a, b] => [a, b],
            _ => {
                bank.deposit(bet);
                return Err(ActionError::CannotSplit);
            }
        };

        let mut first = Hand::from_split(first_card, bet);
        let mut second = Hand::from_split(second_card, bet);
        first.add_card(first_draw);
        second.add_card(second_draw);

        self.split_aces = first_card.rank.is_ace();
        for hand in [&mut first, &mut second] {
            if self.split_aces || hand.value() == 21 {
                hand.stand();
            }
        }

        log::debug!(
            "split {} into {} and {}",
            first_card.rank.label(),
            first.score_label(),
            second.score_label()
        );

        self.hands.clear();
        self.hands.push(first);
        self.hands.push(second);
        self.active_hand = 0;
        self.set_phase(Phase::SplitTurn);
        self.advance_to_next_active_hand();

        Ok(())
    }
}
