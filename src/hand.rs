//! Hand evaluation and player/dealer hand representations.
//!
//! The free functions are pure and operate on plain card slices. Face-down
//! cards are skipped by [`hand_value`] but still count for [`is_blackjack`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Evaluation {
    /// Best total, capped at `u16::MAX` for absurdly long hands.
    total: u16,
    /// Number of Aces.
    aces: usize,
    /// Whether one Ace counts as 11 in `total`.
    soft: bool,
}

fn evaluate<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Evaluation {
    let mut low: u32 = 0;
    let mut aces = 0;

    for card in cards {
        if card.rank.is_ace() {
            aces += 1;
            low = low.saturating_add(1);
        } else {
            low = low.saturating_add(u32::from(card.rank.value()));
        }
    }

    // At most one Ace can count as 11 without busting.
    let soft = aces > 0 && low <= 11;
    let total = if soft { low + 10 } else { low };

    Evaluation {
        total: u16::try_from(total).unwrap_or(u16::MAX),
        aces,
        soft,
    }
}

fn visible(cards: &[Card]) -> impl Iterator<Item = &Card> {
    cards.iter().filter(|c| !c.face_down)
}

/// Best total of the face-up cards.
///
/// Every Ace counts 1, plus 10 for one Ace when that stays within 21. This
/// gives the largest total not over 21 when one exists, otherwise the
/// smallest bust total. Only face-down cards yield 0.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u16 {
    evaluate(visible(cards)).total
}

/// Best total of all cards, face-down ones included.
#[must_use]
pub fn full_value(cards: &[Card]) -> u16 {
    evaluate(cards).total
}

/// Returns whether the visible total exceeds 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > 21
}

/// Returns whether the cards form a natural: exactly two cards totalling 21.
///
/// Evaluated over every card regardless of orientation, so a dealer's hidden
/// hole card still makes a natural.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && full_value(cards) == 21
}

/// Returns whether the cards are a pair of the same rank.
///
/// Equal value is not enough: a Ten and a King do not split.
#[must_use]
pub fn can_split(cards: &[Card]) -> bool {
    matches!(cards, [a, b] if a.rank == b.rank)
}

/// Returns whether the full total counts an Ace as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate(cards).soft
}

/// Display string for the visible total, e.g. `"17"` or `"soft 17"`.
///
/// The `soft` prefix appears only while no Ace had to be demoted and the
/// total is below 21, so a pair of Aces reads `"12"` and Ace-King `"21"`.
#[must_use]
pub fn score_label(cards: &[Card]) -> String {
    let eval = evaluate(visible(cards));
    if eval.soft && eval.aces == 1 && eval.total < 21 {
        alloc::format!("soft {}", eval.total)
    } else {
        eval.total.to_string()
    }
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Hand is finished without busting.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand is a natural dealt on the opening two cards.
    Blackjack,
}

/// A player's hand with its bet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
    bet: usize,
    from_split: bool,
    split_aces: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
            from_split: false,
            split_aces: false,
        }
    }

    /// Creates a hand holding `cards`, with its status derived from them.
    #[must_use]
    pub fn with_cards(cards: &[Card], bet: usize) -> Self {
        let mut hand = Self::new(bet);
        for &card in cards {
            hand.add_card(card);
        }
        hand
    }

    /// Creates a hand from one card of a split pair.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            bet,
            from_split: true,
            split_aces: card.rank.is_ace(),
        }
    }

    /// Adds a card and updates the status.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        if is_bust(&self.cards) {
            self.status = HandStatus::Bust;
        } else if !self.from_split && is_blackjack(&self.cards) {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns whether the hand can still act.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == HandStatus::Active
    }

    /// Finishes an active hand. Busted and natural hands keep their status.
    pub fn stand(&mut self) {
        if self.status == HandStatus::Active {
            self.status = HandStatus::Stand;
        }
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the bet amount.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
    }

    /// Returns whether this hand came from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns whether this hand came from splitting Aces.
    #[must_use]
    pub const fn is_split_aces(&self) -> bool {
        self.split_aces
    }

    /// Best total of the hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is soft (an Ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns whether the hand has busted.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns whether the hand is a pair of the same rank.
    #[must_use]
    pub fn can_split(&self) -> bool {
        can_split(&self.cards)
    }

    /// Returns the display label for the hand total.
    #[must_use]
    pub fn score_label(&self) -> String {
        score_label(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand. The hole card is the second card, dealt face down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DealerHand {
    cards: Vec<Card>,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a dealer hand holding `cards` as given.
    #[must_use]
    pub fn with_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the up card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns whether every card is face up.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.cards.iter().all(|c| !c.face_down)
    }

    /// Turns every card face up.
    pub fn reveal(&mut self) {
        for card in &mut self.cards {
            card.face_down = false;
        }
    }

    /// Total of the face-up cards.
    #[must_use]
    pub fn visible_value(&self) -> u16 {
        hand_value(&self.cards)
    }

    /// Total of all cards, hole card included.
    #[must_use]
    pub fn value(&self) -> u16 {
        full_value(&self.cards)
    }

    /// Returns whether the hand is a natural, hole card included.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the full total exceeds 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the full total is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    /// Returns the display label for the visible total.
    #[must_use]
    pub fn score_label(&self) -> String {
        score_label(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
