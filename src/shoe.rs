//! Shoe construction, shuffling and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyShoeError;

/// Anything cards can be drawn from one at a time.
pub trait CardSource {
    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] when no card is available.
    fn draw(&mut self) -> Result<Card, EmptyShoeError>;
}

/// Returns a uniformly shuffled copy of `items`, leaving the input untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// The multi-deck pool of cards being dealt from.
///
/// The top of the shoe is the end of the internal sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds `deck_count` ordered decks, concatenates them and shuffles.
    ///
    /// Every rank and suit pair appears exactly `deck_count` times.
    pub fn build<R: Rng + ?Sized>(deck_count: u8, rng: &mut R) -> Self {
        let ordered = ordered_cards(deck_count);
        let cards = shuffle(&ordered, rng);
        log::debug!("built shoe of {deck_count} decks ({} cards)", cards.len());
        Self { cards }
    }

    /// Creates a shoe from cards in storage order; the last card is dealt first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates a shoe that deals `draws` in the given order.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self::from_cards(cards)
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if the shoe is empty.
    pub fn deal(&mut self) -> Result<Card, EmptyShoeError> {
        let card = self.cards.pop().ok_or(EmptyShoeError)?;
        log::trace!("dealt {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards in storage order (top card last).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl CardSource for Shoe {
    fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        self.deal()
    }
}

/// Builds and shuffles a shoe of `deck_count` decks.
pub fn build_shoe<R: Rng + ?Sized>(deck_count: u8, rng: &mut R) -> Shoe {
    Shoe::build(deck_count, rng)
}

/// Removes and returns the top card of `shoe`.
///
/// # Errors
///
/// Returns [`EmptyShoeError`] if the shoe is empty.
pub fn deal(shoe: &mut Shoe) -> Result<Card, EmptyShoeError> {
    shoe.deal()
}

fn ordered_cards(deck_count: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(deck_count as usize * DECK_SIZE);
    for _ in 0..deck_count {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }
    cards
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn shuffle_keeps_the_input_intact() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let input: Vec<u16> = (0..52).collect();
        let out = shuffle(&input, &mut rng);

        assert_eq!(input, (0..52).collect::<Vec<_>>());
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
        assert_ne!(out, input);
    }

    #[test]
    fn shuffle_handles_tiny_inputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(shuffle::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffle(&[7_u8], &mut rng), alloc::vec![7]);
    }

    #[test]
    fn from_draws_deals_in_order() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        let b = Card::new(Rank::King, Suit::Hearts);
        let mut shoe = Shoe::from_draws(&[a, b]);

        assert_eq!(shoe.peek(), Some(&a));
        assert_eq!(deal(&mut shoe), Ok(a));
        assert_eq!(shoe.draw(), Ok(b));
        assert_eq!(shoe.deal(), Err(EmptyShoeError));
    }

    #[test]
    fn from_cards_deals_from_the_end() {
        let a = Card::new(Rank::Two, Suit::Clubs);
        let b = Card::new(Rank::Queen, Suit::Diamonds);
        let mut shoe = Shoe::from_cards(alloc::vec![a, b]);

        assert_eq!(shoe.cards(), [a, b]);
        assert_eq!(shoe.deal(), Ok(b));
        assert_eq!(shoe.deal(), Ok(a));
    }

    #[test]
    fn zero_decks_build_an_empty_shoe() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut shoe = build_shoe(0, &mut rng);
        assert!(shoe.is_empty());
        assert_eq!(shoe.deal(), Err(EmptyShoeError));
    }
}
