//! Hand representation and sum valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// The natural threshold: hands must stay at or below this sum to remain
/// live. Whoever exceeds it busts.
pub const TARGET: f64 = 7.5;

/// A participant's hand.
///
/// The first card dealt to each seat is face down and stays hidden from the
/// presentation layer until the table reveals it; the hand itself always
/// knows its full sum. Outcome classification lives in the round state
/// machine, not here.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand, in draw order. The first card is the hidden one.
    cards: Vec<Card>,
    /// Whether the hidden first card has been turned over.
    hidden_revealed: bool,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hidden_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Calculates the hand sum.
    ///
    /// Recomputed from the cards on every call, so the sum always equals the
    /// total of [`Card::value`] over the current cards.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.cards.iter().map(Card::value).sum()
    }

    /// Calculates the sum visible to the table: the hidden first card is
    /// excluded until it has been revealed.
    #[must_use]
    pub fn visible_sum(&self) -> f64 {
        if self.hidden_revealed {
            self.sum()
        } else {
            self.cards.iter().skip(1).map(Card::value).sum()
        }
    }

    /// Returns the face-down first card, if any card has been dealt.
    #[must_use]
    pub fn hidden_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns whether the hidden first card has been turned over.
    #[must_use]
    pub const fn is_hidden_revealed(&self) -> bool {
        self.hidden_revealed
    }

    /// Turns the hidden first card face up.
    pub const fn reveal_hidden(&mut self) {
        self.hidden_revealed = true;
    }

    /// Returns whether the hand has busted (sum over the threshold).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.sum() > TARGET
    }

    /// Returns whether the hand sits exactly on the threshold.
    #[must_use]
    #[expect(clippy::float_cmp, reason = "card sums are exact multiples of 0.5")]
    pub fn is_target(&self) -> bool {
        self.sum() == TARGET
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hidden_revealed = false;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
