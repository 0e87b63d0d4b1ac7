//! Card types and deck construction for the Spanish 40-card deck.

use alloc::vec::Vec;

use crate::error::InvalidCardError;

/// Card suit (Spanish deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Oros (coins).
    Oros,
    /// Copas (cups).
    Copas,
    /// Espadas (swords).
    Espadas,
    /// Bastos (clubs).
    Bastos,
}

/// The four suits in canonical deck-building order.
pub const SUITS: [Suit; 4] = [Suit::Oros, Suit::Copas, Suit::Espadas, Suit::Bastos];

/// The ten ranks of a siete y media deck, in ascending order.
///
/// Decks used for siete y media omit the 8 and 9; ranks 10, 11 and 12 are
/// the face cards (sota, caballo, rey).
pub const RANKS: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 10, 11, 12];

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 40;

/// A playing card.
///
/// Identity is structural: two cards with the same rank and suit compare
/// equal regardless of where they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1-7 or 10-12).
    pub rank: u8,
}

impl Card {
    /// Creates a new card, validating the rank.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCardError`] if the rank is 0, 8, 9, or above 12 —
    /// those cards do not exist in a siete y media deck.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, InvalidCardError> {
        match rank {
            1..=7 | 10..=12 => Ok(Self { suit, rank }),
            _ => Err(InvalidCardError { rank }),
        }
    }

    /// Returns the card's value toward a hand sum.
    ///
    /// Face cards (sota, caballo, rey) count half a point; every other rank
    /// counts its face rank. All values are exact multiples of 0.5, so sums
    /// stay exact in `f64`.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self.rank {
            10..=12 => 0.5,
            rank => rank as f64,
        }
    }
}

/// Builds the canonical 40-card deck, suit-major and rank-minor.
///
/// Pure: the same order every call. Shuffling is the table's job.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in SUITS {
        for rank in RANKS {
            cards.push(Card { suit, rank });
        }
    }

    cards
}
