//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when placing a bet.
///
/// Betting errors are recoverable: the presentation layer should surface
/// them and re-prompt for a new amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero or negative.
    #[error("bet must be greater than zero")]
    NonPositive,
    /// Bet amount exceeds the player's bankroll.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// A draw was attempted on an empty deck.
///
/// Unreachable in normal play: a fresh 40-card deck covers the worst case
/// round. Treated as an invariant violation; the current round is logged
/// and aborted without settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("draw attempted on an empty deck")]
pub struct EmptyDeckError;

/// A card was constructed with a rank that does not exist in the deck.
///
/// Indicates a construction defect in the caller; cards produced by
/// [`build_deck`](crate::card::build_deck) are always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid card rank: {rank}")]
pub struct InvalidCardError {
    /// The offending rank.
    pub rank: u8,
}
