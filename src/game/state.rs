//! Round phase types.

/// Phase of the current round.
///
/// `Dealing` documents the sequencing between a successful bet and the
/// player's turn; dealing completes inside
/// [`Table::place_bet`](crate::Table::place_bet), so the phase is never
/// observable from outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for a bet to open the round.
    AwaitingBet,
    /// The initial hidden cards are being dealt.
    Dealing,
    /// The player may hit or stand.
    PlayerTurn,
    /// Dealer auto-play runs to completion.
    DealerTurn,
    /// Terminal: the outcome is fixed and settled; open a new round to play
    /// again.
    Resolved,
}
