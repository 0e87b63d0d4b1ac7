//! Outbound notification surface for the presentation collaborator.

use crate::card::Card;
use crate::result::Outcome;

/// Which participant an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// A notification queued by the engine for the presentation layer.
///
/// The engine never renders anything itself; it records what happened and
/// the collaborator drains the queue with
/// [`Table::drain_events`](crate::Table::drain_events) after each command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableEvent {
    /// A previously face-down card was turned over.
    HiddenCardRevealed {
        /// Whose card was revealed.
        seat: Seat,
        /// The revealed card.
        card: Card,
    },
    /// A card was drawn face up into a hand.
    CardDrawn {
        /// Whose hand received the card.
        seat: Seat,
        /// The drawn card.
        card: Card,
        /// The hand sum after the draw.
        sum: f64,
    },
    /// The round reached a terminal outcome and the bankroll was settled.
    RoundResolved {
        /// The final outcome tag.
        outcome: Outcome,
        /// Bankroll change applied by the settlement.
        delta: i64,
        /// Bankroll after settlement.
        balance: i64,
    },
    /// The bankroll reached zero; no further bets are accepted this session.
    Broke,
}
