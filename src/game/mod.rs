//! Game engine and round state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, build_deck};
use crate::events::TableEvent;
use crate::hand::Hand;
use crate::result::RoundResult;
use crate::sync::Mutex;

mod actions;
mod bet;
mod dealer;
mod settle;
pub mod state;

pub use state::RoundPhase;

/// A siete y media table: one player against the house dealer.
///
/// The table owns the deck, both hands, the bet, and the bankroll, and
/// drives the round through its phases. Methods take `&self` over mutex
/// fields so a presentation layer can share the table behind an `Arc`; the
/// round flow itself is strictly turn-based.
///
/// Each command queues [`TableEvent`] notifications that the presentation
/// layer collects with [`Table::drain_events`].
pub struct Table {
    /// Cards remaining this round. The top of the deck is the back of the
    /// vector; every draw pops from there, so draw order follows the
    /// shuffle.
    pub deck: Mutex<Vec<Card>>,
    /// Current round phase.
    pub phase: Mutex<RoundPhase>,
    /// The player's hand.
    pub player_hand: Mutex<Hand>,
    /// The dealer's hand.
    pub dealer_hand: Mutex<Hand>,
    /// Player name, fixed for the session.
    name: String,
    /// Player bankroll. Never negative.
    bankroll: Mutex<i64>,
    /// Bet at stake in the current round (0 between rounds).
    bet: Mutex<i64>,
    /// Whether the current round has already been settled.
    settled: Mutex<bool>,
    /// Settled result of the most recent resolved round.
    last_result: Mutex<Option<RoundResult>>,
    /// Pending notifications for the presentation layer.
    events: Mutex<Vec<TableEvent>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a table for one player with the given starting bankroll.
    ///
    /// The seed fully determines every shuffle, so a session can be
    /// replayed. A negative bankroll is clamped to zero.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sietemedia::Table;
    ///
    /// let table = Table::new("Ana", 100, 42);
    /// let _ = table;
    /// ```
    #[must_use]
    pub fn new(name: &str, bankroll: i64, seed: u64) -> Self {
        Self {
            deck: Mutex::new(Vec::new()),
            phase: Mutex::new(RoundPhase::AwaitingBet),
            player_hand: Mutex::new(Hand::new()),
            dealer_hand: Mutex::new(Hand::new()),
            name: String::from(name),
            bankroll: Mutex::new(bankroll.max(0)),
            bet: Mutex::new(0),
            settled: Mutex::new(false),
            last_result: Mutex::new(None),
            events: Mutex::new(Vec::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Builds and shuffles a fresh 40-card deck.
    fn fresh_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = build_deck();
        cards.shuffle(rng);
        cards
    }

    /// Draws the top card of the deck.
    fn draw(&self) -> Option<Card> {
        self.deck.lock().pop()
    }

    /// Queues a notification for the presentation layer.
    pub(crate) fn push_event(&self, event: TableEvent) {
        self.events.lock().push(event);
    }

    /// Drains queued notifications, oldest first.
    pub fn drain_events(&self) -> Vec<TableEvent> {
        core::mem::take(&mut *self.events.lock())
    }

    /// Returns the current round phase.
    pub fn phase(&self) -> RoundPhase {
        *self.phase.lock()
    }

    /// Returns the player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current bankroll.
    pub fn bankroll(&self) -> i64 {
        *self.bankroll.lock()
    }

    /// Returns the bet at stake this round (0 between rounds).
    pub fn bet(&self) -> i64 {
        *self.bet.lock()
    }

    /// Returns whether the session is broke.
    ///
    /// A broke session rejects every further bet; create a new table to
    /// play again.
    pub fn is_broke(&self) -> bool {
        self.bankroll() == 0
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns a clone of the player's hand.
    pub fn player_hand(&self) -> Hand {
        self.player_hand.lock().clone()
    }

    /// Returns a clone of the dealer's hand.
    pub fn dealer_hand(&self) -> Hand {
        self.dealer_hand.lock().clone()
    }

    /// Returns the settled result of the most recent resolved round.
    pub fn last_result(&self) -> Option<RoundResult> {
        *self.last_result.lock()
    }

    /// Discards a resolved round and returns to `AwaitingBet`.
    ///
    /// No-op unless the round is `Resolved`; the last result stays readable
    /// until the next round resolves.
    pub fn new_round(&self) {
        let mut phase = self.phase.lock();
        if *phase != RoundPhase::Resolved {
            return;
        }

        self.player_hand.lock().clear();
        self.dealer_hand.lock().clear();
        *self.bet.lock() = 0;
        *self.settled.lock() = false;
        *phase = RoundPhase::AwaitingBet;

        log::debug!("round discarded; awaiting next bet");
    }
}
