use crate::error::BetError;

use super::{RoundPhase, Table};

impl Table {
    /// Opens a round: validates the bet, builds and shuffles a fresh deck,
    /// and deals one hidden card to the dealer and then one to the player.
    ///
    /// The bankroll is not debited here; it only changes at settlement, so
    /// a bet of the full bankroll is accepted. Outside `AwaitingBet` the
    /// call is a silent no-op, mirroring the state guards on
    /// [`hit`](Table::hit) and [`stand`](Table::stand).
    ///
    /// On success the round is already in `PlayerTurn`; both hidden cards
    /// stay face down until revealed by the first player action.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NonPositive`] if `amount` is zero or negative,
    /// or [`BetError::InsufficientFunds`] if `amount` exceeds the bankroll.
    pub fn place_bet(&self, amount: i64) -> Result<(), BetError> {
        let mut phase = self.phase.lock();
        if *phase != RoundPhase::AwaitingBet {
            return Ok(());
        }

        if amount <= 0 {
            return Err(BetError::NonPositive);
        }
        if amount > *self.bankroll.lock() {
            return Err(BetError::InsufficientFunds);
        }

        *self.bet.lock() = amount;
        *self.settled.lock() = false;

        let mut rng = self.rng.lock();
        *self.deck.lock() = Self::fresh_deck(&mut rng);
        drop(rng);

        // Dealer's hidden card first, then the player's.
        let mut dealer = self.dealer_hand.lock();
        let mut player = self.player_hand.lock();
        dealer.clear();
        player.clear();
        if let Some(card) = self.draw() {
            dealer.push(card);
        }
        if let Some(card) = self.draw() {
            player.push(card);
        }
        drop(dealer);
        drop(player);

        *phase = RoundPhase::PlayerTurn;
        log::debug!("bet of {amount} accepted; hidden cards dealt");

        Ok(())
    }
}
