use crate::error::EmptyDeckError;
use crate::events::{Seat, TableEvent};
use crate::hand::TARGET;
use crate::result::Outcome;

use super::Table;

impl Table {
    /// Dealer auto-play, run to completion within the `stand` call.
    ///
    /// The dealer's target is the player's standing sum, not a fixed value:
    /// it draws while its sum is at or below both the player's sum and the
    /// threshold, and stops the moment it pulls ahead or busts. With at
    /// most 40 cards in play the loop is bounded.
    pub(super) fn dealer_play(&self) -> Result<(), EmptyDeckError> {
        let player_sum = self.player_hand.lock().sum();

        loop {
            let dealer_sum = self.dealer_hand.lock().sum();
            if dealer_sum > player_sum || dealer_sum > TARGET {
                break;
            }

            let Some(card) = self.draw() else {
                return Err(self.abort_round());
            };

            let mut dealer = self.dealer_hand.lock();
            dealer.push(card);
            let sum = dealer.sum();
            drop(dealer);

            self.push_event(TableEvent::CardDrawn {
                seat: Seat::Dealer,
                card,
                sum,
            });

            if sum > TARGET {
                self.resolve(Outcome::DealerBusted);
                return Ok(());
            }
        }

        let dealer_sum = self.dealer_hand.lock().sum();
        self.resolve(Outcome::from_standoff(player_sum, dealer_sum));

        Ok(())
    }
}
