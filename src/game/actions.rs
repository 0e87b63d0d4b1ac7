use crate::card::Card;
use crate::error::EmptyDeckError;
use crate::events::{Seat, TableEvent};
use crate::hand::TARGET;
use crate::result::Outcome;

use super::{RoundPhase, Table};

impl Table {
    /// Turns the player's hidden card face up if it is still face down.
    fn reveal_player_hidden(&self) {
        let mut hand = self.player_hand.lock();
        if hand.is_hidden_revealed() {
            return;
        }
        hand.reveal_hidden();
        let card = hand.hidden_card();
        drop(hand);

        if let Some(card) = card {
            self.push_event(TableEvent::HiddenCardRevealed {
                seat: Seat::Player,
                card,
            });
        }
    }

    /// Turns the dealer's hidden card face up if it is still face down.
    pub(super) fn reveal_dealer_hidden(&self) {
        let mut hand = self.dealer_hand.lock();
        if hand.is_hidden_revealed() {
            return;
        }
        hand.reveal_hidden();
        let card = hand.hidden_card();
        drop(hand);

        if let Some(card) = card {
            self.push_event(TableEvent::HiddenCardRevealed {
                seat: Seat::Dealer,
                card,
            });
        }
    }

    /// Player action: draw one card.
    ///
    /// The first hit of a round also reveals the player's hidden card. The
    /// drawn card either busts the round, wins it (a two-card 7.5 is a
    /// natural, any later 7.5 a plain win), or leaves the player's turn
    /// open.
    ///
    /// Outside `PlayerTurn` the call is a silent no-op returning
    /// `Ok(None)`, so a UI may retry without tracking phase itself.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck is exhausted. That cannot
    /// happen with a correctly provisioned 40-card deck; the round is
    /// aborted without settlement.
    #[expect(clippy::float_cmp, reason = "card sums are exact multiples of 0.5")]
    pub fn hit(&self) -> Result<Option<Card>, EmptyDeckError> {
        if *self.phase.lock() != RoundPhase::PlayerTurn {
            return Ok(None);
        }

        self.reveal_player_hidden();

        let Some(card) = self.draw() else {
            return Err(self.abort_round());
        };

        let mut hand = self.player_hand.lock();
        hand.push(card);
        let sum = hand.sum();
        let two_cards = hand.len() == 2;
        drop(hand);

        self.push_event(TableEvent::CardDrawn {
            seat: Seat::Player,
            card,
            sum,
        });

        if sum > TARGET {
            self.reveal_dealer_hidden();
            self.resolve(Outcome::PlayerBusted);
        } else if sum == TARGET && two_cards {
            // Hidden card plus the very first hit: a natural.
            self.resolve(Outcome::Natural);
        } else if sum == TARGET {
            self.reveal_dealer_hidden();
            self.resolve(Outcome::PlayerWins);
        }

        Ok(Some(card))
    }

    /// Player action: stop drawing.
    ///
    /// Reveals both hidden cards, then runs dealer auto-play to completion;
    /// on return the round is `Resolved`. Outside `PlayerTurn` the call is
    /// a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the dealer must draw from an exhausted
    /// deck; the round is aborted without settlement.
    pub fn stand(&self) -> Result<(), EmptyDeckError> {
        {
            let mut phase = self.phase.lock();
            if *phase != RoundPhase::PlayerTurn {
                return Ok(());
            }
            *phase = RoundPhase::DealerTurn;
        }

        self.reveal_player_hidden();
        self.reveal_dealer_hidden();

        self.dealer_play()
    }
}
