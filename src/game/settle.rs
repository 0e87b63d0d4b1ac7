use crate::error::EmptyDeckError;
use crate::events::TableEvent;
use crate::result::{Outcome, RoundResult};

use super::{RoundPhase, Table};

impl Table {
    /// Finalizes the round: applies the outcome to the bankroll exactly
    /// once, records the result, and queues the resolution notifications.
    ///
    /// A player win returns the stake plus equal winnings (`+2 * bet`);
    /// every other outcome, ties included, costs the bet. The guard flag
    /// makes re-entrant resolution a no-op.
    pub(super) fn resolve(&self, outcome: Outcome) {
        let mut settled = self.settled.lock();
        if *settled {
            return;
        }
        *settled = true;
        drop(settled);

        let bet = *self.bet.lock();
        let delta = if outcome.is_player_win() { bet * 2 } else { -bet };

        let mut bankroll = self.bankroll.lock();
        // `bet <= bankroll` held at placement and the bankroll was untouched
        // since, so a loss cannot drive it negative.
        *bankroll += delta;
        let balance = *bankroll;
        drop(bankroll);

        let result = RoundResult {
            outcome,
            bet,
            delta,
            balance,
            player_sum: self.player_hand.lock().sum(),
            dealer_sum: self.dealer_hand.lock().sum(),
        };
        *self.last_result.lock() = Some(result);
        *self.phase.lock() = RoundPhase::Resolved;

        self.push_event(TableEvent::RoundResolved {
            outcome,
            delta,
            balance,
        });
        log::debug!("round resolved: {outcome:?}, delta {delta}, balance {balance}");

        if balance == 0 {
            self.push_event(TableEvent::Broke);
            log::debug!("bankroll exhausted; session is broke");
        }
    }

    /// Aborts the round after an invariant violation: logs, discards the
    /// round without settlement, and hands back the error to propagate.
    pub(super) fn abort_round(&self) -> EmptyDeckError {
        log::error!("deck exhausted mid-round; aborting round without settlement");

        self.player_hand.lock().clear();
        self.dealer_hand.lock().clear();
        *self.bet.lock() = 0;
        *self.settled.lock() = false;
        *self.phase.lock() = RoundPhase::AwaitingBet;

        EmptyDeckError
    }
}
