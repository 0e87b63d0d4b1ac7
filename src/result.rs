//! Round outcome types.

use crate::hand::TARGET;

/// Final classification of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player finished higher than the dealer without busting, or reached
    /// exactly 7.5 past their first draw.
    PlayerWins,
    /// A two-card 7.5 (the hidden card plus the first hit): the highest
    /// immediate win.
    Natural,
    /// Dealer drew past 7.5.
    DealerBusted,
    /// Dealer finished above the player without busting.
    DealerWins,
    /// Player drew past 7.5.
    PlayerBusted,
    /// Both finished on the same sum. Ties favor the house.
    Tie,
}

impl Outcome {
    /// Returns whether this outcome pays the player.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::PlayerWins | Self::Natural | Self::DealerBusted)
    }

    /// Classifies a finished stand-off between a standing player and a
    /// dealer that has stopped drawing.
    ///
    /// The player is never over the threshold here; a busted player resolves
    /// during their own turn and the dealer does not play.
    #[must_use]
    #[expect(clippy::float_cmp, reason = "card sums are exact multiples of 0.5")]
    pub fn from_standoff(player_sum: f64, dealer_sum: f64) -> Self {
        if dealer_sum > TARGET {
            Self::DealerBusted
        } else if dealer_sum > player_sum {
            Self::DealerWins
        } else if dealer_sum == player_sum {
            Self::Tie
        } else {
            Self::PlayerWins
        }
    }
}

/// Settled result of one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// The outcome tag.
    pub outcome: Outcome,
    /// The bet that was at stake.
    pub bet: i64,
    /// Bankroll change applied by the settlement: `+2 * bet` on a player
    /// win, `-bet` otherwise.
    pub delta: i64,
    /// Bankroll after settlement.
    pub balance: i64,
    /// Final player sum.
    pub player_sum: f64,
    /// Final dealer sum.
    pub dealer_sum: f64,
}
