//! Table integration tests.

#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use sietemedia::{
    BetError, Card, DECK_SIZE, EmptyDeckError, Hand, Outcome, RANKS, RoundPhase, Seat, Suit,
    TARGET, Table, TableEvent, build_deck,
};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

/// Overwrites the round dealt by `place_bet` with a known setup: one hidden
/// card per seat and a deck that will yield `draws` in order.
fn stack_round(table: &Table, dealer_hidden: Card, player_hidden: Card, draws: &[Card]) {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    *table.deck.lock() = deck;

    let mut dealer = Hand::new();
    dealer.push(dealer_hidden);
    *table.dealer_hand.lock() = dealer;

    let mut player = Hand::new();
    player.push(player_hidden);
    *table.player_hand.lock() = player;
}

#[test]
fn deck_is_forty_unique_cards_without_eights_and_nines() {
    let deck = build_deck();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);

    assert!(deck.iter().all(|c| c.rank != 8 && c.rank != 9));
    assert!(deck.iter().all(|c| (1..=12).contains(&c.rank)));
}

#[test]
fn card_values_follow_face_card_rule() {
    for rank in RANKS {
        let value = card(Suit::Oros, rank).value();
        if rank >= 10 {
            assert_eq!(value, 0.5);
        } else {
            assert_eq!(value, f64::from(rank));
            assert_ne!(value, 0.5);
        }
    }
}

#[test]
fn invalid_ranks_are_rejected() {
    for rank in [0, 8, 9, 13] {
        let err = Card::new(Suit::Copas, rank).unwrap_err();
        assert_eq!(err.rank, rank);
    }
}

#[test]
fn shuffle_preserves_the_card_multiset() {
    let table = Table::new("Ana", 100, 7);
    table.place_bet(10).unwrap();

    let mut seen: HashSet<Card> = table.deck.lock().iter().copied().collect();
    assert_eq!(seen.len(), DECK_SIZE - 2);

    seen.extend(table.dealer_hand().cards());
    seen.extend(table.player_hand().cards());

    let canonical: HashSet<Card> = build_deck().into_iter().collect();
    assert_eq!(seen, canonical);
}

#[test]
fn same_seed_shuffles_identically() {
    let a = Table::new("Ana", 100, 42);
    let b = Table::new("Ana", 100, 42);
    a.place_bet(10).unwrap();
    b.place_bet(10).unwrap();

    assert_eq!(*a.deck.lock(), *b.deck.lock());
    assert_eq!(a.player_hand().cards(), b.player_hand().cards());
    assert_eq!(a.dealer_hand().cards(), b.dealer_hand().cards());
}

#[test]
fn hand_sum_and_visibility() {
    let mut hand = Hand::new();
    hand.push(card(Suit::Oros, 1));
    hand.push(card(Suit::Espadas, 10));

    assert_eq!(hand.sum(), 1.5);
    assert_eq!(hand.visible_sum(), 0.5);
    assert!(!hand.is_hidden_revealed());

    hand.reveal_hidden();
    assert_eq!(hand.visible_sum(), 1.5);

    hand.push(card(Suit::Bastos, 6));
    assert_eq!(hand.sum(), 7.5);
    assert!(hand.is_target());
    assert!(!hand.is_bust());

    hand.push(card(Suit::Copas, 1));
    assert_eq!(hand.sum(), 8.5);
    assert!(hand.is_bust());
}

#[test]
fn bet_validation() {
    let table = Table::new("Ana", 100, 1);

    assert_eq!(table.place_bet(0).unwrap_err(), BetError::NonPositive);
    assert_eq!(table.place_bet(-5).unwrap_err(), BetError::NonPositive);
    assert_eq!(
        table.place_bet(101).unwrap_err(),
        BetError::InsufficientFunds
    );

    // The full bankroll is a valid stake and stays untouched until settlement.
    table.place_bet(100).unwrap();
    assert_eq!(table.bankroll(), 100);
    assert_eq!(table.bet(), 100);
    assert_eq!(table.phase(), RoundPhase::PlayerTurn);
    assert_eq!(table.cards_remaining(), DECK_SIZE - 2);
    assert_eq!(table.player_hand().len(), 1);
    assert_eq!(table.dealer_hand().len(), 1);
}

#[test]
fn bet_is_a_noop_mid_round() {
    let table = Table::new("Ana", 100, 1);
    table.place_bet(20).unwrap();

    table.place_bet(50).unwrap();
    assert_eq!(table.bet(), 20);
    assert_eq!(table.phase(), RoundPhase::PlayerTurn);
}

#[test]
fn natural_on_hidden_card_plus_first_hit() {
    let table = Table::new("Ana", 100, 3);
    table.place_bet(20).unwrap();
    stack_round(
        &table,
        card(Suit::Copas, 2),
        card(Suit::Oros, 7),
        &[card(Suit::Espadas, 10)],
    );

    let drawn = table.hit().unwrap().unwrap();
    assert_eq!(drawn, card(Suit::Espadas, 10));

    assert_eq!(table.phase(), RoundPhase::Resolved);
    let result = table.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::Natural);
    assert_eq!(result.bet, 20);
    assert_eq!(result.delta, 40);
    assert_eq!(result.balance, 140);
    assert_eq!(result.player_sum, TARGET);
    assert_eq!(table.bankroll(), 140);

    let events = table.drain_events();
    assert_eq!(
        events,
        vec![
            TableEvent::HiddenCardRevealed {
                seat: Seat::Player,
                card: card(Suit::Oros, 7),
            },
            TableEvent::CardDrawn {
                seat: Seat::Player,
                card: card(Suit::Espadas, 10),
                sum: 7.5,
            },
            TableEvent::RoundResolved {
                outcome: Outcome::Natural,
                delta: 40,
                balance: 140,
            },
        ]
    );
}

#[test]
fn later_seven_and_a_half_is_a_plain_win() {
    let table = Table::new("Ana", 100, 3);
    table.place_bet(20).unwrap();
    stack_round(
        &table,
        card(Suit::Copas, 2),
        card(Suit::Oros, 5),
        &[card(Suit::Espadas, 2), card(Suit::Bastos, 10)],
    );

    table.hit().unwrap().unwrap();
    assert_eq!(table.phase(), RoundPhase::PlayerTurn);

    table.hit().unwrap().unwrap();
    assert_eq!(table.phase(), RoundPhase::Resolved);

    let result = table.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerWins);
    assert_eq!(table.bankroll(), 140);

    // A plain 7.5 win shows the dealer's hidden card; a natural does not.
    let events = table.drain_events();
    assert!(events.contains(&TableEvent::HiddenCardRevealed {
        seat: Seat::Dealer,
        card: card(Suit::Copas, 2),
    }));
}

#[test]
fn player_bust_loses_the_bet() {
    let table = Table::new("Ana", 100, 9);
    table.place_bet(20).unwrap();
    stack_round(
        &table,
        card(Suit::Copas, 3),
        card(Suit::Oros, 5),
        &[card(Suit::Espadas, 4)],
    );

    table.hit().unwrap().unwrap();

    assert_eq!(table.phase(), RoundPhase::Resolved);
    let result = table.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBusted);
    assert_eq!(result.delta, -20);
    assert_eq!(result.player_sum, 9.0);
    assert_eq!(table.bankroll(), 80);

    // The dealer's hidden card is shown once the player busts.
    let events = table.drain_events();
    assert!(events.contains(&TableEvent::HiddenCardRevealed {
        seat: Seat::Dealer,
        card: card(Suit::Copas, 3),
    }));
}

#[test]
fn dealer_mirrors_the_player_sum() {
    let table = Table::new("Ana", 100, 5);
    table.place_bet(20).unwrap();
    stack_round(
        &table,
        card(Suit::Copas, 5),
        card(Suit::Oros, 6),
        &[
            card(Suit::Oros, 10),   // player hit -> 6.5
            card(Suit::Espadas, 1), // dealer -> 6, still behind
            card(Suit::Bastos, 1),  // dealer -> 7, ahead without busting
        ],
    );

    table.hit().unwrap().unwrap();
    table.stand().unwrap();

    // Dealer sat at 5 <= 6.5, so it had to draw, and kept drawing until it
    // passed the player's sum.
    assert_eq!(table.dealer_hand().len(), 3);
    assert_eq!(table.dealer_hand().sum(), 7.0);

    let result = table.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(result.player_sum, 6.5);
    assert_eq!(result.dealer_sum, 7.0);
    assert_eq!(table.bankroll(), 80);
}

#[test]
fn dealer_bust_pays_the_player() {
    let table = Table::new("Ana", 100, 5);
    table.place_bet(20).unwrap();
    stack_round(
        &table,
        card(Suit::Copas, 2),
        card(Suit::Oros, 4),
        &[card(Suit::Espadas, 7)], // dealer -> 9, bust
    );

    // Standing without hitting reveals both hidden cards.
    table.stand().unwrap();

    let events = table.drain_events();
    assert_eq!(
        events[0],
        TableEvent::HiddenCardRevealed {
            seat: Seat::Player,
            card: card(Suit::Oros, 4),
        }
    );
    assert_eq!(
        events[1],
        TableEvent::HiddenCardRevealed {
            seat: Seat::Dealer,
            card: card(Suit::Copas, 2),
        }
    );

    let result = table.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerBusted);
    assert_eq!(result.dealer_sum, 9.0);
    assert_eq!(table.bankroll(), 140);
}

#[test]
fn dealer_ahead_at_deal_never_draws() {
    let table = Table::new("Ana", 100, 5);
    table.place_bet(20).unwrap();
    stack_round(&table, card(Suit::Copas, 7), card(Suit::Oros, 1), &[]);

    table.stand().unwrap();

    assert_eq!(table.dealer_hand().len(), 1);
    let result = table.last_result().unwrap();
    assert_eq!(result.outcome, Outcome::DealerWins);
    assert_eq!(table.bankroll(), 80);
}

#[test]
fn standoff_classification() {
    assert_eq!(Outcome::from_standoff(6.0, 6.0), Outcome::Tie);
    assert_eq!(Outcome::from_standoff(6.0, 9.0), Outcome::DealerBusted);
    assert_eq!(Outcome::from_standoff(6.5, 7.0), Outcome::DealerWins);
    assert_eq!(Outcome::from_standoff(7.0, 6.5), Outcome::PlayerWins);

    // Ties favor the house.
    assert!(!Outcome::Tie.is_player_win());
    assert!(!Outcome::DealerWins.is_player_win());
    assert!(!Outcome::PlayerBusted.is_player_win());
    assert!(Outcome::PlayerWins.is_player_win());
    assert!(Outcome::Natural.is_player_win());
    assert!(Outcome::DealerBusted.is_player_win());
}

#[test]
fn actions_outside_player_turn_are_noops() {
    let table = Table::new("Ana", 100, 2);

    assert_eq!(table.hit().unwrap(), None);
    table.stand().unwrap();
    assert_eq!(table.phase(), RoundPhase::AwaitingBet);

    // Resolve a round, then make sure replayed actions change nothing.
    table.place_bet(20).unwrap();
    stack_round(
        &table,
        card(Suit::Copas, 3),
        card(Suit::Oros, 5),
        &[card(Suit::Espadas, 4)],
    );
    table.hit().unwrap();
    assert_eq!(table.phase(), RoundPhase::Resolved);
    assert_eq!(table.bankroll(), 80);

    assert_eq!(table.hit().unwrap(), None);
    table.stand().unwrap();
    assert_eq!(table.bankroll(), 80);
    assert_eq!(table.phase(), RoundPhase::Resolved);
}

#[test]
fn new_round_resets_only_after_resolution() {
    let table = Table::new("Ana", 100, 2);
    table.place_bet(20).unwrap();

    // Mid-round the call is ignored.
    table.new_round();
    assert_eq!(table.phase(), RoundPhase::PlayerTurn);

    stack_round(
        &table,
        card(Suit::Copas, 3),
        card(Suit::Oros, 5),
        &[card(Suit::Espadas, 4)],
    );
    table.hit().unwrap();
    assert_eq!(table.phase(), RoundPhase::Resolved);

    table.new_round();
    assert_eq!(table.phase(), RoundPhase::AwaitingBet);
    assert_eq!(table.bet(), 0);
    assert!(table.player_hand().is_empty());
    assert!(table.dealer_hand().is_empty());
    // The last result stays readable between rounds.
    assert_eq!(table.last_result().unwrap().outcome, Outcome::PlayerBusted);
}

#[test]
fn losing_the_whole_bankroll_goes_broke() {
    let table = Table::new("Ana", 20, 8);
    table.place_bet(20).unwrap();
    stack_round(
        &table,
        card(Suit::Copas, 3),
        card(Suit::Oros, 5),
        &[card(Suit::Espadas, 4)],
    );

    table.hit().unwrap();
    assert_eq!(table.bankroll(), 0);
    assert!(table.is_broke());
    assert!(table.drain_events().contains(&TableEvent::Broke));

    table.new_round();
    assert_eq!(
        table.place_bet(10).unwrap_err(),
        BetError::InsufficientFunds
    );
}

#[test]
fn empty_deck_aborts_the_round() {
    let table = Table::new("Ana", 100, 4);
    table.place_bet(20).unwrap();
    stack_round(&table, card(Suit::Copas, 2), card(Suit::Oros, 3), &[]);

    assert_eq!(table.hit().unwrap_err(), EmptyDeckError);

    // The round is discarded without settlement.
    assert_eq!(table.phase(), RoundPhase::AwaitingBet);
    assert_eq!(table.bet(), 0);
    assert_eq!(table.bankroll(), 100);
    assert!(table.player_hand().is_empty());
    assert!(table.last_result().is_none());
}

#[test]
fn table_exposes_session_identity() {
    let table = Table::new("Ana", 100, 1);
    assert_eq!(table.name(), "Ana");
    assert!(!table.is_broke());

    // A negative starting bankroll is clamped; the session starts broke.
    let broke = Table::new("Bo", -5, 1);
    assert_eq!(broke.bankroll(), 0);
    assert!(broke.is_broke());
}
