//! A siete y media (seven-and-a-half) game engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Table`] type that manages the full round flow:
//! betting, the player's hit/stand turn, dealer auto-play, and bankroll
//! settlement. A presentation layer drives it through commands
//! ([`Table::place_bet`], [`Table::hit`], [`Table::stand`],
//! [`Table::new_round`]) and drains [`TableEvent`] notifications to render
//! what happened.
//!
//! # Example
//!
//! ```no_run
//! use sietemedia::Table;
//!
//! let table = Table::new("Ana", 100, 42);
//! table.place_bet(10).unwrap();
//! let _ = table.hit();
//! let _ = table.stand();
//! for event in table.drain_events() {
//!     let _ = event;
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod events;
pub mod game;
pub mod hand;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, RANKS, SUITS, Suit, build_deck};
pub use error::{BetError, EmptyDeckError, InvalidCardError};
pub use events::{Seat, TableEvent};
pub use game::{RoundPhase, Table};
pub use hand::{Hand, TARGET};
pub use result::{Outcome, RoundResult};
