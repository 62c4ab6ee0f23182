//! Core game state: balance constants, the resource ledger, and the
//! aggregate player state.

pub mod balance;
pub mod economy;
pub mod game_state;

pub use economy::{Ledger, LevelUpEvent, Resource};
pub use game_state::GameState;
