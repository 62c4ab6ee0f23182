//! Hearthvale - Casual Kingdom-Restoration Game Core
//!
//! An in-process state machine library combining three components:
//!
//! - a **merge grid**: a persistent 6x6 grid of typed, tiered items with
//!   spawn, move/merge/swap, and liquidation operations;
//! - a **match-3 engine**: bounded mission sessions on a 7x6 token board
//!   with a move budget and score target;
//! - a **resource ledger**: gold, gems, energy, and xp with a looping
//!   level-up rule.
//!
//! Rendering, audio, and dialog surfaces are external collaborators; they
//! drive the engines through the operations exposed here and observe the
//! returned outcomes and events.

pub mod challenges;
pub mod core;
pub mod kingdom;
pub mod merge;
pub mod shop;

pub use crate::core::balance::{GRID_SIZE, MAX_ITEM_TIER};
pub use crate::core::{GameState, Ledger, LevelUpEvent, Resource};
pub use challenges::{
    abandon_mission, conclude_mission, start_mission, ActiveMission, MatchGame, MatchPhase,
    MatchResult, Mission, MissionError, MissionOutcome,
};
pub use kingdom::{restore_parcel, Parcel, RestoreError};
pub use merge::{InteractionOutcome, Item, ItemType, MergeGrid, SpawnError};
pub use shop::{purchase, PurchaseOutcome, ShopError, ShopPurchase};
