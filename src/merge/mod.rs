//! The merge grid engine: a persistent 6x6 grid of typed, tiered items.

pub mod logic;
pub mod types;

pub use logic::{acknowledge_new, liquidate, resolve_interaction, spawn};
pub use types::{CreationCause, InteractionOutcome, Item, ItemType, MergeGrid, SpawnError};
