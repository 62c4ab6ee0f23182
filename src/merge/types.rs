//! Merge grid data structures.
//!
//! A fixed 6x6 grid of slots, each holding at most one typed, tiered item.
//! Items are owned by exactly one slot; they move between slots only through
//! the operations in [`crate::merge::logic`].

use crate::core::balance::{GRID_SLOTS, MAX_ITEM_TIER};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four resource item families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Wood,
    Stone,
    Crop,
    Potion,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Wood,
        ItemType::Stone,
        ItemType::Crop,
        ItemType::Potion,
    ];

    /// Display name for the item family.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wood => "Lumber",
            Self::Stone => "Masonry",
            Self::Crop => "Harvest",
            Self::Potion => "Elixir",
        }
    }

    /// Gold value of a tier-1 item; doubles with each tier above that.
    pub fn base_value(&self) -> u64 {
        match self {
            Self::Wood => 5,
            Self::Stone => 8,
            Self::Crop => 3,
            Self::Potion => 15,
        }
    }
}

/// How an item came into existence. Presentation plays a different
/// one-shot effect for each cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreationCause {
    Spawn,
    Merge,
}

/// A single item instance occupying one grid slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Opaque unique instance id.
    pub id: String,
    pub item_type: ItemType,
    /// Tier in 1..=MAX_ITEM_TIER.
    pub tier: u32,
    /// Set on creation, cleared once presentation acknowledges it.
    pub is_new: bool,
    pub cause: CreationCause,
}

impl Item {
    /// Create a fresh item with a newly generated id and the new-item flag set.
    pub fn new(item_type: ItemType, tier: u32, cause: CreationCause) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            item_type,
            tier: tier.clamp(1, MAX_ITEM_TIER),
            is_new: true,
            cause,
        }
    }

    /// Gold received when this item is liquidated: base value doubled per
    /// tier above 1.
    pub fn sell_value(&self) -> u64 {
        self.item_type.base_value() * 2u64.pow(self.tier - 1)
    }
}

/// The persistent merge grid: an ordered sequence of optionally occupied slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeGrid {
    /// Slots in spawn-priority order. Each holds at most one item.
    pub slots: Vec<Option<Item>>,
}

impl Default for MergeGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeGrid {
    /// Create an empty grid with the standard slot count.
    pub fn new() -> Self {
        Self {
            slots: vec![None; GRID_SLOTS],
        }
    }

    /// Index of the first empty slot, if any.
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.is_none())
    }

    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.first_empty_slot().is_none()
    }

    /// The item at `index`, if the slot is occupied and in bounds.
    pub fn item_at(&self, index: usize) -> Option<&Item> {
        self.slots.get(index).and_then(|s| s.as_ref())
    }
}

/// Rejection returned by `spawn` when no slot is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    GridFull,
}

/// Observable result of a drag/tap interaction on the grid. All variants are
/// normal outcomes; none is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Item relocated into an empty destination slot.
    Moved,
    /// Two same-type same-tier items combined into one of the next tier.
    Merged {
        /// Tier of the newly created item.
        new_tier: u32,
        /// Id of the newly created item.
        new_item_id: String,
        /// XP the ledger should be credited for this merge.
        xp: u64,
    },
    /// Source and destination items exchanged slots.
    Swapped,
    /// Empty source slot, out-of-bounds index, or source == destination.
    NoOp,
}
