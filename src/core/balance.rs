//! Shared balance constants used across the game core.
//!
//! All core balance numbers should be defined here.
//! Change once, test everywhere.

// =============================================================================
// MERGE GRID
// =============================================================================

/// Merge grid edge length (grid is GRID_SIZE x GRID_SIZE).
pub const GRID_SIZE: usize = 6;

/// Total number of grid slots.
pub const GRID_SLOTS: usize = GRID_SIZE * GRID_SIZE;

/// Highest tier an item can reach. Merging two max-tier items is not
/// possible; the interaction falls through to a swap instead.
pub const MAX_ITEM_TIER: u32 = 10;

/// XP awarded per merge, multiplied by the tier of the item produced.
pub const MERGE_XP_PER_TIER: u64 = 2;

// =============================================================================
// LEVELING & ENERGY
// =============================================================================

/// XP threshold factor: leveling from level N requires N * XP_PER_LEVEL xp.
pub const XP_PER_LEVEL: u64 = 50;

/// Max-energy increase granted on each level up.
pub const LEVEL_UP_MAX_ENERGY_BONUS: u32 = 5;

/// Energy granted on each level up (clamped to the new cap).
pub const LEVEL_UP_ENERGY_GRANT: u32 = 5;

/// Gems granted on each level up.
pub const LEVEL_UP_GEM_BONUS: u32 = 5;

/// Energy restored per regeneration tick.
pub const ENERGY_REGEN_AMOUNT: u32 = 1;

/// Interval between regeneration ticks, driven by an external timer.
pub const ENERGY_REGEN_INTERVAL_MS: u64 = 30_000;

// =============================================================================
// STARTING RESOURCES
// =============================================================================

pub const STARTING_GOLD: u64 = 100;
pub const STARTING_GEMS: u32 = 25;
pub const STARTING_ENERGY: u32 = 30;
pub const STARTING_MAX_ENERGY: u32 = 50;

// =============================================================================
// MATCH-3 MISSIONS
// =============================================================================

/// Score awarded per matched cell in one resolution.
pub const MATCH_SCORE_PER_CELL: u64 = 100;

/// Lowest tier a mission reward item can spawn at.
pub const MISSION_REWARD_MIN_TIER: u32 = 1;

/// Highest tier a mission reward item can spawn at.
pub const MISSION_REWARD_MAX_TIER: u32 = 2;

// =============================================================================
// KINGDOM RESTORATION
// =============================================================================

/// XP awarded for restoring a parcel.
pub const PARCEL_RESTORE_XP: u64 = 50;

// =============================================================================
// SHOP
// =============================================================================

/// Gem cost of a full energy refill.
pub const SHOP_ENERGY_REFILL_GEMS: u32 = 5;

/// Gem cost of a gold pouch.
pub const SHOP_GOLD_POUCH_GEMS: u32 = 10;

/// Gold granted by a gold pouch.
pub const SHOP_GOLD_POUCH_AMOUNT: u64 = 500;

/// Gem cost of a supply chest.
pub const SHOP_SUPPLY_CHEST_GEMS: u32 = 15;

/// Tier of the item a supply chest spawns.
pub const SHOP_SUPPLY_CHEST_TIER: u32 = 4;
