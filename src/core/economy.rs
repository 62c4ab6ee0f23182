//! The resource ledger: gold, gems, energy, xp, and the leveling rule.
//!
//! All counters are non-negative; deltas are clamped rather than rejected,
//! except for explicit spends which are rejected before going negative.

use crate::core::balance::{
    ENERGY_REGEN_AMOUNT, LEVEL_UP_ENERGY_GRANT, LEVEL_UP_GEM_BONUS, LEVEL_UP_MAX_ENERGY_BONUS,
    STARTING_ENERGY, STARTING_GEMS, STARTING_GOLD, STARTING_MAX_ENERGY, XP_PER_LEVEL,
};
use serde::{Deserialize, Serialize};

/// A named resource counter, for generic signed deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Gold,
    Gems,
    Energy,
    Xp,
}

/// Emitted once per level gained so presentation can react
/// (congratulatory overlay, sound).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpEvent {
    pub new_level: u32,
}

/// Aggregate of all player resource counters and the leveling rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub gold: u64,
    pub gems: u32,
    pub energy: u32,
    pub max_energy: u32,
    pub xp: u64,
    pub level: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Starting resources for a new player.
    pub fn new() -> Self {
        Self {
            gold: STARTING_GOLD,
            gems: STARTING_GEMS,
            energy: STARTING_ENERGY,
            max_energy: STARTING_MAX_ENERGY,
            xp: 0,
            level: 1,
        }
    }

    /// XP required to go from the current level to the next.
    pub fn xp_threshold(&self) -> u64 {
        self.level as u64 * XP_PER_LEVEL
    }

    /// Apply a signed delta to a counter. Counters floor at zero; energy is
    /// additionally capped at `max_energy`. XP awards applied through here
    /// do not run the leveling rule; use [`Ledger::grant_xp`] for that.
    pub fn apply_delta(&mut self, resource: Resource, amount: i64) {
        match resource {
            Resource::Gold => self.gold = add_clamped_u64(self.gold, amount),
            Resource::Gems => self.gems = add_clamped_u32(self.gems, amount),
            Resource::Energy => {
                self.energy = add_clamped_u32(self.energy, amount).min(self.max_energy);
            }
            Resource::Xp => self.xp = add_clamped_u64(self.xp, amount),
        }
    }

    /// Award xp and run the leveling rule.
    ///
    /// This is a loop, not a single check: one large award can cross several
    /// thresholds and fire several level-ups in the same update. Each level
    /// gained raises the energy cap, grants energy and gems, and produces
    /// one event.
    pub fn grant_xp(&mut self, amount: u64) -> Vec<LevelUpEvent> {
        self.xp += amount;
        self.check_level_up()
    }

    /// Run the leveling loop against the current xp total.
    pub fn check_level_up(&mut self) -> Vec<LevelUpEvent> {
        let mut events = Vec::new();
        while self.xp >= self.xp_threshold() {
            self.xp -= self.xp_threshold();
            self.level += 1;
            self.max_energy += LEVEL_UP_MAX_ENERGY_BONUS;
            self.energy = (self.energy + LEVEL_UP_ENERGY_GRANT).min(self.max_energy);
            self.gems += LEVEL_UP_GEM_BONUS;
            events.push(LevelUpEvent {
                new_level: self.level,
            });
        }
        events
    }

    /// Periodic regeneration tick from an external timer. Idempotent once
    /// at the cap.
    pub fn regenerate(&mut self) {
        self.energy = (self.energy + ENERGY_REGEN_AMOUNT).min(self.max_energy);
    }

    /// Spend energy if available. Returns false (and changes nothing) when
    /// the balance is short; the ledger never goes negative.
    pub fn try_spend_energy(&mut self, cost: u32) -> bool {
        if self.energy < cost {
            return false;
        }
        self.energy -= cost;
        true
    }

    /// Spend gems if available.
    pub fn try_spend_gems(&mut self, cost: u32) -> bool {
        if self.gems < cost {
            return false;
        }
        self.gems -= cost;
        true
    }

    /// Spend gold if available.
    pub fn try_spend_gold(&mut self, cost: u64) -> bool {
        if self.gold < cost {
            return false;
        }
        self.gold -= cost;
        true
    }
}

fn add_clamped_u64(current: u64, delta: i64) -> u64 {
    if delta >= 0 {
        current.saturating_add(delta as u64)
    } else {
        current.saturating_sub(delta.unsigned_abs())
    }
}

fn add_clamped_u32(current: u32, delta: i64) -> u32 {
    let wide = add_clamped_u64(current as u64, delta);
    u32::try_from(wide).unwrap_or(u32::MAX)
}
