//! Gem shop: energy refills, gold pouches, and supply chests.

use crate::core::balance::{
    SHOP_ENERGY_REFILL_GEMS, SHOP_GOLD_POUCH_AMOUNT, SHOP_GOLD_POUCH_GEMS,
    SHOP_SUPPLY_CHEST_GEMS, SHOP_SUPPLY_CHEST_TIER,
};
use crate::core::game_state::GameState;
use crate::merge::{spawn, ItemType};

/// Purchasable shop offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopPurchase {
    /// Refill energy to the cap.
    EnergyRefill,
    /// A flat pile of gold.
    GoldPouch,
    /// Spawns a Lumber item onto the grid.
    SupplyChest,
}

impl ShopPurchase {
    pub fn gem_cost(&self) -> u32 {
        match self {
            Self::EnergyRefill => SHOP_ENERGY_REFILL_GEMS,
            Self::GoldPouch => SHOP_GOLD_POUCH_GEMS,
            Self::SupplyChest => SHOP_SUPPLY_CHEST_GEMS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopError {
    InsufficientGems,
}

/// What a purchase delivered. A supply chest bought onto a full grid still
/// costs gems but spawns nothing (`spawned_slot == None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseOutcome {
    pub purchase: ShopPurchase,
    pub spawned_slot: Option<usize>,
}

/// Buy a shop offer. The gem balance is checked before any effect.
pub fn purchase(state: &mut GameState, kind: ShopPurchase) -> Result<PurchaseOutcome, ShopError> {
    if !state.ledger.try_spend_gems(kind.gem_cost()) {
        return Err(ShopError::InsufficientGems);
    }

    let spawned_slot = match kind {
        ShopPurchase::EnergyRefill => {
            state.ledger.energy = state.ledger.max_energy;
            None
        }
        ShopPurchase::GoldPouch => {
            state.ledger.gold += SHOP_GOLD_POUCH_AMOUNT;
            None
        }
        ShopPurchase::SupplyChest => {
            spawn(&mut state.grid, ItemType::Wood, SHOP_SUPPLY_CHEST_TIER).ok()
        }
    };

    Ok(PurchaseOutcome {
        purchase: kind,
        spawned_slot,
    })
}
