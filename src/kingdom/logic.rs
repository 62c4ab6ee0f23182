//! Parcel restoration: requirement matching against the merge grid, atomic
//! consumption, and the xp award.

use super::data::parcel_by_id;
use crate::core::balance::PARCEL_RESTORE_XP;
use crate::core::economy::LevelUpEvent;
use crate::core::game_state::GameState;

/// Rejections when restoring a parcel. Nothing is consumed on rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreError {
    UnknownParcel,
    AlreadyRestored,
    /// Gold shortfall or missing/under-tier items.
    NotEnoughResources,
}

/// Report of a successful restoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreOutcome {
    /// Grid slots whose items were consumed.
    pub consumed_slots: Vec<usize>,
    pub xp_awarded: u64,
    /// Level-ups fired by the xp award.
    pub level_ups: Vec<LevelUpEvent>,
}

/// Restore a parcel: verify gold and item requirements, then atomically
/// deduct the gold, consume the qualifying items, mark the parcel
/// restored, and award xp (the leveling loop may fire).
///
/// Each requirement consumes `count` distinct grid items of its family at
/// the minimum tier or above; one item never satisfies two requirements.
pub fn restore_parcel(state: &mut GameState, parcel_id: &str) -> Result<RestoreOutcome, RestoreError> {
    let parcel = parcel_by_id(parcel_id).ok_or(RestoreError::UnknownParcel)?;
    if state.restored_parcels.iter().any(|id| id == parcel_id) {
        return Err(RestoreError::AlreadyRestored);
    }
    if state.ledger.gold < parcel.cost_gold {
        return Err(RestoreError::NotEnoughResources);
    }

    // Plan the consumption before touching anything.
    let mut chosen: Vec<usize> = Vec::new();
    for req in parcel.requirements {
        for _ in 0..req.count {
            let found = state.grid.slots.iter().enumerate().position(|(index, slot)| {
                !chosen.contains(&index)
                    && slot
                        .as_ref()
                        .map(|item| item.item_type == req.item_type && item.tier >= req.min_tier)
                        .unwrap_or(false)
            });
            match found {
                Some(index) => chosen.push(index),
                None => return Err(RestoreError::NotEnoughResources),
            }
        }
    }

    // All checks passed; apply the whole effect.
    state.ledger.try_spend_gold(parcel.cost_gold);
    for &index in &chosen {
        state.grid.slots[index] = None;
    }
    state.restored_parcels.push(parcel_id.to_string());
    let level_ups = state.ledger.grant_xp(PARCEL_RESTORE_XP);

    Ok(RestoreOutcome {
        consumed_slots: chosen,
        xp_awarded: PARCEL_RESTORE_XP,
        level_ups,
    })
}
