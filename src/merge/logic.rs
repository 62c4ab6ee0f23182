//! Merge grid operations: spawn, move/merge/swap disambiguation, liquidation,
//! and new-item acknowledgement.
//!
//! Every operation leaves the grid in a valid state: each item occupies
//! exactly one slot, and no tier exceeds the cap.

use super::types::{CreationCause, InteractionOutcome, Item, ItemType, MergeGrid, SpawnError};
use crate::core::balance::{MAX_ITEM_TIER, MERGE_XP_PER_TIER};

/// Place a fresh item of the given type and tier into the first empty slot.
///
/// Returns the slot index on success. Fails with `GridFull` (and no other
/// effect) when every slot is occupied; the caller may retry after freeing
/// space.
pub fn spawn(grid: &mut MergeGrid, item_type: ItemType, tier: u32) -> Result<usize, SpawnError> {
    let index = grid.first_empty_slot().ok_or(SpawnError::GridFull)?;
    grid.slots[index] = Some(Item::new(item_type, tier, CreationCause::Spawn));
    Ok(index)
}

/// Resolve a drag/tap interaction from one slot onto another.
///
/// - Empty destination: the item moves.
/// - Same type, same tier, below the tier cap: the two items merge into a
///   brand-new item of the next tier in the destination slot.
/// - Anything else: the items swap slots unconditionally.
/// - Empty source, out-of-bounds index, or `from == to`: no-op.
///
/// None of these branches is an error; the caller observes which one fired
/// through the returned outcome. A `Merged` outcome carries the xp the
/// ledger should be credited.
pub fn resolve_interaction(grid: &mut MergeGrid, from: usize, to: usize) -> InteractionOutcome {
    if from == to || from >= grid.slots.len() || to >= grid.slots.len() {
        return InteractionOutcome::NoOp;
    }
    if grid.slots[from].is_none() {
        return InteractionOutcome::NoOp;
    }

    // Move into an empty slot.
    if grid.slots[to].is_none() {
        grid.slots[to] = grid.slots[from].take();
        return InteractionOutcome::Moved;
    }

    let mergeable = {
        // Both occupied here; checked above.
        let src = grid.slots[from].as_ref().map(|i| (i.item_type, i.tier));
        let dst = grid.slots[to].as_ref().map(|i| (i.item_type, i.tier));
        match (src, dst) {
            (Some((st, sl)), Some((dt, dl))) => st == dt && sl == dl && sl < MAX_ITEM_TIER,
            _ => false,
        }
    };

    if mergeable {
        if let Some(consumed) = grid.slots[from].take() {
            let new_tier = consumed.tier + 1;
            let merged = Item::new(consumed.item_type, new_tier, CreationCause::Merge);
            let new_item_id = merged.id.clone();
            grid.slots[to] = Some(merged);
            return InteractionOutcome::Merged {
                new_tier,
                new_item_id,
                xp: new_tier as u64 * MERGE_XP_PER_TIER,
            };
        }
    }

    // Different type, different tier, or destination at the cap: swap.
    grid.slots.swap(from, to);
    InteractionOutcome::Swapped
}

/// Remove the item at `index` and return the gold it is worth
/// (`base value * 2^(tier - 1)`). Returns `None` for an empty or
/// out-of-bounds slot.
pub fn liquidate(grid: &mut MergeGrid, index: usize) -> Option<u64> {
    if index >= grid.slots.len() {
        return None;
    }
    grid.slots[index].take().map(|item| item.sell_value())
}

/// Clear the one-shot new-item flag on the item with the given id.
///
/// Idempotent: a no-op if the item is gone or already acknowledged, so the
/// presentation effect fires exactly once per creation or merge.
pub fn acknowledge_new(grid: &mut MergeGrid, item_id: &str) {
    for slot in grid.slots.iter_mut() {
        if let Some(item) = slot {
            if item.id == item_id && item.is_new {
                item.is_new = false;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::balance::GRID_SLOTS;

    #[test]
    fn test_spawn_fills_first_empty_slot() {
        let mut grid = MergeGrid::new();
        assert_eq!(spawn(&mut grid, ItemType::Wood, 1), Ok(0));
        assert_eq!(spawn(&mut grid, ItemType::Stone, 1), Ok(1));

        // Free slot 0 and spawn again: slot 0 is refilled first.
        grid.slots[0] = None;
        assert_eq!(spawn(&mut grid, ItemType::Crop, 2), Ok(0));
        let item = grid.item_at(0).unwrap();
        assert_eq!(item.item_type, ItemType::Crop);
        assert_eq!(item.tier, 2);
        assert!(item.is_new);
        assert_eq!(item.cause, CreationCause::Spawn);
    }

    #[test]
    fn test_spawn_full_grid_rejected_without_effect() {
        let mut grid = MergeGrid::new();
        for _ in 0..GRID_SLOTS {
            spawn(&mut grid, ItemType::Wood, 1).unwrap();
        }
        let before: Vec<String> = grid
            .slots
            .iter()
            .map(|s| s.as_ref().unwrap().id.clone())
            .collect();

        assert_eq!(
            spawn(&mut grid, ItemType::Potion, 1),
            Err(SpawnError::GridFull)
        );

        let after: Vec<String> = grid
            .slots
            .iter()
            .map(|s| s.as_ref().unwrap().id.clone())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_move_into_empty_slot() {
        let mut grid = MergeGrid::new();
        spawn(&mut grid, ItemType::Wood, 1).unwrap();
        let id = grid.item_at(0).unwrap().id.clone();

        let outcome = resolve_interaction(&mut grid, 0, 7);
        assert_eq!(outcome, InteractionOutcome::Moved);
        assert!(grid.slots[0].is_none());
        assert_eq!(grid.item_at(7).unwrap().id, id);
    }

    #[test]
    fn test_merge_same_type_same_tier() {
        let mut grid = MergeGrid::new();
        spawn(&mut grid, ItemType::Wood, 1).unwrap();
        spawn(&mut grid, ItemType::Wood, 1).unwrap();
        let old_ids: Vec<String> = (0..2)
            .map(|i| grid.item_at(i).unwrap().id.clone())
            .collect();

        let outcome = resolve_interaction(&mut grid, 0, 1);
        match outcome {
            InteractionOutcome::Merged {
                new_tier,
                new_item_id,
                xp,
            } => {
                assert_eq!(new_tier, 2);
                assert_eq!(xp, 4);
                assert!(!old_ids.contains(&new_item_id));
            }
            other => panic!("expected merge, got {:?}", other),
        }

        assert!(grid.slots[0].is_none());
        let merged = grid.item_at(1).unwrap();
        assert_eq!(merged.item_type, ItemType::Wood);
        assert_eq!(merged.tier, 2);
        assert!(merged.is_new);
        assert_eq!(merged.cause, CreationCause::Merge);
    }

    #[test]
    fn test_merge_at_max_tier_swaps_instead() {
        let mut grid = MergeGrid::new();
        spawn(&mut grid, ItemType::Stone, MAX_ITEM_TIER).unwrap();
        spawn(&mut grid, ItemType::Stone, MAX_ITEM_TIER).unwrap();
        let id0 = grid.item_at(0).unwrap().id.clone();
        let id1 = grid.item_at(1).unwrap().id.clone();

        let outcome = resolve_interaction(&mut grid, 0, 1);
        assert_eq!(outcome, InteractionOutcome::Swapped);
        // Same two items, positions exchanged; no new item created.
        assert_eq!(grid.item_at(0).unwrap().id, id1);
        assert_eq!(grid.item_at(1).unwrap().id, id0);
        assert_eq!(grid.item_at(0).unwrap().tier, MAX_ITEM_TIER);
    }

    #[test]
    fn test_different_type_swaps() {
        let mut grid = MergeGrid::new();
        spawn(&mut grid, ItemType::Wood, 2).unwrap();
        spawn(&mut grid, ItemType::Crop, 2).unwrap();

        let outcome = resolve_interaction(&mut grid, 0, 1);
        assert_eq!(outcome, InteractionOutcome::Swapped);
        assert_eq!(grid.item_at(0).unwrap().item_type, ItemType::Crop);
        assert_eq!(grid.item_at(1).unwrap().item_type, ItemType::Wood);
    }

    #[test]
    fn test_different_tier_swaps() {
        let mut grid = MergeGrid::new();
        spawn(&mut grid, ItemType::Wood, 1).unwrap();
        spawn(&mut grid, ItemType::Wood, 2).unwrap();

        let outcome = resolve_interaction(&mut grid, 0, 1);
        assert_eq!(outcome, InteractionOutcome::Swapped);
        assert_eq!(grid.item_at(0).unwrap().tier, 2);
        assert_eq!(grid.item_at(1).unwrap().tier, 1);
    }

    #[test]
    fn test_empty_source_is_noop() {
        let mut grid = MergeGrid::new();
        spawn(&mut grid, ItemType::Wood, 1).unwrap();

        let outcome = resolve_interaction(&mut grid, 5, 0);
        assert_eq!(outcome, InteractionOutcome::NoOp);
        assert!(grid.item_at(0).is_some());
    }

    #[test]
    fn test_same_slot_is_noop() {
        let mut grid = MergeGrid::new();
        spawn(&mut grid, ItemType::Wood, 1).unwrap();
        assert_eq!(resolve_interaction(&mut grid, 0, 0), InteractionOutcome::NoOp);
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let mut grid = MergeGrid::new();
        spawn(&mut grid, ItemType::Wood, 1).unwrap();
        assert_eq!(
            resolve_interaction(&mut grid, 0, GRID_SLOTS),
            InteractionOutcome::NoOp
        );
        assert_eq!(
            resolve_interaction(&mut grid, GRID_SLOTS, 0),
            InteractionOutcome::NoOp
        );
    }

    #[test]
    fn test_liquidate_credits_exponential_value() {
        let mut grid = MergeGrid::new();
        spawn(&mut grid, ItemType::Wood, 3).unwrap();
        // base 5 * 2^2 = 20
        assert_eq!(liquidate(&mut grid, 0), Some(20));
        assert!(grid.slots[0].is_none());
    }

    #[test]
    fn test_liquidate_empty_slot_is_none() {
        let mut grid = MergeGrid::new();
        assert_eq!(liquidate(&mut grid, 0), None);
        assert_eq!(liquidate(&mut grid, GRID_SLOTS + 1), None);
    }

    #[test]
    fn test_acknowledge_new_is_idempotent() {
        let mut grid = MergeGrid::new();
        spawn(&mut grid, ItemType::Potion, 1).unwrap();
        let id = grid.item_at(0).unwrap().id.clone();

        acknowledge_new(&mut grid, &id);
        assert!(!grid.item_at(0).unwrap().is_new);

        // Second acknowledgement and unknown ids are absorbed silently.
        acknowledge_new(&mut grid, &id);
        acknowledge_new(&mut grid, "no-such-item");
        assert!(!grid.item_at(0).unwrap().is_new);
    }

    #[test]
    fn test_exclusive_occupancy_across_operations() {
        let mut grid = MergeGrid::new();
        for _ in 0..6 {
            spawn(&mut grid, ItemType::Wood, 1).unwrap();
        }
        resolve_interaction(&mut grid, 0, 10); // move
        resolve_interaction(&mut grid, 1, 2); // merge
        resolve_interaction(&mut grid, 3, 4); // merge
        resolve_interaction(&mut grid, 2, 4); // swap or merge depending on tiers

        let mut seen = std::collections::HashSet::new();
        for item in grid.slots.iter().flatten() {
            assert!(seen.insert(item.id.clone()), "duplicate item id in grid");
            assert!(item.tier >= 1 && item.tier <= MAX_ITEM_TIER);
        }
    }
}
