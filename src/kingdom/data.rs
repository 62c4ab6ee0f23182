//! Kingdom parcel catalog.
//!
//! Each parcel is restored by paying gold and consuming merge-grid items
//! that meet a minimum tier.

use crate::merge::ItemType;

/// One item requirement for restoring a parcel. Any grid item of the family
/// at the minimum tier or above qualifies; `count` distinct items are
/// consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRequirement {
    pub item_type: ItemType,
    pub min_tier: u32,
    pub count: u32,
}

/// A restorable region of the kingdom map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parcel {
    pub id: &'static str,
    pub name: &'static str,
    pub cost_gold: u64,
    pub requirements: &'static [ItemRequirement],
    pub description: &'static str,
    /// Seed for the parcel's procedural illustration.
    pub image_seed: u32,
}

/// Returns the full parcel catalog in restoration-price order.
pub fn get_all_parcels() -> Vec<Parcel> {
    vec![
        Parcel {
            id: "p1",
            name: "Royal Gardens",
            cost_gold: 100,
            requirements: &[ItemRequirement {
                item_type: ItemType::Wood,
                min_tier: 3,
                count: 1,
            }],
            description: "Restore the ancient gardens to their former glory.",
            image_seed: 101,
        },
        Parcel {
            id: "p2",
            name: "Guard Tower",
            cost_gold: 500,
            requirements: &[
                ItemRequirement {
                    item_type: ItemType::Stone,
                    min_tier: 4,
                    count: 1,
                },
                ItemRequirement {
                    item_type: ItemType::Wood,
                    min_tier: 4,
                    count: 1,
                },
            ],
            description: "Repair the watchtower to secure the borders.",
            image_seed: 202,
        },
        Parcel {
            id: "p3",
            name: "Marketplace",
            cost_gold: 1500,
            requirements: &[ItemRequirement {
                item_type: ItemType::Crop,
                min_tier: 5,
                count: 2,
            }],
            description: "A bustling hub for trade and commerce.",
            image_seed: 303,
        },
        Parcel {
            id: "p4",
            name: "Alchemist Lab",
            cost_gold: 3000,
            requirements: &[
                ItemRequirement {
                    item_type: ItemType::Stone,
                    min_tier: 6,
                    count: 1,
                },
                ItemRequirement {
                    item_type: ItemType::Potion,
                    min_tier: 4,
                    count: 1,
                },
            ],
            description: "Discover secrets of the arcane.",
            image_seed: 404,
        },
        Parcel {
            id: "p5",
            name: "Training Grounds",
            cost_gold: 5000,
            requirements: &[
                ItemRequirement {
                    item_type: ItemType::Stone,
                    min_tier: 6,
                    count: 2,
                },
                ItemRequirement {
                    item_type: ItemType::Wood,
                    min_tier: 5,
                    count: 1,
                },
            ],
            description: "Train warriors for your kingdom.",
            image_seed: 505,
        },
        Parcel {
            id: "p6",
            name: "Grand Library",
            cost_gold: 8000,
            requirements: &[
                ItemRequirement {
                    item_type: ItemType::Wood,
                    min_tier: 7,
                    count: 2,
                },
                ItemRequirement {
                    item_type: ItemType::Potion,
                    min_tier: 5,
                    count: 1,
                },
            ],
            description: "Unlock ancient knowledge and wisdom.",
            image_seed: 606,
        },
        Parcel {
            id: "p7",
            name: "Dragon Sanctuary",
            cost_gold: 15_000,
            requirements: &[
                ItemRequirement {
                    item_type: ItemType::Stone,
                    min_tier: 8,
                    count: 2,
                },
                ItemRequirement {
                    item_type: ItemType::Potion,
                    min_tier: 7,
                    count: 1,
                },
            ],
            description: "Home to the legendary dragons.",
            image_seed: 707,
        },
        Parcel {
            id: "p8",
            name: "Crystal Palace",
            cost_gold: 25_000,
            requirements: &[
                ItemRequirement {
                    item_type: ItemType::Stone,
                    min_tier: 9,
                    count: 2,
                },
                ItemRequirement {
                    item_type: ItemType::Crop,
                    min_tier: 8,
                    count: 2,
                },
            ],
            description: "The crown jewel of your kingdom.",
            image_seed: 808,
        },
    ]
}

/// Look up a parcel by id.
pub fn parcel_by_id(id: &str) -> Option<Parcel> {
    get_all_parcels().into_iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eight_parcels_with_unique_ids() {
        let parcels = get_all_parcels();
        assert_eq!(parcels.len(), 8);
        let mut ids: Vec<&str> = parcels.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_gold_costs_increase() {
        let parcels = get_all_parcels();
        for pair in parcels.windows(2) {
            assert!(pair[0].cost_gold < pair[1].cost_gold);
        }
    }

    #[test]
    fn test_every_parcel_has_requirements() {
        for parcel in get_all_parcels() {
            assert!(!parcel.requirements.is_empty());
            for req in parcel.requirements {
                assert!(req.count >= 1);
                assert!(req.min_tier >= 1);
            }
        }
    }

    #[test]
    fn test_parcel_by_id() {
        let parcel = parcel_by_id("p2").unwrap();
        assert_eq!(parcel.name, "Guard Tower");
        assert!(parcel_by_id("p99").is_none());
    }
}
