//! Expedition mission catalog.
//!
//! Static data supplied to the match engine: each mission fixes the energy
//! cost, score target, move budget, and the item family rewarded on success.

use crate::merge::ItemType;

/// One expedition on the adventure map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mission {
    pub id: u32,
    pub name: &'static str,
    /// Energy deducted when the session starts.
    pub cost: u32,
    pub target_score: u64,
    /// Move budget for the session.
    pub moves: u32,
    /// Item family spawned onto the merge grid on success.
    pub reward_type: ItemType,
    pub difficulty: &'static str,
}

/// Returns all missions on the adventure map.
pub fn get_all_missions() -> Vec<Mission> {
    vec![
        Mission {
            id: 1,
            name: "Whispering Woods",
            cost: 2,
            target_score: 500,
            moves: 15,
            reward_type: ItemType::Wood,
            difficulty: "Easy",
        },
        Mission {
            id: 2,
            name: "Granite Quarry",
            cost: 3,
            target_score: 800,
            moves: 20,
            reward_type: ItemType::Stone,
            difficulty: "Medium",
        },
        Mission {
            id: 3,
            name: "Golden Fields",
            cost: 4,
            target_score: 1200,
            moves: 25,
            reward_type: ItemType::Crop,
            difficulty: "Hard",
        },
        Mission {
            id: 4,
            name: "Mystic Ruins",
            cost: 5,
            target_score: 2000,
            moves: 30,
            reward_type: ItemType::Potion,
            difficulty: "Expert",
        },
    ]
}

/// Look up a mission by id.
pub fn mission_by_id(id: u32) -> Option<Mission> {
    get_all_missions().into_iter().find(|m| m.id == id)
}
