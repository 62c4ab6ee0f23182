//! Mission sessions: the lifecycle around one match-3 playthrough.
//!
//! A session is created from a mission descriptor (energy gate first),
//! played through the match engine, and concluded exactly once, spawning a
//! reward item onto the merge grid on success.

pub mod match3;
pub mod missions;

pub use match3::{MatchGame, MatchPhase, MatchResult};
pub use missions::{get_all_missions, mission_by_id, Mission};

use crate::core::balance::{MISSION_REWARD_MAX_TIER, MISSION_REWARD_MIN_TIER};
use crate::core::game_state::GameState;
use crate::merge::{spawn, ItemType};
use rand::Rng;

/// The single mission in flight. Only one can be active at a time.
#[derive(Debug, Clone)]
pub struct ActiveMission {
    pub mission: Mission,
    pub game: MatchGame,
}

/// Rejections when starting a mission. All checked before any state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionError {
    /// Not enough energy for the mission cost; the ledger never goes
    /// negative, so this is rejected before a session exists.
    InsufficientEnergy,
    /// A session is already in flight.
    MissionAlreadyActive,
    UnknownMission,
}

/// The reward spawned onto the merge grid after a successful mission.
/// `slot` is `None` when the grid was full and the reward was forfeited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardSpawn {
    pub item_type: ItemType,
    pub tier: u32,
    pub slot: Option<usize>,
}

/// Final report of a concluded mission, produced exactly once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionOutcome {
    pub success: bool,
    pub final_score: u64,
    pub reward: Option<RewardSpawn>,
}

/// Start a mission session: deduct the energy cost and install the board.
///
/// Rejected with no effect if a session is already active, the id is
/// unknown, or energy is short.
pub fn start_mission<R: Rng>(
    state: &mut GameState,
    mission_id: u32,
    rng: &mut R,
) -> Result<(), MissionError> {
    if state.active_mission.is_some() {
        return Err(MissionError::MissionAlreadyActive);
    }
    let mission = mission_by_id(mission_id).ok_or(MissionError::UnknownMission)?;
    if !state.ledger.try_spend_energy(mission.cost) {
        return Err(MissionError::InsufficientEnergy);
    }

    let game = MatchGame::new(mission.target_score, mission.moves, rng);
    state.active_mission = Some(ActiveMission { mission, game });
    Ok(())
}

/// Consume a concluded session and report its result.
///
/// Returns `None` when no session is active or the session has not reached
/// its terminal state yet. On success a reward item of the mission's family
/// spawns at a random tier (1-2); a full grid forfeits the reward, which the
/// outcome records as `reward.slot == None`.
pub fn conclude_mission<R: Rng>(state: &mut GameState, rng: &mut R) -> Option<MissionOutcome> {
    let result = {
        let active = state.active_mission.as_ref()?;
        active.game.game_result?
    };
    let active = state.active_mission.take()?;

    let reward = if result.success {
        let tier = rng.gen_range(MISSION_REWARD_MIN_TIER..=MISSION_REWARD_MAX_TIER);
        let slot = spawn(&mut state.grid, active.mission.reward_type, tier).ok();
        Some(RewardSpawn {
            item_type: active.mission.reward_type,
            tier,
            slot,
        })
    } else {
        None
    };

    Some(MissionOutcome {
        success: result.success,
        final_score: result.final_score,
        reward,
    })
}

/// Abandon the active session without a result. Legal only between
/// resolutions; returns false (session kept) while the engine is busy.
pub fn abandon_mission(state: &mut GameState) -> bool {
    match &state.active_mission {
        Some(active) if !active.game.is_busy() => {
            state.active_mission = None;
            true
        }
        _ => false,
    }
}
