//! Per-behavior waypoint policies.

use crate::config::AiConfig;
use crate::env::{BehaviorType, RngOracle, compute_seed};
use crate::state::{AgentController, Position, Timestamp};

/// Where to go next and which waypoint index to store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaypointTarget {
    pub position: Position,
    pub index: usize,
}

/// Picks the next roaming target for `controller`.
///
/// | Behavior              | Target                                                 |
/// |-----------------------|--------------------------------------------------------|
/// | Patrol                | current waypoint; advances (wrapping) once reached      |
/// | Aggressive, Passive   | random waypoint                                         |
/// | Defensive, Supporter  | waypoint nearest to spawn                               |
/// | Ambusher              | spawn while the index is 0, else a random waypoint      |
/// | Turret                | spawn                                                   |
///
/// Only Patrol changes the stored index. Returns `None` when the policy needs
/// a waypoint and none are configured. Random choices are seeded from the
/// inputs, so identical calls pick identical waypoints.
pub fn next_waypoint(
    behavior: BehaviorType,
    controller: &AgentController,
    position: Position,
    waypoints: &[Position],
    rng: &dyn RngOracle,
    config: &AiConfig,
    now: Timestamp,
) -> Option<WaypointTarget> {
    let stored = controller.waypoint_index;
    let hold = |position| WaypointTarget {
        position,
        index: stored,
    };

    match behavior {
        BehaviorType::Turret => Some(hold(controller.spawn)),
        BehaviorType::Ambusher if stored == 0 => Some(hold(controller.spawn)),
        _ if waypoints.is_empty() => None,
        BehaviorType::Patrol => {
            let current = stored % waypoints.len();
            if position.distance(waypoints[current]) <= config.waypoint_reach_distance {
                let next = (current + 1) % waypoints.len();
                Some(WaypointTarget {
                    position: waypoints[next],
                    index: next,
                })
            } else {
                Some(hold(waypoints[current]))
            }
        }
        BehaviorType::Defensive | BehaviorType::Supporter => waypoints
            .iter()
            .min_by(|a, b| {
                a.distance(controller.spawn)
                    .total_cmp(&b.distance(controller.spawn))
            })
            .map(|&nearest| hold(nearest)),
        BehaviorType::Aggressive | BehaviorType::Passive | BehaviorType::Ambusher => {
            let seed = compute_seed(
                config.world_seed,
                now.as_millis(),
                controller.entity.0,
                stored as u32,
            );
            Some(hold(waypoints[rng.pick_index(seed, waypoints.len())]))
        }
    }
}
