//! Randomized enemy spawning
//!
//! The only source of non-determinism in the simulation. All draws come
//! from the state-owned RNG, seeded once per run and never reseeded.

use rand::Rng;

use super::state::{EnemyState, GameState};
use crate::consts::*;

/// Attempt to activate one absent enemy slot
///
/// Fires with probability 1/10 per frame. The first free slot in pool
/// order spawns on the far plane with a grid-snapped horizontal position
/// and a coin-flip drift direction. With a full pool the attempt is
/// silently dropped; the position and drift draws only happen once a
/// slot has been found, so a dropped attempt consumes a single draw.
pub fn try_spawn_enemy(state: &mut GameState) {
    if state.rng.random_range(0..SPAWN_ODDS) != 0 {
        return;
    }
    let Some(enemy) = state
        .enemies
        .iter_mut()
        .find(|e| e.state == EnemyState::Absent)
    else {
        return;
    };

    enemy.state = EnemyState::Active;
    enemy.transform.translation.z = ENEMY_SPAWN_Z;
    enemy.transform.translation.y = 0.0;

    // 81 grid points, 0.1 apart, covering [-4, 4].
    let step = state.rng.random_range(0..=SPAWN_GRID_STEPS);
    enemy.transform.translation.x = step as f32 / 10.0 - 4.0;

    enemy.drift = if state.rng.random_range(0..2) == 0 {
        ENEMY_DRIFT
    } else {
        -ENEMY_DRIFT
    };
}
