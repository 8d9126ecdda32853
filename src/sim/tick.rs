//! Fixed timestep simulation tick
//!
//! Core per-frame advance that runs while the Playing scene is live.
//! Update order is fixed: player, beams, enemies (move / spawn / fall),
//! stage scroll, then the collision passes. The shared frame counter
//! increments last, so the speed ramp of the first frame uses 0.

use super::collision;
use super::spawn;
use super::state::{BeamState, EnemyState, GameEvent, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move left this frame
    pub left: bool,
    /// Move right this frame
    pub right: bool,
    /// Fire is held
    pub fire: bool,
}

/// Advance the game state by one frame, returning the sound-cue events
/// the frame produced
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    update_player(state, input);
    update_beams(state, input);
    update_enemies(state);
    update_stage(state);
    collision::resolve(state, &mut events);

    state.frame = state.frame.wrapping_add(1);
    events
}

fn update_player(state: &mut GameState, input: &TickInput) {
    let x = &mut state.player.transform.translation.x;
    if input.right {
        *x += PLAYER_SPEED;
    }
    if input.left {
        *x -= PLAYER_SPEED;
    }
    *x = x.clamp(-PLAYER_BOUND_X, PLAYER_BOUND_X);

    if state.player.hit_timer > 0 {
        state.player.hit_timer -= 1;
    }
}

fn update_beams(state: &mut GameState, input: &TickInput) {
    move_beams(state);
    fire_beam(state, input);
}

fn move_beams(state: &mut GameState) {
    for beam in &mut state.beams {
        if beam.is_active() {
            beam.transform.translation.z += BEAM_SPEED;
            if beam.transform.translation.z > BEAM_RANGE_Z {
                beam.state = BeamState::Absent;
            }
        }
        // Spin advances whether or not the slot is occupied.
        beam.transform.rotation.x += BEAM_SPIN;
    }
}

/// Activate the first free beam slot at the player's position
///
/// One cooldown counter gates the whole pool; it only rearms when a shot
/// actually leaves, so holding fire over a full pool costs nothing.
fn fire_beam(state: &mut GameState, input: &TickInput) {
    if state.fire_cooldown > 0 {
        state.fire_cooldown -= 1;
        return;
    }
    if !input.fire {
        return;
    }
    let origin = state.player.transform.translation;
    if let Some(beam) = state.beams.iter_mut().find(|b| !b.is_active()) {
        beam.transform.translation = origin;
        beam.state = BeamState::Active;
        state.fire_cooldown = FIRE_COOLDOWN_FRAMES;
    }
}

fn update_enemies(state: &mut GameState) {
    move_enemies(state);
    spawn::try_spawn_enemy(state);
    fall_enemies(state);
}

fn move_enemies(state: &mut GameState) {
    let ramp = state.frame as f32 / RAMP_DIVISOR;
    for enemy in &mut state.enemies {
        if !enemy.is_active() {
            continue;
        }
        enemy.transform.translation.z -= ENEMY_APPROACH;
        enemy.transform.rotation.x -= ENEMY_SPIN;
        enemy.transform.translation.x += enemy.drift;
        enemy.transform.translation.z -= ramp;

        if enemy.transform.translation.z < ENEMY_GONE_Z {
            enemy.state = EnemyState::Absent;
        }
        if enemy.transform.translation.x >= ENEMY_BOUND_X {
            enemy.drift = -ENEMY_DRIFT;
        }
        if enemy.transform.translation.x <= -ENEMY_BOUND_X {
            enemy.drift = ENEMY_DRIFT;
        }
    }
}

/// Advance the falling-jump death arc of dying enemies
fn fall_enemies(state: &mut GameState) {
    for enemy in &mut state.enemies {
        if enemy.state != EnemyState::Dying {
            continue;
        }
        enemy.transform.translation.y += enemy.jump_speed;
        enemy.jump_speed -= JUMP_DECAY;
        enemy.transform.translation.x += enemy.drift * DYING_DRIFT_FACTOR;
        if enemy.transform.translation.y < JUMP_FLOOR_Y {
            enemy.state = EnemyState::Absent;
        }
    }
}

fn update_stage(state: &mut GameState) {
    for tile in &mut state.stage {
        tile.translation.z -= STAGE_SCROLL;
        if tile.translation.z < STAGE_NEAR_Z {
            tile.translation.z += STAGE_WRAP_Z;
        }
    }
}
