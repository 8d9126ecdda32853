//! Pairwise collision passes
//!
//! Proximity tests are absolute coordinate differences with a half-width
//! of 1 on the horizontal and forward axes; height is never compared.
//! The two passes run in a fixed order and the second sees the first's
//! mutations: an enemy the player ate cannot also be shot that frame.
//! Within the beam pass the enemy tag is checked only at the outer loop,
//! so one enemy overlapped by several beams scores once per beam.

use super::state::{BeamState, EnemyState, GameEvent, GameState};
use crate::consts::*;

/// Run both collision passes for this frame
pub fn resolve(state: &mut GameState, events: &mut Vec<GameEvent>) {
    player_vs_enemies(state, events);
    beams_vs_enemies(state, events);
}

/// Pass 1: every active enemy within range of the player despawns and
/// costs a life. No single-hit-per-frame guard: simultaneous qualifying
/// enemies each decrement life.
fn player_vs_enemies(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player = state.player.transform.translation;
    for enemy in &mut state.enemies {
        if !enemy.is_active() {
            continue;
        }
        let dx = (player.x - enemy.transform.translation.x).abs();
        let dz = (player.z - enemy.transform.translation.z).abs();
        if dx < HIT_RANGE && dz < HIT_RANGE {
            enemy.state = EnemyState::Absent;
            state.life -= 1;
            state.player.hit_timer = PLAYER_HIT_FRAMES;
            events.push(GameEvent::PlayerStruck);
        }
    }
}

/// Pass 2: beams against the enemies that were still active when the
/// pass reached them. A hit consumes the beam and kicks the enemy into
/// its death arc.
fn beams_vs_enemies(state: &mut GameState, events: &mut Vec<GameEvent>) {
    for e in 0..ENEMY_POOL {
        if !state.enemies[e].is_active() {
            continue;
        }
        for b in 0..BEAM_POOL {
            if !state.beams[b].is_active() {
                continue;
            }
            let dx = (state.beams[b].transform.translation.x
                - state.enemies[e].transform.translation.x)
                .abs();
            let dz = (state.beams[b].transform.translation.z
                - state.enemies[e].transform.translation.z)
                .abs();
            if dx < HIT_RANGE && dz < HIT_RANGE {
                state.beams[b].state = BeamState::Absent;
                state.enemies[e].state = EnemyState::Dying;
                state.enemies[e].jump_speed = JUMP_KICK;
                state.score += 1;
                events.push(GameEvent::EnemyDestroyed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn state_with(f: impl FnOnce(&mut GameState)) -> GameState {
        let mut state = GameState::new(0);
        f(&mut state);
        state
    }

    fn place_enemy(state: &mut GameState, slot: usize, x: f32, z: f32) {
        state.enemies[slot].state = EnemyState::Active;
        state.enemies[slot].transform.translation = Vec3::new(x, 0.0, z);
    }

    fn place_beam(state: &mut GameState, slot: usize, x: f32, z: f32) {
        state.beams[slot].state = BeamState::Active;
        state.beams[slot].transform.translation = Vec3::new(x, 0.0, z);
    }

    #[test]
    fn test_beam_kill_scenario() {
        // Beam at origin, enemy half a unit downrange.
        let mut state = state_with(|s| {
            place_beam(s, 0, 0.0, 0.0);
            place_enemy(s, 0, 0.0, 0.5);
        });
        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.beams[0].state, BeamState::Absent);
        assert_eq!(state.enemies[0].state, EnemyState::Dying);
        assert_eq!(state.enemies[0].jump_speed, JUMP_KICK);
        assert_eq!(state.score, 1);
        assert_eq!(events, vec![GameEvent::EnemyDestroyed]);
    }

    #[test]
    fn test_player_hit_scenario() {
        // Enemy within half a unit of the player on both axes.
        let mut state = state_with(|s| place_enemy(s, 2, 0.5, 0.5));
        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.enemies[2].state, EnemyState::Absent);
        assert_eq!(state.life, START_LIVES - 1);
        assert_eq!(state.player.hit_timer, PLAYER_HIT_FRAMES);
        assert_eq!(events, vec![GameEvent::PlayerStruck]);
    }

    #[test]
    fn test_two_beams_on_one_enemy_score_twice() {
        let mut state = state_with(|s| {
            place_beam(s, 0, 0.0, 10.0);
            place_beam(s, 1, 0.2, 10.2);
            place_enemy(s, 0, 0.0, 10.5);
        });
        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.score, 2);
        assert_eq!(state.beams[0].state, BeamState::Absent);
        assert_eq!(state.beams[1].state, BeamState::Absent);
        assert_eq!(state.enemies[0].state, EnemyState::Dying);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_two_enemies_on_player_drain_two_lives() {
        let mut state = state_with(|s| {
            place_enemy(s, 0, 0.3, 0.3);
            place_enemy(s, 1, -0.3, 0.6);
        });
        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.life, START_LIVES - 2);
        assert_eq!(
            events,
            vec![GameEvent::PlayerStruck, GameEvent::PlayerStruck]
        );
    }

    #[test]
    fn test_dying_enemy_is_immune() {
        let mut state = state_with(|s| {
            place_beam(s, 0, 0.0, 10.0);
            place_enemy(s, 0, 0.0, 10.0);
            s.enemies[0].state = EnemyState::Dying;
        });
        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.score, 0);
        assert!(state.beams[0].is_active());
        assert!(events.is_empty());
    }

    #[test]
    fn test_player_eaten_enemy_cannot_also_be_shot() {
        // The enemy overlaps both the player and a beam; pass order
        // means the player collision wins and no score is awarded.
        let mut state = state_with(|s| {
            place_enemy(s, 0, 0.2, 0.2);
            place_beam(s, 0, 0.2, 0.2);
        });
        let mut events = Vec::new();
        resolve(&mut state, &mut events);

        assert_eq!(state.enemies[0].state, EnemyState::Absent);
        assert_eq!(state.life, START_LIVES - 1);
        assert_eq!(state.score, 0);
        assert!(state.beams[0].is_active());
        assert_eq!(events, vec![GameEvent::PlayerStruck]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut state = state_with(|s| place_enemy(s, 0, 1.0, 0.0));
        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert!(state.enemies[0].is_active());
        assert_eq!(state.life, START_LIVES);
    }

    #[test]
    fn test_height_is_ignored() {
        let mut state = state_with(|s| {
            place_enemy(s, 0, 0.5, 0.5);
            s.enemies[0].transform.translation.y = 50.0;
        });
        let mut events = Vec::new();
        resolve(&mut state, &mut events);
        assert_eq!(state.enemies[0].state, EnemyState::Absent);
        assert_eq!(state.life, START_LIVES - 1);
    }
}
