//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives here: the entity pools, the
//! score/life counters and the run RNG. Pool sizes are fixed at compile
//! time; a slot is reused once its occupant is marked absent.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::transform::Transform;
use crate::consts::*;

/// Presence tag of a beam slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BeamState {
    #[default]
    Absent,
    Active,
}

/// One slot of the beam pool
#[derive(Debug, Clone, Copy, Default)]
pub struct Beam {
    pub transform: Transform,
    pub state: BeamState,
}

impl Beam {
    pub fn is_active(&self) -> bool {
        self.state == BeamState::Active
    }
}

/// Lifecycle tag of an enemy slot
///
/// `Dying` is the transitional state between being hit and removal; a
/// dying enemy follows the falling-jump arc and no longer interacts with
/// gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    #[default]
    Absent,
    Active,
    Dying,
}

/// One slot of the enemy pool
#[derive(Debug, Clone, Copy, Default)]
pub struct Enemy {
    pub transform: Transform,
    pub state: EnemyState,
    /// Horizontal drift speed; sign flips when the slot bounces at ±4
    pub drift: f32,
    /// Vertical speed of the death arc, meaningful only while dying
    pub jump_speed: f32,
}

impl Enemy {
    pub fn is_active(&self) -> bool {
        self.state == EnemyState::Active
    }

    /// Whether the slot should appear in the battlefield render pass
    pub fn is_visible(&self) -> bool {
        self.state != EnemyState::Absent
    }
}

/// The player ship
#[derive(Debug, Clone, Copy)]
pub struct PlayerShip {
    pub transform: Transform,
    /// Damage-flicker countdown; grants no gameplay immunity
    pub hit_timer: u32,
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self {
            transform: Transform::with_scale(PLAYER_SCALE),
            hit_timer: 0,
        }
    }
}

/// Things a tick asks the host to react to (sound cues)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An enemy collided with the player
    PlayerStruck,
    /// A beam sent an enemy into its death arc
    EnemyDestroyed,
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner RNG, seeded once and advanced monotonically
    pub rng: Pcg32,
    /// Shared frame counter; wraps, drives blink timing and the speed ramp
    pub frame: u32,
    /// Bounded score, clamped to [0, 100] before presentation reads it
    pub score: u32,
    /// Remaining lives; the run is lost at <= 0
    pub life: i32,
    /// Shared fire cooldown gating the whole beam pool
    pub fire_cooldown: u32,
    pub player: PlayerShip,
    pub beams: [Beam; BEAM_POOL],
    pub enemies: [Enemy; ENEMY_POOL],
    /// Scrolling lane tiles; presentation-facing but moved by the sim
    pub stage: [Transform; STAGE_TILES],
}

impl GameState {
    /// Create a fresh state with the given seed
    pub fn new(seed: u64) -> Self {
        let beam = Beam {
            transform: Transform::with_scale(BEAM_SCALE),
            state: BeamState::Absent,
        };
        let enemy = Enemy {
            transform: Transform::with_scale(ENEMY_SCALE),
            state: EnemyState::Absent,
            drift: 0.0,
            jump_speed: 0.0,
        };

        let mut stage = [Transform::default(); STAGE_TILES];
        for (i, tile) in stage.iter_mut().enumerate() {
            tile.scale = glam::Vec3::new(STAGE_SCALE_X, 1.0, 1.0);
            tile.translation.y = STAGE_Y;
            tile.translation.z = STAGE_SPACING * i as f32 + STAGE_NEAR_Z;
        }

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            score: 0,
            life: START_LIVES,
            fire_cooldown: 0,
            player: PlayerShip::default(),
            beams: [beam; BEAM_POOL],
            enemies: [enemy; ENEMY_POOL],
            stage,
        }
    }

    /// Reset the run counters and pools for a new play session
    ///
    /// The stage keeps its scroll phase (tiles wrap, the phase is
    /// immaterial) and the RNG keeps advancing from where it was.
    pub fn reset_run(&mut self) {
        self.score = 0;
        self.life = START_LIVES;
        self.frame = 0;
        self.fire_cooldown = 0;
        self.player.hit_timer = 0;
        self.player.transform.translation.x = 0.0;
        for beam in &mut self.beams {
            beam.state = BeamState::Absent;
        }
        for enemy in &mut self.enemies {
            enemy.state = EnemyState::Absent;
        }
    }

    /// Count of active beams (test and HUD helper)
    pub fn active_beams(&self) -> usize {
        self.beams.iter().filter(|b| b.is_active()).count()
    }

    /// Count of active enemies (test and HUD helper)
    pub fn active_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_active()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_pools_start_absent() {
        let state = GameState::new(1);
        assert_eq!(state.active_beams(), 0);
        assert_eq!(state.active_enemies(), 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.life, START_LIVES);
    }

    #[test]
    fn test_stage_tiles_cover_the_lane() {
        let state = GameState::new(1);
        assert_eq!(state.stage[0].translation.z, -5.0);
        assert_eq!(state.stage[19].translation.z, 33.0);
        for tile in &state.stage {
            assert_eq!(tile.translation.y, STAGE_Y);
            assert_eq!(tile.scale.x, STAGE_SCALE_X);
        }
    }

    #[test]
    fn test_reset_run_clears_counters_and_pools() {
        let mut state = GameState::new(7);
        state.score = 42;
        state.life = 1;
        state.frame = 999;
        state.fire_cooldown = 5;
        state.player.hit_timer = 30;
        state.player.transform.translation.x = 2.5;
        state.beams[3].state = BeamState::Active;
        state.enemies[8].state = EnemyState::Dying;

        state.reset_run();

        assert_eq!(state.score, 0);
        assert_eq!(state.life, START_LIVES);
        assert_eq!(state.frame, 0);
        assert_eq!(state.fire_cooldown, 0);
        assert_eq!(state.player.hit_timer, 0);
        assert_eq!(state.player.transform.translation.x, 0.0);
        assert_eq!(state.active_beams(), 0);
        assert_eq!(state.active_enemies(), 0);
        assert!(state.enemies.iter().all(|e| e.state == EnemyState::Absent));
    }

    #[test]
    fn test_same_seed_same_rng_stream() {
        use rand::Rng;
        let mut a = GameState::new(123);
        let mut b = GameState::new(123);
        let draws_a: Vec<u32> = (0..8).map(|_| a.rng.random_range(0..1000)).collect();
        let draws_b: Vec<u32> = (0..8).map(|_| b.rng.random_range(0..1000)).collect();
        assert_eq!(draws_a, draws_b);
    }
}
