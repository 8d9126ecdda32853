//! Starlane - a rail shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, motion, collisions)
//! - `scene`: The four-scene state machine states
//! - `game`: Frame-loop driver with injected input/audio/render collaborators
//! - `hud`: Score and life HUD bookkeeping
//! - `settings`: User preferences (volumes, seed override)

pub mod audio;
pub mod game;
pub mod hud;
pub mod input;
pub mod render;
pub mod scene;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use scene::Scene;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Beam pool capacity
    pub const BEAM_POOL: usize = 10;
    /// Enemy pool capacity
    pub const ENEMY_POOL: usize = 10;
    /// Number of scrolling stage tiles
    pub const STAGE_TILES: usize = 20;

    /// Player horizontal speed per frame while a direction is held
    pub const PLAYER_SPEED: f32 = 0.1;
    /// Player horizontal travel limit (|x| <= bound)
    pub const PLAYER_BOUND_X: f32 = 4.0;
    /// Frames of damage flicker after the player is struck
    pub const PLAYER_HIT_FRAMES: u32 = 60;
    /// Player model scale
    pub const PLAYER_SCALE: f32 = 0.5;

    /// Beam forward speed per frame while active
    pub const BEAM_SPEED: f32 = 0.3;
    /// Beam spin per frame (advances for every slot, active or not)
    pub const BEAM_SPIN: f32 = 0.1;
    /// Forward distance past which an active beam despawns
    pub const BEAM_RANGE_Z: f32 = 40.0;
    /// Beam model scale
    pub const BEAM_SCALE: f32 = 0.3;
    /// Frames between shots; one cooldown gates the whole pool
    pub const FIRE_COOLDOWN_FRAMES: u32 = 10;

    /// Enemy base approach speed per frame (toward the player)
    pub const ENEMY_APPROACH: f32 = 0.1;
    /// Enemy spin per frame while active
    pub const ENEMY_SPIN: f32 = 0.1;
    /// Enemy horizontal drift speed magnitude
    pub const ENEMY_DRIFT: f32 = 0.1;
    /// Forward coordinate of the far spawn plane
    pub const ENEMY_SPAWN_Z: f32 = 40.0;
    /// Forward coordinate below which an active enemy despawns off-screen
    pub const ENEMY_GONE_Z: f32 = -5.0;
    /// Horizontal bound at which enemy drift bounces
    pub const ENEMY_BOUND_X: f32 = 4.0;
    /// Enemy model scale
    pub const ENEMY_SCALE: f32 = 0.5;
    /// Divisor turning the frame counter into the approach-speed ramp
    pub const RAMP_DIVISOR: f32 = 1000.0;

    /// One spawn attempt succeeds per this many uniform outcomes
    pub const SPAWN_ODDS: u32 = 10;
    /// Inclusive step count of the 0.1-unit spawn grid over [-4, 4]
    pub const SPAWN_GRID_STEPS: u32 = 80;

    /// Initial vertical speed of the falling-jump death arc
    pub const JUMP_KICK: f32 = 1.0;
    /// Per-frame decay of the jump speed
    pub const JUMP_DECAY: f32 = 0.1;
    /// Height below which a dying enemy is removed
    pub const JUMP_FLOOR_Y: f32 = -3.0;
    /// Horizontal drift multiplier while dying
    pub const DYING_DRIFT_FACTOR: f32 = 4.0;

    /// Collision half-width on both compared axes
    pub const HIT_RANGE: f32 = 1.0;

    /// Score cap; crossing it wins the run
    pub const SCORE_MAX: u32 = 100;
    /// Lives at the start of a run (also the HUD icon cap)
    pub const START_LIVES: i32 = 3;

    /// Stage tile scale on x (lane width)
    pub const STAGE_SCALE_X: f32 = 4.5;
    /// Stage tile height placement
    pub const STAGE_Y: f32 = -1.5;
    /// Forward spacing between stage tiles
    pub const STAGE_SPACING: f32 = 2.0;
    /// Forward coordinate where a stage tile wraps to the back
    pub const STAGE_NEAR_Z: f32 = -5.0;
    /// Wrap distance applied when a tile scrolls off the front
    pub const STAGE_WRAP_Z: f32 = 40.0;
    /// Stage scroll speed per frame
    pub const STAGE_SCROLL: f32 = 0.1;

    /// Confirm-prompt blink period in frames (visible for the second half)
    pub const BLINK_PERIOD: u32 = 40;
    /// Damage-flicker period in frames (visible for the first half)
    pub const FLICKER_PERIOD: u32 = 4;
    /// Fixed digit count of the score readout
    pub const SCORE_DIGITS: usize = 5;
}
