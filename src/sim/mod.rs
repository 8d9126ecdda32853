//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Fixed pool iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod transform;

pub use state::{Beam, BeamState, Enemy, EnemyState, GameEvent, GameState, PlayerShip};
pub use tick::{TickInput, tick};
pub use transform::Transform;
