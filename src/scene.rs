//! Scene states
//!
//! The coarse state machine wrapping the simulation: which update and
//! draw routines run, and which background track plays. The transition
//! table itself lives in `Game`, which is its single source of truth.

use crate::audio::Track;

/// Current scene of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    /// Waiting on the title screen
    #[default]
    Title,
    /// Active gameplay
    Playing,
    /// Run lost; the battlefield stays frozen on screen
    GameOver,
    /// Run won; the battlefield stays frozen on screen
    GameClear,
}

impl Scene {
    /// Background track started when the scene is entered
    pub fn bgm(self) -> Track {
        match self {
            Scene::Title => Track::Title,
            Scene::Playing => Track::Gameplay,
            Scene::GameOver => Track::GameOver,
            Scene::GameClear => Track::GameClear,
        }
    }

    /// Whether the simulation advances in this scene
    pub fn runs_simulation(self) -> bool {
        matches!(self, Scene::Playing)
    }

    /// Whether the backdrop and the 3D battlefield are drawn
    pub fn draws_world(self) -> bool {
        !matches!(self, Scene::Title)
    }

    /// Whether the score/life HUD is drawn
    pub fn draws_hud(self) -> bool {
        !matches!(self, Scene::Title)
    }

    /// Whether the blinking confirm prompt is drawn
    pub fn draws_prompt(self) -> bool {
        !matches!(self, Scene::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_scene_owns_a_track() {
        let scenes = [
            Scene::Title,
            Scene::Playing,
            Scene::GameOver,
            Scene::GameClear,
        ];
        for (i, a) in scenes.iter().enumerate() {
            for b in &scenes[i + 1..] {
                assert_ne!(a.bgm(), b.bgm());
            }
        }
    }

    #[test]
    fn test_only_playing_advances_the_simulation() {
        assert!(Scene::Playing.runs_simulation());
        assert!(!Scene::Title.runs_simulation());
        assert!(!Scene::GameOver.runs_simulation());
        assert!(!Scene::GameClear.runs_simulation());
    }

    #[test]
    fn test_frozen_battlefield_stays_visible_after_the_run() {
        assert!(Scene::GameOver.draws_world());
        assert!(Scene::GameClear.draws_world());
        assert!(!Scene::Title.draws_world());
    }
}
