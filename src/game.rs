//! Frame-loop driver
//!
//! `Game` owns the scene state machine and the injected collaborators
//! (input polling, audio voices, draw calls - nothing else crosses).
//! One `frame()` call is one fixed-rate frame: advance the active scene,
//! apply at most one transition, then draw the scene's layers.

use glam::Vec2;

use crate::audio::{AudioOut, Cue, VoiceId};
use crate::consts::*;
use crate::hud;
use crate::input::{InputSource, Key};
use crate::render::{Renderer, textures};
use crate::scene::Scene;
use crate::sim::{self, GameEvent, GameState, TickInput};

// HUD layout, in the host's screen coordinates.
const ENTER_PROMPT_POS: Vec2 = Vec2::new(390.0, 500.0);
const SCORE_LABEL_POS: Vec2 = Vec2::new(150.0, 0.0);
const DIGITS_ORIGIN: Vec2 = Vec2::new(300.0, 0.0);
const DIGIT_STRIDE: f32 = 20.0;
const DIGIT_SIZE: Vec2 = Vec2::new(32.0, 64.0);
const LIFE_ORIGIN: Vec2 = Vec2::new(800.0, 10.0);
const LIFE_STRIDE: f32 = 60.0;
const CLEAR_TEXT_POS: Vec2 = Vec2::new(550.0, 200.0);

/// Frame-loop owner wiring the simulation to its collaborators
pub struct Game<I, A, R> {
    input: I,
    audio: A,
    renderer: R,
    scene: Scene,
    state: GameState,
    bgm_voice: Option<VoiceId>,
}

impl<I: InputSource, A: AudioOut, R: Renderer> Game<I, A, R> {
    /// Build the game on the title scene and start its music
    pub fn new(seed: u64, input: I, mut audio: A, renderer: R) -> Self {
        let scene = Scene::default();
        let bgm_voice = Some(audio.play(scene.bgm(), true));
        log::info!("starting on {scene:?} (seed {seed})");
        Self {
            input,
            audio,
            renderer,
            scene,
            state: GameState::new(seed),
            bgm_voice,
        }
    }

    /// Current scene
    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Read access to the simulation state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one fixed-rate frame: update, then draw
    pub fn frame(&mut self) {
        self.update();
        self.render();
    }

    /// Advance the active scene and apply its transition, if any
    pub fn update(&mut self) {
        let next = match self.scene {
            Scene::Title => self.update_title(),
            Scene::Playing => self.update_playing(),
            Scene::GameOver | Scene::GameClear => self.update_ended(),
        };
        if let Some(next) = next {
            self.enter(next);
        }
    }

    /// Title: blink timer runs, confirm starts a run
    fn update_title(&mut self) -> Option<Scene> {
        self.state.frame = self.state.frame.wrapping_add(1);
        self.input
            .pressed_this_frame(Key::Confirm)
            .then_some(Scene::Playing)
    }

    /// Playing: one sim tick, then the win/loss checks of the table
    fn update_playing(&mut self) -> Option<Scene> {
        let tick_input = TickInput {
            left: self.input.is_held(Key::Left),
            right: self.input.is_held(Key::Right),
            fire: self.input.is_held(Key::Fire),
        };
        for event in sim::tick(&mut self.state, &tick_input) {
            self.audio.play_one_shot(match event {
                GameEvent::PlayerStruck => Cue::PlayerHit,
                GameEvent::EnemyDestroyed => Cue::EnemyHit,
            });
        }

        let mut next = None;
        if self.state.life <= 0 {
            next = Some(Scene::GameOver);
        }
        // Checked second: crossing the cap on the same frame the last
        // life goes wins the run.
        if self.state.score > SCORE_MAX {
            self.state.score = SCORE_MAX;
            next = Some(Scene::GameClear);
        }
        next
    }

    /// GameOver/GameClear: entity state frozen, confirm returns to title
    fn update_ended(&mut self) -> Option<Scene> {
        self.state.frame = self.state.frame.wrapping_add(1);
        self.input
            .pressed_this_frame(Key::Confirm)
            .then_some(Scene::Title)
    }

    /// Enter a scene: run its entry effects and swap the music
    fn enter(&mut self, next: Scene) {
        log::info!(
            "scene {:?} -> {:?} (score {}, life {})",
            self.scene,
            next,
            self.state.score,
            self.state.life
        );
        if next == Scene::Playing {
            self.state.reset_run();
        }
        if let Some(voice) = self.bgm_voice.take() {
            self.audio.stop(voice);
        }
        self.bgm_voice = Some(self.audio.play(next.bgm(), true));
        self.scene = next;
    }

    /// Draw the active scene's layers: backdrop, battlefield, near HUD
    pub fn render(&mut self) {
        if self.scene.draws_world() {
            self.renderer.draw_sprite(textures::BACKGROUND, Vec2::ZERO);
            self.draw_world();
        }

        match self.scene {
            Scene::Title => {
                self.renderer.draw_sprite(textures::TITLE, Vec2::ZERO);
            }
            Scene::Playing => {
                self.draw_hud();
            }
            Scene::GameOver => {
                self.draw_hud();
                self.renderer.draw_sprite(textures::GAME_OVER, Vec2::ZERO);
            }
            Scene::GameClear => {
                self.draw_hud();
                self.renderer.draw_text("GAME CLEAR", CLEAR_TEXT_POS, 2.0);
            }
        }

        if self.scene.draws_prompt() && hud::prompt_visible(self.state.frame) {
            self.renderer.draw_sprite(textures::ENTER, ENTER_PROMPT_POS);
        }
    }

    /// The 3D battlefield: lane tiles, player, beams, enemies
    fn draw_world(&mut self) {
        for tile in &self.state.stage {
            self.renderer.draw_model(tile.world_matrix(), textures::STAGE);
        }

        if hud::player_visible(self.state.player.hit_timer) {
            self.renderer
                .draw_model(self.state.player.transform.world_matrix(), textures::PLAYER);
        }

        for beam in self.state.beams.iter().filter(|b| b.is_active()) {
            self.renderer
                .draw_model(beam.transform.world_matrix(), textures::BEAM);
        }

        // Dying enemies stay on screen through their death arc.
        for enemy in self.state.enemies.iter().filter(|e| e.is_visible()) {
            self.renderer
                .draw_model(enemy.transform.world_matrix(), textures::ENEMY);
        }
    }

    /// Score readout and life icons
    fn draw_hud(&mut self) {
        self.renderer.draw_sprite(textures::SCORE_LABEL, SCORE_LABEL_POS);

        for (i, digit) in hud::score_digits(self.state.score).iter().enumerate() {
            let (src_offset, src_size) = hud::digit_src(*digit);
            let pos = DIGITS_ORIGIN + Vec2::new(i as f32 * DIGIT_STRIDE, 0.0);
            self.renderer
                .draw_sprite_region(textures::NUMBERS, pos, src_offset, src_size, DIGIT_SIZE);
        }

        for i in 0..hud::life_icons(self.state.life) {
            let pos = LIFE_ORIGIN + Vec2::new(i as f32 * LIFE_STRIDE, 0.0);
            self.renderer.draw_sprite(textures::PLAYER, pos);
        }
    }
}
