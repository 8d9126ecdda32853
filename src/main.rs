//! Starlane entry point
//!
//! Headless demo run: wires the simulation core to a scripted pilot and
//! null audio/render collaborators, then pumps a bounded number of
//! frames. A real host swaps in its own `InputSource`/`AudioOut`/
//! `Renderer` implementations at the same seam.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;

use starlane::Game;
use starlane::audio::NullAudio;
use starlane::input::{InputSource, Key};
use starlane::render::NullRenderer;
use starlane::scene::Scene;
use starlane::settings::Settings;

/// Scripted pilot: leaves the title screen, then holds fire while
/// sweeping across the lane
#[derive(Default)]
struct DemoPilot {
    frame: u32,
}

/// Shared handle so the loop can advance the pilot the game polls
#[derive(Default, Clone)]
struct PilotHandle(Rc<RefCell<DemoPilot>>);

impl PilotHandle {
    fn advance(&self) {
        self.0.borrow_mut().frame += 1;
    }
}

impl InputSource for PilotHandle {
    fn is_held(&self, key: Key) -> bool {
        let frame = self.0.borrow().frame;
        match key {
            Key::Fire => true,
            Key::Right => frame % 240 < 120,
            Key::Left => frame % 240 >= 120,
            Key::Confirm => false,
        }
    }

    fn pressed_this_frame(&self, key: Key) -> bool {
        key == Key::Confirm && self.0.borrow().frame == 30
    }
}

/// Two minutes at 60 Hz
const DEMO_FRAMES: u32 = 7200;

fn main() {
    env_logger::init();

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());

    let pilot = PilotHandle::default();
    let mut game = Game::new(seed, pilot.clone(), NullAudio::default(), NullRenderer);

    for _ in 0..DEMO_FRAMES {
        game.frame();
        pilot.advance();
        if matches!(game.scene(), Scene::GameOver | Scene::GameClear) {
            break;
        }
    }

    log::info!(
        "demo finished on {:?}: score {}, {} lives left after {} frames",
        game.scene(),
        game.state().score,
        game.state().life.max(0),
        game.state().frame,
    );
}
