//! Alien Drift entry point
//!
//! Headless demo driver: runs the simulation at the fixed timestep with an
//! auto-pilot jump policy, pumps events into the audio sink, and reports
//! how long the pilot survived.

use alien_drift::Tuning;
use alien_drift::audio::{self, AudioSink, LogAudio};
use alien_drift::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, SIM_DT};
use alien_drift::platform::{Clock, NullRenderer, SystemClock, present};
use alien_drift::sim::{GameEvent, GameState, Playfield, TickInput, tick};

/// Demo session wiring: sim state plus host collaborators
struct Game {
    state: GameState,
    input: TickInput,
    audio: LogAudio,
    renderer: NullRenderer,
}

impl Game {
    fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(
                seed,
                Playfield::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
                Tuning::default(),
            ),
            input: TickInput::default(),
            audio: LogAudio,
            renderer: NullRenderer,
        }
    }

    /// Auto-pilot: tap whenever the alien sinks below the cruising band
    fn autopilot(&mut self) {
        if let Some(player) = self.state.player() {
            self.input.jump = player.pos.y < self.state.playfield.height / 2.0;
        }
    }

    fn run_frame(&mut self) {
        self.autopilot();
        let input = self.input;
        tick(&mut self.state, &input, SIM_DT);
        // One-shot inputs are consumed by the tick
        self.input.jump = false;

        for event in self.state.drain_events() {
            if let Some(effect) = audio::effect_for_event(&event) {
                self.audio.play(effect);
            }
            match event {
                GameEvent::ObstacleSpawned(id) => log::debug!("obstacle {id} spawned"),
                GameEvent::StripWrapped(id) => log::trace!("strip {id} wrapped"),
                GameEvent::GameOver => log::info!("game over"),
                _ => {}
            }
        }

        present(&self.state, &mut self.renderer);
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xA11E);
    log::info!("alien-drift demo, seed {seed}");

    let clock = SystemClock::new();
    let mut game = Game::new(seed);

    // Cap the run in case the auto-pilot threads every crate
    let max_ticks: u64 = 5 * 60 * 60;
    while !game.state.is_game_over() && game.state.time_ticks < max_ticks {
        game.run_frame();
    }

    let ticks = game.state.time_ticks;
    log::info!(
        "simulated {ticks} ticks in {:.2}s wall time",
        clock.elapsed_secs()
    );
    if game.state.is_game_over() {
        println!("game over: survived {ticks} ticks");
    } else {
        println!("demo cap reached: survived {ticks} ticks and counting");
    }
}
