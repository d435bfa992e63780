//! A whole play session: screen flow plus the match behind it.
//!
//! This is the loop a front end drives once per rendered frame. It owns no
//! window, sound or device; it takes the frame's input and elapsed time and
//! hands back events and a [`Snapshot`].

use crate::{
    step, Config, ConfigError, Events, FrameInput, GameRng, MatchEvent, MatchState, RandomSource,
    Screen, ScreenFlow, Snapshot, Time,
};

pub struct Session {
    config: Config,
    flow: ScreenFlow,
    state: MatchState,
    time: Time,
    events: Events,
    rng: Box<dyn RandomSource>,
}

impl Session {
    /// Start on the title screen with a seeded random source
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::with_source(config, Box::new(GameRng::new(seed)))
    }

    /// Start with a caller-provided random source (e.g. a [`crate::ScriptedSource`])
    pub fn with_source(config: Config, rng: Box<dyn RandomSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            flow: ScreenFlow::new(config.title_frames),
            state: MatchState::new(&config),
            time: Time::new(0.0, 0.0),
            events: Events::new(),
            rng,
            config,
        })
    }

    /// Run one frame and return what happened in it
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> &Events {
        self.events.clear();
        self.time.dt = dt;

        let mut input = *input;
        if let Some(transition) = self.flow.frame(input.confirm) {
            log::info!(
                "Screen {:?} -> {:?}",
                transition.from_state,
                transition.to_state
            );
            self.events.push(MatchEvent::ScreenChanged {
                from: transition.from_state,
                to: transition.to_state,
            });
            // The key that changed screens is used up
            input.confirm = false;
        }

        if self.flow.is_gameplay() {
            step(
                &mut self.state,
                &input,
                &mut self.time,
                &self.config,
                &mut self.events,
                self.rng.as_mut(),
            );
        }

        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.flow.screen(), &self.state)
    }

    pub fn screen(&self) -> Screen {
        self.flow.screen()
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Simulated seconds of gameplay so far
    pub fn elapsed(&self) -> f32 {
        self.time.now
    }
}
