//! Fixed-cadence game loop and the collaborator seams it drives.

use std::io;
use std::thread;
use std::time::Duration;

use log::info;

use crate::game::{GameState, Phase, TickOutcome};
use crate::input::{Command, CrosstermInput, fold_commands};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub state: &'a GameState,
    pub paused: bool,
}

/// Draws the board, score readout and overlays.
pub trait Renderer {
    fn render(&mut self, view: View<'_>) -> io::Result<()>;
}

/// Produces discrete commands as they occur.
pub trait InputSource {
    /// Returns every command buffered since the previous call without
    /// blocking.
    fn drain(&mut self) -> io::Result<Vec<Command>>;
}

/// Approximate real-time pacing.
pub trait Clock {
    fn wait(&mut self, duration: Duration);
}

impl InputSource for CrosstermInput {
    fn drain(&mut self) -> io::Result<Vec<Command>> {
        self.drain_commands()
    }
}

/// Clock backed by `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepClock;

impl Clock for SleepClock {
    fn wait(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Whether the loop keeps going after one iteration.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Summary handed back when the loop ends.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SessionSummary {
    pub rounds: u32,
    pub best_score: u32,
}

/// Owns the game state and its collaborators for one session.
pub struct Controller<R, I, C> {
    state: GameState,
    renderer: R,
    input: I,
    clock: C,
    paused: bool,
    rounds: u32,
    best_score: u32,
}

impl<R, I, C> Controller<R, I, C>
where
    R: Renderer,
    I: InputSource,
    C: Clock,
{
    #[must_use]
    pub fn new(state: GameState, renderer: R, input: I, clock: C) -> Self {
        let best_score = state.score;

        Self {
            state,
            renderer,
            input,
            clock,
            paused: false,
            rounds: 1,
            best_score,
        }
    }

    /// Runs until a quit command arrives.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        self.render()?;

        while self.step()? == Flow::Continue {}

        info!(
            "session ended after {} rounds, best score {}",
            self.rounds, self.best_score
        );
        Ok(self.summary())
    }

    /// Runs one loop iteration: drain input, tick once, render, wait.
    pub fn step(&mut self) -> io::Result<Flow> {
        let commands = self.input.drain()?;
        let mut input = fold_commands(commands.iter().copied(), self.state.snake.heading());

        if input.quit {
            info!("quit requested");
            return Ok(Flow::Quit);
        }

        if input.restart && self.state.phase == Phase::GameOver {
            self.state.restart();
            self.paused = false;
            self.rounds += 1;
            // Turns in the same batch are judged against the fresh snake.
            input = fold_commands(commands, self.state.snake.heading());
        }

        if input.toggle_pause && self.state.phase == Phase::Playing {
            self.paused = !self.paused;
            info!("{}", if self.paused { "paused" } else { "resumed" });
        }

        if !self.paused {
            if let Some(heading) = input.heading {
                self.state.steer(heading);
            }

            let outcome = self.state.tick();
            if matches!(outcome, TickOutcome::AteFood | TickOutcome::Died { .. }) {
                self.best_score = self.best_score.max(self.state.score);
            }
        }

        self.render()?;
        self.clock.wait(self.state.tick_interval());

        Ok(Flow::Continue)
    }

    fn render(&mut self) -> io::Result<()> {
        self.renderer.render(View {
            state: &self.state,
            paused: self.paused,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            rounds: self.rounds,
            best_score: self.best_score,
        }
    }

    /// Hands the collaborators back for explicit teardown.
    pub fn into_parts(self) -> (GameState, R, I, C) {
        (self.state, self.renderer, self.input, self.clock)
    }
}
