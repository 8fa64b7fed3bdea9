use std::time::Duration;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision::{self, DeathReason};
use crate::config::GameConfig;
use crate::food::Food;
use crate::grid::Grid;
use crate::input::Direction;
use crate::snake::Snake;

/// Top-level phase of a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What one call to [`GameState::tick`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The round is over; nothing moved.
    Idle,
    Moved,
    AteFood,
    /// The move ended the round. `ate_food` is set when the fatal cell also
    /// held the food.
    Died { reason: DeathReason, ate_food: bool },
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub tick_interval_ms: u64,
    pub tick_count: u64,
    pub phase: Phase,
    pub death_reason: Option<DeathReason>,
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
}

impl GameState {
    /// Creates a state whose food sequence is seeded from OS entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let grid = config.grid();
        let snake = fresh_snake(&config);

        Self {
            score: snake_score(&snake),
            snake,
            food: Food::new(config.food_start_position()),
            tick_interval_ms: config.initial_tick_interval_ms,
            tick_count: 0,
            phase: Phase::Playing,
            death_reason: None,
            config,
            grid,
            rng,
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Eating is resolved before death, so a fatal move onto the food still
    /// grows the snake, bumps the score and relocates the food.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Playing {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        self.snake.advance(&self.grid);

        let collisions = collision::detect(&self.snake, &self.food, &self.grid);
        trace!(
            "tick {}: head {:?}, {:?}",
            self.tick_count,
            self.snake.head(),
            collisions.primary()
        );

        if collisions.ate_food {
            self.eat();
        }

        if let Some(reason) = collisions.death {
            self.phase = Phase::GameOver;
            self.death_reason = Some(reason);
            info!(
                "game over after {} ticks: {:?} at {:?}, score {}",
                self.tick_count,
                reason,
                self.snake.head(),
                self.score
            );
            return TickOutcome::Died {
                reason,
                ate_food: collisions.ate_food,
            };
        }

        if collisions.ate_food {
            TickOutcome::AteFood
        } else {
            TickOutcome::Moved
        }
    }

    /// Points the snake in `heading`. Reversal filtering happens upstream.
    pub fn steer(&mut self, heading: Direction) {
        if self.phase == Phase::Playing {
            self.snake.set_heading(heading);
        }
    }

    /// Starts a fresh round with the initial snake, food and pacing.
    ///
    /// The random source carries over so food placement keeps varying.
    pub fn restart(&mut self) {
        self.snake = fresh_snake(&self.config);
        self.food = Food::new(self.config.food_start_position());
        self.score = snake_score(&self.snake);
        self.tick_interval_ms = self.config.initial_tick_interval_ms;
        self.tick_count = 0;
        self.phase = Phase::Playing;
        self.death_reason = None;
        info!("new round started");
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Number of interval steps taken since the round began.
    #[must_use]
    pub fn speed_level(&self) -> u32 {
        let step = self.config.tick_interval_step_ms.max(1);
        let gained = self
            .config
            .initial_tick_interval_ms
            .saturating_sub(self.tick_interval_ms);
        1 + u32::try_from(gained / step).unwrap_or(u32::MAX)
    }

    /// Relocates the food with this state's random source.
    pub fn relocate_food(&mut self) {
        self.food.relocate(&mut self.rng, &self.grid);
    }

    fn eat(&mut self) {
        self.snake.grow();
        self.score += 1;
        self.tick_interval_ms = self
            .tick_interval_ms
            .saturating_sub(self.config.tick_interval_step_ms)
            .max(self.config.min_tick_interval_ms);
        self.relocate_food();

        debug!(
            "food eaten at {:?}: score {}, interval {} ms, food now at {:?}",
            self.snake.head(),
            self.score,
            self.tick_interval_ms,
            self.food.position
        );
    }
}

fn fresh_snake(config: &GameConfig) -> Snake {
    Snake::new(config.start_position(), config.initial_length, Direction::Down)
}

fn snake_score(snake: &Snake) -> u32 {
    u32::try_from(snake.len()).unwrap_or(u32::MAX)
}
