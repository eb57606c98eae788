use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::GameError;
use crate::food::{Food, FoodKind, Obstacle};
use crate::grid::{Cell, Direction, GridSize};
use crate::input::GameInput;
use crate::placement::{eaten_food_exclusions, random_free_cell, spawn_layout};
use crate::settings::SessionSettings;
use crate::snake::{Snake, StepOutcome};

/// Current high-level state of one session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    ObstacleCollision,
    /// Snake and obstacles left no cell to put eaten food back on.
    BoardFilled,
}

/// What one session tick did.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickEvents {
    pub self_bitten: bool,
    pub growth_eaten: u32,
    pub shrink_eaten: u32,
    pub death: Option<DeathReason>,
}

/// Complete mutable state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub foods: Vec<Food>,
    pub obstacles: Vec<Obstacle>,
    pub tick_count: u64,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Lays out a fresh session: snake in the center heading right, then
    /// obstacles, growth food and shrink food on distinct free cells.
    pub fn new(
        bounds: GridSize,
        settings: &SessionSettings,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let snake = Snake::new(Cell::center_of(bounds), Direction::Right);
        let growth = settings.growth_food_count() as usize;
        let shrink = settings.shrink_food_count() as usize;

        let spare = bounds
            .total_cells()
            .saturating_sub(snake.len() + growth + shrink);
        let obstacle_count = (rng.gen_range(settings.obstacle_range()) as usize).min(spare);

        let layout = spawn_layout(&mut rng, bounds, &snake, obstacle_count, growth, shrink)?;

        Ok(Self {
            snake,
            foods: layout.foods,
            obstacles: layout.obstacles,
            tick_count: 0,
            status: GameStatus::Playing,
            death_reason: None,
            bounds,
            rng,
        })
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    pub fn new_with_seed(
        bounds: GridSize,
        settings: &SessionSettings,
        seed: u64,
    ) -> Result<Self, GameError> {
        Self::new(bounds, settings, StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns true when the head sits on an obstacle.
    #[must_use]
    pub fn head_hits_obstacle(&self) -> bool {
        let head = self.snake.head();
        self.obstacles.iter().any(|obstacle| obstacle.position == head)
    }

    /// Advances the session by one tick: move, check obstacles, eat.
    pub fn tick(&mut self) -> TickEvents {
        let mut events = TickEvents::default();
        if self.status != GameStatus::Playing {
            return events;
        }

        self.tick_count += 1;
        events.self_bitten = self.snake.step(self.bounds) == StepOutcome::SelfBitten;
        if events.self_bitten {
            debug!("self-bite at {:?}, snake cut to one cell", self.snake.head());
        }

        if self.head_hits_obstacle() {
            self.end(DeathReason::ObstacleCollision);
            events.death = self.death_reason;
            return events;
        }

        let head = self.snake.head();
        for index in 0..self.foods.len() {
            if self.foods[index].position != head {
                continue;
            }

            let kind = self.foods[index].kind;
            self.snake.apply_food_effect(kind);
            match kind {
                FoodKind::Growth => events.growth_eaten += 1,
                FoodKind::Shrink => events.shrink_eaten += 1,
            }

            let occupied = eaten_food_exclusions(&self.snake, &self.obstacles);
            match random_free_cell(&mut self.rng, self.bounds, &occupied) {
                Ok(cell) => self.foods[index].relocate(cell),
                Err(error) => {
                    warn!("cannot place eaten food again: {error}");
                    self.end(DeathReason::BoardFilled);
                    events.death = self.death_reason;
                    return events;
                }
            }
        }

        events
    }

    fn end(&mut self, reason: DeathReason) {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
    }
}

/// Whether the caller should keep running after an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Continue,
    Quit,
}

/// What one orchestrated tick did, for the caller's bookkeeping.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickReport {
    pub events: TickEvents,
    pub high_score_raised: bool,
    /// Set when the session ended this tick; a fresh one is already running.
    pub session_ended: Option<DeathReason>,
}

/// Runs sessions back to back and owns everything shared between them.
#[derive(Debug, Clone)]
pub struct Game {
    settings: SessionSettings,
    state: GameState,
    pending_direction: Option<Direction>,
    sessions_started: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl Game {
    /// Starts the first session. `seed` makes every session reproducible.
    pub fn new(
        bounds: GridSize,
        settings: SessionSettings,
        seed: Option<u64>,
    ) -> Result<Self, GameError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = GameState::new(bounds, &settings, StdRng::seed_from_u64(rng.r#gen()))?;
        info!(
            "session 1 started on {}x{} with {} obstacles",
            bounds.width,
            bounds.height,
            state.obstacles.len()
        );

        Ok(Self {
            settings,
            state,
            pending_direction: None,
            sessions_started: 1,
            bounds,
            rng,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access to the running session, mainly for scripted setups.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    #[must_use]
    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    #[must_use]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Applies one external command between ticks.
    ///
    /// Direction requests are held until the next tick; the last one wins.
    /// Speed changes take effect on the next tick, food counts on the next
    /// session.
    pub fn apply_input(&mut self, input: GameInput) -> Control {
        match input {
            GameInput::Direction(direction) => self.pending_direction = Some(direction),
            GameInput::SpeedUp => self.settings.adjust_tick_rate(1),
            GameInput::SpeedDown => self.settings.adjust_tick_rate(-1),
            GameInput::MoreGrowthFood => self.settings.adjust_growth_food(1),
            GameInput::FewerGrowthFood => self.settings.adjust_growth_food(-1),
            GameInput::MoreShrinkFood => self.settings.adjust_shrink_food(1),
            GameInput::FewerShrinkFood => self.settings.adjust_shrink_food(-1),
            GameInput::Quit => return Control::Quit,
        }
        Control::Continue
    }

    /// Runs one full tick and restarts the session if it ended.
    ///
    /// Fails only when a new session cannot be laid out on the grid.
    pub fn tick(&mut self) -> Result<TickReport, GameError> {
        if let Some(direction) = self.pending_direction.take() {
            self.state.snake.set_direction(direction);
        }

        let events = self.state.tick();
        let high_score_raised = self.settings.record_length(self.state.snake.len());
        let mut report = TickReport {
            events,
            high_score_raised,
            session_ended: None,
        };

        if self.state.status == GameStatus::GameOver {
            report.session_ended = self.state.death_reason;
            info!(
                "session {} over after {} ticks ({:?}), length {}, high score {}",
                self.sessions_started,
                self.state.tick_count,
                self.state.death_reason,
                self.state.snake.len(),
                self.settings.high_score()
            );
            self.restart()?;
        }

        Ok(report)
    }

    /// Throws the current session away and starts a fresh one.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let session_rng = StdRng::seed_from_u64(self.rng.r#gen());
        self.state = GameState::new(self.bounds, &self.settings, session_rng)?;
        self.pending_direction = None;
        self.sessions_started += 1;
        info!(
            "session {} started with {} obstacles, {} growth and {} shrink food",
            self.sessions_started,
            self.state.obstacles.len(),
            self.settings.growth_food_count(),
            self.settings.shrink_food_count()
        );
        Ok(())
    }
}
