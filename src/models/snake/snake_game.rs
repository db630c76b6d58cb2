//! One snake session: the tick loop that ties the body, heading and food together.
use log::{debug, info};
use rand::{rngs::StdRng, Rng};
use thiserror::Error;

use super::{
    direction::{DirectionController, Heading, DEFAULT_HEADING},
    food_spawner::FoodSpawner,
    geometry::Cell,
    snake_body::{DeathReason, SnakeBody},
    snake_config::SnakeConfig,
};

type Result<T> = std::result::Result<T, SnakeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnakeError {
    #[error("play area must be positive, got {width}x{height}")]
    InvalidAreaSize { width: i32, height: i32 },
    #[error("segment size must be positive, got {0}")]
    InvalidSegmentSize(i32),
    #[error("food size must be positive, got {0}")]
    InvalidFoodSize(i32),
    #[error("frames per tick must be at least 1")]
    InvalidGameSpeed,
    #[error("frame time must be at least 1ms")]
    InvalidFrameTime,
    #[error("a segment of size {0} does not fit at the center of the play area")]
    SegmentDoesNotFit(i32),
    #[error("food of size {0} does not fit in the play area")]
    FoodDoesNotFit(i32),
    #[error("play area {width}x{height} is too large for squares of size {size}")]
    AreaTooLarge { width: i32, height: i32, size: i32 },
}

/// Input observed while polling a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Heading(Heading),
    Quit,
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    /// Moved onto the food, grew and placed new food.
    Ate,
    Died(DeathReason),
}

/// What a single rendered frame did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Inputs handled, not a tick frame.
    Idle,
    Ticked(TickOutcome),
    /// The session was already over; nothing advanced.
    Ended(DeathReason),
    /// A quit request was seen. Nothing after it was handled.
    Exited,
}

/// Model of a single-player snake session.
#[derive(Clone, Debug)]
pub struct SnakeGame<R = StdRng> {
    config: SnakeConfig,
    body: SnakeBody,
    food: Cell,
    direction: DirectionController,
    spawner: FoodSpawner<R>,
    death: Option<DeathReason>,
    frames: u64,
    ticks: u64,
    foods_eaten: u64,
}

impl<R: Rng> SnakeGame<R> {
    /// Starts a session with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`SnakeError`] if `config` fails [`SnakeConfig::validate`].
    /// No session state is created in that case.
    pub fn new(config: SnakeConfig, mut spawner: FoodSpawner<R>) -> Result<Self> {
        config.validate()?;
        let food = spawner.relocate(config.area_width, config.area_height, config.food_size);
        let game = Self {
            config,
            body: SnakeBody::new(&config),
            food,
            direction: DirectionController::new(DEFAULT_HEADING),
            spawner,
            death: None,
            frames: 0,
            ticks: 0,
            foods_eaten: 0,
        };
        debug!(
            "New session: head at {:?}, food at {:?}",
            game.body.head(),
            game.food
        );
        Ok(game)
    }

    /// Throws the current session away and starts a fresh one with the same
    /// configuration. The food spawner, and with it the random stream, is kept.
    pub fn restart(&mut self) {
        let config = self.config;
        self.body = SnakeBody::new(&config);
        self.food = self
            .spawner
            .relocate(config.area_width, config.area_height, config.food_size);
        self.direction = DirectionController::new(DEFAULT_HEADING);
        self.death = None;
        self.frames = 0;
        self.ticks = 0;
        self.foods_eaten = 0;
        debug!(
            "Restarted session: head at {:?}, food at {:?}",
            self.body.head(),
            self.food
        );
    }

    /// Forwards a direction request. Reversals and requests after death are dropped.
    pub fn request_heading(&mut self, heading: Heading) -> bool {
        if self.death.is_some() {
            return false;
        }
        self.direction.request_heading(heading)
    }

    /// Runs one simulation step: commit heading, advance, check death, eat.
    ///
    /// Collision is settled before growth, so a segment added this tick never
    /// takes part in this tick's checks. Once the session is over the body no
    /// longer moves and the same reason is reported again.
    pub fn tick(&mut self) -> TickOutcome {
        if let Some(reason) = self.death {
            return TickOutcome::Died(reason);
        }
        let heading = self.direction.commit_tick();
        self.ticks += 1;

        if let Some(reason) = self.body.advance(heading) {
            info!(
                "Game over after {} ticks at length {}: snake {}",
                self.ticks,
                self.body.len(),
                reason
            );
            self.death = Some(reason);
            return TickOutcome::Died(reason);
        }

        if !self.config.food_contact.test(self.body.head(), self.food) {
            return TickOutcome::Moved;
        }
        self.food = self.spawner.relocate(
            self.config.area_width,
            self.config.area_height,
            self.config.food_size,
        );
        self.body.grow();
        self.foods_eaten += 1;
        debug!(
            "Food eaten. Length is now {}, next food at {:?}",
            self.body.len(),
            self.food
        );
        TickOutcome::Ate
    }

    /// Handles one rendered frame.
    ///
    /// Inputs are applied in order. A [`InputEvent::Quit`] stops the frame on
    /// the spot: later inputs are dropped and no tick runs. Otherwise the frame
    /// counter advances and every `frames_per_tick`-th frame runs [`Self::tick`].
    pub fn run_frame<I>(&mut self, inputs: I) -> FrameOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for input in inputs {
            match input {
                InputEvent::Quit => {
                    debug!("Quit requested on frame {}", self.frames);
                    return FrameOutcome::Exited;
                }
                InputEvent::Heading(heading) => {
                    self.request_heading(heading);
                }
            }
        }
        if let Some(reason) = self.death {
            return FrameOutcome::Ended(reason);
        }
        self.frames += 1;
        if self.frames % u64::from(self.config.frames_per_tick) == 0 {
            FrameOutcome::Ticked(self.tick())
        } else {
            FrameOutcome::Idle
        }
    }

    #[must_use]
    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    #[must_use]
    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    #[must_use]
    pub fn food(&self) -> Cell {
        self.food
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.direction.committed()
    }

    #[must_use]
    pub fn death(&self) -> Option<DeathReason> {
        self.death
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.death.is_some()
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn foods_eaten(&self) -> u64 {
        self.foods_eaten
    }
}
