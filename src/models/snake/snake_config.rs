//! Startup parameters for a snake session.
use super::{
    geometry::{in_bounds, Cell, Contact},
    snake_game::SnakeError,
};

/// Width of the play area in pixels.
pub const AREA_WIDTH: i32 = 640;
/// Height of the play area in pixels.
pub const AREA_HEIGHT: i32 = 480;
/// Side length of a body segment.
pub const SEGMENT_SIZE: i32 = 15;
/// Side length of the food square.
pub const FOOD_SIZE: i32 = 15;
/// Rendered frames per simulation tick.
pub const FRAMES_PER_TICK: u32 = 6;
/// Time between rendered frames.
pub const FRAME_MILLIS: u64 = 16;

type Result<T> = std::result::Result<T, SnakeError>;

/// Immutable parameters handed to a [`super::snake_game::SnakeGame`] at session start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnakeConfig {
    pub area_width: i32,
    pub area_height: i32,
    pub segment_size: i32,
    pub food_size: i32,
    pub frames_per_tick: u32,
    pub frame_millis: u64,
    /// Whether flush contact with the food counts as reaching it.
    pub food_contact: Contact,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            area_width: AREA_WIDTH,
            area_height: AREA_HEIGHT,
            segment_size: SEGMENT_SIZE,
            food_size: FOOD_SIZE,
            frames_per_tick: FRAMES_PER_TICK,
            frame_millis: FRAME_MILLIS,
            food_contact: Contact::Overlap,
        }
    }
}

impl SnakeConfig {
    /// Square area with the default sizes and speed.
    #[must_use]
    pub fn with_area(width: i32, height: i32) -> Self {
        Self {
            area_width: width,
            area_height: height,
            ..Default::default()
        }
    }

    /// Top-left corner of the first segment of every session.
    #[must_use]
    pub fn start_cell(&self) -> Cell {
        Cell::new(
            self.area_width / 2,
            self.area_height / 2,
            self.segment_size,
        )
    }

    /// Checks the parameters can host a session.
    ///
    /// # Errors
    ///
    /// Returns the first [`SnakeError`] found among non-positive sizes, a zero
    /// game speed or frame time, an area whose far edge plus one square
    /// overflows `i32`, or squares that cannot fit in the area.
    pub fn validate(&self) -> Result<()> {
        if self.area_width <= 0 || self.area_height <= 0 {
            return Err(SnakeError::InvalidAreaSize {
                width: self.area_width,
                height: self.area_height,
            });
        }
        if self.segment_size <= 0 {
            return Err(SnakeError::InvalidSegmentSize(self.segment_size));
        }
        if self.food_size <= 0 {
            return Err(SnakeError::InvalidFoodSize(self.food_size));
        }
        if self.frames_per_tick == 0 {
            return Err(SnakeError::InvalidGameSpeed);
        }
        if self.frame_millis == 0 {
            return Err(SnakeError::InvalidFrameTime);
        }
        // a head flush with the far edge steps one square past it
        let size = self.segment_size.max(self.food_size);
        if self.area_width.checked_add(size).is_none()
            || self.area_height.checked_add(size).is_none()
        {
            return Err(SnakeError::AreaTooLarge {
                width: self.area_width,
                height: self.area_height,
                size,
            });
        }
        if !in_bounds(self.start_cell(), self.area_width, self.area_height) {
            return Err(SnakeError::SegmentDoesNotFit(self.segment_size));
        }
        if self.food_size > self.area_width || self.food_size > self.area_height {
            return Err(SnakeError::FoodDoesNotFit(self.food_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::snake::{
        direction::Heading,
        food_spawner::FoodSpawner,
        snake_body::{DeathReason, SnakeBody},
        snake_game::{SnakeGame, TickOutcome},
    };

    #[test]
    fn test_default_config_is_valid() {
        let config = SnakeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_cell(), Cell::new(320, 240, 15));
    }

    #[test]
    fn test_with_area() {
        let config = SnakeConfig::with_area(300, 300);
        assert_eq!(config.start_cell(), Cell::new(150, 150, 15));
        assert_eq!(config.segment_size, SEGMENT_SIZE);
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let mut config = SnakeConfig::with_area(0, 300);
        assert!(matches!(
            config.validate(),
            Err(SnakeError::InvalidAreaSize { .. })
        ));
        config = SnakeConfig {
            segment_size: 0,
            ..SnakeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnakeError::InvalidSegmentSize(0))
        ));
        config = SnakeConfig {
            food_size: -3,
            ..SnakeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnakeError::InvalidFoodSize(-3))
        ));
    }

    #[test]
    fn test_rejects_zero_speed() {
        let config = SnakeConfig {
            frames_per_tick: 0,
            ..SnakeConfig::default()
        };
        assert!(matches!(config.validate(), Err(SnakeError::InvalidGameSpeed)));
        let config = SnakeConfig {
            frame_millis: 0,
            ..SnakeConfig::default()
        };
        assert!(matches!(config.validate(), Err(SnakeError::InvalidFrameTime)));
    }

    #[test]
    fn test_rejects_squares_that_do_not_fit() {
        let config = SnakeConfig {
            segment_size: 200,
            ..SnakeConfig::with_area(300, 300)
        };
        assert!(matches!(
            config.validate(),
            Err(SnakeError::SegmentDoesNotFit(200))
        ));
        let config = SnakeConfig {
            food_size: 301,
            ..SnakeConfig::with_area(300, 300)
        };
        assert!(matches!(
            config.validate(),
            Err(SnakeError::FoodDoesNotFit(301))
        ));
    }

    #[test]
    fn test_rejects_areas_that_overflow_one_step_out() {
        let config = SnakeConfig {
            area_width: i32::MAX,
            area_height: 1_000_000_000,
            segment_size: 400_000_000,
            ..SnakeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnakeError::AreaTooLarge {
                size: 400_000_000,
                ..
            })
        ));
        let config = SnakeConfig {
            area_width: i32::MAX,
            segment_size: i32::MAX,
            ..SnakeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnakeError::AreaTooLarge { .. })
        ));
        // food size counts too
        let config = SnakeConfig {
            area_height: i32::MAX - 10,
            food_size: 11,
            ..SnakeConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SnakeError::AreaTooLarge { size: 11, .. })
        ));
    }

    #[test]
    fn test_largest_accepted_area_runs_to_the_wall() {
        let config = SnakeConfig {
            area_width: i32::MAX - 15,
            area_height: i32::MAX - 15,
            ..SnakeConfig::default()
        };
        assert!(config.validate().is_ok());
        let mut game = SnakeGame::new(config, FoodSpawner::with_seed(1)).unwrap();
        assert!(!matches!(game.tick(), TickOutcome::Died(_)));

        // flush with the right edge, one step out lands exactly on i32::MAX
        let mut body = SnakeBody::with_head(
            Cell::new(config.area_width - 15, config.start_cell().y, 15),
            config.area_width,
            config.area_height,
        );
        assert_eq!(body.advance(Heading::Right), Some(DeathReason::OutOfBounds));
    }
}
