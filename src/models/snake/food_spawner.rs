//! Random placement of the food square.
use std::time::{SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::geometry::Cell;

/// Draws food positions from a generator it owns.
///
/// The spawner is created once per process and handed from session to
/// session, so restarting a game continues the same random stream.
#[derive(Clone, Debug)]
pub struct FoodSpawner<R = StdRng> {
    rng: R,
}

impl FoodSpawner<StdRng> {
    /// Seeds a [`StdRng`] from the system clock.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_time_seed() -> Self {
        let seed = match SystemTime::now().duration_since(UNIX_EPOCH) {
            // low 64 bits of the nanosecond count are plenty for a seed
            Ok(elapsed) => elapsed.as_nanos() as u64,
            Err(e) => {
                warn!("System clock is before the unix epoch: {e}. Seeding with 0");
                0
            }
        };
        debug!("Seeding food spawner with {seed}");
        Self::with_seed(seed)
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FoodSpawner<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a uniformly random square of side `size` that fits inside the area.
    ///
    /// The body is not consulted, so food may land on or next to a segment.
    /// `size` must not exceed either area dimension; a validated
    /// [`super::snake_config::SnakeConfig`] guarantees this.
    pub fn relocate(&mut self, area_width: i32, area_height: i32, size: i32) -> Cell {
        let x = self.rng.gen_range(0..=area_width - size);
        let y = self.rng.gen_range(0..=area_height - size);
        Cell::new(x, y, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::snake::geometry::in_bounds;

    #[test]
    fn test_relocate_stays_in_bounds() {
        let mut spawner = FoodSpawner::with_seed(42);
        for _ in 0..1000 {
            let food = spawner.relocate(300, 200, 15);
            assert_eq!(food.size, 15);
            assert!(in_bounds(food, 300, 200), "{food:?} out of bounds");
        }
    }

    #[test]
    fn test_relocate_reaches_both_extremes() {
        // 2 possible positions per axis
        let mut spawner = FoodSpawner::with_seed(3);
        let cells: Vec<Cell> = (0..200).map(|_| spawner.relocate(16, 16, 15)).collect();
        assert!(cells.iter().any(|c| c.x == 0));
        assert!(cells.iter().any(|c| c.x == 1));
        assert!(cells.iter().any(|c| c.y == 0));
        assert!(cells.iter().any(|c| c.y == 1));
    }

    #[test]
    fn test_food_filling_the_area() {
        let mut spawner = FoodSpawner::with_seed(9);
        assert_eq!(spawner.relocate(15, 15, 15), Cell::new(0, 0, 15));
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = FoodSpawner::with_seed(1234);
        let mut b = FoodSpawner::with_seed(1234);
        for _ in 0..20 {
            assert_eq!(a.relocate(640, 480, 15), b.relocate(640, 480, 15));
        }
    }

    #[test]
    fn test_time_seeded_spawner_works() {
        let mut spawner = FoodSpawner::from_time_seed();
        assert!(in_bounds(spawner.relocate(640, 480, 15), 640, 480));
    }
}
