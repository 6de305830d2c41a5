use rand::Rng;
use thiserror::Error;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random samples tried before falling back to an exhaustive scan.
const PLACEMENT_SAMPLE_ATTEMPTS: usize = 128;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

/// Raised when no free cell is left to place food on.
///
/// Only reachable when the snake covers the entire grid, which normal play
/// never gets close to; the session treats it as the end of the game rather
/// than a panic.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("no free cell left on the {width}x{height} grid")]
    GridFull { width: u16, height: u16 },
}

impl Food {
    /// Creates food at an explicit position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Places food on a uniformly random cell not occupied by the snake.
    ///
    /// Rejection-samples a bounded number of times, then falls back to an
    /// exhaustive scan of the remaining free cells.
    pub fn place<R: Rng + ?Sized>(
        rng: &mut R,
        bounds: GridSize,
        snake: &Snake,
    ) -> Result<Self, PlacementError> {
        for _ in 0..PLACEMENT_SAMPLE_ATTEMPTS {
            let candidate = Position {
                x: rng.gen_range(0..i32::from(bounds.width)),
                y: rng.gen_range(0..i32::from(bounds.height)),
            };
            if !snake.occupies(candidate) {
                return Ok(Self::at(candidate));
            }
        }

        let mut free = Vec::new();
        for y in 0..i32::from(bounds.height) {
            for x in 0..i32::from(bounds.width) {
                let position = Position { x, y };
                if !snake.occupies(position) {
                    free.push(position);
                }
            }
        }

        if free.is_empty() {
            return Err(PlacementError::GridFull {
                width: bounds.width,
                height: bounds.height,
            });
        }

        Ok(Self::at(free[rng.gen_range(0..free.len())]))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{Food, PlacementError};

    #[test]
    fn placement_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 2, y: 0 },
        ]);
        let bounds = GridSize {
            width: 8,
            height: 6,
        };

        for _ in 0..100 {
            let food = Food::place(&mut rng, bounds, &snake).expect("free cells exist");
            assert!(!snake.occupies(food.position));
            assert!(food.position.is_within_bounds(bounds));
        }
    }

    #[test]
    fn single_free_cell_is_always_found() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize {
            width: 2,
            height: 2,
        };
        // Snake covers all but (1, 1).
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 0, y: 1 },
        ]);

        let food = Food::place(&mut rng, bounds, &snake).expect("one cell is free");
        assert_eq!(food.position, Position { x: 1, y: 1 });
    }

    #[test]
    fn full_grid_reports_grid_full() {
        let mut rng = StdRng::seed_from_u64(13);
        let bounds = GridSize {
            width: 2,
            height: 2,
        };
        let snake = Snake::from_segments(vec![
            Position { x: 0, y: 0 },
            Position { x: 1, y: 0 },
            Position { x: 1, y: 1 },
            Position { x: 0, y: 1 },
        ]);

        let result = Food::place(&mut rng, bounds, &snake);
        assert!(matches!(
            result,
            Err(PlacementError::GridFull {
                width: 2,
                height: 2
            })
        ));
    }

    #[test]
    fn seed_snake_leaves_food_off_body() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = GridSize {
            width: 20,
            height: 15,
        };
        let snake = Snake::seed(Position { x: 10, y: 7 }, Direction::Right);

        let food = Food::place(&mut rng, bounds, &snake).expect("board is nearly empty");
        assert!(!snake.occupies(food.position));
    }
}
