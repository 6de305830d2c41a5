use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
///
/// Signed so a candidate head one step past the edge can be represented
/// and rejected by the bounds check.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the position one cell along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }
}

/// Ordered snake body, head at the front.
///
/// Pure container: the session decides when to advance and when to shrink,
/// so growth is expressed by advancing without shrinking.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates the two-cell seed snake with `head` leading and the tail one
    /// cell behind it, opposite to `direction`.
    #[must_use]
    pub fn seed(head: Position, direction: Direction) -> Self {
        let tail = head.step(direction.opposite());
        Self {
            body: VecDeque::from([head, tail]),
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            body: VecDeque::from(segments),
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Commits `new_head` as the new front segment.
    pub fn advance(&mut self, new_head: Position) {
        self.body.push_front(new_head);
    }

    /// Drops the last segment, keeping length constant across a plain move.
    pub fn shrink_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
