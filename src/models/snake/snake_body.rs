//! The snake itself: an ordered run of equal squares, head first.
use std::collections::VecDeque;

use log::warn;

use super::{
    direction::Heading,
    geometry::{in_bounds, intersects, Cell},
    snake_config::SnakeConfig,
};

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    OutOfBounds,
    SelfCollision,
}

impl std::fmt::Display for DeathReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeathReason::OutOfBounds => write!(f, "left the play area"),
            DeathReason::SelfCollision => write!(f, "ran into itself"),
        }
    }
}

/// One square of the body and its place in the chain (0 is the head).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub position: usize,
    pub cell: Cell,
}

#[derive(Clone, Debug)]
pub struct SnakeBody {
    segments: VecDeque<Cell>,
    /// Cell the tail left on the last successful advance.
    vacated: Option<Cell>,
    area_width: i32,
    area_height: i32,
}

impl SnakeBody {
    /// A single segment at the center of the configured area.
    #[must_use]
    pub fn new(config: &SnakeConfig) -> Self {
        Self::with_head(config.start_cell(), config.area_width, config.area_height)
    }

    #[must_use]
    pub fn with_head(head: Cell, area_width: i32, area_height: i32) -> Self {
        let mut segments = VecDeque::new();
        segments.push_front(head);
        Self {
            segments,
            vacated: None,
            area_width,
            area_height,
        }
    }

    /// Moves the snake one cell towards `heading`.
    ///
    /// The new head is checked against the bounds and then against every
    /// non-head segment where it stood before this move. Only when both pass
    /// does the chain shift: the head takes the new cell and every other
    /// segment takes the cell of the one ahead of it. On death nothing moves.
    ///
    /// The tail is tested at its pre-move cell too, so stepping straight back
    /// onto the neck of a two-segment body, or into the tail of a tight loop,
    /// is a collision. Reversals never reach here in a game because
    /// [`super::direction::DirectionController`] drops them.
    pub fn advance(&mut self, heading: Heading) -> Option<DeathReason> {
        let head = self.head();
        let (dx, dy) = heading.displacement(head.size);
        let new_head = head.offset(dx, dy);

        if !in_bounds(new_head, self.area_width, self.area_height) {
            return Some(DeathReason::OutOfBounds);
        }
        if self
            .segments
            .iter()
            .skip(1)
            .any(|segment| intersects(new_head, *segment))
        {
            return Some(DeathReason::SelfCollision);
        }

        self.segments.push_front(new_head);
        self.vacated = self.segments.pop_back();
        None
    }

    /// Appends a segment on the cell the tail vacated during the last advance.
    /// Returns false if there is no such cell, e.g. before the first advance
    /// or when called twice for the same advance.
    pub fn grow(&mut self) -> bool {
        match self.vacated.take() {
            Some(cell) => {
                self.segments.push_back(cell);
                true
            }
            None => {
                warn!("Asked to grow but no vacated cell is recorded");
                false
            }
        }
    }

    #[must_use]
    pub fn head(&self) -> Cell {
        // never empty: built with a head and advance pushes before it pops
        self.segments[0]
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        self.segments
            .iter()
            .enumerate()
            .map(|(position, cell)| Segment {
                position,
                cell: *cell,
            })
    }

    /// Copy of the cells, head first, for drawing.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Cell> {
        self.segments().map(|segment| segment.cell).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept alongside `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
