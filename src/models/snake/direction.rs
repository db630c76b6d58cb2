//! Heading of the snake and the controller that turns key presses into a
//! committed heading once per tick.
use log::trace;

/// Direction of travel. Screen coordinates, so `Up` decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const VARIANTS: &'static [Heading] = &[Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit step `(dx, dy)` for this heading.
    #[must_use]
    pub fn value(&self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// One-cell displacement for a segment of side `size`.
    #[must_use]
    pub fn displacement(&self, size: i32) -> (i32, i32) {
        let (dx, dy) = self.value();
        (dx * size, dy * size)
    }

    #[must_use]
    pub fn get_opposite(&self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Heading::Up => write!(f, "up"),
            Heading::Down => write!(f, "down"),
            Heading::Left => write!(f, "left"),
            Heading::Right => write!(f, "right"),
        }
    }
}

/// Heading every new session starts with.
pub const DEFAULT_HEADING: Heading = Heading::Right;

/// Holds the committed heading plus whatever was requested since the last tick.
#[derive(Clone, Debug)]
pub struct DirectionController {
    committed: Heading,
    pending: Heading,
}

impl DirectionController {
    #[must_use]
    pub fn new(initial: Heading) -> Self {
        Self {
            committed: initial,
            pending: initial,
        }
    }

    /// Records `heading` as pending unless it reverses the committed heading.
    /// Returns whether the request was kept.
    pub fn request_heading(&mut self, heading: Heading) -> bool {
        if heading == self.committed.get_opposite() {
            trace!("Ignoring reversal from {} to {}", self.committed, heading);
            return false;
        }
        self.pending = heading;
        true
    }

    /// Promotes the pending heading. Called once per tick before the body moves.
    pub fn commit_tick(&mut self) -> Heading {
        self.committed = self.pending;
        self.committed
    }

    #[must_use]
    pub fn committed(&self) -> Heading {
        self.committed
    }

    #[must_use]
    pub fn pending(&self) -> Heading {
        self.pending
    }
}

impl Default for DirectionController {
    fn default() -> Self {
        Self::new(DEFAULT_HEADING)
    }
}
