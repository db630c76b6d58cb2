//! Axis-aligned square cells and the tests the simulation runs on them.

/// An axis-aligned square given by its top-left corner and side length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32, size: i32) -> Self {
        Self { x, y, size }
    }

    /// Same square moved by `(dx, dy)`.
    #[must_use]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            size: self.size,
        }
    }

    /// Exclusive right edge.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x + self.size
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.y + self.size
    }
}

/// How two cells that share an edge or corner but no area are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Contact {
    /// Only a non-zero shared area counts.
    #[default]
    Overlap,
    /// Flush edges and corners count as well.
    OverlapOrTouch,
}

impl Contact {
    #[must_use]
    pub fn test(self, a: Cell, b: Cell) -> bool {
        match self {
            Contact::Overlap => intersects(a, b),
            Contact::OverlapOrTouch => touches_or_intersects(a, b),
        }
    }
}

/// True when the two squares share a non-zero area.
#[must_use]
pub fn intersects(a: Cell, b: Cell) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// True when the two squares share an area, an edge or a corner.
#[must_use]
pub fn touches_or_intersects(a: Cell, b: Cell) -> bool {
    a.x <= b.right() && b.x <= a.right() && a.y <= b.bottom() && b.y <= a.bottom()
}

/// True when `c` lies entirely inside `[0, width) x [0, height)`.
#[must_use]
pub fn in_bounds(c: Cell, width: i32, height: i32) -> bool {
    c.x >= 0 && c.y >= 0 && c.right() <= width && c.bottom() <= height
}
