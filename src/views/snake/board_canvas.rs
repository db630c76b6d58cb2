//! Draws a [`BoardSnapshot`] onto an iced canvas, one pixel per unit.
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke},
    Color, Point, Rectangle, Renderer, Size, Theme,
};

use crate::{models::snake::geometry::Cell, view_models::snake::snake_view_model::BoardSnapshot};

const SNAKE_FILL: Color = Color::WHITE;
const SNAKE_EDGE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};
const FOOD_FILL: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

#[derive(Debug)]
pub struct BoardCanvas {
    board: BoardSnapshot,
}

impl BoardCanvas {
    #[must_use]
    pub fn new(board: BoardSnapshot) -> Self {
        Self { board }
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_rect(cell: Cell) -> (Point, Size) {
    (
        Point::new(cell.x as f32, cell.y as f32),
        Size::new(cell.size as f32, cell.size as f32),
    )
}

impl<Message> canvas::Program<Message> for BoardCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::BLACK);

        let (top_left, size) = to_rect(self.board.food);
        frame.fill_rectangle(top_left, size, FOOD_FILL);

        for cell in &self.board.segments {
            let (top_left, size) = to_rect(*cell);
            frame.fill_rectangle(top_left, size, SNAKE_FILL);
            frame.stroke(
                &Path::rectangle(top_left, size),
                Stroke::default().with_color(SNAKE_EDGE).with_width(1.0),
            );
        }

        vec![frame.into_geometry()]
    }
}
