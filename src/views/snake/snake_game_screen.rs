use std::time::Duration;

use iced::{
    keyboard::{self, Key},
    time::{self, Instant},
    widget::{button, column, container, row, text, Canvas},
    Element, Length, Subscription,
};

use crate::{
    app::Message, view::View, view_model::ViewModel,
    view_models::snake::snake_view_model::SnakeViewModel,
};

use super::board_canvas::BoardCanvas;

#[derive(Clone, Debug)]
pub enum SnakeGameMessage {
    Key(Key),
    Frame(Instant),
    Reset,
}

#[derive(Debug)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel,
}

impl SnakeGameScreen {
    #[must_use]
    pub fn new(view_model: SnakeViewModel) -> Self {
        Self { view_model }
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    #[allow(clippy::cast_precision_loss)]
    fn view(&self) -> Element<Message> {
        let board = self.view_model.get_board();
        let width = board.area_width as f32;
        let height = board.area_height as f32;
        let canvas = Canvas::new(BoardCanvas::new(board))
            .width(Length::Fixed(width))
            .height(Length::Fixed(height));

        let restart_button = button(text("Restart"))
            .on_press(Message::Snake(SnakeGameMessage::Reset))
            .width(80)
            .height(40);

        container(
            column![
                row![restart_button, text(self.view_model.get_status())]
                    .spacing(20)
                    .align_y(iced::alignment::Vertical::Center),
                canvas,
            ]
            .spacing(10),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let frames = time::every(Duration::from_millis(
            self.view_model.get_time_between_frames(),
        ))
        .map(SnakeGameMessage::Frame)
        .map(Message::Snake);
        let keys = keyboard::on_key_press(|key, _| {
            Some(Message::Snake(SnakeGameMessage::Key(key)))
        });
        Subscription::batch(vec![frames, keys])
    }
}
