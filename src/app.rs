use iced::{Element, Size, Subscription, Task};
use log::debug;

use crate::{
    models::snake::{snake_config::SnakeConfig, snake_game::SnakeGame},
    view::View,
    view_models::snake::snake_view_model::SnakeViewModel,
    views::snake::snake_game_screen::{SnakeGameMessage, SnakeGameScreen},
};

/// Room around the board for the status row.
const WINDOW_MARGIN: f32 = 80.0;

pub struct State {
    screen: SnakeGameScreen,
}

#[derive(Clone, Debug)]
pub enum Message {
    Snake(SnakeGameMessage),
    Exit,
}

impl State {
    #[must_use]
    pub fn new(game: SnakeGame) -> Self {
        Self {
            screen: SnakeGameScreen::new(SnakeViewModel::new(game)),
        }
    }

    /// Window size that fits the play area of `config` and the status row.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn window_size(config: &SnakeConfig) -> Size {
        Size::new(
            config.area_width as f32 + WINDOW_MARGIN,
            config.area_height as f32 + 2.0 * WINDOW_MARGIN,
        )
    }

    pub fn update(state: &mut State, message: Message) -> Task<Message> {
        let mut next = state.screen.update(message);
        // follow-ups are things like a reset after a key press
        while let Some(message) = next {
            if let Message::Exit = message {
                debug!("Exit requested. Closing window");
                return iced::exit();
            }
            next = state.screen.update(message);
        }
        Task::none()
    }

    #[must_use]
    pub fn view(state: &State) -> Element<Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }
}
