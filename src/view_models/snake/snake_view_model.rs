use iced::keyboard::{key::Named, Key};
use log::{debug, warn};

use crate::{
    app::Message,
    models::snake::{
        direction::Heading,
        geometry::Cell,
        snake_game::{FrameOutcome, InputEvent, SnakeGame},
    },
    view_model::ViewModel,
    views::snake::snake_game_screen::SnakeGameMessage,
};

/// Everything the board needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardSnapshot {
    pub area_width: i32,
    pub area_height: i32,
    pub segments: Vec<Cell>,
    pub food: Cell,
}

/// Sits between the key/timer messages and the [`SnakeGame`].
///
/// Key presses are buffered and handed to the game when the next frame
/// message arrives, so input is sampled once per frame like a poll loop.
#[derive(Debug)]
pub struct SnakeViewModel {
    game: SnakeGame,
    pending_input: Vec<InputEvent>,
}

impl SnakeViewModel {
    #[must_use]
    pub fn new(game: SnakeGame) -> Self {
        Self {
            game,
            pending_input: Vec::new(),
        }
    }

    /// Arrows and WASD steer, Escape quits.
    #[must_use]
    pub fn input_for_key(key: &Key) -> Option<InputEvent> {
        let heading = match key {
            Key::Named(code) => match code {
                Named::ArrowUp => Heading::Up,
                Named::ArrowDown => Heading::Down,
                Named::ArrowLeft => Heading::Left,
                Named::ArrowRight => Heading::Right,
                Named::Escape => return Some(InputEvent::Quit),
                _ => return None,
            },
            Key::Character(c) => match c.as_str() {
                "w" | "W" => Heading::Up,
                "s" | "S" => Heading::Down,
                "a" | "A" => Heading::Left,
                "d" | "D" => Heading::Right,
                _ => return None,
            },
            Key::Unidentified => return None,
        };
        Some(InputEvent::Heading(heading))
    }

    #[must_use]
    pub fn get_game(&self) -> &SnakeGame {
        &self.game
    }

    #[must_use]
    pub fn get_board(&self) -> BoardSnapshot {
        let config = self.game.config();
        BoardSnapshot {
            area_width: config.area_width,
            area_height: config.area_height,
            segments: self.game.body().snapshot(),
            food: self.game.food(),
        }
    }

    #[must_use]
    pub fn get_time_between_frames(&self) -> u64 {
        self.game.config().frame_millis
    }

    #[must_use]
    pub fn get_status(&self) -> String {
        match self.game.death() {
            Some(reason) => format!(
                "GAME OVER. The snake {} at length {}. Press Space to restart",
                reason,
                self.game.body().len()
            ),
            None => format!(
                "Length {}    Food eaten {}    Ticks {}",
                self.game.body().len(),
                self.game.foods_eaten(),
                self.game.ticks()
            ),
        }
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game.is_over()
    }
}

impl ViewModel for SnakeViewModel {
    fn update(&mut self, message: Message) -> Option<Message> {
        let Message::Snake(snake_game_message) = message else {
            warn!("Non-snake message sent to SnakeViewModel: {:#?}", message);
            return None;
        };
        match snake_game_message {
            SnakeGameMessage::Key(key) => {
                if self.game.is_over() && matches!(key, Key::Named(Named::Space)) {
                    return Some(Message::Snake(SnakeGameMessage::Reset));
                }
                if let Some(input) = Self::input_for_key(&key) {
                    self.pending_input.push(input);
                }
                None
            }
            SnakeGameMessage::Frame(_) => {
                let inputs = std::mem::take(&mut self.pending_input);
                match self.game.run_frame(inputs) {
                    FrameOutcome::Exited => Some(Message::Exit),
                    _ => None,
                }
            }
            SnakeGameMessage::Reset => {
                debug!("Reset requested. Starting a new session");
                self.pending_input.clear();
                self.game.restart();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::time::Instant;

    use super::*;
    use crate::models::snake::{
        food_spawner::FoodSpawner, snake_body::DeathReason, snake_config::SnakeConfig,
    };

    fn view_model() -> SnakeViewModel {
        let config = SnakeConfig {
            frames_per_tick: 2,
            ..SnakeConfig::with_area(300, 300)
        };
        SnakeViewModel::new(SnakeGame::new(config, FoodSpawner::with_seed(21)).unwrap())
    }

    fn key(key: Key) -> Message {
        Message::Snake(SnakeGameMessage::Key(key))
    }

    fn frame() -> Message {
        Message::Snake(SnakeGameMessage::Frame(Instant::now()))
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            SnakeViewModel::input_for_key(&Key::Named(Named::ArrowUp)),
            Some(InputEvent::Heading(Heading::Up))
        );
        assert_eq!(
            SnakeViewModel::input_for_key(&Key::Character("a".into())),
            Some(InputEvent::Heading(Heading::Left))
        );
        assert_eq!(
            SnakeViewModel::input_for_key(&Key::Character("D".into())),
            Some(InputEvent::Heading(Heading::Right))
        );
        assert_eq!(
            SnakeViewModel::input_for_key(&Key::Named(Named::Escape)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            SnakeViewModel::input_for_key(&Key::Named(Named::Enter)),
            None
        );
        assert_eq!(SnakeViewModel::input_for_key(&Key::Unidentified), None);
    }

    #[test]
    fn test_keys_wait_for_the_frame() {
        let mut vm = view_model();
        assert!(vm.update(key(Key::Named(Named::ArrowDown))).is_none());
        assert_eq!(vm.get_game().heading(), Heading::Right);
        assert!(vm.update(frame()).is_none());
        assert!(vm.update(frame()).is_none());
        assert_eq!(vm.get_game().heading(), Heading::Down);
        assert_eq!(vm.get_game().ticks(), 1);
    }

    #[test]
    fn test_escape_exits_on_next_frame() {
        let mut vm = view_model();
        assert!(vm.update(key(Key::Named(Named::Escape))).is_none());
        assert!(matches!(vm.update(frame()), Some(Message::Exit)));
        assert_eq!(vm.get_game().frames(), 0);
    }

    #[test]
    fn test_space_restarts_only_after_game_over() {
        let mut vm = view_model();
        assert!(vm.update(key(Key::Named(Named::Space))).is_none());

        while !vm.game_over() {
            vm.update(frame());
        }
        assert_eq!(vm.get_game().death(), Some(DeathReason::OutOfBounds));
        assert!(vm.get_status().starts_with("GAME OVER"));

        let follow_up = vm.update(key(Key::Named(Named::Space)));
        assert!(matches!(
            follow_up,
            Some(Message::Snake(SnakeGameMessage::Reset))
        ));
        if let Some(message) = follow_up {
            assert!(vm.update(message).is_none());
        }
        assert!(!vm.game_over());
        assert_eq!(vm.get_board().segments, vec![Cell::new(150, 150, 15)]);
    }

    #[test]
    fn test_board_snapshot() {
        let vm = view_model();
        let board = vm.get_board();
        assert_eq!(board.area_width, 300);
        assert_eq!(board.area_height, 300);
        assert_eq!(board.segments.len(), 1);
        assert_eq!(board.food, vm.get_game().food());
        assert_eq!(vm.get_time_between_frames(), 16);
        assert_eq!(vm.get_status(), "Length 1    Food eaten 0    Ticks 0");
    }
}
