use iced::Task;
use log::{debug, error};
use rustsnake::{
    app::State,
    models::snake::{food_spawner::FoodSpawner, snake_config::SnakeConfig, snake_game::SnakeGame},
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("rustsnake=debug"))
        .init();
    debug!("Debug on");

    let config = SnakeConfig::default();
    // seeded once here and reused by every restart
    let game = match SnakeGame::new(config, FoodSpawner::from_time_seed()) {
        Ok(game) => game,
        Err(e) => {
            error!("Cannot start a game: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = iced::application("Snake Game", State::update, State::view)
        .window_size(State::window_size(&config))
        .subscription(State::subscription)
        .run_with(move || (State::new(game), Task::none()))
    {
        error!("Snake window failed: {e}");
    }
}
