//! Snake simulation core. Nothing in here knows about windows or key codes.

pub mod direction;
pub mod food_spawner;
pub mod geometry;
pub mod snake_body;
pub mod snake_config;
pub mod snake_game;
