pub mod constants;
pub mod performance;
pub mod shared_game_session;
pub mod shared_wheel_game;
pub mod validation;
pub mod wheel_render;
