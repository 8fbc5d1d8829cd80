pub mod game_wrapper;
pub mod spin_wheel;
