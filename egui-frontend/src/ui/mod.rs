pub mod app_implementation;
pub mod app_state;

pub use app_state::*;
