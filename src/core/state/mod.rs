// Guard state: the daily marker and its persistence

pub mod manager;
pub mod marker;

pub use manager::StateManager;
pub use marker::{DailyMarker, DAILY_MARKER_KEY};
