pub mod habit;
pub mod input;
pub mod ui;
pub mod storage;
pub mod app;

pub use habit::{Habit, HabitCollection, HabitId, StatusKind};
pub use app::{AppState, Screen};

pub use input::{normal_mode, picker_mode};
