pub mod record;
pub mod collection;

pub use record::{Habit, HabitId, HabitStatus, StatusKind};
pub use collection::HabitCollection;
