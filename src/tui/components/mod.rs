pub mod day_selector;
pub mod habit_list;
pub mod action_buttons;
pub mod centered_message;
