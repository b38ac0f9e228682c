pub mod theme;
pub mod day_selector;
pub mod habit_status_buttons;
pub mod habit_list;
pub mod action_buttons;
pub mod date_picker;
pub mod main_view;
