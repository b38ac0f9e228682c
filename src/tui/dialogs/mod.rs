pub mod help;
pub mod date_picker;
pub mod screen_placeholder;
