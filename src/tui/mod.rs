mod session;
mod presentation;
mod sample_habits;
mod components;
mod dialogs;

pub use session::run_tui;
