use crossterm::event::KeyCode;

use crate::app::AppState;
use crate::input::normal_mode::apply;
use crate::ui::main_view::MainViewProps;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if let Some(picker) = state.main_view.picker_mut() {
        match key {
            KeyCode::Char('h') | KeyCode::Left => picker.move_days(-1),
            KeyCode::Char('l') | KeyCode::Right => picker.move_days(1),
            KeyCode::Char('j') | KeyCode::Down => picker.move_days(7),
            KeyCode::Char('k') | KeyCode::Up => picker.move_days(-7),
            KeyCode::Char('{') => picker.move_months(-1),
            KeyCode::Char('}') => picker.move_months(1),
            KeyCode::Char('t') => picker.jump_to(chrono::Utc::now().date_naive()),
            _ => {}
        }
    }

    match key {
        KeyCode::Enter => {
            let props = MainViewProps {
                habits: &state.habits,
                date: state.date,
            };
            if let Some(event) = state.main_view.confirm_date(&props) {
                apply(event, state);
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => state.main_view.close_calendar(),
        _ => {}
    }
}
