use crossterm::event::KeyCode;

use crate::app::AppState;
use crate::habit::StatusKind;
use crate::ui::action_buttons::ActionKind;
use crate::ui::day_selector::StepDirection;
use crate::ui::main_view::{MainViewEvent, MainViewProps};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    let props = MainViewProps {
        habits: &state.habits,
        date: state.date,
    };
    let view = &mut state.main_view;

    let event = match key {
        KeyCode::Char('h') | KeyCode::Left => view.step_day(&props, StepDirection::Previous),
        KeyCode::Char('l') | KeyCode::Right => view.step_day(&props, StepDirection::Next),
        KeyCode::Char('c') => {
            view.open_calendar(&props);
            None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            view.select_next(&props);
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            view.select_previous();
            None
        }
        KeyCode::Char('d') | KeyCode::Char(' ') => view.press_status(&props, StatusKind::Done),
        KeyCode::Char('m') => view.press_status(&props, StatusKind::Missed),
        KeyCode::Char('e') | KeyCode::Enter => view.press_habit(&props),
        KeyCode::Char('a') => Some(view.press_action(ActionKind::AddHabit)),
        KeyCode::Char('s') => Some(view.press_action(ActionKind::ShowStats)),
        KeyCode::Char('?') => {
            state.show_help = true;
            None
        }
        _ => None,
    };

    if let Some(event) = event {
        apply(event, state);
    }
}

pub(crate) fn apply(event: MainViewEvent, state: &mut AppState) {
    tracing::debug!("Main view emitted {:?}", event);
    event.dispatch(state);
}
