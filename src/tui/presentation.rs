use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use habit_day::{
    app::{AppState, Screen},
    ui::main_view::MainBody,
};
use crate::tui::{components, dialogs};

pub fn ui(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let today = chrono::Utc::now().date_naive();
    let layout = app.main_view.calculate_layout(&app.props(), today);

    components::day_selector::render(f, app, &layout.day_selector, chunks[0]);

    match &layout.body {
        MainBody::Loading { message } => components::centered_message::render(f, app, message, chunks[1]),
        MainBody::List(list) => components::habit_list::render(f, app, list, chunks[1]),
    }

    components::action_buttons::render(f, app, &layout.actions, chunks[1]);

    let status = Paragraph::new(status_text(app))
        .style(Style::default().fg(app.theme.status_bar))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    if let Some(calendar) = &layout.calendar {
        dialogs::date_picker::render(f, app, calendar);
    }

    if app.screen != Screen::Main {
        dialogs::screen_placeholder::render(f, app);
    }

    if app.show_help {
        dialogs::help::render(f, app);
    }
}

fn status_text(app: &AppState) -> String {
    if app.habits.is_loading() {
        return "Loading habits... | Press 'q' to quit".to_string();
    }

    let habits = app.habits.habits();
    let done = habits.iter().filter(|h| h.is_done).count();
    let missed = habits.iter().filter(|h| h.is_missed).count();
    format!(
        "Done: {}/{} | Missed: {} | Press 'q' to quit, '?' for help",
        done,
        habits.len(),
        missed
    )
}
