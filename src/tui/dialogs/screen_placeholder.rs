use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use habit_day::app::{AppState, Screen};

pub fn render(f: &mut Frame, app: &AppState) {
    let (title, detail) = match &app.screen {
        Screen::Main => return,
        Screen::NewHabit => ("New Habit".to_string(), "Habit creation was requested.".to_string()),
        Screen::EditHabit(id) => {
            let name = app
                .habits
                .find(id)
                .map(|h| h.title.clone())
                .unwrap_or_else(|| id.to_string());
            ("Edit Habit".to_string(), format!("Editing was requested for \"{}\".", name))
        }
        Screen::Stats => ("Statistics".to_string(), "The statistics view was requested.".to_string()),
    };

    let area = f.size();
    let dialog_width = 56;
    let dialog_height = 8;
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = ratatui::layout::Rect {
        x,
        y,
        width: dialog_width.min(area.width),
        height: dialog_height.min(area.height),
    };

    f.render_widget(Clear, dialog_area);

    let text = vec![
        Line::from(vec![Span::styled(title.as_str(), Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(detail),
        Line::from(""),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" = Back to habits"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, dialog_area);
}
