use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use habit_day::{app::AppState, ui::day_selector::DaySelectorLayout};

pub fn render(f: &mut Frame, app: &AppState, layout: &DaySelectorLayout, area: Rect) {
    let line = Line::from(vec![
        Span::styled(layout.prev_hint, Style::default().fg(app.theme.primary)),
        Span::raw("   "),
        Span::styled(
            layout.label.as_str(),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(layout.next_hint, Style::default().fg(app.theme.primary)),
    ]);

    let selector = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" c = calendar ")
                .title_alignment(Alignment::Right),
        );
    f.render_widget(selector, area);
}
