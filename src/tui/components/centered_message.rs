use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use habit_day::app::AppState;

pub fn render(f: &mut Frame, app: &AppState, message: &str, area: Rect) {
    let top_padding = area.height.saturating_sub(3) / 2;
    let mut lines = vec![ratatui::text::Line::from(""); top_padding as usize];
    lines.push(ratatui::text::Line::from(message));

    let content = Paragraph::new(lines)
        .style(Style::default().fg(app.theme.muted))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
