use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use habit_day::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 56;
    let help_height = 20;
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width.min(area.width),
        height: help_height.min(area.height),
    };

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled("habit-day Help", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Days:", Style::default().fg(app.theme.help_section))]),
        Line::from("  h/l      - Previous/next day"),
        Line::from("  c        - Open calendar"),
        Line::from(""),
        Line::from(vec![Span::styled("Habits:", Style::default().fg(app.theme.help_section))]),
        Line::from("  j/k      - Select habit"),
        Line::from("  d/Space  - Toggle done"),
        Line::from("  m        - Toggle missed"),
        Line::from("  Enter/e  - Edit selected habit"),
        Line::from(""),
        Line::from(vec![Span::styled("Actions:", Style::default().fg(app.theme.help_section))]),
        Line::from("  a        - Add habit"),
        Line::from("  s        - Show statistics"),
        Line::from(""),
        Line::from(vec![Span::styled("Calendar:", Style::default().fg(app.theme.help_section))]),
        Line::from("  hjkl     - Move by day/week"),
        Line::from("  { / }    - Previous/next month"),
        Line::from("  t        - Jump to today"),
        Line::from("  Enter    - Pick day"),
        Line::from("  Esc      - Close calendar"),
        Line::from(""),
        Line::from("  q        - Quit"),
    ];

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
