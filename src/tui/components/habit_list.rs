use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use habit_day::{
    app::AppState,
    ui::habit_list::{HabitElement, HabitListLayout, ListRow},
};
use crate::tui::components::centered_message;

const ROW_HEIGHT: usize = 2;

pub fn render(f: &mut Frame, app: &AppState, layout: &HabitListLayout, area: Rect) {
    let rows = match layout {
        HabitListLayout::Empty { message } => {
            centered_message::render(f, app, message, area);
            return;
        }
        HabitListLayout::Rows(rows) => rows,
    };

    let divider_width = area.width.saturating_sub(2) as usize;
    let mut lines = Vec::new();
    let mut selected_top = 0;

    for row in rows {
        match row {
            ListRow::Habit(element) => {
                if element.is_selected {
                    selected_top = lines.len();
                }
                lines.extend(habit_element_lines(app, element));
            }
            ListRow::Separator => lines.push(separating_line(app, divider_width)),
        }
    }

    let visible = area.height.saturating_sub(2) as usize;
    let selected_bottom = selected_top + ROW_HEIGHT + 1;
    let scroll = selected_bottom.saturating_sub(visible);

    let content = Paragraph::new(lines)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(Block::default().borders(Borders::ALL).title(" Habits "));
    f.render_widget(content, area);
}

fn habit_element_lines<'a>(app: &AppState, element: &'a HabitElement) -> Vec<Line<'a>> {
    let cursor = if element.is_selected { ">" } else { " " };

    let mut first = vec![Span::styled(cursor, Style::default().fg(app.theme.selected_bg))];
    for button in &element.buttons {
        let style = if button.is_active {
            Style::default().bg(app.theme.primary).fg(Color::Black).add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(app.theme.light).fg(Color::White)
        };
        first.push(Span::raw(" "));
        first.push(Span::styled(format!(" {} ", button.icon), style));
    }

    let title_style = if element.is_selected {
        Style::default().fg(app.theme.text).bg(app.theme.selected_bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).add_modifier(Modifier::BOLD)
    };
    first.push(Span::raw("   "));
    first.push(Span::styled(element.title.as_str(), title_style));

    let second = Line::from(vec![
        Span::raw(" ".repeat(13)),
        Span::styled(element.description.as_str(), Style::default().fg(app.theme.muted)),
    ]);

    vec![Line::from(first), second]
}

fn separating_line(app: &AppState, width: usize) -> Line<'static> {
    Line::from(Span::styled("─".repeat(width), Style::default().fg(app.theme.dark)))
}
