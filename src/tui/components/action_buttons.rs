use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use habit_day::{app::AppState, ui::action_buttons::ActionButton};

const BUTTON_WIDTH: u16 = 9;
const BUTTON_HEIGHT: u16 = 3;
const MARGIN: u16 = 2;

pub fn render(f: &mut Frame, app: &AppState, buttons: &[ActionButton], area: Rect) {
    let stack_height = BUTTON_HEIGHT * buttons.len() as u16;
    if area.width < BUTTON_WIDTH + MARGIN || area.height < stack_height + MARGIN {
        render_compact(f, app, buttons, area);
        return;
    }

    let x = area.x + area.width - BUTTON_WIDTH - MARGIN;
    let top = area.y + area.height - stack_height - 1;

    for (i, button) in buttons.iter().enumerate() {
        let button_area = Rect {
            x,
            y: top + BUTTON_HEIGHT * i as u16,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        };

        f.render_widget(Clear, button_area);

        let label = Line::from(vec![
            Span::styled(button.icon, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(button.key_hint, Style::default().fg(Color::White)),
        ]);

        let widget = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.primary))
                    .style(Style::default().bg(app.theme.primary)),
            );
        f.render_widget(widget, button_area);
    }
}

// Single row of `[+ a] [▤ s]` on the last inner row of `area`.
fn render_compact(f: &mut Frame, app: &AppState, buttons: &[ActionButton], area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let style = Style::default().bg(app.theme.primary).fg(Color::White).add_modifier(Modifier::BOLD);
    let mut spans = Vec::new();
    for (i, button) in buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{} {}]", button.icon, button.key_hint), style));
    }
    let line = Line::from(spans);

    let inner_right = if area.width > 2 { area.x + area.width - 1 } else { area.x + area.width };
    let width = (line.width() as u16).min(inner_right - area.x);
    let row = if area.height >= 3 { area.y + area.height - 2 } else { area.y + area.height - 1 };
    let compact_area = Rect {
        x: inner_right - width,
        y: row,
        width,
        height: 1,
    };

    f.render_widget(Clear, compact_area);
    f.render_widget(Paragraph::new(line), compact_area);
}
