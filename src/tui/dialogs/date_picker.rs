use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use chrono::{Datelike, NaiveDate};
use habit_day::{app::AppState, ui::date_picker::MonthLayout};

pub fn render(f: &mut Frame, app: &AppState, layout: &MonthLayout) {
    let area = f.size();
    let dialog_width = 41;
    let dialog_height = 15;
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = ratatui::layout::Rect {
        x,
        y,
        width: dialog_width.min(area.width),
        height: dialog_height.min(area.height),
    };

    f.render_widget(Clear, dialog_area);

    let month_name = NaiveDate::from_ymd_opt(layout.year, layout.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", layout.year, layout.month));

    let header_style = Style::default().fg(app.theme.help_section);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(month_name, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .map(|d| Span::styled(format!(" {} ", d), header_style))
                .collect::<Vec<_>>(),
        ),
    ];

    for week in &layout.weeks {
        let day_spans: Vec<Span> = week
            .days
            .iter()
            .map(|cell| {
                let mut style = Style::default();

                if cell.is_cursor {
                    style = style.bg(app.theme.selected_bg).fg(Color::White).add_modifier(Modifier::BOLD);
                } else if !cell.is_current_month {
                    style = style.fg(app.theme.muted);
                } else if cell.is_current {
                    style = style.fg(app.theme.primary).add_modifier(Modifier::BOLD);
                } else if cell.is_today {
                    style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
                }

                if cell.is_today {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }

                Span::styled(format!(" {:>2}  ", cell.date.day()), style)
            })
            .collect();

        lines.push(Line::from(day_spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("hjkl", Style::default().fg(Color::Cyan)),
        Span::raw(" = Move | "),
        Span::styled("{ }", Style::default().fg(Color::Cyan)),
        Span::raw(" = Month"),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" = Pick | "),
        Span::styled("t", Style::default().fg(Color::Cyan)),
        Span::raw(" = Today | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" = Close"),
    ]));

    let picker = Paragraph::new(lines)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Select Day ")
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Center);

    f.render_widget(picker, dialog_area);
}
