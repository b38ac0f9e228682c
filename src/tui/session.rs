use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use habit_day::{
    app::{AppState, Screen},
    input::{normal_mode, picker_mode},
    storage::config::Config,
    ui::theme::Theme,
};
use crate::cli::CliOptions;
use crate::tui::{
    presentation::ui,
    sample_habits::sample_habits,
};

pub fn run_tui(config: &Config, options: &CliOptions) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let theme_name = options.theme.as_deref().unwrap_or(&config.ui.theme);
    let theme = Theme::get_by_name(theme_name);
    let mut app = AppState::new(options.start_date()).with_theme(theme);

    terminal.draw(|f| ui(f, &app)).ok();

    let roster = if options.sample || config.habits.load_sample {
        sample_habits()
    } else {
        Vec::new()
    };
    app.load_habits(roster);

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Terminal session failed: {}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(key.code, app)
        {
            return Ok(());
        }
    }
}

fn handle_key(code: KeyCode, app: &mut AppState) -> bool {
    if app.show_help {
        handle_help_keys(code, app);
        return false;
    }

    if app.screen != Screen::Main {
        handle_placeholder_keys(code, app);
        return false;
    }

    if app.main_view.is_calendar_visible() {
        picker_mode::handle_key(code, app);
        return false;
    }

    match code {
        KeyCode::Char('q') => true,
        _ => {
            normal_mode::handle_key(code, app);
            false
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}

fn handle_placeholder_keys(code: KeyCode, app: &mut AppState) {
    if matches!(code, KeyCode::Esc | KeyCode::Char('q')) {
        tracing::info!("Returning to habit list from {:?}", app.screen);
        app.close_screen();
    }
}
