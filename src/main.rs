use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use hanzi_hero::app::{App, AppScreen, MainFocus};
use hanzi_hero::config::{self, Config};
use hanzi_hero::curriculum::store;
use hanzi_hero::event::{AppEvent, EventHandler};
use hanzi_hero::ui::text_input::InputResult;
use hanzi_hero::{logging, ui};

#[derive(Parser)]
#[command(name = "hanzi-hero", version, about = "Terminal Hanzi flashcards for young readers")]
struct Cli {
    #[arg(short, long, help = "Lesson dataset (JSON) to use instead of the bundled one")]
    dataset: Option<PathBuf>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "UI language (zh-CN, en)")]
    locale: Option<String>,

    #[arg(long, help = "Seed for shuffling, for reproducible card order")]
    seed: Option<u64>,

    #[arg(long, help = "Write the effective settings to the config file and exit")]
    save_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.save_config {
        let path = Config::config_path();
        Config::update_file(&path, cli.theme, cli.locale, cli.dataset)?;
        println!("Saved settings to {}", path.display());
        return Ok(());
    }

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    let mut config = config.with_overrides(cli.theme, cli.locale, cli.dataset);
    config.normalize_locale(config::LOCALES);

    // A missing log file never blocks the UI
    let log_path = Config::log_path();
    if let Err(err) = logging::init(&log_path, &config.log_level) {
        eprintln!("Logging disabled: {err:#}");
    }
    if let Some(err) = config_error {
        tracing::warn!("using default settings, config file unreadable: {err:#}");
        eprintln!("Warning: using default settings: {err:#}");
    }
    hanzi_hero::set_locale(&config.locale);

    let curriculum = match config.dataset_path() {
        Some(path) => store::load_path(&path),
        None => store::load_bundled(),
    };
    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut app = App::with_rng(config, curriculum, rng);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(250));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("{err:#}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::screens::render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Paste(text) => app.paste(&text),
            AppEvent::Tick | AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Only process Press events; Repeat would skip cards on a held key
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen() {
        AppScreen::Main => handle_main_key(app, key),
        AppScreen::Quiz => handle_quiz_key(app, key),
        AppScreen::ConfirmStop => handle_confirm_key(app, key),
        AppScreen::Complete => handle_complete_key(app, key),
        AppScreen::LoadFailed => handle_load_failed_key(app, key),
    }
}

fn handle_main_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.toggle_focus();
        return;
    }

    match app.focus {
        MainFocus::Browser => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => app.browser_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.browser_next(),
            KeyCode::Left | KeyCode::Char('h') => app.browser_back(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.browser_select(),
            KeyCode::Char('s') => {
                app.start_quiz();
            }
            _ => {}
        },
        MainFocus::Editor => match app.input.handle(key) {
            InputResult::Submit => {
                app.start_quiz();
            }
            InputResult::Cancel => app.toggle_focus(),
            InputResult::Continue => {}
        },
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            app.advance()
        }
        KeyCode::Esc | KeyCode::Char('q') => app.request_stop(),
        _ => {}
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.confirm_stop(),
        KeyCode::Char('n') | KeyCode::Esc => app.cancel_stop(),
        _ => {}
    }
}

fn handle_complete_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.restart(),
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => app.return_to_main(),
        _ => {}
    }
}

fn handle_load_failed_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.should_quit = true;
    }
}
