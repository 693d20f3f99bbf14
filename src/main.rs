use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use ordena::app::{App, StartOptions};
use ordena::catalog::Catalog;
use ordena::config::{Config, Difficulty};
use ordena::event::{AppEvent, EventHandler};
use ordena::logging;
use ordena::session::controller::{Input, Screen};
use ordena::session::focus::FocusArea;
use ordena::session::state::{Modal, Nav};
use ordena::speech;
use ordena::ui::components::header::Header;
use ordena::ui::components::keyboard_help::KeyboardHelp;
use ordena::ui::components::menu::{Menu, MenuState};
use ordena::ui::components::modal::ModalDialog;
use ordena::ui::components::progress_bar::ProgressBar;
use ordena::ui::components::rewards::RewardsView;
use ordena::ui::components::tutorial::TutorialView;
use ordena::ui::components::word_board::WordList;
use ordena::ui::layout::{GameLayout, centered_rect, pack_hint_lines};
use ordena::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "ordena", version, about = "Word-ordering sentence puzzles for young readers")]
struct Cli {
    #[arg(short, long, help = "Level to start at (1-based)")]
    level: Option<u32>,

    #[arg(short, long, value_enum, help = "Sentence set to play")]
    difficulty: Option<Difficulty>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Seed the word shuffle for a reproducible run")]
    seed: Option<u64>,

    #[arg(long, help = "Disable spoken feedback")]
    no_speech: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "config unreadable, using defaults");
        Config::default()
    });
    let themes = Theme::available_themes();
    config.validate(&themes);
    let theme = cli.theme.filter(|name| {
        let known = themes.contains(name);
        if !known {
            tracing::warn!(theme = %name, "unknown theme, ignoring --theme");
        }
        known
    });
    let options = StartOptions {
        level: cli.level,
        seed: cli.seed,
        difficulty: cli.difficulty,
        theme,
        no_speech: cli.no_speech,
    };

    let catalog = Catalog::load().context("no playable sentences")?;
    let speech = speech::from_config(&options.apply(&config));
    let mut app = App::new(config, catalog, speech, options);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(?err, "app loop failed");
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
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.on_tick(Instant::now()),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Alt shortcuts that work from every screen.
fn global_target(key: &KeyEvent) -> Option<Screen> {
    if !key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char('i') => Some(Screen::Home),
        KeyCode::Char('j') => Some(Screen::Game),
        KeyCode::Char('r') => Some(Screen::Rewards),
        KeyCode::Char('a') => Some(Screen::Settings),
        KeyCode::Char('h') => Some(Screen::Tutorial),
        _ => None,
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay takes priority
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
            app.toggle_help();
        }
        return;
    }
    if matches!(key.code, KeyCode::F(1) | KeyCode::Char('?')) {
        app.toggle_help();
        return;
    }

    if let Some(screen) = global_target(&key) {
        // In game, leaving goes through the controller so an open modal blocks it.
        if app.screen == Screen::Game {
            app.dispatch(Input::Exit(screen));
        } else {
            app.go_to(screen);
        }
        return;
    }

    match app.screen {
        Screen::Home => handle_home_key(app, key),
        Screen::Game => handle_game_key(app, key),
        Screen::Rewards => handle_rewards_key(app, key),
        Screen::Tutorial => handle_tutorial_key(app, key),
        Screen::Settings => handle_settings_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.next(),
        KeyCode::Enter => {
            let item = app.menu.current();
            app.activate(item);
        }
        KeyCode::Char(ch) => {
            if let Some(item) = MenuState::by_key(ch) {
                app.activate(item);
            }
        }
        _ => {}
    }
}

fn game_input(key: &KeyEvent, modal: Modal) -> Option<Input> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let modal_open = modal != Modal::None;

    let input = match key.code {
        KeyCode::Esc => Input::Escape,
        KeyCode::Enter | KeyCode::Char('y') if modal_open => Input::Confirm,
        KeyCode::Char('n') if modal_open => Input::Escape,
        KeyCode::Char('p') if ctrl => Input::Hint,
        KeyCode::Char('r') if ctrl => Input::Reset,
        KeyCode::Char('v') if ctrl => Input::Verify,
        KeyCode::Enter | KeyCode::Char(' ') => Input::Select,
        KeyCode::Delete | KeyCode::Backspace => Input::Remove,
        KeyCode::Up => Input::Nav(Nav::Up),
        KeyCode::Down => Input::Nav(Nav::Down),
        KeyCode::Left => Input::Nav(Nav::Left),
        KeyCode::Right => Input::Nav(Nav::Right),
        _ => return None,
    };
    Some(input)
}

fn handle_game_key(app: &mut App, key: KeyEvent) {
    if let Some(input) = game_input(&key, app.controller.session().modal()) {
        app.dispatch(input);
    }
}

fn handle_rewards_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to(Screen::Home),
        KeyCode::Enter => app.go_to(Screen::Game),
        _ => {}
    }
}

fn handle_tutorial_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to(Screen::Home),
        KeyCode::Left | KeyCode::Char('h') => app.tutorial_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.tutorial_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.tutorial_enter(),
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.go_to(Screen::Home),
        KeyCode::Up | KeyCode::Char('k') => app.settings_up(),
        KeyCode::Down | KeyCode::Char('j') => app.settings_down(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.settings_cycle(true),
        KeyCode::Left | KeyCode::Char('h') => app.settings_cycle(false),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        Screen::Home => render_home(frame, app),
        Screen::Game => render_game(frame, app),
        Screen::Rewards => render_rewards(frame, app),
        Screen::Tutorial => render_tutorial(frame, app),
        Screen::Settings => render_settings(frame, app),
    }

    if app.show_help {
        let help_area = centered_rect(60, 70, 56, 17, area);
        frame.render_widget(KeyboardHelp::new(&app.theme), help_area);
    }
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, hints: &[&str], area: ratatui::layout::Rect) {
    let lines: Vec<Line> = pack_hint_lines(hints, area.width as usize)
        .into_iter()
        .map(|text| {
            Line::from(Span::styled(
                text,
                Style::default().fg(app.theme.colors.text_pending()),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_home(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(Header::new("ordena", &app.progress, &app.theme), layout[0]);

    let menu_area = centered_rect(50, 80, 50, 22, layout[1]);
    frame.render_widget(Menu::new(&app.menu, &app.theme), menu_area);

    render_footer(
        frame,
        app,
        &["[1-4] Elegir", "[↑↓] Mover", "[Enter] Abrir", "[F1] Teclas", "[q] Salir"],
        layout[2],
    );
}

fn render_game(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let session = app.controller.session();
    let sentence = session.sentence();
    let layout = GameLayout::new(area);

    frame.render_widget(Header::new("ordena", &app.progress, &app.theme), layout.header);

    let prompt = if app.is_celebrating() {
        Line::from(Span::styled(
            "🎉 ¡Muy bien! 🎉",
            Style::default()
                .fg(colors.success())
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled("🦉 ", Style::default().fg(colors.accent())),
            Span::styled(
                session.prompt().text(),
                Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
            ),
        ])
    };
    let theme_line = Line::from(Span::styled(
        format!("{} {}", sentence.theme_icon, sentence.theme),
        Style::default().fg(colors.text_pending()),
    ));
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), prompt, theme_line]).alignment(Alignment::Center),
        layout.prompt,
    );

    let padding = app.config.font_size.chip_padding();
    frame.render_widget(
        WordList::new("Tu oración", session.placed(), FocusArea::Placed, &app.theme)
            .focus(session.focus())
            .padding(padding)
            .verification(session.verification())
            .placeholder("Elige palabras de abajo para armar la oración."),
        layout.placed,
    );
    frame.render_widget(
        WordList::new("Palabras", session.available(), FocusArea::Available, &app.theme)
            .focus(session.focus())
            .padding(padding)
            .placeholder("¡Usaste todas! Pulsa Ctrl+V para revisar."),
        layout.available,
    );

    if let Some(progress_area) = layout.progress {
        let progress = app.controller.progress();
        frame.render_widget(
            ProgressBar::new("Progreso", progress.level_progress(app.catalog_len()), &app.theme)
                .caption(format!(
                    "nivel {} de {}",
                    progress.current_level,
                    app.catalog_len()
                )),
            progress_area,
        );
    }

    let verify_hint = if session.can_verify() {
        "[Ctrl+V] Revisar"
    } else {
        ""
    };
    render_footer(
        frame,
        app,
        &[
            "[←→↑↓] Mover",
            "[Enter] Poner/Quitar",
            "[Supr] Quitar",
            "[Ctrl+P] Pista",
            "[Ctrl+R] De nuevo",
            verify_hint,
            "[Esc] Inicio",
        ],
        layout.footer,
    );

    ModalDialog::new(session, &app.theme).render(area, frame.buffer_mut());
}

fn render_rewards(frame: &mut ratatui::Frame, app: &App) {
    let area = centered_rect(60, 80, 52, 24, frame.area());
    frame.render_widget(
        RewardsView::new(&app.progress, app.catalog_len(), &app.theme),
        area,
    );
}

fn render_tutorial(frame: &mut ratatui::Frame, app: &App) {
    let area = centered_rect(60, 60, 50, 14, frame.area());
    frame.render_widget(TutorialView::new(app.tutorial_step, &app.theme), area);
}

fn render_settings(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let centered = centered_rect(60, 80, 50, 20, frame.area());

    let block = Block::bordered()
        .title(" Ajustes ")
        .border_style(Style::default().fg(colors.accent()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(centered);
    block.render(centered, frame.buffer_mut());

    let fields = app.settings_rows();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(fields.len() as u16 * 3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    Paragraph::new(Line::from(Span::styled(
        "  Flechas para elegir y cambiar, Esc para guardar",
        Style::default().fg(colors.text_pending()),
    )))
    .render(layout[0], frame.buffer_mut());

    let field_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(fields.iter().map(|_| Constraint::Length(3)))
        .split(layout[1]);

    for (i, ((label, value), row)) in fields.iter().zip(field_layout.iter()).enumerate() {
        let is_selected = i == app.settings_selected;
        let indicator = if is_selected { " > " } else { "   " };

        let label_style = if is_selected {
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.fg())
        };
        let value_style = Style::default().fg(if is_selected {
            colors.word_focused_bg()
        } else {
            colors.text_pending()
        });

        let lines = vec![
            Line::from(Span::styled(format!("{indicator}{label}:"), label_style)),
            Line::from(Span::styled(format!("    < {value} >"), value_style)),
        ];
        Paragraph::new(lines).render(*row, frame.buffer_mut());
    }

    Paragraph::new(Line::from(Span::styled(
        "  [Esc] Guardar y volver  [←→/Enter] Cambiar",
        Style::default().fg(colors.accent()),
    )))
    .render(layout[3], frame.buffer_mut());
}
