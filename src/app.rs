use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::config::{Config, Difficulty};
use crate::engine::scoring::Progress;
use crate::engine::shuffle::{RandomShuffler, Shuffler};
use crate::session::controller::{Controller, Effect, Input, Screen};
use crate::speech::SpeechSink;
use crate::ui::components::menu::{MenuItem, MenuState};
use crate::ui::components::tutorial::TutorialView;
use crate::ui::theme::Theme;

/// How long the banner stays up after a correct answer.
pub const CELEBRATION: Duration = Duration::from_secs(2);

pub const SETTINGS_ROWS: usize = 4;

/// Per-run overrides from the command line. They shape this run only and
/// never reach the saved config.
#[derive(Clone, Debug, Default)]
pub struct StartOptions {
    pub level: Option<u32>,
    pub seed: Option<u64>,
    pub difficulty: Option<Difficulty>,
    pub theme: Option<String>,
    pub no_speech: bool,
}

impl StartOptions {
    /// The config this run plays with: `file` plus the overrides.
    pub fn apply(&self, file: &Config) -> Config {
        let mut config = file.clone();
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if self.no_speech {
            config.speech_enabled = false;
        }
        config
    }
}

pub struct App {
    pub screen: Screen,
    pub controller: Controller,
    /// Progress store fed by the controller's progress effects.
    pub progress: Progress,
    pub config: Config,
    pub theme: Theme,
    pub menu: MenuState,
    pub settings_selected: usize,
    pub tutorial_step: usize,
    pub show_help: bool,
    pub should_quit: bool,
    celebrate_until: Option<Instant>,
    catalog: Catalog,
    speech: Box<dyn SpeechSink>,
    options: StartOptions,
    /// Settings as last read from or written to disk.
    file_config: Config,
    config_path: Option<PathBuf>,
}

fn make_shuffler(seed: Option<u64>) -> Box<dyn Shuffler> {
    match seed {
        Some(seed) => Box::new(RandomShuffler::seeded(seed)),
        None => Box::new(RandomShuffler::new()),
    }
}

impl App {
    /// `file_config` is the saved config; `options` layer this run's
    /// overrides on top of it.
    pub fn new(
        file_config: Config,
        catalog: Catalog,
        speech: Box<dyn SpeechSink>,
        options: StartOptions,
    ) -> Self {
        let config = options.apply(&file_config);
        let progress = Progress::new(0, options.level.unwrap_or(1));
        let theme = Theme::for_config(&config);
        let controller = Controller::new(
            catalog.for_difficulty(config.difficulty),
            progress,
            make_shuffler(options.seed),
        );
        tracing::info!(
            sentences = catalog.len(),
            difficulty = ?config.difficulty,
            level = progress.current_level,
            "app started"
        );

        Self {
            screen: Screen::Home,
            controller,
            progress,
            config,
            theme,
            menu: MenuState::default(),
            settings_selected: 0,
            tutorial_step: 0,
            show_help: false,
            should_quit: false,
            celebrate_until: None,
            catalog,
            speech,
            options,
            file_config,
            config_path: None,
        }
    }

    /// Save settings to `path` instead of the user config file.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn dispatch(&mut self, input: Input) {
        let effects = self.controller.dispatch(input);
        self.apply_effects(effects);
    }

    pub fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Speak(text) => self.speech.speak(&text),
                Effect::Progress(update) => self.progress.merge(update),
                Effect::Celebrate => self.celebrate_until = Some(Instant::now() + CELEBRATION),
                Effect::Navigate(screen) => self.go_to(screen),
            }
        }
    }

    pub fn go_to(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        self.speech.stop();
        if self.screen == Screen::Settings {
            self.save_settings();
        }
        tracing::debug!(from = ?self.screen, to = ?screen, "navigate");
        self.screen = screen;

        match screen {
            Screen::Game => {
                let intro = self.controller.intro();
                self.apply_effects(intro);
            }
            Screen::Tutorial => self.tutorial_step = 0,
            Screen::Settings => self.settings_selected = 0,
            Screen::Home | Screen::Rewards => {}
        }
    }

    pub fn activate(&mut self, item: &MenuItem) {
        match item.target {
            Some(screen) => self.go_to(screen),
            None => self.should_quit = true,
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.celebrate_until.is_some_and(|until| now >= until) {
            self.celebrate_until = None;
        }
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrate_until.is_some()
    }

    pub fn catalog_len(&self) -> usize {
        self.controller.catalog().len()
    }

    pub fn tutorial_next(&mut self) {
        if !TutorialView::is_last(self.tutorial_step) {
            self.tutorial_step += 1;
        }
    }

    pub fn tutorial_prev(&mut self) {
        self.tutorial_step = self.tutorial_step.saturating_sub(1);
    }

    /// Enter on the tutorial: next step, or start playing from the last one.
    pub fn tutorial_enter(&mut self) {
        if TutorialView::is_last(self.tutorial_step) {
            self.go_to(Screen::Game);
        } else {
            self.tutorial_next();
        }
    }

    pub fn settings_up(&mut self) {
        self.settings_selected = self.settings_selected.saturating_sub(1);
    }

    pub fn settings_down(&mut self) {
        self.settings_selected = (self.settings_selected + 1).min(SETTINGS_ROWS - 1);
    }

    pub fn settings_cycle(&mut self, forward: bool) {
        match self.settings_selected {
            0 => self.config.cycle_font_size(forward),
            1 => self.config.high_contrast = !self.config.high_contrast,
            2 => self.config.cycle_background(forward),
            3 => {
                self.config.difficulty = self.config.difficulty.toggled();
                self.rebuild_controller();
            }
            _ => {}
        }
        self.theme = Theme::for_config(&self.config);
    }

    /// Label and current value of each settings row, in display order.
    pub fn settings_rows(&self) -> [(&'static str, String); SETTINGS_ROWS] {
        let contrast = if self.config.high_contrast { "Sí" } else { "No" };
        [
            ("Tamaño de letra", self.config.font_size.label().to_string()),
            ("Alto contraste", contrast.to_string()),
            ("Color de fondo", self.config.background_color.label().to_string()),
            ("Dificultad", self.config.difficulty.label().to_string()),
        ]
    }

    fn rebuild_controller(&mut self) {
        self.controller = Controller::new(
            self.catalog.for_difficulty(self.config.difficulty),
            self.progress,
            make_shuffler(self.options.seed),
        );
        tracing::info!(
            difficulty = ?self.config.difficulty,
            sentences = self.controller.catalog().len(),
            "catalog subset changed"
        );
    }

    /// The file config with the settings screen's rows applied. Theme and
    /// speech are left as the file has them, and difficulty is only taken
    /// when it no longer matches the `--difficulty` override.
    fn settings_to_save(&self) -> Config {
        let mut saved = self.file_config.clone();
        saved.font_size = self.config.font_size;
        saved.high_contrast = self.config.high_contrast;
        saved.background_color = self.config.background_color;
        if self.options.difficulty != Some(self.config.difficulty) {
            saved.difficulty = self.config.difficulty;
        }
        saved
    }

    fn save_settings(&mut self) {
        let config = self.settings_to_save();
        let saved = match &self.config_path {
            Some(path) => config.save_to(path),
            None => config.save(),
        };
        match saved {
            Ok(()) => self.file_config = config,
            Err(err) => tracing::warn!(%err, "could not save settings"),
        }
    }
}
