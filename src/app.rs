use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::Config;
use crate::curriculum::Curriculum;
use crate::engine::filter;
use crate::error::DataLoadError;
use crate::session::quiz::{QuizEngine, QuizPhase, QuizView};
use crate::ui::components::lesson_browser::LessonBrowser;
use crate::ui::text_input::TextInput;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Main,
    Quiz,
    ConfirmStop,
    Complete,
    LoadFailed,
}

/// Which half of the main screen receives keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainFocus {
    Browser,
    Editor,
}

pub struct App {
    curriculum: Curriculum,
    load_error: Option<DataLoadError>,
    quiz: QuizEngine,
    pub browser: LessonBrowser,
    pub input: TextInput,
    pub focus: MainFocus,
    pub theme: Theme,
    pub config: Config,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, curriculum: Result<Curriculum, DataLoadError>) -> Self {
        Self::with_rng(config, curriculum, SmallRng::from_entropy())
    }

    pub fn with_rng(
        config: Config,
        curriculum: Result<Curriculum, DataLoadError>,
        rng: SmallRng,
    ) -> Self {
        let theme = Theme::load(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "unknown theme, using default");
            Theme::default()
        });

        let (curriculum, load_error) = match curriculum {
            Ok(c) => {
                tracing::info!(
                    grades = c.grades().len(),
                    lessons = c.lesson_count(),
                    characters = c.character_count(),
                    "curriculum loaded"
                );
                (c, None)
            }
            Err(err) => {
                tracing::error!("curriculum failed to load: {err}");
                (Curriculum::default(), Some(err))
            }
        };

        // With nothing to browse, start in the editor so free text still works.
        let focus = if curriculum.is_empty() {
            MainFocus::Editor
        } else {
            MainFocus::Browser
        };

        Self {
            curriculum,
            load_error,
            quiz: QuizEngine::with_rng(rng),
            browser: LessonBrowser::new(),
            input: TextInput::default(),
            focus,
            theme,
            config,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> AppScreen {
        if self.load_error.is_some() {
            return AppScreen::LoadFailed;
        }
        match self.quiz.phase() {
            QuizPhase::Idle => AppScreen::Main,
            QuizPhase::Running => AppScreen::Quiz,
            QuizPhase::ConfirmingStop => AppScreen::ConfirmStop,
            QuizPhase::Complete => AppScreen::Complete,
        }
    }

    /// `None` when the dataset failed to load.
    pub fn curriculum(&self) -> Option<&Curriculum> {
        match self.load_error {
            Some(_) => None,
            None => Some(&self.curriculum),
        }
    }

    pub fn load_error(&self) -> Option<&DataLoadError> {
        self.load_error.as_ref()
    }

    /// Whether the text field holds anything worth quizzing.
    pub fn can_start(&self) -> bool {
        self.load_error.is_none() && filter::has_ideographs(self.input.value())
    }

    pub fn quizzable_count(&self) -> usize {
        filter::extract_ideographs(self.input.value()).len()
    }

    /// Start a quiz over the text field. Returns whether it actually started.
    pub fn start_quiz(&mut self) -> bool {
        if self.load_error.is_some() {
            return false;
        }
        self.quiz.start(self.input.value())
    }

    pub fn advance(&mut self) {
        self.quiz.advance();
    }

    pub fn request_stop(&mut self) {
        self.quiz.request_stop();
    }

    pub fn confirm_stop(&mut self) {
        self.quiz.confirm_stop();
    }

    pub fn cancel_stop(&mut self) {
        self.quiz.cancel_stop();
    }

    pub fn restart(&mut self) {
        self.quiz.restart();
    }

    pub fn return_to_main(&mut self) {
        self.quiz.return_to_main();
    }

    pub fn current_view(&self) -> QuizView {
        self.quiz.view()
    }

    pub fn quiz(&self) -> &QuizEngine {
        &self.quiz
    }

    pub fn browser_next(&mut self) {
        self.browser.next(&self.curriculum);
    }

    pub fn browser_prev(&mut self) {
        self.browser.prev(&self.curriculum);
    }

    pub fn browser_back(&mut self) {
        self.browser.back();
    }

    /// Confirm the highlighted browser row. Picking a lesson replaces the
    /// text field with its characters and moves focus to the editor.
    pub fn browser_select(&mut self) {
        if let Some(lesson) = self.browser.select(&self.curriculum) {
            tracing::debug!(lesson = lesson.number, title = %lesson.title, "lesson selected");
            self.input.set_text(&lesson.text());
            self.focus = MainFocus::Editor;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            MainFocus::Browser if !self.curriculum.is_empty() => MainFocus::Editor,
            MainFocus::Browser => MainFocus::Browser,
            MainFocus::Editor if self.curriculum.is_empty() => MainFocus::Editor,
            MainFocus::Editor => MainFocus::Browser,
        };
    }

    pub fn paste(&mut self, text: &str) {
        if self.screen() == AppScreen::Main {
            self.input.insert_str(text);
            self.focus = MainFocus::Editor;
        }
    }
}
