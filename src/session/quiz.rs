use std::fmt;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::engine::filter::extract_ideographs;
use crate::error::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    Running,
    ConfirmingStop,
    Complete,
}

impl QuizPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            QuizPhase::Idle => "idle",
            QuizPhase::Running => "running",
            QuizPhase::ConfirmingStop => "confirming-stop",
            QuizPhase::Complete => "complete",
        }
    }

    /// A card is on screen (possibly behind the stop dialog).
    pub fn shows_card(self) -> bool {
        matches!(self, QuizPhase::Running | QuizPhase::ConfirmingStop)
    }
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-based position over the size of the working set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f64 / self.total as f64
    }
}

/// Snapshot handed to the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizView {
    pub phase: QuizPhase,
    pub character: Option<char>,
    pub index: Option<usize>,
    pub total: Option<usize>,
    pub elapsed: Option<Duration>,
}

pub struct QuizEngine {
    phase: QuizPhase,
    working_set: Vec<char>,
    position: usize,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    rng: SmallRng,
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            phase: QuizPhase::Idle,
            working_set: Vec::new(),
            position: 0,
            started_at: None,
            finished_at: None,
            rng,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn working_set(&self) -> &[char] {
        &self.working_set
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Start a quiz over the ideographs of `text`. Returns false, leaving the
    /// engine untouched, when not idle or when `text` has nothing to quiz.
    pub fn start(&mut self, text: &str) -> bool {
        if self.phase != QuizPhase::Idle {
            self.ignore("start");
            return false;
        }
        let characters = extract_ideographs(text);
        if characters.is_empty() {
            tracing::debug!("start ignored: no quizzable characters in input");
            return false;
        }
        self.working_set = characters;
        self.begin_run();
        true
    }

    pub fn advance(&mut self) {
        if self.phase != QuizPhase::Running {
            return self.ignore("advance");
        }
        if self.position + 1 < self.working_set.len() {
            self.position += 1;
        } else {
            self.phase = QuizPhase::Complete;
            self.finished_at = Some(Instant::now());
            tracing::info!(total = self.working_set.len(), "quiz complete");
        }
    }

    pub fn request_stop(&mut self) {
        if self.phase != QuizPhase::Running {
            return self.ignore("request_stop");
        }
        self.phase = QuizPhase::ConfirmingStop;
    }

    pub fn cancel_stop(&mut self) {
        if self.phase != QuizPhase::ConfirmingStop {
            return self.ignore("cancel_stop");
        }
        self.phase = QuizPhase::Running;
    }

    pub fn confirm_stop(&mut self) {
        if self.phase != QuizPhase::ConfirmingStop {
            return self.ignore("confirm_stop");
        }
        tracing::info!(
            position = self.position + 1,
            total = self.working_set.len(),
            "quiz stopped early"
        );
        self.reset();
    }

    /// Go again over the same characters in a freshly shuffled order.
    pub fn restart(&mut self) {
        if self.phase != QuizPhase::Complete {
            return self.ignore("restart");
        }
        self.begin_run();
    }

    pub fn return_to_main(&mut self) {
        if self.phase != QuizPhase::Complete {
            return self.ignore("return_to_main");
        }
        self.reset();
    }

    pub fn current_character(&self) -> Result<char, QuizError> {
        if !self.phase.shows_card() {
            return Err(QuizError::InvalidState { phase: self.phase });
        }
        Ok(self.working_set[self.position])
    }

    pub fn progress(&self) -> Option<Progress> {
        if self.working_set.is_empty() {
            return None;
        }
        Some(Progress {
            current: self.position + 1,
            total: self.working_set.len(),
        })
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    pub fn is_confirming_stop(&self) -> bool {
        self.phase == QuizPhase::ConfirmingStop
    }

    pub fn elapsed(&self) -> Option<Duration> {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => Some(end.duration_since(start)),
            (Some(start), None) => Some(start.elapsed()),
            _ => None,
        }
    }

    pub fn view(&self) -> QuizView {
        let progress = self.progress();
        match self.phase {
            QuizPhase::Idle => QuizView {
                phase: self.phase,
                character: None,
                index: None,
                total: None,
                elapsed: None,
            },
            QuizPhase::Running | QuizPhase::ConfirmingStop => QuizView {
                phase: self.phase,
                character: self.current_character().ok(),
                index: progress.map(|p| p.current),
                total: progress.map(|p| p.total),
                elapsed: None,
            },
            QuizPhase::Complete => QuizView {
                phase: self.phase,
                character: None,
                index: None,
                total: progress.map(|p| p.total),
                elapsed: self.elapsed(),
            },
        }
    }

    fn begin_run(&mut self) {
        self.working_set.shuffle(&mut self.rng);
        self.position = 0;
        self.phase = QuizPhase::Running;
        self.started_at = Some(Instant::now());
        self.finished_at = None;
        tracing::info!(total = self.working_set.len(), "quiz started");
    }

    fn reset(&mut self) {
        self.working_set.clear();
        self.position = 0;
        self.phase = QuizPhase::Idle;
        self.started_at = None;
        self.finished_at = None;
    }

    fn ignore(&self, event: &str) {
        tracing::debug!(event, phase = %self.phase, "quiz event ignored");
    }
}
