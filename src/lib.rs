//! # konnichi-quiz
//!
//! A terminal multiple-choice quiz with keyboard and mouse input, streak
//! tracking, a badge award and a final review.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use konnichi_quiz::{Quiz, QuizConfig, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Built-in practice set with the default badge policy
//!     let quiz = Quiz::from_config(&QuizConfig::default())?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The session can also be driven without a terminal:
//!
//! ```rust
//! use konnichi_quiz::{App, BadgePolicy, BadgeTier, Catalog, PointerTarget};
//!
//! let mut app = App::new(Catalog::sample(), BadgePolicy::default());
//! for pick in [1, 1, 2, 2, 2] {
//!     app.click(PointerTarget::Option(pick));
//!     app.click(PointerTarget::Next);
//! }
//! assert_eq!(app.view().badge, BadgeTier::Gold);
//! ```

mod app;
pub mod config;
mod data;
pub mod input;
pub mod logging;
mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use thiserror::Error;

pub use app::{App, KeyOutcome, PointerTarget, QuizView};
pub use config::QuizConfig;
pub use data::{load_catalog_from_json, parse_catalog, Catalog, LoadError, SAMPLE_TITLE};
pub use models::{
    AnswerRecord, BadgePolicy, BadgeTier, Direction, GradeTier, Phase, Question, SilverThreshold,
};
pub use session::SessionState;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(catalog: Catalog, policy: BadgePolicy) -> Self {
        Self {
            app: App::new(catalog, policy),
        }
    }

    pub fn from_config(config: &QuizConfig) -> Result<Self, QuizError> {
        let catalog = config.load_catalog()?;
        Ok(Self::new(catalog, config.badge_policy))
    }

    /// Load a quiz from a JSON file with the default badge policy.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use konnichi_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let catalog = load_catalog_from_json(path)?;
        Ok(Self::new(catalog, BadgePolicy::default()))
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal until the user quits. The screen is restored
    /// on every exit path.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::TerminalGuard::acquire()?;
        run_event_loop(&mut term, &mut self.app)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    let mut hits = ui::HitMap::default();

    loop {
        terminal.draw(|frame| hits = ui::render(frame, &app.view()))?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key) == KeyOutcome::Quit {
                    break;
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(target) = hits.target_at(mouse.column, mouse.row) {
                        app.click(target);
                    }
                }
                MouseEventKind::ScrollDown => app.scroll_summary_down(),
                MouseEventKind::ScrollUp => app.scroll_summary_up(),
                _ => {}
            },
            _ => {}
        }
    }

    tracing::info!(score = app.state().score(), "quiz closed");
    Ok(())
}
