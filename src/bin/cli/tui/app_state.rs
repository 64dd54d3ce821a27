use anyhow::Result;
use rand::rngs::StdRng;

use atlas_lib::flashcards::FlashcardRun;
use atlas_lib::quiz::QuizSession;

use crate::app::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Flashcards,
    Quiz,
    Progress,
    ConfirmReset,
}

pub struct TuiState {
    pub app: App,
    pub view: View,

    // Study state
    pub session: QuizSession<StdRng>,
    pub flashcards: FlashcardRun<StdRng>,

    // Progress list scroll offset
    pub progress_scroll: usize,

    pub flash_message: Option<String>,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Result<Self> {
        let session = app.session()?;
        let flashcards = FlashcardRun::new(&app.catalog, app.rng());

        Ok(Self {
            app,
            view: View::Flashcards,
            session,
            flashcards,
            progress_scroll: 0,
            flash_message: None,
            quit: false,
        })
    }

    /// Cycle through the study views
    pub fn next_view(&mut self) {
        self.view = match self.view {
            View::Flashcards => View::Quiz,
            View::Quiz => View::Progress,
            View::Progress => View::Flashcards,
            View::ConfirmReset => View::Progress,
        };
    }

    pub fn quiz_answer(&mut self, option_index: usize) {
        let option = match self.session.view() {
            atlas_lib::quiz::SessionView::Presenting { question, .. } => {
                question.options.get(option_index).cloned()
            }
            _ => None,
        };

        if let Some(option) = option {
            if let Err(err) = self.session.answer(&option) {
                self.flash_message = Some(format!("Error: {}", err));
            }
        }
    }

    pub fn quiz_advance(&mut self) {
        if let Err(err) = self.session.advance() {
            self.flash_message = Some(format!("Error: {}", err));
        }
    }

    pub fn confirm_reset(&mut self) {
        match self.session.reset_progress() {
            Ok(()) => self.flash_message = Some("Progress cleared".to_string()),
            Err(err) => self.flash_message = Some(format!("Error: {}", err)),
        }
        self.view = View::Quiz;
    }

    pub fn progress_scroll_down(&mut self) {
        let max = self.app.catalog.len().saturating_sub(1);
        if self.progress_scroll < max {
            self.progress_scroll += 1;
        }
    }

    pub fn progress_scroll_up(&mut self) {
        self.progress_scroll = self.progress_scroll.saturating_sub(1);
    }
}
