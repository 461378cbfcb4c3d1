//! TUI application state
//!
//! Single source of truth for everything the TUI renders: the domain
//! answering flow plus a thin display shell (help overlay, quit flag,
//! the computed summary once `result` is reached).

use super::keys::KeyAction;
use bigfive_application::ScoreAssessmentUseCase;
use bigfive_domain::{Assessment, ScoreSummary, ScoringError, Screen};

/// Central TUI state — owned by the event loop
pub struct TuiState {
    pub assessment: Assessment,
    /// Computed synchronously on entering `result`; cleared on restart
    pub summary: Option<ScoreSummary>,
    pub show_help: bool,
    pub should_quit: bool,
    scorer: ScoreAssessmentUseCase,
}

impl TuiState {
    pub fn new(assessment: Assessment) -> TuiState {
        TuiState {
            assessment,
            summary: None,
            show_help: false,
            should_quit: false,
            scorer: ScoreAssessmentUseCase::new(),
        }
    }

    /// Apply one key action to completion.
    ///
    /// Reaching `result` triggers scoring immediately; the flow's guards
    /// make the response set complete by then, so the scoring error only
    /// propagates if that structural invariant is ever broken.
    pub fn apply(&mut self, action: KeyAction) -> Result<(), ScoringError> {
        match action {
            KeyAction::Start => self.assessment.start(),
            KeyAction::Select(rating) => self.assessment.select(rating),
            KeyAction::Next => self.assessment.next(),
            KeyAction::Previous => self.assessment.previous(),
            KeyAction::Restart => {
                self.assessment.restart();
                self.summary = None;
            }
            KeyAction::ToggleHelp => self.show_help = !self.show_help,
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Ignore => {}
        }

        if self.assessment.screen() == Screen::Result && self.summary.is_none() {
            self.summary = Some(self.scorer.execute(&self.assessment)?);
        }
        Ok(())
    }
}
