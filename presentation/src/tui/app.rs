//! TUI application — terminal setup and the main event loop
//!
//! One key press is mapped to an action, applied to completion, then the
//! screen is redrawn. The [`Assessment`] inside [`TuiState`] is the only
//! mutable state, so there is nothing to synchronize.

use super::keys::map_key;
use super::state::TuiState;
use super::widgets::{HelpWidget, IntroWidget, QuestionWidget, ResultsWidget};
use bigfive_domain::{Assessment, ScoreSummary, ScoringError, Screen};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use thiserror::Error;

/// TUI failures
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    /// Only reachable if the flow's completeness invariant is broken
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Main TUI application
pub struct TuiApp {
    state: TuiState,
}

impl TuiApp {
    pub fn new(assessment: Assessment) -> TuiApp {
        TuiApp {
            state: TuiState::new(assessment),
        }
    }

    /// Run the questionnaire to completion.
    ///
    /// Returns the score summary if the user reached the result screen,
    /// `None` if they quit early.
    pub async fn run(mut self) -> Result<Option<ScoreSummary>, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<Option<ScoreSummary>, TuiError> {
        let mut events = EventStream::new();

        while !self.state.should_quit {
            terminal.draw(|frame| render(frame, &self.state))?;

            match events.next().await {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let action = map_key(key, self.state.assessment.screen());
                    self.state.apply(action)?;
                }
                // Resizes and other events just trigger the next redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            }
        }

        Ok(self.state.summary.take())
    }
}

fn render(frame: &mut Frame, state: &TuiState) {
    let area = frame.area();

    match state.assessment.screen() {
        Screen::Intro => {
            frame.render_widget(IntroWidget::new(state.assessment.total_items()), area);
        }
        Screen::Question(index) => {
            if let Some(item) = state.assessment.current_item() {
                frame.render_widget(
                    QuestionWidget::new(
                        item,
                        index,
                        state.assessment.total_items(),
                        state.assessment.answered(),
                        state.assessment.selected_rating(),
                    ),
                    area,
                );
            }
        }
        Screen::Result => {
            if let Some(summary) = &state.summary {
                frame.render_widget(ResultsWidget::new(summary), area);
            }
        }
    }

    if state.show_help {
        frame.render_widget(HelpWidget, area);
    }
}
