pub mod layout;
mod quiz;
mod summary;
pub mod theme;

pub use layout::{calculate_progress_segments, calculate_quiz_chunks, calculate_summary_chunks};
pub use quiz::{draw_finish_confirmation, draw_quit_confirmation, draw_quiz};
pub use summary::{draw_review, draw_summary};
pub use theme::Palette;

use crate::models::{AppState, QuizSession};
use ratatui::Frame;

/// Draws the screen for `app_state`. Dialogs are layered over the quiz.
pub fn draw(f: &mut Frame, session: &QuizSession, app_state: AppState) {
    match app_state {
        AppState::Quiz => draw_quiz(f, session),
        AppState::FinishConfirm => {
            draw_quiz(f, session);
            draw_finish_confirmation(f, session);
        }
        AppState::QuitConfirm => {
            draw_quiz(f, session);
            draw_quit_confirmation(f, session);
        }
        AppState::Summary => draw_summary(f, session),
        AppState::Review => draw_review(f, session),
        AppState::Exit => {}
    }
}
