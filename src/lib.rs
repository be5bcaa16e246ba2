pub mod bank;
pub mod config;
pub mod logger;
pub mod models;
pub mod results;
pub mod session;
pub mod timer;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use bank::{BankError, QuestionBank};
pub use config::QuizConfig;
pub use models::{AppState, Locale, LocalizedText, Question, QuizOption, QuizSession, Theme};
pub use results::{present, CompletionSnapshot, ResultSummary};
pub use session::{
    handle_finish_confirm_input, handle_quit_confirm_input, handle_quiz_input,
    handle_summary_input, sync_app_state,
};
pub use timer::CountdownTimer;
