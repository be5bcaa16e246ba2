use crate::models::{Locale, Theme};
use std::time::Duration;

pub const APP_TITLE: &str = "Quiz20";

/// Length of a quiz attempt in seconds.
pub const QUIZ_DURATION_SECS: u32 = 60;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub const LOG_FILE: &str = "quiz20.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    pub duration_secs: u32,
    pub locale: Locale,
    pub theme: Theme,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            duration_secs: QUIZ_DURATION_SECS,
            locale: Locale::En,
            theme: Theme::Dark,
        }
    }
}
