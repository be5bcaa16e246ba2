use crate::bank::QuestionBank;
use crate::results::CompletionSnapshot;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Hi,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Hi,
            Locale::Hi => Locale::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Text carried in both supported locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    pub en: String,
    pub hi: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, hi: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            hi: hi.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Hi => &self.hi,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub id: String,
    pub text: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: LocalizedText,
    pub options: Vec<QuizOption>,
    pub correct_answer: String,
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_answer == option_id
    }
}

/// Selected option id per question index. Absent = unattempted.
pub type AnswerRecord = BTreeMap<usize, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress,
    Completed(CompletionSnapshot),
}

/// Quiz state. Everything that decides the score is only reachable through
/// the methods in `session.rs`, so a completed session stays completed.
///
/// ```compile_fail
/// use quiz20::{QuestionBank, QuizConfig, QuizSession};
///
/// let mut session = QuizSession::new(QuestionBank::builtin().unwrap(), QuizConfig::default());
/// session.current_index = 5;
/// ```
#[derive(Debug)]
pub struct QuizSession {
    pub(crate) bank: QuestionBank,
    pub(crate) current_index: usize,
    pub(crate) answers: AnswerRecord,
    pub(crate) remaining_secs: u32,
    pub(crate) phase: SessionPhase,
    pub locale: Locale,
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    FinishConfirm,
    QuitConfirm,
    Summary,
    Review,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_toggle_round_trips() {
        assert_eq!(Locale::En.toggled(), Locale::Hi);
        assert_eq!(Locale::En.toggled().toggled(), Locale::En);
        assert_eq!(Locale::Hi.code(), "hi");
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_localized_text_lookup() {
        let text = LocalizedText::new("Hello", "नमस्ते");
        assert_eq!(text.get(Locale::En), "Hello");
        assert_eq!(text.get(Locale::Hi), "नमस्ते");
    }
}
