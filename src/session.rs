use crate::bank::QuestionBank;
use crate::config::QuizConfig;
use crate::logger;
use crate::models::{AnswerRecord, AppState, Question, QuizSession, SessionPhase};
use crate::results::{present, CompletionSnapshot};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl QuizSession {
    pub fn new(bank: QuestionBank, config: QuizConfig) -> Self {
        Self {
            bank,
            current_index: 0,
            answers: AnswerRecord::new(),
            remaining_secs: config.duration_secs,
            phase: SessionPhase::InProgress,
            locale: config.locale,
            theme: config.theme,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn current_question(&self) -> &Question {
        &self.bank.questions()[self.current_index]
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.answers.get(&self.current_index).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, SessionPhase::Completed(_))
    }

    /// Final tallies, available once the session has completed.
    pub fn snapshot(&self) -> Option<CompletionSnapshot> {
        match self.phase {
            SessionPhase::Completed(snapshot) => Some(snapshot),
            SessionPhase::InProgress => None,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_completed() && self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_completed() && self.current_index < self.bank.len().saturating_sub(1)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index == self.bank.len().saturating_sub(1)
    }

    pub fn select_option(&mut self, option_id: &str) {
        if self.is_completed() {
            return;
        }
        if self.current_question().option(option_id).is_none() {
            logger::log(&format!(
                "Ignoring unknown option {} for question {}",
                option_id,
                self.current_index + 1
            ));
            return;
        }
        logger::log(&format!(
            "Question {}: selected {}",
            self.current_index + 1,
            option_id
        ));
        self.answers
            .insert(self.current_index, option_id.to_string());
    }

    pub fn next(&mut self) {
        if self.can_go_next() {
            self.current_index += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.can_go_previous() {
            self.current_index -= 1;
        }
    }

    pub fn toggle_language(&mut self) {
        self.locale = self.locale.toggled();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Advances the countdown by one second, completing the session at zero.
    pub fn tick(&mut self) {
        if self.is_completed() {
            return;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            logger::log("Time is up");
            self.complete();
        }
    }

    pub fn complete(&mut self) {
        if self.is_completed() {
            return;
        }
        let snapshot = CompletionSnapshot::tally(&self.bank, &self.answers);
        match serde_json::to_string(&present(&snapshot)) {
            Ok(json) => logger::log(&format!("Quiz complete: {}", json)),
            Err(e) => logger::log(&format!("Quiz complete (summary not serialized: {})", e)),
        }
        self.phase = SessionPhase::Completed(snapshot);
    }
}

/// Moves quiz-side screens to the summary once the session has completed.
pub fn sync_app_state(session: &QuizSession, app_state: &mut AppState) {
    if session.is_completed()
        && matches!(
            *app_state,
            AppState::Quiz | AppState::FinishConfirm | AppState::QuitConfirm
        )
    {
        *app_state = AppState::Summary;
    }
}

fn option_for_key(session: &QuizSession, c: char) -> Option<String> {
    let options = &session.current_question().options;
    if let Some(digit) = c.to_digit(10) {
        let position = (digit as usize).checked_sub(1)?;
        return options.get(position).map(|o| o.id.clone());
    }
    options
        .iter()
        .find(|o| o.id.eq_ignore_ascii_case(&c.to_string()))
        .map(|o| o.id.clone())
}

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => *app_state = AppState::Exit,
            KeyCode::Char('l') => session.toggle_language(),
            KeyCode::Char('t') => session.toggle_theme(),
            KeyCode::Char('f') => *app_state = AppState::FinishConfirm,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => *app_state = AppState::QuitConfirm,
        KeyCode::Left | KeyCode::Up => session.previous(),
        KeyCode::Right | KeyCode::Down => session.next(),
        KeyCode::Enter => {
            if session.is_last_question() {
                *app_state = AppState::FinishConfirm;
            } else {
                session.next();
            }
        }
        KeyCode::Char(c) => {
            if let Some(option_id) = option_for_key(session, c) {
                session.select_option(&option_id);
            }
        }
        _ => {}
    }
}

pub fn handle_finish_confirm_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            *app_state = AppState::Exit;
        }
        KeyCode::Char('y') | KeyCode::Enter => {
            session.complete();
            *app_state = AppState::Summary;
        }
        KeyCode::Char('n') | KeyCode::Esc => *app_state = AppState::Quiz,
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            *app_state = AppState::Exit;
        }
        KeyCode::Char('y') => *app_state = AppState::Exit,
        KeyCode::Char('n') | KeyCode::Esc => *app_state = AppState::Quiz,
        _ => {}
    }
}

/// Input on the result and review screens. Only display toggles and
/// screen changes are possible here.
pub fn handle_summary_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => *app_state = AppState::Exit,
            KeyCode::Char('l') => session.toggle_language(),
            KeyCode::Char('t') => session.toggle_theme(),
            _ => {}
        }
        return;
    }

    match (*app_state, key.code) {
        (AppState::Summary, KeyCode::Char('a')) => *app_state = AppState::Review,
        (AppState::Summary, KeyCode::Esc | KeyCode::Char('q')) => *app_state = AppState::Exit,
        (AppState::Review, KeyCode::Esc | KeyCode::Char('a')) => *app_state = AppState::Summary,
        (AppState::Review, KeyCode::Char('q')) => *app_state = AppState::Exit,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Locale, LocalizedText, QuizOption, Theme};

    fn question(id: u32, correct: &str) -> Question {
        Question {
            id,
            text: LocalizedText::new(format!("Question {}", id), format!("प्रश्न {}", id)),
            options: ["A", "B", "C", "D"]
                .iter()
                .map(|o| QuizOption {
                    id: o.to_string(),
                    text: LocalizedText::new(*o, *o),
                })
                .collect(),
            correct_answer: correct.to_string(),
        }
    }

    fn create_test_session(count: u32) -> QuizSession {
        let bank = QuestionBank::new((1..=count).map(|id| question(id, "A")).collect()).unwrap();
        QuizSession::new(bank, QuizConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_new_session_starts_in_progress() {
        let session = create_test_session(2);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.remaining_secs(), 60);
        assert_eq!(session.phase, SessionPhase::InProgress);
        assert!(session.answers().is_empty());
        assert!(session.snapshot().is_none());
    }

    #[test]
    fn test_previous_at_first_question_stays() {
        let mut session = create_test_session(2);
        session.previous();
        assert_eq!(session.current_index(), 0);
        assert!(!session.can_go_previous());
    }

    #[test]
    fn test_next_at_last_question_stays() {
        let mut session = create_test_session(2);
        session.next();
        assert_eq!(session.current_index(), 1);
        session.next();
        assert_eq!(session.current_index(), 1);
        assert!(!session.can_go_next());
        assert!(session.is_last_question());
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut session = create_test_session(3);
        let moves = [true, true, true, true, false, false, false, false, true];
        for forward in moves {
            if forward {
                session.next();
            } else {
                session.previous();
            }
            assert!(session.current_index() < 3);
        }
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_single_question_navigation_is_noop() {
        let mut session = create_test_session(1);
        session.next();
        session.previous();
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_select_option_overwrites_current_answer() {
        let mut session = create_test_session(2);
        session.select_option("B");
        assert_eq!(session.selected_option(), Some("B"));
        session.select_option("C");
        assert_eq!(session.selected_option(), Some("C"));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_select_unknown_option_ignored() {
        let mut session = create_test_session(2);
        session.select_option("Z");
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_answers_survive_navigation() {
        let mut session = create_test_session(2);
        session.select_option("A");
        session.next();
        assert_eq!(session.selected_option(), None);
        session.select_option("D");
        session.previous();
        assert_eq!(session.selected_option(), Some("A"));
        assert_eq!(session.answers().get(&1).map(String::as_str), Some("D"));
    }

    #[test]
    fn test_score_counts_matches() {
        let mut session = create_test_session(2);
        session.select_option("A");
        session.next();
        session.select_option("B");
        session.complete();

        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.score, 1);
        assert_eq!(snapshot.correct, 1);
        assert_eq!(snapshot.incorrect, 1);
        assert_eq!(snapshot.unattempted, 0);
        assert_eq!(snapshot.total, 2);
    }

    #[test]
    fn test_score_matches_definition_for_mixed_answers() {
        let bank = QuestionBank::new(vec![
            question(1, "A"),
            question(2, "C"),
            question(3, "D"),
            question(4, "B"),
        ])
        .unwrap();
        let mut session = QuizSession::new(bank, QuizConfig::default());
        for pick in ["A", "B", "D"] {
            session.select_option(pick);
            session.next();
        }
        session.complete();

        let expected = session
            .answers
            .iter()
            .filter(|(i, a)| session.bank().questions()[**i].correct_answer == **a)
            .count();
        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.score, expected);
        assert_eq!(snapshot.score, 2);
        assert_eq!(snapshot.unattempted, 1);
    }

    #[test]
    fn test_mutations_rejected_after_completion() {
        let mut session = create_test_session(3);
        session.select_option("A");
        session.complete();

        let answers_before = session.answers().clone();
        session.select_option("B");
        session.next();
        session.previous();
        assert_eq!(session.answers(), &answers_before);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut session = create_test_session(2);
        session.select_option("A");
        session.complete();
        let first = session.snapshot();
        session.complete();
        assert_eq!(session.snapshot(), first);
    }

    #[test]
    fn test_completed_session_cannot_be_reopened_through_public_api() {
        let mut session = create_test_session(3);
        session.select_option("B");
        session.next();
        session.complete();
        let snapshot = session.snapshot();
        let answers = session.answers().clone();
        let mut app_state = AppState::Summary;

        for _ in 0..5 {
            session.next();
            session.previous();
            session.select_option("A");
            session.tick();
            session.complete();
            handle_quiz_input(&mut session, key(KeyCode::Char('a')), &mut app_state);
            handle_quiz_input(&mut session, key(KeyCode::Right), &mut app_state);
            handle_finish_confirm_input(&mut session, key(KeyCode::Char('y')), &mut app_state);
        }

        assert!(session.is_completed());
        assert_eq!(session.snapshot(), snapshot);
        assert_eq!(session.snapshot().map(|s| s.score), Some(0));
        assert_eq!(session.answers(), &answers);
        assert_eq!(session.current_index(), 1);
        assert!(session.current_index() < session.bank().len());
        assert_eq!(session.current_question().id, 2);
    }

    #[test]
    fn test_tick_decrements_by_one() {
        let mut session = create_test_session(2);
        for expected in (55..60).rev() {
            session.tick();
            assert_eq!(session.remaining_secs(), expected);
        }
        assert!(!session.is_completed());
    }

    #[test]
    fn test_timer_expiry_completes_with_nothing_answered() {
        let mut session = create_test_session(2);
        for _ in 0..60 {
            session.tick();
        }
        assert_eq!(session.remaining_secs(), 0);
        let snapshot = session.snapshot().unwrap();
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.unattempted, 2);

        let summary = crate::results::present(&snapshot);
        assert_eq!(summary.percentage_correct, 0.0);
    }

    #[test]
    fn test_ticks_after_completion_are_noops() {
        let mut session = QuizSession::new(
            QuestionBank::new(vec![question(1, "A")]).unwrap(),
            QuizConfig {
                duration_secs: 2,
                ..QuizConfig::default()
            },
        );
        session.tick();
        session.select_option("A");
        session.tick();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.map(|s| s.score), Some(1));

        session.tick();
        session.tick();
        assert_eq!(session.remaining_secs(), 0);
        assert_eq!(session.snapshot(), snapshot);
    }

    #[test]
    fn test_toggles_do_not_affect_score() {
        let mut session = create_test_session(1);
        session.select_option("A");
        session.toggle_language();
        session.toggle_theme();
        assert_eq!(session.locale, Locale::Hi);
        assert_eq!(session.theme, Theme::Light);
        session.complete();
        session.toggle_language();
        assert_eq!(session.locale, Locale::En);
        assert_eq!(session.snapshot().map(|s| s.score), Some(1));
    }

    #[test]
    fn test_letter_and_digit_keys_select_options() {
        let mut session = create_test_session(2);
        let mut app_state = AppState::Quiz;

        handle_quiz_input(&mut session, key(KeyCode::Char('b')), &mut app_state);
        assert_eq!(session.selected_option(), Some("B"));

        handle_quiz_input(&mut session, key(KeyCode::Char('4')), &mut app_state);
        assert_eq!(session.selected_option(), Some("D"));

        handle_quiz_input(&mut session, key(KeyCode::Char('0')), &mut app_state);
        handle_quiz_input(&mut session, key(KeyCode::Char('9')), &mut app_state);
        handle_quiz_input(&mut session, key(KeyCode::Char('x')), &mut app_state);
        assert_eq!(session.selected_option(), Some("D"));
        assert_eq!(app_state, AppState::Quiz);
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut session = create_test_session(2);
        let mut app_state = AppState::Quiz;

        handle_quiz_input(&mut session, key(KeyCode::Right), &mut app_state);
        assert_eq!(session.current_index(), 1);
        handle_quiz_input(&mut session, key(KeyCode::Down), &mut app_state);
        assert_eq!(session.current_index(), 1);
        handle_quiz_input(&mut session, key(KeyCode::Up), &mut app_state);
        assert_eq!(session.current_index(), 0);
        handle_quiz_input(&mut session, key(KeyCode::Left), &mut app_state);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_ctrl_keys_toggle_display() {
        let mut session = create_test_session(1);
        let mut app_state = AppState::Quiz;

        handle_quiz_input(&mut session, ctrl('l'), &mut app_state);
        assert_eq!(session.locale, Locale::Hi);
        handle_quiz_input(&mut session, ctrl('t'), &mut app_state);
        assert_eq!(session.theme, Theme::Light);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_enter_on_last_question_asks_to_finish() {
        let mut session = create_test_session(2);
        let mut app_state = AppState::Quiz;

        handle_quiz_input(&mut session, key(KeyCode::Enter), &mut app_state);
        assert_eq!(session.current_index(), 1);
        assert_eq!(app_state, AppState::Quiz);

        handle_quiz_input(&mut session, key(KeyCode::Enter), &mut app_state);
        assert_eq!(app_state, AppState::FinishConfirm);

        handle_finish_confirm_input(&mut session, key(KeyCode::Char('n')), &mut app_state);
        assert_eq!(app_state, AppState::Quiz);
        assert!(!session.is_completed());

        handle_quiz_input(&mut session, ctrl('f'), &mut app_state);
        handle_finish_confirm_input(&mut session, key(KeyCode::Char('y')), &mut app_state);
        assert_eq!(app_state, AppState::Summary);
        assert!(session.is_completed());
    }

    #[test]
    fn test_quit_confirmation() {
        let mut session = create_test_session(1);
        let mut app_state = AppState::Quiz;

        handle_quiz_input(&mut session, key(KeyCode::Esc), &mut app_state);
        assert_eq!(app_state, AppState::QuitConfirm);
        handle_quit_confirm_input(key(KeyCode::Esc), &mut app_state);
        assert_eq!(app_state, AppState::Quiz);
        handle_quiz_input(&mut session, key(KeyCode::Esc), &mut app_state);
        handle_quit_confirm_input(key(KeyCode::Char('y')), &mut app_state);
        assert_eq!(app_state, AppState::Exit);
    }

    #[test]
    fn test_ctrl_c_exits_from_quiz() {
        let mut session = create_test_session(1);
        let mut app_state = AppState::Quiz;
        handle_quiz_input(&mut session, ctrl('c'), &mut app_state);
        assert_eq!(app_state, AppState::Exit);
    }

    #[test]
    fn test_timer_expiry_during_dialog_moves_to_summary() {
        let mut session = create_test_session(1);
        let mut app_state = AppState::FinishConfirm;
        sync_app_state(&session, &mut app_state);
        assert_eq!(app_state, AppState::FinishConfirm);

        session.complete();
        sync_app_state(&session, &mut app_state);
        assert_eq!(app_state, AppState::Summary);

        let mut review = AppState::Review;
        sync_app_state(&session, &mut review);
        assert_eq!(review, AppState::Review);
    }

    #[test]
    fn test_summary_and_review_navigation() {
        let mut session = create_test_session(1);
        session.complete();
        let mut app_state = AppState::Summary;

        handle_summary_input(&mut session, key(KeyCode::Char('a')), &mut app_state);
        assert_eq!(app_state, AppState::Review);
        handle_summary_input(&mut session, key(KeyCode::Esc), &mut app_state);
        assert_eq!(app_state, AppState::Summary);
        handle_summary_input(&mut session, ctrl('l'), &mut app_state);
        assert_eq!(session.locale, Locale::Hi);
        handle_summary_input(&mut session, key(KeyCode::Char('q')), &mut app_state);
        assert_eq!(app_state, AppState::Exit);
    }
}
