use crate::bank::QuestionBank;
use crate::models::{AnswerRecord, Locale};
use serde::Serialize;

/// Final tallies handed from the session to the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionSnapshot {
    pub score: usize,
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub unattempted: usize,
}

impl CompletionSnapshot {
    /// Compares every recorded answer against its question's correct id.
    pub fn tally(bank: &QuestionBank, answers: &AnswerRecord) -> Self {
        let mut correct = 0;
        let mut incorrect = 0;
        for (index, answer) in answers {
            match bank.get(*index) {
                Some(question) if question.is_correct(answer) => correct += 1,
                Some(_) => incorrect += 1,
                None => {}
            }
        }
        let total = bank.len();
        Self {
            score: correct,
            total,
            correct,
            incorrect,
            unattempted: total.saturating_sub(correct + incorrect),
        }
    }

    pub fn attempted(&self) -> usize {
        self.correct + self.incorrect
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultSummary {
    pub score: usize,
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub unattempted: usize,
    pub percentage_correct: f64,
    pub percentage_incorrect: f64,
    pub percentage_unattempted: f64,
}

impl ResultSummary {
    pub fn rounded_correct(&self) -> u16 {
        round_percent(self.percentage_correct)
    }

    pub fn rounded_incorrect(&self) -> u16 {
        round_percent(self.percentage_incorrect)
    }

    pub fn rounded_unattempted(&self) -> u16 {
        round_percent(self.percentage_unattempted)
    }
}

/// `part / whole * 100`, or 0 when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn round_percent(value: f64) -> u16 {
    value.round().clamp(0.0, 100.0) as u16
}

pub fn present(snapshot: &CompletionSnapshot) -> ResultSummary {
    let attempted = snapshot.attempted();
    ResultSummary {
        score: snapshot.score,
        total: snapshot.total,
        correct: snapshot.correct,
        incorrect: snapshot.incorrect,
        unattempted: snapshot.unattempted,
        percentage_correct: percentage(snapshot.correct, attempted),
        percentage_incorrect: percentage(snapshot.incorrect, attempted),
        percentage_unattempted: percentage(snapshot.unattempted, snapshot.total),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    Unattempted,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Correct => "Correct",
            Verdict::Incorrect => "Incorrect",
            Verdict::Unattempted => "Unattempted",
        }
    }
}

/// One line of the answer review shown after the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub number: usize,
    pub prompt: String,
    pub selected: Option<String>,
    pub correct: String,
    pub verdict: Verdict,
}

pub fn review_rows(bank: &QuestionBank, answers: &AnswerRecord, locale: Locale) -> Vec<ReviewRow> {
    bank.questions()
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let selected = answers.get(&i);
            let verdict = match selected {
                None => Verdict::Unattempted,
                Some(answer) if question.is_correct(answer) => Verdict::Correct,
                Some(_) => Verdict::Incorrect,
            };
            let describe = |id: &str| match question.option(id) {
                Some(option) => format!("{}. {}", id, option.text.get(locale)),
                None => id.to_string(),
            };
            ReviewRow {
                number: i + 1,
                prompt: question.text.get(locale).to_string(),
                selected: selected.map(|id| describe(id.as_str())),
                correct: describe(question.correct_answer.as_str()),
                verdict,
            }
        })
        .collect()
}
