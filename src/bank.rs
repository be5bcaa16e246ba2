use crate::models::{LocalizedText, Question, QuizOption};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,
    #[error("duplicate question id {0}")]
    DuplicateQuestion(u32),
    #[error("question {0} has no options")]
    NoOptions(u32),
    #[error("question {question} repeats option id {option}")]
    DuplicateOption { question: u32, option: String },
    #[error("question {question} expects answer {answer}, which is not one of its options")]
    UnknownCorrectAnswer { question: u32, answer: String },
}

/// Ordered, immutable set of questions a session is built from.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen_ids = HashSet::new();
        for question in &questions {
            if !seen_ids.insert(question.id) {
                return Err(BankError::DuplicateQuestion(question.id));
            }
            if question.options.is_empty() {
                return Err(BankError::NoOptions(question.id));
            }

            let mut seen_options = HashSet::new();
            for option in &question.options {
                if !seen_options.insert(option.id.as_str()) {
                    return Err(BankError::DuplicateOption {
                        question: question.id,
                        option: option.id.clone(),
                    });
                }
            }
            if question.option(&question.correct_answer).is_none() {
                return Err(BankError::UnknownCorrectAnswer {
                    question: question.id,
                    answer: question.correct_answer.clone(),
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The questions compiled into the binary.
    pub fn builtin() -> Result<Self, BankError> {
        Self::new(vec![federalism_question(1), federalism_question(2)])
    }
}

fn option(id: &str, en: &str, hi: &str) -> QuizOption {
    QuizOption {
        id: id.to_string(),
        text: LocalizedText::new(en, hi),
    }
}

fn federalism_question(id: u32) -> Question {
    Question {
        id,
        text: LocalizedText::new(
            "Which one of the following is not a characteristic feature of Indian Federalism?",
            "निम्नलिखित में से कौन भारतीय संघवाद की विशेषता नहीं है?",
        ),
        options: vec![
            option(
                "A",
                "The federating units consented to form a union",
                "संघीय इकाइयों ने संघ बनाने की सहमति दी",
            ),
            option(
                "B",
                "Residuary powers vested with the Centre",
                "केंद्र के पास निहित अवशिष्ट शक्तियां",
            ),
            option(
                "C",
                "An extensive Union and Concurrent list",
                "एक विस्तृत संघ और समवर्ती सूची",
            ),
            option("D", "None of the above", "उपरोक्त में से कोई नहीं"),
        ],
        correct_answer: "A".to_string(),
    }
}
