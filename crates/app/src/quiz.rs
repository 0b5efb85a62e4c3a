//! Five-question mood quiz.

use catalog::{Movie, Mood, QUIZ_QUESTIONS, QuizQuestion};
use tracing::{info, warn};

use crate::error::QuizError;
use crate::service::MovieService;
use crate::store::Store;

/// Result screen of a submitted quiz
#[derive(Debug, Clone, PartialEq)]
pub struct QuizOutcome {
    pub mood: Mood,
    pub description: &'static str,
    pub recommendations: Vec<Movie>,
}

/// Answers collected so far and the question being shown
pub struct QuizSession {
    questions: &'static [QuizQuestion],
    answers: Vec<Option<&'static str>>,
    current: usize,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_questions(&QUIZ_QUESTIONS)
    }

    /// Quiz over a custom question set
    pub fn with_questions(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            answers: vec![None; questions.len()],
            current: 0,
        }
    }

    pub fn questions(&self) -> &'static [QuizQuestion] {
        self.questions
    }

    /// Zero-based index of the question being shown
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Answer recorded for the current question
    pub fn current_answer(&self) -> Option<&'static str> {
        self.answers.get(self.current).copied().flatten()
    }

    /// Record `symbol` as the answer to the current question, replacing any
    /// earlier choice
    pub fn select(&mut self, symbol: &str) -> Result<(), QuizError> {
        let Some(question) = self.current_question() else {
            return Ok(());
        };
        let option = question
            .option(symbol.trim())
            .ok_or_else(|| QuizError::UnknownOption {
                question: question.id,
                symbol: symbol.to_string(),
            })?;

        self.answers[self.current] = Some(option.value);
        Ok(())
    }

    /// Move to the next question. The current one must be answered; on the
    /// last question this stays put.
    pub fn next(&mut self) -> Result<(), QuizError> {
        if let Some(question) = self.current_question() {
            if self.current_answer().is_none() {
                return Err(QuizError::Unanswered {
                    question: question.id,
                });
            }
        }
        if !self.is_last() {
            self.current += 1;
        }
        Ok(())
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    /// Percent of the way through the quiz, counting the current question
    pub fn progress(&self) -> u8 {
        if self.questions.is_empty() {
            return 100;
        }
        ((self.current + 1) * 100 / self.questions.len()) as u8
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == self.questions.len()
    }

    pub fn answers(&self) -> &[Option<&'static str>] {
        &self.answers
    }

    /// Classify the answers and fetch recommendations for the mood.
    ///
    /// The mood is dispatched before the fetch, so it stays set even when
    /// the fetch fails.
    pub async fn submit(
        &self,
        service: &MovieService,
        store: &mut Store,
    ) -> Result<QuizOutcome, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::Incomplete {
                answered: self.answered(),
                total: self.questions.len(),
            });
        }

        let symbols: Vec<&str> = self.answers.iter().flatten().copied().collect();
        let mood = mood::predict_mood(&symbols);
        info!("Quiz answers {:?} classified as {}", symbols, mood);

        store.set_mood(mood);
        store.set_error(None);
        store.set_loading(true);
        let result = service.get_recommendations(mood, None).await;
        store.set_loading(false);

        match result {
            Ok(recommendations) => Ok(QuizOutcome {
                mood,
                description: mood::describe(mood),
                recommendations,
            }),
            Err(e) => {
                warn!("Quiz recommendations failed: {}", e);
                store.set_error(Some(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Clear every answer and return to the first question
    pub fn retake(&mut self) {
        self.answers.fill(None);
        self.current = 0;
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
