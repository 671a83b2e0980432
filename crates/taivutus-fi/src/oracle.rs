// Disambiguation oracle: yes/no questions the classifier cannot answer from
// the surface form alone

use std::fmt;

use hashbrown::HashMap;

/// A question the declension classifier may ask about a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    /// Is the word native (as opposed to a loan)?
    Native,
    /// Is the word a noun (as opposed to an adjective)?
    Noun,
}

impl Question {
    /// The question fragment, as in "Is the word {fragment}?".
    pub fn as_str(self) -> &'static str {
        match self {
            Question::Native => "native",
            Question::Noun => "a noun",
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of answers to classifier questions.
///
/// Implemented for any `FnMut(Question) -> bool`, so a closure works as an
/// oracle. Calls block until an answer is available.
pub trait Oracle {
    fn ask(&mut self, question: Question) -> bool;
}

impl<F: FnMut(Question) -> bool> Oracle for F {
    fn ask(&mut self, question: Question) -> bool {
        self(question)
    }
}

/// Oracle with fixed answers, recording every question it is asked.
///
/// Questions without a stored answer get `fallback` (false unless set).
#[derive(Debug, Clone, Default)]
pub struct Answers {
    answers: HashMap<Question, bool>,
    fallback: bool,
    asked: Vec<Question>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an answer for `question`.
    pub fn with(mut self, question: Question, answer: bool) -> Self {
        self.answers.insert(question, answer);
        self
    }

    /// Answer used for questions without a stored answer.
    pub fn with_fallback(mut self, answer: bool) -> Self {
        self.fallback = answer;
        self
    }

    /// Stored answer for `question`, if any.
    pub fn get(&self, question: Question) -> Option<bool> {
        self.answers.get(&question).copied()
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[Question] {
        &self.asked
    }

    /// Forget the recorded questions, keeping the answers.
    pub fn reset(&mut self) {
        self.asked.clear();
    }
}

impl Oracle for Answers {
    fn ask(&mut self, question: Question) -> bool {
        self.asked.push(question);
        let answer = self.get(question).unwrap_or(self.fallback);
        tracing::trace!(%question, answer, "oracle answered");
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_an_oracle() {
        let mut count = 0;
        let mut oracle = |q: Question| {
            count += 1;
            q == Question::Noun
        };
        assert!(oracle.ask(Question::Noun));
        assert!(!oracle.ask(Question::Native));
        assert_eq!(count, 2);
    }

    #[test]
    fn answers_record_questions() {
        let mut oracle = Answers::new().with(Question::Native, true);
        assert!(oracle.ask(Question::Native));
        assert!(!oracle.ask(Question::Noun));
        assert_eq!(oracle.asked(), &[Question::Native, Question::Noun]);

        oracle.reset();
        assert!(oracle.asked().is_empty());
        assert_eq!(oracle.get(Question::Native), Some(true));
    }

    #[test]
    fn fallback_answer() {
        let mut oracle = Answers::new().with_fallback(true);
        assert!(oracle.ask(Question::Noun));
        assert_eq!(oracle.get(Question::Noun), None);
    }

    #[test]
    fn question_text() {
        assert_eq!(Question::Native.to_string(), "native");
        assert_eq!(Question::Noun.as_str(), "a noun");
    }
}
