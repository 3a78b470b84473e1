use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::VocabularyEntry;
use crate::time::elapsed_seconds;

use super::session::AnswerRecord;

/// Percentage of `correct` out of `total`, rounded half up. Zero when `total` is zero.
#[must_use]
pub fn accuracy_percent(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total) as u128;
    let total = total as u128;
    // round(correct * 100 / total) without floats
    let rounded = (correct * 200 + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

/// Final statistics of a completed quiz. Computed once when the quiz reaches `Results`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    total: usize,
    correct_count: usize,
    incorrect_count: usize,
    accuracy_percent: u8,
    elapsed_seconds: u64,
    incorrect_words: Vec<VocabularyEntry>,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Build a summary from the answer log of a quiz.
    ///
    /// A `completed_at` earlier than `started_at` yields zero elapsed seconds.
    #[must_use]
    pub fn from_answers(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        answers: &[AnswerRecord],
    ) -> Self {
        let total = answers.len();
        let correct_count = answers.iter().filter(|record| record.correct).count();
        let incorrect_words = answers
            .iter()
            .filter(|record| !record.correct)
            .map(|record| record.entry.clone())
            .collect();

        Self {
            total,
            correct_count,
            incorrect_count: total - correct_count,
            accuracy_percent: accuracy_percent(correct_count, total),
            elapsed_seconds: elapsed_seconds(started_at, completed_at),
            incorrect_words,
            started_at,
            completed_at,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.incorrect_count
    }

    #[must_use]
    pub fn accuracy_percent(&self) -> u8 {
        self.accuracy_percent
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Words answered incorrectly, in the order they were shown.
    #[must_use]
    pub fn incorrect_words(&self) -> &[VocabularyEntry] {
        &self.incorrect_words
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// Elapsed time as `m:ss`.
    #[must_use]
    pub fn format_elapsed(&self) -> String {
        let mins = self.elapsed_seconds / 60;
        let secs = self.elapsed_seconds % 60;
        format!("{mins}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{VocabularyDraft, VocabularyId};
    use crate::time::fixed_now;
    use chrono::Duration;

    fn record(id: &str, correct: bool) -> AnswerRecord {
        let entry = VocabularyDraft::new(format!("كلمة{id}"), format!("word {id}"))
            .validate(VocabularyId::new(id), fixed_now())
            .unwrap();
        AnswerRecord { entry, correct }
    }

    #[test]
    fn accuracy_rounds_half_up_and_guards_empty() {
        assert_eq!(accuracy_percent(0, 0), 0);
        assert_eq!(accuracy_percent(3, 5), 60);
        assert_eq!(accuracy_percent(1, 3), 33);
        assert_eq!(accuracy_percent(2, 3), 67);
        assert_eq!(accuracy_percent(1, 8), 13);
        assert_eq!(accuracy_percent(5, 5), 100);
    }

    #[test]
    fn summary_counts_and_keeps_incorrect_order() {
        let now = fixed_now();
        let answers = vec![
            record("1", true),
            record("2", false),
            record("3", true),
            record("4", false),
        ];
        let summary = QuizSummary::from_answers(now, now + Duration::seconds(75), &answers);

        assert_eq!(summary.total(), 4);
        assert_eq!(summary.correct_count() + summary.incorrect_count(), 4);
        assert_eq!(summary.accuracy_percent(), 50);
        let missed: Vec<_> = summary
            .incorrect_words()
            .iter()
            .map(|e| e.id().as_str())
            .collect();
        assert_eq!(missed, vec!["2", "4"]);
        assert_eq!(summary.format_elapsed(), "1:15");
    }

    #[test]
    fn empty_answers_yield_zero_accuracy() {
        let now = fixed_now();
        let summary = QuizSummary::from_answers(now, now, &[]);
        assert_eq!(summary.accuracy_percent(), 0);
        assert_eq!(summary.elapsed_seconds(), 0);
    }
}
