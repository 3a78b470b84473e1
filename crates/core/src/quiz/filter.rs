use std::cmp::Reverse;

use crate::model::{Difficulty, VocabularyEntry};

/// Narrows or reorders the vocabulary before words are picked for a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizFilter {
    Favorites,
    Category(String),
    Difficulty(Difficulty),
    /// Newest entries first.
    Recent,
}

impl QuizFilter {
    fn keeps(&self, entry: &VocabularyEntry) -> bool {
        match self {
            Self::Favorites => entry.is_favorite(),
            Self::Category(name) => entry.category() == Some(name.as_str()),
            Self::Difficulty(level) => entry.difficulty() == *level,
            Self::Recent => true,
        }
    }
}

/// Apply every filter (logical AND). Order is preserved unless `Recent` is present.
#[must_use]
pub fn apply_filters(entries: Vec<VocabularyEntry>, filters: &[QuizFilter]) -> Vec<VocabularyEntry> {
    let mut kept: Vec<VocabularyEntry> = entries
        .into_iter()
        .filter(|entry| filters.iter().all(|filter| filter.keeps(entry)))
        .collect();

    if filters.contains(&QuizFilter::Recent) {
        // stable: ties keep source order
        kept.sort_by_key(|entry| Reverse(entry.created_at()));
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{VocabularyDraft, VocabularyId};
    use crate::time::fixed_now;
    use chrono::Duration;

    fn entry(id: &str, difficulty: u8, fav: bool, age_days: i64) -> VocabularyEntry {
        VocabularyDraft::new(format!("كلمة{id}"), format!("word {id}"))
            .with_difficulty(difficulty)
            .with_category(if fav { "Greetings" } else { "Actions" })
            .favorite(fav)
            .validate(VocabularyId::new(id), fixed_now() - Duration::days(age_days))
            .unwrap()
    }

    fn ids(entries: &[VocabularyEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id().as_str()).collect()
    }

    #[test]
    fn no_filters_keeps_everything_in_order() {
        let source = vec![entry("1", 1, true, 3), entry("2", 2, false, 1)];
        assert_eq!(ids(&apply_filters(source, &[])), vec!["1", "2"]);
    }

    #[test]
    fn filters_combine_with_and() {
        let source = vec![
            entry("1", 1, true, 3),
            entry("2", 2, true, 2),
            entry("3", 2, false, 1),
        ];
        let filters = [
            QuizFilter::Favorites,
            QuizFilter::Difficulty(Difficulty::new(2).unwrap()),
        ];
        assert_eq!(ids(&apply_filters(source, &filters)), vec!["2"]);
    }

    #[test]
    fn recent_orders_newest_first() {
        let source = vec![
            entry("old", 1, false, 10),
            entry("new", 1, false, 0),
            entry("mid", 1, false, 5),
        ];
        let filtered = apply_filters(source, &[QuizFilter::Recent]);
        assert_eq!(ids(&filtered), vec!["new", "mid", "old"]);
    }

    #[test]
    fn category_filter_matches_exact_name() {
        let source = vec![entry("1", 1, true, 0), entry("2", 1, false, 0)];
        let filtered = apply_filters(source, &[QuizFilter::Category("Actions".into())]);
        assert_eq!(ids(&filtered), vec!["2"]);
    }
}
