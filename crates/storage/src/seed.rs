//! Demo vocabulary used by the in-memory storage and the terminal app.

use chrono::{DateTime, Duration, Utc};
use daftar_core::model::{PartOfSpeech, VocabularyDraft, VocabularyEntry, VocabularyId};

struct SeedWord {
    id: &'static str,
    arabic: &'static str,
    translation: &'static str,
    root: Option<&'static str>,
    part_of_speech: PartOfSpeech,
    example: (&'static str, &'static str),
    category: &'static str,
    difficulty: u8,
    favorite: bool,
    age_days: i64,
}

const SEED_WORDS: [SeedWord; 5] = [
    SeedWord {
        id: "1",
        arabic: "كتاب",
        translation: "Book",
        root: Some("ك-ت-ب"),
        part_of_speech: PartOfSpeech::Noun,
        example: ("هذا كتاب جميل", "This is a beautiful book"),
        category: "Education",
        difficulty: 2,
        favorite: true,
        age_days: 0,
    },
    SeedWord {
        id: "2",
        arabic: "مرحبا",
        translation: "Hello",
        root: None,
        part_of_speech: PartOfSpeech::Interjection,
        example: ("مرحبا، كيف حالك؟", "Hello, how are you?"),
        category: "Greetings",
        difficulty: 1,
        favorite: false,
        age_days: 5,
    },
    SeedWord {
        id: "3",
        arabic: "شكرا",
        translation: "Thank you",
        root: None,
        part_of_speech: PartOfSpeech::Interjection,
        example: ("شكرا جزيلا", "Thank you very much"),
        category: "Greetings",
        difficulty: 1,
        favorite: true,
        age_days: 7,
    },
    SeedWord {
        id: "4",
        arabic: "ماء",
        translation: "Water",
        root: Some("م-و-ه"),
        part_of_speech: PartOfSpeech::Noun,
        example: ("أريد كوب ماء", "I want a glass of water"),
        category: "Food & Drink",
        difficulty: 2,
        favorite: false,
        age_days: 10,
    },
    SeedWord {
        id: "5",
        arabic: "يكتب",
        translation: "He writes",
        root: Some("ك-ت-ب"),
        part_of_speech: PartOfSpeech::Verb,
        example: ("هو يكتب رسالة", "He writes a letter"),
        category: "Actions",
        difficulty: 3,
        favorite: false,
        age_days: 12,
    },
];

/// Five starter words, newest first, created relative to `now`.
#[must_use]
pub fn demo_vocabulary(now: DateTime<Utc>) -> Vec<VocabularyEntry> {
    SEED_WORDS
        .iter()
        .filter_map(|word| {
            let mut draft = VocabularyDraft::new(word.arabic, word.translation)
                .with_part_of_speech(word.part_of_speech)
                .with_example(word.example.0, word.example.1)
                .with_category(word.category)
                .with_difficulty(word.difficulty)
                .favorite(word.favorite);
            if let Some(root) = word.root {
                draft = draft.with_root(root);
            }
            match draft.validate(VocabularyId::new(word.id), now - Duration::days(word.age_days)) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log::warn!("skipping seed word {}: {err}", word.id);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use daftar_core::time::fixed_now;

    #[test]
    fn seed_words_all_validate() {
        let entries = demo_vocabulary(fixed_now());
        assert_eq!(entries.len(), SEED_WORDS.len());
        assert_eq!(entries[0].arabic_text(), "كتاب");
        assert_eq!(entries[4].root(), Some("ك-ت-ب"));
    }
}
