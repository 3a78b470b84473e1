#![forbid(unsafe_code)]

pub mod repository;
pub mod seed;

pub use repository::{
    InMemoryRepository, NewQuizRecord, PreferencesRepository, QuizRecord, QuizResultRepository,
    Storage, StorageError, VocabularyRepository,
};
