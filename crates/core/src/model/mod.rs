mod credentials;
mod ids;
mod preferences;
pub mod query;
mod translation;
mod user;
mod vocabulary;

pub use ids::{ParseIdError, QuizRecordId, UserId, VocabularyId};

pub use credentials::{CredentialsError, LoginCredentials, MIN_PASSWORD_LEN, SignupCredentials};
pub use preferences::{PreferencesDraft, PreferencesError, UserPreferences};
pub use query::{FilterScope, VocabularyQuery};
pub use translation::{
    Language, ParseDirectionError, TranslationDirection, TranslationRequest, TranslationResult,
    WordBreakdown,
};
pub use user::{InterfaceLanguage, SubscriptionPlan, User};
pub use vocabulary::{Difficulty, PartOfSpeech, VocabularyDraft, VocabularyEntry, VocabularyError};
