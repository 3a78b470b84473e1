use thiserror::Error;

use crate::model::{CredentialsError, PreferencesError, VocabularyError};
use crate::quiz::{QuizConfigError, QuizError};

/// Umbrella error for callers that do not care which domain rule failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
    #[error(transparent)]
    QuizConfig(#[from] QuizConfigError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PreferencesDraft, VocabularyDraft, VocabularyId};
    use crate::quiz::{QuizConfiguration, QuizMode};
    use crate::time::fixed_now;

    fn build(font_size: u8, word_count: usize) -> Result<(), Error> {
        PreferencesDraft {
            font_size,
            ..PreferencesDraft::default()
        }
        .validate()?;
        QuizConfiguration::new(word_count, QuizMode::default())?;
        VocabularyDraft::new("", "Book").validate(VocabularyId::new("1"), fixed_now())?;
        Ok(())
    }

    #[test]
    fn domain_errors_convert_with_question_mark() {
        assert!(matches!(build(13, 5), Err(Error::Preferences(_))));
        assert!(matches!(build(16, 0), Err(Error::QuizConfig(QuizConfigError::ZeroWordCount))));
        assert!(matches!(
            build(16, 5),
            Err(Error::Vocabulary(VocabularyError::EmptyArabicText))
        ));
    }
}
