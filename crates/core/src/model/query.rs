use crate::model::VocabularyEntry;

/// Which slice of the vocabulary list to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterScope {
    #[default]
    All,
    Favorites,
    Category(String),
}

/// Search text plus scope, as used by the vocabulary list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyQuery {
    pub search: String,
    pub scope: FilterScope,
}

impl VocabularyQuery {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: FilterScope) -> Self {
        self.scope = scope;
        self
    }

    /// Arabic text is matched verbatim; the translation is matched case-insensitively.
    #[must_use]
    pub fn matches(&self, entry: &VocabularyEntry) -> bool {
        let needle = self.search.trim();
        let matches_search = needle.is_empty()
            || entry.arabic_text().contains(needle)
            || entry
                .translation()
                .to_lowercase()
                .contains(&needle.to_lowercase());

        if !matches_search {
            return false;
        }

        match &self.scope {
            FilterScope::All => true,
            FilterScope::Favorites => entry.is_favorite(),
            FilterScope::Category(name) => entry.category() == Some(name.as_str()),
        }
    }

    /// Filter entries, preserving source order.
    #[must_use]
    pub fn apply<'a>(&self, entries: &'a [VocabularyEntry]) -> Vec<&'a VocabularyEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}

/// Distinct categories in first-seen order.
#[must_use]
pub fn categories(entries: &[VocabularyEntry]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in entries.iter().filter_map(VocabularyEntry::category) {
        if !seen.iter().any(|existing| existing == category) {
            seen.push(category.to_string());
        }
    }
    seen
}
