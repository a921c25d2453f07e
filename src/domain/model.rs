use serde::{Deserialize, Serialize};

/// Categorized stock-footage keywords produced by one generation call.
///
/// All five fields are required for the record to exist at all; any of them
/// may be an empty list. Entries are passed through from the backend exactly
/// as returned, with no trimming or deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    /// Directly visible subjects and actions ("man typing").
    pub literal: Vec<String>,
    /// Metaphors and abstract ideas ("success", "isolation").
    pub conceptual: Vec<String>,
    /// Mood and tone descriptors ("melancholic", "energetic").
    pub emotional: Vec<String>,
    /// Shot types and styles ("slow motion", "drone shot").
    pub technical: Vec<String>,
    /// Complete ready-to-paste search queries combining the other categories.
    #[serde(rename = "searchPhrases")]
    pub search_phrases: Vec<String>,
}

impl KeywordSet {
    /// Default query for marketplace search links: the first search phrase,
    /// falling back to the first literal keyword, then an empty string.
    pub fn primary_query(&self) -> &str {
        self.search_phrases
            .first()
            .or_else(|| self.literal.first())
            .map(String::as_str)
            .unwrap_or("")
    }
}
