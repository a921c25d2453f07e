use crate::domain::model::KeywordSet;
use crate::utils::error::{FinderError, Result};

/// Parses the raw text payload returned by the backend into a [`KeywordSet`].
///
/// Entries pass through untouched. Malformed JSON and JSON missing any of the
/// five required fields both classify as a validation failure, distinct from
/// transport problems.
pub fn parse_keyword_set(text: &str) -> Result<KeywordSet> {
    serde_json::from_str(text).map_err(|e| {
        FinderError::validation(format!("response is not a valid keyword set: {}", e))
    })
}
