use crate::domain::model::KeywordSet;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only configuration injected into the generator. The credential is
/// explicit here so tests can supply a fake key or simulate its absence
/// without touching process-wide state.
pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> Option<&str>;
    fn model(&self) -> &str;
    fn api_base(&self) -> &str;
}

#[async_trait]
pub trait KeywordSource: Send + Sync {
    /// Turn a free-text client description into categorized keywords with a
    /// single generation request. The caller rejects empty descriptions
    /// before calling; this operation does not validate emptiness itself.
    async fn generate_keywords(&self, description: &str) -> Result<KeywordSet>;
}
