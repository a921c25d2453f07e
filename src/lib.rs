pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::generator::GeminiClient;
pub use crate::core::links::{search_links, search_url, SearchPlatform};
pub use domain::model::KeywordSet;
pub use domain::ports::{ConfigProvider, KeywordSource};
pub use utils::error::{FinderError, Result};
