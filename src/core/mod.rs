pub mod generator;
pub mod links;
pub mod prompt;
pub mod response;

pub use crate::domain::model::KeywordSet;
pub use crate::domain::ports::{ConfigProvider, KeywordSource};
pub use crate::utils::error::Result;
