pub mod client;
pub mod error;
pub mod options;
mod retry;

pub use client::SearchClient;
pub use error::ClientError;
pub use options::{SearchOptions, SearchType, TranslateKeyword};
