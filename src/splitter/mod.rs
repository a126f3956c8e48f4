mod document;
mod error;
mod recursive;


pub use document::Document;
pub use error::ConfigError;
pub use recursive::{RecursiveSplitter, SplitterBuilder};

/// Default maximum chunk size, in measured characters
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default number of characters shared between consecutive chunks
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Separator priority used when none is configured: paragraph breaks,
/// then line breaks, then spaces, then individual characters
pub const DEFAULT_SEPARATORS: &[&str] = &["\n\n", "\n", " ", ""];
