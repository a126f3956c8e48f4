// Public API exports
pub mod loader;
pub mod report;
pub mod splitter;

// Re-export main types for convenience
pub use loader::{read_text, LoadError};

pub use splitter::{
    ConfigError, Document, RecursiveSplitter, SplitterBuilder, DEFAULT_CHUNK_OVERLAP,
    DEFAULT_CHUNK_SIZE, DEFAULT_SEPARATORS,
};
