use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("chunk_size must be greater than zero")]
    ChunkSizeZero,

    #[error("chunk_overlap ({overlap}) must be smaller than chunk_size ({chunk_size})")]
    OverlapTooLarge { overlap: usize, chunk_size: usize },
}
