use super::{
    ConfigError, Document, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_SEPARATORS,
};

/// Recursive separator-aware text splitter
///
/// Splits a string into chunks of at most `chunk_size` measured characters,
/// preferring splits at higher-priority separators (paragraph breaks before
/// line breaks before spaces before raw character boundaries) and seeding
/// each new chunk with trailing context from the previous one. Configuration
/// is read-only after construction, so one splitter can be shared across
/// threads and reused for any number of inputs.
pub struct RecursiveSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    length_function: fn(&str) -> usize,
    separators: Vec<String>,
}

/// Mutable builder for configuring a splitter
pub struct SplitterBuilder {
    chunk_size: usize,
    chunk_overlap: usize,
    length_function: fn(&str) -> usize,
    separators: Vec<String>,
}

/// Measure text length in Unicode scalar values
fn char_count(text: &str) -> usize {
    text.chars().count()
}

impl SplitterBuilder {
    /// Create a builder with default parameters
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            length_function: char_count,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Set the maximum measured length of a chunk
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set how many trailing characters of a chunk reappear at the start
    /// of the next one
    pub fn chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    /// Replace the default character-count measure
    pub fn length_function(mut self, length_function: fn(&str) -> usize) -> Self {
        self.length_function = length_function;
        self
    }

    /// Replace the separator priority list, highest priority first.
    /// An empty string means character-level splitting and is the
    /// fallback of last resort.
    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the configuration and build the splitter
    pub fn build(self) -> Result<RecursiveSplitter, ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ChunkSizeZero);
        }

        // Overlap must leave room for fresh content in every chunk,
        // otherwise the merge loop cannot advance.
        if self.chunk_overlap >= self.chunk_size {
            return Err(ConfigError::OverlapTooLarge {
                overlap: self.chunk_overlap,
                chunk_size: self.chunk_size,
            });
        }

        Ok(RecursiveSplitter {
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
            length_function: self.length_function,
            separators: self.separators,
        })
    }
}

impl Default for SplitterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecursiveSplitter {
    /// Start configuring a splitter
    pub fn builder() -> SplitterBuilder {
        SplitterBuilder::new()
    }

    /// Maximum measured length of a chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Characters of trailing context shared between consecutive chunks
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split `text` into an ordered sequence of chunks.
    ///
    /// Every chunk's measured length is at most `chunk_size`, except when a
    /// single indivisible unit at the finest separator level is itself
    /// larger than `chunk_size`: such a unit is emitted whole rather than
    /// dropped or truncated, so the size bound is a target, not an absolute
    /// ceiling. An empty input yields no chunks.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        self.split_with(text, &self.separators)
    }

    /// Split each input and wrap every chunk in a [`Document`] with empty
    /// metadata, preserving order
    pub fn create_documents<'a, I>(&self, texts: I) -> Vec<Document>
    where
        I: IntoIterator<Item = &'a str>,
    {
        texts
            .into_iter()
            .flat_map(|text| self.split_text(text))
            .map(Document::new)
            .collect()
    }

    fn split_with(&self, text: &str, separators: &[String]) -> Vec<String> {
        let (separator, remaining) = select_separator(text, separators);
        let segments = split_segments(text, separator);

        let mut chunks = Vec::new();
        // Segments that fit individually, awaiting a greedy merge
        let mut pending: Vec<String> = Vec::new();

        for segment in segments {
            if (self.length_function)(&segment) <= self.chunk_size {
                pending.push(segment);
                continue;
            }

            // Flush merged chunks before the oversized segment so output
            // order follows input order.
            if !pending.is_empty() {
                self.merge_segments(&pending, &mut chunks);
                pending.clear();
            }

            if remaining.is_empty() {
                // Indivisible at the finest level: emit whole.
                chunks.push(segment);
            } else {
                chunks.extend(self.split_with(&segment, remaining));
            }
        }

        if !pending.is_empty() {
            self.merge_segments(&pending, &mut chunks);
        }

        chunks
    }

    /// Greedily pack fitting segments into chunks, seeding each new chunk
    /// with trailing context from the buffer that was just emitted
    fn merge_segments(&self, segments: &[String], chunks: &mut Vec<String>) {
        let mut buffer = String::new();
        let mut buffer_len = 0;

        for segment in segments {
            let segment_len = (self.length_function)(segment);

            if !buffer.is_empty() && buffer_len + segment_len > self.chunk_size {
                if let Some(chunk) = trim_chunk(&buffer) {
                    chunks.push(chunk);
                }
                buffer = self.overlap_seed(&buffer, segment_len);
                buffer_len = (self.length_function)(&buffer);
            }

            buffer.push_str(segment);
            buffer_len += segment_len;
        }

        if let Some(chunk) = trim_chunk(&buffer) {
            chunks.push(chunk);
        }
    }

    /// Trailing slice of an emitted buffer used to start the next chunk.
    ///
    /// The seed covers at most `chunk_overlap` measured characters and is
    /// shrunk further if needed so that seed plus the next segment still
    /// fits within `chunk_size`.
    fn overlap_seed(&self, emitted: &str, next_len: usize) -> String {
        if self.chunk_overlap == 0 {
            return String::new();
        }

        let mut seed_start = emitted.len();
        for (idx, _) in emitted.char_indices().rev() {
            let measured = (self.length_function)(&emitted[idx..]);
            if measured > self.chunk_overlap || measured + next_len > self.chunk_size {
                break;
            }
            seed_start = idx;
        }

        emitted[seed_start..].to_string()
    }
}

/// Pick the first separator that occurs in `text`; when none does, fall
/// back to the lowest-priority one. Returns the chosen separator and the
/// lower-priority separators after it.
fn select_separator<'a>(text: &str, separators: &'a [String]) -> (&'a str, &'a [String]) {
    for (i, candidate) in separators.iter().enumerate() {
        // The empty separator trivially occurs in any text.
        if text.contains(candidate.as_str()) {
            return (candidate.as_str(), &separators[i + 1..]);
        }
    }

    match separators.last() {
        Some(last) => (last.as_str(), &separators[separators.len()..]),
        None => ("", &[]),
    }
}

/// Split `text` on `separator`, keeping the separator attached to the end
/// of each piece so that concatenating the segments reproduces `text`
/// exactly. An empty separator splits into individual characters.
fn split_segments(text: &str, separator: &str) -> Vec<String> {
    if separator.is_empty() {
        return text.chars().map(String::from).collect();
    }

    let mut segments = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(separator) {
        let end = pos + separator.len();
        segments.push(rest[..end].to_string());
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        segments.push(rest.to_string());
    }

    segments
}

/// Trim an assembled buffer for emission; whitespace-only buffers produce
/// no chunk
fn trim_chunk(buffer: &str) -> Option<String> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
