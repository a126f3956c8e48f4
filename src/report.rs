use std::io::{self, Write};

use crate::splitter::Document;

/// Render chunks and their summary statistics in the program's console
/// format: each chunk under a 1-based index, a rule between chunks, then
/// the original text length, chunk count, and mean chunk length.
///
/// `source_len` is the character count of the original text, which the
/// chunks alone cannot reproduce once overlap is applied.
pub fn render(out: &mut impl Write, source_len: usize, documents: &[Document]) -> io::Result<()> {
    writeln!(out, "\nCompressed Text Chunks:")?;
    writeln!(out, "{}", "-".repeat(50))?;

    for (i, document) in documents.iter().enumerate() {
        writeln!(out, "\nChunk {}:", i + 1)?;
        writeln!(out, "{}", document.content)?;
        writeln!(out, "{}", "-".repeat(50))?;
    }

    let total_chars: usize = documents.iter().map(|d| d.content.chars().count()).sum();
    let average = if documents.is_empty() {
        0.0
    } else {
        total_chars as f64 / documents.len() as f64
    };

    writeln!(out, "\nOriginal text length: {} characters", source_len)?;
    writeln!(out, "Number of chunks: {}", documents.len())?;
    writeln!(out, "Average chunk size: {:.2} characters", average)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_chunks_and_stats() {
        let documents = vec![Document::new("alpha"), Document::new("beta")];
        let mut out = Vec::new();
        render(&mut out, 12, &documents).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Compressed Text Chunks:"));
        assert!(report.contains("\nChunk 1:\nalpha\n"));
        assert!(report.contains("\nChunk 2:\nbeta\n"));
        assert!(report.contains("Original text length: 12 characters"));
        assert!(report.contains("Number of chunks: 2"));
        assert!(report.contains("Average chunk size: 4.50 characters"));
    }

    #[test]
    fn test_report_with_no_chunks() {
        let mut out = Vec::new();
        render(&mut out, 0, &[]).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Number of chunks: 0"));
        assert!(report.contains("Average chunk size: 0.00 characters"));
    }
}
