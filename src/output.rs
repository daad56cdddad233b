// ============================================================================
// output.rs - Wordlist Serialization
// ============================================================================

use anyhow::{Result, Context};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use tracing::info;

use crate::generator::GenerationResult;

/// Write candidates to any byte sink, one per line, in their established
/// order. No header, no trailing metadata.
pub fn write_wordlist<W: Write>(result: &GenerationResult, mut writer: W) -> Result<()> {
    for word in &result.words {
        writeln!(writer, "{}", word)?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize the wordlist to a file (atomic write: temp file, flush, rename).
/// Returns the final file size in bytes.
pub fn save_to_file(result: &GenerationResult, path: &str) -> Result<u64> {
    let temp_path = format!("{}.tmp.{}", path, std::process::id());
    let file = File::create(&temp_path)
        .context(format!("Failed to create temp wordlist file: {}", temp_path))?;

    let mut writer = BufWriter::new(file);
    if let Err(e) = write_wordlist(result, &mut writer) {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(e).context(format!("Failed to write wordlist to {}", temp_path));
    }
    drop(writer);

    match fs::rename(&temp_path, path) {
        Ok(_) => {}
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            return Err(e).context(format!("Failed to move wordlist into place at {}", path));
        }
    }

    let size = fs::metadata(path)
        .context(format!("Failed to stat wordlist file: {}", path))?
        .len();

    info!("Saved {} candidates to {}", result.words.len(), path);
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::ListStats;
    use tempfile::TempDir;

    fn result_from(words: &[&str]) -> GenerationResult {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let stats = ListStats::from_words(&words);
        GenerationResult { words, stats }
    }

    #[test]
    fn test_write_wordlist_one_candidate_per_line() {
        let result = result_from(&["a", "bb", "ccc"]);
        let mut buffer = Vec::new();
        write_wordlist(&result, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "a\nbb\nccc\n");
    }

    #[test]
    fn test_write_wordlist_empty_result() {
        let result = result_from(&[]);
        let mut buffer = Vec::new();
        write_wordlist(&result, &mut buffer).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_save_to_file_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wordlist.txt");
        let result = result_from(&["admin", "admin1", "admin123"]);

        let size = save_to_file(&result, path.to_str().unwrap()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "admin\nadmin1\nadmin123\n");
        assert_eq!(size, content.len() as u64);
    }

    #[test]
    fn test_save_to_file_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wordlist.txt");
        let result = result_from(&["a"]);

        save_to_file(&result, path.to_str().unwrap()).unwrap();
        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_to_unwritable_path_fails() {
        let result = result_from(&["a"]);
        let err = save_to_file(&result, "/nonexistent-dir/wordlist.txt").unwrap_err();
        assert!(err.to_string().contains("temp wordlist file"));
    }
}
