use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Utterance;

/// Read a transcript file and parse it into utterances
pub fn parse_transcript_file(path: &Path) -> Result<Vec<Utterance>> {
    let content = read_transcript_file(path)?;
    Ok(parse_transcript(&content))
}

/// Read a UTF-8 transcript file
pub fn read_transcript_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))
}

/// Read a whole transcript from stdin
pub fn read_transcript_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read transcript from stdin")?;
    Ok(content)
}

/// Split raw transcript text into `speaker: text` utterances
///
/// Each non-blank line is split on its first colon. Lines without a colon
/// are skipped; line order is kept.
pub fn parse_transcript(raw: &str) -> Vec<Utterance> {
    raw.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Utterance> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (speaker, text) = line.split_once(':')?;
    Some(Utterance::new(speaker.trim(), text.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transcript() {
        let raw = "Alice: Hello there\nBob:   How are you?  \n";
        let utterances = parse_transcript(raw);

        assert_eq!(utterances.len(), 2);
        assert_eq!(utterances[0], Utterance::new("Alice", "Hello there"));
        assert_eq!(utterances[1], Utterance::new("Bob", "How are you?"));
    }

    #[test]
    fn test_skips_blank_and_colonless_lines() {
        let raw = "\n  \nAlice: one\nno colon here\r\nBob: two\r\n\n";
        let utterances = parse_transcript(raw);

        let speakers: Vec<&str> = utterances.iter().map(|u| u.speaker.as_str()).collect();
        assert_eq!(speakers, vec!["Alice", "Bob"]);
        assert_eq!(utterances[1].text, "two");
    }

    #[test]
    fn test_splits_on_first_colon() {
        let utterances = parse_transcript("Carol: meet at 10:30: sharp");
        assert_eq!(utterances[0].speaker, "Carol");
        assert_eq!(utterances[0].text, "meet at 10:30: sharp");
    }

    #[test]
    fn test_one_utterance_per_colon_line() {
        let raw = "A: x\nB:\n: orphan\nplain\nC: y";
        assert_eq!(parse_transcript(raw).len(), 4);
    }

    #[test]
    fn test_parse_is_repeatable() {
        let raw = "A: first\nB: second";
        assert_eq!(parse_transcript(raw), parse_transcript(raw));
    }

    #[test]
    fn test_parse_transcript_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.txt");
        std::fs::write(&path, "Alice: hi\nBob: bye\n").unwrap();

        let utterances = parse_transcript_file(&path).unwrap();
        assert_eq!(utterances.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        assert!(parse_transcript_file(Path::new("/nonexistent/transcript.txt")).is_err());
    }
}
