/// Meeting-minutes prompt; `{transcript}` is replaced with the raw transcript
pub const MINUTES_PROMPT_TEMPLATE: &str = "Summarize the following team meeting transcript, focusing on key proposals, concerns, decisions, and commitments. Write a concise, natural summary as if for meeting minutes.\n\nTranscript:\n{transcript}\n\nSummary:";

/// Build the minutes prompt for a transcript
pub fn minutes_prompt(transcript: &str) -> String {
    MINUTES_PROMPT_TEMPLATE.replace("{transcript}", transcript)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_prompt_embeds_transcript() {
        let prompt = minutes_prompt("A: hi\nB: bye");
        assert!(prompt.starts_with("Summarize the following team meeting transcript"));
        assert!(prompt.contains("\n\nTranscript:\nA: hi\nB: bye\n\nSummary:"));
        assert!(prompt.ends_with("Summary:"));
    }
}
