use std::collections::BTreeMap;

use tracing::info;

use crate::io::parse_transcript;
use crate::models::{ClassifiedUtterance, DialogueFunction, Utterance};
use crate::rules::DialogueActClassifier;

/// Execute Stage 1: parse the transcript and classify every utterance
///
/// Output order is transcript order; a transcript with no parseable lines
/// yields an empty sequence.
pub fn classify_transcript(
    raw: &str,
    classifier: &DialogueActClassifier,
) -> Vec<ClassifiedUtterance> {
    let classified = classify_utterances(parse_transcript(raw), classifier);
    info!("Stage 1: classified {} utterances", classified.len());
    classified
}

/// Classify already-parsed utterances, keeping their order
pub fn classify_utterances(
    utterances: Vec<Utterance>,
    classifier: &DialogueActClassifier,
) -> Vec<ClassifiedUtterance> {
    utterances
        .into_iter()
        .map(|u| {
            let classification = classifier.classify(&u.text);
            ClassifiedUtterance::new(u, classification)
        })
        .collect()
}

/// Number of utterances per label; labels that never occur are omitted
pub fn label_counts(utterances: &[ClassifiedUtterance]) -> BTreeMap<DialogueFunction, usize> {
    let mut counts = BTreeMap::new();
    for u in utterances {
        *counts.entry(u.function).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::rules::MemoryReviewLog;

    fn classifier() -> (DialogueActClassifier, Arc<MemoryReviewLog>) {
        let log = Arc::new(MemoryReviewLog::new());
        (DialogueActClassifier::new(log.clone()), log)
    }

    #[test]
    fn test_classify_transcript() {
        let (c, _) = classifier();
        let raw = "Alice: I think we should delay the launch.\nBob: I'll confirm with the team.";
        let result = classify_transcript(raw, &c);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].speaker, "Alice");
        assert_eq!(result[0].function, DialogueFunction::Proposal);
        assert_eq!(result[1].speaker, "Bob");
        assert_eq!(result[1].function, DialogueFunction::Commitment);
        assert!(result.iter().all(|u| u.confidence == 1.0));
    }

    #[test]
    fn test_length_matches_colon_lines() {
        let (c, _) = classifier();
        let raw = "A: Hello.\n\njust a note\nB: Why?\nC:\nD: ok";
        assert_eq!(classify_transcript(raw, &c).len(), 4);
    }

    #[test]
    fn test_empty_transcript() {
        let (c, log) = classifier();
        assert!(classify_transcript("", &c).is_empty());
        assert!(classify_transcript("no colons\nanywhere", &c).is_empty());
        assert!(log.flagged().is_empty());
    }

    #[test]
    fn test_flags_default_utterances() {
        let (c, log) = classifier();
        classify_transcript("A: xyz qrs\nB: Thanks!", &c);
        assert_eq!(log.flagged(), vec!["xyz qrs"]);
    }

    #[test]
    fn test_label_counts() {
        let (c, _) = classifier();
        let result = classify_transcript("A: Why?\nB: What?\nC: Thanks.", &c);
        let counts = label_counts(&result);

        assert_eq!(counts.get(&DialogueFunction::Question), Some(&2));
        assert_eq!(counts.get(&DialogueFunction::Thanking), Some(&1));
        assert_eq!(counts.get(&DialogueFunction::Statement), None);
    }
}
