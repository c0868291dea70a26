use std::sync::Arc;

use tracing::debug;

use crate::models::{Classification, DialogueFunction};

use super::{FileReviewLog, ReviewSink, RuleSet};

/// Rule-based dialogue-act classifier
///
/// Stateless apart from the review sink it reports default-labelled
/// utterances to.
#[derive(Clone)]
pub struct DialogueActClassifier {
    rules: RuleSet,
    review: Arc<dyn ReviewSink>,
}

impl DialogueActClassifier {
    pub fn new(review: Arc<dyn ReviewSink>) -> Self {
        Self::with_rules(RuleSet::dialogue_acts(), review)
    }

    pub fn with_rules(rules: RuleSet, review: Arc<dyn ReviewSink>) -> Self {
        Self { rules, review }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify a single utterance
    ///
    /// 1. Lower-case and trim; empty text is a `Statement`
    /// 2. Walk the rule table, first hit wins
    /// 3. No hit: `Statement`, and the raw text goes to the review sink
    pub fn classify(&self, text: &str) -> Classification {
        let normalized = text.trim().to_lowercase();

        if normalized.is_empty() {
            return Classification::from_rule(DialogueFunction::Statement);
        }

        if let Some(rule) = self.rules.first_match(&normalized) {
            return Classification::from_rule(rule.function);
        }

        debug!("No rule matched, flagged for review: {:?}", text);
        self.review.flag(text);
        Classification::from_rule(DialogueFunction::Statement)
    }
}

impl Default for DialogueActClassifier {
    fn default() -> Self {
        Self::new(Arc::new(FileReviewLog::default()))
    }
}

impl std::fmt::Debug for DialogueActClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueActClassifier")
            .field("rules", &self.rules.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::MemoryReviewLog;
    use DialogueFunction::*;

    fn classifier() -> (DialogueActClassifier, Arc<MemoryReviewLog>) {
        let log = Arc::new(MemoryReviewLog::new());
        (DialogueActClassifier::new(log.clone()), log)
    }

    fn label(text: &str) -> DialogueFunction {
        classifier().0.classify(text).function
    }

    #[test]
    fn test_empty_is_statement() {
        let (c, log) = classifier();
        assert_eq!(c.classify("").function, Statement);
        assert_eq!(c.classify("   ").function, Statement);
        assert!(log.flagged().is_empty());
    }

    #[test]
    fn test_questions() {
        assert_eq!(label("Can you send the report?"), Request);
        assert_eq!(label("Why is it delayed?"), Question);
        assert_eq!(label("Really?"), Query);
        // Politeness beats WH-words
        assert_eq!(label("Could you tell me why?"), Request);
    }

    #[test]
    fn test_question_branch_is_terminal() {
        // Contains "thanks" but the question branch decides
        assert_eq!(label("Thanks, and the numbers?"), Query);
    }

    #[test]
    fn test_commitment() {
        assert_eq!(label("I'll send the update tomorrow."), Commitment);
        assert_eq!(label("We'll confirm with the vendor."), Commitment);
    }

    #[test]
    fn test_hedge_blocks_commitment() {
        let result = label("I don't think that's right.");
        assert_ne!(result, Commitment);
        assert_eq!(result, Disagreement);
    }

    #[test]
    fn test_greeting_interjection_inside_word() {
        // "hi" inside "nothing" is not a greeting; "no" still matches as a substring
        assert_eq!(label("Nothing more from me."), Disagreement);
        assert_eq!(label("Hi, nothing more from me."), Greeting);
    }

    #[test]
    fn test_phrase_groups() {
        assert_eq!(label("I think we should delay the launch."), Proposal);
        assert_eq!(label("Not yet, the tests are still running."), Deferral);
        assert_eq!(label("Is that really the plan."), Challenge);
        assert_eq!(label("It failed because the disk filled up."), Justification);
        assert_eq!(label("Thanks a lot."), Thanking);
        assert_eq!(label("Sorry about that."), Apology);
        assert_eq!(label("Hello everyone."), Greeting);
        assert_eq!(label("Goodbye."), Closing);
        assert_eq!(label("Absolutely."), Agreement);
        assert_eq!(label("Not really."), Disagreement);
        assert_eq!(label("Got it."), Acknowledgement);
        assert_eq!(label("FYI the build is green."), Inform);
    }

    #[test]
    fn test_default_flags_raw_text() {
        let (c, log) = classifier();
        let result = c.classify("xyz completely unrelated text");
        assert_eq!(result.function, Statement);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(log.flagged(), vec!["xyz completely unrelated text"]);
    }

    #[test]
    fn test_default_keeps_original_case() {
        let (c, log) = classifier();
        c.classify("  Xyz Qrs  ");
        assert_eq!(log.flagged(), vec!["  Xyz Qrs  "]);
    }

    #[test]
    fn test_matched_rule_does_not_flag() {
        let (c, log) = classifier();
        c.classify("Thanks!");
        assert!(log.flagged().is_empty());
    }

    #[test]
    fn test_rationale() {
        let (c, _) = classifier();
        assert_eq!(
            c.classify("Why?").rationale,
            "Classified as Question based on keywords/rules."
        );
    }
}
