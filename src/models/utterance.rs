use serde::{Deserialize, Serialize};

use super::DialogueFunction;

/// One speaker turn taken from a transcript line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    /// Text before the first colon, trimmed
    pub speaker: String,
    /// Text after the first colon, trimmed
    pub text: String,
}

impl Utterance {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// Outcome of classifying a single utterance string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub function: DialogueFunction,
    /// Always 1.0 for rule-based classification
    pub confidence: f64,
    /// Which rule fired, in words
    pub rationale: String,
}

impl Classification {
    /// Confidence reported by the rule cascade
    pub const RULE_CONFIDENCE: f64 = 1.0;

    pub fn from_rule(function: DialogueFunction) -> Self {
        Self {
            function,
            confidence: Self::RULE_CONFIDENCE,
            rationale: format!("Classified as {} based on keywords/rules.", function),
        }
    }
}

/// An utterance annotated with its dialogue function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedUtterance {
    pub speaker: String,
    /// The utterance text (named `utterance` in serialized records)
    #[serde(rename = "utterance")]
    pub text: String,
    pub function: DialogueFunction,
    pub confidence: f64,
    pub rationale: String,
}

impl ClassifiedUtterance {
    pub fn new(utterance: Utterance, classification: Classification) -> Self {
        Self {
            speaker: utterance.speaker,
            text: utterance.text,
            function: classification.function,
            confidence: classification.confidence,
            rationale: classification.rationale,
        }
    }

    /// Whether the text mentions postponing ("hold off", "delay")
    pub fn mentions_delay(&self) -> bool {
        let lower = self.text.to_lowercase();
        lower.contains("hold off") || lower.contains("delay")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rationale_names_label() {
        let c = Classification::from_rule(DialogueFunction::Greeting);
        assert_eq!(c.confidence, 1.0);
        assert_eq!(c.rationale, "Classified as Greeting based on keywords/rules.");
    }

    #[test]
    fn test_serialized_field_names() {
        let cu = ClassifiedUtterance::new(
            Utterance::new("Alice", "Hello"),
            Classification::from_rule(DialogueFunction::Greeting),
        );
        let value = serde_json::to_value(&cu).unwrap();
        assert_eq!(value["speaker"], "Alice");
        assert_eq!(value["utterance"], "Hello");
        assert_eq!(value["function"], "Greeting");
        assert_eq!(value["confidence"], 1.0);
    }

    #[test]
    fn test_mentions_delay() {
        let cu = ClassifiedUtterance::new(
            Utterance::new("Bob", "Maybe we HOLD OFF for a week"),
            Classification::from_rule(DialogueFunction::Proposal),
        );
        assert!(cu.mentions_delay());
    }
}
