use std::path::Path;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{info, warn};

use crate::error::{ConfigError, SummaryError};
use crate::llm::{minutes_prompt, GeminiClient, GeminiConfig, TextGenerator};
use crate::models::{ClassifiedUtterance, DialogueFunction};
use crate::rules::DialogueActClassifier;

use super::classify_transcript;

/// Returned when a transcript has no utterances
pub const NO_DIALOGUE: &str = "No dialogue found.";

static LEADING_PROPOSAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^i think we should ").expect("valid regex"));
static STANDALONE_THE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bthe\b").expect("valid regex"));

/// Configuration for Stage 2
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Largest utterance count narrated from templates; longer transcripts go to the generator
    pub short_limit: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self { short_limit: 8 }
    }
}

/// Which summarization path a transcript takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryRegime {
    /// Nothing to summarize
    Empty,
    /// Template narrative with look-ahead stitching
    Narrative,
    /// Delegated to the text generator
    Generated,
}

impl SummaryRegime {
    pub fn for_count(count: usize, config: &SummaryConfig) -> Self {
        match count {
            0 => Self::Empty,
            n if n <= config.short_limit => Self::Narrative,
            _ => Self::Generated,
        }
    }
}

/// Stage 2: turns a classified transcript into prose
pub struct Summarizer {
    classifier: DialogueActClassifier,
    generator: Option<Arc<dyn TextGenerator>>,
    config: SummaryConfig,
}

impl Summarizer {
    /// Summarizer without a generator; long transcripts degrade to a diagnostic
    pub fn new(classifier: DialogueActClassifier, config: SummaryConfig) -> Self {
        Self {
            classifier,
            generator: None,
            config,
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Wire up Gemini if an API key can be resolved
    pub fn with_gemini(self, secrets_path: Option<&Path>) -> Self {
        self.with_gemini_config(GeminiConfig::resolve(secrets_path))
    }

    fn with_gemini_config(self, resolved: Result<GeminiConfig, ConfigError>) -> Self {
        match resolved {
            Ok(config) => self.with_generator(Arc::new(GeminiClient::new(config))),
            Err(e) => {
                info!("Long-transcript summaries unavailable: {}", e);
                self
            }
        }
    }

    pub fn classifier(&self) -> &DialogueActClassifier {
        &self.classifier
    }

    /// Summarize raw transcript text; never fails, errors become a bracketed diagnostic
    pub async fn summarize(&self, raw: &str) -> String {
        self.try_summarize(raw)
            .await
            .unwrap_or_else(|e| degraded(&e))
    }

    pub async fn try_summarize(&self, raw: &str) -> Result<String, SummaryError> {
        let utterances = classify_transcript(raw, &self.classifier);
        self.try_summarize_classified(raw, &utterances).await
    }

    /// Summarize with utterances the caller already classified
    pub async fn summarize_classified(&self, raw: &str, utterances: &[ClassifiedUtterance]) -> String {
        self.try_summarize_classified(raw, utterances)
            .await
            .unwrap_or_else(|e| degraded(&e))
    }

    pub async fn try_summarize_classified(
        &self,
        raw: &str,
        utterances: &[ClassifiedUtterance],
    ) -> Result<String, SummaryError> {
        let regime = SummaryRegime::for_count(utterances.len(), &self.config);
        info!(
            "Stage 2: summarizing {} utterances ({:?})",
            utterances.len(),
            regime
        );

        match regime {
            SummaryRegime::Empty => Ok(NO_DIALOGUE.to_string()),
            SummaryRegime::Narrative => Ok(narrate(utterances)),
            SummaryRegime::Generated => {
                let generator = self.generator.as_ref().ok_or(ConfigError::MissingApiKey)?;
                let text = generator.generate(&minutes_prompt(raw)).await?;
                Ok(text.trim().to_string())
            }
        }
    }
}

fn degraded(error: &SummaryError) -> String {
    warn!("Summary degraded: {}", error);
    error.diagnostic()
}

/// Template narrative for a short transcript
///
/// The first utterance gets an opening sentence; from then on the cursor
/// checks two- and three-utterance patterns before falling back to one
/// clause per utterance.
pub fn narrate(utterances: &[ClassifiedUtterance]) -> String {
    let Some(first) = utterances.first() else {
        return String::new();
    };

    let mut summary = opening(first);
    let mut i = 1;

    while i < utterances.len() {
        let (clause, consumed) = stitch(&utterances[i..]);
        summary.push_str(&clause);
        summary.push(' ');
        i += consumed;
    }

    summary.trim().to_string()
}

fn opening(first: &ClassifiedUtterance) -> String {
    let text = first.text.to_lowercase();

    if first.function == DialogueFunction::Proposal {
        let proposal = LEADING_PROPOSAL.replace(&text, "");
        let proposal = STANDALONE_THE.replace(&proposal, "a");
        format!(
            "{} opened with a proposal to {}. ",
            first.speaker,
            proposal.trim_matches('.')
        )
    } else {
        format!(
            "{} opened with a {}: {}. ",
            first.speaker,
            first.function.as_str().to_lowercase(),
            text
        )
    }
}

/// Narrate from the head of `rest`; returns the clause and how many utterances it covers
fn stitch(rest: &[ClassifiedUtterance]) -> (String, usize) {
    use DialogueFunction::*;

    let current = &rest[0];
    let next = rest.get(1);
    let after = rest.get(2);

    if let Some(next) = next {
        match (current.function, next.function) {
            (Disagreement, Justification) => {
                let mut clause = format!(
                    "{} challenged this based on past reliability, but {} responded with a justification",
                    current.speaker, next.speaker
                );
                let mut consumed = 2;
                if let Some(after) = after.filter(|u| u.function.is_question_like()) {
                    clause.push_str(&format!(", but {} queried the testing status", after.speaker));
                    consumed += 1;
                }
                clause.push('.');
                return (clause, consumed);
            }
            (Justification, f) if f.is_question_like() => {
                return (
                    format!(
                        "{} responded with a justification, but {} queried the testing status.",
                        current.speaker, next.speaker
                    ),
                    2,
                );
            }
            (Deferral, Proposal) if next.mentions_delay() => {
                let mut clause = format!(
                    "{} deferred by explaining the testing timeline. {} then suggested delaying action",
                    current.speaker, next.speaker
                );
                let mut consumed = 2;
                if let Some(after) = after.filter(|u| u.function == Commitment) {
                    clause.push_str(&format!(
                        ", and {} committed to providing an update",
                        after.speaker
                    ));
                    consumed += 1;
                }
                clause.push('.');
                return (clause, consumed);
            }
            (Proposal, Commitment) if current.mentions_delay() => {
                return (
                    format!(
                        "{} suggested delaying action, and {} committed to providing an update.",
                        current.speaker, next.speaker
                    ),
                    2,
                );
            }
            _ => {}
        }
    }

    (single_clause(current), 1)
}

fn single_clause(u: &ClassifiedUtterance) -> String {
    use DialogueFunction::*;

    let action = match u.function {
        Challenge => "challenged this based on past reliability.",
        Justification => "responded with a justification.",
        Question | Query => "queried the testing status.",
        Deferral => "deferred by explaining the testing timeline.",
        Proposal if u.mentions_delay() => "suggested delaying action.",
        Proposal => "proposed a new idea.",
        Commitment => "committed to providing an update.",
        Agreement => "agreed.",
        Disagreement => "disagreed.",
        _ => "responded.",
    };
    format!("{} {}", u.speaker, action)
}
