use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dialogue-act labels - a closed set, every classified utterance carries exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DialogueFunction {
    /// Polite ask for action, phrased as a question ("could you...?")
    Request,
    /// WH-question or yes/no question
    Question,
    /// Any other utterance ending in a question mark
    Query,
    /// First-person undertaking ("I'll handle it")
    Commitment,
    /// Suggested course of action
    Proposal,
    /// Postponing a topic
    Deferral,
    /// Questioning the validity of a claim
    Challenge,
    /// Giving a reason
    Justification,
    Thanking,
    Apology,
    Greeting,
    Closing,
    Agreement,
    Disagreement,
    Acknowledgement,
    /// Passing on information
    Inform,
    /// Default label when no rule fires
    Statement,
}

impl DialogueFunction {
    /// All labels, in cascade order with the default last
    pub const ALL: [DialogueFunction; 17] = [
        Self::Request,
        Self::Question,
        Self::Query,
        Self::Commitment,
        Self::Proposal,
        Self::Deferral,
        Self::Challenge,
        Self::Justification,
        Self::Thanking,
        Self::Apology,
        Self::Greeting,
        Self::Closing,
        Self::Agreement,
        Self::Disagreement,
        Self::Acknowledgement,
        Self::Inform,
        Self::Statement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "Request",
            Self::Question => "Question",
            Self::Query => "Query",
            Self::Commitment => "Commitment",
            Self::Proposal => "Proposal",
            Self::Deferral => "Deferral",
            Self::Challenge => "Challenge",
            Self::Justification => "Justification",
            Self::Thanking => "Thanking",
            Self::Apology => "Apology",
            Self::Greeting => "Greeting",
            Self::Closing => "Closing",
            Self::Agreement => "Agreement",
            Self::Disagreement => "Disagreement",
            Self::Acknowledgement => "Acknowledgement",
            Self::Inform => "Inform",
            Self::Statement => "Statement",
        }
    }

    /// Whether the label is one of the two question-like acts the summary treats alike
    pub fn is_question_like(&self) -> bool {
        matches!(self, Self::Question | Self::Query)
    }
}

impl fmt::Display for DialogueFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialogueFunction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown dialogue function: {}", s))
    }
}
