use crate::models::DialogueFunction;

use super::phrases::*;

/// How a rule decides whether it fires on normalized (lower-cased, trimmed) text
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Ends with `?` and contains one of the phrases
    QuestionWithAny(&'static [&'static str]),
    /// Ends with `?`
    AnyQuestion,
    /// Contains one of `phrases` and none of `blockers`
    AnyUnless {
        phrases: &'static [&'static str],
        blockers: &'static [&'static str],
    },
    /// Contains one of `phrases`, or one of `words` as a whole word
    AnyOrWord {
        phrases: &'static [&'static str],
        words: &'static [&'static str],
    },
    /// Contains one of the phrases
    Any(&'static [&'static str]),
}

impl Matcher {
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Matcher::QuestionWithAny(phrases) => {
                normalized.ends_with('?') && contains_any(normalized, phrases)
            }
            Matcher::AnyQuestion => normalized.ends_with('?'),
            Matcher::AnyUnless { phrases, blockers } => {
                !contains_any(normalized, blockers) && contains_any(normalized, phrases)
            }
            Matcher::AnyOrWord { phrases, words } => {
                contains_any(normalized, phrases) || contains_any_word(normalized, words)
            }
            Matcher::Any(phrases) => contains_any(normalized, phrases),
        }
    }
}

/// Substring containment, no word boundaries
fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

/// Whole-word containment; apostrophes stay inside words
fn contains_any_word(text: &str, words: &[&str]) -> bool {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .any(|token| words.contains(&token))
}

/// A single (matcher, label) entry of the cascade
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub function: DialogueFunction,
    pub matcher: Matcher,
}

impl Rule {
    pub const fn new(function: DialogueFunction, matcher: Matcher) -> Self {
        Self { function, matcher }
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.matcher.matches(normalized)
    }
}

/// Ordered rule table evaluated first-match-wins
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The standard dialogue-act cascade
    ///
    /// Question rules come first and `AnyQuestion` catches every remaining
    /// `?`-terminated text, so nothing ending in `?` reaches the later groups.
    pub fn dialogue_acts() -> Self {
        use DialogueFunction::*;

        Self::new(vec![
            Rule::new(Request, Matcher::QuestionWithAny(REQUEST_PHRASES)),
            Rule::new(Question, Matcher::QuestionWithAny(QUESTION_PHRASES)),
            Rule::new(Query, Matcher::AnyQuestion),
            Rule::new(
                Commitment,
                Matcher::AnyUnless {
                    phrases: COMMITMENT_PHRASES,
                    blockers: COMMITMENT_BLOCKERS,
                },
            ),
            Rule::new(Proposal, Matcher::Any(PROPOSAL_PHRASES)),
            Rule::new(Deferral, Matcher::Any(DEFERRAL_PHRASES)),
            Rule::new(Challenge, Matcher::Any(CHALLENGE_PHRASES)),
            Rule::new(Justification, Matcher::Any(JUSTIFICATION_PHRASES)),
            Rule::new(Thanking, Matcher::Any(THANKING_PHRASES)),
            Rule::new(Apology, Matcher::Any(APOLOGY_PHRASES)),
            Rule::new(
                Greeting,
                Matcher::AnyOrWord {
                    phrases: GREETING_PHRASES,
                    words: GREETING_WORDS,
                },
            ),
            Rule::new(Closing, Matcher::Any(CLOSING_PHRASES)),
            Rule::new(Agreement, Matcher::Any(AGREEMENT_PHRASES)),
            Rule::new(Disagreement, Matcher::Any(DISAGREEMENT_PHRASES)),
            Rule::new(Acknowledgement, Matcher::Any(ACKNOWLEDGEMENT_PHRASES)),
            Rule::new(Inform, Matcher::Any(INFORM_PHRASES)),
        ])
    }

    /// First rule that fires, if any
    pub fn first_match(&self, normalized: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(normalized))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::dialogue_acts()
    }
}
