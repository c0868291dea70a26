//! Phrase tables for the dialogue-act cascade.
//!
//! Matching is plain substring containment on lower-cased text, so entries
//! also fire inside longer words ("no" inside "known"). Existing
//! classifications depend on that. The one exception is [`GREETING_WORDS`].

/// Politeness/permission phrases that turn a question into a request
pub const REQUEST_PHRASES: &[&str] = &[
    "can you",
    "could you",
    "would you",
    "will you",
    "shall we",
    "please",
    "would it be possible",
];

/// WH-words and yes/no openers
pub const QUESTION_PHRASES: &[&str] = &[
    "why", "what", "how", "when", "where", "who", "is it", "are you", "do you", "does it", "can it",
    "could it", "would it", "will it", "shall we", "may i", "might i",
];

/// Hedges and negations that block a commitment reading
pub const COMMITMENT_BLOCKERS: &[&str] = &[
    "i'm not",
    "i am not",
    "i will not",
    "i won't",
    "i can't",
    "i shouldn't",
    "i couldn't",
    "i wouldn't",
    "i might",
    "i may",
    "i hope",
    "i plan",
    "i want",
    "i wish",
    "i would like",
    "i intend",
    "i expect",
    "i think",
    "i don't",
    "i guess",
    "i suppose",
    "i doubt",
    "i wonder",
];

pub const COMMITMENT_PHRASES: &[&str] = &[
    "i'm",
    "i am",
    "i will",
    "i'll",
    "i shall",
    "we will",
    "we'll",
    "we shall",
    "i can",
    "i'll handle",
    "i'll take",
    "i'll do",
    "i'll get",
    "i'll make",
    "i'll see",
    "i'll ensure",
    "i'll address",
    "i'll manage",
    "i'll finish",
    "i'll update",
    "i'll confirm",
    "i'll follow",
    "i'll complete",
    "i'll work",
    "i'll start",
    "i'll lead",
    "i'll get started",
    "i'll get that",
    "i'll make sure",
    "i'll take care",
    "i'll see to it",
    "i'll follow through",
    "i'll address it soon",
    "i'll get started now",
    "i'll finish it soon",
    "i'll take the lead",
    "i'll update you",
    "i'll confirm when finished",
    "i'll prepare",
    "i'll prepare a status update",
    "fair enough",
    "i'll help",
    "we can",
    "we'll handle",
    "we'll take",
    "we'll do",
    "we'll get",
    "we'll make",
    "we'll see",
    "we'll ensure",
    "we'll address",
    "we'll manage",
    "we'll finish",
    "we'll update",
    "we'll confirm",
    "we'll follow",
    "we'll complete",
    "we'll work",
    "we'll start",
    "we'll lead",
    "we'll get started",
    "we'll get that",
    "we'll make sure",
    "we'll take care",
    "we'll see to it",
    "we'll follow through",
    "we'll address it soon",
    "we'll get started now",
    "we'll finish it soon",
    "we'll take the lead",
    "we'll update you",
    "we'll confirm when finished",
    "we'll prepare",
    "we'll prepare a status update",
    "we'll help",
];

pub const PROPOSAL_PHRASES: &[&str] = &[
    "how about",
    "let's",
    "maybe we could",
    "i propose",
    "shall we",
    "i suggest",
    "why don't we",
    "perhaps we should",
    "i recommend",
    "let us",
    "i'd like to propose",
    "i'd suggest",
    "i'd recommend",
    "i think we should",
    "maybe we hold off",
    "maybe we should",
    "then maybe we",
    "i think we could",
    "i think we can",
    "i think we might",
    "i think we may",
    "i think we shall",
    "i think we will",
    "i think we ought to",
    "i think we need to",
    "i think we have to",
    "i think we must",
];

pub const DEFERRAL_PHRASES: &[&str] = &[
    "not yet",
    "on the roadmap",
    "let's come back",
    "we can discuss this next time",
    "let's postpone",
    "we'll revisit",
    "let's defer",
    "we'll talk about this later",
    "let's address this in the future",
    "we'll handle this next time",
    "let's leave this for now",
    "we'll return to this",
    "let's put this on hold",
    "we'll get back to this",
    "let's delay this",
    "we'll pick this up later",
    "let's save this for later",
    "we'll continue this later",
    "let's revisit this",
    "we'll postpone this",
    "let's discuss this later",
    "we'll come back to this",
];

pub const CHALLENGE_PHRASES: &[&str] = &[
    "are you sure",
    "can you prove",
    "is that really",
    "can you back that up",
    "are you certain",
    "can you show proof",
    "is that correct",
    "can you demonstrate",
    "are you positive",
    "can you verify",
    "is that true",
    "can you confirm",
    "can you justify",
    "is there evidence",
    "can you support",
    "is that verifiable",
    "can you show evidence",
    "is that provable",
    "i'd like to see evidence",
    "is that accurate",
    "is that right",
    "is that the case",
    "is that so",
    "is that confirmed",
    "is that valid",
    "is that supported",
];

pub const JUSTIFICATION_PHRASES: &[&str] = &[
    "because",
    "the reason",
    "due to",
    "as a result",
    "since",
    "that's why",
    "the cause",
    "the explanation",
    "the rationale",
    "the logic",
    "the basis",
    "the underlying reason",
    "the consequence",
    "the result",
    "the explanation is",
    "the reason is",
    "it's because",
    "it's due to",
    "it's a result of",
    "it's a consequence of",
    "it's the result of",
    "it's the cause of",
    "it's the reason for",
    "true, but",
    "the latest version uses",
];

pub const THANKING_PHRASES: &[&str] = &[
    "thank",
    "thanks",
    "appreciate",
    "grateful",
    "gratitude",
    "much obliged",
    "owe you",
    "sincere thanks",
    "greatly appreciated",
    "immense thanks",
    "heartfelt thanks",
    "endless gratitude",
    "really appreciate",
    "thanks a ton",
    "thanks a million",
    "thank you for your time",
    "thanks again",
    "i owe you one",
];

pub const APOLOGY_PHRASES: &[&str] = &[
    "sorry",
    "apolog",
    "pardon",
    "my apologies",
    "i apologize",
    "forgive me",
    "i didn't mean",
    "regret",
    "my fault",
    "my mistake",
    "inconvenience",
    "trouble",
    "oversight",
    "delay",
    "mix-up",
    "take responsibility",
];

/// Bare greeting interjections, matched as whole words only
///
/// As substrings these fire inside "think", "they" and "you".
pub const GREETING_WORDS: &[&str] = &["hi", "hey", "yo"];

pub const GREETING_PHRASES: &[&str] = &[
    "hello",
    "good morning",
    "good afternoon",
    "good evening",
    "greetings",
    "welcome",
    "salutations",
    "nice to see you",
    "pleased to meet you",
    "how are you",
    "how's it going",
    "what's up",
    "hi all",
    "hi team",
    "hi everyone",
    "hi folks",
    "hi buddy",
    "hi friend",
    "hi pal",
    "hi fam",
    "hi again",
    "hello mate",
    "hello again",
    "hello folks",
    "hello team",
    "hello everyone",
    "hello all",
    "hello friend",
    "hello pal",
    "hello fam",
    "good to see you",
    "good day",
    "good night",
];

pub const CLOSING_PHRASES: &[&str] = &[
    "goodbye",
    "bye",
    "see you",
    "take care",
    "farewell",
    "catch you later",
    "see you soon",
    "see you around",
    "until next time",
    "later",
    "goodbye for now",
    "see you later",
    "all the best",
    "bye for now",
    "take it easy",
    "see you tomorrow",
    "goodbye everyone",
    "have a good one",
    "see you then",
];

pub const AGREEMENT_PHRASES: &[&str] = &[
    "i agree",
    "that makes sense",
    "absolutely",
    "i think you're right",
    "i support that",
    "i'm with you",
    "i concur",
    "that's true",
    "i believe so",
    "i'm in agreement",
    "i share your view",
    "i agree completely",
    "that's correct",
    "i agree 100%",
    "i'm on board",
    "i agree wholeheartedly",
    "that's my view too",
    "i see it the same way",
    "i agree entirely",
    "i'm in full agreement",
    "sure",
    "of course",
    "definitely",
    "yes",
];

pub const DISAGREEMENT_PHRASES: &[&str] = &[
    "i'm not convinced",
    "i don't think",
    "i see it differently",
    "i'm not sure i agree",
    "i have a different opinion",
    "i disagree",
    "that's not how i see it",
    "i can't agree",
    "i don't share that view",
    "i beg to differ",
    "that's not my understanding",
    "i see things another way",
    "i don't believe that's right",
    "i have to disagree",
    "i respectfully disagree",
    "that's not accurate",
    "i don't think that's the case",
    "i don't see it that way",
    "i must disagree",
    "i can't support that",
    "no",
    "not really",
    "unfortunately",
];

pub const ACKNOWLEDGEMENT_PHRASES: &[&str] = &[
    "okay",
    "ok",
    "alright",
    "got it",
    "understood",
    "noted",
    "i see",
    "thanks for letting me know",
    "i understand",
    "alright, thanks",
    "okay, got it",
    "i acknowledge",
    "alright, noted",
    "okay, understood",
    "i got it",
    "alright, i see",
    "okay, i understand",
    "alright, got it",
    "okay, thanks for the info",
    "i see, thanks",
];

pub const INFORM_PHRASES: &[&str] = &[
    "i think",
    "i believe",
    "let me",
    "the reason",
    "because",
    "just to let you know",
    "for your information",
    "fyi",
    "just so you know",
    "this is to inform you",
    "just a heads up",
    "please be aware",
    "i thought you should know",
    "for your awareness",
    "just making you aware",
    "i wanted to inform you",
    "just to keep you posted",
    "for your reference",
    "just to update you",
    "i wanted to update you",
    "just to notify you",
    "for your records",
    "just to keep you informed",
];

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TABLES: &[&[&str]] = &[
        REQUEST_PHRASES,
        QUESTION_PHRASES,
        COMMITMENT_BLOCKERS,
        COMMITMENT_PHRASES,
        PROPOSAL_PHRASES,
        DEFERRAL_PHRASES,
        CHALLENGE_PHRASES,
        JUSTIFICATION_PHRASES,
        THANKING_PHRASES,
        APOLOGY_PHRASES,
        GREETING_WORDS,
        GREETING_PHRASES,
        CLOSING_PHRASES,
        AGREEMENT_PHRASES,
        DISAGREEMENT_PHRASES,
        ACKNOWLEDGEMENT_PHRASES,
        INFORM_PHRASES,
    ];

    #[test]
    fn test_phrases_are_lowercase() {
        // Input is lower-cased before matching, so an upper-case entry could never fire
        for table in ALL_TABLES {
            for phrase in *table {
                assert_eq!(*phrase, phrase.to_lowercase(), "phrase {:?}", phrase);
            }
        }
    }

    #[test]
    fn test_phrases_non_empty() {
        for table in ALL_TABLES {
            assert!(!table.is_empty());
            assert!(table.iter().all(|p| !p.trim().is_empty()));
        }
    }
}
