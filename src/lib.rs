pub mod error;
pub mod io;
pub mod llm;
pub mod models;
pub mod rules;
pub mod stages;

pub use error::{ConfigError, GenerationError, SummaryError};
pub use io::{parse_transcript, parse_transcript_file, AnalysisReport};
pub use llm::{GeminiClient, GeminiConfig, TextGenerator};
pub use models::{Classification, ClassifiedUtterance, DialogueFunction, Utterance};
pub use rules::{
    DialogueActClassifier, FileReviewLog, MemoryReviewLog, NullReviewLog, ReviewSink, Rule,
    RuleSet,
};
pub use stages::{
    build_flow_diagram, classify_transcript, label_counts, FlowDiagram, SummaryConfig,
    Summarizer,
};
