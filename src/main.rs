use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dialogue_acts::io::{format_utterance_table, read_transcript_file, read_transcript_stdin};
use dialogue_acts::rules::DEFAULT_REVIEW_LOG;
use dialogue_acts::{
    build_flow_diagram, classify_transcript, label_counts, AnalysisReport, DialogueActClassifier,
    FileReviewLog, SummaryConfig, Summarizer,
};

#[derive(Parser)]
#[command(name = "dialogue-acts")]
#[command(author, version, about = "Dialogue-act classification and summarisation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify each utterance of a transcript
    Classify {
        #[command(flatten)]
        common: CommonArgs,

        /// Print JSON records instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize a transcript
    Summarize {
        #[command(flatten)]
        common: CommonArgs,

        /// TOML secrets file holding GOOGLE_API_KEY
        #[arg(long)]
        secrets: Option<PathBuf>,
    },

    /// Print the Mermaid dialogue-flow diagram
    Diagram {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Classify, summarize and diagram a transcript into a report
    Process {
        #[command(flatten)]
        common: CommonArgs,

        /// Output file for the JSON report
        #[arg(short, long)]
        output: PathBuf,

        /// Output file for a Markdown rendering of the report
        #[arg(long)]
        markdown: Option<PathBuf>,

        /// TOML secrets file holding GOOGLE_API_KEY
        #[arg(long)]
        secrets: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Transcript file (UTF-8, one `Speaker: text` turn per line); stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where utterances that match no rule are logged for review
    #[arg(long, default_value = DEFAULT_REVIEW_LOG)]
    review_log: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl CommonArgs {
    fn read_transcript(&self) -> Result<String> {
        let transcript = match &self.input {
            Some(path) => {
                info!("Loading transcript from {:?}", path);
                read_transcript_file(path)?
            }
            None => read_transcript_stdin()?,
        };

        if transcript.trim().is_empty() {
            anyhow::bail!("Please provide a transcript (file or stdin)");
        }
        Ok(transcript)
    }

    fn classifier(&self) -> DialogueActClassifier {
        DialogueActClassifier::new(Arc::new(FileReviewLog::new(&self.review_log)))
    }

    fn summarizer(&self, secrets: Option<&Path>) -> Summarizer {
        Summarizer::new(self.classifier(), SummaryConfig::default()).with_gemini(secrets)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { common, json } => {
            setup_logging(common.verbose);
            run_classify(&common, json)
        }
        Commands::Summarize { common, secrets } => {
            setup_logging(common.verbose);
            run_summarize(&common, secrets.as_deref()).await
        }
        Commands::Diagram { common } => {
            setup_logging(common.verbose);
            run_diagram(&common)
        }
        Commands::Process {
            common,
            output,
            markdown,
            secrets,
        } => {
            setup_logging(common.verbose);
            run_process(&common, &output, markdown.as_deref(), secrets.as_deref()).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run_classify(common: &CommonArgs, json: bool) -> Result<()> {
    let transcript = common.read_transcript()?;
    let utterances = classify_transcript(&transcript, &common.classifier());

    if json {
        let out = serde_json::to_string_pretty(&utterances).context("Failed to encode JSON")?;
        println!("{}", out);
    } else {
        print!("{}", format_utterance_table(&utterances));
    }
    Ok(())
}

async fn run_summarize(common: &CommonArgs, secrets: Option<&Path>) -> Result<()> {
    let transcript = common.read_transcript()?;
    let summary = common.summarizer(secrets).summarize(&transcript).await;
    println!("{}", summary);
    Ok(())
}

fn run_diagram(common: &CommonArgs) -> Result<()> {
    let transcript = common.read_transcript()?;
    let utterances = classify_transcript(&transcript, &common.classifier());
    println!("{}", build_flow_diagram(&utterances));
    Ok(())
}

async fn run_process(
    common: &CommonArgs,
    output: &Path,
    markdown: Option<&Path>,
    secrets: Option<&Path>,
) -> Result<()> {
    let transcript = common.read_transcript()?;
    let summarizer = common.summarizer(secrets);

    // Classify once so each unmatched utterance is logged for review only once
    let utterances = classify_transcript(&transcript, summarizer.classifier());
    let summary = summarizer.summarize_classified(&transcript, &utterances).await;
    let diagram = build_flow_diagram(&utterances);

    let report = AnalysisReport {
        generated_at: Utc::now(),
        label_counts: label_counts(&utterances),
        transcript,
        utterances,
        summary,
        diagram,
    };

    report.write_json(output)?;
    info!("Report written to {:?}", output);

    if let Some(path) = markdown {
        report.write_markdown(path)?;
        info!("Markdown written to {:?}", path);
    }

    println!("{}", report.summary);
    Ok(())
}
