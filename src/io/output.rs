use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ClassifiedUtterance, DialogueFunction};

/// Everything produced for one transcript submission
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    /// The submitted transcript, verbatim
    pub transcript: String,
    pub utterances: Vec<ClassifiedUtterance>,
    pub label_counts: BTreeMap<DialogueFunction, usize>,
    pub summary: String,
    /// Mermaid flow diagram source
    pub diagram: String,
}

impl AnalysisReport {
    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }

    /// Render as a Markdown document
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# Dialogue Analysis\n\n");
        output.push_str(&format!(
            "Generated {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str("## Transcript\n\n```text\n");
        output.push_str(self.transcript.trim_end());
        output.push_str("\n```\n\n");

        output.push_str("## Classified Utterances\n\n");
        output.push_str("| # | Speaker | Utterance | Function | Confidence |\n");
        output.push_str("|---|---------|-----------|----------|------------|\n");
        for (i, u) in self.utterances.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {:.1} |\n",
                i + 1,
                escape_cell(&u.speaker),
                escape_cell(&u.text),
                u.function,
                u.confidence
            ));
        }
        output.push('\n');

        output.push_str("## Summary\n\n");
        output.push_str(&self.summary);
        output.push_str("\n\n");

        output.push_str("## Dialogue Flow\n\n```mermaid\n");
        output.push_str(&self.diagram);
        output.push_str("\n```\n");

        output
    }

    /// Write the Markdown rendering to a file
    pub fn write_markdown(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.to_markdown())?;
        Ok(())
    }
}

/// Plain-text table of classified utterances
pub fn format_utterance_table(utterances: &[ClassifiedUtterance]) -> String {
    let speaker_width = utterances
        .iter()
        .map(|u| u.speaker.chars().count())
        .max()
        .unwrap_or(0)
        .max("Speaker".len());
    let function_width = "Acknowledgement".len();

    let mut output = format!(
        "{:<sw$}  {:<fw$}  Utterance\n",
        "Speaker",
        "Function",
        sw = speaker_width,
        fw = function_width
    );
    for u in utterances {
        output.push_str(&format!(
            "{:<sw$}  {:<fw$}  {}\n",
            u.speaker,
            u.function.as_str(),
            u.text,
            sw = speaker_width,
            fw = function_width
        ));
    }
    output
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classification, Utterance};

    fn report() -> AnalysisReport {
        let utterances = vec![ClassifiedUtterance::new(
            Utterance::new("Alice", "a | b"),
            Classification::from_rule(DialogueFunction::Statement),
        )];
        let mut label_counts = BTreeMap::new();
        label_counts.insert(DialogueFunction::Statement, 1);

        AnalysisReport {
            generated_at: Utc::now(),
            transcript: "Alice: a | b\n".to_string(),
            utterances,
            label_counts,
            summary: "Alice opened with a statement: a | b.".to_string(),
            diagram: "graph TD\nU0[Alice: Statement]".to_string(),
        }
    }

    #[test]
    fn test_markdown_sections() {
        let md = report().to_markdown();
        assert!(md.contains("## Classified Utterances"));
        assert!(md.contains("| 1 | Alice | a \\| b | Statement | 1.0 |"));
        assert!(md.contains("```mermaid\ngraph TD\nU0[Alice: Statement]\n```"));
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report().write_json(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["label_counts"]["Statement"], 1);
        assert_eq!(value["utterances"][0]["utterance"], "a | b");
    }

    #[test]
    fn test_utterance_table() {
        let table = format_utterance_table(&report().utterances);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Speaker"));
        assert!(lines[1].starts_with("Alice"));
        assert!(lines[1].ends_with("a | b"));
    }
}
