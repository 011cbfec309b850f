use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Structured result of summarizing one regulatory update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub word_count: usize,
    pub primary_focus: String,
    pub impact_level: String,
    pub timeline: String,
    pub affected_sectors: String,
    pub recommended_actions: Vec<String>,
    pub note: Option<String>,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<Summary>;
}

/// Number of whitespace-separated tokens in `text`.
///
/// The ASCII file, group, record and unit separators (U+001C..=U+001F)
/// also split words.
pub fn word_count(text: &str) -> usize {
    text.split(is_word_separator)
        .filter(|word| !word.is_empty())
        .count()
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Placeholder summarizer. Only the word count depends on the input;
/// everything else is canned demonstration text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSummarizer;

impl DemoSummarizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Summarizer for DemoSummarizer {
    async fn summarize(&self, text: &str) -> Result<Summary> {
        Ok(Summary {
            word_count: word_count(text),
            primary_focus: "Regulatory compliance requirements".to_string(),
            impact_level: "Medium to High".to_string(),
            timeline: "Typically 30-90 days".to_string(),
            affected_sectors: "Based on content analysis".to_string(),
            recommended_actions: vec![
                "Review current compliance procedures".to_string(),
                "Assess impact on operations".to_string(),
                "Update internal policies as needed".to_string(),
                "Schedule staff training if required".to_string(),
            ],
            note: Some(
                "This is a demonstration summary. Production version would use advanced AI models."
                    .to_string(),
            ),
        })
    }
}
