use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single regulatory update as it was fetched from a source.
///
/// Records are never edited once created, so fields are only reachable
/// through getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    title: String,
    summary: String,
    date: NaiveDate,
    source: String,
}

impl UpdateRecord {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        date: NaiveDate,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            date,
            source: source.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Date formatted the way it is shown to users (e.g. "2026-02-07")
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
