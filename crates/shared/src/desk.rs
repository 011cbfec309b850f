use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::fetcher::{DemoFetcher, SourceFetcher};
use crate::models::UpdateRecord;
use crate::report::{ReportGenerator, NO_UPDATES_MESSAGE};
use crate::store::UpdateStore;
use crate::summarizer::{DemoSummarizer, Summarizer};

pub const DEFAULT_RECENT_LIMIT: usize = 5;

pub const MISSING_SOURCE_MESSAGE: &str = "Please provide a valid source URL.";
pub const MISSING_TEXT_MESSAGE: &str = "Please provide update text to summarize.";

/// Front desk for the three user-facing operations.
///
/// Owns the update store; the fetcher and summarizer are injected so the
/// demo stubs can be replaced by real integrations.
pub struct UpdateDesk {
    store: Mutex<UpdateStore>,
    fetcher: Arc<dyn SourceFetcher>,
    summarizer: Arc<dyn Summarizer>,
    recent_limit: usize,
}

impl UpdateDesk {
    pub fn new(
        fetcher: Arc<dyn SourceFetcher>,
        summarizer: Arc<dyn Summarizer>,
        recent_limit: usize,
    ) -> Self {
        Self {
            store: Mutex::new(UpdateStore::new()),
            fetcher,
            summarizer,
            recent_limit,
        }
    }

    /// Desk wired to the demo fetcher and summarizer
    pub fn demo(recent_limit: usize) -> Self {
        Self::new(
            Arc::new(DemoFetcher::new()),
            Arc::new(DemoSummarizer::new()),
            recent_limit,
        )
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    /// Fetch updates from `source` and keep them for `recent`.
    pub async fn fetch(&self, source: Option<&str>) -> String {
        let source = match source {
            Some(s) if !s.is_empty() => s,
            _ => return MISSING_SOURCE_MESSAGE.to_string(),
        };

        let records = match self.fetcher.fetch_updates(source).await {
            Ok(records) => records,
            Err(e) => {
                warn!(source, "failed to fetch updates: {e:#}");
                return format!("Failed to fetch updates from {}: {}", source, e);
            }
        };

        let count = records.len();
        self.store.lock().append(records);
        info!(source, count, "fetched updates");

        ReportGenerator::fetch_confirmation(count, source)
    }

    /// Summarize a pasted update into a markdown report.
    pub async fn summarize(&self, text: Option<&str>) -> String {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return MISSING_TEXT_MESSAGE.to_string(),
        };

        match self.summarizer.summarize(text).await {
            Ok(summary) => {
                info!(word_count = summary.word_count, "summarized update");
                ReportGenerator::summary(&summary)
            }
            Err(e) => {
                warn!("failed to summarize update: {e:#}");
                format!("Failed to summarize update: {}", e)
            }
        }
    }

    /// Markdown listing of the most recently fetched updates.
    pub fn recent(&self) -> String {
        let records = self.recent_records();
        if records.is_empty() {
            return NO_UPDATES_MESSAGE.to_string();
        }
        debug!(shown = records.len(), "listing recent updates");
        ReportGenerator::recent_updates(&records)
    }

    pub fn recent_records(&self) -> Vec<UpdateRecord> {
        self.store.lock().recent(self.recent_limit)
    }

    pub fn stored_count(&self) -> usize {
        self.store.lock().len()
    }
}
