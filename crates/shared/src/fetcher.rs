use anyhow::Result;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};

use crate::models::UpdateRecord;

/// Something that can pull regulatory updates from a source.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    async fn fetch_updates(&self, source: &str) -> Result<Vec<UpdateRecord>>;
}

const DEMO_UPDATES: [(&str, &str); 2] = [
    (
        "New Environmental Compliance Guidelines",
        "Updated guidelines for environmental impact assessments.",
    ),
    (
        "Financial Services Regulation Update",
        "Changes to reporting requirements for financial institutions.",
    ),
];

/// Placeholder fetcher that never touches the network.
///
/// Every call yields the same two updates, dated today and tagged with the
/// requested source.
#[derive(Debug, Clone, Default)]
pub struct DemoFetcher {
    fixed_date: Option<NaiveDate>,
}

impl DemoFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp records with `date` instead of the current local date
    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            fixed_date: Some(date),
        }
    }

    fn today(&self) -> NaiveDate {
        self.fixed_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

#[async_trait]
impl SourceFetcher for DemoFetcher {
    async fn fetch_updates(&self, source: &str) -> Result<Vec<UpdateRecord>> {
        let date = self.today();
        Ok(DEMO_UPDATES
            .iter()
            .map(|(title, summary)| UpdateRecord::new(*title, *summary, date, source))
            .collect())
    }
}
