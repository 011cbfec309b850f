// Public modules
pub mod config;
pub mod desk;
pub mod fetcher;
pub mod models;
pub mod report;
pub mod store;
pub mod summarizer;

// Re-export commonly used types
pub use config::Config;
pub use desk::UpdateDesk;
pub use fetcher::{DemoFetcher, SourceFetcher};
pub use models::UpdateRecord;
pub use report::ReportGenerator;
pub use store::UpdateStore;
pub use summarizer::{DemoSummarizer, Summarizer, Summary};
