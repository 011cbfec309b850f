use crate::models::UpdateRecord;
use crate::summarizer::Summary;

pub const NO_UPDATES_MESSAGE: &str = "No updates available. Please fetch updates first.";

/// Renders desk results as markdown for the web page.
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn fetch_confirmation(count: usize, source: &str) -> String {
        format!("Successfully fetched {} updates from {}", count, source)
    }

    pub fn summary(summary: &Summary) -> String {
        let mut md = String::new();

        md.push_str("**AI-Generated Summary:**\n\n");
        md.push_str(&format!(
            "This regulatory update contains {} words. Key points identified:\n\n",
            summary.word_count
        ));
        md.push_str(&format!("- Primary focus: {}\n", summary.primary_focus));
        md.push_str(&format!("- Impact level: {}\n", summary.impact_level));
        md.push_str(&format!(
            "- Implementation timeline: {}\n",
            summary.timeline
        ));
        md.push_str(&format!(
            "- Affected sectors: {}\n",
            summary.affected_sectors
        ));

        if !summary.recommended_actions.is_empty() {
            md.push_str("\n**Recommended Actions:**\n");
            for (i, action) in summary.recommended_actions.iter().enumerate() {
                md.push_str(&format!("{}. {}\n", i + 1, action));
            }
        }

        if let Some(note) = &summary.note {
            md.push_str(&format!("\n*Note: {}*\n", note));
        }

        md
    }

    /// Numbered list of updates, in the order given. Callers handle the
    /// empty case themselves.
    pub fn recent_updates(records: &[UpdateRecord]) -> String {
        let mut md = String::from("**Recent Regulatory Updates:**\n\n");

        for (i, record) in records.iter().enumerate() {
            md.push_str(&format!("{}. **{}**\n", i + 1, record.title()));
            md.push_str(&format!("   Date: {}\n", record.date_label()));
            md.push_str(&format!("   Summary: {}\n", record.summary()));
            md.push_str(&format!("   Source: {}\n\n", record.source()));
        }

        md
    }
}
