use crate::core::PublishReport;
use crate::utils::error::Result;
use std::path::Path;

impl PublishReport {
    /// Writes one CSV row per published order.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(["sequence", "customer_id", "line_items", "status"])?;
        for outcome in &self.outcomes {
            writer.write_record([
                outcome.sequence.to_string(),
                outcome.customer_id.to_string(),
                outcome.line_items.to_string(),
                outcome.status.to_string(),
            ])?;
        }
        writer.flush()?;

        tracing::debug!(
            "Wrote report with {} rows to {}",
            self.outcomes.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    pub fn log_summary(&self) {
        let elapsed = self.finished_at - self.started_at;
        tracing::info!(
            "📦 Published {} orders ({} 2xx, {} other) in {} ms",
            self.total(),
            self.successful(),
            self.failed(),
            elapsed.num_milliseconds()
        );
    }
}
