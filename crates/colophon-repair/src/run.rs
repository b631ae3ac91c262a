//! The fetch → transform → compare → save loop shared by both repairs.

use std::fmt;

use colophon_core::EditionRecord;

use crate::client::CatalogClient;

/// Outcome for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    /// The transform changed the record and it was saved (or would have
    /// been, under a dry run).
    Updated,
    /// The transform was the identity; nothing was written.
    AlreadyCurrent,
    /// The catalog has no record under this OLID.
    NotFound,
    /// Fetch, transform, or save failed; the batch continued.
    Failed(String),
}

/// Tally of a repair run.
#[derive(Debug, Default)]
pub struct RepairSummary {
    pub updated: Vec<String>,
    pub already_current: Vec<String>,
    pub not_found: Vec<String>,
    pub failed: Vec<(String, String)>,
}

impl RepairSummary {
    /// Record one per-record outcome.
    pub fn record(&mut self, olid: &str, status: RecordStatus) {
        match status {
            RecordStatus::Updated => self.updated.push(olid.to_string()),
            RecordStatus::AlreadyCurrent => self.already_current.push(olid.to_string()),
            RecordStatus::NotFound => self.not_found.push(olid.to_string()),
            RecordStatus::Failed(reason) => self.failed.push((olid.to_string(), reason)),
        }
    }

    /// Number of records visited.
    pub fn total(&self) -> usize {
        self.updated.len() + self.already_current.len() + self.not_found.len() + self.failed.len()
    }
}

impl fmt::Display for RepairSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Process complete")?;
        writeln!(f, "  updated:         {}", self.updated.len())?;
        writeln!(f, "  already current: {}", self.already_current.len())?;
        writeln!(f, "  not found:       {}", self.not_found.len())?;
        writeln!(f, "  failed:          {}", self.failed.len())?;
        write!(f, "  total:           {}", self.total())?;

        for (olid, reason) in &self.failed {
            write!(f, "\n    {olid}: {reason}")?;
        }

        Ok(())
    }
}

/// Run a repair over the given candidate OLIDs, one record at a time.
///
/// `transform` must be pure: the fetched record is compared with its
/// output, and only a differing record is written back with `comment` as
/// the audit note. Per-record failures (a malformed ISBN, a failed fetch
/// or save) are reported and recorded but never stop the rest of the
/// batch; one bad record must not block the repair of the others.
///
/// With `dry_run` set, records that would change are counted as updated
/// but nothing is written.
pub async fn run_repair<F>(
    client: &CatalogClient,
    olids: &[String],
    transform: F,
    comment: &str,
    dry_run: bool,
) -> RepairSummary
where
    F: Fn(&EditionRecord) -> colophon_core::Result<EditionRecord>,
{
    let mut summary = RepairSummary::default();

    for olid in olids {
        let status = process_record(client, olid, &transform, comment, dry_run).await;
        match &status {
            RecordStatus::Updated => println!("updated {olid}"),
            RecordStatus::AlreadyCurrent => println!("already current: {olid}"),
            RecordStatus::NotFound => println!("skipping {olid}: not found"),
            RecordStatus::Failed(reason) => eprintln!("failed {olid}: {reason}"),
        }
        summary.record(olid, status);
    }

    summary
}

async fn process_record<F>(
    client: &CatalogClient,
    olid: &str,
    transform: &F,
    comment: &str,
    dry_run: bool,
) -> RecordStatus
where
    F: Fn(&EditionRecord) -> colophon_core::Result<EditionRecord>,
{
    let record = match client.get_record(olid).await {
        Ok(Some(record)) => record,
        Ok(None) => return RecordStatus::NotFound,
        Err(e) => return RecordStatus::Failed(format!("fetch: {e}")),
    };

    let repaired = match transform(&record) {
        Ok(repaired) => repaired,
        Err(e) => return RecordStatus::Failed(e.to_string()),
    };

    // Exact structural equality is the no-op test; nothing heuristic.
    if repaired == record {
        return RecordStatus::AlreadyCurrent;
    }

    if dry_run {
        log::info!("dry run: would save {olid}");
        return RecordStatus::Updated;
    }

    match client.save_record(olid, &repaired, comment).await {
        Ok(()) => RecordStatus::Updated,
        Err(e) => RecordStatus::Failed(format!("save: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_accounting_across_mixed_outcomes() {
        let mut summary = RepairSummary::default();
        summary.record("OL1M", RecordStatus::Updated);
        summary.record("OL2M", RecordStatus::AlreadyCurrent);
        summary.record("OL3M", RecordStatus::NotFound);
        summary.record(
            "OL4M",
            RecordStatus::Failed("invalid ISBN \"1234\": length is neither 10 nor 13".to_string()),
        );
        summary.record("OL5M", RecordStatus::Updated);

        assert_eq!(summary.updated, ["OL1M", "OL5M"]);
        assert_eq!(summary.already_current, ["OL2M"]);
        assert_eq!(summary.not_found, ["OL3M"]);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.total(), 5);
    }

    #[test]
    fn test_summary_display_names_failed_records() {
        let mut summary = RepairSummary::default();
        summary.record("OL1M", RecordStatus::Updated);
        summary.record("OL4M", RecordStatus::Failed("fetch: timed out".to_string()));

        let report = summary.to_string();
        assert!(report.contains("updated:         1"));
        assert!(report.contains("failed:          1"));
        assert!(report.contains("total:           2"));
        assert!(report.contains("OL4M: fetch: timed out"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = RepairSummary::default();
        assert_eq!(summary.total(), 0);
        assert!(summary.to_string().contains("total:           0"));
    }
}
