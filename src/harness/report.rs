//! CSV emission for experiment results.

use std::path::Path;

use serde::Serialize;

use crate::common::Result;
use crate::harness::measure::PhaseMeasurement;

/// One CSV row: a single phase of a single engine at a single data size.
///
/// Long form (one row per measurement) rather than one wide row per data
/// size, so downstream tooling can pivot however it likes.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub data_size: usize,
    pub engine: &'static str,
    pub phase: &'static str,
    pub elapsed_us: u64,
    pub process_rss_kb: u64,
}

impl ReportRow {
    pub fn new(
        data_size: usize,
        engine: &'static str,
        phase: &'static str,
        measurement: PhaseMeasurement,
    ) -> Self {
        Self {
            data_size,
            engine,
            phase,
            elapsed_us: measurement.elapsed_us,
            process_rss_kb: measurement.process_rss_kb,
        }
    }
}

/// Write all rows to `path` as CSV with a header row.
///
/// # Errors
/// Propagates file-creation and serialization failures.
pub fn write_csv(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_row(phase: &'static str) -> ReportRow {
        ReportRow::new(
            100,
            "bptree",
            phase,
            PhaseMeasurement {
                elapsed_us: 1234,
                process_rss_kb: 2048,
            },
        )
    }

    #[test]
    fn test_write_csv_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.csv");

        write_csv(&path, &[sample_row("insert"), sample_row("search")]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("data_size,engine,phase,elapsed_us,process_rss_kb")
        );
        assert_eq!(lines.next(), Some("100,bptree,insert,1234,2048"));
        assert_eq!(lines.next(), Some("100,bptree,search,1234,2048"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_csv_empty_rows_still_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&path, &[]).unwrap();
        assert!(path.exists());
    }
}
