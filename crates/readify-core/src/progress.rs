//! Reading-progress calculation
//!
//! Turns the tracker's three numeric fields into a completion percentage and
//! an estimate of days left. All inputs are untrusted.

use serde::Serialize;

use crate::error::{ReadifyError, Result};
use crate::models::ProgressRecord;

/// Result of a progress calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressReport {
    /// Percentage read, clamped to [0, 100]
    pub pct: f64,
    /// Days needed at the current pace; 0 means finished
    pub days_remaining: u64,
}

impl ProgressReport {
    pub fn is_finished(&self) -> bool {
        self.days_remaining == 0
    }

    /// Rounded percentage, e.g. "42%"
    pub fn percent_label(&self) -> String {
        format!("{}%", self.pct.round())
    }

    pub fn finish_label(&self) -> String {
        if self.is_finished() {
            "Finished".to_string()
        } else {
            format!("{} day(s)", self.days_remaining)
        }
    }
}

/// Compute progress from page counts
pub fn compute_progress(total: i64, read: i64, per_day: i64) -> Result<ProgressReport> {
    if total <= 0 {
        return Err(ReadifyError::invalid("Total pages must be > 0"));
    }
    if read < 0 || read > total {
        return Err(ReadifyError::invalid("Pages read must be 0 to total"));
    }
    if per_day <= 0 {
        return Err(ReadifyError::invalid("Pages per day must be > 0"));
    }

    let pct = (read as f64 / total as f64 * 100.0).clamp(0.0, 100.0);
    let remaining = (total - read).max(0) as u64;
    let days_remaining = remaining.div_ceil(per_day as u64);

    Ok(ProgressReport {
        pct,
        days_remaining,
    })
}

/// Raw tracker form fields
#[derive(Debug, Clone, Default)]
pub struct ProgressForm {
    pub total: String,
    pub read: String,
    pub per_day: String,
}

impl ProgressForm {
    pub fn new(total: impl Into<String>, read: impl Into<String>, per_day: impl Into<String>) -> Self {
        Self {
            total: total.into(),
            read: read.into(),
            per_day: per_day.into(),
        }
    }

    /// Parse and validate the fields into a record ready to be saved
    pub fn to_record(&self) -> Result<ProgressRecord> {
        let total = parse_field(&self.total, "Total pages must be > 0")?;
        let read = parse_field(&self.read, "Pages read must be 0 to total")?;
        let per_day = parse_field(&self.per_day, "Pages per day must be > 0")?;

        let report = compute_progress(total, read, per_day)?;
        Ok(ProgressRecord {
            total: narrow(total)?,
            read: narrow(read)?,
            per_day: narrow(per_day)?,
            pct: report.pct,
        })
    }
}

impl ProgressRecord {
    /// Recompute the report for a saved record
    pub fn report(&self) -> Result<ProgressReport> {
        compute_progress(
            i64::from(self.total),
            i64::from(self.read),
            i64::from(self.per_day),
        )
    }
}

fn parse_field(raw: &str, message: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ReadifyError::invalid(message))
}

fn narrow(value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ReadifyError::invalid("Page counts are too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halfway() {
        let report = compute_progress(100, 50, 10).unwrap();
        assert_eq!(report.pct, 50.0);
        assert_eq!(report.days_remaining, 5);
        assert!(!report.is_finished());
        assert_eq!(report.percent_label(), "50%");
        assert_eq!(report.finish_label(), "5 day(s)");
    }

    #[test]
    fn test_finished() {
        let report = compute_progress(100, 100, 10).unwrap();
        assert_eq!(report.pct, 100.0);
        assert_eq!(report.days_remaining, 0);
        assert!(report.is_finished());
        assert_eq!(report.finish_label(), "Finished");
    }

    #[test]
    fn test_days_round_up() {
        let report = compute_progress(100, 0, 30).unwrap();
        assert_eq!(report.pct, 0.0);
        assert_eq!(report.days_remaining, 4);

        let report = compute_progress(3, 1, 1).unwrap();
        assert_eq!(report.percent_label(), "33%");
        assert_eq!(report.days_remaining, 2);
    }

    #[test]
    fn test_invalid_inputs() {
        let cases = [
            (0, 0, 10, "Total pages must be > 0"),
            (-5, 0, 10, "Total pages must be > 0"),
            (100, 150, 10, "Pages read must be 0 to total"),
            (100, -1, 10, "Pages read must be 0 to total"),
            (100, 50, 0, "Pages per day must be > 0"),
            (100, 50, -3, "Pages per day must be > 0"),
        ];

        for (total, read, per_day, message) in cases {
            match compute_progress(total, read, per_day) {
                Err(ReadifyError::InvalidInput(m)) => assert_eq!(m, message),
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_form_to_record() {
        let record = ProgressForm::new(" 300 ", "75", "25").to_record().unwrap();
        assert_eq!(record.total, 300);
        assert_eq!(record.read, 75);
        assert_eq!(record.per_day, 25);
        assert_eq!(record.pct, 25.0);
        assert_eq!(record.report().unwrap().days_remaining, 9);
    }

    #[test]
    fn test_form_rejects_non_numeric() {
        let err = ProgressForm::new("abc", "1", "1").to_record().unwrap_err();
        assert!(matches!(err, ReadifyError::InvalidInput(_)));

        let err = ProgressForm::new("10", "", "1").to_record().unwrap_err();
        assert_eq!(err.to_string(), "Pages read must be 0 to total");

        let err = ProgressForm::new("10", "1", "fast").to_record().unwrap_err();
        assert_eq!(err.to_string(), "Pages per day must be > 0");
    }

    #[test]
    fn test_form_rejects_out_of_range() {
        let err = ProgressForm::new("10", "11", "1").to_record().unwrap_err();
        assert_eq!(err.to_string(), "Pages read must be 0 to total");
    }
}
