use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive date range picked in the sidebar.
///
/// Filtering compares order timestamps against midnight of both dates, so
/// orders placed after 00:00:00 on `date_to` fall outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

impl DateRange {
    pub fn new(date_from: NaiveDate, date_to: NaiveDate) -> Self {
        Self { date_from, date_to }
    }

    /// Whole days between the two dates (`date_to - date_from`).
    pub fn span_days(&self) -> i64 {
        (self.date_to - self.date_from).num_days()
    }
}

impl Default for DateRange {
    /// The 2015 reporting year.
    fn default() -> Self {
        Self {
            date_from: NaiveDate::from_ymd_opt(2015, 1, 1).unwrap_or_default(),
            date_to: NaiveDate::from_ymd_opt(2015, 12, 31).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_days() {
        let range = DateRange::default();
        assert_eq!(range.span_days(), 364);
        let same = DateRange::new(range.date_from, range.date_from);
        assert_eq!(same.span_days(), 0);
    }
}
