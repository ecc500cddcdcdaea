use crate::models::{AttendanceRecord, AttendanceStatus, WeeklySummary};

/// Folds a window's records into the summary counters. Pure function of the
/// record set; records with pending hours contribute nothing to the total,
/// known-zero days contribute zero.
pub fn build_summary(records: &[AttendanceRecord]) -> WeeklySummary {
    let mut summary = WeeklySummary::default();
    let mut total = 0.0;

    for record in records {
        if let Some(hours) = record.working_hours.as_hours() {
            total += hours;
        }
        match record.status {
            AttendanceStatus::Present => summary.on_time_count += 1,
            AttendanceStatus::Late => summary.late_count += 1,
            AttendanceStatus::Absent => summary.absent_count += 1,
        }
    }

    summary.total_hours = round_tenths(total);
    summary
}

/// Round half-up to one decimal. Hours are never negative here.
pub(crate) fn round_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}
