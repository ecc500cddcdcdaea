use crate::calendar::{classify_day, short_day_name};
use crate::clock::Clock;
use crate::models::{AttendanceRecord, AttendanceStatus, TemporalBucket, WorkedHours};
use crate::stats::round_tenths;
use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration as StdDuration;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("record source unavailable: {0}")]
    Unavailable(String),
    #[error("record batch violates the window contract: {0}")]
    BadBatch(String),
}

/// Supplies attendance records for a date range. The simulated source below
/// implements this today; a real backend replaces it without touching the
/// window or aggregation logic.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Returns records for tracked (non-Sunday) days in `[start, end]`
    /// inclusive, date-ascending, with ids unique within the batch.
    async fn fetch_records(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, SourceError>;
}

/// Checks a batch against the `fetch_records` contract. Callers treat a
/// violating batch the same as a failed fetch: no data for the window.
pub fn validate_batch(
    start: NaiveDate,
    end: NaiveDate,
    records: &[AttendanceRecord],
) -> Result<(), SourceError> {
    let mut prev: Option<&AttendanceRecord> = None;
    for record in records {
        if record.date < start || record.date > end {
            return Err(SourceError::BadBatch(format!(
                "{} outside {start}..={end}",
                record.date
            )));
        }
        if record.date.weekday() == Weekday::Sun {
            return Err(SourceError::BadBatch(format!("{} is a Sunday", record.date)));
        }
        if let Some(prev) = prev {
            if record.date <= prev.date {
                return Err(SourceError::BadBatch(format!(
                    "dates not ascending at {}",
                    record.date
                )));
            }
            if record.id <= prev.id {
                return Err(SourceError::BadBatch(format!(
                    "ids not ascending at {}",
                    record.id
                )));
            }
        }
        prev = Some(record);
    }
    Ok(())
}

/// Thresholds and sampling windows for the simulated workday.
#[derive(Debug, Clone)]
pub struct ShiftPolicy {
    /// Today's record is withheld entirely before this hour.
    pub workday_start_hour: u32,
    /// Today's check-out and hours stay pending before this hour.
    pub workday_end_hour: u32,
    pub check_in_base: NaiveTime,
    pub check_in_spread_mins: u32,
    pub check_out_base: NaiveTime,
    pub check_out_spread_mins: u32,
    /// Strictly after this time counts as late; exactly on it does not.
    pub late_after: NaiveTime,
    pub absent_rate: f64,
}

impl Default for ShiftPolicy {
    fn default() -> Self {
        Self {
            workday_start_hour: 8,
            workday_end_hour: 17,
            check_in_base: hm(8, 30),
            check_in_spread_mins: 45,
            check_out_base: hm(17, 0),
            check_out_spread_mins: 90,
            late_after: hm(9, 0),
            absent_rate: 0.10,
        }
    }
}

impl ShiftPolicy {
    fn draw_check_in(&self, rng: &mut impl Rng) -> NaiveTime {
        draw_time(self.check_in_base, self.check_in_spread_mins, rng)
    }

    fn draw_check_out(&self, rng: &mut impl Rng) -> NaiveTime {
        draw_time(self.check_out_base, self.check_out_spread_mins, rng)
    }

    fn status_for(&self, check_in: NaiveTime) -> AttendanceStatus {
        if check_in > self.late_after {
            AttendanceStatus::Late
        } else {
            AttendanceStatus::Present
        }
    }
}

fn draw_time(base: NaiveTime, spread_mins: u32, rng: &mut impl Rng) -> NaiveTime {
    if spread_mins == 0 {
        return base;
    }
    base + Duration::minutes(rng.gen_range(0..spread_mins) as i64)
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Generates one record per tracked day in `[start, end]`, ids starting at 1.
pub fn synthesize_week(
    start: NaiveDate,
    end: NaiveDate,
    now: NaiveDateTime,
    policy: &ShiftPolicy,
    rng: &mut impl Rng,
) -> Vec<AttendanceRecord> {
    let mut records = Vec::new();
    let mut id = 1;
    let mut date = start;
    while date <= end {
        if classify_day(date, now.date()).tracked {
            records.push(synthesize_record(id, date, now, policy, rng));
            id += 1;
        }
        date = date + Duration::days(1);
    }
    records
}

/// Fabricates a plausible record for one tracked day relative to `now`.
pub fn synthesize_record(
    id: u32,
    date: NaiveDate,
    now: NaiveDateTime,
    policy: &ShiftPolicy,
    rng: &mut impl Rng,
) -> AttendanceRecord {
    let bucket = classify_day(date, now.date()).bucket;
    let mut record = AttendanceRecord {
        id,
        date,
        day_of_week: short_day_name(date),
        check_in: None,
        check_out: None,
        working_hours: WorkedHours::Pending,
        status: AttendanceStatus::Absent,
        is_today: bucket == TemporalBucket::Today,
    };

    match bucket {
        TemporalBucket::Future => record,
        TemporalBucket::Today => {
            if now.hour() < policy.workday_start_hour {
                // Not checked in yet.
                return record;
            }
            let check_in = policy.draw_check_in(rng);
            record.check_in = Some(check_in);
            record.status = policy.status_for(check_in);
            if now.hour() >= policy.workday_end_hour {
                let check_out = policy.draw_check_out(rng);
                record.check_out = Some(check_out);
                record.working_hours = WorkedHours::Logged(hours_between(check_in, check_out));
            }
            record
        }
        TemporalBucket::Past => {
            if rng.gen_bool(policy.absent_rate) {
                // A known full-day absence, not a missing value.
                record.working_hours = WorkedHours::Zero;
                return record;
            }
            let check_in = policy.draw_check_in(rng);
            let check_out = policy.draw_check_out(rng);
            record.check_in = Some(check_in);
            record.check_out = Some(check_out);
            record.working_hours = WorkedHours::Logged(hours_between(check_in, check_out));
            record.status = policy.status_for(check_in);
            record
        }
    }
}

pub fn hours_between(check_in: NaiveTime, check_out: NaiveTime) -> f64 {
    round_tenths((check_out - check_in).num_minutes() as f64 / 60.0)
}

/// Seeded stand-in for a real attendance backend. Kept behind `RecordSource`
/// so production wiring can swap it out.
pub struct SimulatedSource {
    policy: ShiftPolicy,
    clock: Arc<dyn Clock>,
    latency: StdDuration,
    rng: Mutex<StdRng>,
}

impl SimulatedSource {
    pub fn new(seed: u64, clock: Arc<dyn Clock>) -> Self {
        Self::with_policy(ShiftPolicy::default(), seed, clock)
    }

    pub fn with_policy(policy: ShiftPolicy, seed: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            policy,
            clock,
            latency: StdDuration::ZERO,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Artificial delay standing in for network round-trip time.
    pub fn with_latency(mut self, latency: StdDuration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl RecordSource for SimulatedSource {
    async fn fetch_records(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, SourceError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let now = self.clock.now();
        let mut rng = self.rng.lock().await;
        Ok(synthesize_week(start, end, now, &self.policy, &mut *rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
        day.and_hms_opt(hour, minute, 0).unwrap()
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    // 2025-03-10 is a Monday.
    fn monday() -> NaiveDate {
        date(2025, 3, 10)
    }

    fn sunday() -> NaiveDate {
        monday() + Duration::days(6)
    }

    #[test]
    fn week_synthesis_skips_sunday_and_numbers_sequentially() {
        let now = at(date(2025, 4, 2), 12, 0);
        let records = synthesize_week(monday(), sunday(), now, &ShiftPolicy::default(), &mut rng(1));

        assert_eq!(records.len(), 6);
        assert!(records.iter().all(|r| r.date.weekday() != Weekday::Sun));
        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert!(validate_batch(monday(), sunday(), &records).is_ok());
    }

    #[test]
    fn future_days_are_withheld() {
        let now = at(date(2025, 3, 3), 12, 0);
        let records = synthesize_week(monday(), sunday(), now, &ShiftPolicy::default(), &mut rng(2));

        for record in records {
            assert_eq!(record.status, AttendanceStatus::Absent);
            assert_eq!(record.check_in, None);
            assert_eq!(record.check_out, None);
            assert_eq!(record.working_hours, WorkedHours::Pending);
            assert!(!record.is_today);
        }
    }

    #[test]
    fn today_before_workday_start_is_withheld() {
        let now = at(monday(), 7, 30);
        let record = synthesize_record(1, monday(), now, &ShiftPolicy::default(), &mut rng(3));

        assert!(record.is_today);
        assert_eq!(record.status, AttendanceStatus::Absent);
        assert_eq!(record.check_in, None);
        assert_eq!(record.working_hours, WorkedHours::Pending);
    }

    #[test]
    fn today_mid_workday_has_check_in_only() {
        let now = at(monday(), 12, 0);
        let record = synthesize_record(1, monday(), now, &ShiftPolicy::default(), &mut rng(4));

        assert!(record.is_today);
        assert!(record.check_in.is_some());
        assert_eq!(record.check_out, None);
        assert_eq!(record.working_hours, WorkedHours::Pending);
        assert_ne!(record.status, AttendanceStatus::Absent);
    }

    #[test]
    fn today_after_workday_end_is_complete() {
        let now = at(monday(), 19, 0);
        let record = synthesize_record(1, monday(), now, &ShiftPolicy::default(), &mut rng(5));

        assert!(record.is_today);
        assert!(record.check_in.is_some());
        assert!(record.check_out.is_some());
        assert!(matches!(record.working_hours, WorkedHours::Logged(_)));
    }

    #[test]
    fn absent_past_day_carries_known_zero_hours() {
        let policy = ShiftPolicy {
            absent_rate: 1.0,
            ..ShiftPolicy::default()
        };
        let now = at(date(2025, 4, 2), 12, 0);
        let record = synthesize_record(1, monday(), now, &policy, &mut rng(6));

        assert_eq!(record.status, AttendanceStatus::Absent);
        assert_eq!(record.check_in, None);
        assert_eq!(record.check_out, None);
        assert_eq!(record.working_hours, WorkedHours::Zero);
    }

    #[test]
    fn attended_past_day_samples_within_the_policy_windows() {
        let policy = ShiftPolicy {
            absent_rate: 0.0,
            ..ShiftPolicy::default()
        };
        let now = at(date(2025, 4, 2), 12, 0);

        for seed in 0..50 {
            let record = synthesize_record(1, monday(), now, &policy, &mut rng(seed));
            let check_in = record.check_in.unwrap();
            let check_out = record.check_out.unwrap();
            assert!(check_in >= hm(8, 30) && check_in < hm(9, 15), "check_in {check_in}");
            assert!(check_out >= hm(17, 0) && check_out < hm(18, 30), "check_out {check_out}");
            assert_eq!(
                record.working_hours,
                WorkedHours::Logged(hours_between(check_in, check_out))
            );
        }
    }

    #[test]
    fn late_means_strictly_after_nine() {
        let policy = ShiftPolicy::default();
        assert_eq!(policy.status_for(hm(8, 59)), AttendanceStatus::Present);
        assert_eq!(policy.status_for(hm(9, 0)), AttendanceStatus::Present);
        assert_eq!(policy.status_for(hm(9, 1)), AttendanceStatus::Late);
    }

    #[test]
    fn hours_round_half_up_to_one_decimal() {
        // 8h45m worked: 8.75 rounds up.
        assert_eq!(hours_between(hm(8, 45), hm(17, 30)), 8.8);
        assert_eq!(hours_between(hm(9, 0), hm(17, 0)), 8.0);
        assert_eq!(hours_between(hm(8, 30), hm(17, 4)), 8.6);
        assert_eq!(hours_between(hm(8, 40), hm(17, 20)), 8.7);
    }

    #[test]
    fn validate_batch_accepts_a_conforming_week() {
        let now = at(date(2025, 4, 2), 12, 0);
        let records = synthesize_week(monday(), sunday(), now, &ShiftPolicy::default(), &mut rng(7));
        assert!(validate_batch(monday(), sunday(), &records).is_ok());
    }

    #[test]
    fn validate_batch_rejects_contract_violations() {
        let now = at(date(2025, 4, 2), 12, 0);
        let records = synthesize_week(monday(), sunday(), now, &ShiftPolicy::default(), &mut rng(8));

        let mut out_of_window = records.clone();
        out_of_window[0].date = monday() - Duration::days(1);
        assert!(validate_batch(monday(), sunday(), &out_of_window).is_err());

        let mut on_sunday = records.clone();
        on_sunday[5].date = sunday();
        assert!(validate_batch(monday(), sunday(), &on_sunday).is_err());

        let mut duplicate_id = records.clone();
        duplicate_id[1].id = duplicate_id[0].id;
        assert!(validate_batch(monday(), sunday(), &duplicate_id).is_err());

        let mut reordered = records;
        reordered.swap(0, 1);
        assert!(validate_batch(monday(), sunday(), &reordered).is_err());
    }

    #[tokio::test]
    async fn simulated_source_honors_the_fetch_contract() {
        let clock = Arc::new(FixedClock(at(date(2025, 3, 12), 14, 0)));
        let source = SimulatedSource::new(42, clock);

        let records = source.fetch_records(monday(), sunday()).await.unwrap();
        assert!(validate_batch(monday(), sunday(), &records).is_ok());
        assert_eq!(records.len(), 6);
        assert_eq!(records.iter().filter(|r| r.is_today).count(), 1);

        // Wednesday the 12th at 14:00: checked in, not yet out.
        let today = records.iter().find(|r| r.is_today).unwrap();
        assert!(today.check_in.is_some());
        assert_eq!(today.check_out, None);
        assert_eq!(today.working_hours, WorkedHours::Pending);
    }
}
