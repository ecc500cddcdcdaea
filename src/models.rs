use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A Monday-aligned 7-day window. Computed fresh on every navigation and
/// replaced wholesale, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    /// Gregorian year of `monday`, used for display labels. Not corrected to
    /// the ISO week-year at year boundaries.
    pub year: i32,
    /// ISO-8601 week number (1-53) of `monday`.
    pub week_number: u32,
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemporalBucket {
    Past,
    Today,
    Future,
}

/// Working hours for a day. `Pending` ("-") means the value is unknown: a
/// future day, or today before check-out. `Zero` ("0.0") is a known zero for
/// an absent past day. The two must not collapse into each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkedHours {
    Pending,
    Zero,
    Logged(f64),
}

impl WorkedHours {
    /// Numeric value when one exists; `Pending` has none.
    pub fn as_hours(&self) -> Option<f64> {
        match self {
            WorkedHours::Pending => None,
            WorkedHours::Zero => Some(0.0),
            WorkedHours::Logged(hours) => Some(*hours),
        }
    }
}

impl Serialize for WorkedHours {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WorkedHours::Pending => serializer.serialize_str("-"),
            WorkedHours::Zero => serializer.serialize_str("0.0"),
            WorkedHours::Logged(hours) => serializer.serialize_str(&format!("{hours:.1}")),
        }
    }
}

impl<'de> Deserialize<'de> for WorkedHours {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "-" => Ok(WorkedHours::Pending),
            "0.0" => Ok(WorkedHours::Zero),
            other => other
                .parse::<f64>()
                .map(WorkedHours::Logged)
                .map_err(|_| serde::de::Error::custom(format!("bad working_hours value: {other}"))),
        }
    }
}

/// One tracked day's check-in/check-out record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// 1-based, assigned in ascending date order within a window.
    pub id: u32,
    pub date: NaiveDate,
    /// Short weekday label ("Mon" .. "Sat").
    pub day_of_week: String,
    #[serde(with = "dash_time")]
    pub check_in: Option<NaiveTime>,
    #[serde(with = "dash_time")]
    pub check_out: Option<NaiveTime>,
    pub working_hours: WorkedHours,
    pub status: AttendanceStatus,
    pub is_today: bool,
}

/// One card in the 7-day week selector.
#[derive(Debug, Clone, Serialize)]
pub struct DaySlot {
    pub date: NaiveDate,
    pub weekday: String,
    pub bucket: TemporalBucket,
    /// False on Sunday: no attendance is recorded for it.
    pub tracked: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub total_hours: f64,
    pub on_time_count: u32,
    pub late_count: u32,
    pub absent_count: u32,
}

/// Everything the dashboard page needs for one window.
#[derive(Debug, Serialize)]
pub struct WeekResponse {
    pub window: WeekWindow,
    pub days: Vec<DaySlot>,
    pub records: Vec<AttendanceRecord>,
    pub summary: WeeklySummary,
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    /// Whole weeks relative to the reference date's window. Default 0.
    pub offset: Option<i64>,
    /// Reference date override, YYYY-MM-DD. Defaults to the clock's today.
    pub date: Option<String>,
}

/// Clock times on the wire use an "H:MM" shape (unpadded hour) with "-" for
/// a missing value.
mod dash_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_str(&super::format_clock(*time)),
            None => serializer.serialize_str("-"),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == "-" {
            return Ok(None);
        }
        let (hour, minute) = raw
            .split_once(':')
            .ok_or_else(|| serde::de::Error::custom(format!("bad clock time: {raw}")))?;
        let hour: u32 = hour
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("bad clock time: {raw}")))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("bad clock time: {raw}")))?;
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("bad clock time: {raw}")))
    }
}

pub(crate) fn format_clock(time: NaiveTime) -> String {
    format!("{}:{:02}", time.hour(), time.minute())
}
