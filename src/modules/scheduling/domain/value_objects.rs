/// Value objects for the scheduling domain
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Job type: classifies both the required skill and the slot pool partition.
///
/// Serialized with the customer-facing display strings used by the booking
/// surface ("Electrical Repair", ...), so stored records stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Electrical Repair")]
    Electrical,
    #[serde(rename = "HVAC Inspection")]
    Hvac,
    #[serde(rename = "Plumbing Maintenance")]
    Plumbing,
}

impl JobType {
    pub const ALL: [JobType; 3] = [JobType::Electrical, JobType::Hvac, JobType::Plumbing];

    pub fn display_name(&self) -> &'static str {
        match self {
            JobType::Electrical => "Electrical Repair",
            JobType::Hvac => "HVAC Inspection",
            JobType::Plumbing => "Plumbing Maintenance",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for JobType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "electrical repair" | "electrical" => Ok(JobType::Electrical),
            "hvac inspection" | "hvac" => Ok(JobType::Hvac),
            "plumbing maintenance" | "plumbing" => Ok(JobType::Plumbing),
            _ => Err(AppError::InvalidJobType(s.to_string())),
        }
    }
}

/// Job status, serialized lowercase as in the stored records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Scheduled,
    Completed,
    Canceled,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JobStatus::Scheduled => write!(f, "scheduled"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Canceled => write!(f, "canceled"),
        }
    }
}

impl FromStr for JobStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(JobStatus::Scheduled),
            "completed" => Ok(JobStatus::Completed),
            "canceled" => Ok(JobStatus::Canceled),
            _ => Err(AppError::ValidationError(format!("Invalid job status: {}", s))),
        }
    }
}

/// Half-open interval `[start, end)` in UTC.
///
/// All overlap reasoning in the crate goes through this type; touching
/// endpoints never conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Build a window, rejecting `end <= start`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AppError> {
        if end <= start {
            return Err(AppError::InvalidDateRange(format!(
                "end ({}) must be after start ({})",
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse a pair of ISO-8601 instants into a validated window
    pub fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        let start = DateTime::parse_from_rfc3339(start.trim())?.with_timezone(&Utc);
        let end = DateTime::parse_from_rfc3339(end.trim())?.with_timezone(&Utc);
        Self::new(start, end)
    }

    /// Strict interval overlap: `self.start < other.end && self.end > other.start`
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && self.end > other.start
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 16, h, m, 0).unwrap()
    }

    #[test]
    fn job_type_display_round_trip() {
        for jt in JobType::ALL {
            assert_eq!(jt.to_string().parse::<JobType>().unwrap(), jt);
        }
        assert_eq!("HVAC".parse::<JobType>().unwrap(), JobType::Hvac);
        assert!(matches!(
            "Landscaping".parse::<JobType>(),
            Err(AppError::InvalidJobType(_))
        ));
    }

    #[test]
    fn job_type_serializes_as_display_string() {
        let json = serde_json::to_string(&JobType::Electrical).unwrap();
        assert_eq!(json, "\"Electrical Repair\"");
        let back: JobType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, JobType::Electrical);
    }

    #[test]
    fn job_status_from_str() {
        assert_eq!("SCHEDULED".parse::<JobStatus>().unwrap(), JobStatus::Scheduled);
        assert!("done".parse::<JobStatus>().is_err());
    }

    #[test]
    fn window_rejects_inverted_range() {
        assert!(matches!(
            TimeWindow::new(utc(15, 0), utc(14, 0)),
            Err(AppError::InvalidDateRange(_))
        ));
        assert!(TimeWindow::new(utc(14, 0), utc(14, 0)).is_err());
    }

    #[test]
    fn overlap_is_half_open() {
        let morning = TimeWindow::new(utc(10, 0), utc(11, 0)).unwrap();
        let adjacent = TimeWindow::new(utc(11, 0), utc(12, 0)).unwrap();
        let straddling = TimeWindow::new(utc(10, 30), utc(11, 30)).unwrap();

        // Touching endpoints do not conflict
        assert!(!morning.overlaps(&adjacent));
        assert!(!adjacent.overlaps(&morning));

        assert!(morning.overlaps(&straddling));
        assert!(straddling.overlaps(&adjacent));
        assert!(morning.overlaps(&morning));
    }

    #[test]
    fn parse_accepts_rfc3339_and_normalizes_to_utc() {
        let window = TimeWindow::parse("2025-06-16T10:00:00-04:00", "2025-06-16T11:00:00-04:00")
            .unwrap();
        assert_eq!(window.start, utc(14, 0));
        assert_eq!(window.duration_minutes(), 60);

        assert!(TimeWindow::parse("not a date", "2025-06-16T11:00:00Z").is_err());
    }
}
