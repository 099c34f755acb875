use chrono::{DateTime, Utc};

use crate::error::ModelError;

/// Read-only encounter facts available to computed cell functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncounterContext {
    start: DateTime<Utc>,
    stop: DateTime<Utc>,
}

impl EncounterContext {
    pub fn new(start: DateTime<Utc>, stop: DateTime<Utc>) -> Self {
        Self { start, stop }
    }

    /// Build a context from epoch-millisecond timestamps, the unit used by
    /// the simulation's health records.
    pub fn from_millis(start: i64, stop: i64) -> Result<Self, ModelError> {
        let start =
            DateTime::from_timestamp_millis(start).ok_or(ModelError::TimestampOutOfRange(start))?;
        let stop =
            DateTime::from_timestamp_millis(stop).ok_or(ModelError::TimestampOutOfRange(stop))?;
        Ok(Self { start, stop })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn stop(&self) -> DateTime<Utc> {
        self.stop
    }
}
