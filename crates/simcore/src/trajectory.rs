//! Append-only log of a simulation run.

use serde::{Deserialize, Serialize};

/// One entry per simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    pub step: usize,
    /// Effective throttle after noise
    pub throttle: f64,
    /// Velocity after this step's integration (m/s)
    pub velocity: f64,
    pub acceleration: f64,
    /// Tracking error the controller saw at this step
    pub error: f64,
}

/// Aligned columns for a plotting collaborator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectorySeries {
    pub steps: Vec<f64>,
    pub throttle: Vec<f64>,
    pub velocity: Vec<f64>,
    pub error: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    records: Vec<TrajectoryRecord>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            records: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, record: TrajectoryRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TrajectoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TrajectoryRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryRecord> {
        self.records.iter()
    }

    /// First record whose velocity is at or above `target`.
    pub fn first_reaching(&self, target: f64) -> Option<&TrajectoryRecord> {
        self.records.iter().find(|r| r.velocity >= target)
    }

    /// Split the log into step, throttle, velocity and error columns.
    pub fn series(&self) -> TrajectorySeries {
        let n = self.records.len();
        let mut series = TrajectorySeries {
            steps: Vec::with_capacity(n),
            throttle: Vec::with_capacity(n),
            velocity: Vec::with_capacity(n),
            error: Vec::with_capacity(n),
        };
        for r in &self.records {
            series.steps.push(r.step as f64);
            series.throttle.push(r.throttle);
            series.velocity.push(r.velocity);
            series.error.push(r.error);
        }
        series
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryRecord;
    type IntoIter = std::slice::Iter<'a, TrajectoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
