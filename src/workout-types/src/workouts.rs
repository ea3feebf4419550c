use serde::{Deserialize, Serialize};

use crate::activities::ActivityType;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

/// A single workout as read from the sensors.
///
/// Records are built once from a package and never mutated; every derived
/// value (distance, speed, calories) is computed from these fields on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WorkoutRecord {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl WorkoutRecord {
    pub fn activity_type(&self) -> ActivityType {
        match self {
            WorkoutRecord::Running(_) => ActivityType::Running,
            WorkoutRecord::SportsWalking(_) => ActivityType::SportsWalking,
            WorkoutRecord::Swimming(_) => ActivityType::Swimming,
        }
    }

    pub fn action_count(&self) -> u32 {
        match self {
            WorkoutRecord::Running(r) => r.action_count,
            WorkoutRecord::SportsWalking(w) => w.action_count,
            WorkoutRecord::Swimming(s) => s.action_count,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        match self {
            WorkoutRecord::Running(r) => r.duration_hours,
            WorkoutRecord::SportsWalking(w) => w.duration_hours,
            WorkoutRecord::Swimming(s) => s.duration_hours,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match self {
            WorkoutRecord::Running(r) => r.weight_kg,
            WorkoutRecord::SportsWalking(w) => w.weight_kg,
            WorkoutRecord::Swimming(s) => s.weight_kg,
        }
    }
}

impl From<Running> for WorkoutRecord {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<SportsWalking> for WorkoutRecord {
    fn from(value: SportsWalking) -> Self {
        Self::SportsWalking(value)
    }
}

impl From<Swimming> for WorkoutRecord {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}
