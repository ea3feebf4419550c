use std::fmt::Display;

use serde::Serialize;
use workout_codec::WorkoutError;
use workout_types::{ActivityType, WorkoutRecord};

use crate::metrics::WorkoutMetrics;

/// Summary of a finished workout, rendered with three decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: ActivityType,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn from_record(record: &WorkoutRecord) -> Result<Self, WorkoutError> {
        WorkoutMetrics::calculate(record).map(Self::from)
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<WorkoutMetrics> for InfoMessage {
    fn from(metrics: WorkoutMetrics) -> Self {
        Self {
            training_type: metrics.activity,
            duration: metrics.duration_hours,
            distance: metrics.distance_km,
            speed: metrics.mean_speed_kmh,
            calories: metrics.calories_kcal,
        }
    }
}

impl Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; ",
            self.training_type, self.duration, self.distance,
        ))?;
        f.write_fmt(format_args!(
            "Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.speed, self.calories,
        ))?;
        Ok(())
    }
}

pub fn format_report(record: &WorkoutRecord) -> Result<String, WorkoutError> {
    InfoMessage::from_record(record).map(|info| info.message())
}
