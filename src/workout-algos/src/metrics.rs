use serde::Serialize;
use workout_codec::WorkoutError;
use workout_types::{ActivityType, WorkoutRecord};

use crate::helpers::math::floor_div;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkoutMetrics {
    pub activity: ActivityType,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

/// Distance, speed and energy formulas for each workout type.
///
/// Distance is `actions x step length`. Mean speed is distance over duration,
/// except for swimming where it is the pool length times completed laps.
/// Calories:
/// - running: `(18 x speed - 20) x weight / 1000 x minutes`
/// - sports walking: `(0.035 x weight + floor(speed^2 / height) x 0.029 x weight) x minutes`
/// - swimming: `(speed + 1.1) x 2 x weight`
impl WorkoutMetrics {
    pub const M_IN_KM: f64 = 1000.0;
    pub const MIN_IN_HOUR: f64 = 60.0;

    const RUN_SPEED_MULTIPLIER: f64 = 18.0;
    const RUN_SPEED_SHIFT: f64 = 20.0;

    const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
    const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    const SWIM_SPEED_SHIFT: f64 = 1.1;
    const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn calculate(record: &WorkoutRecord) -> Result<Self, WorkoutError> {
        let duration_hours = Self::checked_duration(record)?;
        let mean_speed_kmh = Self::speed(record, duration_hours);

        Ok(Self {
            activity: record.activity_type(),
            duration_hours,
            distance_km: Self::distance_km(record),
            mean_speed_kmh,
            calories_kcal: Self::calories(record, mean_speed_kmh),
        })
    }

    pub fn distance_km(record: &WorkoutRecord) -> f64 {
        let step_length_m = record.activity_type().step_length_m();
        f64::from(record.action_count()) * step_length_m / Self::M_IN_KM
    }

    pub fn mean_speed_kmh(record: &WorkoutRecord) -> Result<f64, WorkoutError> {
        let duration_hours = Self::checked_duration(record)?;
        Ok(Self::speed(record, duration_hours))
    }

    pub fn calories_kcal(record: &WorkoutRecord) -> Result<f64, WorkoutError> {
        let mean_speed_kmh = Self::mean_speed_kmh(record)?;
        Ok(Self::calories(record, mean_speed_kmh))
    }

    fn checked_duration(record: &WorkoutRecord) -> Result<f64, WorkoutError> {
        let duration_hours = record.duration_hours();
        if duration_hours.is_finite() && duration_hours > 0.0 {
            Ok(duration_hours)
        } else {
            Err(WorkoutError::InvalidDuration(duration_hours))
        }
    }

    fn speed(record: &WorkoutRecord, duration_hours: f64) -> f64 {
        match record {
            WorkoutRecord::Swimming(swim) => {
                swim.pool_length_m * f64::from(swim.pool_laps) / Self::M_IN_KM / duration_hours
            }
            WorkoutRecord::Running(_) | WorkoutRecord::SportsWalking(_) => {
                Self::distance_km(record) / duration_hours
            }
        }
    }

    fn calories(record: &WorkoutRecord, mean_speed_kmh: f64) -> f64 {
        match record {
            WorkoutRecord::Running(run) => {
                (Self::RUN_SPEED_MULTIPLIER * mean_speed_kmh - Self::RUN_SPEED_SHIFT)
                    * run.weight_kg
                    / Self::M_IN_KM
                    * run.duration_hours
                    * Self::MIN_IN_HOUR
            }
            WorkoutRecord::SportsWalking(walk) => {
                (Self::WALK_WEIGHT_MULTIPLIER * walk.weight_kg
                    + floor_div(mean_speed_kmh.powi(2), walk.height_cm)
                        * Self::WALK_SPEED_HEIGHT_MULTIPLIER
                        * walk.weight_kg)
                    * walk.duration_hours
                    * Self::MIN_IN_HOUR
            }
            WorkoutRecord::Swimming(swim) => {
                (mean_speed_kmh + Self::SWIM_SPEED_SHIFT)
                    * Self::SWIM_WEIGHT_MULTIPLIER
                    * swim.weight_kg
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use workout_types::{Running, SportsWalking, Swimming};

    const EPS: f64 = 1e-9;

    fn running(action_count: u32, duration_hours: f64, weight_kg: f64) -> WorkoutRecord {
        Running {
            action_count,
            duration_hours,
            weight_kg,
        }
        .into()
    }

    fn walking(duration_hours: f64) -> WorkoutRecord {
        SportsWalking {
            action_count: 9000,
            duration_hours,
            weight_kg: 75.0,
            height_cm: 180.0,
        }
        .into()
    }

    fn swimming(duration_hours: f64) -> WorkoutRecord {
        Swimming {
            action_count: 720,
            duration_hours,
            weight_kg: 80.0,
            pool_length_m: 25.0,
            pool_laps: 40,
        }
        .into()
    }

    #[test]
    fn running_metrics() {
        let metrics = WorkoutMetrics::calculate(&running(15000, 1.0, 75.0)).unwrap();
        assert_eq!(metrics.activity, ActivityType::Running);
        assert!((metrics.distance_km - 9.75).abs() < EPS);
        assert!((metrics.mean_speed_kmh - 9.75).abs() < EPS);
        assert!((metrics.calories_kcal - 699.75).abs() < EPS);
    }

    #[test]
    fn running_calories_are_pure() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let action_count = rng.random_range(1..50_000);
            let duration_hours = rng.random_range(0.1..5.0);
            let weight_kg = rng.random_range(40.0..150.0);

            let record = running(action_count, duration_hours, weight_kg);
            let first = WorkoutMetrics::calories_kcal(&record);
            let second = WorkoutMetrics::calories_kcal(&running(action_count, duration_hours, weight_kg));
            assert_eq!(first, second);

            let speed = f64::from(action_count) * 0.65 / 1000.0 / duration_hours;
            let expected = (18.0 * speed - 20.0) * weight_kg / 1000.0 * duration_hours * 60.0;
            assert!((first.unwrap() - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn walking_uses_floor_division() {
        let metrics = WorkoutMetrics::calculate(&walking(1.0)).unwrap();
        assert!((metrics.distance_km - 5.85).abs() < EPS);
        assert!((metrics.mean_speed_kmh - 5.85).abs() < EPS);
        // 5.85^2 / 180 floors to 0, leaving only the weight term
        assert!((metrics.calories_kcal - 157.5).abs() < EPS);

        let naive = (0.035 * 75.0 + 5.85_f64.powi(2) / 180.0 * 0.029 * 75.0) * 60.0;
        assert!((metrics.calories_kcal - naive).abs() > 20.0);
    }

    #[test]
    fn walking_speed_term_counts_whole_multiples_of_height() {
        // 13 km/h: 169 / 100 floors to 1
        let record: WorkoutRecord = SportsWalking {
            action_count: 20000,
            duration_hours: 1.0,
            weight_kg: 70.0,
            height_cm: 100.0,
        }
        .into();
        let calories = WorkoutMetrics::calories_kcal(&record).unwrap();
        let expected = (0.035 * 70.0 + 0.029 * 70.0) * 60.0;
        assert!((calories - expected).abs() < EPS);
    }

    #[test]
    fn swimming_uses_pool_speed() {
        let metrics = WorkoutMetrics::calculate(&swimming(1.0)).unwrap();
        assert!((metrics.distance_km - 0.9936).abs() < EPS);
        assert!((metrics.mean_speed_kmh - 1.0).abs() < EPS);
        assert!((metrics.calories_kcal - 336.0).abs() < EPS);

        let run = WorkoutMetrics::calculate(&running(720, 1.0, 80.0)).unwrap();
        assert!((run.mean_speed_kmh - 0.468).abs() < EPS);
        assert!((run.mean_speed_kmh - metrics.mean_speed_kmh).abs() > 0.5);
        assert!((run.calories_kcal - metrics.calories_kcal).abs() > 1.0);
    }

    #[test]
    fn swimming_speed_ignores_strokes() {
        let mut swim = Swimming {
            action_count: 720,
            duration_hours: 2.0,
            weight_kg: 80.0,
            pool_length_m: 50.0,
            pool_laps: 20,
        };
        let a = WorkoutMetrics::mean_speed_kmh(&swim.into()).unwrap();
        swim.action_count = 10;
        let b = WorkoutMetrics::mean_speed_kmh(&swim.into()).unwrap();
        assert_eq!(a, b);
        assert!((a - 0.5).abs() < EPS);
    }

    #[test]
    fn zero_duration_is_invalid_for_every_variant() {
        for record in [running(15000, 0.0, 75.0), walking(0.0), swimming(0.0)] {
            assert_eq!(
                WorkoutMetrics::calculate(&record),
                Err(WorkoutError::InvalidDuration(0.0))
            );
            assert_eq!(
                WorkoutMetrics::mean_speed_kmh(&record),
                Err(WorkoutError::InvalidDuration(0.0))
            );
            assert_eq!(
                WorkoutMetrics::calories_kcal(&record),
                Err(WorkoutError::InvalidDuration(0.0))
            );
        }
    }

    #[test]
    fn negative_duration_is_invalid() {
        assert_eq!(
            WorkoutMetrics::calculate(&walking(-1.0)),
            Err(WorkoutError::InvalidDuration(-1.0))
        );
    }

    #[test]
    fn distance_does_not_need_duration() {
        assert!((WorkoutMetrics::distance_km(&swimming(0.0)) - 0.9936).abs() < EPS);
    }
}
