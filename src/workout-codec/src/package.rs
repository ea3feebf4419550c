use workout_types::{ActivityType, Running, SportsWalking, Swimming, WorkoutRecord};

use crate::{
    error::{MalformedReason, WorkoutError},
    helpers::ReadingsReader,
};

/// How codes without a known activity are handled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Unknown codes are read as a swimming package.
    #[default]
    Fallback,
    /// Unknown codes fail with [`WorkoutError::UnknownActivityCode`].
    Strict,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PackageReader {
    mode: ReadMode,
}

impl PackageReader {
    pub fn new(mode: ReadMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(ReadMode::Strict)
    }

    pub fn mode(&self) -> ReadMode {
        self.mode
    }

    pub fn resolve(&self, code: &str) -> Result<ActivityType, WorkoutError> {
        match (ActivityType::from_code(code), self.mode) {
            (Some(activity), _) => Ok(activity),
            (None, ReadMode::Fallback) => {
                warn!(
                    "Unknown activity code `{}`, reading package as {}",
                    code,
                    ActivityType::Swimming
                );
                Ok(ActivityType::Swimming)
            }
            (None, ReadMode::Strict) => Err(WorkoutError::UnknownActivityCode(code.to_owned())),
        }
    }

    pub fn read(&self, code: &str, data: &[f64]) -> Result<WorkoutRecord, WorkoutError> {
        let activity = self.resolve(code)?;
        let record = Self::decode(activity, data)
            .map_err(|reason| WorkoutError::MalformedInput { activity, reason })?;

        debug!("Read {} package: {:?}", code, record);
        Ok(record)
    }

    fn decode(activity: ActivityType, mut data: &[f64]) -> Result<WorkoutRecord, MalformedReason> {
        let expected = activity.field_count();
        if data.len() != expected {
            return Err(MalformedReason::WrongArity {
                expected,
                actual: data.len(),
            });
        }

        let action_count = data.read_count("action_count")?;
        let duration_hours = data.read_number("duration_hours")?;
        let weight_kg = data.read_positive("weight_kg")?;

        let record = match activity {
            ActivityType::Running => Running {
                action_count,
                duration_hours,
                weight_kg,
            }
            .into(),
            ActivityType::SportsWalking => SportsWalking {
                action_count,
                duration_hours,
                weight_kg,
                height_cm: data.read_positive("height_cm")?,
            }
            .into(),
            ActivityType::Swimming => Swimming {
                action_count,
                duration_hours,
                weight_kg,
                pool_length_m: data.read_positive("pool_length_m")?,
                pool_laps: data.read_count("pool_laps")?,
            }
            .into(),
        };

        Ok(record)
    }
}

/// Read a raw sensor package.
///
/// `RUN` and `WLK` select running and sports walking; every other code is
/// read as swimming. Duration is not checked here, it is validated when
/// metrics are computed.
pub fn read_package(code: &str, data: &[f64]) -> Result<WorkoutRecord, WorkoutError> {
    PackageReader::default().read(code, data)
}
