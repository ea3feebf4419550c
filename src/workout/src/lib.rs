#[macro_use]
extern crate log;

use anyhow::Context;
use workout_algos::InfoMessage;

pub use workout_algos::{WorkoutMetrics, format_report};
pub use workout_codec::{PackageReader, ReadMode, WorkoutError, read_package};
pub use workout_types::{ActivityType, WorkoutRecord};

/// Packages replayed by the demo binary, in output order.
pub const SAMPLE_PACKAGES: [(&str, &[f64]); 3] = [
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

/// Read one package and render its report line.
pub fn process_package(
    reader: &PackageReader,
    code: &str,
    data: &[f64],
) -> anyhow::Result<String> {
    let record = reader
        .read(code, data)
        .with_context(|| format!("Failed to read `{}` package", code))?;

    let info = InfoMessage::from_record(&record)
        .with_context(|| format!("Failed to compute `{}` workout", code))?;

    if log_enabled!(log::Level::Debug) {
        debug!("{}", serde_json::to_string(&info)?);
    }

    Ok(info.message())
}

/// Process every package in order, stopping at the first failure.
pub fn process_packages<'a, I>(reader: &PackageReader, packages: I) -> anyhow::Result<Vec<String>>
where
    I: IntoIterator<Item = (&'a str, &'a [f64])>,
{
    packages
        .into_iter()
        .map(|(code, data)| process_package(reader, code, data))
        .collect()
}
