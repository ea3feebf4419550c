#[macro_use]
extern crate log;

mod error;
pub use error::{MalformedReason, WorkoutError};

mod helpers;

mod package;
pub use package::{PackageReader, ReadMode, read_package};
