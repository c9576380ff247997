pub mod dispatch;
pub mod running;
pub mod swimming;
pub mod training;
pub mod types;
pub mod walking;

pub use dispatch::{
    Package, PackageParseError, WorkoutKind, demo_packages, parse_values, read_package,
};
pub use running::Running;
pub use swimming::Swimming;
pub use training::{Session, Training, floor_div};
pub use types::{InfoMessage, Result, UNKNOWN_WORKOUT_MESSAGE, WorkoutError};
pub use walking::SportsWalking;

/// Outcome of processing a single package.
#[derive(Debug, Clone, PartialEq)]
pub enum PackageOutcome {
    Report(InfoMessage),
    UnknownWorkout(String),
}

impl PackageOutcome {
    /// The line printed for this package.
    pub fn line(&self) -> String {
        match self {
            PackageOutcome::Report(info) => info.get_message(),
            PackageOutcome::UnknownWorkout(_) => UNKNOWN_WORKOUT_MESSAGE.to_string(),
        }
    }
}

/// Resolve a package and compute its summary.
///
/// An unknown code is an ordinary outcome, not an error. Malformed values and
/// missing calorie models are returned as errors for this package only.
pub fn process_package(workout_type: &str, data: &[f64]) -> Result<PackageOutcome> {
    match read_package(workout_type, data) {
        Ok(training) => Ok(PackageOutcome::Report(training.show_training_info()?)),
        Err(WorkoutError::UnknownActivityCode(code)) => {
            tracing::warn!(%code, "unknown workout type");
            Ok(PackageOutcome::UnknownWorkout(code))
        }
        Err(err) => Err(err),
    }
}

/// Formatted report line, or the fallback line for an unknown code.
pub fn describe_package(workout_type: &str, data: &[f64]) -> Result<String> {
    process_package(workout_type, data).map(|outcome| outcome.line())
}

/// Describe every package in input order. Each entry stands on its own.
pub fn report_lines(packages: &[Package]) -> Vec<Result<String>> {
    packages
        .iter()
        .map(|package| describe_package(&package.workout_type, &package.data))
        .collect()
}
