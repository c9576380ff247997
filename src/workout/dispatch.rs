//! Resolve a short workout code and raw sensor values into a workout.
//!
//! Raw values arrive as a flat list of numbers. Each workout kind has a named
//! input structure that checks arity and value types before anything is
//! constructed.

use std::fmt;
use std::str::FromStr;

use crate::workout::running::Running;
use crate::workout::swimming::Swimming;
use crate::workout::training::Training;
use crate::workout::types::{Result, WorkoutError};
use crate::workout::walking::SportsWalking;

/// Workout kinds addressable by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    Walking,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::Walking,
    ];

    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
        }
    }

    /// Number of raw values the workout constructor takes.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Swimming => 5,
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
        }
    }

    /// Build a workout of this kind from positional raw values.
    pub fn construct(self, values: &[f64]) -> Result<Box<dyn Training>> {
        let training: Box<dyn Training> = match self {
            WorkoutKind::Swimming => Box::new(SwimmingInput::from_values(values)?.build()),
            WorkoutKind::Running => Box::new(RunningInput::from_values(values)?.build()),
            WorkoutKind::Walking => Box::new(WalkingInput::from_values(values)?.build()),
        };
        Ok(training)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownActivityCode(code.to_string()))
    }
}

/// Readings common to every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommonInput {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningInput {
    pub common: CommonInput,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingInput {
    pub common: CommonInput,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingInput {
    pub common: CommonInput,
    pub length_pool: f64,
    pub count_pool: u64,
}

impl RunningInput {
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let reader = ValueReader::new(WorkoutKind::Running, values)?;
        Ok(Self {
            common: reader.common()?,
        })
    }

    pub fn build(self) -> Running {
        let CommonInput {
            action,
            duration,
            weight,
        } = self.common;
        Running::new(action, duration, weight)
    }
}

impl WalkingInput {
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let reader = ValueReader::new(WorkoutKind::Walking, values)?;
        Ok(Self {
            common: reader.common()?,
            height: reader.positive(3, "height")?,
        })
    }

    pub fn build(self) -> SportsWalking {
        let CommonInput {
            action,
            duration,
            weight,
        } = self.common;
        SportsWalking::new(action, duration, weight, self.height)
    }
}

impl SwimmingInput {
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let reader = ValueReader::new(WorkoutKind::Swimming, values)?;
        Ok(Self {
            common: reader.common()?,
            length_pool: reader.non_negative(3, "pool length")?,
            count_pool: reader.count(4, "pool count")?,
        })
    }

    pub fn build(self) -> Swimming {
        let CommonInput {
            action,
            duration,
            weight,
        } = self.common;
        Swimming::new(action, duration, weight, self.length_pool, self.count_pool)
    }
}

/// Positional access to raw values with per-field validation.
struct ValueReader<'a> {
    kind: WorkoutKind,
    values: &'a [f64],
}

impl<'a> ValueReader<'a> {
    fn new(kind: WorkoutKind, values: &'a [f64]) -> Result<Self> {
        if values.len() != kind.arity() {
            return Err(WorkoutError::MalformedArguments {
                kind,
                reason: format!("expected {} values, got {}", kind.arity(), values.len()),
            });
        }
        Ok(Self { kind, values })
    }

    fn malformed(&self, reason: String) -> WorkoutError {
        WorkoutError::MalformedArguments {
            kind: self.kind,
            reason,
        }
    }

    fn common(&self) -> Result<CommonInput> {
        Ok(CommonInput {
            action: self.count(0, "action count")?,
            duration: self.positive(1, "duration")?,
            weight: self.positive(2, "weight")?,
        })
    }

    fn finite(&self, index: usize, name: &str) -> Result<f64> {
        let value = self.values[index];
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.malformed(format!("{name} must be a finite number, got {value}")))
        }
    }

    fn positive(&self, index: usize, name: &str) -> Result<f64> {
        let value = self.finite(index, name)?;
        if value > 0.0 {
            Ok(value)
        } else {
            Err(self.malformed(format!("{name} must be greater than zero, got {value}")))
        }
    }

    fn non_negative(&self, index: usize, name: &str) -> Result<f64> {
        let value = self.finite(index, name)?;
        if value >= 0.0 {
            Ok(value)
        } else {
            Err(self.malformed(format!("{name} must not be negative, got {value}")))
        }
    }

    fn count(&self, index: usize, name: &str) -> Result<u64> {
        let value = self.finite(index, name)?;
        if value < 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
            return Err(self.malformed(format!(
                "{name} must be a non-negative whole number, got {value}"
            )));
        }
        Ok(value as u64)
    }
}

/// Resolve `workout_type` and build the matching workout from `data`.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let kind: WorkoutKind = workout_type.parse()?;
    let training = kind.construct(data)?;
    tracing::debug!(code = %kind, values = ?data, "resolved workout package");
    Ok(training)
}

/// One workout code with its raw sensor values.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    pub fn read(&self) -> Result<Box<dyn Training>> {
        read_package(&self.workout_type, &self.data)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackageParseError {
    #[error("expected CODE:v1,v2,... but found no ':' in {0:?}")]
    MissingSeparator(String),

    #[error("invalid number {value:?} in package {package:?}")]
    InvalidNumber { package: String, value: String },
}

/// Parses the `CODE:v1,v2,...` form. The code is not checked here, so an
/// unknown code still reaches [`read_package`] and its fallback handling.
impl FromStr for Package {
    type Err = PackageParseError;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        let (code, values) = raw
            .split_once(':')
            .ok_or_else(|| PackageParseError::MissingSeparator(raw.to_string()))?;

        let data = parse_values(values).map_err(|value| PackageParseError::InvalidNumber {
            package: raw.to_string(),
            value,
        })?;

        Ok(Package::new(code.trim(), data))
    }
}

/// Split a comma separated list of numbers, returning the offending token on
/// failure. Blank input is an empty list.
pub fn parse_values(raw: &str) -> std::result::Result<Vec<f64>, String> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(str::trim)
        .map(|token| token.parse::<f64>().map_err(|_| token.to_string()))
        .collect()
}

/// Reference readings: one swim, one run and one walk.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!("RUN".parse::<WorkoutKind>(), Ok(WorkoutKind::Running));
        assert_eq!(
            "run".parse::<WorkoutKind>(),
            Err(WorkoutError::UnknownActivityCode("run".into()))
        );
    }

    #[test]
    fn code_round_trips_through_display() {
        for kind in WorkoutKind::ALL {
            assert_eq!(kind.to_string().parse::<WorkoutKind>(), Ok(kind));
        }
    }

    #[test]
    fn wrong_arity_is_malformed() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
        assert_eq!(
            err,
            WorkoutError::MalformedArguments {
                kind: WorkoutKind::Walking,
                reason: "expected 4 values, got 3".into(),
            }
        );
    }

    #[test]
    fn fractional_counts_are_rejected() {
        let err = SwimmingInput::from_values(&[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::MalformedArguments {
                kind: WorkoutKind::Swimming,
                ..
            }
        ));
        assert!(RunningInput::from_values(&[-1.0, 1.0, 75.0]).is_err());
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = RunningInput::from_values(&[15000.0, 0.0, 75.0]).unwrap_err();
        assert!(err.to_string().contains("duration must be greater than zero"));
    }

    #[test]
    fn zero_height_is_rejected() {
        assert!(WalkingInput::from_values(&[9000.0, 1.0, 75.0, 0.0]).is_err());
        assert!(WalkingInput::from_values(&[9000.0, 1.0, 75.0, f64::NAN]).is_err());
    }

    #[test]
    fn swimming_input_keeps_named_fields() {
        let input = SwimmingInput::from_values(&[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert_eq!(input.common.action, 720);
        assert_eq!(input.length_pool, 25.0);
        assert_eq!(input.count_pool, 40);
    }

    #[test]
    fn package_parses_code_and_values() {
        let package: Package = "RUN:15000, 1, 75".parse().unwrap();
        assert_eq!(package, Package::new("RUN", vec![15000.0, 1.0, 75.0]));

        let unknown: Package = "XYZ:1,2".parse().unwrap();
        assert_eq!(unknown.workout_type, "XYZ");
    }

    #[test]
    fn package_rejects_bad_text() {
        assert_eq!(
            "RUN".parse::<Package>(),
            Err(PackageParseError::MissingSeparator("RUN".into()))
        );
        assert!(matches!(
            "RUN:1,two,3".parse::<Package>(),
            Err(PackageParseError::InvalidNumber { value, .. }) if value == "two"
        ));
    }

    #[test]
    fn empty_value_list_parses_to_nothing() {
        assert_eq!(parse_values("  "), Ok(Vec::new()));
    }
}
