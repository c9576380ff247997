use std::fmt;

use thiserror::Error;

use crate::workout::dispatch::WorkoutKind;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Distance covered by a single step, in meters.
pub const LEN_STEP_M: f64 = 0.65;
/// Distance covered by a single swimming stroke, in meters.
pub const SWIM_LEN_STEP_M: f64 = 1.38;

/// Line emitted in place of a report when the workout code is not recognised.
pub const UNKNOWN_WORKOUT_MESSAGE: &str = "unknown workout type";

/// Read-only summary of a finished workout.
///
/// Numeric fields are kept as computed; rounding to three decimals happens
/// only when the message is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    /// Render the summary line, every number with exactly three decimals.
    pub fn get_message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// The workout code is not one of the known activity codes.
    #[error("unknown workout type: {0}")]
    UnknownActivityCode(String),

    /// The raw values do not fit the constructor of the resolved workout.
    #[error("malformed arguments for {kind}: {reason}")]
    MalformedArguments { kind: WorkoutKind, reason: String },

    /// Calorie computation was requested from a type that does not define one.
    #[error("calorie computation is not implemented for {0}")]
    UnsupportedOperation(&'static str),
}

pub type Result<T> = std::result::Result<T, WorkoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_pads_to_three_decimals() {
        let message = InfoMessage {
            training_type: "Running".into(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        };

        assert_eq!(
            message.get_message(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
        assert_eq!(message.to_string(), message.get_message());
    }

    #[test]
    fn message_rounds_long_fractions() {
        let message = InfoMessage {
            training_type: "Swimming".into(),
            duration: 1.5,
            distance: 0.123456,
            speed: 0.0823,
            calories: 12345.67891,
        };

        let rendered = message.get_message();
        assert!(rendered.contains("Длительность: 1.500 ч."));
        assert!(rendered.contains("Дистанция: 0.123 км"));
        assert!(rendered.contains("Ср. скорость: 0.082 км/ч"));
        assert!(rendered.ends_with("Потрачено ккал: 12345.679."));
    }

    #[test]
    fn unsupported_operation_names_the_type() {
        let err = WorkoutError::UnsupportedOperation("Training");
        assert_eq!(
            err.to_string(),
            "calorie computation is not implemented for Training"
        );
    }
}
