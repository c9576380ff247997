use std::fmt;

use crate::workout::types::{InfoMessage, LEN_STEP_M, M_IN_KM, Result, WorkoutError};

/// Raw sensor readings shared by every workout.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    action: u64,
    duration: f64,
    weight: f64,
}

impl Session {
    /// `action` is steps or strokes, `duration` is in hours, `weight` in kg.
    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    pub fn action(&self) -> u64 {
        self.action
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Computation contract implemented by every workout kind.
///
/// Distance and speed have step-based defaults. Calorie cost has no default:
/// it depends entirely on activity-specific coefficients, so each workout
/// provides its own.
pub trait Training: fmt::Debug + Send + Sync {
    /// Sensor readings this workout was built from.
    fn session(&self) -> &Session;

    /// Name shown in the summary line.
    fn training_type(&self) -> &'static str;

    /// Meters covered by one action.
    fn len_step(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        self.session().action() as f64 * self.len_step() / M_IN_KM
    }

    /// Average speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration()
    }

    /// Kilocalories spent over the whole session.
    fn spent_calories(&self) -> Result<f64>;

    /// Collect the derived values into a summary.
    fn show_training_info(&self) -> Result<InfoMessage> {
        let calories = self.spent_calories()?;
        let info = InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.session().duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories,
        };
        tracing::debug!(
            training_type = %info.training_type,
            distance = info.distance,
            speed = info.speed,
            calories = info.calories,
            "computed workout summary"
        );
        Ok(info)
    }
}

/// The bare session is usable on its own for distance and speed, but it has
/// no calorie model.
impl Training for Session {
    fn session(&self) -> &Session {
        self
    }

    fn training_type(&self) -> &'static str {
        "Training"
    }

    fn spent_calories(&self) -> Result<f64> {
        Err(WorkoutError::UnsupportedOperation(self.training_type()))
    }
}

/// Floor division with the same results as the floating-point `//` operator
/// the calorie tables were produced with: the remainder takes the sign of the
/// divisor and the quotient is rounded towards negative infinity.
///
/// A zero divisor yields NaN.
pub fn floor_div(dividend: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        return f64::NAN;
    }

    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }

    if quotient != 0.0 {
        let floored = quotient.floor();
        if quotient - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    } else {
        0.0_f64.copysign(dividend / divisor)
    }
}
