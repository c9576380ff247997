//! Running workout.

use crate::workout::training::{Session, Training};
use crate::workout::types::{M_IN_KM, MIN_IN_H, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    /// Speed multiplier of the running calorie model.
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    /// Speed offset of the running calorie model.
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> Result<f64> {
        let session = &self.session;
        Ok((Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * session.weight()
            / M_IN_KM
            * session.duration()
            * MIN_IN_H)
    }
}
