//! Race-walking workout.

use crate::workout::training::{Session, Training, floor_div};
use crate::workout::types::{MIN_IN_H, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    session: Session,
    height: f64,
}

impl SportsWalking {
    /// Weight multiplier of the base walking cost.
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Weight multiplier of the speed-dependent walking cost.
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// `height` is the athlete's height in centimeters.
    pub fn new(action: u64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            height,
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn spent_calories(&self) -> Result<f64> {
        let session = &self.session;
        let weight = session.weight();
        // Whole multiples of height only: speed² is floor-divided, not divided.
        let speed_term = floor_div(self.mean_speed().powi(2), self.height);
        Ok((Self::CALORIES_WEIGHT_MULTIPLIER * weight
            + speed_term * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * session.duration()
            * MIN_IN_H)
    }
}
