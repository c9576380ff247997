//! Swimming workout.
//!
//! Distance and speed come from the pool geometry rather than the stroke
//! count; strokes only feed [`Swimming::stroke_distance`].

use crate::workout::training::{Session, Training};
use crate::workout::types::{M_IN_KM, Result, SWIM_LEN_STEP_M};

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: Session,
    length_pool: f64,
    count_pool: u64,
}

impl Swimming {
    /// Speed offset of the swimming calorie model.
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    /// Overall multiplier of the swimming calorie model.
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    /// `length_pool` is in meters, `count_pool` is the number of lengths swum.
    pub fn new(action: u64, duration: f64, weight: f64, length_pool: f64, count_pool: u64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> u64 {
        self.count_pool
    }

    /// Distance in kilometers estimated from strokes alone.
    pub fn stroke_distance(&self) -> f64 {
        self.session.action() as f64 * self.len_step() / M_IN_KM
    }
}

impl Training for Swimming {
    fn session(&self) -> &Session {
        &self.session
    }

    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn len_step(&self) -> f64 {
        SWIM_LEN_STEP_M
    }

    fn distance(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool as f64 / M_IN_KM / self.session.duration()
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight())
    }
}
