//! Shared threshold/temperature decay schedule.

use crate::error::AlnsError;

/// How a [`DecaySchedule`] value decreases toward its floor each
/// iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecayMethod {
    /// `value <- max(end, value - step)`.
    Linear,
    /// `value <- max(end, value * step)`, `step` in `(0, 1]`.
    Exponential,
}

/// A scalar that decays from `start` toward `end` by `step` each
/// iteration, per `method`. Shared by every threshold/temperature-style
/// acceptance criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecaySchedule {
    value: f64,
    end: f64,
    step: f64,
    method: DecayMethod,
}

impl DecaySchedule {
    /// Builds a schedule, validating: `end >= 0`, `end <= start`, `step >= 0`
    /// for linear, `step in (0, 1]` for exponential (and `start > 0` for
    /// exponential).
    pub fn new(start: f64, end: f64, step: f64, method: DecayMethod) -> Result<Self, AlnsError> {
        if end < 0.0 {
            return Err(AlnsError::configuration(format!("end must be >= 0, got {end}")));
        }
        if end > start {
            return Err(AlnsError::configuration(format!(
                "end ({end}) must be <= start ({start})"
            )));
        }
        match method {
            DecayMethod::Linear => {
                if step < 0.0 {
                    return Err(AlnsError::configuration(format!(
                        "linear step must be >= 0, got {step}"
                    )));
                }
            }
            DecayMethod::Exponential => {
                if start <= 0.0 {
                    return Err(AlnsError::configuration(
                        "exponential decay requires start > 0",
                    ));
                }
                if step <= 0.0 || step > 1.0 {
                    return Err(AlnsError::configuration(format!(
                        "exponential step must be in (0, 1], got {step}"
                    )));
                }
            }
        }
        Ok(Self {
            value: start,
            end,
            step,
            method,
        })
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Advances the schedule by one iteration.
    pub fn tick(&mut self) {
        self.value = match self.method {
            DecayMethod::Linear => (self.value - self.step).max(self.end),
            DecayMethod::Exponential => (self.value * self.step).max(self.end),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_decays_to_floor_and_stops() {
        let mut s = DecaySchedule::new(10.0, 2.0, 3.0, DecayMethod::Linear).unwrap();
        s.tick();
        assert_eq!(s.value(), 7.0);
        s.tick();
        s.tick();
        // would be -2, clamps to floor
        assert_eq!(s.value(), 2.0);
    }

    #[test]
    fn exponential_decays_to_floor() {
        let mut s = DecaySchedule::new(100.0, 1.0, 0.5, DecayMethod::Exponential).unwrap();
        s.tick();
        assert_eq!(s.value(), 50.0);
        for _ in 0..10 {
            s.tick();
        }
        assert_eq!(s.value(), 1.0);
    }

    #[test]
    fn rejects_end_greater_than_start() {
        assert!(DecaySchedule::new(1.0, 2.0, 0.1, DecayMethod::Linear).is_err());
    }

    #[test]
    fn rejects_exponential_step_out_of_range() {
        assert!(DecaySchedule::new(10.0, 1.0, 1.5, DecayMethod::Exponential).is_err());
        assert!(DecaySchedule::new(10.0, 1.0, 0.0, DecayMethod::Exponential).is_err());
    }

    #[test]
    fn zero_step_linear_never_moves() {
        let mut s = DecaySchedule::new(5.0, 5.0, 0.0, DecayMethod::Linear).unwrap();
        for _ in 0..100 {
            s.tick();
        }
        assert_eq!(s.value(), 5.0);
    }
}
