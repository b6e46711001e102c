use crate::dlog;
use crate::training::{Running, SportsWalking, Swimming, Training};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Number of raw fields the variant constructor takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::SportsWalking => 4,
        }
    }

    pub fn known_codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.code()).collect()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutKind {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| DispatchError::UnknownCode {
                code: s.to_string(),
                known: Self::known_codes().join(", "),
            })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DispatchError {
    #[error("unknown workout type {code:?}; expected one of: {known}")]
    UnknownCode { code: String, known: String },

    #[error("workout type {code} takes {expected} fields, got {got}")]
    Arity {
        code: WorkoutKind,
        expected: usize,
        got: usize,
    },

    #[error("workout type {code}: field {field} must be a non-negative integer, got {value}")]
    InvalidField {
        code: WorkoutKind,
        field: &'static str,
        value: f64,
    },

    #[error("workout type {code}: field {field} must be positive, got {value}")]
    NonPositiveField {
        code: WorkoutKind,
        field: &'static str,
        value: f64,
    },

    #[error("workout type {code}: field {field} must not be negative, got {value}")]
    NegativeField {
        code: WorkoutKind,
        field: &'static str,
        value: f64,
    },
}

/// Build a workout from an activity code and its positional sensor fields.
///
/// Field order follows the variant constructor:
/// - `SWM`: action, duration, weight, pool length, pool count
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
pub fn read_package(code: &str, data: &[f64]) -> Result<Box<dyn Training>, DispatchError> {
    let kind: WorkoutKind = code.parse()?;
    if data.len() != kind.arity() {
        return Err(DispatchError::Arity {
            code: kind,
            expected: kind.arity(),
            got: data.len(),
        });
    }

    let action = count_field(kind, "action", data[0])?;
    let duration = positive_field(kind, "duration", data[1])?;
    let weight = non_negative_field(kind, "weight", data[2])?;

    dlog!("read_package kind={kind} action={action} duration={duration} weight={weight}");

    let training: Box<dyn Training> = match kind {
        WorkoutKind::Running => Box::new(Running::new(action, duration, weight)),
        WorkoutKind::SportsWalking => {
            let height = positive_field(kind, "height", data[3])?;
            Box::new(SportsWalking::new(action, duration, weight, height))
        }
        WorkoutKind::Swimming => {
            let length_pool = non_negative_field(kind, "length_pool", data[3])?;
            let count_pool = count_field(kind, "count_pool", data[4])?;
            Box::new(Swimming::new(action, duration, weight, length_pool, count_pool))
        }
    };

    Ok(training)
}

/// Divisors: finite and strictly positive.
fn positive_field(
    code: WorkoutKind,
    field: &'static str,
    value: f64,
) -> Result<f64, DispatchError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DispatchError::NonPositiveField { code, field, value })
    }
}

fn non_negative_field(
    code: WorkoutKind,
    field: &'static str,
    value: f64,
) -> Result<f64, DispatchError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DispatchError::NegativeField { code, field, value })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_field(code: WorkoutKind, field: &'static str, value: f64) -> Result<u32, DispatchError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(DispatchError::InvalidField { code, field, value })
    }
}
