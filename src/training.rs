use crate::message::InfoMessage;

/// Meters in one kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in one hour.
pub const MIN_IN_H: f64 = 60.0;

/// One workout computed from raw sensor data.
///
/// `distance` and `mean_speed` have shared defaults; every activity must
/// provide its own `spent_calories`.
pub trait Training {
    /// Display label used in the summary line.
    fn training_type(&self) -> &'static str;

    /// Number of steps or strokes.
    fn action(&self) -> u32;

    /// Duration in hours.
    fn duration(&self) -> f64;

    /// Distance covered by one step or stroke, in meters.
    fn len_step(&self) -> f64;

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.action()) * self.len_step() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration()
    }

    /// Energy spent in kcal.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.training_type().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

/// Floor of the exact quotient `a / b`.
///
/// `(a / b).floor()` floors the rounded quotient and can land one too high
/// when `b` is not exactly representable (169.0 / 0.1).
fn floor_div(a: f64, b: f64) -> f64 {
    let mut rem = a % b;
    if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
        rem += b;
    }
    let div = (a - rem) / b;
    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
}

impl Running {
    const LEN_STEP: f64 = 0.65;
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub const fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            - Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.weight
            / M_IN_KM
            * (self.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    /// Height in cm.
    pub height: f64,
}

impl SportsWalking {
    const LEN_STEP: f64 = 0.65;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub const fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn spent_calories(&self) -> f64 {
        let speed_height = floor_div(self.mean_speed().powi(2), self.height);
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
            + speed_height * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER)
            * (self.duration * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    /// Pool length in meters.
    pub length_pool: f64,
    /// Number of pool lengths swum.
    pub count_pool: u32,
}

impl Swimming {
    const LEN_STEP: f64 = 1.38;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub const fn new(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            action,
            duration,
            weight,
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    /// Pool distance over time; stroke count does not enter into it.
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight
    }
}
