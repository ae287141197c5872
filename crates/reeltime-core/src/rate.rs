//! Frame rates and their drop-frame profiles.
//!
//! Frame rates are stored as rational numbers (e.g. 30000/1001 for 29.97 fps)
//! to avoid floating-point drift in derived quantities. The drop-frame
//! queries treat any rate within a small epsilon of the two NTSC rates as
//! drop-eligible, so 29.97 given as a plain float behaves like 30000/1001.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TimecodeError};

/// How close a rate must be to 30000/1001 or 60000/1001 to count as NTSC.
pub const DROP_FRAME_EPSILON: f64 = 1e-4;

/// Resolution used when converting a float rate to a rational.
const FROM_FPS_SCALE: i64 = 100_000;

const SECONDS_PER_DAY: u64 = 86_400;
const MINUTES_PER_DAY: u64 = 24 * 60;

/// Frame rate as a rational number (e.g., 30000/1001 for 29.97 fps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    /// Numerator (e.g., 30000)
    pub numerator: u32,
    /// Denominator (e.g., 1001)
    pub denominator: u32,
}

impl FrameRate {
    /// Create a new frame rate.
    #[inline]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Create a frame rate from frames per second, reduced to lowest terms.
    ///
    /// Accepts any positive rate, including non-broadcast ones like 28 fps.
    /// Resolution is 1/100000 fps, well below [`DROP_FRAME_EPSILON`].
    pub fn from_fps(fps: f64) -> Result<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(TimecodeError::InvalidConfiguration(format!(
                "frame rate must be a positive number, got {fps}"
            )));
        }
        let scaled = (fps * FROM_FPS_SCALE as f64).round();
        if scaled < 1.0 || scaled > u32::MAX as f64 {
            return Err(TimecodeError::InvalidConfiguration(format!(
                "frame rate {fps} is out of range"
            )));
        }
        let ratio = Rational64::new(scaled as i64, FROM_FPS_SCALE);
        Ok(Self {
            numerator: *ratio.numer() as u32,
            denominator: *ratio.denom() as u32,
        })
    }

    /// Convert to frames per second as f64.
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// The rate as a `Rational64`, for exact arithmetic.
    #[inline]
    pub fn as_rational(self) -> Rational64 {
        Rational64::new(self.numerator as i64, self.denominator as i64)
    }

    /// Nearest integer frame rate (30 for 29.97), used for all
    /// hours/minutes/seconds/frames modulo arithmetic.
    #[inline]
    pub fn rounded(self) -> u32 {
        self.as_f64().round() as u32
    }

    /// Frame count at which a 24-hour day wraps around.
    ///
    /// Built from the rounded rate and the drop pattern, not the real rate,
    /// so every rational spelling of an NTSC rate (2997/100, 30000/1001)
    /// yields the same modulus: 2,589,408 for 29.97, 5,178,816 for 59.94.
    pub fn frames_per_day(self) -> u64 {
        let dropped = self.frames_dropped_per_minute() as u64
            * (MINUTES_PER_DAY - MINUTES_PER_DAY / 10);
        self.rounded() as u64 * SECONDS_PER_DAY - dropped
    }

    /// Whether drop-frame counting may be enabled for this rate.
    ///
    /// Only the two NTSC rates qualify.
    pub fn is_drop_eligible(self) -> bool {
        self.is_near(30000.0 / 1001.0) || self.is_near(60000.0 / 1001.0)
    }

    /// Frame numbers skipped at the start of each non-exempt minute:
    /// 2 for 29.97, 4 for 59.94, 0 otherwise.
    pub fn frames_dropped_per_minute(self) -> u32 {
        if self.is_near(30000.0 / 1001.0) {
            2
        } else if self.is_near(60000.0 / 1001.0) {
            4
        } else {
            0
        }
    }

    fn is_near(self, target: f64) -> bool {
        (target - self.as_f64()).abs() < DROP_FRAME_EPSILON
    }

    // Common frame rates
    pub const FPS_23_976: Self = Self::new(24000, 1001);
    pub const FPS_24: Self = Self::new(24, 1);
    pub const FPS_25: Self = Self::new(25, 1);
    pub const FPS_29_97: Self = Self::new(30000, 1001);
    pub const FPS_30: Self = Self::new(30, 1);
    pub const FPS_50: Self = Self::new(50, 1);
    pub const FPS_59_94: Self = Self::new(60000, 1001);
    pub const FPS_60: Self = Self::new(60, 1);
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fps = self.as_f64();
        if (fps - fps.round()).abs() < 0.001 {
            write!(f, "{} fps", fps.round() as u32)
        } else {
            write!(f, "{:.3} fps", fps)
        }
    }
}
