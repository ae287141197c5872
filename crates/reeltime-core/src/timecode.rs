//! The SMPTE timecode value type.
//!
//! A [`Timecode`] owns a canonical frame count together with the display
//! fields derived from it. The frame count drives everything: arithmetic
//! mutates it and re-derives the fields through the codec, never the other
//! way around. Values live in [0, 24h) at their rate, with explicit
//! wraparound on arithmetic.

use num_rational::Rational64;
use serde::Serialize;
use std::fmt;

use crate::codec::{self, TimecodeFields};
use crate::error::{Result, TimecodeError};
use crate::format;
use crate::rate::FrameRate;

/// The accepted construction inputs, dispatched once by [`Timecode::new`].
#[derive(Debug, Clone, Copy)]
pub enum TimecodeSource<'a> {
    /// An absolute frame count since 00:00:00:00.
    FrameCount(u64),
    /// A canonical `HH:MM:SS:FF` / `HH:MM:SS;FF` string.
    Text(&'a str),
    /// An hours/minutes/seconds/frames tuple.
    Fields(TimecodeFields),
}

impl From<u64> for TimecodeSource<'static> {
    fn from(count: u64) -> Self {
        TimecodeSource::FrameCount(count)
    }
}

impl<'a> From<&'a str> for TimecodeSource<'a> {
    fn from(text: &'a str) -> Self {
        TimecodeSource::Text(text)
    }
}

impl From<TimecodeFields> for TimecodeSource<'static> {
    fn from(fields: TimecodeFields) -> Self {
        TimecodeSource::Fields(fields)
    }
}

impl<'a> From<&'a Timecode> for TimecodeSource<'a> {
    fn from(timecode: &'a Timecode) -> Self {
        // Carry the display fields, not the frame count, so the receiver
        // re-derives the count at its own rate and drop-frame setting.
        TimecodeSource::Fields(timecode.fields())
    }
}

/// An SMPTE timecode: a frame-indexed clock in [0, 24h).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Timecode {
    frame_count: u64,
    fields: TimecodeFields,
    rate: FrameRate,
    drop_frame: bool,
}

impl Timecode {
    /// Build a timecode from any [`TimecodeSource`].
    ///
    /// When `drop_frame` is `None` it defaults to the rate's eligibility,
    /// except for text input where the frame separator decides (`;` or `.`
    /// implies drop-frame). Frame counts are reduced modulo 24 hours; field
    /// and text input must already be in range.
    pub fn new<'a>(
        source: impl Into<TimecodeSource<'a>>,
        rate: FrameRate,
        drop_frame: Option<bool>,
    ) -> Result<Self> {
        let fps = rate.as_f64();
        if !fps.is_finite() || fps <= 0.0 || rate.rounded() == 0 {
            return Err(TimecodeError::InvalidConfiguration(format!(
                "frame rate must be positive, got {}/{}",
                rate.numerator, rate.denominator
            )));
        }

        match source.into() {
            TimecodeSource::FrameCount(count) => {
                let drop = drop_frame.unwrap_or_else(|| rate.is_drop_eligible());
                Self::from_count(count, rate, drop)
            }
            TimecodeSource::Text(text) => {
                let parsed = format::parse_canonical(text)?;
                let drop = drop_frame.unwrap_or(parsed.drop_frame);
                Self::from_validated_fields(parsed.fields, rate, drop)
            }
            TimecodeSource::Fields(fields) => {
                let drop = drop_frame.unwrap_or_else(|| rate.is_drop_eligible());
                Self::from_validated_fields(fields, rate, drop)
            }
        }
    }

    /// Timecode 00:00:00:00 at the given rate.
    pub fn zero(rate: FrameRate) -> Result<Self> {
        Self::new(0u64, rate, None)
    }

    /// Build from an absolute frame count.
    pub fn from_frames(count: u64, rate: FrameRate, drop_frame: Option<bool>) -> Result<Self> {
        Self::new(count, rate, drop_frame)
    }

    /// Build from a real-valued frame count, rounded to the nearest frame.
    pub fn from_frames_f64(count: f64, rate: FrameRate, drop_frame: Option<bool>) -> Result<Self> {
        if !count.is_finite() || count < 0.0 {
            return Err(TimecodeError::InvalidTimecode(format!(
                "frame count must be a non-negative number, got {count}"
            )));
        }
        Self::new(count.round() as u64, rate, drop_frame)
    }

    /// Parse a canonical timecode string.
    pub fn parse(text: &str, rate: FrameRate, drop_frame: Option<bool>) -> Result<Self> {
        Self::new(text, rate, drop_frame)
    }

    /// Build from an hours/minutes/seconds/frames tuple.
    pub fn from_fields(
        fields: TimecodeFields,
        rate: FrameRate,
        drop_frame: Option<bool>,
    ) -> Result<Self> {
        Self::new(fields, rate, drop_frame)
    }

    fn from_count(count: u64, rate: FrameRate, drop_frame: bool) -> Result<Self> {
        Self::check_drop_config(rate, drop_frame)?;
        let count = count % rate.frames_per_day();
        let fields = codec::fields_from_frames(count, rate, drop_frame);
        Ok(Self {
            frame_count: count,
            fields,
            rate,
            drop_frame,
        })
    }

    fn from_validated_fields(
        fields: TimecodeFields,
        rate: FrameRate,
        drop_frame: bool,
    ) -> Result<Self> {
        Self::check_drop_config(rate, drop_frame)?;
        Self::validate_fields(&fields, rate, drop_frame)?;
        let frame_count = codec::frames_from_fields(&fields, rate, drop_frame);
        Ok(Self {
            frame_count,
            fields,
            rate,
            drop_frame,
        })
    }

    fn check_drop_config(rate: FrameRate, drop_frame: bool) -> Result<()> {
        if drop_frame && !rate.is_drop_eligible() {
            return Err(TimecodeError::InvalidConfiguration(
                "drop frame is only supported for 29.97 and 59.94 fps".into(),
            ));
        }
        Ok(())
    }

    fn validate_fields(fields: &TimecodeFields, rate: FrameRate, drop_frame: bool) -> Result<()> {
        // The frame component is checked against the rounded rate, so a
        // 29.97 timecode allows frames 00..=29.
        if fields.hours > 23
            || fields.minutes > 59
            || fields.seconds > 59
            || fields.frames >= rate.rounded()
        {
            return Err(TimecodeError::InvalidTimecode(format!(
                "component out of range in {}",
                format::render(fields, drop_frame)
            )));
        }
        if drop_frame && codec::is_dropped_frame(fields, rate) {
            return Err(TimecodeError::InvalidTimecode(format!(
                "{} names a dropped frame number",
                format::render(fields, drop_frame)
            )));
        }
        Ok(())
    }

    /// The canonical frame count since 00:00:00:00.
    ///
    /// This is the explicit replacement for treating a timecode as a plain
    /// number; there is deliberately no implicit numeric conversion.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The derived display fields.
    #[inline]
    pub fn fields(&self) -> TimecodeFields {
        self.fields
    }

    #[inline]
    pub fn hours(&self) -> u32 {
        self.fields.hours
    }

    #[inline]
    pub fn minutes(&self) -> u32 {
        self.fields.minutes
    }

    #[inline]
    pub fn seconds(&self) -> u32 {
        self.fields.seconds
    }

    #[inline]
    pub fn frames(&self) -> u32 {
        self.fields.frames
    }

    #[inline]
    pub fn rate(&self) -> FrameRate {
        self.rate
    }

    #[inline]
    pub fn is_drop_frame(&self) -> bool {
        self.drop_frame
    }

    /// Elapsed seconds since midnight at the real frame rate.
    pub fn to_seconds(&self) -> f64 {
        self.frame_count as f64 / self.rate.as_f64()
    }

    /// Elapsed whole milliseconds since midnight, computed exactly.
    pub fn milliseconds_from_midnight(&self) -> i64 {
        let ms = Rational64::from_integer((self.frame_count * 1000) as i64)
            / self.rate.as_rational();
        ms.floor().to_integer()
    }

    /// Add an amount of frames, in place.
    ///
    /// A non-numeric amount (text, fields, another timecode) is normalized
    /// at the receiver's rate and drop-frame setting first; the source rate
    /// is never inherited. See [`Self::add_frames`] for the rollover rules.
    pub fn add<'a>(
        &mut self,
        amount: impl Into<TimecodeSource<'a>>,
        rollover_max_hours: Option<f64>,
    ) -> Result<&mut Self> {
        let delta = self.frames_in(amount.into())?;
        self.offset_by(delta, rollover_max_hours)
    }

    /// Subtract an amount, in place. Same normalization as [`Self::add`].
    pub fn subtract<'a>(
        &mut self,
        amount: impl Into<TimecodeSource<'a>>,
        rollover_max_hours: Option<f64>,
    ) -> Result<&mut Self> {
        let delta = self.frames_in(amount.into())?;
        self.offset_by(-delta, rollover_max_hours)
    }

    /// Add a signed frame delta, in place, wrapping at 24 hours.
    ///
    /// A negative result fails with [`TimecodeError::NegativeTimecode`]
    /// unless `rollover_max_hours` permits borrowing from the previous day,
    /// in which case landing further than the window into that day fails
    /// with [`TimecodeError::RolloverExceeded`]. On failure the receiver is
    /// left unchanged.
    pub fn add_frames(
        &mut self,
        delta: i64,
        rollover_max_hours: Option<f64>,
    ) -> Result<&mut Self> {
        self.offset_by(delta, rollover_max_hours)
    }

    fn frames_in(&self, amount: TimecodeSource<'_>) -> Result<i64> {
        let count = match amount {
            TimecodeSource::FrameCount(count) => count,
            other => Timecode::new(other, self.rate, Some(self.drop_frame))?.frame_count(),
        };
        i64::try_from(count).map_err(|_| {
            TimecodeError::InvalidTimecode(format!("frame amount {count} is out of range"))
        })
    }

    fn offset_by(&mut self, delta: i64, rollover_max_hours: Option<f64>) -> Result<&mut Self> {
        let per_day = self.rate.frames_per_day() as i128;
        let mut next = self.frame_count as i128 + delta as i128;
        if next < 0 {
            if let Some(max_hours) = rollover_max_hours.filter(|hours| *hours > 0.0) {
                next += per_day;
                if next >= 0 {
                    let landed_hours = next as f64 / self.rate.as_f64() / 3600.0;
                    if landed_hours > max_hours {
                        return Err(TimecodeError::RolloverExceeded { max_hours });
                    }
                }
            }
            if next < 0 {
                return Err(TimecodeError::NegativeTimecode);
            }
        }
        let next = (next % per_day) as u64;
        self.fields = codec::fields_from_frames(next, self.rate, self.drop_frame);
        self.frame_count = next;
        Ok(self)
    }

    /// Render with an explicit format name.
    ///
    /// `"field"` appends the interlaced field of the frame: above 30 fps
    /// the frame number is halved and suffixed with the field parity,
    /// otherwise `.0` is appended as-is. Unknown names fail with
    /// [`TimecodeError::UnsupportedFormat`].
    pub fn format_as(&self, style: &str) -> Result<String> {
        match style {
            "field" => {
                let mut fields = self.fields;
                let suffix = if self.rate.as_f64() <= 30.0 {
                    ".0".to_string()
                } else {
                    fields.frames /= 2;
                    format!(".{}", self.frame_count % 2)
                };
                Ok(format!(
                    "{}{}",
                    format::render(&fields, self.drop_frame),
                    suffix
                ))
            }
            other => Err(TimecodeError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::render(&self.fields, self.drop_frame))
    }
}
