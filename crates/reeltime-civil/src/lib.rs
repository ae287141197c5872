//! ReelTime Civil - wall-clock interconversion for timecodes
//!
//! Maps a [`Timecode`] to and from a timezone-aware civil instant on a given
//! day. A timecode measures *wall-clock* time since the day's midnight, so
//! when a DST transition falls between midnight and the instant, the raw
//! elapsed duration is off by the offset change; both directions correct for
//! that difference.
//!
//! The timezone is an explicit capability: callers pass instants carrying a
//! `chrono::TimeZone`, and no ambient clock is consulted, so tests can pin
//! any transition deterministically.

use chrono::{DateTime, Duration, LocalResult, Offset, TimeZone};
use reeltime_core::{FrameRate, Result, Timecode, TimecodeError};

/// Build a timecode from the wall-clock time of `instant` within its day.
///
/// `drop_frame` follows the same defaulting as [`Timecode::new`]. The frame
/// count reflects elapsed wall-clock time since local midnight, not elapsed
/// UTC time, so an instant after a DST jump still reads as its displayed
/// clock time.
pub fn timecode_from_civil<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    rate: FrameRate,
    drop_frame: Option<bool>,
) -> Result<Timecode> {
    let midnight = local_midnight(instant)?;
    let elapsed_ms = instant
        .clone()
        .signed_duration_since(midnight.clone())
        .num_milliseconds();
    let correction_ms = i64::from(offset_seconds(instant) - offset_seconds(&midnight)) * 1000;
    let wall_ms = elapsed_ms + correction_ms;
    let frames = (wall_ms as f64 * rate.as_f64() / 1000.0).round();
    if frames < 0.0 {
        return Err(TimecodeError::NegativeTimecode);
    }
    Timecode::from_frames(frames as u64, rate, drop_frame)
}

/// Place a timecode on the civil day containing `day`.
///
/// The result is the instant whose local clock reads the timecode, with the
/// frame remainder carried as milliseconds. When the timecode's clock time
/// was folded by a fall-back transition, the earlier of the two instants is
/// returned.
pub fn civil_from_timecode<Tz: TimeZone>(
    timecode: &Timecode,
    day: &DateTime<Tz>,
) -> Result<DateTime<Tz>> {
    let midnight = local_midnight(day)?;
    let candidate = midnight.clone() + Duration::milliseconds(timecode.milliseconds_from_midnight());
    let correction = offset_seconds(&midnight) - offset_seconds(&candidate);
    Ok(candidate + Duration::seconds(i64::from(correction)))
}

/// Local midnight of the instant's calendar day.
///
/// When a fall-back fold makes midnight ambiguous the earlier instant wins;
/// a spring-forward transition that skips midnight outright (some zones move
/// clocks at 00:00) has no usable day origin and is rejected.
fn local_midnight<Tz: TimeZone>(instant: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let day = instant.date_naive();
    let midnight = day.and_hms_opt(0, 0, 0).ok_or_else(|| {
        TimecodeError::InvalidConfiguration(format!("no midnight on {day}"))
    })?;
    match instant.timezone().from_local_datetime(&midnight) {
        LocalResult::Single(origin) => Ok(origin),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(TimecodeError::InvalidConfiguration(format!(
            "midnight does not exist on {day} in this timezone"
        ))),
    }
}

/// Offset from UTC in seconds (positive east) at the given instant.
fn offset_seconds<Tz: TimeZone>(instant: &DateTime<Tz>) -> i32 {
    instant.offset().fix().local_minus_utc()
}
