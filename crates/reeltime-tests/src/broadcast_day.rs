//! Integration tests for the civil-time bridge.
//!
//! Exercises cross-crate flows between reeltime-core arithmetic and the
//! reeltime-civil wall-clock mapping, including the DST transition days.

use chrono::{FixedOffset, TimeZone, Timelike};
use chrono_tz::America::New_York;
use reeltime_civil::{civil_from_timecode, timecode_from_civil};
use reeltime_core::{FrameRate, Timecode, TimecodeError};

// ── Helpers ────────────────────────────────────────────────────

fn rate_2997() -> FrameRate {
    FrameRate::from_fps(29.97).unwrap()
}

fn studio_zone() -> FixedOffset {
    FixedOffset::west_opt(5 * 3600).unwrap()
}

// ── Schedules on a plain day ───────────────────────────────────

#[test]
fn civil_schedule_round_trip() {
    let zone = studio_zone();
    let slot_start = zone.with_ymd_and_hms(2024, 6, 1, 14, 30, 0).unwrap();

    let mut tc = timecode_from_civil(&slot_start, rate_2997(), None).unwrap();
    assert!(tc.is_drop_frame());
    assert_eq!(tc.to_string(), "14:30:00;00");

    tc.add("01:00:00;00", None).unwrap();
    assert_eq!(tc.to_string(), "15:30:00;00");

    let slot_end = civil_from_timecode(&tc, &slot_start).unwrap();
    assert_eq!(slot_end.hour(), 15);
    assert_eq!(slot_end.minute(), 30);
    assert_eq!(slot_end.second(), 0);
    assert_eq!(slot_end.timestamp_subsec_millis(), 0);
}

#[test]
fn show_spanning_midnight_yields_duration() {
    let zone = studio_zone();
    let on_air = zone.with_ymd_and_hms(2024, 3, 5, 23, 50, 0).unwrap();
    let off_air = zone.with_ymd_and_hms(2024, 3, 6, 0, 10, 0).unwrap();

    let start = timecode_from_civil(&on_air, rate_2997(), None).unwrap();
    let end = timecode_from_civil(&off_air, rate_2997(), None).unwrap();
    assert_eq!(start.to_string(), "23:50:00;00");
    assert_eq!(end.to_string(), "00:10:00;00");

    let mut duration = end;
    assert!(matches!(
        duration.subtract(&start, None),
        Err(TimecodeError::NegativeTimecode)
    ));
    duration.subtract(&start, Some(1.0)).unwrap();
    assert_eq!(duration.to_string(), "00:20:00;00");
}

// ── DST transition days ────────────────────────────────────────

#[test]
fn spring_forward_day_tracks_wall_clock() {
    // 2018-03-11 in New York: clocks jump from 02:00 EST to 03:00 EDT.
    let day = New_York.with_ymd_and_hms(2018, 3, 11, 12, 0, 0).unwrap();
    let midnight = New_York.with_ymd_and_hms(2018, 3, 11, 0, 0, 0).unwrap();
    let tc = Timecode::parse("03:30:00;00", rate_2997(), None).unwrap();

    let instant = civil_from_timecode(&tc, &day).unwrap();
    assert_eq!(instant.hour(), 3);
    assert_eq!(instant.minute(), 30);
    // Only 2.5 hours of UTC time elapsed since midnight.
    assert_eq!(
        instant.clone().signed_duration_since(midnight).num_minutes(),
        150
    );

    let back = timecode_from_civil(&instant, rate_2997(), None).unwrap();
    assert_eq!(back.frame_count(), tc.frame_count());
}

#[test]
fn fall_back_day_tracks_wall_clock() {
    // 2018-11-04 in New York: clocks fall back from 02:00 EDT to 01:00 EST.
    let day = New_York.with_ymd_and_hms(2018, 11, 4, 12, 0, 0).unwrap();
    let midnight = New_York.with_ymd_and_hms(2018, 11, 4, 0, 0, 0).unwrap();
    let tc = Timecode::parse("02:30:00;00", rate_2997(), None).unwrap();

    let instant = civil_from_timecode(&tc, &day).unwrap();
    assert_eq!(instant.hour(), 2);
    assert_eq!(instant.minute(), 30);
    // 3.5 hours of UTC time elapsed since midnight.
    assert_eq!(
        instant.clone().signed_duration_since(midnight).num_minutes(),
        210
    );

    let back = timecode_from_civil(&instant, rate_2997(), None).unwrap();
    assert_eq!(back.frame_count(), tc.frame_count());
}

// ── Interlaced rates ───────────────────────────────────────────

#[test]
fn high_rate_field_render_from_civil() {
    let instant = New_York.with_ymd_and_hms(2018, 6, 1, 10, 0, 0).unwrap();
    let rate = FrameRate::from_fps(59.94).unwrap();

    let tc = timecode_from_civil(&instant, rate, None).unwrap();
    assert_eq!(tc.frame_count(), 2_157_840);
    assert_eq!(tc.format_as("field").unwrap(), "10:00:00;00.0");
}
