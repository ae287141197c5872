//! Canonical timecode string parsing and rendering.
//!
//! The accepted grammar is the fixed-width
//! `HH:MM:SS:FF` / `HH:MM:SS;FF` / `HH;MM;SS;FF` / `HH:MM:SS.FF` shape:
//! two digits per field, `:` or `;` between the clock fields, and `:`, `;`
//! or `.` before the frames. Output always normalizes to `:` between clock
//! fields and `;` before frames iff the timecode is drop-frame.

use crate::codec::TimecodeFields;
use crate::error::{Result, TimecodeError};

/// A parsed canonical timecode string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedText {
    /// The numeric fields, range-checked for hours/minutes/seconds.
    pub fields: TimecodeFields,
    /// Drop-frame implied by the frame separator (`;` or `.`).
    pub drop_frame: bool,
}

/// Parse a canonical timecode string.
///
/// The frame component is not range-checked here; that needs the frame rate
/// and happens when the timecode is constructed.
pub fn parse_canonical(input: &str) -> Result<ParsedText> {
    let malformed = || {
        TimecodeError::InvalidTimecode(format!(
            "expected HH:MM:SS:FF or HH:MM:SS;FF, got {input:?}"
        ))
    };

    let bytes = input.as_bytes();
    if bytes.len() != 11 {
        return Err(malformed());
    }

    let digit = |index: usize| -> Result<u32> {
        let byte = bytes[index];
        if byte.is_ascii_digit() {
            Ok((byte - b'0') as u32)
        } else {
            Err(malformed())
        }
    };
    let pair = |index: usize| -> Result<u32> { Ok(digit(index)? * 10 + digit(index + 1)?) };

    if !matches!(bytes[2], b':' | b';') || !matches!(bytes[5], b':' | b';') {
        return Err(malformed());
    }
    if !matches!(bytes[8], b':' | b';' | b'.') {
        return Err(malformed());
    }

    let fields = TimecodeFields {
        hours: pair(0)?,
        minutes: pair(3)?,
        seconds: pair(6)?,
        frames: pair(9)?,
    };
    if fields.hours > 23 || fields.minutes > 59 || fields.seconds > 59 {
        return Err(TimecodeError::InvalidTimecode(format!(
            "component out of range in {input:?}"
        )));
    }

    Ok(ParsedText {
        fields,
        drop_frame: bytes[8] != b':',
    })
}

/// The separator between seconds and frames: `;` for drop-frame.
#[inline]
pub fn frame_separator(drop_frame: bool) -> char {
    if drop_frame {
        ';'
    } else {
        ':'
    }
}

/// Render fields in the canonical shape.
pub fn render(fields: &TimecodeFields, drop_frame: bool) -> String {
    format!(
        "{:02}:{:02}:{:02}{}{:02}",
        fields.hours,
        fields.minutes,
        fields.seconds,
        frame_separator(drop_frame),
        fields.frames
    )
}
