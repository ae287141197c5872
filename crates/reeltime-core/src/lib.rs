//! ReelTime Core - SMPTE timecode engine
//!
//! This crate provides the frame-accurate timecode types used throughout
//! ReelTime:
//! - Frame rates and their NTSC drop-frame profiles (FrameRate)
//! - Exact frame-count <-> HH:MM:SS:FF conversion (codec)
//! - The Timecode value type with wraparound arithmetic
//! - Canonical string parsing and rendering (format)
//!
//! Civil wall-clock interconversion lives in `reeltime-civil` so this crate
//! stays free of timezone dependencies.

pub mod codec;
pub mod error;
pub mod format;
pub mod rate;
pub mod timecode;

pub use codec::{fields_from_frames, frames_from_fields, is_dropped_frame, TimecodeFields};
pub use error::{Result, TimecodeError};
pub use format::{parse_canonical, ParsedText};
pub use rate::{FrameRate, DROP_FRAME_EPSILON};
pub use timecode::{Timecode, TimecodeSource};
