//! Integration test crate for ReelTime.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on both reeltime crates to verify the timecode engine and
//! the civil-time bridge work together.

#[cfg(test)]
mod broadcast_day;
