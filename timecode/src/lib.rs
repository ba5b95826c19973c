//! SMPTE Timecode Library
//!
//! This crate models a video timecode as a frame rate plus a count of
//! frames elapsed since `00:00:00:00`:
//!
//! - **Frame rate catalog**: 23.976 through 60 fps, with drop-frame and
//!   non-drop-frame variants of 29.97 and 59.94
//! - **Drop-frame counting**: labels skipped at minute boundaries so the
//!   display follows wall-clock time
//! - **Arithmetic**: signed frame, second, minute and hour offsets
//! - **Frame rate conversion**: frame-preserving or duration-preserving
//!
//! # Quick Start
//!
//! ```rust
//! use timecode::{Framerate, Timecode};
//!
//! // Parse from string
//! let mut tc = Timecode::parse("10:00:00:00", Framerate::Fps25).unwrap();
//! assert_eq!(tc.total_frames(), 900_000);
//!
//! // Timecode arithmetic mutates in place
//! tc.add_frames(50).unwrap();
//! assert_eq!(tc.to_string(), "10:00:02:00");
//!
//! // Keep every frame, change the rate
//! let mut tc = Timecode::parse("10:00:00:00", Framerate::Fps24).unwrap();
//! tc.convert_framerate(Framerate::Fps25);
//! assert_eq!(tc.to_string(), "09:36:00:00");
//! ```
//!
//! # Drop-Frame Timecode
//!
//! ```rust
//! use timecode::{Framerate, Timecode};
//!
//! let tc = Timecode::from_total_frames(1_078_920, Framerate::Fps29_97Df).unwrap();
//! assert_eq!(tc.to_string(), "10:00:00:00");
//!
//! // 00:01:00:00 and 00:01:00:01 do not exist at 29.97 drop-frame
//! assert!(Timecode::parse("00:01:00:00", Framerate::Fps29_97Df).is_err());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod dropframe;
pub mod error;
pub mod framerate;
pub mod timecode;

use regex::Regex;
use std::sync::OnceLock;

// Re-export main types
pub use error::{Result, TimecodeError};
pub use framerate::Framerate;
pub use timecode::Timecode;

// Re-export drop-frame utilities
pub use dropframe::{
    components_to_frames, frames_dropped_until, frames_to_components, is_dropped_frame,
    Components, DropFrameConfig,
};

/// Pattern accepted by [`Timecode::parse`].
///
/// Hours take two or more digits; minutes, seconds and frames exactly two.
pub const TIMECODE_PATTERN: &str = r"^[0-9]{2,}:[0-9]{2}:[0-9]{2}:[0-9]{2}$";

static TIMECODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Compiled [`TIMECODE_PATTERN`].
pub fn timecode_regex() -> &'static Regex {
    TIMECODE_REGEX.get_or_init(|| {
        Regex::new(TIMECODE_PATTERN).expect("TIMECODE_PATTERN is a valid regex")
    })
}

/// Check a string against [`TIMECODE_PATTERN`] without building a timecode.
///
/// Component ranges are not checked; `00:99:00:00` matches.
///
/// # Example
/// ```rust
/// use timecode::is_valid_timecode;
///
/// assert!(is_valid_timecode("10:00:00:00"));
/// assert!(!is_valid_timecode("10:a0:00:00"));
/// ```
#[must_use]
pub fn is_valid_timecode(s: &str) -> bool {
    timecode_regex().is_match(s)
}

/// Create a timecode from hours, minutes, seconds, and frames.
///
/// # Example
/// ```rust
/// use timecode::{from_hmsf, Framerate};
///
/// let tc = from_hmsf(1, 30, 45, 12, Framerate::Fps24).unwrap();
/// assert_eq!(tc.to_string(), "01:30:45:12");
/// ```
pub fn from_hmsf(
    hours: u64,
    minutes: u8,
    seconds: u8,
    frames: u8,
    framerate: Framerate,
) -> Result<Timecode> {
    Timecode::from_components(hours, minutes, seconds, frames, framerate)
}

/// Calculate the real duration between two timecodes in seconds.
///
/// Negative if `end` is before `start`. The frame rates may differ.
#[must_use]
pub fn duration_seconds(start: &Timecode, end: &Timecode) -> f64 {
    end.to_seconds() - start.to_seconds()
}

/// Calculate the duration between two timecodes in frames.
///
/// Both timecodes must share a frame rate.
pub fn duration_frames(start: &Timecode, end: &Timecode) -> Result<i64> {
    end.difference(start)
}
