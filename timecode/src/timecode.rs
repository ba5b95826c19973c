//! SMPTE timecode value.
//!
//! A [`Timecode`] stores a frame rate and a count of frames elapsed since
//! `00:00:00:00`. The `HH:MM:SS:FF` fields are always derived from that
//! count, so arithmetic and frame rate changes only ever touch one number.

use crate::dropframe::{components_to_frames, frames_to_components, Components};
use crate::error::{Result, TimecodeError};
use crate::framerate::Framerate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use tracing::{debug, trace};

/// SMPTE timecode representation.
///
/// Arithmetic and conversion methods mutate the value in place and leave it
/// untouched when they fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timecode {
    framerate: Framerate,
    total_frames: u64,
}

impl Timecode {
    /// Create a timecode at `00:00:00:00`.
    #[must_use]
    pub const fn new(framerate: Framerate) -> Self {
        Self {
            framerate,
            total_frames: 0,
        }
    }

    /// Create a timecode from a total frame count.
    ///
    /// Negative counts are rejected.
    pub fn from_total_frames(total_frames: i64, framerate: Framerate) -> Result<Self> {
        let total_frames = u64::try_from(total_frames)
            .map_err(|_| TimecodeError::NegativeFrameCount {
                value: total_frames,
            })?;
        Ok(Self {
            framerate,
            total_frames,
        })
    }

    /// Create a timecode from hours, minutes, seconds and frames.
    ///
    /// Fails if a field is out of range for the frame rate, or if the
    /// fields name a label that drop-frame counting skips. Hours beyond the
    /// range of a `u64` frame count fail with [`TimecodeError::Overflow`].
    pub fn from_components(
        hours: u64,
        minutes: u8,
        seconds: u8,
        frames: u8,
        framerate: Framerate,
    ) -> Result<Self> {
        let components = Components::new(hours, minutes, seconds, frames);
        Ok(Self {
            framerate,
            total_frames: components_to_frames(&components, framerate)?,
        })
    }

    /// Parse a canonical `HH:MM:SS:FF` string.
    ///
    /// The string must match [`TIMECODE_PATTERN`](crate::TIMECODE_PATTERN).
    pub fn parse(s: &str, framerate: Framerate) -> Result<Self> {
        if !crate::timecode_regex().is_match(s) {
            return Err(TimecodeError::invalid_format(format!(
                "Expected HH:MM:SS:FF, got {:?}",
                s
            )));
        }

        let parts: Vec<&str> = s.split(':').collect();

        let hours: u64 = parts[0]
            .parse()
            .map_err(|_| TimecodeError::invalid_format(format!("Invalid hours: {}", parts[0])))?;
        let minutes: u8 = parts[1]
            .parse()
            .map_err(|_| TimecodeError::invalid_format(format!("Invalid minutes: {}", parts[1])))?;
        let seconds: u8 = parts[2]
            .parse()
            .map_err(|_| TimecodeError::invalid_format(format!("Invalid seconds: {}", parts[2])))?;
        let frames: u8 = parts[3]
            .parse()
            .map_err(|_| TimecodeError::invalid_format(format!("Invalid frames: {}", parts[3])))?;

        Self::from_components(hours, minutes, seconds, frames, framerate)
    }

    /// Create a timecode from real elapsed seconds, rounding to the nearest frame.
    pub fn from_seconds(seconds: f64, framerate: Framerate) -> Result<Self> {
        if !seconds.is_finite() {
            return Err(TimecodeError::invalid_format(format!(
                "Seconds must be finite, got {}",
                seconds
            )));
        }

        let frames = (seconds * framerate.real_fps()).round();
        if frames < 0.0 {
            return Err(TimecodeError::NegativeFrameCount {
                value: frames as i64,
            });
        }
        if frames >= u64::MAX as f64 {
            return Err(TimecodeError::Overflow);
        }

        Ok(Self {
            framerate,
            total_frames: frames as u64,
        })
    }

    /// The frame rate.
    #[must_use]
    pub const fn framerate(&self) -> Framerate {
        self.framerate
    }

    /// Frames elapsed since `00:00:00:00`.
    #[must_use]
    pub const fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Decoded `HH:MM:SS:FF` fields.
    #[must_use]
    pub fn components(&self) -> Components {
        frames_to_components(self.total_frames, self.framerate)
    }

    /// Hours field.
    #[must_use]
    pub fn hours(&self) -> u64 {
        self.components().hours
    }

    /// Minutes field.
    #[must_use]
    pub fn minutes(&self) -> u8 {
        self.components().minutes
    }

    /// Seconds field.
    #[must_use]
    pub fn seconds(&self) -> u8 {
        self.components().seconds
    }

    /// Frames field.
    #[must_use]
    pub fn frames(&self) -> u8 {
        self.components().frames
    }

    /// Check if timecode is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.total_frames == 0
    }

    /// Real elapsed time in seconds.
    #[must_use]
    pub fn to_seconds(&self) -> f64 {
        let (num, den) = self.framerate.as_rational();
        self.total_frames as f64 * den as f64 / num as f64
    }

    /// Add a signed number of frames.
    pub fn add_frames(&mut self, frames: i64) -> Result<()> {
        let total_frames = if frames >= 0 {
            self.total_frames
                .checked_add(frames as u64)
                .ok_or(TimecodeError::Overflow)?
        } else {
            self.total_frames
                .checked_sub(frames.unsigned_abs())
                .ok_or(TimecodeError::Underflow)?
        };

        trace!(
            from = self.total_frames,
            to = total_frames,
            delta = frames,
            "Offset timecode"
        );
        self.total_frames = total_frames;
        Ok(())
    }

    /// Add a signed number of nominal seconds.
    pub fn add_seconds(&mut self, seconds: i64) -> Result<()> {
        self.add_scaled(seconds, 1)
    }

    /// Add a signed number of nominal minutes.
    pub fn add_minutes(&mut self, minutes: i64) -> Result<()> {
        self.add_scaled(minutes, 60)
    }

    /// Add a signed number of nominal hours.
    pub fn add_hours(&mut self, hours: i64) -> Result<()> {
        self.add_scaled(hours, 3600)
    }

    fn add_scaled(&mut self, count: i64, seconds_per_unit: i64) -> Result<()> {
        let frames_per_unit = self.framerate.nominal_fps() as i64 * seconds_per_unit;
        let frames = count
            .checked_mul(frames_per_unit)
            .ok_or(TimecodeError::Overflow)?;
        self.add_frames(frames)
    }

    /// Switch to another frame rate, keeping every frame at its index.
    ///
    /// The displayed duration scales by the ratio of the nominal rates:
    /// `10:00:00:00` at 24 fps becomes `09:36:00:00` at 25 fps.
    pub fn convert_framerate(&mut self, target: Framerate) {
        debug!(
            from = %self.framerate,
            to = %target,
            total_frames = self.total_frames,
            "Converting timecode frame rate"
        );
        self.framerate = target;
    }

    /// Switch to another frame rate, keeping the real elapsed duration.
    ///
    /// The new frame count is `total * target_fps / source_fps` using the
    /// exact rational rates, rounded to the nearest frame with halves
    /// rounded up.
    pub fn rescale_framerate(&mut self, target: Framerate) -> Result<()> {
        let (source_num, source_den) = self.framerate.as_rational();
        let (target_num, target_den) = target.as_rational();

        let numerator =
            self.total_frames as u128 * target_num as u128 * source_den as u128;
        let denominator = target_den as u128 * source_num as u128;
        let rounded = (numerator * 2 + denominator) / (denominator * 2);
        let total_frames = u64::try_from(rounded).map_err(|_| TimecodeError::Overflow)?;

        debug!(
            from = %self.framerate,
            to = %target,
            source_frames = self.total_frames,
            target_frames = total_frames,
            "Rescaling timecode to frame rate"
        );
        self.framerate = target;
        self.total_frames = total_frames;
        Ok(())
    }

    /// Signed frame difference `self - other`.
    ///
    /// Both timecodes must share a frame rate.
    pub fn difference(&self, other: &Self) -> Result<i64> {
        self.check_same_framerate(other)?;
        let diff = self.total_frames as i128 - other.total_frames as i128;
        i64::try_from(diff).map_err(|_| TimecodeError::Overflow)
    }

    fn check_same_framerate(&self, other: &Self) -> Result<()> {
        if self.framerate != other.framerate {
            return Err(TimecodeError::frame_rate_mismatch(
                self.framerate.to_string(),
                other.framerate.to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Timecode {
    fn default() -> Self {
        Self::new(Framerate::Fps24)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.components();
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            c.hours, c.minutes, c.seconds, c.frames
        )
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    /// Orders by real elapsed time, then by frame rate.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.framerate == other.framerate {
            return self.total_frames.cmp(&other.total_frames);
        }

        // total / (num / den), compared by cross-multiplication.
        let (a_num, a_den) = self.framerate.as_rational();
        let (b_num, b_den) = other.framerate.as_rational();
        let lhs = self.total_frames as u128 * a_den as u128 * b_num as u128;
        let rhs = other.total_frames as u128 * b_den as u128 * a_num as u128;

        lhs.cmp(&rhs).then_with(|| self.framerate.cmp(&other.framerate))
    }
}

impl Add for Timecode {
    type Output = Result<Self>;

    fn add(self, other: Self) -> Result<Self> {
        self.check_same_framerate(&other)?;
        let total_frames = self
            .total_frames
            .checked_add(other.total_frames)
            .ok_or(TimecodeError::Overflow)?;
        Ok(Self {
            framerate: self.framerate,
            total_frames,
        })
    }
}

impl Sub for Timecode {
    type Output = Result<Self>;

    fn sub(self, other: Self) -> Result<Self> {
        self.check_same_framerate(&other)?;
        let total_frames = self
            .total_frames
            .checked_sub(other.total_frames)
            .ok_or(TimecodeError::Underflow)?;
        Ok(Self {
            framerate: self.framerate,
            total_frames,
        })
    }
}
