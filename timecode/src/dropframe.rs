//! Conversion between total frame counts and `HH:MM:SS:FF` components.
//!
//! Drop-frame timecode compensates for the difference between 30fps and 29.97fps
//! (or 60fps and 59.94fps) by "dropping" frame numbers at specific intervals.
//!
//! The rules are:
//! - Skip frames 0 and 1 (or 0-3 for 59.94) at the start of each minute
//! - Except for minutes 0, 10, 20, 30, 40, 50
//!
//! Only labels are skipped. Every frame is still counted, which keeps the
//! displayed timecode aligned with wall-clock time.

use crate::error::{Result, TimecodeError};
use crate::framerate::Framerate;
use serde::{Deserialize, Serialize};

/// Drop-frame configuration for a frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropFrameConfig {
    /// Number of frames dropped per minute (except every 10th minute)
    pub frames_dropped_per_minute: u32,
    /// Nominal frame rate
    pub nominal_fps: u32,
    /// Frames per 10 minutes (accounting for drops)
    pub frames_per_10_minutes: u64,
    /// Frames per minute (accounting for drops, for non-10th minutes)
    pub frames_per_minute: u64,
}

impl DropFrameConfig {
    /// Get the configuration for a frame rate, if it uses drop-frame labels.
    #[must_use]
    pub fn for_framerate(framerate: Framerate) -> Option<Self> {
        if !framerate.is_drop_frame() {
            return None;
        }

        let nominal_fps = framerate.nominal_fps();
        let drop = framerate.frames_dropped_per_minute() as u64;
        let full_minute = nominal_fps as u64 * 60;

        Some(Self {
            frames_dropped_per_minute: drop as u32,
            nominal_fps,
            // 30 * 60 * 10 - 9 * 2 = 17982 for 29.97
            frames_per_10_minutes: full_minute * 10 - 9 * drop,
            // 30 * 60 - 2 = 1798 for 29.97
            frames_per_minute: full_minute - drop,
        })
    }
}

/// Decoded `HH:MM:SS:FF` fields of a timecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Components {
    /// Hours (unbounded)
    pub hours: u64,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
    /// Frames (0 to nominal fps - 1)
    pub frames: u8,
}

impl Components {
    /// Bundle the four fields without validation.
    #[must_use]
    pub const fn new(hours: u64, minutes: u8, seconds: u8, frames: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Check the fields against a frame rate.
    ///
    /// Rejects out-of-range minutes, seconds and frames, and labels that
    /// drop-frame counting skips.
    pub fn validate(&self, framerate: Framerate) -> Result<()> {
        let fps = framerate.nominal_fps();

        if self.minutes > 59 {
            return Err(TimecodeError::invalid_component(
                "minutes",
                self.minutes as u32,
                59,
            ));
        }
        if self.seconds > 59 {
            return Err(TimecodeError::invalid_component(
                "seconds",
                self.seconds as u32,
                59,
            ));
        }
        if self.frames as u32 >= fps {
            return Err(TimecodeError::invalid_component(
                "frames",
                self.frames as u32,
                fps - 1,
            ));
        }
        if is_dropped_frame(self.minutes, self.seconds, self.frames, framerate) {
            return Err(TimecodeError::dropped_frame(
                self.minutes,
                self.seconds,
                self.frames,
            ));
        }

        Ok(())
    }
}

/// Encode components into a total frame count.
///
/// Components are validated first, so a dropped label or an out-of-range
/// field never produces a count. Hours too large for a `u64` frame count
/// fail with [`TimecodeError::Overflow`].
pub fn components_to_frames(components: &Components, framerate: Framerate) -> Result<u64> {
    components.validate(framerate)?;

    // Labels run ahead of the frame count at drop-frame rates, so the
    // positional value may exceed u64 even when the result fits.
    let fps = framerate.nominal_fps() as u128;
    let positional = components.hours as u128 * 3600 * fps
        + (components.minutes as u128 * 60 + components.seconds as u128) * fps
        + components.frames as u128;
    let dropped = dropped_labels(components.hours, components.minutes, framerate);

    u64::try_from(positional - dropped).map_err(|_| TimecodeError::Overflow)
}

/// Decode a total frame count into components.
///
/// For drop-frame rates the skipped labels are added back, so the result is
/// never a dropped label.
#[must_use]
pub fn frames_to_components(total_frames: u64, framerate: Framerate) -> Components {
    let fps = framerate.nominal_fps() as u64;

    let (total_minutes, frame_in_minute) = match DropFrameConfig::for_framerate(framerate) {
        None => (total_frames / (fps * 60), total_frames % (fps * 60)),
        Some(config) => {
            let drop = config.frames_dropped_per_minute as u64;
            let full_minute = fps * 60;

            let ten_minute_blocks = total_frames / config.frames_per_10_minutes;
            let remaining = total_frames % config.frames_per_10_minutes;

            // The first minute of each 10-minute block keeps all its labels.
            let (extra_minutes, in_minute) = if remaining < full_minute {
                (0, remaining)
            } else {
                let after_first = remaining - full_minute;
                (
                    1 + after_first / config.frames_per_minute,
                    after_first % config.frames_per_minute + drop,
                )
            };

            (ten_minute_blocks * 10 + extra_minutes, in_minute)
        }
    };

    Components {
        hours: total_minutes / 60,
        minutes: (total_minutes % 60) as u8,
        seconds: (frame_in_minute / fps) as u8,
        frames: (frame_in_minute % fps) as u8,
    }
}

/// Check if a label is skipped by drop-frame counting.
#[must_use]
pub fn is_dropped_frame(minutes: u8, seconds: u8, frames: u8, framerate: Framerate) -> bool {
    let drop = framerate.frames_dropped_per_minute();
    seconds == 0 && minutes % 10 != 0 && (frames as u32) < drop
}

/// Count the labels skipped before `hours:minutes:00:00`.
///
/// The minute being entered counts when it is not a tenth minute.
/// Saturates at `u64::MAX`.
#[must_use]
pub fn frames_dropped_until(hours: u64, minutes: u8, framerate: Framerate) -> u64 {
    u64::try_from(dropped_labels(hours, minutes, framerate)).unwrap_or(u64::MAX)
}

fn dropped_labels(hours: u64, minutes: u8, framerate: Framerate) -> u128 {
    let drop = framerate.frames_dropped_per_minute() as u128;
    let total_minutes = hours as u128 * 60 + minutes as u128;
    drop * (total_minutes - total_minutes / 10)
}
