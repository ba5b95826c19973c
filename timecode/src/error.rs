//! Error types for timecode operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for timecode operations.
pub type Result<T> = std::result::Result<T, TimecodeError>;

/// Errors that can occur during timecode operations.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimecodeError {
    /// Input string does not match the canonical `HH:MM:SS:FF` form.
    #[error("Invalid timecode format: {message}")]
    InvalidFormat {
        /// Description of the format error.
        message: String,
    },

    /// A timecode component is outside its valid range.
    #[error("Invalid timecode component: {component} = {value} (max {max})")]
    InvalidComponent {
        /// Name of the invalid component (minutes, seconds, frames).
        component: String,
        /// The invalid value that was provided.
        value: u32,
        /// The maximum allowed value for this component.
        max: u32,
    },

    /// The components name a frame label skipped by drop-frame counting.
    #[error("Dropped frame label: {minutes:02}:{seconds:02}:{frames:02} does not exist in drop-frame timecode")]
    DroppedFrame {
        /// Minutes component.
        minutes: u8,
        /// Seconds component.
        seconds: u8,
        /// Frames component.
        frames: u8,
    },

    /// A total frame count below zero was supplied.
    #[error("Negative frame count: {value}")]
    NegativeFrameCount {
        /// The rejected value.
        value: i64,
    },

    /// Arithmetic would exceed the representable frame count.
    #[error("Timecode overflow")]
    Overflow,

    /// Arithmetic would move the timecode before 00:00:00:00.
    #[error("Timecode underflow")]
    Underflow,

    /// Frame rate mismatch in operation.
    #[error("Frame rate mismatch: {left} vs {right}")]
    FrameRateMismatch {
        /// String representation of the left operand's frame rate.
        left: String,
        /// String representation of the right operand's frame rate.
        right: String,
    },

    /// A frame rate label that is not part of the catalog.
    #[error("Unknown frame rate: {value}")]
    UnknownFramerate {
        /// The unrecognised label.
        value: String,
    },
}

impl TimecodeError {
    /// Create an invalid format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create an invalid component error.
    pub fn invalid_component(component: impl Into<String>, value: u32, max: u32) -> Self {
        Self::InvalidComponent {
            component: component.into(),
            value,
            max,
        }
    }

    /// Create a dropped frame error.
    pub fn dropped_frame(minutes: u8, seconds: u8, frames: u8) -> Self {
        Self::DroppedFrame {
            minutes,
            seconds,
            frames,
        }
    }

    /// Create a frame rate mismatch error.
    pub fn frame_rate_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::FrameRateMismatch {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Create an unknown frame rate error.
    pub fn unknown_framerate(value: impl Into<String>) -> Self {
        Self::UnknownFramerate {
            value: value.into(),
        }
    }

    /// Whether this error reports an out-of-range component or dropped label.
    #[must_use]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::InvalidComponent { .. } | Self::DroppedFrame { .. })
    }
}
