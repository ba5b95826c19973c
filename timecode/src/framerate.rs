//! Broadcast frame rate catalog.
//!
//! Every supported rate carries a nominal integer rate used for
//! `HH:MM:SS:FF` arithmetic, a drop-frame flag, and the exact real rate
//! used when elapsed time matters.

use crate::error::{Result, TimecodeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Frame rates supported by [`Timecode`](crate::Timecode).
///
/// Variants order from slowest to fastest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Framerate {
    /// 23.976 fps (24000/1001, NTSC film), counted as 24
    Fps23_976,
    /// 24 fps (film)
    Fps24,
    /// 25 fps (PAL)
    Fps25,
    /// 29.97 fps drop-frame
    Fps29_97Df,
    /// 29.97 fps non-drop-frame
    Fps29_97Ndf,
    /// 30 fps
    Fps30,
    /// 50 fps
    Fps50,
    /// 59.94 fps drop-frame
    Fps59_94Df,
    /// 59.94 fps non-drop-frame
    Fps59_94Ndf,
    /// 60 fps
    Fps60,
}

impl Framerate {
    /// Every catalog entry, slowest first.
    pub const ALL: [Framerate; 10] = [
        Self::Fps23_976,
        Self::Fps24,
        Self::Fps25,
        Self::Fps29_97Df,
        Self::Fps29_97Ndf,
        Self::Fps30,
        Self::Fps50,
        Self::Fps59_94Df,
        Self::Fps59_94Ndf,
        Self::Fps60,
    ];

    /// Integer frames per second used for timecode display and arithmetic.
    #[must_use]
    pub const fn nominal_fps(&self) -> u32 {
        match self {
            Self::Fps23_976 | Self::Fps24 => 24,
            Self::Fps25 => 25,
            Self::Fps29_97Df | Self::Fps29_97Ndf | Self::Fps30 => 30,
            Self::Fps50 => 50,
            Self::Fps59_94Df | Self::Fps59_94Ndf | Self::Fps60 => 60,
        }
    }

    /// Whether frame labels are dropped at minute boundaries.
    #[must_use]
    pub const fn is_drop_frame(&self) -> bool {
        matches!(self, Self::Fps29_97Df | Self::Fps59_94Df)
    }

    /// The real frame rate as a rational number (numerator, denominator).
    #[must_use]
    pub const fn as_rational(&self) -> (u32, u32) {
        match self {
            Self::Fps23_976 => (24000, 1001),
            Self::Fps24 => (24, 1),
            Self::Fps25 => (25, 1),
            Self::Fps29_97Df | Self::Fps29_97Ndf => (30000, 1001),
            Self::Fps30 => (30, 1),
            Self::Fps50 => (50, 1),
            Self::Fps59_94Df | Self::Fps59_94Ndf => (60000, 1001),
            Self::Fps60 => (60, 1),
        }
    }

    /// The real frame rate as a floating point value.
    #[must_use]
    pub fn real_fps(&self) -> f64 {
        let (num, den) = self.as_rational();
        num as f64 / den as f64
    }

    /// Frame labels skipped at each non-tenth minute (zero for non-drop rates).
    #[must_use]
    pub const fn frames_dropped_per_minute(&self) -> u32 {
        if self.is_drop_frame() {
            (self.nominal_fps() + 7) / 15
        } else {
            0
        }
    }

    /// Short label, also accepted by [`FromStr`].
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fps23_976 => "23.976",
            Self::Fps24 => "24",
            Self::Fps25 => "25",
            Self::Fps29_97Df => "29.97df",
            Self::Fps29_97Ndf => "29.97",
            Self::Fps30 => "30",
            Self::Fps50 => "50",
            Self::Fps59_94Df => "59.94df",
            Self::Fps59_94Ndf => "59.94",
            Self::Fps60 => "60",
        }
    }
}

impl fmt::Display for Framerate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Framerate {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let rate = match normalized.as_str() {
            "23.976" | "23.98" => Self::Fps23_976,
            "24" => Self::Fps24,
            "25" => Self::Fps25,
            "29.97df" => Self::Fps29_97Df,
            "29.97" | "29.97ndf" => Self::Fps29_97Ndf,
            "30" => Self::Fps30,
            "50" => Self::Fps50,
            "59.94df" => Self::Fps59_94Df,
            "59.94" | "59.94ndf" => Self::Fps59_94Ndf,
            "60" => Self::Fps60,
            _ => return Err(TimecodeError::unknown_framerate(s)),
        };
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nominal_fps() {
        assert_eq!(Framerate::Fps23_976.nominal_fps(), 24);
        assert_eq!(Framerate::Fps29_97Df.nominal_fps(), 30);
        assert_eq!(Framerate::Fps29_97Ndf.nominal_fps(), 30);
        assert_eq!(Framerate::Fps50.nominal_fps(), 50);
        assert_eq!(Framerate::Fps59_94Df.nominal_fps(), 60);
    }

    #[test]
    fn test_drop_frame_flags() {
        let drop: Vec<_> = Framerate::ALL
            .iter()
            .filter(|r| r.is_drop_frame())
            .collect();
        assert_eq!(drop, vec![&Framerate::Fps29_97Df, &Framerate::Fps59_94Df]);

        assert_eq!(Framerate::Fps29_97Df.frames_dropped_per_minute(), 2);
        assert_eq!(Framerate::Fps59_94Df.frames_dropped_per_minute(), 4);
        assert_eq!(Framerate::Fps29_97Ndf.frames_dropped_per_minute(), 0);
        assert_eq!(Framerate::Fps24.frames_dropped_per_minute(), 0);
    }

    #[test]
    fn test_real_fps() {
        assert!((Framerate::Fps23_976.real_fps() - 23.976).abs() < 0.001);
        assert!((Framerate::Fps29_97Df.real_fps() - 29.97).abs() < 0.01);
        assert!((Framerate::Fps59_94Ndf.real_fps() - 59.94).abs() < 0.01);

        // Integer rates are exact.
        for rate in [Framerate::Fps24, Framerate::Fps25, Framerate::Fps30, Framerate::Fps50, Framerate::Fps60] {
            assert_eq!(rate.real_fps(), rate.nominal_fps() as f64);
        }
    }

    #[test]
    fn test_label_roundtrip() {
        for rate in Framerate::ALL {
            let parsed: Framerate = rate.to_string().parse().unwrap();
            assert_eq!(parsed, rate);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("23.98".parse::<Framerate>().unwrap(), Framerate::Fps23_976);
        assert_eq!("29.97NDF".parse::<Framerate>().unwrap(), Framerate::Fps29_97Ndf);
        assert_eq!(" 59.94DF ".parse::<Framerate>().unwrap(), Framerate::Fps59_94Df);
        assert_eq!(
            "48".parse::<Framerate>(),
            Err(TimecodeError::unknown_framerate("48"))
        );
    }

    #[test]
    fn test_framerate_serialization() {
        let json = serde_json::to_string(&Framerate::Fps29_97Df).unwrap();
        let decoded: Framerate = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, Framerate::Fps29_97Df);
    }
}
