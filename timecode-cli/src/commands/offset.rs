//! Timecode offset command.

use super::show::TimecodeReport;
use anyhow::Context;
use clap::Args;
use timecode::{Framerate, Timecode};
use tracing::debug;

/// Apply signed offsets to a timecode.
///
/// Offsets apply hours first, then minutes, seconds and frames. Each is
/// converted with the nominal frame rate.
#[derive(Args, Debug)]
pub struct CmdOffset {
    /// Timecode in HH:MM:SS:FF form.
    pub timecode: String,

    /// Frame rate (e.g. 24, 25, 29.97df, 59.94).
    #[arg(short, long)]
    pub rate: Framerate,

    /// Hours to add (negative to subtract).
    #[arg(long, allow_negative_numbers = true)]
    pub hours: Option<i64>,

    /// Minutes to add (negative to subtract).
    #[arg(long, allow_negative_numbers = true)]
    pub minutes: Option<i64>,

    /// Seconds to add (negative to subtract).
    #[arg(long, allow_negative_numbers = true)]
    pub seconds: Option<i64>,

    /// Frames to add (negative to subtract).
    #[arg(long, allow_negative_numbers = true)]
    pub frames: Option<i64>,
}

impl CmdOffset {
    /// Parse the timecode and apply every offset given.
    pub fn apply(&self) -> anyhow::Result<Timecode> {
        let mut tc = Timecode::parse(&self.timecode, self.rate)?;

        if let Some(hours) = self.hours {
            tc.add_hours(hours)
                .with_context(|| format!("Failed to add {} hours to {}", hours, tc))?;
        }
        if let Some(minutes) = self.minutes {
            tc.add_minutes(minutes)
                .with_context(|| format!("Failed to add {} minutes to {}", minutes, tc))?;
        }
        if let Some(seconds) = self.seconds {
            tc.add_seconds(seconds)
                .with_context(|| format!("Failed to add {} seconds to {}", seconds, tc))?;
        }
        if let Some(frames) = self.frames {
            tc.add_frames(frames)
                .with_context(|| format!("Failed to add {} frames to {}", frames, tc))?;
        }

        debug!(input = %self.timecode, output = %tc, "Applied offsets");
        Ok(tc)
    }

    /// Execute the offset command.
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let tc = self.apply()?;
        TimecodeReport::from(&tc).print(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timecode::TimecodeError;

    fn offset(timecode: &str, rate: Framerate) -> CmdOffset {
        CmdOffset {
            timecode: timecode.to_string(),
            rate,
            hours: None,
            minutes: None,
            seconds: None,
            frames: None,
        }
    }

    #[test]
    fn test_apply_offsets_in_order() {
        let mut cmd = offset("10:00:00:00", Framerate::Fps23_976);
        cmd.minutes = Some(-61);
        cmd.frames = Some(12);

        let report = TimecodeReport::from(&cmd.apply().unwrap());
        assert_eq!(report.timecode, "08:59:00:12");
        assert_eq!(report.total_frames, 776_172);
    }

    #[test]
    fn test_drop_frame_minute_offset() {
        let mut cmd = offset("00:00:30:00", Framerate::Fps29_97Df);
        cmd.minutes = Some(1);

        assert_eq!(cmd.apply().unwrap().to_string(), "00:01:30:02");
    }

    #[test]
    fn test_below_zero_reports_context() {
        let mut cmd = offset("00:00:10:00", Framerate::Fps25);
        cmd.seconds = Some(-11);

        let err = cmd.apply().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to add -11 seconds to 00:00:10:00"
        );
        assert_eq!(
            err.downcast_ref::<TimecodeError>(),
            Some(&TimecodeError::Underflow)
        );
    }

    #[test]
    fn test_no_offsets_is_identity() {
        let cmd = offset("01:02:03:04", Framerate::Fps25);
        assert_eq!(cmd.apply().unwrap().to_string(), "01:02:03:04");
    }
}
