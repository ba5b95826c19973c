//! Frame count formatting command.

use super::show::TimecodeReport;
use clap::Args;
use timecode::{Framerate, Timecode};

/// Format a total frame count.
#[derive(Args, Debug)]
pub struct CmdFrames {
    /// Frames since 00:00:00:00.
    #[arg(allow_negative_numbers = true)]
    pub total_frames: i64,

    /// Frame rate (e.g. 24, 25, 29.97df, 59.94).
    #[arg(short, long)]
    pub rate: Framerate,
}

impl CmdFrames {
    /// Build the report for the frame count.
    pub fn report(&self) -> anyhow::Result<TimecodeReport> {
        let tc = Timecode::from_total_frames(self.total_frames, self.rate)?;
        Ok(TimecodeReport::from(&tc))
    }

    /// Execute the frames command.
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        self.report()?.print(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timecode::TimecodeError;

    #[test]
    fn test_frames_report() {
        let cmd = CmdFrames {
            total_frames: 2_157_840,
            rate: Framerate::Fps59_94Df,
        };
        let report = cmd.report().unwrap();
        assert_eq!(report.timecode, "10:00:00:00");
        assert_eq!(report.total_frames, 2_157_840);
    }

    #[test]
    fn test_negative_frames_rejected() {
        let cmd = CmdFrames {
            total_frames: -1,
            rate: Framerate::Fps24,
        };
        let err = cmd.report().unwrap_err();
        assert_eq!(
            err.downcast_ref::<TimecodeError>(),
            Some(&TimecodeError::NegativeFrameCount { value: -1 })
        );
    }
}
