//! Frame rate conversion command.

use super::show::TimecodeReport;
use clap::Args;
use console::style;
use timecode::{Framerate, Timecode};
use tracing::info;

/// Convert a timecode to another frame rate.
///
/// By default every frame keeps its index, so the displayed duration
/// changes with the rate. `--preserve-duration` keeps real elapsed time
/// instead, rounding to the nearest target frame.
#[derive(Args, Debug)]
pub struct CmdConvert {
    /// Timecode in HH:MM:SS:FF form.
    pub timecode: String,

    /// Source frame rate.
    #[arg(long)]
    pub from: Framerate,

    /// Target frame rate.
    #[arg(long)]
    pub to: Framerate,

    /// Keep real elapsed time instead of the frame count.
    #[arg(long)]
    pub preserve_duration: bool,
}

impl CmdConvert {
    /// Parse the source timecode and convert it, returning both.
    pub fn convert(&self) -> anyhow::Result<(Timecode, Timecode)> {
        let source = Timecode::parse(&self.timecode, self.from)?;
        let mut target = source;

        if self.preserve_duration {
            target.rescale_framerate(self.to)?;
        } else {
            target.convert_framerate(self.to);
        }

        info!(
            from = %source,
            to = %target,
            preserve_duration = self.preserve_duration,
            "Converted {} -> {} fps",
            self.from,
            self.to
        );

        Ok((source, target))
    }

    /// Execute the convert command.
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let (source, target) = self.convert()?;

        if json {
            let output = serde_json::json!({
                "source": TimecodeReport::from(&source),
                "target": TimecodeReport::from(&target),
                "preserve_duration": self.preserve_duration,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!(
                "{} @ {} {} {} @ {}",
                style(source).white(),
                self.from,
                style("->").dim(),
                style(target).cyan().bold(),
                self.to
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timecode::TimecodeError;

    fn convert(from: Framerate, to: Framerate, preserve_duration: bool) -> CmdConvert {
        CmdConvert {
            timecode: "10:00:00:00".to_string(),
            from,
            to,
            preserve_duration,
        }
    }

    #[test]
    fn test_convert_keeps_frames() {
        let (source, target) = convert(Framerate::Fps24, Framerate::Fps25, false)
            .convert()
            .unwrap();
        assert_eq!(source.total_frames(), 864_000);
        assert_eq!(target.total_frames(), 864_000);
        assert_eq!(target.to_string(), "09:36:00:00");
        assert_eq!(target.framerate(), Framerate::Fps25);
    }

    #[test]
    fn test_convert_preserve_duration() {
        let (source, target) = convert(Framerate::Fps24, Framerate::Fps25, true)
            .convert()
            .unwrap();
        assert_eq!(target.to_string(), "10:00:00:00");
        assert_eq!(target.total_frames(), 900_000);
        assert!((target.to_seconds() - source.to_seconds()).abs() < 1.0 / 25.0);

        let report = TimecodeReport::from(&target);
        assert_eq!(report.framerate, "25");
        assert!(!report.drop_frame);
    }

    #[test]
    fn test_convert_preserve_duration_to_drop_frame() {
        let (_, target) = convert(Framerate::Fps30, Framerate::Fps29_97Df, true)
            .convert()
            .unwrap();
        // 1_080_000 frames at 30 fps is 1_078_921.08 frames at 30000/1001
        assert_eq!(target.total_frames(), 1_078_921);
        assert_eq!(target.to_string(), "10:00:00:01");
    }

    #[test]
    fn test_convert_rejects_bad_source() {
        let mut cmd = convert(Framerate::Fps24, Framerate::Fps25, true);
        cmd.timecode = "10:00:00:24".to_string();
        let err = cmd.convert().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TimecodeError>(),
            Some(TimecodeError::InvalidComponent { .. })
        ));
    }
}
