//! Timecode inspection command.

use clap::Args;
use console::style;
use serde::Serialize;
use timecode::{Framerate, Timecode};

/// Timecode information for display.
#[derive(Debug, Clone, Serialize)]
pub struct TimecodeReport {
    /// Canonical `HH:MM:SS:FF` string.
    pub timecode: String,
    /// Frame rate label.
    pub framerate: String,
    /// Whether the frame rate drops labels.
    pub drop_frame: bool,
    /// Frames since 00:00:00:00.
    pub total_frames: u64,
    /// Real elapsed time in seconds.
    pub seconds: f64,
}

impl From<&Timecode> for TimecodeReport {
    fn from(tc: &Timecode) -> Self {
        Self {
            timecode: tc.to_string(),
            framerate: tc.framerate().to_string(),
            drop_frame: tc.framerate().is_drop_frame(),
            total_frames: tc.total_frames(),
            seconds: tc.to_seconds(),
        }
    }
}

impl TimecodeReport {
    /// Print as JSON or as a styled block.
    pub fn print(&self, json: bool) -> anyhow::Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(self)?);
        } else {
            let rate = if self.drop_frame {
                format!("{} fps (drop-frame)", self.framerate)
            } else {
                format!("{} fps", self.framerate)
            };
            println!("{}", style(&self.timecode).cyan().bold());
            println!("  Frame rate:    {}", style(rate).white());
            println!("  Total frames:  {}", style(self.total_frames).white());
            println!("  Duration:      {:.3}s", self.seconds);
        }
        Ok(())
    }
}

/// Show a timecode.
#[derive(Args, Debug)]
pub struct CmdShow {
    /// Timecode in HH:MM:SS:FF form.
    pub timecode: String,

    /// Frame rate (e.g. 24, 25, 29.97df, 59.94).
    #[arg(short, long)]
    pub rate: Framerate,
}

impl CmdShow {
    /// Build the report for the parsed timecode.
    pub fn report(&self) -> anyhow::Result<TimecodeReport> {
        let tc = Timecode::parse(&self.timecode, self.rate)?;
        Ok(TimecodeReport::from(&tc))
    }

    /// Execute the show command.
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        self.report()?.print(json)
    }
}
