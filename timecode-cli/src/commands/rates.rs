//! List supported frame rates command.

use clap::Args;
use console::style;
use serde::Serialize;
use timecode::{DropFrameConfig, Framerate};

/// Information about a frame rate.
#[derive(Debug, Clone, Serialize)]
pub struct RateEntry {
    /// Label accepted by `--rate`.
    pub label: String,
    /// Integer rate used for HH:MM:SS:FF.
    pub nominal_fps: u32,
    /// Exact real rate.
    pub real_fps: f64,
    /// Whether labels are dropped.
    pub drop_frame: bool,
    /// Frames in ten real minutes (drop-frame only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames_per_10_minutes: Option<u64>,
}

impl From<Framerate> for RateEntry {
    fn from(rate: Framerate) -> Self {
        Self {
            label: rate.to_string(),
            nominal_fps: rate.nominal_fps(),
            real_fps: rate.real_fps(),
            drop_frame: rate.is_drop_frame(),
            frames_per_10_minutes: DropFrameConfig::for_framerate(rate)
                .map(|c| c.frames_per_10_minutes),
        }
    }
}

/// List supported frame rates.
#[derive(Args, Debug)]
pub struct CmdRates {
    /// Only show drop-frame rates.
    #[arg(long)]
    pub drop_frame: bool,
}

impl CmdRates {
    /// Execute the rates command.
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let rates: Vec<RateEntry> = Framerate::ALL
            .into_iter()
            .filter(|r| !self.drop_frame || r.is_drop_frame())
            .map(RateEntry::from)
            .collect();

        if json {
            let output = serde_json::json!({ "rates": rates });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!();
        println!("{}", style("Supported Frame Rates").cyan().bold());
        println!();
        for rate in &rates {
            let df = if rate.drop_frame {
                style("drop-frame").yellow().to_string()
            } else {
                String::new()
            };
            println!(
                "  {:<10} nominal {:>2}  real {:>9.5}  {}",
                style(&rate.label).green(),
                rate.nominal_fps,
                rate.real_fps,
                df
            );
        }
        println!();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_entry() {
        let entry = RateEntry::from(Framerate::Fps29_97Df);
        assert_eq!(entry.label, "29.97df");
        assert_eq!(entry.nominal_fps, 30);
        assert!(entry.drop_frame);
        assert_eq!(entry.frames_per_10_minutes, Some(17982));

        let entry = RateEntry::from(Framerate::Fps25);
        assert_eq!(entry.frames_per_10_minutes, None);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("frames_per_10_minutes").is_none());
    }
}
