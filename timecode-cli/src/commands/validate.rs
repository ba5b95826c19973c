//! Timecode string validation command.

use clap::Args;
use console::style;
use serde::Serialize;
use timecode::{is_valid_timecode, Framerate, Timecode};

/// Validation result for one input.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// The input string.
    pub input: String,
    /// Whether the input is valid.
    pub valid: bool,
    /// Why the input was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Check strings against the timecode pattern.
///
/// With `--rate`, component ranges and dropped labels are checked too.
#[derive(Args, Debug)]
pub struct CmdValidate {
    /// Timecodes to check.
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Also check components against this frame rate.
    #[arg(short, long)]
    pub rate: Option<Framerate>,
}

impl CmdValidate {
    /// Execute the validate command.
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let results: Vec<ValidationResult> =
            self.inputs.iter().map(|s| self.check(s)).collect();
        let failed = results.iter().filter(|r| !r.valid).count();

        if json {
            let output = serde_json::json!({
                "results": results,
                "failed": failed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            for result in &results {
                match &result.error {
                    None => println!("  {} {}", style("ok").green(), result.input),
                    Some(err) => println!(
                        "  {} {}  {}",
                        style("invalid").red(),
                        result.input,
                        style(err).dim()
                    ),
                }
            }
        }

        if failed > 0 {
            anyhow::bail!("{} of {} timecodes failed validation", failed, results.len());
        }
        Ok(())
    }

    fn check(&self, input: &str) -> ValidationResult {
        let error = match self.rate {
            Some(rate) => Timecode::parse(input, rate).err().map(|e| e.to_string()),
            None if is_valid_timecode(input) => None,
            None => Some("does not match HH:MM:SS:FF".to_string()),
        };

        ValidationResult {
            input: input.to_string(),
            valid: error.is_none(),
            error,
        }
    }
}
