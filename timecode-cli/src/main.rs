//! Timecode CLI - inspect, offset and convert SMPTE timecode.

mod commands;

use clap::{Parser, Subcommand};
use commands::{CmdConvert, CmdFrames, CmdOffset, CmdRates, CmdShow, CmdValidate};

/// Command-line arguments for the timecode tool.
#[derive(Parser, Debug)]
#[command(name = "timecode-cli")]
#[command(version)]
#[command(about = "Inspect, offset and convert SMPTE timecode")]
#[command(long_about = "Works with HH:MM:SS:FF timecode at broadcast frame rates,\n\
    including 29.97 and 59.94 drop-frame.\n\n\
    EXAMPLES:\n    \
    timecode-cli show 10:00:00:00 --rate 25\n    \
    timecode-cli frames 1078920 --rate 29.97df\n    \
    timecode-cli offset 10:00:00:00 --rate 23.976 --minutes -61\n    \
    timecode-cli convert 10:00:00:00 --from 24 --to 25\n    \
    timecode-cli convert 10:00:00:00 --from 24 --to 25 --preserve-duration")]
struct Args {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output in JSON format (disables logging)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the frame count and duration of a timecode.
    Show(CmdShow),
    /// Format a total frame count as timecode.
    Frames(CmdFrames),
    /// Apply signed offsets to a timecode.
    Offset(CmdOffset),
    /// Convert a timecode to another frame rate.
    Convert(CmdConvert),
    /// List supported frame rates.
    Rates(CmdRates),
    /// Check strings against the timecode pattern.
    Validate(CmdValidate),
}

impl Args {
    /// Log level to install, or `None` when output must stay machine-readable.
    fn log_level(&self) -> Option<tracing::Level> {
        if self.json {
            None
        } else if self.verbose {
            Some(tracing::Level::DEBUG)
        } else {
            Some(tracing::Level::INFO)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging (not in JSON mode)
    if let Some(level) = args.log_level() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    let json = args.json;
    match &args.command {
        Command::Show(cmd) => cmd.run(json),
        Command::Frames(cmd) => cmd.run(json),
        Command::Offset(cmd) => cmd.run(json),
        Command::Convert(cmd) => cmd.run(json),
        Command::Rates(cmd) => cmd.run(json),
        Command::Validate(cmd) => cmd.run(json),
    }
}
