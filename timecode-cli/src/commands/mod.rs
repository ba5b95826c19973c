//! CLI subcommand implementations.

pub mod convert;
pub mod frames;
pub mod offset;
pub mod rates;
pub mod show;
pub mod validate;

pub use convert::CmdConvert;
pub use frames::CmdFrames;
pub use offset::CmdOffset;
pub use rates::CmdRates;
pub use show::CmdShow;
pub use validate::CmdValidate;
