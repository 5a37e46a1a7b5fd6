use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use lwiringpi_core::BackendKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wpi")]
#[command(about = "Drive the wiringPi binding table from the shell", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML). Falls back to $LWIRINGPI_CONFIG.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Override the configured backend
    #[arg(long, global = true, value_enum)]
    pub backend: Option<BackendArg>,
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Call one operation by name
    Call {
        /// Operation name, e.g. digitalRead
        op: String,
        /// Arguments: integers, then floats, anything else is passed as a string
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List exported operations
    Ops,
    /// List exported constants
    Constants,
    /// Print the board identity record
    Board,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Native,
    Simulated,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Native => BackendKind::Native,
            BackendArg::Simulated => BackendKind::Simulated,
        }
    }
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
