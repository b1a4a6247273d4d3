pub mod roster;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "gym-manager")]
#[command(about = "Console-driven gym management tool")]
pub struct CliConfig {
    /// TOML file with the instructor roster. A built-in roster is used
    /// when omitted.
    #[arg(long)]
    pub roster_file: Option<String>,

    /// Write the summary report as pretty JSON to this path.
    #[arg(long)]
    pub report_export: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
