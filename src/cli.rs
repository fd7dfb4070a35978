use crate::context::{Mode, RunOptions};
use clap::{ArgAction, CommandFactory, Parser};

const EXAMPLES: &str = "\
Examples:
  macos-troubleshooter --diagnose                          # Run all diagnostics
  macos-troubleshooter --repair                            # Run safe repair operations
  macos-troubleshooter --custom disk_space                 # Check disk space
  macos-troubleshooter --custom clear_dns_cache --force    # Force run a repair operation

For a complete list of commands, use --list-commands";

#[derive(Parser, Debug)]
#[command(name = "macos-troubleshooter")]
#[command(about = "A comprehensive system diagnostic and repair tool", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Run full system diagnostics
    #[arg(short = 'd', long)]
    pub diagnose: bool,

    /// Run common repair operations
    #[arg(short = 'r', long)]
    pub repair: bool,

    /// Run system optimization tasks
    #[arg(short = 'o', long)]
    pub optimize: bool,

    /// Run a specific diagnostic or repair command
    #[arg(short = 'c', long, value_name = "COMMAND")]
    pub custom: Option<String>,

    /// List all available commands
    #[arg(short = 'l', long)]
    pub list_commands: bool,

    /// Allow potentially dangerous operations
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Show version information
    #[arg(long, action = ArgAction::SetTrue)]
    pub version: bool,

    /// Show this help message
    #[arg(short = 'h', long, action = ArgAction::SetTrue)]
    pub help: bool,
}

impl Cli {
    /// 플래그 우선순위: help > version > list > custom > diagnose > repair > optimize.
    /// 모드 플래그가 없으면 help
    pub fn mode(&self) -> Mode {
        if self.help {
            Mode::Help
        } else if self.version {
            Mode::Version
        } else if self.list_commands {
            Mode::List
        } else if let Some(name) = &self.custom {
            Mode::Custom(name.clone())
        } else if self.diagnose {
            Mode::Diagnose
        } else if self.repair {
            Mode::Repair
        } else if self.optimize {
            Mode::Optimize
        } else {
            Mode::Help
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            mode: self.mode(),
            force: self.force,
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }

    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }

    pub fn version_text() -> String {
        format!("MacOS Troubleshooter v{}", env!("CARGO_PKG_VERSION"))
    }
}
