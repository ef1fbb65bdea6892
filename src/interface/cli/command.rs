//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "spoticli", version)]
#[command(about = "Interactive shell for controlling Spotify playback")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and token source
    Config,
    /// Run a single shell command and exit (e.g. `spoticli run volume +10`)
    Run {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    Interactive,
    InspectConfig,
    RunOnce(String),
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        match self.command {
            None => Ok(CliAction::Interactive),
            Some(Commands::Config) => Ok(CliAction::InspectConfig),
            Some(Commands::Run { command }) => {
                let line = command.join(" ");
                if line.trim().is_empty() {
                    return Err("run requires a command".to_string());
                }
                Ok(CliAction::RunOnce(line))
            }
        }
    }
}
