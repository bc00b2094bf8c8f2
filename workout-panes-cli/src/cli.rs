// src/cli.rs
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse workouts and replay master-detail layouts", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeCli {
    Single,
    Dual,
}

/// One scripted event in a layout replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Select(i64),
    Back,
    Rotate,
    Add {
        name: String,
        description: String,
        duration: String,
    },
}

fn parse_step(s: &str) -> Result<Step, String> {
    match s {
        "back" => return Ok(Step::Back),
        "rotate" => return Ok(Step::Rotate),
        _ => {}
    }
    if let Some(id) = s.strip_prefix("select:") {
        return id
            .trim()
            .parse()
            .map(Step::Select)
            .map_err(|_| format!("Invalid record id in '{}'", s));
    }
    if let Some(fields) = s.strip_prefix("add:") {
        let mut parts = fields.splitn(3, '|');
        let name = parts.next().unwrap_or_default().to_string();
        let description = parts.next().unwrap_or_default().to_string();
        let duration = parts.next().unwrap_or_default().to_string();
        return Ok(Step::Add {
            name,
            description,
            duration,
        });
    }
    Err(format!(
        "Unknown step '{}'. Expected select:<id>, back, rotate or add:<name>|<description>|<duration>",
        s
    ))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the workouts in the store
    List,
    /// Show one workout the way the detail pane renders it
    Show {
        /// Record id
        id: i64,
    },
    /// List the icons offered by the creation dialog
    Icons,
    /// Replay a scripted session against the layout coordinator
    Layout {
        /// Presentation mode at startup
        #[arg(short, long, value_enum, default_value = "single")]
        mode: ModeCli,
        /// Steps: select:<id>, back, rotate, add:<name>|<description>|<duration>
        #[arg(value_parser = parse_step)]
        steps: Vec<Step>,
    },
    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
