use super::commands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load, merge, and validate an evaluation config.
    Validate {
        #[arg(short, long)]
        config: PathBuf,
        /// Directory searched for `extends` bases; defaults to the config's
        /// own directory.
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },
    /// Print the merged record re-serialized.
    Show {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        config_dir: Option<PathBuf>,
        /// Substitute ${DATA_PATH} before printing.
        #[arg(long)]
        resolve: bool,
        /// Emit JSON instead of YAML.
        #[arg(long)]
        json: bool,
    },
    /// Print the length schedule, batch plan, and metric output keys.
    Plan {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Validate { config, config_dir } => {
                commands::validate::execute(&config, config_dir.as_deref())
            }
            Commands::Show {
                config,
                config_dir,
                resolve,
                json,
            } => commands::show::execute(&config, config_dir.as_deref(), resolve, json),
            Commands::Plan { config, config_dir } => {
                commands::plan::execute(&config, config_dir.as_deref())
            }
        }
    }
}
