use crate::config::{Config, ENV_CONFIG_PATH};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "texrename")]
#[command(author, version, long_about = None)]
#[command(about = "Normalize texture file and folder names in asset libraries")]
pub struct Args {
    /// Directory to process (prompted for when omitted)
    pub target_dir: Option<PathBuf>,

    /// JSON file with naming rules
    #[arg(short, long, value_name = "FILE", env = ENV_CONFIG_PATH)]
    pub config: Option<PathBuf>,

    /// Prefix for renamed files, overriding the config
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Leave folder names untouched
    #[arg(long)]
    pub no_folders: bool,

    /// Extension eligible for renaming; repeat to replace the configured set
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub show_config: bool,

    /// Exit without waiting for enter once finished
    #[arg(long)]
    pub no_pause: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Layer command line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(prefix) = &self.prefix {
            config.file_prefix = prefix.clone();
        }
        if self.no_folders {
            config.rename_folders = false;
        }
        if !self.extensions.is_empty() {
            config.rename_extensions = self.extensions.iter().cloned().collect();
        }
        config
    }

    /// Whether to wait for the operator before exiting
    pub fn should_pause(&self) -> bool {
        !self.no_pause && !self.show_config
    }
}
