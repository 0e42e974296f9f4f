pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod name;
pub mod output;
pub mod pattern;
pub mod progress;
pub mod prompt;
pub mod walker;

pub use config::{load_config, resolve_config, Config, ConfigError};
pub use error::{AppError, ExitCode};
pub use name::{EntryKind, Name, NameError, NameState};
pub use pattern::{build_or_pattern, PatternError, Rules};
pub use walker::{rename_tree, resolve_root, RenameOperation, WalkError, WalkSummary};
