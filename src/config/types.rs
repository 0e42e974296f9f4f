use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use thiserror::Error;

// Texture type tokens commonly found in downloaded PBR packs
static DEFAULT_SUFFIX_MAP: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    [
        ("diffuse", "D"),
        ("glossiness", "S"),
        ("height", "H"),
        ("normal", "N"),
        ("reflection", "Evil_R"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
});

/// Naming rules applied to a texture library.
///
/// Fixed for the whole run once loaded. Fields missing from a config file
/// fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File extensions eligible for renaming (compared verbatim)
    pub rename_extensions: BTreeSet<String>,

    /// Whether folders are renamed as well
    pub rename_folders: bool,

    /// Literals deleted from the name body
    pub delete_prefixes: Vec<String>,

    /// Literals deleted from the name body after the prefixes
    pub delete_postfixes: Vec<String>,

    /// Prefix prepended to renamed files (never to folders)
    pub file_prefix: String,

    /// Original texture type token -> short code
    pub suffix_map: BTreeMap<String, String>,

    /// Characters delimiting words in original names
    pub separators: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rename_extensions: ["jpg", "png"].iter().map(|s| s.to_string()).collect(),
            rename_folders: true,
            delete_prefixes: vec!["cgaxis_pbr_14".to_string()],
            delete_postfixes: Vec::new(),
            file_prefix: "T".to_string(),
            suffix_map: DEFAULT_SUFFIX_MAP.clone(),
            separators: vec![" ".to_string(), "_".to_string()],
        }
    }
}

impl Config {
    /// Check the invariants the pattern compiler relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separators.is_empty() {
            return Err(ConfigError::NoSeparators);
        }

        let lists = [
            ("separators", &self.separators),
            ("delete_prefixes", &self.delete_prefixes),
            ("delete_postfixes", &self.delete_postfixes),
        ];
        for (field, list) in lists {
            if list.iter().any(|s| s.is_empty()) {
                return Err(ConfigError::EmptyLiteral { field });
            }
        }

        if self.suffix_map.keys().any(|k| k.is_empty()) {
            return Err(ConfigError::EmptyLiteral { field: "suffix_map" });
        }

        Ok(())
    }

    /// Whether a file with this extension should be renamed
    pub fn is_renamable_extension(&self, ext: &str) -> bool {
        self.rename_extensions.contains(ext)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No separators configured")]
    NoSeparators,

    #[error("Empty literal in {field}")]
    EmptyLiteral { field: &'static str },
}
