use thiserror::Error;

/// What kind of filesystem entry a name belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    pub fn description(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Folder => "folder",
        }
    }
}

/// Transformation progress of a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameState {
    /// Parsed and stripped
    Constructed,
    /// Body converted to PascalCase
    Cased,
    /// Suffix token replaced by its short code
    Translated,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NameError {
    #[error("Invalid file name: '{name}'")]
    InvalidFileName { name: String },

    #[error("Suffix '{suffix}' was already translated")]
    AlreadyTranslated { suffix: String },

    #[error("Suffix '{suffix}' has no translation")]
    UnknownSuffix { suffix: String },
}
