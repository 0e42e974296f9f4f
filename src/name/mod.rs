mod types;

pub use types::*;

use crate::pattern::Rules;
use std::fmt;
use tracing::trace;

/// A file or folder name being normalized.
///
/// Built from a raw directory entry, transformed in place through
/// [`Name::to_pascal`] and [`Name::translate_suffix`], then rendered once with
/// `to_string()` to get the final on-disk name.
#[derive(Debug, Clone)]
pub struct Name<'r> {
    rules: &'r Rules,
    kind: EntryKind,
    body: String,
    suffix: Option<String>,
    ext: Option<String>,
    state: NameState,
}

impl<'r> Name<'r> {
    /// Parse a raw entry name and strip the configured affixes and separators.
    ///
    /// File names must split on their last `.` into a non-empty base and a
    /// non-empty extension.
    pub fn new(raw: &str, kind: EntryKind, rules: &'r Rules) -> Result<Self, NameError> {
        let (body, suffix, ext) = match kind {
            EntryKind::File => {
                let (base, ext) = raw
                    .rsplit_once('.')
                    .filter(|(base, ext)| !base.is_empty() && !ext.is_empty())
                    .ok_or_else(|| NameError::InvalidFileName {
                        name: raw.to_string(),
                    })?;

                match rules.match_suffix(base) {
                    Some(key) => (
                        base[..base.len() - key.len()].to_string(),
                        Some(key.to_string()),
                        Some(ext.to_string()),
                    ),
                    None => (base.to_string(), None, Some(ext.to_string())),
                }
            }
            EntryKind::Folder => (raw.to_string(), None, None),
        };

        let mut name = Self {
            rules,
            kind,
            body,
            suffix,
            ext,
            state: NameState::Constructed,
        };
        name.prepare();

        trace!(raw = %raw, body = %name.body, suffix = ?name.suffix, "Parsed name");
        Ok(name)
    }

    fn prepare(&mut self) {
        let trimmed = self.rules.trim(&self.body);
        let stripped = self.rules.delete_affixes(&trimmed);
        self.body = self.rules.trim(&stripped);
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn ext(&self) -> Option<&str> {
        self.ext.as_deref()
    }

    pub fn state(&self) -> NameState {
        self.state
    }

    /// Collapse separators and capitalize the first letter of every word.
    ///
    /// Interior casing of each word is left untouched.
    pub fn to_pascal(&mut self) {
        let mut pascal = String::with_capacity(self.body.len());

        for word in self.rules.split_words(&self.body) {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                pascal.extend(first.to_uppercase());
                pascal.push_str(chars.as_str());
            }
        }

        self.body = pascal;
        if self.state == NameState::Constructed {
            self.state = NameState::Cased;
        }
    }

    /// Replace the suffix token by its short code.
    ///
    /// Returns `Ok(false)` when there is no suffix. A second translation of a
    /// present suffix is rejected.
    pub fn translate_suffix(&mut self) -> Result<bool, NameError> {
        let Some(suffix) = self.suffix.as_deref() else {
            self.state = NameState::Translated;
            return Ok(false);
        };

        if self.state == NameState::Translated {
            return Err(NameError::AlreadyTranslated {
                suffix: suffix.to_string(),
            });
        }

        // Untranslated suffixes are always map keys; this only trips if that breaks
        let translated = self
            .rules
            .translate(suffix)
            .ok_or_else(|| NameError::UnknownSuffix {
                suffix: suffix.to_string(),
            })?
            .to_string();

        self.suffix = Some(translated);
        self.state = NameState::Translated;
        Ok(true)
    }
}

impl fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EntryKind::Folder => write!(f, "{}", self.body),
            EntryKind::File => {
                write!(f, "{}_{}", self.rules.config().file_prefix, self.body)?;
                if let Some(suffix) = &self.suffix {
                    write!(f, "_{}", suffix)?;
                }
                if let Some(ext) = &self.ext {
                    write!(f, ".{}", ext)?;
                }
                Ok(())
            }
        }
    }
}
