use super::{build_or_pattern, PatternError};
use crate::config::Config;
use regex::Regex;
use tracing::debug;

/// Configuration plus the patterns compiled from it.
///
/// Built once per run and shared by reference with every name and the walker.
#[derive(Debug)]
pub struct Rules {
    config: Config,
    delete_prefix: Option<Regex>,
    delete_postfix: Option<Regex>,
    separator: Regex,
    trim_front: Regex,
    trim_back: Regex,
}

impl Rules {
    pub fn new(config: Config) -> Result<Self, PatternError> {
        config.validate()?;

        let delete_prefix = compile_optional(&config.delete_prefixes)?;
        let delete_postfix = compile_optional(&config.delete_postfixes)?;

        let separator = build_or_pattern(config.separators.as_slice())?;
        let trim_front = Regex::new(&format!("^{}+", separator))?;
        let trim_back = Regex::new(&format!("{}+$", separator))?;
        let separator = Regex::new(&separator)?;

        debug!(separator = %separator, "Compiled naming patterns");

        Ok(Self {
            config,
            delete_prefix,
            delete_postfix,
            separator,
            trim_front,
            trim_back,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Remove leading and trailing runs of separators
    pub fn trim(&self, text: &str) -> String {
        let text = self.trim_front.replace(text, "");
        self.trim_back.replace(&text, "").into_owned()
    }

    /// Delete every occurrence of the configured prefix then postfix literals.
    ///
    /// Matches are not anchored: a literal in the middle of the body is
    /// removed too.
    pub fn delete_affixes(&self, text: &str) -> String {
        let mut text = text.to_string();
        for re in [&self.delete_prefix, &self.delete_postfix].into_iter().flatten() {
            text = re.replace_all(&text, "").into_owned();
        }
        text
    }

    /// Split on separators, keeping empty fragments between adjacent ones
    pub fn split_words<'r, 't>(&'r self, text: &'t str) -> regex::Split<'r, 't> {
        self.separator.split(text)
    }

    /// Longest suffix map key the text ends with
    pub fn match_suffix<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.config
            .suffix_map
            .keys()
            .filter(|key| text.ends_with(key.as_str()))
            .max_by_key(|key| key.len())
            .map(String::as_str)
    }

    pub fn translate(&self, suffix: &str) -> Option<&str> {
        self.config.suffix_map.get(suffix).map(String::as_str)
    }
}

fn compile_optional(literals: &[String]) -> Result<Option<Regex>, PatternError> {
    if literals.is_empty() {
        return Ok(None);
    }
    Ok(Some(Regex::new(&build_or_pattern(literals)?)?))
}
