mod rules;

pub use rules::Rules;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Cannot build a pattern from an empty list")]
    EmptyList,

    #[error("Invalid pattern: {0}")]
    Invalid(#[from] regex::Error),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

/// Build a non-capturing alternation matching any of the literals verbatim.
///
/// Alternatives are tried left to right, so when one literal is a prefix of a
/// later one the earlier literal wins.
pub fn build_or_pattern<S: AsRef<str>>(literals: &[S]) -> Result<String, PatternError> {
    if literals.is_empty() {
        return Err(PatternError::EmptyList);
    }

    let alternatives: Vec<String> = literals
        .iter()
        .map(|literal| regex::escape(literal.as_ref()))
        .collect();

    Ok(format!("(?:{})", alternatives.join("|")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn full_match(pattern: &str) -> Regex {
        Regex::new(&format!("^{}$", pattern)).unwrap()
    }

    #[test]
    fn test_single_literal() {
        assert_eq!(build_or_pattern(&["_"]).unwrap(), "(?:_)");
    }

    #[test]
    fn test_multiple_literals() {
        assert_eq!(build_or_pattern(&[" ", "_"]).unwrap(), "(?: |_)");
    }

    #[test]
    fn test_metacharacters_escaped() {
        let pattern = build_or_pattern(&[".", "(x)", "a+b"]).unwrap();
        let re = full_match(&pattern);

        assert!(re.is_match("."));
        assert!(re.is_match("(x)"));
        assert!(re.is_match("a+b"));
        assert!(!re.is_match("a"));
        assert!(!re.is_match("x"));
        assert!(!re.is_match("aab"));
    }

    #[test]
    fn test_matches_only_listed_literals() {
        let pattern = build_or_pattern(&["cgaxis_pbr_14", "poliigon"]).unwrap();
        let re = full_match(&pattern);

        assert!(re.is_match("cgaxis_pbr_14"));
        assert!(re.is_match("poliigon"));
        assert!(!re.is_match("cgaxis"));
        assert!(!re.is_match("cgaxis_pbr_14poliigon"));
    }

    #[test]
    fn test_left_to_right_precedence() {
        let pattern = build_or_pattern(&["ab", "abc"]).unwrap();
        let re = Regex::new(&pattern).unwrap();
        assert_eq!(re.find("abc").unwrap().as_str(), "ab");

        let pattern = build_or_pattern(&["abc", "ab"]).unwrap();
        let re = Regex::new(&pattern).unwrap();
        assert_eq!(re.find("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_empty_list() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            build_or_pattern(&empty),
            Err(PatternError::EmptyList)
        ));
    }
}
