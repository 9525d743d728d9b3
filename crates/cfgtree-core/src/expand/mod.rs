//! Expansion of environment references in file paths.
//!
//! `include()` targets and path-like settings may contain `$VAR`, `${VAR}`
//! and a leading `~`. The router only needs "expand this string to a path,
//! fail if unresolvable", so hosts can swap the [`PathExpander`].

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::errors::CfgTreeError;

static VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("Invalid variable pattern")
});

#[derive(Debug, thiserror::Error)]
pub enum ExpandError {
    #[error("Environment variable '{name}' is not set")]
    UndefinedVariable { name: String },

    #[error("Could not determine home directory")]
    NoHomeDirectory,
}

impl CfgTreeError for ExpandError {
    fn error_code(&self) -> &'static str {
        match self {
            ExpandError::UndefinedVariable { .. } => "EXPAND_UNDEFINED_VARIABLE",
            ExpandError::NoHomeDirectory => "EXPAND_NO_HOME",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ExpandError::UndefinedVariable { .. })
    }
}

pub trait PathExpander {
    fn expand(&self, raw: &str) -> Result<PathBuf, ExpandError>;
}

/// Expands against the process environment and the user's home directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvExpander;

impl PathExpander for EnvExpander {
    fn expand(&self, raw: &str) -> Result<PathBuf, ExpandError> {
        expand_with(raw, |name| std::env::var(name).ok(), dirs::home_dir)
    }
}

/// Expand `raw` using the given variable lookup and home directory source.
pub fn expand_with<V, H>(raw: &str, lookup: V, home: H) -> Result<PathBuf, ExpandError>
where
    V: Fn(&str) -> Option<String>,
    H: FnOnce() -> Option<PathBuf>,
{
    let mut missing = None;
    let substituted = VAR_PATTERN.replace_all(raw, |caps: &Captures| {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        match lookup(name) {
            Some(value) => value,
            None => {
                missing.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });

    if let Some(name) = missing {
        return Err(ExpandError::UndefinedVariable { name });
    }

    if substituted == "~" || substituted.starts_with("~/") {
        let home = home().ok_or(ExpandError::NoHomeDirectory)?;
        let rest = substituted.trim_start_matches('~').trim_start_matches('/');
        return Ok(if rest.is_empty() { home } else { home.join(rest) });
    }

    Ok(PathBuf::from(substituted.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(name: &str) -> Option<String> {
        match name {
            "CFGTREE_ROOT" => Some("/opt/cfgtree".to_string()),
            "TUNE" => Some("monash".to_string()),
            _ => None,
        }
    }

    fn home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/user"))
    }

    #[test]
    fn test_plain_path_is_untouched() {
        let path = expand_with("recipes/run.cfg", vars, home).unwrap();
        assert_eq!(path, PathBuf::from("recipes/run.cfg"));
    }

    #[test]
    fn test_dollar_and_braced_variables() {
        let path = expand_with("$CFGTREE_ROOT/recipes/${TUNE}.cfg", vars, home).unwrap();
        assert_eq!(path, PathBuf::from("/opt/cfgtree/recipes/monash.cfg"));
    }

    #[test]
    fn test_undefined_variable_fails() {
        let err = expand_with("$NOPE/run.cfg", vars, home).unwrap_err();
        assert!(matches!(err, ExpandError::UndefinedVariable { name } if name == "NOPE"));
    }

    #[test]
    fn test_home_expansion() {
        assert_eq!(
            expand_with("~/cfg/run.cfg", vars, home).unwrap(),
            PathBuf::from("/home/user/cfg/run.cfg")
        );
        assert_eq!(expand_with("~", vars, home).unwrap(), PathBuf::from("/home/user"));
        assert!(matches!(
            expand_with("~/x", vars, || None),
            Err(ExpandError::NoHomeDirectory)
        ));
    }

    #[test]
    fn test_tilde_inside_path_is_literal() {
        let path = expand_with("backup~/run.cfg", vars, home).unwrap();
        assert_eq!(path, PathBuf::from("backup~/run.cfg"));
    }
}
