//! Ordered store of textual settings.
//!
//! Every setting is a string. Numeric interpretation happens on demand via
//! [`ValueStore::parse_values`], which always checks the expected arity.

use std::str::FromStr;

use indexmap::IndexMap;

use super::errors::NodeError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueStore {
    values: IndexMap<String, String>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new setting with its default value.
    ///
    /// Fails without touching the store if the name is already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        default: impl Into<String>,
    ) -> Result<(), NodeError> {
        let name = name.into();
        if self.values.contains_key(&name) {
            return Err(NodeError::ValueAlreadyRegistered { name });
        }
        self.values.insert(name, default.into());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&str, NodeError> {
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| NodeError::UnknownValue {
                name: name.to_string(),
            })
    }

    /// Overwrite the value of a registered setting.
    pub fn assign(&mut self, name: &str, value: impl Into<String>) -> Result<(), NodeError> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(NodeError::UnknownValue {
                name: name.to_string(),
            }),
        }
    }

    pub fn is_valid(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Exact string comparison. Unregistered names never match.
    pub fn is_value(&self, name: &str, expected: &str) -> bool {
        self.values.get(name).is_some_and(|v| v == expected)
    }

    pub fn is_null(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|v| v.is_empty())
    }

    /// Split a value on whitespace and commas and parse exactly `n` tokens.
    pub fn parse_values<T: FromStr>(&self, name: &str, n: usize) -> Result<Vec<T>, NodeError> {
        let raw = self.get(name)?;
        let tokens: Vec<&str> = raw
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        if tokens.len() != n {
            return Err(NodeError::ArityMismatch {
                name: name.to_string(),
                expected: n,
                found: tokens.len(),
            });
        }

        tokens
            .into_iter()
            .map(|token| {
                let not_numeric = || NodeError::NotNumeric {
                    name: name.to_string(),
                    token: token.to_string(),
                };
                if !is_numeric_literal(token) {
                    return Err(not_numeric());
                }
                token.parse::<T>().map_err(|_| not_numeric())
            })
            .collect()
    }

    pub fn parse_f64(&self, name: &str, n: usize) -> Result<Vec<f64>, NodeError> {
        self.parse_values(name, n)
    }

    pub fn parse_i64(&self, name: &str, n: usize) -> Result<Vec<i64>, NodeError> {
        self.parse_values(name, n)
    }

    /// Registered settings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Decimal literal characters only, with at least one digit.
///
/// `FromStr` for floats also accepts `nan`, `inf` and `infinity`, which
/// are words, not numbers.
fn is_numeric_literal(token: &str) -> bool {
    token.bytes().any(|b| b.is_ascii_digit())
        && token
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut store = ValueStore::new();
        store.register("x", "1").unwrap();
        assert_eq!(store.get("x").unwrap(), "1");
        assert!(store.is_valid("x"));
        assert!(!store.is_valid("y"));
    }

    #[test]
    fn test_double_registration_keeps_first_value() {
        let mut store = ValueStore::new();
        store.register("x", "1").unwrap();
        let err = store.register("x", "2").unwrap_err();
        assert!(matches!(err, NodeError::ValueAlreadyRegistered { name } if name == "x"));
        assert_eq!(store.get("x").unwrap(), "1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unregistered_name_fails() {
        let mut store = ValueStore::new();
        assert!(matches!(
            store.get("missing"),
            Err(NodeError::UnknownValue { .. })
        ));
        assert!(store.assign("missing", "1").is_err());
        assert!(!store.is_valid("missing"));
    }

    #[test]
    fn test_assign_then_get() {
        let mut store = ValueStore::new();
        store.register("x", "1").unwrap();
        store.assign("x", "42").unwrap();
        assert_eq!(store.get("x").unwrap(), "42");
    }

    #[test]
    fn test_is_value_and_is_null() {
        let mut store = ValueStore::new();
        store.register("mode", "fast").unwrap();
        store.register("empty", "").unwrap();

        assert!(store.is_value("mode", "fast"));
        assert!(!store.is_value("mode", "Fast"));
        assert!(!store.is_value("missing", "fast"));
        assert!(store.is_null("empty"));
        assert!(!store.is_null("mode"));
        assert!(!store.is_null("missing"));
    }

    #[test]
    fn test_parse_f64_with_commas() {
        let mut store = ValueStore::new();
        store.register("xyz", "1,2,3").unwrap();
        assert_eq!(store.parse_f64("xyz", 3).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_mixed_separators() {
        let mut store = ValueStore::new();
        store.register("xyz", "0.5, -1.\t2e3").unwrap();
        assert_eq!(store.parse_f64("xyz", 3).unwrap(), vec![0.5, -1.0, 2000.0]);
    }

    #[test]
    fn test_parse_wrong_arity() {
        let mut store = ValueStore::new();
        store.register("xyz", "1,2").unwrap();
        let err = store.parse_f64("xyz", 3).unwrap_err();
        assert!(matches!(
            err,
            NodeError::ArityMismatch {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_non_numeric() {
        let mut store = ValueStore::new();
        store.register("n", "ten").unwrap();
        let err = store.parse_i64("n", 1).unwrap_err();
        assert!(matches!(err, NodeError::NotNumeric { token, .. } if token == "ten"));
    }

    #[test]
    fn test_parse_f64_rejects_nan_and_infinity() {
        let mut store = ValueStore::new();
        store.register("v", "nan 1 2").unwrap();
        let err = store.parse_f64("v", 3).unwrap_err();
        assert!(matches!(err, NodeError::NotNumeric { token, .. } if token == "nan"));

        for word in ["inf", "-infinity", "NaN", "+Inf"] {
            store.assign("v", word).unwrap();
            assert!(
                matches!(store.parse_f64("v", 1), Err(NodeError::NotNumeric { .. })),
                "{word} must not parse as a number"
            );
        }
    }

    #[test]
    fn test_parse_f64_accepts_signed_exponents() {
        let mut store = ValueStore::new();
        store.register("v", "+1.5e-3 -2E+2 .5").unwrap();
        assert_eq!(store.parse_f64("v", 3).unwrap(), vec![0.0015, -200.0, 0.5]);
    }

    #[test]
    fn test_parse_i64_rejects_float() {
        let mut store = ValueStore::new();
        store.register("n", "1.5").unwrap();
        assert!(store.parse_i64("n", 1).is_err());
        assert_eq!(store.parse_f64("n", 1).unwrap(), vec![1.5]);
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let mut store = ValueStore::new();
        store.register("zeta", "1").unwrap();
        store.register("alpha", "2").unwrap();
        store.register("mid", "3").unwrap();
        let names: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }
}
