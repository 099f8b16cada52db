//! Explicit configuration map forwarded to operators on every call.
//!
//! The original system passes options to operators as dynamic keyword
//! arguments; Rust has no equivalent, so the engine forwards an explicit
//! typed map instead. Operators must tolerate unknown keys — `Params`
//! has no "strict" mode, lookups simply return `None` for missing or
//! mismatched-type keys.

use std::collections::HashMap;

/// A single configuration value recognized by user operators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamValue {
    /// An integer option, e.g. `n_remove`.
    Integer(i64),
    /// A real-valued option.
    Real(f64),
    /// A free-form text option.
    Text(String),
    /// A boolean flag.
    Flag(bool),
}

/// Named configuration options forwarded verbatim to every operator call.
///
/// The engine never interprets these; it is purely a pass-through
/// mechanism so destroy/repair operators (and the caller's own glue
/// code) can share one bag of knobs for a given `iterate` call.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Params(HashMap<String, ParamValue>);

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key to an integer value, builder-style.
    pub fn with_integer(mut self, key: impl Into<String>, value: i64) -> Self {
        self.0.insert(key.into(), ParamValue::Integer(value));
        self
    }

    /// Sets a key to a real value, builder-style.
    pub fn with_real(mut self, key: impl Into<String>, value: f64) -> Self {
        self.0.insert(key.into(), ParamValue::Real(value));
        self
    }

    /// Sets a key to a text value, builder-style.
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), ParamValue::Text(value.into()));
        self
    }

    /// Sets a key to a boolean flag, builder-style.
    pub fn with_flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.0.insert(key.into(), ParamValue::Flag(value));
        self
    }

    /// Looks up an integer value. Returns `None` if the key is absent or
    /// holds a different variant.
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        match self.0.get(key) {
            Some(ParamValue::Integer(v)) => Some(*v),
            _ => None,
        }
    }

    /// Looks up a real value. Returns `None` if the key is absent or
    /// holds a different variant.
    pub fn get_real(&self, key: &str) -> Option<f64> {
        match self.0.get(key) {
            Some(ParamValue::Real(v)) => Some(*v),
            _ => None,
        }
    }

    /// Looks up a text value. Returns `None` if the key is absent or
    /// holds a different variant.
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(ParamValue::Text(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Looks up a boolean flag. Returns `None` if the key is absent or
    /// holds a different variant.
    pub fn get_flag(&self, key: &str) -> Option<bool> {
        match self.0.get(key) {
            Some(ParamValue::Flag(v)) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_each_variant() {
        let params = Params::new()
            .with_integer("n_remove", 5)
            .with_real("temperature", 12.5)
            .with_text("mode", "greedy")
            .with_flag("verbose", true);

        assert_eq!(params.get_integer("n_remove"), Some(5));
        assert_eq!(params.get_real("temperature"), Some(12.5));
        assert_eq!(params.get_text("mode"), Some("greedy"));
        assert_eq!(params.get_flag("verbose"), Some(true));
    }

    #[test]
    fn unknown_keys_are_none_not_panics() {
        let params = Params::new();
        assert_eq!(params.get_integer("missing"), None);
    }

    #[test]
    fn type_mismatch_returns_none() {
        let params = Params::new().with_integer("n", 1);
        assert_eq!(params.get_real("n"), None);
    }
}
