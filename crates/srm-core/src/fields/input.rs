//! Raw external inputs, as supplied by a form, profile file, or command line

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One raw input value before parsing.
///
/// Deserializes from plain JSON without tags: `true`, `12`, `"powder"`, or
/// `{"hps_without": 10, "checked": true}` for the sanctuary heart. Any other
/// JSON value lands in `Other` so the field it belongs to can reject it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Flag(bool),
    Number(i64),
    Text(String),
    Heart {
        hps_without: Box<RawValue>,
        checked: bool,
    },
    Other(serde_json::Value),
}

impl RawValue {
    /// Sanctuary heart input: base heart count without the heart, plus the checkbox
    pub fn heart(hps_without: impl Into<RawValue>, checked: bool) -> Self {
        RawValue::Heart {
            hps_without: Box::new(hps_without.into()),
            checked,
        }
    }
}

impl From<bool> for RawValue {
    fn from(v: bool) -> Self {
        RawValue::Flag(v)
    }
}

impl From<i64> for RawValue {
    fn from(v: i64) -> Self {
        RawValue::Number(v)
    }
}

impl From<i32> for RawValue {
    fn from(v: i32) -> Self {
        RawValue::Number(i64::from(v))
    }
}

impl From<u8> for RawValue {
    fn from(v: u8) -> Self {
        RawValue::Number(i64::from(v))
    }
}

impl From<&str> for RawValue {
    fn from(v: &str) -> Self {
        RawValue::Text(v.to_string())
    }
}

impl From<String> for RawValue {
    fn from(v: String) -> Self {
        RawValue::Text(v)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Flag(b) => write!(f, "{b}"),
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Text(s) => write!(f, "{s:?}"),
            RawValue::Heart {
                hps_without,
                checked,
            } => write!(f, "{hps_without} (+heart: {checked})"),
            RawValue::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Field name to raw value, as handed over by the input layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldInputs(BTreeMap<String, RawValue>);

impl FieldInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl fmt::Display, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl fmt::Display, value: impl Into<RawValue>) {
        self.0.insert(name.to_string(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<RawValue> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.0.get(name)
    }

    /// Layer `other` on top; its values win on conflict
    pub fn merge(&mut self, other: FieldInputs) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: fmt::Display, V: Into<RawValue>> FromIterator<(K, V)> for FieldInputs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut inputs = FieldInputs::new();
        for (k, v) in iter {
            inputs.insert(k, v);
        }
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_untagged() {
        let json = r#"{
            "arrows": "30",
            "bombs": 5,
            "bug_net": true,
            "mushroom": "powder",
            "sanc_heart": {"hps_without": "10", "checked": true}
        }"#;
        let inputs: FieldInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.get("arrows"), Some(&RawValue::Text("30".into())));
        assert_eq!(inputs.get("bombs"), Some(&RawValue::Number(5)));
        assert_eq!(inputs.get("bug_net"), Some(&RawValue::Flag(true)));
        assert_eq!(inputs.get("sanc_heart"), Some(&RawValue::heart("10", true)));
    }

    #[test]
    fn test_mistyped_values_still_load() {
        let json = r#"{
            "arrows": 10.5,
            "bombs": null,
            "sanc_heart": {"hps_without": 10, "checked": "true"}
        }"#;
        let inputs: FieldInputs = serde_json::from_str(json).unwrap();
        assert_eq!(
            inputs.get("arrows"),
            Some(&RawValue::Other(serde_json::json!(10.5)))
        );
        assert_eq!(inputs.get("bombs"), Some(&RawValue::Other(serde_json::Value::Null)));
        assert!(matches!(inputs.get("sanc_heart"), Some(RawValue::Other(_))));
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = FieldInputs::new().with("arrows", 10).with("bombs", 2);
        base.merge(FieldInputs::new().with("arrows", 20));
        assert_eq!(base.get("arrows"), Some(&RawValue::Number(20)));
        assert_eq!(base.get("bombs"), Some(&RawValue::Number(2)));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_round_trip_json() {
        let inputs = FieldInputs::new()
            .with("rupees", 100)
            .with("sanc_heart", RawValue::heart(6, false));
        let json = serde_json::to_string(&inputs).unwrap();
        let back: FieldInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inputs);
    }
}
