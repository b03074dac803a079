//! Entry-by-entry decoding of collection payloads
//!
//! A collection endpoint returns a JSON array whose entries are decoded
//! independently: a malformed entry is set aside with the reason it was
//! rejected instead of failing the whole payload.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// A record that can be validated after deserialization.
pub trait Record: DeserializeOwned {
    /// Rejects records that deserialized but are unusable for display.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// The outcome of decoding a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    /// Entries that decoded and passed validation, in payload order.
    pub items: Vec<T>,
    /// One message per rejected entry.
    pub rejected: Vec<String>,
}

impl<T> Default for Decoded<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

impl<T> Decoded<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            rejected: Vec::new(),
        }
    }
}

/// Decodes each entry of `entries`, keeping the valid ones.
pub fn decode_entries<T: Record>(entries: Vec<Value>) -> Decoded<T> {
    let mut decoded = Decoded::default();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<T>(entry) {
            Ok(record) => match record.check() {
                Ok(()) => decoded.items.push(record),
                Err(reason) => decoded.rejected.push(format!("entry {}: {}", index, reason)),
            },
            Err(e) => decoded.rejected.push(format!("entry {}: {}", index, e)),
        }
    }
    decoded
}

/// Accepts a string, a number, or null, yielding the textual form.
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected text or number, found {}",
                other
            )));
        }
    })
}

/// Accepts a number, a numeric string, or null.
pub(crate) fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(Value::String(s)) => Some(s.trim().parse::<f64>().map_err(|_| {
            <D::Error as serde::de::Error>::custom(format!("expected a number, found {:?}", s))
        })?),
        Some(other) => {
            return Err(serde::de::Error::custom(format!(
                "expected a number, found {}",
                other
            )));
        }
    })
}

/// Treats a JSON null as zero for counters.
pub(crate) fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        x: i32,
    }

    impl Record for Point {
        fn check(&self) -> Result<(), String> {
            if self.x < 0 {
                return Err("negative x".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_keeps_valid_entries_in_order() {
        let decoded: Decoded<Point> = decode_entries(vec![
            json!({"x": 3}),
            json!({"y": 1}),
            json!({"x": -1}),
            json!({"x": 1}),
        ]);
        assert_eq!(decoded.items, vec![Point { x: 3 }, Point { x: 1 }]);
        assert_eq!(decoded.rejected.len(), 2);
        assert!(decoded.rejected[0].starts_with("entry 1:"));
        assert_eq!(decoded.rejected[1], "entry 2: negative x");
    }

    #[test]
    fn test_empty_payload() {
        let decoded: Decoded<Point> = decode_entries(Vec::new());
        assert!(decoded.items.is_empty());
        assert!(decoded.rejected.is_empty());
    }
}
