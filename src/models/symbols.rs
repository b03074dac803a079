use super::decode::Decoded;
use serde::Deserialize;
use serde_json::Value;

/// Envelope of `GET /api/symbols`.
#[derive(Debug, Deserialize)]
pub(crate) struct SymbolsResponse {
    #[serde(default)]
    pub symbols: Vec<Value>,
}

impl SymbolsResponse {
    /// Keeps non-empty string entries, trimmed and in order, dropping
    /// duplicates after their first occurrence.
    pub fn into_symbols(self) -> Decoded<String> {
        let mut decoded = Decoded::default();
        for (index, entry) in self.symbols.into_iter().enumerate() {
            match entry {
                Value::String(s) if !s.trim().is_empty() => {
                    let symbol = s.trim().to_string();
                    if decoded.items.contains(&symbol) {
                        decoded
                            .rejected
                            .push(format!("entry {}: duplicate symbol {}", index, symbol));
                    } else {
                        decoded.items.push(symbol);
                    }
                }
                other => decoded
                    .rejected
                    .push(format!("entry {}: not a symbol: {}", index, other)),
            }
        }
        decoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keeps_order_and_drops_invalid_entries() {
        let response: SymbolsResponse = serde_json::from_value(json!({
            "symbols": ["EURUSD", " GBPUSD ", "", 42, "EURUSD", "USDJPY"]
        }))
        .unwrap();
        let decoded = response.into_symbols();
        assert_eq!(decoded.items, vec!["EURUSD", "GBPUSD", "USDJPY"]);
        assert_eq!(decoded.rejected.len(), 3);
    }

    #[test]
    fn test_missing_key_is_empty_list() {
        let response: SymbolsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.into_symbols().items.is_empty());
    }
}
