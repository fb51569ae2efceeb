//! Custom serde helpers for upstream wire formats.

/// Deserializes an optional `f64` sent either as a JSON number or as a
/// string (`"67012.5"`, `"$67,012.50"`).
///
/// Unparseable strings and `null` become `None`.
pub mod number_or_string {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Raw::Num(n)) => Some(n),
            Some(Raw::Text(s)) => {
                let cleaned: String = s
                    .chars()
                    .filter(|c| !matches!(c, '$' | ',' | ' '))
                    .collect();
                cleaned.parse::<f64>().ok()
            }
            None => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, with = "super::number_or_string")]
        price: Option<f64>,
    }

    fn price(json: &str) -> Option<f64> {
        serde_json::from_str::<Holder>(json).unwrap().price
    }

    #[test]
    fn test_number() {
        assert_eq!(price(r#"{"price": 1.25}"#), Some(1.25));
        assert_eq!(price(r#"{"price": 3}"#), Some(3.0));
    }

    #[test]
    fn test_string_with_symbol_and_separators() {
        assert_eq!(price(r#"{"price": "$67,012.50"}"#), Some(67012.5));
        assert_eq!(price(r#"{"price": "0.0001"}"#), Some(0.0001));
    }

    #[test]
    fn test_null_missing_and_garbage() {
        assert_eq!(price(r#"{"price": null}"#), None);
        assert_eq!(price("{}"), None);
        assert_eq!(price(r#"{"price": "n/a"}"#), None);
    }
}
