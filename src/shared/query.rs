//! Query-string parameters for gateway requests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A primitive query-string value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl QueryValue {
    /// Whether this value is dropped before serialization.
    pub fn is_skipped(&self) -> bool {
        match self {
            QueryValue::Null => true,
            QueryValue::Str(s) => s.is_empty(),
            _ => false,
        }
    }

    fn render(&self) -> String {
        match self {
            QueryValue::Null => String::new(),
            QueryValue::Bool(b) => b.to_string(),
            QueryValue::Int(i) => i.to_string(),
            QueryValue::Float(f) => f.to_string(),
            QueryValue::Str(s) => s.clone(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

impl From<bool> for QueryValue {
    fn from(b: bool) -> Self {
        QueryValue::Bool(b)
    }
}

impl From<i64> for QueryValue {
    fn from(i: i64) -> Self {
        QueryValue::Int(i)
    }
}

impl From<u32> for QueryValue {
    fn from(i: u32) -> Self {
        QueryValue::Int(i as i64)
    }
}

impl From<f64> for QueryValue {
    fn from(f: f64) -> Self {
        QueryValue::Float(f)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(QueryValue::Null)
    }
}

/// Query parameters, kept in key order so the serialized string is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryParams(BTreeMap<String, QueryValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<QueryValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize to `a=1&b=x`, dropping empty strings and nulls.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        let pairs: Vec<(&str, String)> = self
            .0
            .iter()
            .filter(|(_, v)| !v.is_skipped())
            .map(|(k, v)| (k.as_str(), v.render()))
            .collect();
        serde_urlencoded::to_string(pairs)
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_and_null_dropped() {
        let params = QueryParams::new()
            .with("query", "btc")
            .with("network", "")
            .with("page", None::<u32>);
        assert_eq!(params.to_query_string().unwrap(), "query=btc");
    }

    #[test]
    fn test_keys_serialized_in_order() {
        let params = QueryParams::new()
            .with("vs_currency", "usd")
            .with("days", 1u32)
            .with("precision", "full");
        assert_eq!(
            params.to_query_string().unwrap(),
            "days=1&precision=full&vs_currency=usd"
        );
    }

    #[test]
    fn test_primitives_render_like_literals() {
        let params = QueryParams::new()
            .with("a", true)
            .with("b", 2.5)
            .with("c", 3.0)
            .with("d", -4i64);
        assert_eq!(params.to_query_string().unwrap(), "a=true&b=2.5&c=3&d=-4");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let params = QueryParams::new().with("query", "wrapped eth&co");
        assert_eq!(
            params.to_query_string().unwrap(),
            "query=wrapped+eth%26co"
        );
    }

    #[test]
    fn test_from_iterator() {
        let params: QueryParams = vec![("ids", "bitcoin"), ("vs_currencies", "usd")]
            .into_iter()
            .collect();
        assert_eq!(
            params.get("ids"),
            Some(&QueryValue::Str("bitcoin".to_string()))
        );
    }

    #[test]
    fn test_all_skipped_yields_empty_string() {
        let params = QueryParams::new().with("x", "").with("y", None::<&str>);
        assert_eq!(params.to_query_string().unwrap(), "");
    }
}
