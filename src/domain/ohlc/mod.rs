//! OHLC domain: candle tuples from the API and chart-ready candles.

use crate::shared::query::QueryParams;
use serde::{Deserialize, Serialize};

/// `(time, open, high, low, close)` as sent by the API. Time is in seconds.
pub type OhlcData = (i64, f64, f64, f64, f64);

/// A chart-ready candle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl From<OhlcData> for Candle {
    fn from((time, open, high, low, close): OhlcData) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
    }
}

/// Convert OHLC tuples to candles, dropping consecutive entries that repeat
/// the previous candle's time. The first entry is always kept.
pub fn convert_ohlc_data(data: &[OhlcData]) -> Vec<Candle> {
    let mut candles: Vec<Candle> = Vec::with_capacity(data.len());
    for &tuple in data {
        if let Some(last) = candles.last() {
            if last.time == tuple.0 {
                continue;
            }
        }
        candles.push(tuple.into());
    }
    candles
}

/// How far back an OHLC query reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OhlcRange {
    Days(u32),
    Max,
}

impl OhlcRange {
    pub fn as_param(&self) -> String {
        match self {
            OhlcRange::Days(d) => d.to_string(),
            OhlcRange::Max => "max".to_string(),
        }
    }
}

impl Default for OhlcRange {
    fn default() -> Self {
        OhlcRange::Days(1)
    }
}

/// Parameters for a coin OHLC request.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcQuery {
    pub vs_currency: String,
    pub range: OhlcRange,
    /// Decimal places in the response, or `"full"`.
    pub precision: Option<String>,
}

impl Default for OhlcQuery {
    fn default() -> Self {
        Self {
            vs_currency: "usd".to_string(),
            range: OhlcRange::default(),
            precision: Some("full".to_string()),
        }
    }
}

impl OhlcQuery {
    pub fn vs_currency(mut self, currency: &str) -> Self {
        self.vs_currency = currency.to_lowercase();
        self
    }

    pub fn range(mut self, range: OhlcRange) -> Self {
        self.range = range;
        self
    }

    pub fn precision(mut self, precision: Option<&str>) -> Self {
        self.precision = precision.map(str::to_string);
        self
    }

    pub fn to_params(&self) -> QueryParams {
        QueryParams::new()
            .with("vs_currency", self.vs_currency.as_str())
            .with("days", self.range.as_param())
            .with("precision", self.precision.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_time_dropped() {
        let data = [
            (1, 1.0, 2.0, 0.0, 1.0),
            (1, 3.0, 4.0, 1.0, 2.0),
            (2, 2.0, 3.0, 1.0, 2.0),
        ];
        let candles = convert_ohlc_data(&data);
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].open, 1.0);
        assert_eq!(candles[1].time, 2);
    }

    #[test]
    fn test_runs_of_duplicates_keep_first() {
        let data = [
            (10, 1.0, 1.0, 1.0, 1.0),
            (10, 2.0, 2.0, 2.0, 2.0),
            (10, 3.0, 3.0, 3.0, 3.0),
            (20, 4.0, 4.0, 4.0, 4.0),
            (10, 5.0, 5.0, 5.0, 5.0),
        ];
        let times: Vec<i64> = convert_ohlc_data(&data).iter().map(|c| c.time).collect();
        assert_eq!(times, vec![10, 20, 10]);
    }

    #[test]
    fn test_empty_input() {
        assert!(convert_ohlc_data(&[]).is_empty());
    }

    #[test]
    fn test_fields_mapped_in_order() {
        let candles = convert_ohlc_data(&[(1_700_000_000, 1.5, 2.5, 0.5, 2.0)]);
        assert_eq!(
            candles[0],
            Candle {
                time: 1_700_000_000,
                open: 1.5,
                high: 2.5,
                low: 0.5,
                close: 2.0,
            }
        );
    }

    #[test]
    fn test_tuples_deserialize_from_json_arrays() {
        let data: Vec<OhlcData> =
            serde_json::from_str("[[1700000000, 1.0, 2.0, 0.5, 1.5]]").unwrap();
        assert_eq!(data[0].0, 1_700_000_000);
        assert_eq!(data[0].4, 1.5);
    }

    #[test]
    fn test_query_params() {
        let query = OhlcQuery::default()
            .vs_currency("EUR")
            .range(OhlcRange::Days(7))
            .precision(None);
        assert_eq!(
            query.to_params().to_query_string().unwrap(),
            "days=7&vs_currency=eur"
        );
        assert_eq!(OhlcRange::Max.as_param(), "max");
    }
}
