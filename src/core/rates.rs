//! Exchange rate snapshots and cross-rate arithmetic

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Every rate known at one point in time, keyed by currency code.
///
/// All rates are expressed against the same implicit base currency chosen by
/// the provider, so any two of them can be divided to get a cross rate. A
/// snapshot is only ever replaced as a whole.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RateSnapshot {
    rates: BTreeMap<String, f64>,
    #[serde(default)]
    fetched_at: Option<DateTime<Utc>>,
}

impl RateSnapshot {
    pub fn new(rates: BTreeMap<String, f64>) -> Self {
        Self {
            rates,
            fetched_at: None,
        }
    }

    pub fn with_fetched_at(mut self, fetched_at: DateTime<Utc>) -> Self {
        self.fetched_at = Some(fetched_at);
        self
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn rates(&self) -> &BTreeMap<String, f64> {
        &self.rates
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Converts `amount` from one currency to another.
    ///
    /// The result is `amount / (rate[from] / rate[to])` at full precision.
    /// Returns `None` when either code is unknown or the cross rate is zero or
    /// not finite.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Option<f64> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        if to_rate == 0.0 {
            return None;
        }

        let cross_rate = from_rate / to_rate;
        if cross_rate == 0.0 || !cross_rate.is_finite() {
            return None;
        }

        Some(amount / cross_rate)
    }
}

impl FromIterator<(String, f64)> for RateSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(pairs: &[(&str, f64)]) -> RateSnapshot {
        pairs
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect()
    }

    #[test]
    fn test_convert_uses_cross_rate_formula() {
        let rates = snapshot(&[("USD", 1.0), ("AUD", 1.5), ("EUR", 0.92)]);

        assert_eq!(rates.convert(150.0, "AUD", "USD"), Some(100.0));
        assert_eq!(rates.convert(100.0, "AUD", "USD"), Some(100.0 / (1.5 / 1.0)));
        assert_eq!(rates.convert(100.0, "USD", "AUD"), Some(100.0 / (1.0 / 1.5)));

        let expected = 42.0 / (0.92 / 1.5);
        let result = rates.convert(42.0, "EUR", "AUD").unwrap();
        assert!((result - expected).abs() < 1e-12);
    }

    #[test]
    fn test_convert_unknown_currency() {
        let rates = snapshot(&[("USD", 1.0), ("AUD", 1.5)]);

        assert!(rates.convert(10.0, "USD", "GBP").is_none());
        assert!(rates.convert(10.0, "GBP", "USD").is_none());
        assert!(rates.convert(10.0, "usd", "AUD").is_none());
        assert!(RateSnapshot::default().convert(10.0, "USD", "USD").is_none());
    }

    #[test]
    fn test_convert_zero_rate() {
        let rates = snapshot(&[("USD", 1.0), ("XXX", 0.0)]);

        assert!(rates.convert(10.0, "USD", "XXX").is_none());
        assert!(rates.convert(10.0, "XXX", "USD").is_none());
    }

    #[test]
    fn test_convert_identity_and_round_trip() {
        let rates = snapshot(&[("USD", 1.0), ("AUD", 1.5), ("JPY", 149.37)]);

        for code in ["USD", "AUD", "JPY"] {
            assert_eq!(rates.convert(123.45, code, code), Some(123.45));
        }

        for (a, b) in [("USD", "AUD"), ("AUD", "JPY"), ("JPY", "USD")] {
            let there = rates.convert(987.65, a, b).unwrap();
            let back = rates.convert(there, b, a).unwrap();
            assert!((back - 987.65).abs() < 1e-9, "{a}->{b}->{a} gave {back}");
        }
    }

    #[test]
    fn test_convert_passes_through_zero_and_negative_amounts() {
        let rates = snapshot(&[("USD", 1.0), ("AUD", 1.5)]);

        assert_eq!(rates.convert(0.0, "AUD", "USD"), Some(0.0));
        assert_eq!(rates.convert(-150.0, "AUD", "USD"), Some(-100.0));
    }

    #[test]
    fn test_snapshot_serialization() {
        let fetched_at = DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let rates = snapshot(&[("USD", 1.0), ("AUD", 1.5)]).with_fetched_at(fetched_at);

        let json = serde_json::to_string(&rates).unwrap();
        let parsed: RateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rates);

        // Snapshots written without a timestamp still load
        let legacy: RateSnapshot = serde_json::from_str(r#"{"rates": {"USD": 1.0}}"#).unwrap();
        assert_eq!(legacy.rate("USD"), Some(1.0));
        assert!(legacy.fetched_at().is_none());
    }
}
