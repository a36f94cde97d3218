//! Currencies offered to users of the converter

use serde::{Deserialize, Serialize};

/// Ordered list of currency codes shown in the rate table.
///
/// Only a presentation filter: conversion works for any code in the
/// snapshot, allowed or not.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedCurrencies(Vec<String>);

impl AllowedCurrencies {
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(code: &str) -> Option<String> {
        let code = code.trim();
        if code.is_empty() {
            None
        } else {
            Some(code.to_uppercase())
        }
    }

    /// Appends a code. Blank codes and duplicates are ignored.
    pub fn add(&mut self, code: &str) -> bool {
        match Self::normalize(code) {
            Some(code) if !self.0.contains(&code) => {
                self.0.push(code);
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, code: &str) -> bool {
        let Some(code) = Self::normalize(code) else {
            return false;
        };
        let before = self.0.len();
        self.0.retain(|c| *c != code);
        self.0.len() != before
    }

    /// Moves `code` to `position`, clamped to the end of the list.
    pub fn move_to(&mut self, code: &str, position: usize) -> bool {
        let Some(code) = Self::normalize(code) else {
            return false;
        };
        let Some(index) = self.0.iter().position(|c| *c == code) else {
            return false;
        };
        let item = self.0.remove(index);
        let position = position.min(self.0.len());
        self.0.insert(position, item);
        true
    }

    pub fn contains(&self, code: &str) -> bool {
        Self::normalize(code).is_some_and(|code| self.0.contains(&code))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for AllowedCurrencies {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut allowed = Self::new();
        for code in iter {
            allowed.add(code.as_ref());
        }
        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(allowed: &AllowedCurrencies) -> Vec<&str> {
        allowed.iter().collect()
    }

    #[test]
    fn test_add_normalizes_and_skips_blank_or_duplicate() {
        let mut allowed = AllowedCurrencies::new();

        assert!(allowed.add("usd"));
        assert!(allowed.add(" EUR "));
        assert!(!allowed.add("USD"));
        assert!(!allowed.add("   "));
        assert!(!allowed.add(""));

        assert_eq!(codes(&allowed), vec!["USD", "EUR"]);
        assert!(allowed.contains("eur"));
    }

    #[test]
    fn test_remove() {
        let mut allowed: AllowedCurrencies = ["USD", "EUR", "AUD"].into_iter().collect();

        assert!(allowed.remove("eur"));
        assert!(!allowed.remove("EUR"));
        assert!(!allowed.remove(""));
        assert_eq!(codes(&allowed), vec!["USD", "AUD"]);
    }

    #[test]
    fn test_move_to_reorders_and_clamps() {
        let mut allowed: AllowedCurrencies = ["USD", "EUR", "AUD"].into_iter().collect();

        assert!(allowed.move_to("AUD", 0));
        assert_eq!(codes(&allowed), vec!["AUD", "USD", "EUR"]);

        assert!(allowed.move_to("AUD", 99));
        assert_eq!(codes(&allowed), vec!["USD", "EUR", "AUD"]);

        assert!(!allowed.move_to("GBP", 0));
        assert_eq!(allowed.len(), 3);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let allowed: AllowedCurrencies = ["USD", "EUR"].into_iter().collect();

        let json = serde_json::to_string(&allowed).unwrap();
        assert_eq!(json, r#"["USD","EUR"]"#);

        let parsed: AllowedCurrencies = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, allowed);
    }
}
