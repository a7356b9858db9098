//! Static display-rate table.
//!
//! Micro Mint does not source real exchange rates. The daemon uses this fixed
//! table to render "approximately X in Y" hints next to balances; nothing in
//! the engines depends on it.

use crate::currency::Currency;

/// (from, to, rate) — one display unit of `from` is worth `rate` units of `to`.
const RATES: &[(&str, &str, f64)] = &[
    ("USD", "EUR", 0.92),
    ("EUR", "USD", 1.09),
    ("MM", "USD", 0.01),
    ("MM", "EUR", 0.009),
];

/// Look up the display conversion rate between two currencies.
///
/// Returns `None` when the pair is not in the table. Identical currencies
/// always convert at 1.0.
pub fn display_rate(from: &Currency, to: &Currency) -> Option<f64> {
    if from == to {
        return Some(1.0);
    }
    RATES
        .iter()
        .find(|(f, t, _)| *f == from.as_str() && *t == to.as_str())
        .map(|(_, _, rate)| *rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_rate_is_one() {
        assert_eq!(display_rate(&Currency::usd(), &Currency::usd()), Some(1.0));
    }

    #[test]
    fn known_pair_has_rate() {
        let rate = display_rate(&Currency::usd(), &Currency::eur()).unwrap();
        assert!(rate > 0.0 && rate < 2.0);
    }

    #[test]
    fn unknown_pair_is_none() {
        let xyz = Currency::new("XYZ");
        assert_eq!(display_rate(&xyz, &Currency::usd()), None);
    }
}
