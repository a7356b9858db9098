//! Currency codes.
//!
//! A currency is an enum-like string code ("USD", "EUR", ...). The platform
//! currency "MM" denominates verification rewards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a currency code.
pub const MAX_CODE_LEN: usize = 8;

/// A currency code. Used as a key into per-wallet balance maps.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    /// The platform currency that denominates verification rewards.
    pub const PLATFORM_CODE: &'static str = "MM";

    /// Create a currency from a raw code without validation.
    ///
    /// Callers that accept external input should check [`Currency::is_well_formed`].
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn usd() -> Self {
        Self("USD".to_string())
    }

    pub fn eur() -> Self {
        Self("EUR".to_string())
    }

    /// The platform currency ("MM").
    pub fn mm() -> Self {
        Self(Self::PLATFORM_CODE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the platform currency.
    pub fn is_platform(&self) -> bool {
        self.0 == Self::PLATFORM_CODE
    }

    /// Well-formed codes are 1..=8 uppercase ASCII alphanumeric characters.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && self.0.len() <= MAX_CODE_LEN
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
