//! Price type for card display.
//!
//! Prices are stored in cents to avoid floating-point precision issues in
//! monetary values. The storefront sells in a single currency, so the type
//! carries no currency tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A retail price in cents. Non-negative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Get the amount in cents.
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Format for display: `$80` for whole-dollar amounts, `$80.50` otherwise.
    pub fn display(&self) -> String {
        if self.0 % 100 == 0 {
            format!("${}", self.0 / 100)
        } else {
            format!("${}.{:02}", self.0 / 100, self.0 % 100)
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
