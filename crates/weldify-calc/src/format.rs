//! Display formatting for calculator output.

use crate::units::Money;

/// Placeholder shown for figures that could not be computed.
pub const NOT_APPLICABLE: &str = "N/A";

/// Default currency prefix.
pub const DEFAULT_CURRENCY: &str = "€";

/// Money formatting settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostFormat {
    /// Prefix written before every amount.
    pub currency: String,
}

impl CostFormat {
    /// Create a format with the given currency prefix.
    #[must_use]
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// Format an amount with two decimals.
    #[must_use]
    pub fn money(&self, amount: Money) -> String {
        format!("{}{:.2}", self.currency, amount.value())
    }
}

impl Default for CostFormat {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_money_two_decimals() {
        let format = CostFormat::default();
        assert_eq!(format.money(Money(2.308_823)), "€2.31");
        assert_eq!(format.money(Money(15.0)), "€15.00");
    }
}
