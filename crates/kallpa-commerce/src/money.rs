//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues. Catalog prices arrive as decimals and are rounded
//! to the smallest currency unit once, at load time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies a catalog can be priced in. The storefront sells in USD; PEN
/// and EUR exist for configured deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    PEN,
    EUR,
}

impl Currency {
    const ALL: [Currency; 3] = [Currency::USD, Currency::PEN, Currency::EUR];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::PEN => "PEN",
            Currency::EUR => "EUR",
        }
    }

    /// Prefix used in price labels.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::PEN => "S/",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Minor units per major unit, as a power of ten. Always 2 for the
    /// supported set.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Case-insensitive lookup by ISO code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount in minor units (cents) tagged with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Convert a major-unit amount, rounding to the nearest cent.
    ///
    /// ```
    /// use kallpa_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(485.0, Currency::USD);
    /// assert_eq!(price.amount_cents, 48500);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Price label such as `$485.00`.
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }

    /// `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Scale by a quantity; `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// `percent`% of this amount, rounded half away from zero to the cent.
    pub fn percentage(&self, percent: f64) -> Money {
        let cents = (self.amount_cents as f64 * percent / 100.0).round() as i64;
        Money::new(cents, self.currency)
    }

    /// Checked sum; `None` if any value is in another currency or the sum
    /// overflows.
    pub fn try_sum(values: impl IntoIterator<Item = Money>, currency: Currency) -> Option<Money> {
        values
            .into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.try_add(&m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
