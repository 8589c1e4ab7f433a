//! Money amounts and rupee formatting.
//!
//! Amounts are held in paise so that catalog prices (whole rupees) survive
//! the 1.4 markup without floating point drift.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const PAISE_PER_RUPEE: i64 = 100;
const BASIS_POINTS: i128 = 10_000;

/// Amount of money in minor units (paise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * PAISE_PER_RUPEE)
    }

    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    pub const fn paise(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whole rupees, rounding half away from zero.
    pub fn rupees_rounded(self) -> i64 {
        let whole = self.0 / PAISE_PER_RUPEE;
        let rest = self.0 % PAISE_PER_RUPEE;
        if rest.abs() * 2 >= PAISE_PER_RUPEE {
            whole + self.0.signum()
        } else {
            whole
        }
    }

    /// Multiplies by `basis_points / 10_000`, rounding half away from zero to
    /// the nearest paisa. Exact whenever the result has no sub-paisa part.
    pub fn scale_basis_points(self, basis_points: u32) -> Self {
        let product = i128::from(self.0) * i128::from(basis_points);
        let mut quotient = product / BASIS_POINTS;
        let rest = product % BASIS_POINTS;
        if rest.abs() * 2 >= BASIS_POINTS {
            quotient += product.signum();
        }
        Self(i64::try_from(quotient).unwrap_or(if quotient > 0 { i64::MAX } else { i64::MIN }))
    }

    fn as_rupees_f64(self) -> f64 {
        self.0 as f64 / PAISE_PER_RUPEE as f64
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(rhs)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_money(*self, &LocaleConfig::default()))
    }
}

// Serialized as a rupee number so price tables stay hand-editable.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % PAISE_PER_RUPEE == 0 {
            serializer.serialize_i64(self.0 / PAISE_PER_RUPEE)
        } else {
            serializer.serialize_f64(self.as_rupees_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rupees = f64::deserialize(deserializer)?;
        let paise = (rupees * PAISE_PER_RUPEE as f64).round();
        // i64::MAX as f64 rounds up, so the bound itself is already out of range.
        if !paise.is_finite() || paise.abs() >= i64::MAX as f64 {
            return Err(D::Error::custom(format!(
                "amount {rupees} is out of range"
            )));
        }
        Ok(Money(paise as i64))
    }
}

/// How the integer part of an amount is split into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingStyle {
    /// 1,234,567
    Thousands,
    /// 12,34,567 (lakh/crore)
    Indian,
}

/// Formatting preferences derived from a locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub grouping_separator: char,
    pub grouping: GroupingStyle,
    pub currency_symbol: String,
}

impl LocaleConfig {
    /// Builds preferences for a BCP-47 style tag. Only the region matters:
    /// `IN` selects lakh grouping, everything else groups by thousands.
    pub fn for_tag(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-");
        let indian = normalized
            .rsplit('-')
            .next()
            .map(|region| region.eq_ignore_ascii_case("in"))
            .unwrap_or(false);
        Self {
            language_tag: normalized,
            grouping_separator: ',',
            grouping: if indian {
                GroupingStyle::Indian
            } else {
                GroupingStyle::Thousands
            },
            currency_symbol: "₹".into(),
        }
    }

    /// Same grouping, amounts shown in `code`.
    pub fn with_currency(mut self, code: &str) -> Self {
        self.currency_symbol = symbol_for(code);
        self
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::for_tag("en-IN")
    }
}

pub fn symbol_for(code: &str) -> String {
    match code.trim().to_ascii_uppercase().as_str() {
        "INR" => "₹".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        other => other.into(),
    }
}

/// Groups a non-negative integer according to the locale.
pub fn format_number(locale: &LocaleConfig, value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = match locale.grouping {
        GroupingStyle::Thousands => group_thousands(&digits, locale.grouping_separator),
        GroupingStyle::Indian => group_indian(&digits, locale.grouping_separator),
    };
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

fn group_indian(digits: &str, separator: char) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
    for (idx, ch) in head.chars().enumerate() {
        if idx != 0 && (head.len() - idx) % 2 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped.push(separator);
    grouped.push_str(tail);
    grouped
}

/// Renders an amount as whole rupees with digit grouping and no decimals.
pub fn format_money(amount: Money, locale: &LocaleConfig) -> String {
    let rupees = amount.rupees_rounded();
    let body = format_number(locale, rupees.abs());
    if rupees < 0 {
        format!("-{}{}", locale.currency_symbol, body)
    } else {
        format!("{}{}", locale.currency_symbol, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_on_whole_rupees_is_exact() {
        let subtotal = Money::from_rupees(14_495);
        assert_eq!(subtotal.scale_basis_points(14_000), Money::from_rupees(20_293));

        let fractional = Money::from_rupees(2_999).scale_basis_points(14_000);
        assert_eq!(fractional.paise(), 419_860);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(Money::from_paise(419_860).rupees_rounded(), 4_199);
        assert_eq!(Money::from_paise(419_849).rupees_rounded(), 4_198);
        assert_eq!(Money::from_paise(50).rupees_rounded(), 1);
        assert_eq!(Money::from_paise(-150).rupees_rounded(), -2);
    }

    #[test]
    fn groups_digits_per_locale() {
        let india = LocaleConfig::for_tag("en-IN");
        let us = LocaleConfig::for_tag("en_US");
        assert_eq!(format_number(&india, 999), "999");
        assert_eq!(format_number(&india, 20_293), "20,293");
        assert_eq!(format_number(&india, 1_234_567), "12,34,567");
        assert_eq!(format_number(&us, 1_234_567), "1,234,567");
        assert_eq!(format_number(&us, 100_000), "100,000");
        assert_eq!(us.language_tag, "en-US");
    }

    #[test]
    fn currency_code_picks_the_symbol() {
        let us = LocaleConfig::for_tag("en-US").with_currency("usd");
        assert_eq!(format_money(Money::from_rupees(1_999), &us), "$1,999");
        assert_eq!(symbol_for("INR"), "₹");
        assert_eq!(symbol_for("CHF"), "CHF");
    }

    #[test]
    fn money_serializes_as_rupees() {
        let json = serde_json::to_string(&Money::from_rupees(2_999)).unwrap();
        assert_eq!(json, "2999");
        let back: Money = serde_json::from_str("4198.6").unwrap();
        assert_eq!(back.paise(), 419_860);
    }

    #[test]
    fn huge_amounts_are_rejected_on_load() {
        assert!(serde_json::from_str::<Money>("1e17").is_err());
        assert!(serde_json::from_str::<Money>("-1e17").is_err());
        assert!(serde_json::from_str::<Money>("1e16").is_ok());
    }

    #[test]
    fn arithmetic_saturates() {
        let big = Money::from_paise(i64::MAX - 1);
        assert_eq!(big + Money::from_paise(10), Money::from_paise(i64::MAX));
        assert_eq!(big * 3, Money::from_paise(i64::MAX));
        assert_eq!(Money::from_paise(i64::MIN) - Money::from_paise(1), Money::from_paise(i64::MIN));
        assert_eq!(big.scale_basis_points(14_000), Money::from_paise(i64::MAX));
    }
}
