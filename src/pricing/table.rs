use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, CatalogOption};
use crate::currency::Money;
use crate::errors::CourseError;
use crate::wizard::WizardField;

/// ×1.4, the "40% off" reference price.
pub const DEFAULT_MARKUP_BASIS_POINTS: u32 = 14_000;

/// Highest price a loaded table may charge for one option.
pub const MAX_OPTION_PRICE: Money = Money::from_rupees(10_000_000);

const MIN_MARKUP_BASIS_POINTS: u32 = 10_000;
const MAX_MARKUP_BASIS_POINTS: u32 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedOption {
    pub id: String,
    pub label: String,
    pub price: Money,
}

impl From<&CatalogOption> for PricedOption {
    fn from(option: &CatalogOption) -> Self {
        Self {
            id: option.id.to_string(),
            label: option.summary_label.to_string(),
            price: option.price,
        }
    }
}

/// How one field contributes to the subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceRule {
    /// `unit_price` for every entry of a multi-choice field.
    PerItem { label: String, unit_price: Money },
    /// Flat fee of the chosen option.
    Choice { options: Vec<PricedOption> },
    /// Independent fee for every enabled flag.
    Flags { options: Vec<PricedOption> },
}

impl PriceRule {
    fn options_from(entries: &[CatalogOption]) -> Vec<PricedOption> {
        entries.iter().map(PricedOption::from).collect()
    }

    /// Price of `id` under a `Choice` or `Flags` rule.
    pub fn option(&self, id: &str) -> Option<&PricedOption> {
        match self {
            PriceRule::Choice { options } | PriceRule::Flags { options } => {
                options.iter().find(|option| option.id == id)
            }
            PriceRule::PerItem { .. } => None,
        }
    }

    /// What selecting `id` costs: the unit price for per-item rules, the
    /// option's own price otherwise.
    pub fn price_of(&self, id: &str) -> Option<Money> {
        match self {
            PriceRule::PerItem { unit_price, .. } => Some(*unit_price),
            rule => rule.option(id).map(|option| option.price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPricing {
    pub field: WizardField,
    pub rule: PriceRule,
}

/// Field → option → price, in summary order. Adding or dropping a pricing
/// dimension is a change to this data, not to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    #[serde(default = "PriceTable::default_markup")]
    pub markup_basis_points: u32,
    pub fields: Vec<FieldPricing>,
    #[serde(default)]
    pub complimentary: Vec<PricedOption>,
}

impl PriceTable {
    fn default_markup() -> u32 {
        DEFAULT_MARKUP_BASIS_POINTS
    }

    /// Every pricing dimension, built from the catalog.
    pub fn extended() -> Self {
        Self {
            markup_basis_points: DEFAULT_MARKUP_BASIS_POINTS,
            fields: vec![
                FieldPricing {
                    field: WizardField::FocusAreas,
                    rule: PriceRule::PerItem {
                        label: "Subjects".into(),
                        unit_price: catalog::FOCUS_AREA_PRICE,
                    },
                },
                FieldPricing {
                    field: WizardField::LearningMode,
                    rule: PriceRule::Choice {
                        options: PriceRule::options_from(catalog::LEARNING_MODES),
                    },
                },
                FieldPricing {
                    field: WizardField::Mentors,
                    rule: PriceRule::PerItem {
                        label: "Mentors".into(),
                        unit_price: catalog::MENTOR_PRICE,
                    },
                },
                FieldPricing {
                    field: WizardField::Books,
                    rule: PriceRule::Choice {
                        options: PriceRule::options_from(catalog::BOOKS),
                    },
                },
                FieldPricing {
                    field: WizardField::TestSeries,
                    rule: PriceRule::Choice {
                        options: PriceRule::options_from(catalog::TEST_SERIES),
                    },
                },
                FieldPricing {
                    field: WizardField::DoubtSolving,
                    rule: PriceRule::Choice {
                        options: PriceRule::options_from(catalog::DOUBT_CHANNELS),
                    },
                },
                FieldPricing {
                    field: WizardField::WatPiPrep,
                    rule: PriceRule::Flags {
                        options: PriceRule::options_from(catalog::WAT_PI_OPTIONS),
                    },
                },
            ],
            complimentary: PriceRule::options_from(catalog::COMPLIMENTARY_ADDONS),
        }
    }

    /// The six-step table: no books, WAT/PI or complimentary pricing.
    pub fn standard() -> Self {
        let mut table = Self::extended();
        table.fields.retain(|pricing| {
            !matches!(pricing.field, WizardField::Books | WizardField::WatPiPrep)
        });
        table.complimentary.clear();
        table
    }

    pub fn rule_for(&self, field: WizardField) -> Option<&PriceRule> {
        self.fields
            .iter()
            .find(|pricing| pricing.field == field)
            .map(|pricing| &pricing.rule)
    }

    /// Price the table charges for `id` of `field`, if it prices it at all.
    pub fn price_of(&self, field: WizardField, id: &str) -> Option<Money> {
        if field == WizardField::ComplimentaryAddons {
            return self
                .complimentary
                .iter()
                .find(|option| option.id == id)
                .map(|option| option.price);
        }
        self.rule_for(field).and_then(|rule| rule.price_of(id))
    }

    pub fn complimentary_total(&self) -> Money {
        self.complimentary.iter().map(|option| option.price).sum()
    }

    pub fn from_json_str(json: &str) -> Result<Self, CourseError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Rejects tables whose amounts could not appear on a real price summary.
    pub fn validate(&self) -> Result<(), CourseError> {
        if !(MIN_MARKUP_BASIS_POINTS..=MAX_MARKUP_BASIS_POINTS).contains(&self.markup_basis_points)
        {
            return Err(CourseError::InvalidArgument(format!(
                "price table markup {} must be between {MIN_MARKUP_BASIS_POINTS} and \
                 {MAX_MARKUP_BASIS_POINTS} basis points",
                self.markup_basis_points
            )));
        }

        for (idx, pricing) in self.fields.iter().enumerate() {
            if self.fields[..idx].iter().any(|earlier| earlier.field == pricing.field) {
                return Err(CourseError::InvalidArgument(format!(
                    "price table lists `{}` more than once",
                    pricing.field
                )));
            }
            match &pricing.rule {
                PriceRule::PerItem { label, unit_price } => {
                    check_price(pricing.field, label, *unit_price)?
                }
                PriceRule::Choice { options } | PriceRule::Flags { options } => {
                    for option in options {
                        check_price(pricing.field, &option.id, option.price)?;
                    }
                }
            }
        }

        for option in &self.complimentary {
            check_price(WizardField::ComplimentaryAddons, &option.id, option.price)?;
        }
        Ok(())
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CourseError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn to_json_pretty(&self) -> Result<String, CourseError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn check_price(field: WizardField, entry: &str, price: Money) -> Result<(), CourseError> {
    if price < Money::ZERO || price > MAX_OPTION_PRICE {
        return Err(CourseError::InvalidArgument(format!(
            "price table entry `{entry}` of `{field}` costs {price}, expected {} to {}",
            Money::ZERO,
            MAX_OPTION_PRICE
        )));
    }
    Ok(())
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::extended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_table_covers_every_priced_field() {
        let table = PriceTable::extended();
        let fields: Vec<_> = table.fields.iter().map(|f| f.field).collect();
        assert_eq!(
            fields,
            vec![
                WizardField::FocusAreas,
                WizardField::LearningMode,
                WizardField::Mentors,
                WizardField::Books,
                WizardField::TestSeries,
                WizardField::DoubtSolving,
                WizardField::WatPiPrep,
            ]
        );
        assert_eq!(table.complimentary_total(), Money::from_rupees(6_497));
    }

    #[test]
    fn standard_table_drops_books_and_interview_prep() {
        let table = PriceTable::standard();
        assert!(table.rule_for(WizardField::Books).is_none());
        assert!(table.rule_for(WizardField::WatPiPrep).is_none());
        assert!(table.complimentary.is_empty());
        assert_eq!(table.fields.len(), 5);
    }

    #[test]
    fn tier_prices_follow_catalog() {
        let table = PriceTable::extended();
        let price = |field, id| {
            table
                .rule_for(field)
                .and_then(|rule| rule.option(id))
                .map(|option| option.price.rupees_rounded())
        };
        assert_eq!(price(WizardField::LearningMode, "hybrid"), Some(3_000));
        assert_eq!(price(WizardField::Books, "both"), Some(3_999));
        assert_eq!(price(WizardField::TestSeries, "advanced"), Some(1_999));
        assert_eq!(price(WizardField::DoubtSolving, "app"), Some(799));
        assert_eq!(price(WizardField::WatPiPrep, "iimAlumniPanel"), Some(2_499));
    }

    #[test]
    fn json_round_trip_keeps_table_intact() {
        let table = PriceTable::extended();
        let json = table.to_json_pretty().unwrap();
        assert!(json.contains("\"kind\": \"per_item\""));
        assert_eq!(PriceTable::from_json_str(&json).unwrap(), table);
    }

    #[test]
    fn price_lookup_covers_every_rule_kind() {
        let table = PriceTable::extended();
        assert_eq!(
            table.price_of(WizardField::FocusAreas, "anything"),
            Some(catalog::FOCUS_AREA_PRICE)
        );
        assert_eq!(
            table.price_of(WizardField::DoubtSolving, "live"),
            Some(Money::from_rupees(1_499))
        );
        assert_eq!(
            table.price_of(WizardField::ComplimentaryAddons, "sop-evaluation"),
            Some(Money::from_rupees(1_999))
        );
        assert_eq!(PriceTable::standard().price_of(WizardField::Books, "both"), None);
    }

    #[test]
    fn negative_prices_are_rejected() {
        let json = r#"{
            "fields": [
                { "field": "mentors", "rule": { "kind": "per_item", "label": "Mentors", "unit_price": -500 } }
            ]
        }"#;
        let err = PriceTable::from_json_str(json).unwrap_err();
        assert!(matches!(err, CourseError::InvalidArgument(_)));
        assert!(err.to_string().contains("`Mentors`"));
    }

    #[test]
    fn oversized_prices_and_markups_are_rejected() {
        let mut table = PriceTable::extended();
        table.complimentary[0].price = MAX_OPTION_PRICE + Money::from_rupees(1);
        assert!(table.validate().is_err());

        let mut table = PriceTable::extended();
        table.markup_basis_points = 9_000;
        assert!(table.validate().is_err());

        let mut table = PriceTable::extended();
        let duplicate = table.fields[0].clone();
        table.fields.push(duplicate);
        assert!(table.validate().is_err());

        assert!(PriceTable::extended().validate().is_ok());
        assert!(PriceTable::standard().validate().is_ok());
    }

    #[test]
    fn markup_defaults_when_missing() {
        let table = PriceTable::from_json_str(r#"{ "fields": [] }"#).unwrap();
        assert_eq!(table.markup_basis_points, DEFAULT_MARKUP_BASIS_POINTS);
        assert!(table.complimentary.is_empty());
    }
}
