use tracing::debug;

use super::breakdown::{ComplimentaryValue, LineItem, PriceBreakdown, Quantity};
use super::table::{FieldPricing, PriceRule, PriceTable};
use crate::currency::Money;
use crate::wizard::{FieldValue, SelectionRecord};

/// Pure price derivation over a [`PriceTable`].
#[derive(Debug, Clone, Default)]
pub struct PriceEngine {
    table: PriceTable,
}

impl PriceEngine {
    pub fn new(table: PriceTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    /// Prices `selection`. Fields the table does not list, and option ids it
    /// does not know, contribute nothing.
    pub fn quote(&self, selection: &SelectionRecord, complimentary_unlocked: bool) -> PriceBreakdown {
        let lines: Vec<LineItem> = self
            .table
            .fields
            .iter()
            .flat_map(|pricing| price_field(pricing, selection))
            .collect();
        let subtotal: Money = lines.iter().map(|line| line.total).sum();
        let inflated_original = subtotal.scale_basis_points(self.table.markup_basis_points);
        let complimentary = (complimentary_unlocked && !self.table.complimentary.is_empty())
            .then(|| ComplimentaryValue {
                items: self.table.complimentary.clone(),
                total: self.table.complimentary_total(),
            });

        PriceBreakdown {
            lines,
            subtotal,
            inflated_original,
            savings: inflated_original - subtotal,
            complimentary,
        }
    }
}

fn selected_ids<'a>(value: &'a FieldValue<'a>) -> Vec<&'a str> {
    match value {
        FieldValue::Tags(tags) => tags.iter().collect(),
        FieldValue::Choice("none") => Vec::new(),
        FieldValue::Choice(id) => vec![*id],
        FieldValue::Flags(ids) => ids.clone(),
        FieldValue::Fixed(ids) => ids.to_vec(),
    }
}

fn price_field(pricing: &FieldPricing, selection: &SelectionRecord) -> Vec<LineItem> {
    let value = selection.value(pricing.field);
    let ids = selected_ids(&value);
    if ids.is_empty() {
        return Vec::new();
    }

    match &pricing.rule {
        PriceRule::PerItem { label, unit_price } => {
            let count = u32::try_from(ids.len()).unwrap_or(u32::MAX);
            vec![LineItem::new(
                pricing.field,
                format!("{label} ({count})"),
                *unit_price,
                Quantity::Count(count),
            )]
        }
        rule @ (PriceRule::Choice { .. } | PriceRule::Flags { .. }) => ids
            .into_iter()
            .filter_map(|id| match rule.option(id) {
                Some(option) => Some(LineItem::new(
                    pricing.field,
                    option.label.clone(),
                    option.price,
                    Quantity::Flag,
                )),
                None => {
                    debug!(field = pricing.field.id(), option = id, "option has no price");
                    None
                }
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{BooksOption, LearningMode, TagSet, TestSeriesTier, WatPiOption, WizardField};

    fn engine() -> PriceEngine {
        PriceEngine::new(PriceTable::extended())
    }

    #[test]
    fn empty_selection_is_free_and_hidden() {
        let breakdown = engine().quote(&SelectionRecord::default(), false);
        assert!(breakdown.lines.is_empty());
        assert_eq!(breakdown.subtotal, Money::ZERO);
        assert_eq!(breakdown.savings, Money::ZERO);
        assert!(!breakdown.is_displayable());
    }

    #[test]
    fn per_item_labels_carry_the_count() {
        let selection = SelectionRecord {
            focus_areas: TagSet::from_iter(["qa", "varc", "lrdi"]),
            ..SelectionRecord::default()
        };
        let breakdown = engine().quote(&selection, false);
        let line = breakdown.line("Subjects (3)").expect("subjects line");
        assert_eq!(line.quantity, Quantity::Count(3));
        assert_eq!(breakdown.subtotal, Money::from_rupees(8_997));
    }

    #[test]
    fn flags_are_priced_independently() {
        let mut selection = SelectionRecord::default();
        selection.wat_pi_prep.set(WatPiOption::WatPractice, true);
        selection.wat_pi_prep.set(WatPiOption::IimAlumniPanel, true);
        let breakdown = engine().quote(&selection, false);
        let labels: Vec<_> = breakdown.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["WAT Practice", "IIM Alumni Panel"]);
        assert_eq!(breakdown.contribution(WizardField::WatPiPrep), Money::from_rupees(3_998));
    }

    #[test]
    fn fields_missing_from_the_table_contribute_zero() {
        let selection = SelectionRecord {
            books: BooksOption::Both,
            learning_mode: LearningMode::Recorded,
            test_series: TestSeriesTier::Toppers,
            ..SelectionRecord::default()
        };
        let standard = PriceEngine::new(PriceTable::standard()).quote(&selection, false);
        assert_eq!(standard.contribution(WizardField::Books), Money::ZERO);
        assert_eq!(standard.subtotal, Money::from_rupees(3_999));

        let extended = engine().quote(&selection, false);
        assert_eq!(extended.subtotal, Money::from_rupees(7_998));
    }

    #[test]
    fn unknown_choice_ids_are_skipped() {
        let mut table = PriceTable::extended();
        for pricing in &mut table.fields {
            if let PriceRule::Choice { options } = &mut pricing.rule {
                options.retain(|option| option.id != "live");
            }
        }
        let selection = SelectionRecord {
            learning_mode: LearningMode::Live,
            ..SelectionRecord::default()
        };
        let breakdown = PriceEngine::new(table).quote(&selection, false);
        assert_eq!(breakdown.subtotal, Money::ZERO);
    }

    #[test]
    fn complimentary_value_needs_unlocking() {
        let selection = SelectionRecord {
            focus_areas: TagSet::from_iter(["qa"]),
            ..SelectionRecord::default()
        };
        let locked = engine().quote(&selection, false);
        assert!(locked.complimentary.is_none());

        let unlocked = engine().quote(&selection, true);
        let bonus = unlocked.complimentary.expect("complimentary value");
        assert_eq!(bonus.total, Money::from_rupees(6_497));
        assert_eq!(bonus.items.len(), 3);
        assert_eq!(unlocked.subtotal, locked.subtotal);
    }

    #[test]
    fn markup_is_exact_in_paise() {
        let selection = SelectionRecord {
            mentors: TagSet::from_iter(["rohit-singh"]),
            ..SelectionRecord::default()
        };
        let breakdown = engine().quote(&selection, false);
        assert_eq!(breakdown.inflated_original, Money::from_paise(279_860));
        assert_eq!(breakdown.savings, Money::from_paise(79_960));
    }
}
