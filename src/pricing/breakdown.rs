use serde::Serialize;

use super::table::PricedOption;
use crate::currency::Money;
use crate::wizard::WizardField;

/// How many units a line item bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Count(u32),
    /// A chosen option or an enabled toggle.
    Flag,
}

impl Quantity {
    pub fn units(self) -> u32 {
        match self {
            Quantity::Count(count) => count,
            Quantity::Flag => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub field: WizardField,
    pub label: String,
    pub unit_price: Money,
    pub quantity: Quantity,
    pub total: Money,
}

impl LineItem {
    pub(crate) fn new(field: WizardField, label: String, unit_price: Money, quantity: Quantity) -> Self {
        Self {
            field,
            label,
            unit_price,
            quantity,
            total: unit_price * quantity.units(),
        }
    }
}

/// Bonus items bundled with the plan. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplimentaryValue {
    pub items: Vec<PricedOption>,
    pub total: Money,
}

/// Derived price summary for one selection. Recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub lines: Vec<LineItem>,
    pub subtotal: Money,
    pub inflated_original: Money,
    pub savings: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complimentary: Option<ComplimentaryValue>,
}

impl PriceBreakdown {
    /// A zero subtotal hides the summary panel entirely.
    pub fn is_displayable(&self) -> bool {
        self.subtotal > Money::ZERO
    }

    /// Sum of the line items billed for `field`.
    pub fn contribution(&self, field: WizardField) -> Money {
        self.lines
            .iter()
            .filter(|line| line.field == field)
            .map(|line| line.total)
            .sum()
    }

    pub fn line(&self, label: &str) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_units() {
        let line = LineItem::new(
            WizardField::FocusAreas,
            "Subjects (3)".into(),
            Money::from_rupees(2_999),
            Quantity::Count(3),
        );
        assert_eq!(line.total, Money::from_rupees(8_997));

        let flag = LineItem::new(
            WizardField::Books,
            "Combo Books".into(),
            Money::from_rupees(3_999),
            Quantity::Flag,
        );
        assert_eq!(flag.total, Money::from_rupees(3_999));
    }

    #[test]
    fn quantity_serializes_by_kind() {
        assert_eq!(serde_json::to_string(&Quantity::Count(2)).unwrap(), r#"{"count":2}"#);
        assert_eq!(serde_json::to_string(&Quantity::Flag).unwrap(), r#""flag""#);
    }
}
