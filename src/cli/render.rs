//! Plain-text views of the wizard. Every function returns lines without
//! styling so the shell, the prompts and the tests share one rendering.

use crate::catalog::{self, Mentor};
use crate::currency::{format_money, LocaleConfig, Money};
use crate::pricing::{PriceBreakdown, PriceTable};
use crate::wizard::{
    FieldValue, ProgressSnapshot, SelectionRecord, StepDefinition, StepKind, StepStatus,
    WizardField,
};

const LABEL_WIDTH: usize = 24;
const AMOUNT_WIDTH: usize = 10;

pub const EMPTY_SUMMARY: &str = "Select options to see your price summary.";

fn row(label: &str, amount: Money, locale: &LocaleConfig) -> String {
    let amount = format_money(amount, locale);
    format!(
        "{label:<width$}{amount:>amount_width$}",
        width = LABEL_WIDTH,
        amount_width = AMOUNT_WIDTH
    )
}

pub fn progress_lines(snapshot: &ProgressSnapshot) -> Vec<String> {
    let indicators = snapshot
        .indicators
        .iter()
        .map(|indicator| {
            let marker = match indicator.status {
                StepStatus::Completed => "[x]",
                StepStatus::Current => "[>]",
                StepStatus::Upcoming => "[ ]",
            };
            format!("{marker} {}", indicator.label)
        })
        .collect::<Vec<_>>()
        .join("  ");
    vec![
        format!(
            "Step {} of {} ({}% complete)",
            snapshot.current, snapshot.total, snapshot.percentage
        ),
        indicators,
    ]
}

/// Display name of a selected id, falling back to the id itself.
pub fn option_title(field: WizardField, id: &str) -> String {
    match field {
        WizardField::Mentors => catalog::mentor(id).map(|mentor| mentor.name),
        other => catalog::option(other, id).map(|option| option.title),
    }
    .map(str::to_string)
    .unwrap_or_else(|| id.to_string())
}

fn field_label(field: WizardField) -> &'static str {
    match field {
        WizardField::FocusAreas => "Subjects",
        WizardField::LearningMode => "Mode",
        WizardField::Mentors => "Mentors",
        WizardField::Books => "Books",
        WizardField::TestSeries => "Tests",
        WizardField::DoubtSolving => "Doubts",
        WizardField::WatPiPrep => "WAT/PI",
        WizardField::ComplimentaryAddons => "Add-ons",
    }
}

/// One line per field listed in `fields`, e.g. `Mode: Live Classes`.
pub fn selection_lines(selection: &SelectionRecord, fields: &[WizardField]) -> Vec<String> {
    fields
        .iter()
        .map(|field| {
            let ids: Vec<&str> = match selection.value(*field) {
                FieldValue::Tags(tags) => tags.iter().collect(),
                FieldValue::Choice("none") => Vec::new(),
                FieldValue::Choice(id) => vec![id],
                FieldValue::Flags(ids) => ids,
                FieldValue::Fixed(ids) => ids.to_vec(),
            };
            let value = if ids.is_empty() {
                "none".to_string()
            } else {
                ids.iter()
                    .map(|id| option_title(*field, id))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            format!("{}: {value}", field_label(*field))
        })
        .collect()
}

fn marker(field: WizardField, selected: bool) -> &'static str {
    match (field.is_multi(), selected) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, true) => "(*)",
        (false, false) => "( )",
    }
}

/// Price the table charges for `id`, or the catalog list price when the table
/// has no entry for it.
fn listed_price(table: &PriceTable, field: WizardField, id: &str, fallback: Money) -> Money {
    table.price_of(field, id).unwrap_or(fallback)
}

fn mentor_price(table: &PriceTable, mentor: &Mentor) -> Money {
    listed_price(table, WizardField::Mentors, mentor.id, catalog::MENTOR_PRICE)
}

fn mentor_summary(mentor: &Mentor) -> String {
    format!(
        "{} - {} - {:.1} rating, {} yrs",
        mentor.name, mentor.speciality, mentor.rating, mentor.experience_years
    )
}

/// Title plus the options of the step, marking the current selection.
pub fn step_lines(
    step: &StepDefinition,
    selection: &SelectionRecord,
    fields: &[WizardField],
    table: &PriceTable,
    locale: &LocaleConfig,
) -> Vec<String> {
    let mut lines = vec![step.title.to_string()];
    let Some(field) = step.kind.field() else {
        lines.extend(selection_lines(selection, fields));
        return lines;
    };

    let selected = |id: &str| match selection.value(field) {
        FieldValue::Tags(tags) => tags.contains(id),
        FieldValue::Choice(chosen) => chosen == id,
        FieldValue::Flags(ids) => ids.contains(&id),
        FieldValue::Fixed(_) => true,
    };

    if step.kind == StepKind::Mentors {
        lines.extend(catalog::MENTORS.iter().map(|mentor| {
            format!(
                "  {} {:<14}{}  {}",
                marker(field, selected(mentor.id)),
                mentor.id,
                mentor_summary(mentor),
                format_money(mentor_price(table, mentor), locale)
            )
        }));
        return lines;
    }

    for option in catalog::options_for(field) {
        let price = format_money(listed_price(table, field, option.id, option.price), locale);
        let line = if field == WizardField::ComplimentaryAddons {
            format!(
                "  + {:<28}{price} (included free)",
                option.title
            )
        } else {
            format!(
                "  {} {:<14}{:<28}{price}",
                marker(field, selected(option.id)),
                option.id,
                option.title
            )
        };
        lines.push(line);
    }
    lines
}

/// Options of one catalog with descriptions, for the `catalog` command.
pub fn catalog_lines(field: WizardField, table: &PriceTable, locale: &LocaleConfig) -> Vec<String> {
    if field == WizardField::Mentors {
        return mentor_lines(&catalog::mentors_for_subject("all"), table, locale);
    }
    catalog::options_for(field)
        .iter()
        .map(|option| {
            format!(
                "{:<16}{:<28}{:>8}  {}",
                option.id,
                option.title,
                format_money(listed_price(table, field, option.id, option.price), locale),
                option.description
            )
        })
        .collect()
}

pub fn mentor_lines(mentors: &[&Mentor], table: &PriceTable, locale: &LocaleConfig) -> Vec<String> {
    if mentors.is_empty() {
        return vec!["No mentors match that subject.".to_string()];
    }
    mentors
        .iter()
        .map(|mentor| {
            format!(
                "{:<14}{}  {} students  {}",
                mentor.id,
                mentor_summary(mentor),
                mentor.students,
                format_money(mentor_price(table, mentor), locale)
            )
        })
        .collect()
}

/// The price summary panel. A zero subtotal renders a single placeholder.
pub fn summary_lines(breakdown: &PriceBreakdown, locale: &LocaleConfig) -> Vec<String> {
    if !breakdown.is_displayable() {
        return vec![EMPTY_SUMMARY.to_string()];
    }

    let mut lines: Vec<String> = breakdown
        .lines
        .iter()
        .map(|line| row(&line.label, line.total, locale))
        .collect();

    if let Some(bonus) = &breakdown.complimentary {
        lines.push("Included Free".to_string());
        lines.extend(bonus.items.iter().map(|item| row(&item.label, item.price, locale)));
    }

    lines.push(row("Original Price", breakdown.inflated_original, locale));
    lines.push(row("You Save", breakdown.savings, locale));
    if let Some(bonus) = &breakdown.complimentary {
        lines.push(row("Free Add-ons Value", bonus.total, locale));
    }
    lines.push(row("Final Price", breakdown.subtotal, locale));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::{PriceEngine, PriceRule};
    use crate::wizard::{DoubtChannel, LearningMode, StepPlan, TagSet, TestSeriesTier};

    fn scenario() -> SelectionRecord {
        SelectionRecord {
            focus_areas: TagSet::from_iter(["qa", "varc"]),
            learning_mode: LearningMode::Live,
            mentors: TagSet::from_iter(["rohit-singh"]),
            test_series: TestSeriesTier::Basic,
            doubt_solving: DoubtChannel::Whatsapp,
            ..SelectionRecord::default()
        }
    }

    #[test]
    fn summary_panel_matches_price_breakdown() {
        let breakdown = PriceEngine::new(PriceTable::standard()).quote(&scenario(), false);
        let text = summary_lines(&breakdown, &LocaleConfig::default()).join("\n");
        insta::assert_snapshot!(text, @r###"
        Subjects (2)                ₹5,998
        Live Classes                ₹5,000
        Mentors (1)                 ₹1,999
        Basic Test Series             ₹999
        Whatsapp Support              ₹499
        Original Price             ₹20,293
        You Save                    ₹5,798
        Final Price                ₹14,495
        "###);
    }

    #[test]
    fn empty_summary_is_a_placeholder() {
        let breakdown = PriceEngine::default().quote(&SelectionRecord::default(), true);
        assert_eq!(
            summary_lines(&breakdown, &LocaleConfig::default()),
            vec![EMPTY_SUMMARY.to_string()]
        );
    }

    #[test]
    fn complimentary_items_are_listed_once_unlocked() {
        let breakdown = PriceEngine::default().quote(&scenario(), true);
        let lines = summary_lines(&breakdown, &LocaleConfig::default());
        assert!(lines.contains(&"Included Free".to_string()));
        assert!(lines
            .iter()
            .any(|line| line.starts_with("Free Add-ons Value") && line.ends_with("₹6,497")));
    }

    #[test]
    fn progress_marks_each_step() {
        let mut wizard = crate::wizard::WizardController::new(StepPlan::standard());
        wizard.update(crate::wizard::SelectionUpdate::ToggleFocusArea("qa".into()));
        wizard.advance();
        let lines = progress_lines(&wizard.progress());
        insta::assert_snapshot!(lines.join("\n"), @r###"
        Step 2 of 6 (33% complete)
        [x] Subjects  [>] Mode  [ ] Mentors  [ ] Tests  [ ] Doubts  [ ] Review
        "###);
    }

    #[test]
    fn review_step_recaps_the_selection() {
        let plan = StepPlan::standard();
        let review = plan.get(6).unwrap();
        let fields = [
            WizardField::FocusAreas,
            WizardField::LearningMode,
            WizardField::Mentors,
            WizardField::Books,
        ];
        let table = PriceTable::standard();
        let lines = step_lines(review, &scenario(), &fields, &table, &LocaleConfig::default());
        assert_eq!(
            lines,
            vec![
                "Review Your Course".to_string(),
                "Subjects: Quantitative Aptitude, Verbal Ability & RC".to_string(),
                "Mode: Live Classes".to_string(),
                "Mentors: Rohit Singh".to_string(),
                "Books: none".to_string(),
            ]
        );
    }

    #[test]
    fn choice_steps_mark_the_chosen_option() {
        let plan = StepPlan::extended();
        let mode = plan.get(2).unwrap();
        let table = PriceTable::extended();
        let lines = step_lines(mode, &scenario(), &[], &table, &LocaleConfig::default());
        assert_eq!(lines[0], "Select Learning Mode");
        assert!(lines[1].starts_with("  (*) live"));
        assert!(lines[2].starts_with("  ( ) recorded"));
    }

    /// Extended table with live classes at 9,000 and mentors at 2,500.
    fn repriced_table() -> PriceTable {
        let mut table = PriceTable::extended();
        for pricing in &mut table.fields {
            match &mut pricing.rule {
                PriceRule::Choice { options } => {
                    for option in options.iter_mut().filter(|option| option.id == "live") {
                        option.price = Money::from_rupees(9_000);
                    }
                }
                PriceRule::PerItem { label, unit_price } if label == "Mentors" => {
                    *unit_price = Money::from_rupees(2_500);
                }
                _ => {}
            }
        }
        table
    }

    #[test]
    fn listed_prices_follow_the_active_table() {
        let table = repriced_table();
        let locale = LocaleConfig::default();
        let plan = StepPlan::extended();

        let mode = step_lines(plan.get(2).unwrap(), &scenario(), &[], &table, &locale);
        assert_eq!(mode[1], "  (*) live          Live Classes                ₹9,000");

        let breakdown = PriceEngine::new(table.clone()).quote(&scenario(), false);
        let summary = summary_lines(&breakdown, &locale);
        assert!(summary.contains(&"Live Classes                ₹9,000".to_string()));

        let mentors = step_lines(plan.get(3).unwrap(), &scenario(), &[], &table, &locale);
        assert!(mentors[1..].iter().all(|line| line.ends_with("₹2,500")));

        let listing = catalog_lines(WizardField::LearningMode, &table, &locale);
        assert!(listing[0].starts_with("live"));
        assert!(listing[0].contains("₹9,000"));
        assert!(catalog_lines(WizardField::Mentors, &table, &locale)
            .iter()
            .all(|line| line.ends_with("₹2,500")));
    }

    #[test]
    fn options_missing_from_the_table_keep_their_list_price() {
        let table = PriceTable::standard();
        let listing = catalog_lines(WizardField::Books, &table, &LocaleConfig::default());
        assert!(listing[0].starts_with("printed"));
        assert!(listing[0].contains("₹2,999"));
    }
}
