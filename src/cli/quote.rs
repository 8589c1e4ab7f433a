//! `quote`: price a selection document without running the wizard.

use crate::errors::CourseError;
use crate::pricing::{PriceBreakdown, PriceEngine};
use crate::wizard::{CourseVariant, SelectionRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteOptions {
    pub variant: Option<CourseVariant>,
    /// Wizard step the quote is taken on. Defaults to the last step.
    pub step: Option<usize>,
}

impl QuoteOptions {
    pub fn parse<I, S>(args: I) -> Result<Self, CourseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = QuoteOptions::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let flag = arg.as_ref().to_string();
            let value = args
                .next()
                .map(|value| value.as_ref().to_string())
                .ok_or_else(|| CourseError::InvalidArgument(format!("`{flag}` needs a value")))?;
            match flag.as_str() {
                "--variant" => {
                    let variant = CourseVariant::from_id(&value).ok_or_else(|| {
                        CourseError::InvalidArgument(format!(
                            "unknown variant `{value}` (expected standard or extended)"
                        ))
                    })?;
                    options.variant = Some(variant);
                }
                "--step" => {
                    let step = value.parse::<usize>().map_err(|_| {
                        CourseError::InvalidArgument(format!("`{value}` is not a step number"))
                    })?;
                    options.step = Some(step);
                }
                other => {
                    return Err(CourseError::InvalidArgument(format!(
                        "unknown quote option `{other}`"
                    )))
                }
            }
        }
        Ok(options)
    }
}

/// Prices the JSON `document` as seen from `step` of `variant`. An empty
/// document prices the empty selection.
pub fn quote_document(
    document: &str,
    variant: CourseVariant,
    step: Option<usize>,
    engine: &PriceEngine,
) -> Result<PriceBreakdown, CourseError> {
    let selection: SelectionRecord = if document.trim().is_empty() {
        SelectionRecord::default()
    } else {
        serde_json::from_str(document)?
    };
    let plan = variant.steps();
    let step = step.unwrap_or(plan.len());
    if step == 0 || step > plan.len() {
        return Err(CourseError::InvalidArgument(format!(
            "step must be between 1 and {}",
            plan.len()
        )));
    }
    Ok(engine.quote(&selection, plan.complimentary_unlocked_at(step)))
}
