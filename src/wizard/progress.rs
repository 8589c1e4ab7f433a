use serde::Serialize;

/// Indicator state for one step in the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    pub number: usize,
    pub label: &'static str,
    pub status: StepStatus,
}

/// Progress bar state derived from the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub current: usize,
    pub total: usize,
    /// `current / total` as a whole percentage, rounded.
    pub percentage: u8,
    pub indicators: Vec<StepIndicator>,
}

impl ProgressSnapshot {
    pub(crate) fn new(current: usize, labels: impl IntoIterator<Item = &'static str>) -> Self {
        let indicators: Vec<StepIndicator> = labels
            .into_iter()
            .enumerate()
            .map(|(idx, label)| {
                let number = idx + 1;
                let status = match number.cmp(&current) {
                    std::cmp::Ordering::Less => StepStatus::Completed,
                    std::cmp::Ordering::Equal => StepStatus::Current,
                    std::cmp::Ordering::Greater => StepStatus::Upcoming,
                };
                StepIndicator {
                    number,
                    label,
                    status,
                }
            })
            .collect();
        let total = indicators.len();
        let percentage = if total == 0 {
            0
        } else {
            ((current * 200 + total) / (total * 2)).min(100) as u8
        };
        Self {
            current,
            total,
            percentage,
            indicators,
        }
    }
}

/// Hint shown next to the price summary.
pub fn coach_tip(step: usize) -> &'static str {
    match step {
        0..=4 => "Take your time choosing the right combination for better results!",
        5..=6 => "You're doing great! Add-ons can significantly boost your preparation.",
        _ => "You're almost done! Review your selections carefully.",
    }
}
