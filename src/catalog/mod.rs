//! Static, read-only option catalogs shown by the step renderers and used to
//! build the default price tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use strsim::levenshtein;

use crate::currency::Money;
use crate::errors::CourseError;
use crate::wizard::{WatPiOption, WizardField};

mod mentors;

pub use mentors::{mentor, mentors_for_subject, Mentor, MENTORS, MENTOR_FILTERS};

/// One selectable option of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    pub id: &'static str,
    pub title: &'static str,
    /// Label used in the price summary.
    pub summary_label: &'static str,
    pub description: &'static str,
    pub price: Money,
    pub features: &'static [&'static str],
}

/// Flat fee for each selected subject.
pub const FOCUS_AREA_PRICE: Money = Money::from_rupees(2_999);

/// Flat fee for each selected mentor.
pub const MENTOR_PRICE: Money = Money::from_rupees(1_999);

pub static FOCUS_AREAS: &[CatalogOption] = &[
    CatalogOption {
        id: "qa",
        title: "Quantitative Aptitude",
        summary_label: "QA",
        description: "Master arithmetic, algebra, geometry & more",
        price: FOCUS_AREA_PRICE,
        features: &[],
    },
    CatalogOption {
        id: "varc",
        title: "Verbal Ability & RC",
        summary_label: "VARC",
        description: "Reading comprehension, grammar & vocabulary",
        price: FOCUS_AREA_PRICE,
        features: &[],
    },
    CatalogOption {
        id: "lrdi",
        title: "Logical Reasoning & DI",
        summary_label: "LRDI",
        description: "Data interpretation & logical puzzles",
        price: FOCUS_AREA_PRICE,
        features: &[],
    },
];

pub static LEARNING_MODES: &[CatalogOption] = &[
    CatalogOption {
        id: "live",
        title: "Live Classes",
        summary_label: "Live Classes",
        description: "Interactive sessions with real-time doubt solving",
        price: Money::from_rupees(5_000),
        features: &["Live interaction", "Real-time doubt solving", "Recorded for later"],
    },
    CatalogOption {
        id: "recorded",
        title: "Pre-recorded",
        summary_label: "Recorded Classes",
        description: "Learn at your own pace with structured content",
        price: Money::from_rupees(1_000),
        features: &["Self-paced learning", "Lifetime access", "Download offline"],
    },
    CatalogOption {
        id: "hybrid",
        title: "Hybrid Learning",
        summary_label: "Hybrid Classes",
        description: "Best of both worlds - live + recorded",
        price: Money::from_rupees(3_000),
        features: &["Live + recorded", "Flexible schedule", "Complete package"],
    },
];

pub static BOOKS: &[CatalogOption] = &[
    CatalogOption {
        id: "printed",
        title: "Printed Books",
        summary_label: "Printed Books",
        description: "Comprehensive printed study material delivered home",
        price: Money::from_rupees(2_999),
        features: &["Complete syllabus coverage", "Practice exercises", "Home delivery"],
    },
    CatalogOption {
        id: "digital",
        title: "E-Books",
        summary_label: "Digital Books",
        description: "Searchable digital material on every device",
        price: Money::from_rupees(1_999),
        features: &["Instant access", "Searchable content", "Regular updates"],
    },
    CatalogOption {
        id: "both",
        title: "Both (Combo)",
        summary_label: "Combo Books",
        description: "Printed and digital material together",
        price: Money::from_rupees(3_999),
        features: &["Printed + digital", "Best value", "Study anywhere"],
    },
];

pub static TEST_SERIES: &[CatalogOption] = &[
    CatalogOption {
        id: "basic",
        title: "Basic Test Series",
        summary_label: "Basic Test Series",
        description: "Foundation level practice tests",
        price: Money::from_rupees(999),
        features: &["15 Full-length tests", "Sectional tests", "Basic analytics", "PDF solutions"],
    },
    CatalogOption {
        id: "advanced",
        title: "Advanced Test Series",
        summary_label: "Advanced Test Series",
        description: "Comprehensive practice with detailed analysis",
        price: Money::from_rupees(1_999),
        features: &[
            "25 Full-length tests",
            "Sectional tests",
            "Advanced analytics",
            "Video solutions",
            "Peer comparison",
        ],
    },
    CatalogOption {
        id: "toppers",
        title: "Toppers Edition",
        summary_label: "Toppers Test Series",
        description: "Ultimate preparation for 99+ percentile",
        price: Money::from_rupees(2_999),
        features: &[
            "40 Full-length tests",
            "Sectional tests",
            "AI-powered analytics",
            "Video solutions",
            "Personal mentor feedback",
            "Toppers study group",
        ],
    },
];

pub static DOUBT_CHANNELS: &[CatalogOption] = &[
    CatalogOption {
        id: "whatsapp",
        title: "WhatsApp Support",
        summary_label: "Whatsapp Support",
        description: "Send doubts over WhatsApp and get answers within hours",
        price: Money::from_rupees(499),
        features: &["Text & image doubts", "Response within 12 hours"],
    },
    CatalogOption {
        id: "app",
        title: "DoubtPucho App",
        summary_label: "DoubtPucho Support",
        description: "Dedicated app with tracked doubt history",
        price: Money::from_rupees(799),
        features: &["Doubt history", "Video explanations", "Response within 6 hours"],
    },
    CatalogOption {
        id: "live",
        title: "Live Doubt Sessions",
        summary_label: "Live Support",
        description: "One-on-one live sessions with faculty",
        price: Money::from_rupees(1_499),
        features: &["Scheduled live calls", "Screen sharing", "Priority support"],
    },
];

pub static WAT_PI_OPTIONS: &[CatalogOption] = &[
    CatalogOption {
        id: "watPractice",
        title: "WAT Practice",
        summary_label: "WAT Practice",
        description: "Written Ability Test preparation with personalized feedback",
        price: Money::from_rupees(1_499),
        features: &[
            "30+ WAT topics",
            "Expert evaluation",
            "Writing tips & strategies",
            "Time management practice",
        ],
    },
    CatalogOption {
        id: "mockPI",
        title: "Mock Personal Interviews",
        summary_label: "Mock PI",
        description: "Practice interviews with industry experts",
        price: Money::from_rupees(1_999),
        features: &[
            "5 mock interviews",
            "Detailed feedback",
            "Interview tips",
            "Body language coaching",
        ],
    },
    CatalogOption {
        id: "iimAlumniPanel",
        title: "IIM Alumni Panel",
        summary_label: "IIM Alumni Panel",
        description: "Exclusive sessions with IIM alumni for insider tips",
        price: Money::from_rupees(2_499),
        features: &["Alumni interaction", "IIM insights", "Career guidance", "Success stories"],
    },
];

pub static COMPLIMENTARY_ADDONS: &[CatalogOption] = &[
    CatalogOption {
        id: "resume-building",
        title: "Resume Building",
        summary_label: "Resume Building",
        description: "Professional resume creation and optimization",
        price: Money::from_rupees(2_999),
        features: &[
            "ATS-optimized format",
            "Industry-specific templates",
            "Expert review",
            "Multiple revisions",
        ],
    },
    CatalogOption {
        id: "sop-evaluation",
        title: "SOP Evaluation",
        summary_label: "SOP Evaluation",
        description: "Statement of Purpose review and enhancement",
        price: Money::from_rupees(1_999),
        features: &[
            "Detailed feedback",
            "Structure optimization",
            "Content enhancement",
            "Admission expert review",
        ],
    },
    CatalogOption {
        id: "iim-profilizer",
        title: "IIM Profilizer Tool",
        summary_label: "IIM Profilizer",
        description: "AI-powered profile analysis for IIM selection",
        price: Money::from_rupees(1_499),
        features: &[
            "Profile strength analysis",
            "IIM recommendation",
            "Improvement suggestions",
            "Success probability",
        ],
    },
];

static COMPLIMENTARY_ADDON_IDS: Lazy<Vec<&'static str>> =
    Lazy::new(|| COMPLIMENTARY_ADDONS.iter().map(|addon| addon.id).collect());

/// Ids of the bonus items bundled with every plan.
pub fn complimentary_addon_ids() -> &'static [&'static str] {
    &COMPLIMENTARY_ADDON_IDS
}

type OptionIndex = HashMap<WizardField, HashMap<&'static str, &'static CatalogOption>>;

static OPTION_INDEX: Lazy<OptionIndex> = Lazy::new(|| {
    WizardField::ALL
        .into_iter()
        .map(|field| {
            let by_id = options_for(field)
                .iter()
                .map(|entry| (entry.id, entry))
                .collect();
            (field, by_id)
        })
        .collect()
});

/// Catalog backing `field`. Mentors live in [`MENTORS`] and return an empty
/// slice here.
pub fn options_for(field: WizardField) -> &'static [CatalogOption] {
    match field {
        WizardField::FocusAreas => FOCUS_AREAS,
        WizardField::LearningMode => LEARNING_MODES,
        WizardField::Mentors => &[],
        WizardField::Books => BOOKS,
        WizardField::TestSeries => TEST_SERIES,
        WizardField::DoubtSolving => DOUBT_CHANNELS,
        WizardField::WatPiPrep => WAT_PI_OPTIONS,
        WizardField::ComplimentaryAddons => COMPLIMENTARY_ADDONS,
    }
}

pub fn option(field: WizardField, id: &str) -> Option<&'static CatalogOption> {
    OPTION_INDEX
        .get(&field)
        .and_then(|by_id| by_id.get(id))
        .copied()
}

pub fn wat_pi_option(option: WatPiOption) -> Option<&'static CatalogOption> {
    self::option(WizardField::WatPiPrep, option.id())
}

fn known_ids(field: WizardField) -> Vec<&'static str> {
    match field {
        WizardField::Mentors => MENTORS.iter().map(|mentor| mentor.id).collect(),
        other => options_for(other).iter().map(|option| option.id).collect(),
    }
}

/// Maps user input to a catalog id, matching ids and titles without regard
/// to case. Unknown input yields an error carrying the closest id.
pub fn resolve_id(field: WizardField, input: &str) -> Result<&'static str, CourseError> {
    let trimmed = input.trim();
    let by_id = known_ids(field)
        .into_iter()
        .find(|id| id.eq_ignore_ascii_case(trimmed));
    let by_title = || match field {
        WizardField::Mentors => MENTORS
            .iter()
            .find(|mentor| mentor.name.eq_ignore_ascii_case(trimmed))
            .map(|mentor| mentor.id),
        other => options_for(other)
            .iter()
            .find(|option| option.title.eq_ignore_ascii_case(trimmed))
            .map(|option| option.id),
    };
    by_id.or_else(by_title).ok_or_else(|| CourseError::UnknownOption {
        field: field.id(),
        value: trimmed.to_string(),
        suggestion: closest_id(field, trimmed).map(str::to_string),
    })
}

/// Closest catalog id within a small edit distance.
pub fn closest_id(field: WizardField, input: &str) -> Option<&'static str> {
    let needle = input.to_ascii_lowercase();
    known_ids(field)
        .into_iter()
        .map(|id| (levenshtein(&id.to_ascii_lowercase(), &needle), id))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, id)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complimentary_ids_match_catalog() {
        assert_eq!(
            complimentary_addon_ids(),
            ["resume-building", "sop-evaluation", "iim-profilizer"]
        );
        let total: Money = COMPLIMENTARY_ADDONS.iter().map(|addon| addon.price).sum();
        assert_eq!(total, Money::from_rupees(6_497));
    }

    #[test]
    fn resolves_ids_and_titles() {
        assert_eq!(resolve_id(WizardField::FocusAreas, "QA").unwrap(), "qa");
        assert_eq!(
            resolve_id(WizardField::TestSeries, "toppers edition").unwrap(),
            "toppers"
        );
        assert_eq!(
            resolve_id(WizardField::Mentors, "Priya Sharma").unwrap(),
            "priya-sharma"
        );
    }

    #[test]
    fn unknown_ids_carry_a_suggestion() {
        let err = resolve_id(WizardField::LearningMode, "hybird").unwrap_err();
        assert_eq!(err.suggestion(), Some("hybrid"));
        let err = resolve_id(WizardField::Books, "papyrus scrolls").unwrap_err();
        assert_eq!(err.suggestion(), None);
    }

    #[test]
    fn indexes_options_by_field() {
        assert_eq!(
            option(WizardField::DoubtSolving, "live").map(|o| o.price),
            Some(Money::from_rupees(1_499))
        );
        assert_eq!(
            option(WizardField::LearningMode, "live").map(|o| o.price),
            Some(Money::from_rupees(5_000))
        );
        assert!(option(WizardField::Books, "audio").is_none());
        assert_eq!(
            wat_pi_option(WatPiOption::MockPi).map(|o| o.summary_label),
            Some("Mock PI")
        );
    }
}
