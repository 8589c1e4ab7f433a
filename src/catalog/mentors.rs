/// Mentor directory entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mentor {
    pub id: &'static str,
    pub name: &'static str,
    pub speciality: &'static str,
    pub rating: f32,
    pub experience_years: u8,
    pub students: &'static str,
    pub language: &'static str,
    /// Focus-area ids the mentor teaches.
    pub subjects: &'static [&'static str],
    pub achievements: &'static [&'static str],
}

impl Mentor {
    pub fn teaches(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s.eq_ignore_ascii_case(subject))
    }
}

/// Filter ids offered above the mentor list, with their labels.
pub static MENTOR_FILTERS: &[(&str, &str)] = &[
    ("all", "All Mentors"),
    ("qa", "Quant"),
    ("varc", "Verbal"),
    ("lrdi", "Reasoning"),
];

pub static MENTORS: &[Mentor] = &[
    Mentor {
        id: "rajesh-kumar",
        name: "Rajesh Kumar",
        speciality: "Quantitative Aptitude",
        rating: 4.9,
        experience_years: 12,
        students: "15,000+",
        language: "Hindi/English",
        subjects: &["qa"],
        achievements: &["IIM Alumnus", "CAT 99.8%ile"],
    },
    Mentor {
        id: "priya-sharma",
        name: "Priya Sharma",
        speciality: "Verbal Ability & RC",
        rating: 4.8,
        experience_years: 10,
        students: "12,000+",
        language: "English",
        subjects: &["varc"],
        achievements: &["Published Author", "XLRI Alumna"],
    },
    Mentor {
        id: "amit-verma",
        name: "Amit Verma",
        speciality: "Logical Reasoning",
        rating: 4.9,
        experience_years: 15,
        students: "20,000+",
        language: "Hindi/English",
        subjects: &["lrdi"],
        achievements: &["FMS Alumnus", "CAT Topper"],
    },
    Mentor {
        id: "sneha-patel",
        name: "Sneha Patel",
        speciality: "Data Interpretation",
        rating: 4.7,
        experience_years: 8,
        students: "8,000+",
        language: "English/Gujarati",
        subjects: &["lrdi"],
        achievements: &["IIMA Alumna", "Industry Expert"],
    },
    Mentor {
        id: "rohit-singh",
        name: "Rohit Singh",
        speciality: "All Sections",
        rating: 4.9,
        experience_years: 18,
        students: "25,000+",
        language: "Hindi/English",
        subjects: &["qa", "varc", "lrdi"],
        achievements: &["IIMB Alumnus", "CAT 100%ile", "Master Trainer"],
    },
];

pub fn mentor(id: &str) -> Option<&'static Mentor> {
    MENTORS.iter().find(|mentor| mentor.id == id)
}

/// Mentors teaching `filter`; `all` returns the whole directory.
pub fn mentors_for_subject(filter: &str) -> Vec<&'static Mentor> {
    if filter.eq_ignore_ascii_case("all") {
        return MENTORS.iter().collect();
    }
    MENTORS.iter().filter(|mentor| mentor.teaches(filter)).collect()
}
