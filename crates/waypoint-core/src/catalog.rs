//! Static catalog data for the planner form: timeframe options and popular
//! career suggestions.

/// Default timeframe in months.
pub const DEFAULT_MONTHS: u32 = 6;

/// Shortest selectable timeframe in months.
pub const MIN_MONTHS: u32 = 1;

/// Longest selectable timeframe in months.
pub const MAX_MONTHS: u32 = 24;

/// Selectable timeframe with its human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeframe {
    pub months: u32,
    pub label: &'static str,
}

/// Timeframe options offered to the user, shortest first.
pub const TIMEFRAMES: [Timeframe; 9] = [
    Timeframe {
        months: 1,
        label: "1 month (Quick start)",
    },
    Timeframe {
        months: 2,
        label: "2 months (Accelerated)",
    },
    Timeframe {
        months: 3,
        label: "3 months (Fast transition)",
    },
    Timeframe {
        months: 4,
        label: "4 months (Solid foundation)",
    },
    Timeframe {
        months: 5,
        label: "5 months (Focused learning)",
    },
    Timeframe {
        months: 6,
        label: "6 months (Standard)",
    },
    Timeframe {
        months: 12,
        label: "12 months (Comprehensive)",
    },
    Timeframe {
        months: 18,
        label: "18 months (Extensive)",
    },
    Timeframe {
        months: 24,
        label: "24 months (Complete transformation)",
    },
];

/// Group of related career suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerCategory {
    pub name: &'static str,
    pub careers: &'static [&'static str],
}

/// Popular careers grouped by field.
pub const POPULAR_CAREERS: [CareerCategory; 5] = [
    CareerCategory {
        name: "Technology",
        careers: &[
            "Software Developer",
            "Data Scientist",
            "UI/UX Designer",
            "DevOps Engineer",
            "Product Manager",
            "Cybersecurity Analyst",
            "Mobile App Developer",
            "Cloud Architect",
        ],
    },
    CareerCategory {
        name: "Business",
        careers: &[
            "Business Analyst",
            "Project Manager",
            "Marketing Manager",
            "Sales Manager",
            "Financial Analyst",
            "Operations Manager",
            "Human Resources Manager",
            "Consultant",
        ],
    },
    CareerCategory {
        name: "Healthcare",
        careers: &[
            "Registered Nurse",
            "Physical Therapist",
            "Medical Assistant",
            "Healthcare Administrator",
            "Pharmacist",
            "Medical Technologist",
            "Occupational Therapist",
            "Clinical Research Coordinator",
        ],
    },
    CareerCategory {
        name: "Engineering",
        careers: &[
            "Mechanical Engineer",
            "Electrical Engineer",
            "Civil Engineer",
            "Chemical Engineer",
            "Industrial Engineer",
            "Aerospace Engineer",
            "Environmental Engineer",
            "Biomedical Engineer",
        ],
    },
    CareerCategory {
        name: "Creative",
        careers: &[
            "Graphic Designer",
            "Content Writer",
            "Video Editor",
            "Social Media Manager",
            "Photographer",
            "Web Designer",
            "Digital Marketing Specialist",
            "Brand Manager",
        ],
    },
];

/// Label for a timeframe, falling back to a plain month count.
pub fn timeframe_label(months: u32) -> String {
    TIMEFRAMES
        .iter()
        .find(|t| t.months == months)
        .map_or_else(|| plural(months, "month"), |t| t.label.to_string())
}

/// Finds a category by case-insensitive name.
pub fn career_category(name: &str) -> Option<&'static CareerCategory> {
    POPULAR_CAREERS
        .iter()
        .find(|category| category.name.eq_ignore_ascii_case(name.trim()))
}

/// "1 month", "3 months".
pub fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframes_are_within_bounds() {
        assert!(TIMEFRAMES
            .iter()
            .all(|t| (MIN_MONTHS..=MAX_MONTHS).contains(&t.months)));
        assert!(TIMEFRAMES.iter().any(|t| t.months == DEFAULT_MONTHS));
    }

    #[test]
    fn test_timeframe_label_fallback() {
        assert_eq!(timeframe_label(6), "6 months (Standard)");
        assert_eq!(timeframe_label(7), "7 months");
        assert_eq!(timeframe_label(1), "1 month (Quick start)");
    }

    #[test]
    fn test_category_lookup() {
        let category = career_category(" healthcare ").unwrap();
        assert_eq!(category.name, "Healthcare");
        assert!(category.careers.contains(&"Pharmacist"));
        assert!(career_category("Astronomy").is_none());
    }
}
