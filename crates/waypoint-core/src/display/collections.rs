//! Collection wrapper types for displaying history and catalog listings.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::{
    catalog::{plural, timeframe_label, CareerCategory, Timeframe},
    models::PlanHistoryEntry,
};

/// Newtype wrapper for displaying a list of saved plans.
///
/// Each entry renders as a compact summary; the full timeline is only shown
/// when a single plan is opened.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use waypoint_core::{
///     display::HistoryEntries,
///     models::{PlanHistoryEntry, TimeUnit},
/// };
///
/// let entry = PlanHistoryEntry::new("Pharmacist", 6, TimeUnit::Week, vec![], Timestamp::now());
/// let output = HistoryEntries(vec![entry]).to_string();
/// assert!(output.contains("## Pharmacist"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HistoryEntries(pub Vec<PlanHistoryEntry>);

impl HistoryEntries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of entries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanHistoryEntry> {
        self.0.iter()
    }
}

impl Index<usize> for HistoryEntries {
    type Output = PlanHistoryEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a HistoryEntries {
    type Item = &'a PlanHistoryEntry;
    type IntoIter = std::slice::Iter<'a, PlanHistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for HistoryEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No saved plans yet.");
        }
        for entry in &self.0 {
            writeln!(f, "## {} (ID: {})", entry.role, entry.id)?;
            writeln!(f)?;
            writeln!(f, "- **Timeframe**: {}", timeframe_label(entry.months))?;
            writeln!(
                f,
                "- **Items**: {}",
                plural(u32::try_from(entry.plan.len()).unwrap_or(u32::MAX), entry.unit.as_str())
            )?;
            writeln!(f, "- **Created**: {}", LocalDateTime(&entry.created_at))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Selectable timeframes, marking the default.
pub struct Timeframes<'a> {
    pub options: &'a [Timeframe],
    pub default_months: u32,
}

impl fmt::Display for Timeframes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for option in self.options {
            let marker = if option.months == self.default_months {
                " *(default)*"
            } else {
                ""
            };
            writeln!(f, "- **{}**: {}{marker}", option.months, option.label)?;
        }
        Ok(())
    }
}

/// Career suggestions grouped by category.
pub struct CareerSuggestions<'a>(pub Vec<&'a CareerCategory>);

impl fmt::Display for CareerSuggestions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No matching career category.");
        }
        for category in &self.0 {
            writeln!(f, "## {}", category.name)?;
            writeln!(f)?;
            for career in category.careers {
                writeln!(f, "- {career}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{
        catalog::{career_category, DEFAULT_MONTHS, TIMEFRAMES},
        models::{PlanItem, TimeUnit},
    };

    #[test]
    fn test_history_entries_display() {
        let entry = PlanHistoryEntry::new(
            "Civil Engineer",
            1,
            TimeUnit::Week,
            vec![PlanItem::default(); 4],
            Timestamp::from_second(1_700_000_000).unwrap(),
        );
        let output = HistoryEntries(vec![entry]).to_string();
        assert!(output.contains("## Civil Engineer (ID: 1700000000000)"));
        assert!(output.contains("- **Timeframe**: 1 month (Quick start)"));
        assert!(output.contains("- **Items**: 4 weeks"));

        assert_eq!(HistoryEntries::default().to_string(), "No saved plans yet.\n");
    }

    #[test]
    fn test_timeframes_marks_default() {
        let output = Timeframes {
            options: &TIMEFRAMES,
            default_months: DEFAULT_MONTHS,
        }
        .to_string();
        assert!(output.contains("- **6**: 6 months (Standard) *(default)*"));
        assert_eq!(output.matches("*(default)*").count(), 1);
        assert_eq!(output.lines().count(), TIMEFRAMES.len());
    }

    #[test]
    fn test_career_suggestions() {
        let category = career_category("Creative").unwrap();
        let output = CareerSuggestions(vec![category]).to_string();
        assert!(output.starts_with("## Creative\n"));
        assert!(output.contains("- Brand Manager"));

        assert_eq!(
            CareerSuggestions(vec![]).to_string(),
            "No matching career category.\n"
        );
    }
}
