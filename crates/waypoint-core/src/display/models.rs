//! Display implementations for domain models.
//!
//! Plans render as markdown timelines: one `###` heading per period followed
//! by the description and the skills, projects and resources lists.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    catalog::{plural, timeframe_label},
    models::{PlanHistoryEntry, PlanItem, TimeUnit},
};

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plan items laid out as a timeline with unit-specific headings.
pub struct Timeline<'a> {
    pub unit: TimeUnit,
    pub items: &'a [PlanItem],
}

impl Timeline<'_> {
    fn fmt_item(&self, f: &mut fmt::Formatter<'_>, position: usize, item: &PlanItem) -> fmt::Result {
        let number = item.number(position);
        if item.title.is_empty() {
            writeln!(f, "### {} {number}", self.unit.heading())?;
        } else {
            writeln!(f, "### {} {number}: {}", self.unit.heading(), item.title)?;
        }
        writeln!(f)?;

        if !item.description.is_empty() {
            writeln!(f, "{}", item.description)?;
            writeln!(f)?;
        }

        for (label, values) in [
            ("Skills", &item.skills),
            ("Projects", &item.projects),
            ("Resources", &item.resources),
        ] {
            if values.is_empty() {
                continue;
            }
            writeln!(f, "#### {label}")?;
            writeln!(f)?;
            for value in values {
                writeln!(f, "- {value}")?;
            }
            writeln!(f)?;
        }

        if let Some(milestone) = &item.milestone {
            writeln!(f, "**Milestone:** {milestone}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return writeln!(f, "No plan items.");
        }
        for (position, item) in self.items.iter().enumerate() {
            self.fmt_item(f, position, item)?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanHistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.role)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(
            f,
            "- Timeframe: {} ({})",
            timeframe_label(self.months),
            plural(self.weeks, "week")
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;
        writeln!(f, "## Timeline")?;
        writeln!(f)?;
        write!(
            f,
            "{}",
            Timeline {
                unit: self.unit,
                items: &self.plan,
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn item(index: Option<u32>, title: &str) -> PlanItem {
        PlanItem {
            index,
            title: title.to_string(),
            description: "Learn the basics".to_string(),
            skills: vec!["Python".to_string(), "SQL".to_string()],
            projects: vec![],
            resources: vec!["Intro course".to_string()],
            milestone: Some("First notebook".to_string()),
        }
    }

    #[test]
    fn test_timeline_uses_unit_heading_and_position_fallback() {
        let items = vec![item(Some(1), "Foundations"), item(None, "Statistics")];
        let output = Timeline {
            unit: TimeUnit::Month,
            items: &items,
        }
        .to_string();

        assert!(output.contains("### Month 1: Foundations"));
        assert!(output.contains("### Month 2: Statistics"));
        assert!(output.contains("#### Skills\n\n- Python\n- SQL"));
        assert!(output.contains("**Milestone:** First notebook"));
        assert!(!output.contains("#### Projects"));
    }

    #[test]
    fn test_entry_display() {
        let created_at = Timestamp::from_second(1_700_000_000).unwrap();
        let entry = PlanHistoryEntry::new(
            "Data Scientist",
            3,
            TimeUnit::Week,
            vec![item(Some(1), "Foundations")],
            created_at,
        );
        let output = entry.to_string();

        assert!(output.starts_with("# Data Scientist\n"));
        assert!(output.contains("- ID: 1700000000000"));
        assert!(output.contains("3 months (Fast transition) (12 weeks)"));
        assert!(output.contains("### Week 1: Foundations"));
    }

    #[test]
    fn test_empty_timeline() {
        let output = Timeline {
            unit: TimeUnit::Week,
            items: &[],
        }
        .to_string();
        assert_eq!(output, "No plan items.\n");
    }
}
