use super::OrderFormatter;
use crate::application::dto::NpmComparison;
use crate::dependency_graph::domain::PackageName;
use crate::shared::Result;
use std::fmt::Write;

/// Number of entries listed per side
const PREVIEW_LIMIT: usize = 20;

/// Fixed explanations for why the two orders differ
const NOTES: &[&str] = &[
    "npm hoists and flattens packages, honours lockfiles and handles peer/optional dependencies, which all change the final layout",
    "our order is a topological order of declared dependencies; npm may install packages in parallel",
    "package-lock.json and the npm cache influence version resolution and order",
    "peerDependencies and optionalDependencies are not followed here",
];

/// ComparisonFormatter adapter rendering the npm comparison report
pub struct ComparisonFormatter;

impl ComparisonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn preview(names: &[PackageName]) -> String {
        if names.is_empty() {
            return "(none)".to_string();
        }
        names
            .iter()
            .take(PREVIEW_LIMIT)
            .map(PackageName::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn write_list(output: &mut String, title: &str, names: &[PackageName]) -> std::fmt::Result {
        writeln!(output)?;
        writeln!(output, "   {} (first {}):", title, PREVIEW_LIMIT)?;
        for (i, name) in names.iter().take(PREVIEW_LIMIT).enumerate() {
            writeln!(output, "     {}. {}", i + 1, name)?;
        }
        Ok(())
    }

    pub fn format(&self, comparison: &NpmComparison) -> Result<String> {
        let ours = &comparison.our_order;
        let mut output = String::new();

        writeln!(
            output,
            "🔁 Comparison with npm for {}@{}:",
            comparison.package, comparison.version
        )?;
        writeln!(output, "   • npm order (count): {}", comparison.npm_order.len())?;
        writeln!(output, "   • our order (count): {}", ours.order.len())?;

        Self::write_list(&mut output, "npm", &comparison.npm_order)?;
        Self::write_list(&mut output, "ours", &ours.order)?;

        writeln!(output)?;
        writeln!(output, "   Differences (packages present on one side only):")?;
        writeln!(
            output,
            "     • in npm, not in ours: {}",
            Self::preview(&comparison.only_in_npm)
        )?;
        writeln!(
            output,
            "     • in ours, not in npm: {}",
            Self::preview(&comparison.only_in_ours)
        )?;

        if ours.has_cycles() {
            writeln!(output)?;
            writeln!(output, "   ❗ Our graph has cycles (they affect the order):")?;
            for cycle in &ours.cycles {
                writeln!(output, "     • {}", OrderFormatter::cycle_line(cycle))?;
            }
        }

        writeln!(output)?;
        writeln!(output, "   Why the orders can differ:")?;
        for note in NOTES {
            writeln!(output, "     • {}", note)?;
        }

        Ok(output)
    }
}

impl Default for ComparisonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_graph::domain::LoadOrder;

    fn names(list: &[&str]) -> Vec<PackageName> {
        list.iter().map(|n| PackageName::new(*n)).collect()
    }

    fn comparison(cycles: Vec<Vec<PackageName>>) -> NpmComparison {
        NpmComparison {
            package: PackageName::new("express"),
            version: "4.18.2".to_string(),
            npm_order: names(&["express", "accepts", "mime-types"]),
            our_order: LoadOrder {
                order: names(&["express", "accepts", "negotiator"]),
                cycles,
                blocked: vec![],
                reachable_count: 3,
            },
            only_in_npm: names(&["mime-types"]),
            only_in_ours: names(&["negotiator"]),
        }
    }

    #[test]
    fn test_format_comparison() {
        let output = ComparisonFormatter::new().format(&comparison(vec![])).unwrap();

        assert!(output.starts_with("🔁 Comparison with npm for express@4.18.2:\n"));
        assert!(output.contains("• npm order (count): 3"));
        assert!(output.contains("• in npm, not in ours: mime-types"));
        assert!(output.contains("• in ours, not in npm: negotiator"));
        assert!(output.contains("Why the orders can differ:"));
        assert!(!output.contains("cycles"));
    }

    #[test]
    fn test_format_comparison_with_cycles() {
        let output = ComparisonFormatter::new()
            .format(&comparison(vec![names(&["a", "b", "a"])]))
            .unwrap();
        assert!(output.contains("• a → b → a"));
    }

    #[test]
    fn test_preview_limits_and_empty() {
        let many: Vec<PackageName> = (0..30).map(|i| PackageName::new(format!("p{}", i))).collect();
        let preview = ComparisonFormatter::preview(&many);
        assert_eq!(preview.split(", ").count(), PREVIEW_LIMIT);
        assert_eq!(ComparisonFormatter::preview(&[]), "(none)");
    }
}
