use super::{mismatched_outcome, nothing_to_show};
use crate::application::dto::{AnalysisOutcome, AnalysisResponse};
use crate::dependency_graph::domain::{LoadOrder, PackageName};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// OrderFormatter adapter rendering a load order report
///
/// This adapter implements the ReportFormatter port for the `order` style.
/// Cycles lead the report when present; otherwise the numbered order does.
pub struct OrderFormatter;

impl OrderFormatter {
    pub fn new() -> Self {
        Self
    }

    /// `A → B → A`
    pub(crate) fn cycle_line(cycle: &[PackageName]) -> String {
        cycle
            .iter()
            .map(PackageName::as_str)
            .collect::<Vec<_>>()
            .join(" → ")
    }

    fn write_numbered(output: &mut String, names: &[PackageName]) -> std::fmt::Result {
        for (i, name) in names.iter().enumerate() {
            writeln!(output, "     {}. {}", i + 1, name)?;
        }
        Ok(())
    }

    fn write_report(output: &mut String, order: &LoadOrder) -> std::fmt::Result {
        if order.has_cycles() {
            writeln!(output, "   ❌ Cycles detected:")?;
            for cycle in &order.cycles {
                writeln!(output, "     • {}", Self::cycle_line(cycle))?;
            }

            if !order.order.is_empty() {
                writeln!(output)?;
                writeln!(output, "   Ordered ahead of the cycles:")?;
                Self::write_numbered(output, &order.order)?;
            }

            if !order.blocked.is_empty() {
                writeln!(output)?;
                writeln!(output, "   ⏸ Blocked behind a cycle:")?;
                for name in &order.blocked {
                    writeln!(output, "     • {}", name)?;
                }
            }
        } else {
            writeln!(output, "   ✅ Topological load order:")?;
            Self::write_numbered(output, &order.order)?;
        }
        Ok(())
    }
}

impl Default for OrderFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for OrderFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let order = match &response.outcome {
            AnalysisOutcome::Order(order) => order,
            AnalysisOutcome::NothingToShow => return Ok(nothing_to_show(response)),
            _ => return Err(mismatched_outcome("Order", response)),
        };

        let mut output = String::new();
        writeln!(
            output,
            "🔍 Load order for '{}' ({} mode, {} reachable packages):",
            response.start, response.mode, order.reachable_count
        )?;
        Self::write_report(&mut output, order)?;

        Ok(output)
    }
}
