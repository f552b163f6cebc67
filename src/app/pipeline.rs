//! Shared "recompute" logic used by both CLI and TUI front-ends.
//!
//! Both front-ends turn their current input state into a `SampleInput`, call
//! [`recompute`], and then only deal with presentation.

use log::info;

use crate::chart::ChartData;
use crate::curve::{FLOW_RULES, rules};
use crate::domain::SampleInput;

/// All computed outputs of a single recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub chart: ChartData,
    /// Names of the flow adjustments that applied, in order.
    pub applied: Vec<&'static str>,
}

/// Generate the curve for `input` and derive everything the front-ends show.
pub fn recompute(input: SampleInput) -> RunOutput {
    let chart = ChartData::generate(input);
    let applied = rules::matching_rules(&FLOW_RULES, &input);

    if chart.points.is_empty() {
        info!("empty curve for pressure {}", input.pressure);
    }

    RunOutput { chart, applied }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlloyType;

    #[test]
    fn recompute_reports_applied_rules() {
        let run = recompute(SampleInput::new(100.0, 10.0, 120.0, AlloyType::Zinc));
        assert_eq!(run.applied, vec!["zinc alloy", "cold die"]);
        assert_eq!(run.chart.points.len(), 51);
    }
}
