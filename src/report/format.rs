//! Terminal formatting for generated curves.

use crate::chart::{ChartData, SERIES_LABEL, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::curve::{FLOW_RULES, rules};
use crate::domain::Point;

/// Format the run summary: inputs, applied adjustments, and chart bounds.
pub fn format_run_summary(chart: &ChartData) -> String {
    let input = &chart.input;
    let mut out = String::new();

    out.push_str(&format!("=== pq - {SERIES_LABEL} ===\n"));
    out.push_str(&format!(
        "Inputs: pressure={:.2} | speed={:.2} | die_temp={:.1} | alloy={}\n",
        input.pressure,
        input.speed,
        input.die_temp,
        input.alloy.display_name(),
    ));

    let applied = rules::matching_rules(&FLOW_RULES, input);
    let applied = if applied.is_empty() {
        "none".to_string()
    } else {
        applied.join(", ")
    };
    out.push_str(&format!(
        "Adjustments: {applied} (factor {:.4})\n",
        rules::flow_factor(&FLOW_RULES, input)
    ));

    out.push_str(&format!(
        "Points: n={} | x_max={:.2} | y_max={:.2}\n",
        chart.points.len(),
        chart.bounds.x_max,
        chart.bounds.y_max,
    ));
    if chart.points.is_empty() {
        out.push_str("(empty curve: pressure must be positive)\n");
    }

    out
}

/// Format curve points as an aligned table.
pub fn format_points_table(points: &[Point]) -> String {
    let mut out = String::new();
    out.push_str(format!("{:>5} {:>24} {:>20}", "#", X_AXIS_LABEL, Y_AXIS_LABEL).trim_end());
    out.push('\n');
    out.push_str(format!("{:-<5} {:-<24} {:-<20}", "", "", "").trim_end());
    out.push('\n');

    for (i, p) in points.iter().enumerate() {
        out.push_str(format!("{i:>5} {:>24.4} {:>20.4}", p.x, p.y).trim_end());
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AlloyType, SampleInput};

    #[test]
    fn summary_lists_applied_rules() {
        let chart = ChartData::generate(SampleInput::new(100.0, 10.0, 300.0, AlloyType::Aluminum));
        let txt = format_run_summary(&chart);
        assert!(txt.contains("alloy=Aluminum"), "{txt}");
        assert!(txt.contains("Adjustments: aluminum alloy, hot die (factor 1.1550)"), "{txt}");
        assert!(txt.contains("Points: n=51 | x_max=120.00"), "{txt}");
    }

    #[test]
    fn summary_flags_empty_curve() {
        let chart = ChartData::generate(SampleInput::new(-1.0, 10.0, 200.0, AlloyType::Other));
        let txt = format_run_summary(&chart);
        assert!(txt.contains("Adjustments: none"));
        assert!(txt.contains("(empty curve"));
    }

    #[test]
    fn table_golden_snapshot() {
        let txt = format_points_table(&[Point::new(0.0, 0.0), Point::new(2.0, 14.1421)]);
        let expected = concat!(
            "    #   Injection pressure (P)   Injection flow (Q)\n",
            "----- ------------------------ --------------------\n",
            "    0                   0.0000               0.0000\n",
            "    1                   2.0000              14.1421\n",
        );
        assert_eq!(txt, expected);
    }
}
