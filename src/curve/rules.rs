//! Flow adjustment rules.
//!
//! Each rule is a predicate over the sample input plus a multiplier. Rules are
//! applied in list order; every rule whose predicate holds scales the flow.
//! Alloy rules come first, then the die-temperature bands, so both kinds can
//! apply to the same sample.

use crate::domain::{AlloyType, SampleInput};

/// Die temperature above which flow is boosted.
pub const HOT_DIE_THRESHOLD: f64 = 250.0;
/// Die temperature below which flow is reduced.
pub const COLD_DIE_THRESHOLD: f64 = 150.0;

/// A single `(predicate, multiplier)` adjustment.
#[derive(Clone, Copy)]
pub struct FlowRule {
    pub name: &'static str,
    pub applies: fn(&SampleInput) -> bool,
    pub factor: f64,
}

impl FlowRule {
    /// Scale `q` if this rule matches `input`.
    pub fn apply(&self, input: &SampleInput, q: f64) -> f64 {
        if (self.applies)(input) { q * self.factor } else { q }
    }
}

impl std::fmt::Debug for FlowRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowRule")
            .field("name", &self.name)
            .field("factor", &self.factor)
            .finish()
    }
}

fn is_aluminum(input: &SampleInput) -> bool {
    input.alloy == AlloyType::Aluminum
}

fn is_zinc(input: &SampleInput) -> bool {
    input.alloy == AlloyType::Zinc
}

// NaN temperatures fail both comparisons and leave the flow unchanged.
fn is_hot_die(input: &SampleInput) -> bool {
    input.die_temp > HOT_DIE_THRESHOLD
}

fn is_cold_die(input: &SampleInput) -> bool {
    input.die_temp < COLD_DIE_THRESHOLD
}

/// The adjustment chain, in application order.
pub const FLOW_RULES: [FlowRule; 4] = [
    FlowRule {
        name: "aluminum alloy",
        applies: is_aluminum,
        factor: 1.1,
    },
    FlowRule {
        name: "zinc alloy",
        applies: is_zinc,
        factor: 0.9,
    },
    FlowRule {
        name: "hot die",
        applies: is_hot_die,
        factor: 1.05,
    },
    FlowRule {
        name: "cold die",
        applies: is_cold_die,
        factor: 0.95,
    },
];

/// Apply every matching rule to a base flow value.
pub fn adjust_flow(rules: &[FlowRule], input: &SampleInput, q: f64) -> f64 {
    rules.iter().fold(q, |q, rule| rule.apply(input, q))
}

/// Combined multiplier of all matching rules (1.0 when none match).
pub fn flow_factor(rules: &[FlowRule], input: &SampleInput) -> f64 {
    adjust_flow(rules, input, 1.0)
}

/// Names of the rules that match `input`, in application order.
pub fn matching_rules(rules: &[FlowRule], input: &SampleInput) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(input))
        .map(|rule| rule.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(die_temp: f64, alloy: AlloyType) -> SampleInput {
        SampleInput::new(100.0, 10.0, die_temp, alloy)
    }

    #[test]
    fn neutral_input_matches_nothing() {
        let neutral = input(200.0, AlloyType::Other);
        assert!(matching_rules(&FLOW_RULES, &neutral).is_empty());
        assert_eq!(flow_factor(&FLOW_RULES, &neutral), 1.0);
    }

    #[test]
    fn alloy_and_temperature_rules_stack() {
        let hot_aluminum = input(300.0, AlloyType::Aluminum);
        assert_eq!(
            matching_rules(&FLOW_RULES, &hot_aluminum),
            vec!["aluminum alloy", "hot die"]
        );
        assert_eq!(flow_factor(&FLOW_RULES, &hot_aluminum), 1.0 * 1.1 * 1.05);

        let cold_zinc = input(100.0, AlloyType::Zinc);
        assert_eq!(matching_rules(&FLOW_RULES, &cold_zinc), vec!["zinc alloy", "cold die"]);
        assert_eq!(flow_factor(&FLOW_RULES, &cold_zinc), 1.0 * 0.9 * 0.95);
    }

    #[test]
    fn temperature_band_edges_are_neutral() {
        assert_eq!(flow_factor(&FLOW_RULES, &input(250.0, AlloyType::Other)), 1.0);
        assert_eq!(flow_factor(&FLOW_RULES, &input(150.0, AlloyType::Other)), 1.0);
        assert_eq!(flow_factor(&FLOW_RULES, &input(250.5, AlloyType::Other)), 1.05);
        assert_eq!(flow_factor(&FLOW_RULES, &input(149.5, AlloyType::Other)), 0.95);
    }

    #[test]
    fn nan_temperature_applies_no_band() {
        let nan_temp = input(f64::NAN, AlloyType::Zinc);
        assert_eq!(matching_rules(&FLOW_RULES, &nan_temp), vec!["zinc alloy"]);
    }

    #[test]
    fn custom_rule_lists_are_supported() {
        let only_hot = [FLOW_RULES[2]];
        let hot_zinc = input(300.0, AlloyType::Zinc);
        assert_eq!(adjust_flow(&only_hot, &hot_zinc, 2.0), 2.0 * 1.05);
        assert_eq!(adjust_flow(&[], &hot_zinc, 2.0), 2.0);
    }
}
