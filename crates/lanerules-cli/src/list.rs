//! # Rules Subcommand
//!
//! Lists every registered `(location, participant)` pair, one per line.

use std::io::Write;

use anyhow::Result;

use lanerules_traffic::TrafficRulesRegistry;

/// Execute the rules subcommand.
pub fn run_list(registry: &TrafficRulesRegistry, out: &mut dyn Write) -> Result<u8> {
    for key in registry.keys() {
        writeln!(out, "{key}")?;
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_us_rules() {
        let registry = lanerules_traffic::init_registry().unwrap();
        let mut out = Vec::new();
        assert_eq!(run_list(&registry, &mut out).unwrap(), 0);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "us/vehicle\nus/pedestrian\nus/bicycle\n");
    }
}
