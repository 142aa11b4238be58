//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `planner_core` wiring: runs the
//!   normalizer and classifier over command-line input.
//! - Keep output deterministic for quick local sanity checks.

use planner_core::{classify, core_version, normalize, PlannerConfig};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        println!("planner_core version={}", core_version());
        println!("usage: planner_cli <ingredient line>");
        return;
    }

    let config = PlannerConfig::default();
    let table = config.keyword_table();
    let overrides = std::collections::BTreeMap::new();

    let line = args.join(" ");
    let name = normalize(&line);
    if name.is_empty() {
        println!("{line:?} -> (discarded)");
    } else {
        let category = classify(&name, &overrides, &table);
        println!("{line:?} -> {name:?} [{category}]");
    }
}
