use std::fmt;

use wayfinder_core::search::SearchReport;

/// Output one search report in human-readable format: a label line,
/// then the path and its length, or the absence message.
pub fn output_human<N: fmt::Display>(report: &SearchReport<N>) {
    match report.limit {
        Some(limit) => println!(
            "{} {} {} -> {} (limit {}):",
            report.algorithm, report.topology, report.start, report.goal, limit
        ),
        None => println!(
            "{} {} {} -> {}:",
            report.algorithm, report.topology, report.start, report.goal
        ),
    }

    if let Some(expansions) = report.expansions {
        println!("  Expansions: {}", expansions);
    }

    match &report.path {
        Some(path) => {
            let sequence: Vec<String> = path.iter().map(ToString::to_string).collect();
            println!("  {}", sequence.join(" -> "));
            println!(
                "  Path length ({}): {}",
                report.topology.step_word(),
                path.len() - 1
            );
        }
        None if report.limit.is_some() => println!("  No path found within depth limit."),
        None => println!("  No path found."),
    }
}
