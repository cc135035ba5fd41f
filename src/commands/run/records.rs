use wayfinder_core::search::SearchReport;

/// Output one search report in records format: an `H` header line with
/// the run's key=value summary, then one `P <index> <node>` line per
/// path element. `token` renders a node for the line-oriented format.
pub fn output_records<N>(report: &SearchReport<N>, token: impl Fn(&N) -> String) {
    let mut header = format!(
        "H wayfinder=1 records=1 mode=search.{} topology={} start={} goal={} found={}",
        report.algorithm.id(),
        report.topology,
        token(&report.start),
        token(&report.goal),
        report.found
    );
    if let Some(steps) = report.steps {
        header.push_str(&format!(" steps={}", steps));
    }
    if let Some(limit) = report.limit {
        header.push_str(&format!(" limit={}", limit));
    }
    if let Some(expansions) = report.expansions {
        header.push_str(&format!(" expansions={}", expansions));
    }
    println!("{}", header);

    if let Some(path) = &report.path {
        for (index, node) in path.iter().enumerate() {
            println!("P {} {}", index, token(node));
        }
    }
}
