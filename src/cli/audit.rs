//! Full audit command

use anyhow::Result;

use webaudit::domain::ScanResults;

use super::CommandOptions;
use super::images::print_image_report;
use super::links::print_link_report;
use super::perf::print_perf_snapshot;

/// Run the full audit sequence and print every section
pub async fn audit_command(opts: &CommandOptions) -> Result<()> {
    let mut runner = opts.build_runner()?;
    let results = runner.run_all()?;
    print_results(&results);
    Ok(())
}

pub(super) fn print_results(results: &ScanResults) {
    print_link_report(&results.links);
    print_image_report(&results.images);
    if let Some(perf) = &results.performance {
        print_perf_snapshot(perf);
    }

    println!();
    println!("Recommendations:");
    if results.recommendations.is_empty() {
        println!("  ✅ No recommendations at this time. Site looks good!");
        return;
    }
    for rec in &results.recommendations {
        println!("  {}", rec);
    }
}
