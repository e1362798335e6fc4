//! Link scan command

use anyhow::Result;

use webaudit::domain::LinkReport;

use super::{CommandOptions, badge};

/// Scan the site's hyperlinks and print the outcome
pub async fn links_command(opts: &CommandOptions) -> Result<()> {
    let mut runner = opts.build_runner()?;
    let report = runner.scan_links()?;
    print_link_report(&report);
    Ok(())
}

pub(super) fn print_link_report(report: &LinkReport) {
    println!();
    println!(
        "Links: {} total — {}",
        report.total,
        badge(report.broken.len(), "ISSUES")
    );

    if report.broken.is_empty() {
        println!("  ✅ All links are healthy!");
        return;
    }
    for issue in &report.broken {
        println!("  🔗 {} ({})", issue.url, issue.status);
    }
}
