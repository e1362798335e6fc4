//! Report command implementation

use anyhow::Result;

use webaudit::report::write_reports;

use super::CommandOptions;
use super::audit::print_results;

/// Run a full audit and write the JSON + HTML report files
pub async fn report_command(opts: &CommandOptions) -> Result<()> {
    let mut runner = opts.build_runner()?;
    let results = runner.run_all()?;
    print_results(&results);

    let report_dir = opts.work_dir.join(&runner.config().settings.report_dir);
    let paths = write_reports(&results, &runner.log, &opts.work_dir, &report_dir)?;

    println!();
    println!("Report written:");
    println!("  {}", paths.json.display());
    println!("  {}", paths.html.display());

    Ok(())
}
