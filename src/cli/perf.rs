//! Performance scan command

use anyhow::Result;

use webaudit::domain::PerfSnapshot;

use super::CommandOptions;

/// Sample and print the site's performance figures
pub async fn perf_command(opts: &CommandOptions) -> Result<()> {
    let mut runner = opts.build_runner()?;
    let snapshot = runner.sample_performance()?;
    print_perf_snapshot(&snapshot);
    Ok(())
}

pub(super) fn print_perf_snapshot(snapshot: &PerfSnapshot) {
    println!();
    println!("Performance ({})", snapshot.timestamp.format("%Y-%m-%d %H:%M:%S"));
    println!("  Load time:   {}ms", snapshot.load_time_ms);
    println!("  DOM elements: {}", snapshot.dom_count);
    println!("  Memory:      {}", snapshot.memory_display());

    let assets = &snapshot.assets;
    if assets.total_count() > 0 {
        println!(
            "  Assets:      HTML({}) CSS({}) JS({}) IMG({})",
            assets.html_count, assets.css_count, assets.js_count, assets.image_count
        );
        println!(
            "  Size:        {:.2}MB (HTML: {:.2}MB, CSS: {:.2}MB, JS: {:.2}MB, Images: {:.2}MB)",
            assets.total_mb(),
            assets.html_mb,
            assets.css_mb,
            assets.js_mb,
            assets.image_mb
        );
        println!("  Est. transfer: {}ms", snapshot.estimated_load_ms);
    }
}
