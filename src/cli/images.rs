//! Image scan command

use anyhow::Result;

use webaudit::domain::ImageReport;

use super::{CommandOptions, badge};

/// Scan the site's images and print the outcome
pub async fn images_command(opts: &CommandOptions) -> Result<()> {
    let mut runner = opts.build_runner()?;
    let report = runner.scan_images()?;
    print_image_report(&report);
    Ok(())
}

pub(super) fn print_image_report(report: &ImageReport) {
    println!();
    println!(
        "Images: {} total, {} loaded — {}",
        report.total,
        report.ok,
        badge(report.broken.len(), "BROKEN")
    );

    if report.broken.is_empty() {
        println!("  ✅ All {} images loaded successfully!", report.ok);
    } else {
        for issue in &report.broken {
            println!("  🖼️ {} (alt: {})", issue.src, issue.alt);
        }
    }

    if !report.missing_alt.is_empty() {
        println!("  Missing alt text:");
        for src in &report.missing_alt {
            println!("    - {}", src);
        }
    }
}
