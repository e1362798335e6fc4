//! Report generation
//!
//! Writes a timestamped JSON dump and an HTML summary of the most recent
//! audit into the configured reports directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::{AuditLog, LogEntry, ScanResults};

/// Locations the report writer produced
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub html: PathBuf,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    generated: DateTime<Local>,
    site: String,
    results: &'a ScanResults,
    log: &'a [LogEntry],
}

/// Write both report files for one audit run
pub fn write_reports(
    results: &ScanResults,
    log: &AuditLog,
    site: &Path,
    report_dir: &Path,
) -> Result<ReportPaths> {
    std::fs::create_dir_all(report_dir).with_context(|| {
        format!(
            "Failed to create report directory: {}",
            report_dir.display()
        )
    })?;

    let generated = Local::now();
    let stamp = generated.format("%Y%m%d_%H%M%S");

    let document = ReportDocument {
        generated,
        site: site.display().to_string(),
        results,
        log: log.entries(),
    };

    let json_path = report_dir.join(format!("report_{}.json", stamp));
    let json = serde_json::to_string_pretty(&document)?;
    std::fs::write(&json_path, json)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;

    let html_path = report_dir.join(format!("report_{}.html", stamp));
    std::fs::write(&html_path, render_html(&document))
        .with_context(|| format!("Failed to write {}", html_path.display()))?;

    Ok(ReportPaths {
        json: json_path,
        html: html_path,
    })
}

fn render_html(doc: &ReportDocument<'_>) -> String {
    let results = doc.results;

    let link_badge = badge(results.links.broken.len(), "ISSUES");
    let image_badge = badge(results.images.broken.len(), "BROKEN");

    let mut link_items = String::new();
    if results.links.broken.is_empty() {
        link_items.push_str("<li>✅ All links are healthy!</li>");
    } else {
        for issue in &results.links.broken {
            link_items.push_str(&format!(
                "<li>🔗 {} ({})</li>",
                escape(&issue.url),
                issue.status
            ));
        }
    }

    let mut image_items = String::new();
    if results.images.broken.is_empty() {
        image_items.push_str(&format!(
            "<li>✅ All {} images loaded successfully!</li>",
            results.images.ok
        ));
    } else {
        for issue in &results.images.broken {
            image_items.push_str(&format!(
                "<li>🖼️ {}<br/><small>Alt: {}</small></li>",
                escape(&issue.src),
                escape(&issue.alt)
            ));
        }
    }

    let mut recommendation_items = String::new();
    if results.recommendations.is_empty() {
        recommendation_items
            .push_str("<li>✅ No recommendations at this time. Site looks good!</li>");
    } else {
        for rec in &results.recommendations {
            recommendation_items.push_str(&format!(
                "<li><strong>{} {}</strong><br/><small>{}</small></li>",
                rec.icon,
                escape(&rec.title),
                escape(&rec.description)
            ));
        }
    }

    let perf_section = match &results.performance {
        Some(perf) => format!(
            "<p>Load time: {}ms | DOM elements: {} | Memory: {} | Estimated transfer: {}ms</p>\
             <p>Assets: {} HTML, {} CSS, {} JS, {} images ({:.2}MB total)</p>",
            perf.load_time_ms,
            perf.dom_count,
            perf.memory_display(),
            perf.estimated_load_ms,
            perf.assets.html_count,
            perf.assets.css_count,
            perf.assets.js_count,
            perf.assets.image_count,
            perf.assets.total_mb(),
        ),
        None => "<p>No performance snapshot captured.</p>".to_string(),
    };

    let mut log_lines = String::new();
    for entry in doc.log {
        log_lines.push_str(&format!("<div>{}</div>", escape(&entry.to_string())));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Website Audit Report</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; background: #f5f5f5; }}
        .header {{ background: #2c3e50; color: white; padding: 20px; border-radius: 5px; }}
        .section {{ background: white; margin: 20px 0; padding: 20px; border-radius: 5px; border-left: 4px solid #3498db; }}
        .badge {{ display: inline-block; padding: 3px 10px; border-radius: 3px; color: white; font-weight: bold; }}
        .pass {{ background: #27ae60; }}
        .fail {{ background: #e74c3c; }}
        .log {{ font-family: monospace; font-size: 12px; background: #2c3e50; color: #ecf0f1; padding: 15px; border-radius: 5px; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>Website Audit Report</h1>
        <p>Site: {site} | Generated: {generated}</p>
    </div>
    <div class="section">
        <h2>Links <span class="badge {link_class}">{link_badge}</span></h2>
        <p>{link_total} links scanned</p>
        <ul>{link_items}</ul>
    </div>
    <div class="section">
        <h2>Images <span class="badge {image_class}">{image_badge}</span></h2>
        <p>{image_total} images scanned, {image_ok} loaded</p>
        <ul>{image_items}</ul>
    </div>
    <div class="section">
        <h2>Performance</h2>
        {perf_section}
    </div>
    <div class="section">
        <h2>Recommendations</h2>
        <ul>{recommendation_items}</ul>
    </div>
    <div class="section">
        <h2>Audit Log</h2>
        <div class="log">{log_lines}</div>
    </div>
</body>
</html>
"#,
        site = escape(&doc.site),
        generated = doc.generated.format("%Y-%m-%d %H:%M:%S"),
        link_class = badge_class(results.links.broken.len()),
        link_badge = link_badge,
        link_total = results.links.total,
        link_items = link_items,
        image_class = badge_class(results.images.broken.len()),
        image_badge = image_badge,
        image_total = results.images.total,
        image_ok = results.images.ok,
        image_items = image_items,
        perf_section = perf_section,
        recommendation_items = recommendation_items,
        log_lines = log_lines,
    )
}

fn badge(broken: usize, noun: &str) -> String {
    if broken == 0 {
        "PASS".to_string()
    } else {
        format!("{} {}", broken, noun)
    }
}

fn badge_class(broken: usize) -> &'static str {
    if broken == 0 { "pass" } else { "fail" }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
