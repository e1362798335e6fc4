//! Performance sampling
//!
//! Synchronous and I/O-free apart from the optional asset inventory walk.
//! Missing platform telemetry degrades to None, never to a failure.

use std::path::Path;
use std::time::Instant;

use chrono::Local;

use crate::domain::{AssetInventory, AuditLog, PerfSnapshot};

/// Capture one performance snapshot
///
/// `started` is the runner's creation instant; `dom_count` is the element
/// count across every scanned document; `site_dir` enables the asset
/// inventory when a local site is being audited.
pub fn sample_performance(
    started: Instant,
    dom_count: usize,
    site_dir: Option<&Path>,
    log: &mut AuditLog,
) -> PerfSnapshot {
    log.info("⚡ Starting performance analysis...");

    let load_time_ms = started.elapsed().as_millis() as u64;
    let assets = site_dir.map(inventory_assets).unwrap_or_default();
    let estimated_load_ms = estimate_load_ms(&assets);

    let snapshot = PerfSnapshot {
        load_time_ms,
        dom_count,
        memory_usage: resident_memory_mib(),
        timestamp: Local::now(),
        assets,
        estimated_load_ms,
    };

    log.success(format!(
        "Performance scan complete: Load time {}ms, {} DOM elements, memory {}",
        snapshot.load_time_ms,
        snapshot.dom_count,
        snapshot.memory_display()
    ));

    snapshot
}

/// Count and size the site's files by type
fn inventory_assets(root: &Path) -> AssetInventory {
    let mut assets = AssetInventory::default();

    let walker = ignore::WalkBuilder::new(root).hidden(true).build();
    for entry in walker.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let size_mb = entry
            .metadata()
            .map(|m| m.len() as f64 / 1_048_576.0)
            .unwrap_or(0.0);

        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => {
                assets.html_count += 1;
                assets.html_mb += size_mb;
            }
            "css" => {
                assets.css_count += 1;
                assets.css_mb += size_mb;
            }
            "js" => {
                assets.js_count += 1;
                assets.js_mb += size_mb;
            }
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" => {
                assets.image_count += 1;
                assets.image_mb += size_mb;
            }
            _ => {}
        }
    }

    assets
}

/// Rough transfer-time estimate: ~500ms per MB plus 50ms request overhead
/// per file
fn estimate_load_ms(assets: &AssetInventory) -> u64 {
    (assets.total_mb() * 500.0).round() as u64 + assets.total_count() as u64 * 50
}

/// Resident set size in MiB, when the platform exposes it
#[cfg(target_os = "linux")]
fn resident_memory_mib() -> Option<f64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kib: f64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kib / 1024.0)
}

#[cfg(not(target_os = "linux"))]
fn resident_memory_mib() -> Option<f64> {
    None
}
