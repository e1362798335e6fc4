use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

use super::Recommendation;

/// Aggregated results of one audit run
///
/// Built by the runner and passed explicitly into the recommendation engine
/// and the report writer. One instance per run, nothing global.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResults {
    pub links: LinkReport,
    pub images: ImageReport,
    pub performance: Option<PerfSnapshot>,
    pub recommendations: Vec<Recommendation>,
}

/// Outcome of the link scan
#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkReport {
    /// Every hyperlink enumerated, probed or not
    pub total: usize,
    pub broken: Vec<LinkIssue>,
    /// Healthy link targets, deduplicated, insertion order preserved
    pub ok: Vec<String>,
}

impl LinkReport {
    /// Record a healthy link target (set semantics)
    pub fn record_ok(&mut self, url: &str) {
        if !self.ok.iter().any(|u| u == url) {
            self.ok.push(url.to_string());
        }
    }
}

/// A hyperlink whose existence probe did not come back healthy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkIssue {
    pub url: String,
    pub status: LinkStatus,
}

/// Probe outcome for a broken link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// The probe answered with a non-success status code
    Code(u16),
    /// The probe could not reach the target at all
    Unreachable,
}

impl std::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkStatus::Code(code) => write!(f, "{}", code),
            LinkStatus::Unreachable => write!(f, "UNREACHABLE"),
        }
    }
}

// Serializes as the bare status code, or the string "UNREACHABLE"
impl Serialize for LinkStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LinkStatus::Code(code) => serializer.serialize_u16(*code),
            LinkStatus::Unreachable => serializer.serialize_str("UNREACHABLE"),
        }
    }
}

/// Outcome of the image scan
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageReport {
    /// Every image element with a src attribute
    pub total: usize,
    /// Images that resolved and decoded with a nonzero height
    pub ok: usize,
    pub broken: Vec<ImageIssue>,
    /// Healthy images carrying no alt text
    pub missing_alt: Vec<String>,
}

/// An image that is referenced but does not render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageIssue {
    pub src: String,
    pub alt: String,
}

/// One immutable performance snapshot per run
#[derive(Debug, Clone, Serialize)]
pub struct PerfSnapshot {
    /// Elapsed wall-clock ms since the runner was created
    pub load_time_ms: u64,
    /// Element count across every scanned document
    pub dom_count: usize,
    /// Resident memory in MiB, None when the platform exposes nothing
    pub memory_usage: Option<f64>,
    pub timestamp: DateTime<Local>,
    pub assets: AssetInventory,
    /// Rough transfer-time estimate derived from asset sizes
    pub estimated_load_ms: u64,
}

impl PerfSnapshot {
    /// Memory figure for display, two decimals or the "N/A" sentinel
    pub fn memory_display(&self) -> String {
        match self.memory_usage {
            Some(mib) => format!("{:.2}MB", mib),
            None => "N/A".to_string(),
        }
    }
}

/// Per-type file counts and sizes for the audited site directory
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssetInventory {
    pub html_count: usize,
    pub css_count: usize,
    pub js_count: usize,
    pub image_count: usize,
    pub html_mb: f64,
    pub css_mb: f64,
    pub js_mb: f64,
    pub image_mb: f64,
}

impl AssetInventory {
    pub fn total_count(&self) -> usize {
        self.html_count + self.css_count + self.js_count + self.image_count
    }

    pub fn total_mb(&self) -> f64 {
        self.html_mb + self.css_mb + self.js_mb + self.image_mb
    }
}
