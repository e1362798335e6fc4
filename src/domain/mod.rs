//! Core domain types for webaudit

mod log_event;
mod recommendation;
mod results;

pub use log_event::{AuditLog, LogEntry, LogLevel};
pub use recommendation::Recommendation;
pub use results::{
    AssetInventory, ImageIssue, ImageReport, LinkIssue, LinkReport, LinkStatus, PerfSnapshot,
    ScanResults,
};
