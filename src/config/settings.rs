//! Settings configuration types

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Also probe external (http/https) links instead of assuming them
    /// reachable
    #[serde(default = "default_include_external")]
    pub include_external: bool,

    /// Timeout for a single link probe
    #[serde(default = "default_link_timeout_secs")]
    pub link_timeout_secs: u64,

    /// User-Agent header sent with link probes
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Load time above this (ms) triggers the optimization advisory
    #[serde(default = "default_slow_load_ms")]
    pub slow_load_ms: u64,

    /// Element count above this triggers the DOM complexity advisory
    #[serde(default = "default_dom_warning")]
    pub dom_warning: usize,

    /// Viewport width (px) the audit is assumed to run at
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    /// Widths at or below this count as a mobile layout
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,

    /// Directory (relative to the site root) where reports are written
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
}

fn default_include_external() -> bool {
    false
}

fn default_link_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("webaudit/{}", env!("CARGO_PKG_VERSION"))
}

fn default_slow_load_ms() -> u64 {
    3000
}

fn default_dom_warning() -> usize {
    1000
}

fn default_viewport_width() -> u32 {
    1200
}

fn default_mobile_breakpoint() -> u32 {
    768
}

fn default_report_dir() -> String {
    "reports".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            include_external: default_include_external(),
            link_timeout_secs: default_link_timeout_secs(),
            user_agent: default_user_agent(),
            slow_load_ms: default_slow_load_ms(),
            dom_warning: default_dom_warning(),
            viewport_width: default_viewport_width(),
            mobile_breakpoint: default_mobile_breakpoint(),
            report_dir: default_report_dir(),
        }
    }
}
