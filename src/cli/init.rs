//! Init command implementation

use anyhow::{Result, bail};

use webaudit::config::CONFIG_FILE;

use super::CommandOptions;

/// Default configuration content for webaudit init
pub const DEFAULT_CONFIG: &str = r#"# webaudit configuration
#
# All values are optional; anything omitted falls back to the defaults
# shown here.

[settings]
# Also probe external (http/https) links instead of assuming them reachable
include_external = false

# Timeout for a single link probe, in seconds
link_timeout_secs = 5

# Load time above this (ms) triggers the "Optimize Page Load Time" advisory
slow_load_ms = 3000

# Element count above this triggers the "Reduce DOM Complexity" advisory
dom_warning = 1000

# Viewport width (px) the audit is assumed to run at; widths above
# mobile_breakpoint trigger the mobile responsiveness advisory
viewport_width = 1200
mobile_breakpoint = 768

# Directory (relative to the site root) where report files are written
report_dir = "reports"
"#;

/// Initialize a webaudit.toml configuration file in the site root
pub async fn init_command(opts: &CommandOptions, force: bool) -> Result<()> {
    let config_path = match &opts.config {
        Some(path) => path.clone(),
        None => opts.work_dir.join(CONFIG_FILE),
    };

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use webaudit::config::Config;

    #[test]
    fn default_config_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.settings.slow_load_ms, 3000);
        assert_eq!(config.settings.report_dir, "reports");
    }
}
