//! CLI command implementations

pub mod audit;
pub mod images;
pub mod init;
pub mod links;
pub mod perf;
pub mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use url::Url;

use webaudit::config::Config;
use webaudit::runner::AuditRunner;

/// Options shared by every subcommand
pub struct CommandOptions {
    pub work_dir: PathBuf,
    pub config: Option<PathBuf>,
    pub page: Option<PathBuf>,
    pub base_url: Option<String>,
}

impl CommandOptions {
    /// Load config from the explicit path or the site root
    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::from_file(path),
            None => Config::from_dir(&self.work_dir),
        }
    }

    /// Build a runner for the audited site, echoing the log to stdout
    fn build_runner(&self) -> Result<AuditRunner> {
        anyhow::ensure!(
            self.work_dir.is_dir(),
            "site root is not a directory: {}",
            self.work_dir.display()
        );

        let config = self.load_config()?;
        let mut runner = AuditRunner::new(&self.work_dir, config).echo_log();

        if let Some(page) = &self.page {
            runner = runner.with_page(self.work_dir.join(page));
        }
        if let Some(base) = &self.base_url {
            let url = Url::parse(base).with_context(|| format!("Invalid base URL: {}", base))?;
            runner = runner.with_base_url(url);
        }

        Ok(runner)
    }
}

/// Render a PASS / fail badge for a broken-item count
fn badge(broken: usize, noun: &str) -> String {
    if broken == 0 {
        "PASS".to_string()
    } else {
        format!("{} {}", broken, noun)
    }
}
